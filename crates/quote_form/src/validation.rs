use std::{collections::BTreeMap, fmt, ops::RangeInclusive};

use shared::{domain::FormField, protocol::QuoteRequest};
use thiserror::Error;

use crate::collect::{read_number, DraftValue, QuoteDraft};

/// Ages covered by the training data.
pub const AGE_RANGE: RangeInclusive<f64> = 18.0..=64.0;
/// BMI values covered by the training data.
pub const BMI_RANGE: RangeInclusive<f64> = 15.96..=53.13;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Missing(FormField),
    #[error("{field} has an invalid value: {value:?}")]
    Invalid { field: FormField, value: String },
    #[error("{0} must not be negative")]
    Negative(FormField),
    #[error("{0} must be a whole number")]
    Fractional(FormField),
}

impl FieldError {
    pub fn field(&self) -> FormField {
        match self {
            FieldError::Missing(field)
            | FieldError::Negative(field)
            | FieldError::Fractional(field) => *field,
            FieldError::Invalid { field, .. } => *field,
        }
    }
}

/// Every blocking problem found in one submission attempt, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn fields(&self) -> Vec<FormField> {
        self.0.iter().map(FieldError::field).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Please fix the following: ")?;
        for (idx, err) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

pub fn validate_required(draft: &QuoteDraft) -> Result<QuoteRequest, ValidationErrors> {
    let mut errors = Vec::new();

    let age = whole_number(FormField::Age, &draft.age, &mut errors);
    let sex = choice(FormField::Sex, &draft.sex, &mut errors);
    let bmi = non_negative(FormField::Bmi, &draft.bmi, &mut errors);
    let children = whole_number(FormField::Children, &draft.children, &mut errors);
    let smoker = choice(FormField::Smoker, &draft.smoker, &mut errors);
    let region = choice(FormField::Region, &draft.region, &mut errors);

    match (age, sex, bmi, children, smoker, region) {
        (Some(age), Some(sex), Some(bmi), Some(children), Some(smoker), Some(region))
            if errors.is_empty() =>
        {
            Ok(QuoteRequest {
                age,
                sex,
                bmi,
                children,
                smoker,
                region,
            })
        }
        _ => Err(ValidationErrors(errors)),
    }
}

fn choice<T: Copy>(
    field: FormField,
    value: &DraftValue<T>,
    errors: &mut Vec<FieldError>,
) -> Option<T> {
    match value {
        DraftValue::Present(value) => Some(*value),
        DraftValue::Missing => {
            errors.push(FieldError::Missing(field));
            None
        }
        DraftValue::Invalid(raw) => {
            errors.push(FieldError::Invalid {
                field,
                value: raw.clone(),
            });
            None
        }
    }
}

fn non_negative(
    field: FormField,
    value: &DraftValue<f64>,
    errors: &mut Vec<FieldError>,
) -> Option<f64> {
    let value = choice(field, value, errors)?;
    if value < 0.0 {
        errors.push(FieldError::Negative(field));
        return None;
    }
    Some(value)
}

fn whole_number(
    field: FormField,
    value: &DraftValue<f64>,
    errors: &mut Vec<FieldError>,
) -> Option<u32> {
    let value = non_negative(field, value, errors)?;
    if value.fract() != 0.0 || value > f64::from(u32::MAX) {
        errors.push(FieldError::Fractional(field));
        return None;
    }
    Some(value as u32)
}

#[derive(Debug, Clone, PartialEq)]
pub struct RangeWarning {
    pub field: FormField,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

impl fmt::Display for RangeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} is outside the trained range ({}-{}); the estimate may be less reliable.",
            self.field, self.value, self.min, self.max
        )
    }
}

/// Soft check against the training data bounds. Only age and BMI have one.
pub fn validate_range(field: FormField, value: f64) -> Option<RangeWarning> {
    let range = match field {
        FormField::Age => AGE_RANGE,
        FormField::Bmi => BMI_RANGE,
        _ => return None,
    };
    if range.contains(&value) {
        return None;
    }
    Some(RangeWarning {
        field,
        value,
        min: *range.start(),
        max: *range.end(),
    })
}

/// Inline warnings, at most one per field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RangeWarnings {
    slots: BTreeMap<FormField, RangeWarning>,
}

impl RangeWarnings {
    /// Re-checks `raw` for `field`, replacing or clearing its slot.
    pub fn check(&mut self, field: FormField, raw: &str) -> Option<&RangeWarning> {
        let warning = read_number(raw)
            .present()
            .and_then(|value| validate_range(field, *value));
        match warning {
            Some(warning) => {
                self.slots.insert(field, warning);
            }
            None => {
                self.slots.remove(&field);
            }
        }
        self.slots.get(&field)
    }

    pub fn get(&self, field: FormField) -> Option<&RangeWarning> {
        self.slots.get(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RangeWarning> {
        self.slots.values()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

#[cfg(test)]
#[path = "tests/validation_tests.rs"]
mod tests;
