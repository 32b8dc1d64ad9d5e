//! Reads raw form text into a draft record. Never fails: anything missing or unparsable is
//! carried forward for the validator to report.

use std::str::FromStr;

use shared::domain::{FormField, Region, Sex, Smoker};

/// Raw text of every form field, as typed or selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub age: String,
    pub sex: String,
    pub bmi: String,
    pub children: String,
    pub smoker: String,
    pub region: String,
}

impl FormInput {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Age => &self.age,
            FormField::Sex => &self.sex,
            FormField::Bmi => &self.bmi,
            FormField::Children => &self.children,
            FormField::Smoker => &self.smoker,
            FormField::Region => &self.region,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Age => &mut self.age,
            FormField::Sex => &mut self.sex,
            FormField::Bmi => &mut self.bmi,
            FormField::Children => &mut self.children,
            FormField::Smoker => &mut self.smoker,
            FormField::Region => &mut self.region,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DraftValue<T> {
    Missing,
    Invalid(String),
    Present(T),
}

impl<T> DraftValue<T> {
    pub fn present(&self) -> Option<&T> {
        match self {
            DraftValue::Present(value) => Some(value),
            DraftValue::Missing | DraftValue::Invalid(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuoteDraft {
    pub age: DraftValue<f64>,
    pub sex: DraftValue<Sex>,
    pub bmi: DraftValue<f64>,
    pub children: DraftValue<f64>,
    pub smoker: DraftValue<Smoker>,
    pub region: DraftValue<Region>,
}

pub fn collect(input: &FormInput) -> QuoteDraft {
    QuoteDraft {
        age: read_number(&input.age),
        sex: read_choice(&input.sex),
        bmi: read_number(&input.bmi),
        children: read_number(&input.children),
        smoker: read_choice(&input.smoker),
        region: read_choice(&input.region),
    }
}

pub(crate) fn read_number(raw: &str) -> DraftValue<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return DraftValue::Missing;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => DraftValue::Present(value),
        _ => DraftValue::Invalid(trimmed.to_string()),
    }
}

fn read_choice<T: FromStr>(raw: &str) -> DraftValue<T> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return DraftValue::Missing;
    }
    trimmed
        .parse::<T>()
        .map(DraftValue::Present)
        .unwrap_or_else(|_| DraftValue::Invalid(trimmed.to_string()))
}
