use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::FieldParseError;

macro_rules! choice_enum {
    ($name:ident, $field:literal, { $($variant:ident => $wire:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = FieldParseError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                let normalized = raw.trim().to_ascii_lowercase();
                match normalized.as_str() {
                    $($wire => Ok($name::$variant),)+
                    _ => Err(FieldParseError::new($field, raw)),
                }
            }
        }
    };
}

choice_enum!(Sex, "sex", {
    Male => "male",
    Female => "female",
});

choice_enum!(Smoker, "smoker", {
    Yes => "yes",
    No => "no",
});

choice_enum!(Region, "region", {
    Northeast => "northeast",
    Northwest => "northwest",
    Southeast => "southeast",
    Southwest => "southwest",
});

impl Smoker {
    pub fn is_smoker(self) -> bool {
        self == Smoker::Yes
    }
}

/// The six inputs of the quote form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Age,
    Sex,
    Bmi,
    Children,
    Smoker,
    Region,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Age,
        FormField::Sex,
        FormField::Bmi,
        FormField::Children,
        FormField::Smoker,
        FormField::Region,
    ];

    /// Stable element id, also the JSON key of the field.
    pub fn id(self) -> &'static str {
        match self {
            FormField::Age => "age",
            FormField::Sex => "sex",
            FormField::Bmi => "bmi",
            FormField::Children => "children",
            FormField::Smoker => "smoker",
            FormField::Region => "region",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Age => "Age",
            FormField::Sex => "Sex",
            FormField::Bmi => "BMI",
            FormField::Children => "Children",
            FormField::Smoker => "Smoker",
            FormField::Region => "Region",
        }
    }

    /// Choices offered by select-style fields; `None` for free numeric input.
    pub fn choices(self) -> Option<Vec<&'static str>> {
        match self {
            FormField::Sex => Some(Sex::ALL.iter().map(|v| v.as_str()).collect()),
            FormField::Smoker => Some(Smoker::ALL.iter().map(|v| v.as_str()).collect()),
            FormField::Region => Some(Region::ALL.iter().map(|v| v.as_str()).collect()),
            FormField::Age | FormField::Bmi | FormField::Children => None,
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
