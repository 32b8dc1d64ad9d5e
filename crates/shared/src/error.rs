use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field} value: {value:?}")]
pub struct FieldParseError {
    pub field: &'static str,
    pub value: String,
}

impl FieldParseError {
    pub fn new(field: &'static str, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}
