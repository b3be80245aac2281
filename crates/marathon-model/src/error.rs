use thiserror::Error;

/// Invalid-argument error raised while building a model value from API data.
///
/// Every variant is raised at construction time; a value is either fully valid or never returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("invalid argument: expected a JSON array")]
    NotAnArray,

    #[error("invalid argument: expected a JSON object")]
    NotAnObject,

    #[error(
        "invalid argument: constraint must be [attribute, operator, parameter] where only parameter is optional, got {len} elements"
    )]
    Arity { len: usize },

    #[error("invalid argument: {0} must not be null")]
    MissingField(&'static str),

    #[error("invalid argument: {field}: {reason}")]
    InvalidField { field: String, reason: String },
}

impl ModelError {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ModelError::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
