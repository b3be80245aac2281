use serde_json::{Map, Value};

use crate::ModelError;

/// Recognized fields of a decoded API object.
///
/// Built from a per-type field list; every listed field is checked for presence before any accessor runs.
pub(crate) struct Fields<'a> {
    object: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    /// Check that `value` is an object and that every field in `required` is present and not `null`.
    ///
    /// Fields are checked in list order, so the error names the first missing one.
    pub(crate) fn decode(value: &'a Value, required: &[&'static str]) -> Result<Self, ModelError> {
        let object = value.as_object().ok_or(ModelError::NotAnObject)?;
        for field in required {
            if matches!(object.get(*field), None | Some(Value::Null)) {
                return Err(ModelError::MissingField(*field));
            }
        }
        Ok(Self { object })
    }

    pub(crate) fn value(&self, field: &'static str) -> Result<&'a Value, ModelError> {
        match self.object.get(field) {
            None | Some(Value::Null) => Err(ModelError::MissingField(field)),
            Some(value) => Ok(value),
        }
    }

    pub(crate) fn string(&self, field: &'static str) -> Result<String, ModelError> {
        let value = self.value(field)?;
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| ModelError::invalid(field, format!("expected a string, got {value}")))
    }

    pub(crate) fn object(&self) -> &'a Map<String, Value> {
        self.object
    }
}
