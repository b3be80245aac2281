use std::fmt;

use serde::Serialize;
use serde_json::{Map, Number, Value};

use crate::ModelError;

/// Launch delay of a queue entry.
///
/// Older Marathon versions report the delay as a bare number of seconds;
/// newer ones return an object such as `{"timeLeftSeconds": 12, "overdue": false}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Delay {
    /// Delay in seconds.
    Seconds(Number),
    /// Delay as reported in text form.
    Text(String),
    /// Structured delay object.
    Detail(Map<String, Value>),
}

impl Delay {
    /// Build a delay from the `delay` field of a queue entry.
    pub fn from_value(value: &Value) -> Result<Self, ModelError> {
        match value {
            Value::Null => Err(ModelError::MissingField("delay")),
            Value::Number(n) => Ok(Delay::Seconds(n.clone())),
            Value::String(s) => Ok(Delay::Text(s.clone())),
            Value::Object(m) => Ok(Delay::Detail(m.clone())),
            other => Err(ModelError::invalid(
                "delay",
                format!("expected a number, string or object, got {other}"),
            )),
        }
    }

    /// Remaining delay in whole seconds, when it can be determined.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Delay::Seconds(n) => n.as_u64(),
            Delay::Text(s) => s.trim().parse().ok(),
            Delay::Detail(m) => m.get("timeLeftSeconds").and_then(Value::as_u64),
        }
    }

    /// Whether Marathon marks the launch as overdue. Only structured delays carry this flag.
    pub fn is_overdue(&self) -> Option<bool> {
        match self {
            Delay::Detail(m) => m.get("overdue").and_then(Value::as_bool),
            _ => None,
        }
    }
}

impl fmt::Display for Delay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delay::Seconds(n) => write!(f, "{n}"),
            Delay::Text(s) => f.write_str(s),
            Delay::Detail(m) => match m.get("timeLeftSeconds") {
                Some(left) => write!(f, "{left}"),
                None => write!(f, "{}", Value::Object(m.clone())),
            },
        }
    }
}
