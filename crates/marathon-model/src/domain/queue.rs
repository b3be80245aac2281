use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::fields::Fields;
use crate::{App, Delay, ModelError};

const FIELDS: &[&str] = &["app", "delay"];

/// Entry of the Marathon launch queue: an app waiting to be launched and its retry delay.
///
/// See <https://mesosphere.github.io/marathon/docs/rest-api.html#queue>.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct Queue {
    app: App,
    delay: Delay,
}

impl Queue {
    /// Build a queue entry from one element of the `queue` array.
    ///
    /// The embedded app is parsed read-only; its errors propagate unchanged.
    pub fn from_value(value: &Value) -> Result<Self, ModelError> {
        let fields = Fields::decode(value, FIELDS)?;
        let delay = Delay::from_value(fields.value("delay")?)?;
        let app = App::from_value(fields.value("app")?, true)?;
        Ok(Self { app, delay })
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn delay(&self) -> &Delay {
        &self.delay
    }

    /// JSON text of the entry (`app` and `delay`).
    pub fn to_json(&self) -> String {
        serde_json::json!({
            "app": &self.app,
            "delay": &self.delay,
        })
        .to_string()
    }
}

impl TryFrom<Value> for Queue {
    type Error = ModelError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(&value)
    }
}

impl fmt::Display for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Queue {{ app_id: {}, delay: {} }}",
            self.app.id(),
            self.delay
        )
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn builds_entry_with_embedded_app() {
        let q = Queue::from_value(&json!({ "app": { "id": "/a", "instances": 1 }, "delay": 5 })).unwrap();

        assert_eq!(q.app().id(), "/a");
        assert!(q.app().read_only());
        assert_eq!(q.delay().as_u64(), Some(5));
        assert_eq!(q.to_string(), "Queue { app_id: /a, delay: 5 }");
    }

    #[test]
    fn missing_fields_are_rejected() {
        assert_eq!(
            Queue::from_value(&json!({ "delay": 5 })),
            Err(ModelError::MissingField("app"))
        );
        assert_eq!(
            Queue::from_value(&json!({ "app": { "id": "/a" } })),
            Err(ModelError::MissingField("delay"))
        );
        assert_eq!(
            Queue::from_value(&json!({ "app": { "id": "/a" }, "delay": null })),
            Err(ModelError::MissingField("delay"))
        );
    }

    #[test]
    fn app_errors_propagate() {
        assert_eq!(
            Queue::from_value(&json!({ "app": {}, "delay": 1 })),
            Err(ModelError::MissingField("id"))
        );
        assert_eq!(
            Queue::from_value(&json!({ "app": [], "delay": 1 })),
            Err(ModelError::NotAnObject)
        );
    }

    #[test]
    fn json_contains_app_and_delay() {
        let raw = json!({ "app": { "id": "/a" }, "delay": { "overdue": true } });
        let q = Queue::from_value(&raw).unwrap();

        let back: Value = serde_json::from_str(&q.to_json()).unwrap();
        assert_eq!(back, raw);

        let q2: Queue = serde_json::from_value(back).unwrap();
        assert_eq!(q2, q);
    }
}
