use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ModelError;

const POSITIONS: [&str; 3] = ["attribute", "operator", "parameter"];

/// Placement constraint of a Marathon app.
///
/// On the wire a constraint is a positional array: `[attribute, operator]` or `[attribute, operator, parameter]`.
/// See <https://mesosphere.github.io/marathon/docs/constraints.html> for the operators Marathon understands.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Vec<String>")]
pub struct Constraint {
    attribute: String,
    operator: String,
    parameter: Option<String>,
}

impl Constraint {
    /// Create a constraint from its parts.
    pub fn new<A, O>(attribute: A, operator: O, parameter: Option<String>) -> Self
    where
        A: Into<String>,
        O: Into<String>,
    {
        Self {
            attribute: attribute.into(),
            operator: operator.into(),
            parameter,
        }
    }

    /// Build a constraint from the array returned by the API.
    ///
    /// Fails when `value` is not an array, when it does not hold exactly 2 or 3 elements,
    /// or when an element is not a string. A trailing `null` parameter counts as absent.
    pub fn from_value(value: &Value) -> Result<Self, ModelError> {
        let items = value.as_array().ok_or(ModelError::NotAnArray)?;
        let len = items.len();
        if !(2..=3).contains(&len) {
            return Err(ModelError::Arity { len });
        }

        let present = match items.last() {
            Some(Value::Null) if len == 3 => &items[..2],
            _ => &items[..],
        };
        let mut parts = present
            .iter()
            .zip(POSITIONS)
            .map(|(item, field)| {
                item.as_str()
                    .map(str::to_owned)
                    .ok_or_else(|| ModelError::invalid(field, format!("expected a string, got {item}")))
            })
            .collect::<Result<Vec<_>, _>>()?
            .into_iter();

        match (parts.next(), parts.next(), parts.next()) {
            (Some(attribute), Some(operator), parameter) => Ok(Self {
                attribute,
                operator,
                parameter,
            }),
            _ => Err(ModelError::Arity { len }),
        }
    }

    /// Agent attribute the constraint applies to (e.g. `"hostname"`).
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// Constraint operator (e.g. `"UNIQUE"`, `"CLUSTER"`, `"LIKE"`).
    pub fn operator(&self) -> &str {
        &self.operator
    }

    /// Operator parameter, absent for two-element constraints.
    pub fn parameter(&self) -> Option<&str> {
        self.parameter.as_deref()
    }

    /// Positional array form, as sent to and returned by the API.
    pub fn to_value(&self) -> Value {
        Value::from(Vec::<String>::from(self.clone()))
    }

    /// JSON text of [`Constraint::to_value`].
    pub fn to_json(&self) -> String {
        self.to_value().to_string()
    }
}

impl TryFrom<Value> for Constraint {
    type Error = ModelError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(&value)
    }
}

impl From<Constraint> for Vec<String> {
    fn from(c: Constraint) -> Self {
        let mut out = vec![c.attribute, c.operator];
        out.extend(c.parameter);
        out
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.parameter {
            Some(parameter) => write!(
                f,
                "Constraint {{ attribute: {}, operator: {}, parameter: {} }}",
                self.attribute, self.operator, parameter
            ),
            None => write!(
                f,
                "Constraint {{ attribute: {}, operator: {} }}",
                self.attribute, self.operator
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn two_elements_have_no_parameter() {
        let c = Constraint::from_value(&json!(["hostname", "UNIQUE"])).unwrap();

        assert_eq!(c.attribute(), "hostname");
        assert_eq!(c.operator(), "UNIQUE");
        assert!(c.parameter().is_none());

        let text = c.to_string();
        assert_eq!(text, "Constraint { attribute: hostname, operator: UNIQUE }");
        assert!(!text.contains("parameter"));
    }

    #[test]
    fn three_elements_carry_parameter() {
        let c = Constraint::from_value(&json!(["rack_id", "LIKE", "rack-[1-3]"])).unwrap();

        assert_eq!(c.attribute(), "rack_id");
        assert_eq!(c.operator(), "LIKE");
        assert_eq!(c.parameter(), Some("rack-[1-3]"));
        assert_eq!(
            c.to_string(),
            "Constraint { attribute: rack_id, operator: LIKE, parameter: rack-[1-3] }"
        );
    }

    #[test]
    fn non_array_input_is_rejected() {
        for value in [json!("hostname"), json!({ "attribute": "hostname" }), json!(3), Value::Null] {
            assert_eq!(Constraint::from_value(&value), Err(ModelError::NotAnArray));
        }
    }

    #[test]
    fn wrong_arity_is_rejected() {
        assert_eq!(
            Constraint::from_value(&json!(["hostname"])),
            Err(ModelError::Arity { len: 1 })
        );
        assert_eq!(
            Constraint::from_value(&json!(["a", "b", "c", "d"])),
            Err(ModelError::Arity { len: 4 })
        );
        assert_eq!(
            Constraint::from_value(&json!([])),
            Err(ModelError::Arity { len: 0 })
        );
    }

    #[test]
    fn null_parameter_counts_as_absent() {
        let c = Constraint::from_value(&json!(["hostname", "UNIQUE", null])).unwrap();

        assert!(c.parameter().is_none());
        assert_eq!(c, Constraint::new("hostname", "UNIQUE", None));
        assert_eq!(c.to_json(), r#"["hostname","UNIQUE"]"#);

        let err = Constraint::from_value(&json!(["hostname", null, "x"])).unwrap_err();
        assert!(matches!(err, ModelError::InvalidField { ref field, .. } if field == "operator"));
    }

    #[test]
    fn non_string_element_is_rejected() {
        let err = Constraint::from_value(&json!(["hostname", "MAX_PER", 2])).unwrap_err();
        assert!(matches!(err, ModelError::InvalidField { ref field, .. } if field == "parameter"));
    }

    #[test]
    fn serialized_form_rebuilds_same_constraint() {
        let cases = [
            Constraint::new("hostname", "CLUSTER", Some("a.example.com".to_string())),
            Constraint::new("hostname", "UNIQUE", None),
        ];

        for c in cases {
            let back = Constraint::from_value(&c.to_value()).unwrap();
            assert_eq!(back.attribute(), c.attribute());
            assert_eq!(back.operator(), c.operator());
            assert_eq!(back.parameter(), c.parameter());

            let back: Constraint = serde_json::from_str(&c.to_json()).unwrap();
            assert_eq!(back, c);
        }
    }

    #[test]
    fn serializes_as_positional_array() {
        let c = Constraint::new("hostname", "UNIQUE", None);
        assert_eq!(c.to_json(), r#"["hostname","UNIQUE"]"#);
        assert_eq!(serde_json::to_value(&c).unwrap(), json!(["hostname", "UNIQUE"]));
    }

    #[test]
    fn serde_deserialize_reports_model_error() {
        let err = serde_json::from_str::<Constraint>(r#""hostname""#).unwrap_err();
        assert!(err.to_string().contains("expected a JSON array"));
    }
}
