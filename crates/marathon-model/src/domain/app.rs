use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::fields::Fields;
use crate::{AppId, Constraint, ModelError};

const FIELDS: &[&str] = &["id"];

/// Marathon application as embedded in other API responses.
///
/// Only the identifier is required; the full decoded object stays available through [`App::info`].
#[derive(Debug, Clone, PartialEq)]
pub struct App {
    id: AppId,
    read_only: bool,
    info: Map<String, Value>,
}

impl App {
    /// Build an app from a decoded API object.
    ///
    /// `read_only` marks snapshots (such as apps embedded in queue entries) that must not be sent back as updates.
    pub fn from_value(value: &Value, read_only: bool) -> Result<Self, ModelError> {
        let fields = Fields::decode(value, FIELDS)?;
        Ok(Self {
            id: fields.string("id")?,
            read_only,
            info: fields.object().clone(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn read_only(&self) -> bool {
        self.read_only
    }

    /// Raw decoded object.
    pub fn info(&self) -> &Map<String, Value> {
        &self.info
    }

    /// Requested instance count, if reported.
    pub fn instances(&self) -> Option<u64> {
        self.info.get("instances").and_then(Value::as_u64)
    }

    /// Placement constraints of the app. Absent or `null` means none.
    pub fn constraints(&self) -> Result<Vec<Constraint>, ModelError> {
        match self.info.get("constraints") {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(items)) => items.iter().map(Constraint::from_value).collect(),
            Some(other) => Err(ModelError::invalid(
                "constraints",
                format!("expected an array, got {other}"),
            )),
        }
    }
}

impl Serialize for App {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.info.serialize(serializer)
    }
}

impl fmt::Display for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "App {{ id: {} }}", self.id)
    }
}
