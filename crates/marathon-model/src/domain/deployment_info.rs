use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ModelError;
use crate::fields::Fields;

const FIELDS: &[&str] = &["deploymentId", "version"];

/// Handle returned by Marathon for an asynchronous deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "Value")]
pub struct DeploymentInfo {
    /// Deployment identifier.
    deployment_id: String,
    /// App or group version produced by the deployment.
    version: String,
}

impl DeploymentInfo {
    /// Build deployment info from a decoded API response.
    ///
    /// Only `deploymentId` and `version` are read; other keys are ignored.
    pub fn from_value(value: &Value) -> Result<Self, ModelError> {
        let fields = Fields::decode(value, FIELDS)?;
        Ok(Self {
            deployment_id: fields.string("deploymentId")?,
            version: fields.string("version")?,
        })
    }

    pub fn deployment_id(&self) -> &str {
        &self.deployment_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// JSON text with the API's field names.
    pub fn to_json(&self) -> String {
        serde_json::json!({
            "deploymentId": self.deployment_id,
            "version": self.version,
        })
        .to_string()
    }
}

impl TryFrom<Value> for DeploymentInfo {
    type Error = ModelError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(&value)
    }
}

impl fmt::Display for DeploymentInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DeploymentInfo {{ deployment_id: {}, version: {} }}",
            self.deployment_id, self.version
        )
    }
}
