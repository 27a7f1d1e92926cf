//! Validation job and package upload payloads

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Map, Value};

use crate::constants::PACKAGE_MIME_TYPE;
use crate::errors::{MarketplaceError, Result};
use crate::types::http::ResponseBody;

/// The service's record of one validation attempt.
///
/// Only `processed` drives the workflow. A string or numeric `id` is lifted
/// out; everything else the service reports (including an `id` of any other
/// shape) is kept verbatim in `details`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationJob {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub processed: bool,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl ValidationJob {
    /// Interpret a response body as a validation job.
    ///
    /// Any JSON object is a job. `processed` follows JSON truthiness: `true`,
    /// non-zero numbers, non-empty strings, arrays and objects count as
    /// processed; a missing flag, `null`, `false`, `0` and `""` do not.
    /// Returns `None` when the body is not a JSON object.
    pub fn from_body(body: &ResponseBody) -> Option<Self> {
        let Value::Object(mut fields) = body.to_json()? else {
            return None;
        };

        let processed = fields.remove("processed").is_some_and(|flag| is_truthy(&flag));
        let id = match fields.remove("id") {
            Some(Value::String(text)) => Some(text),
            Some(Value::Number(number)) => Some(number.to_string()),
            Some(other) => {
                fields.insert("id".to_string(), other);
                None
            }
            None => None,
        };

        Some(Self { id, processed, details: fields })
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Body of a `202 Accepted` package submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionAck {
    #[serde(deserialize_with = "required_id")]
    pub id: String,
}

impl SubmissionAck {
    /// Extract the job id from an acceptance body.
    ///
    /// # Errors
    ///
    /// Returns `MarketplaceError::InvalidResponse` if the body carries no id.
    pub fn from_body(body: &ResponseBody) -> Result<Self> {
        let value = body.to_json().ok_or_else(|| {
            MarketplaceError::InvalidResponse("accepted submission body is not JSON".into())
        })?;
        serde_json::from_value(value).map_err(|e| {
            MarketplaceError::InvalidResponse(format!(
                "accepted submission does not identify a validation: {e}"
            ))
        })
    }
}

/// `upload` object of a package submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageUpload {
    #[serde(rename = "type")]
    pub mime_type: String,
    pub name: String,
    /// Standard base64 of the package bytes.
    pub data: String,
}

impl PackageUpload {
    pub fn zip(name: impl Into<String>, base64_data: impl Into<String>) -> Self {
        Self {
            mime_type: PACKAGE_MIME_TYPE.to_string(),
            name: name.into(),
            data: base64_data.into(),
        }
    }

    /// Full submission body: `{"upload": {...}}`.
    pub fn into_request_body(self) -> Value {
        json!({ "upload": self })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(text) => text,
            RawId::Number(number) => number.to_string(),
        }
    }
}

fn required_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(RawId::deserialize(deserializer)?.into())
}
