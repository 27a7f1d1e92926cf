//! Publish format mapping

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::PACKAGED_FORMAT;

/// How an app is delivered, which decides the publish body field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishFormat {
    /// Zip package uploaded through validation.
    Packaged,
    /// Hosted app described by a manifest URL.
    Hosted,
}

impl PublishFormat {
    /// Body field that carries the validation id.
    pub fn body_field(self) -> &'static str {
        match self {
            Self::Packaged => "upload",
            Self::Hosted => "manifest",
        }
    }

    /// Publish request body for a finished validation.
    pub fn request_body(self, validation_id: &str) -> Value {
        let mut body = Map::new();
        body.insert(self.body_field().to_string(), Value::String(validation_id.to_string()));
        Value::Object(body)
    }
}

/// Only the exact tag `"packaged"` selects a packaged publish; every other
/// tag is treated as hosted.
impl From<&str> for PublishFormat {
    fn from(tag: &str) -> Self {
        if tag == PACKAGED_FORMAT {
            Self::Packaged
        } else {
            Self::Hosted
        }
    }
}
