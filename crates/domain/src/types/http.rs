//! Request and response envelopes exchanged with the request executor

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{MarketplaceError, Result};

/// HTTP methods used by the marketplace API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single call to be signed and sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiRequest {
    pub method: HttpMethod,
    /// Absolute URL.
    pub url: String,
    /// JSON payload, serialized as the request body when present.
    pub body: Option<Value>,
    /// Whether the call declares JSON. Declared calls get their response
    /// payload parsed; undeclared ones return it verbatim.
    pub expects_json: bool,
}

impl ApiRequest {
    /// GET whose response is returned as raw text.
    pub fn get(url: impl Into<String>) -> Self {
        Self { method: HttpMethod::Get, url: url.into(), body: None, expects_json: false }
    }

    /// GET whose response is parsed as JSON.
    pub fn get_json(url: impl Into<String>) -> Self {
        Self { method: HttpMethod::Get, url: url.into(), body: None, expects_json: true }
    }

    /// POST carrying a JSON body.
    pub fn post_json(url: impl Into<String>, body: Value) -> Self {
        Self { method: HttpMethod::Post, url: url.into(), body: Some(body), expects_json: true }
    }
}

/// Response body as delivered to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

impl ResponseBody {
    /// Build a body from a raw payload.
    ///
    /// JSON-declared payloads that fail to parse are kept as text, so a
    /// plain-text error page from a proxy still reaches the caller.
    pub fn from_payload(payload: String, expects_json: bool) -> Self {
        if expects_json {
            match serde_json::from_str(&payload) {
                Ok(value) => Self::Json(value),
                Err(_) => Self::Text(payload),
            }
        } else {
            Self::Text(payload)
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Json(_) => None,
        }
    }

    /// JSON view of the body, parsing text bodies on demand.
    pub fn to_json(&self) -> Option<Value> {
        match self {
            Self::Json(value) => Some(value.clone()),
            Self::Text(text) => serde_json::from_str(text).ok(),
        }
    }

    /// Consume the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns `MarketplaceError::InvalidResponse` if a text body is not valid JSON.
    pub fn into_json(self) -> Result<Value> {
        match self {
            Self::Json(value) => Ok(value),
            Self::Text(text) => serde_json::from_str(&text).map_err(|e| {
                MarketplaceError::InvalidResponse(format!("response body is not JSON: {e}"))
            }),
        }
    }
}

/// Outcome of a completed HTTP exchange, whatever its status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: u16,
    pub body: ResponseBody,
}

impl ApiResponse {
    pub fn new(status: u16, body: ResponseBody) -> Self {
        Self { status, body }
    }

    pub fn is_accepted(&self) -> bool {
        self.status == 202
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn declared_json_payload_is_parsed() {
        let body = ResponseBody::from_payload(r#"{"id":"42"}"#.into(), true);
        assert_eq!(body, ResponseBody::Json(json!({"id": "42"})));
    }

    #[test]
    fn undeclared_payload_stays_raw() {
        let body = ResponseBody::from_payload(r#"{"id":"42"}"#.into(), false);
        assert_eq!(body.as_text(), Some(r#"{"id":"42"}"#));
        assert_eq!(body.to_json(), Some(json!({"id": "42"})));
    }

    #[test]
    fn unparsable_declared_payload_falls_back_to_text() {
        let body = ResponseBody::from_payload("<html>Bad Gateway</html>".into(), true);
        assert_eq!(body.as_text(), Some("<html>Bad Gateway</html>"));
        assert!(matches!(body.into_json(), Err(MarketplaceError::InvalidResponse(_))));
    }

    #[test]
    fn request_constructors() {
        let get = ApiRequest::get("https://x/a/");
        assert_eq!(get.method, HttpMethod::Get);
        assert!(!get.expects_json);

        let post = ApiRequest::post_json("https://x/b/", json!({"manifest": "m"}));
        assert_eq!(post.method.to_string(), "POST");
        assert!(post.expects_json);
        assert_eq!(post.body, Some(json!({"manifest": "m"})));
    }
}
