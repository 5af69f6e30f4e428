use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Stand-in endpoint the page talks to until a real shortening service exists.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/todos/1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RequestMethod {
    /// Bodyless GET against the endpoint.
    #[default]
    Get,
    /// POST with `{"originalUrl": ...}` as JSON body.
    Post,
}

/// How the `newUrl` field of a response is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResponseMode {
    /// Overwrite `newUrl` with the submitted URL.
    #[default]
    Echo,
    /// Use the `newUrl` returned by the service.
    Service,
}

/// Decoded service payload.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShortenResponse {
    pub new_url: Option<String>,
    /// Remaining fields of the JSON object, untouched.
    pub extra: Map<String, Value>,
}

impl ShortenResponse {
    /// Parses a JSON object. A non-string `newUrl` is treated as absent.
    pub fn from_json(bytes: &[u8]) -> Result<Self, ShortenError> {
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|err| ShortenError::new(FailureKind::MalformedPayload, err.to_string()))?;
        let Value::Object(mut extra) = value else {
            return Err(ShortenError::new(
                FailureKind::MalformedPayload,
                "expected a JSON object",
            ));
        };
        let new_url = match extra.remove("newUrl") {
            Some(Value::String(url)) => Some(url),
            _ => None,
        };
        Ok(Self { new_url, extra })
    }

    /// The identifier, if present and non-empty.
    pub fn usable_new_url(&self) -> Option<&str> {
        self.new_url.as_deref().filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ShortenError {
    pub kind: FailureKind,
    pub message: String,
}

impl ShortenError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidEndpoint,
    HttpStatus(u16),
    Timeout,
    MalformedPayload,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidEndpoint => write!(f, "invalid endpoint"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::MalformedPayload => write!(f, "malformed payload"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_url_is_extracted_from_object() {
        let response = ShortenResponse::from_json(br#"{"newUrl":"abc","id":1}"#).unwrap();
        assert_eq!(response.usable_new_url(), Some("abc"));
        assert_eq!(response.extra.get("id"), Some(&Value::from(1)));
        assert!(!response.extra.contains_key("newUrl"));
    }

    #[test]
    fn empty_or_non_string_new_url_is_unusable() {
        let empty = ShortenResponse::from_json(br#"{"newUrl":""}"#).unwrap();
        assert_eq!(empty.usable_new_url(), None);
        let number = ShortenResponse::from_json(br#"{"newUrl":42}"#).unwrap();
        assert_eq!(number.new_url, None);
        let missing = ShortenResponse::from_json(b"{}").unwrap();
        assert_eq!(missing.usable_new_url(), None);
    }

    #[test]
    fn non_object_payload_is_malformed() {
        let err = ShortenResponse::from_json(b"[1,2]").unwrap_err();
        assert_eq!(err.kind, FailureKind::MalformedPayload);
        let err = ShortenResponse::from_json(b"<html>").unwrap_err();
        assert_eq!(err.kind, FailureKind::MalformedPayload);
    }
}
