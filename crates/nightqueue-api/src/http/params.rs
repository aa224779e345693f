//! Request parameter extraction.
//!
//! Nightbot's `$(urlfetch)` passes everything in the query string, while
//! webhook-style callers POST a JSON body. Both shapes land in
//! [`RequestParams`]; body values win when both are present.

use axum::http::{header, HeaderMap};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::ApiError;

/// User name used when the caller does not send one.
pub const ANONYMOUS: &str = "anonymous";

/// Parameters accepted by the queue routes.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct RequestParams {
    #[serde(default, deserialize_with = "lenient_string")]
    pub user: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub message: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub position: Option<String>,
}

/// Accept any JSON value; non-strings are kept as their JSON text and `null` as absent.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

impl RequestParams {
    /// Build from decoded query pairs. The first occurrence of a key wins.
    pub fn from_query(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "user" => &mut params.user,
                "message" => &mut params.message,
                "position" => &mut params.position,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }

    /// Fill fields missing from `self` with the ones from `fallback`.
    pub fn or(self, fallback: RequestParams) -> Self {
        Self {
            user: self.user.or(fallback.user),
            message: self.message.or(fallback.message),
            position: self.position.or(fallback.position),
        }
    }

    /// Caller name; blank or missing becomes `anonymous`.
    pub fn user(&self) -> &str {
        self.user
            .as_deref()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or(ANONYMOUS)
    }

    /// Raw chat message, empty when missing.
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }

    /// Raw position text, empty when missing.
    pub fn position(&self) -> &str {
        self.position.as_deref().unwrap_or("")
    }
}

/// Parse a JSON body when the request declares one. Other bodies are ignored.
pub fn parse_json_body(headers: &HeaderMap, body: &[u8]) -> Result<RequestParams, ApiError> {
    if !is_json(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(RequestParams::default());
    }
    Ok(serde_json::from_slice(body)?)
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|mime| {
            let mime = mime.trim();
            mime.eq_ignore_ascii_case("application/json") || mime.ends_with("+json")
        })
}
