//! Response shaping for tag search.
//!
//! All bodies go through [`encode_body`]: serde_json encoding followed by
//! HTML escaping, so the JSON can be embedded in markup safely.
//!
//! | Outcome | Status | Body |
//! |---------|--------|------|
//! | Success | 200 | `{"message":"OK","tags":[...]}` plus JSON/CORS headers |
//! | Parameter error | 501 | `{"message":"Parameter Error"}` |
//! | Store error | 501 | `{"message":"DB Connection Error"}` |
//! | Serialization error | 404 | empty |

use serde::Serialize;
use tracing::error;

use banchan_core::defaults::{MESSAGE_DB_CONNECTION_ERROR, MESSAGE_OK, MESSAGE_PARAMETER_ERROR};
use banchan_core::{Error, Result, Tag};

use crate::gateway::GatewayResponse;

pub const STATUS_OK: u16 = 200;
/// Returned for both rejected input and store failures.
pub const STATUS_NOT_IMPLEMENTED: u16 = 501;
pub const STATUS_NOT_FOUND: u16 = 404;

/// Headers attached to successful responses.
pub const SUCCESS_HEADERS: [(&str, &str); 4] = [
    ("Content-Type", "application/json"),
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Credentials", "true"),
    ("Access-Control-Allow-Methods", "GET"),
];

/// JSON body of a search response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseEnvelope<'a> {
    Success {
        message: &'static str,
        tags: &'a [Tag],
    },
    Failure {
        message: &'static str,
    },
}

impl<'a> ResponseEnvelope<'a> {
    pub fn success(tags: &'a [Tag]) -> Self {
        ResponseEnvelope::Success {
            message: MESSAGE_OK,
            tags,
        }
    }

    pub fn failure(message: &'static str) -> Self {
        ResponseEnvelope::Failure { message }
    }
}

/// Shape a successful search.
///
/// Falls back to [`serialization_failure`] if the tags cannot be encoded.
pub fn shape_success(tags: &[Tag]) -> GatewayResponse {
    match encode_body(&ResponseEnvelope::success(tags)) {
        Ok(body) => SUCCESS_HEADERS
            .iter()
            .fold(GatewayResponse::new(STATUS_OK), |response, (name, value)| {
                response.with_header(name, value)
            })
            .with_body(body),
        Err(e) => {
            error!(
                subsystem = "api",
                component = "response",
                error = %e,
                "Failed to encode search response"
            );
            serialization_failure()
        }
    }
}

/// Shape a failed search.
pub fn shape_error(err: &Error) -> GatewayResponse {
    let message = match err {
        Error::Serialization(_) => return serialization_failure(),
        Error::StoreConnection(_) | Error::StoreQuery(_) => MESSAGE_DB_CONNECTION_ERROR,
        Error::Parameter(_) | Error::Config(_) => MESSAGE_PARAMETER_ERROR,
    };

    let body = encode_body(&ResponseEnvelope::failure(message))
        .unwrap_or_else(|_| format!(r#"{{"message":"{}"}}"#, message));
    GatewayResponse::new(STATUS_NOT_IMPLEMENTED).with_body(body)
}

/// 404 with an empty body.
pub fn serialization_failure() -> GatewayResponse {
    GatewayResponse::new(STATUS_NOT_FOUND)
}

/// Encode `value` as JSON and HTML-escape the result.
pub fn encode_body<T: Serialize>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value)?;
    Ok(html_escape_json(&json))
}

/// Escape `<`, `>`, `&`, U+2028 and U+2029 as `\uXXXX` sequences.
///
/// Only valid inside JSON string literals, which is the only place these
/// characters can appear in serde_json output.
pub fn html_escape_json(json: &str) -> String {
    let mut escaped = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => escaped.push_str("\\u003c"),
            '>' => escaped.push_str("\\u003e"),
            '&' => escaped.push_str("\\u0026"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            _ => escaped.push(c),
        }
    }
    escaped
}
