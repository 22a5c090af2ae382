//! HTTP-proxy-shaped request and response types.
//!
//! These mirror the proxy integration event the function gateway delivers
//! and the response object it expects back. Field names follow the wire
//! format (`pathParameters`, `statusCode`, `isBase64Encoded`, ...).

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Deserializer, Serialize};

/// Path parameter carrying the escaped, space-separated search terms.
pub const KEYWORD_PARAM: &str = "keyword";

/// Path parameter carrying the 1-based page index.
pub const PAGE_PARAM: &str = "id";

/// Inbound proxy request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub http_method: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub path: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub headers: HashMap<String, String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub path_parameters: HashMap<String, String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub query_string_parameters: HashMap<String, String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

impl GatewayRequest {
    /// A GET request carrying the two search path parameters.
    pub fn search(keyword: impl Into<String>, page: impl Into<String>) -> Self {
        let mut path_parameters = HashMap::new();
        path_parameters.insert(KEYWORD_PARAM.to_string(), keyword.into());
        path_parameters.insert(PAGE_PARAM.to_string(), page.into());
        Self {
            http_method: "GET".to_string(),
            path_parameters,
            ..Default::default()
        }
    }

    pub fn path_parameter(&self, name: &str) -> Option<&str> {
        self.path_parameters.get(name).map(String::as_str)
    }
}

/// Outbound proxy response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub status_code: u16,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

impl GatewayResponse {
    pub fn new(status_code: u16) -> Self {
        Self {
            status_code,
            ..Default::default()
        }
    }

    pub fn with_body(mut self, body: String) -> Self {
        self.body = body;
        self
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_string(), value.to_string());
        self
    }
}

// The gateway sends `null` rather than omitting empty maps.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserializes_proxy_event() {
        let event = r#"{
            "httpMethod": "GET",
            "path": "/tags/search/red%20blue/1",
            "headers": {"Accept": "application/json"},
            "pathParameters": {"keyword": "red%20blue", "id": "1"},
            "queryStringParameters": null,
            "body": null,
            "isBase64Encoded": false
        }"#;

        let request: GatewayRequest = serde_json::from_str(event).unwrap();
        assert_eq!(request.http_method, "GET");
        assert_eq!(request.path_parameter(KEYWORD_PARAM), Some("red%20blue"));
        assert_eq!(request.path_parameter(PAGE_PARAM), Some("1"));
        assert!(request.query_string_parameters.is_empty());
        assert!(request.body.is_none());
    }

    #[test]
    fn test_request_tolerates_missing_fields() {
        let request: GatewayRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request, GatewayRequest::default());
    }

    #[test]
    fn test_request_null_path_parameters() {
        let request: GatewayRequest =
            serde_json::from_str(r#"{"pathParameters": null}"#).unwrap();
        assert!(request.path_parameter(KEYWORD_PARAM).is_none());
    }

    #[test]
    fn test_response_serializes_wire_names() {
        let response = GatewayResponse::new(200)
            .with_body("{}".to_string())
            .with_header("Content-Type", "application/json");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "statusCode": 200,
                "headers": {"Content-Type": "application/json"},
                "body": "{}",
                "isBase64Encoded": false
            })
        );
    }
}
