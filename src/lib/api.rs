//! Transport-independent request model for JSON APIs. Feature clients describe
//! requests with [`ApiRequest`] and send them through a [`Transport`]; the
//! browser implementation lives in `http.rs`, tests plug in fakes.

use crate::app_lib::errors::ApiError;
use serde_json::Value;
use url::form_urlencoded;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// One JSON request, relative to the transport's base URL unless `path` is
/// already absolute.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>, body: Option<Value>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path, None)
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::Post, path, Some(body))
    }

    pub fn patch(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::Patch, path, Some(body))
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path, None)
    }

    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }
}

const JSON: &str = "application/json";

/// Headers for `request`. `Content-Type` is only sent with a body; on a
/// bodyless cross-origin GET it would trigger a CORS preflight.
pub fn headers_for(request: &ApiRequest) -> Vec<(&'static str, &'static str)> {
    let mut headers = vec![("Accept", JSON)];
    if request.body.is_some() {
        headers.push(("Content-Type", JSON));
    }
    headers
}

/// Sends a request and yields the decoded response body. Implementations must
/// map every failure (network, timeout, non-2xx) into an [`ApiError`].
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError>;
}

/// Returns the `data` property of an enveloped body, or the body itself.
pub fn unwrap_envelope(body: Value) -> Value {
    match body {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// Decodes a raw response text: blank is no body, JSON is decoded, anything
/// else is kept as a string value.
pub fn parse_body(text: &str) -> Option<Value> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(serde_json::from_str(trimmed).unwrap_or_else(|_| Value::String(trimmed.to_string())))
}

/// Builds a URL from a base, a path, and query parameters. Absolute paths and
/// an empty base leave the path untouched.
pub fn build_url(base_url: &str, path: &str, query: &[(String, String)]) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    let mut url = if base.is_empty() || is_absolute(path) {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    };

    if !query.is_empty() {
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(query.iter().map(|(name, value)| (name.as_str(), value.as_str())))
            .finish();
        url.push(if url.contains('?') { '&' } else { '?' });
        url.push_str(&encoded);
    }

    url
}

/// Percent-encodes a single path segment (spaces become `%20`).
pub fn encode_path_segment(segment: &str) -> String {
    form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

fn is_absolute(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_with_data_is_unwrapped() {
        let body = json!({ "success": true, "data": [{ "id": "1" }] });
        assert_eq!(unwrap_envelope(body), json!([{ "id": "1" }]));

        let body = json!({ "data": null });
        assert_eq!(unwrap_envelope(body), Value::Null);
    }

    #[test]
    fn bare_bodies_pass_through() {
        assert_eq!(unwrap_envelope(json!([1, 2])), json!([1, 2]));
        assert_eq!(unwrap_envelope(json!({ "id": "7" })), json!({ "id": "7" }));
        assert_eq!(unwrap_envelope(Value::Null), Value::Null);
        assert_eq!(unwrap_envelope(json!("ok")), json!("ok"));
    }

    #[test]
    fn parse_body_handles_empty_json_and_text() {
        assert_eq!(parse_body(""), None);
        assert_eq!(parse_body("  \n"), None);
        assert_eq!(parse_body("{\"message\":\"nope\"}"), Some(json!({ "message": "nope" })));
        assert_eq!(parse_body("Not Found"), Some(json!("Not Found")));
    }

    #[test]
    fn build_url_joins_base_and_path() {
        assert_eq!(
            build_url("http://localhost:3001/api/v1/", "/users", &[]),
            "http://localhost:3001/api/v1/users"
        );
        assert_eq!(build_url("", "/users", &[]), "/users");
    }

    #[test]
    fn build_url_keeps_absolute_paths() {
        assert_eq!(
            build_url(
                "https://images-api.nasa.gov",
                "https://images-assets.nasa.gov/a/metadata.json",
                &[]
            ),
            "https://images-assets.nasa.gov/a/metadata.json"
        );
    }

    #[test]
    fn build_url_encodes_query() {
        let query = vec![("q".to_string(), "apollo 11 & moon".to_string())];
        assert_eq!(
            build_url("https://images-api.nasa.gov", "/search", &query),
            "https://images-api.nasa.gov/search?q=apollo+11+%26+moon"
        );
    }

    #[test]
    fn path_segments_are_percent_encoded() {
        assert_eq!(encode_path_segment("abc-123"), "abc-123");
        assert_eq!(encode_path_segment("a b/c+d"), "a%20b%2Fc%2Bd");
    }

    #[test]
    fn bodyless_requests_carry_no_content_type() {
        for request in [ApiRequest::get("/search"), ApiRequest::delete("/users/1")] {
            assert_eq!(headers_for(&request), vec![("Accept", "application/json")]);
        }
    }

    #[test]
    fn requests_with_body_declare_json() {
        for request in [
            ApiRequest::post("/users", json!({ "username": "ana" })),
            ApiRequest::patch("/users/1", json!({ "role": "admin" })),
        ] {
            assert!(headers_for(&request).contains(&("Content-Type", "application/json")));
            assert!(headers_for(&request).contains(&("Accept", "application/json")));
        }
    }

    #[test]
    fn request_builders_set_method_and_body() {
        let request = ApiRequest::patch("/users/1", json!({ "username": "ana" }));
        assert_eq!(request.method, Method::Patch);
        assert_eq!(request.method.as_str(), "PATCH");
        assert_eq!(request.body, Some(json!({ "username": "ana" })));

        let request = ApiRequest::get("/search").with_query("q", "mars");
        assert_eq!(request.query, vec![("q".to_string(), "mars".to_string())]);
        assert!(request.body.is_none());
    }
}
