//! Browser transport for JSON APIs with JSON headers, a bounded timeout, and
//! uniform error handling. Every view goes through [`HttpClient`] so request
//! setup and failure shapes stay identical across features.

use super::{
    api::{build_url, headers_for, parse_body, ApiRequest, Method, Transport},
    config::AppConfig,
    errors::ApiError,
};
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde_json::Value;
use web_sys::AbortController;

/// Configured request client: one base address, JSON headers, one timeout.
#[derive(Clone, Debug)]
pub struct HttpClient {
    base_url: String,
    timeout_ms: u32,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>, timeout_ms: u32) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms,
        }
    }

    /// Client for the configured REST backend.
    pub fn api() -> Self {
        let config = AppConfig::load();
        Self::new(config.api_base_url, config.request_timeout_ms)
    }

    /// Client for a third-party origin, sharing the configured timeout.
    pub fn external(base_url: &str) -> Self {
        Self::new(base_url, AppConfig::load().request_timeout_ms)
    }
}

impl Transport for HttpClient {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let url = build_url(&self.base_url, &request.path, &request.query);
        let headers = headers_for(&request);
        let payload = request
            .body
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .map_err(|err| ApiError::config(format!("Failed to encode request: {err}")))?;

        tracing::debug!(method = request.method.as_str(), %url, "sending request");

        let method = request.method;
        let target = url.clone();
        let result = send_with_timeout(self.timeout_ms, move |signal| {
            let builder = headers
                .into_iter()
                .fold(builder_for(method, &target), |builder, (name, value)| {
                    builder.header(name, value)
                })
                .abort_signal(Some(signal));

            match payload {
                Some(payload) => builder.body(payload),
                None => builder.build(),
            }
            .map_err(|err| ApiError::config(format!("Failed to build request: {err}")))
        })
        .await;

        let outcome = match result {
            Ok(response) => handle_response(response).await,
            Err(err) => Err(err),
        };

        if let Err(err) = &outcome {
            tracing::warn!(
                method = method.as_str(),
                %url,
                status = ?err.status,
                kind = ?err.kind,
                "request failed: {err}"
            );
        }
        outcome
    }
}

fn builder_for(method: Method, url: &str) -> RequestBuilder {
    match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Patch => Request::patch(url),
        Method::Delete => Request::delete(url),
    }
}

/// Maps fetch failures into network or timeout errors.
fn map_request_error(err: gloo_net::Error, timeout_ms: u32) -> ApiError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        ApiError::timeout(timeout_ms)
    } else {
        ApiError::network(message)
    }
}

/// Sends a request with an abort timeout to avoid hanging UI state.
async fn send_with_timeout(
    timeout_ms: u32,
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<Request, ApiError>,
) -> Result<Response, ApiError> {
    let controller = AbortController::new()
        .map_err(|_| ApiError::config("Failed to initialize request timeout."))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(timeout_ms, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request
        .send()
        .await
        .map_err(|err| map_request_error(err, timeout_ms))
}

/// Decodes 2xx bodies and turns everything else into an HTTP error carrying
/// the raw body.
async fn handle_response(response: Response) -> Result<Value, ApiError> {
    let status = response.status();
    let ok = response.ok();
    let text = response
        .text()
        .await
        .map_err(|err| ApiError::decode(format!("Failed to read response: {err}")))?;
    let body = parse_body(&text);

    if ok {
        Ok(body.unwrap_or(Value::Null))
    } else {
        Err(ApiError::http(status, body))
    }
}
