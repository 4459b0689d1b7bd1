//! Calls to the public NASA Image and Video Library API.

use crate::{
    app_lib::{
        api::{encode_path_segment, ApiRequest, Transport},
        errors::ApiError,
    },
    features::nasa::types::{
        is_json_location, location, manifest_urls, normalize_search, AssetDetails, SearchItem,
    },
};
use serde_json::Value;

pub const NASA_IMAGES_BASE_URL: &str = "https://images-api.nasa.gov";

pub async fn search(
    transport: &impl Transport,
    query: &str,
) -> Result<Vec<SearchItem>, ApiError> {
    if query.trim().is_empty() {
        return Err(ApiError::invalid_argument("query is required"));
    }

    let body = transport
        .send(ApiRequest::get("/search").with_query("q", query))
        .await?;
    Ok(normalize_search(&body))
}

/// Loads one asset's manifest, then its metadata and captions. Only the
/// manifest is required; the other two fall back to "not available".
pub async fn load_details(
    transport: &impl Transport,
    nasa_id: &str,
) -> Result<AssetDetails, ApiError> {
    let trimmed = nasa_id.trim();
    if trimmed.is_empty() {
        return Err(ApiError::invalid_argument("nasa_id is required"));
    }
    let safe_id = encode_path_segment(trimmed);

    let manifest = transport
        .send(ApiRequest::get(format!("/asset/{safe_id}")))
        .await?;

    let (metadata_url, metadata) = match transport
        .send(ApiRequest::get(format!("/metadata/{safe_id}")))
        .await
    {
        Ok(body) => {
            let url = location(&body);
            let metadata = match url.as_deref().filter(|url| is_json_location(url)) {
                Some(url) => fetch_metadata(transport, url).await,
                None => None,
            };
            (url, metadata)
        }
        Err(err) => {
            tracing::debug!(nasa_id = trimmed, "metadata unavailable: {err}");
            (None, None)
        }
    };

    let captions_url = match transport
        .send(ApiRequest::get(format!("/captions/{safe_id}")))
        .await
    {
        Ok(body) => location(&body),
        Err(err) => {
            tracing::debug!(nasa_id = trimmed, "captions unavailable: {err}");
            None
        }
    };

    Ok(AssetDetails {
        manifest: manifest_urls(&manifest),
        metadata_url,
        captions_url,
        metadata,
    })
}

async fn fetch_metadata(transport: &impl Transport, url: &str) -> Option<Value> {
    match transport.send(ApiRequest::get(url)).await {
        Ok(Value::Null) => None,
        Ok(document) => Some(document),
        Err(err) => {
            tracing::debug!(%url, "metadata document unavailable: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_lib::errors::ErrorKind;
    use serde_json::json;
    use std::{cell::RefCell, collections::HashMap};

    /// Answers by exact path; unknown paths are 404s.
    #[derive(Default)]
    struct Routes {
        answers: HashMap<String, Value>,
        seen: RefCell<Vec<ApiRequest>>,
    }

    impl Routes {
        fn with(mut self, path: &str, body: Value) -> Self {
            self.answers.insert(path.to_string(), body);
            self
        }

        fn paths(&self) -> Vec<String> {
            self.seen.borrow().iter().map(|request| request.path.clone()).collect()
        }
    }

    impl Transport for Routes {
        async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
            let answer = self.answers.get(&request.path).cloned();
            self.seen.borrow_mut().push(request);
            answer.ok_or_else(|| ApiError::http(404, Some(json!({ "reason": "not found" }))))
        }
    }

    #[tokio::test]
    async fn search_sends_query_and_normalizes() {
        let transport = Routes::default().with(
            "/search",
            json!({ "collection": { "items": [{ "data": [{ "nasa_id": "m1", "title": "Moon" }] }] } }),
        );

        let items = search(&transport, "moon landing").await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title.as_deref(), Some("Moon"));

        let seen = transport.seen.borrow();
        assert_eq!(seen[0].query, vec![("q".to_string(), "moon landing".to_string())]);
    }

    #[tokio::test]
    async fn blank_search_sends_nothing() {
        let transport = Routes::default();
        let err = search(&transport, "   ").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidArgument);
        assert!(transport.paths().is_empty());
    }

    #[tokio::test]
    async fn details_follow_json_metadata_location() {
        let transport = Routes::default()
            .with(
                "/asset/a%201",
                json!({ "collection": { "items": [{ "href": "https://x/a.jpg" }] } }),
            )
            .with("/metadata/a%201", json!({ "location": "https://x/metadata.json" }))
            .with("https://x/metadata.json", json!({ "AVAIL:Title": "A" }))
            .with("/captions/a%201", json!({ "location": "https://x/captions.srt" }));

        let details = load_details(&transport, "a 1").await.unwrap();
        assert_eq!(details.manifest, vec!["https://x/a.jpg"]);
        assert_eq!(details.metadata_url.as_deref(), Some("https://x/metadata.json"));
        assert_eq!(details.metadata, Some(json!({ "AVAIL:Title": "A" })));
        assert_eq!(details.captions_url.as_deref(), Some("https://x/captions.srt"));
    }

    #[tokio::test]
    async fn non_json_metadata_location_is_not_fetched() {
        let transport = Routes::default()
            .with("/asset/v1", json!({ "collection": { "items": [] } }))
            .with("/metadata/v1", json!({ "location": "https://x/metadata.xml" }));

        let details = load_details(&transport, "v1").await.unwrap();
        assert_eq!(details.metadata_url.as_deref(), Some("https://x/metadata.xml"));
        assert_eq!(details.metadata, None);
        assert!(!transport.paths().iter().any(|path| path.ends_with(".xml")));
    }

    #[tokio::test]
    async fn metadata_and_caption_failures_are_not_errors() {
        let transport =
            Routes::default().with("/asset/v2", json!({ "collection": { "items": [] } }));

        let details = load_details(&transport, "v2").await.unwrap();
        assert_eq!(details, AssetDetails::default());
    }

    #[tokio::test]
    async fn manifest_failure_fails_details() {
        let transport = Routes::default();
        let err = load_details(&transport, "gone").await.unwrap_err();
        assert_eq!(err.status, Some(404));
        assert_eq!(transport.paths(), vec!["/asset/gone"]);
    }
}
