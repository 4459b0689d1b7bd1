use serde_json::Value;

/// Number of manifest links rendered before the list is cut short.
pub const MANIFEST_PREVIEW: usize = 25;

/// One search hit, flattened from the collection+json item shape.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchItem {
    pub nasa_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub media_type: Option<String>,
    pub date_created: Option<String>,
    pub center: Option<String>,
    pub thumbnail: Option<String>,
}

impl SearchItem {
    /// Media type and creation date, as shown under the title.
    pub fn subtitle(&self) -> String {
        let media = self
            .media_type
            .as_deref()
            .map(str::to_uppercase)
            .unwrap_or_default();
        let date = self.date_created.as_deref().map(display_date).unwrap_or_default();
        format!("{media} • {date}")
    }
}

/// Files, metadata and captions for one asset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AssetDetails {
    pub manifest: Vec<String>,
    pub metadata_url: Option<String>,
    pub captions_url: Option<String>,
    pub metadata: Option<Value>,
}

impl AssetDetails {
    pub fn manifest_preview(&self) -> &[String] {
        &self.manifest[..self.manifest.len().min(MANIFEST_PREVIEW)]
    }

    pub fn has_more_manifest(&self) -> bool {
        self.manifest.len() > MANIFEST_PREVIEW
    }

    /// Pretty-printed metadata document, if one was loaded.
    pub fn metadata_pretty(&self) -> Option<String> {
        self.metadata
            .as_ref()
            .and_then(|value| serde_json::to_string_pretty(value).ok())
    }
}

fn collection_items(body: &Value) -> &[Value] {
    body.pointer("/collection/items")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn text(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

/// Flattens a search response. Missing collections yield no items.
pub fn normalize_search(body: &Value) -> Vec<SearchItem> {
    collection_items(body).iter().map(normalize_item).collect()
}

fn normalize_item(item: &Value) -> SearchItem {
    let data = item.pointer("/data/0");
    let field = |name: &str| text(data.and_then(|data| data.get(name)));

    SearchItem {
        nasa_id: field("nasa_id"),
        title: field("title"),
        description: field("description"),
        media_type: field("media_type"),
        date_created: field("date_created"),
        center: field("center"),
        thumbnail: thumbnail(item),
    }
}

/// First link whose `rel` mentions a thumbnail or whose `render` is an image.
fn thumbnail(item: &Value) -> Option<String> {
    let links = item.get("links").and_then(Value::as_array)?;
    links
        .iter()
        .find(|link| {
            let rel = link.get("rel").and_then(Value::as_str).unwrap_or_default();
            let render = link.get("render").and_then(Value::as_str).unwrap_or_default();
            rel.to_lowercase().contains("thumbnail") || render.to_lowercase().contains("image/")
        })
        .and_then(|link| text(link.get("href")))
}

/// Asset file links from an `/asset/{id}` response.
pub fn manifest_urls(body: &Value) -> Vec<String> {
    collection_items(body)
        .iter()
        .filter_map(|item| text(item.get("href")))
        .collect()
}

/// The `location` pointer returned by the metadata and captions endpoints.
pub fn location(body: &Value) -> Option<String> {
    text(body.get("location"))
}

pub fn is_json_location(url: &str) -> bool {
    url.to_lowercase().ends_with(".json")
}

/// Calendar date portion of an ISO-8601 timestamp; other text is kept as is.
pub fn display_date(raw: &str) -> String {
    match raw.split_once('T') {
        Some((date, _)) if date.len() == 10 => date.to_string(),
        _ => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn search_body() -> Value {
        json!({
            "collection": {
                "items": [
                    {
                        "data": [{
                            "nasa_id": "as11-40-5874",
                            "title": "Apollo 11",
                            "description": "Buzz Aldrin on the Moon",
                            "media_type": "image",
                            "date_created": "1969-07-20T00:00:00Z",
                            "center": "JSC"
                        }],
                        "links": [
                            { "href": "https://x/orig.tif", "rel": "canonical", "render": "tiff" },
                            { "href": "https://x/thumb.jpg", "rel": "preview", "render": "image/jpeg" }
                        ]
                    },
                    {
                        "data": [{ "nasa_id": "vid1", "media_type": "video" }],
                        "links": [{ "href": "https://x/small.png", "rel": "Thumbnail" }]
                    },
                    { "href": "https://x/collection.json" }
                ]
            }
        })
    }

    #[test]
    fn search_items_are_flattened() {
        let items = normalize_search(&search_body());
        assert_eq!(items.len(), 3);

        let first = &items[0];
        assert_eq!(first.nasa_id.as_deref(), Some("as11-40-5874"));
        assert_eq!(first.title.as_deref(), Some("Apollo 11"));
        assert_eq!(first.center.as_deref(), Some("JSC"));
        assert_eq!(first.thumbnail.as_deref(), Some("https://x/thumb.jpg"));
        assert_eq!(first.subtitle(), "IMAGE • 1969-07-20");
    }

    #[test]
    fn thumbnail_match_ignores_case() {
        let items = normalize_search(&search_body());
        assert_eq!(items[1].thumbnail.as_deref(), Some("https://x/small.png"));
        assert_eq!(items[2], SearchItem::default());
    }

    #[test]
    fn missing_collection_means_no_items() {
        assert!(normalize_search(&json!({})).is_empty());
        assert!(normalize_search(&json!({ "collection": { "items": "x" } })).is_empty());
    }

    #[test]
    fn manifest_keeps_non_empty_hrefs() {
        let body = json!({ "collection": { "items": [
            { "href": "https://x/a.jpg" }, { "href": "" }, {}, { "href": "https://x/b.jpg" }
        ] } });
        assert_eq!(manifest_urls(&body), vec!["https://x/a.jpg", "https://x/b.jpg"]);
    }

    #[test]
    fn manifest_preview_is_capped() {
        let details = AssetDetails {
            manifest: (0..30).map(|n| format!("https://x/{n}.jpg")).collect(),
            ..AssetDetails::default()
        };
        assert_eq!(details.manifest_preview().len(), MANIFEST_PREVIEW);
        assert!(details.has_more_manifest());

        let short = AssetDetails {
            manifest: vec!["https://x/1.jpg".to_string()],
            ..AssetDetails::default()
        };
        assert_eq!(short.manifest_preview().len(), 1);
        assert!(!short.has_more_manifest());
    }

    #[test]
    fn locations_and_json_detection() {
        assert_eq!(
            location(&json!({ "location": "https://x/metadata.JSON" })).as_deref(),
            Some("https://x/metadata.JSON")
        );
        assert_eq!(location(&json!({ "location": "" })), None);
        assert!(is_json_location("https://x/metadata.JSON"));
        assert!(!is_json_location("https://x/captions.srt"));
    }

    #[test]
    fn dates_drop_time_portion() {
        assert_eq!(display_date("2020-05-01T12:00:00Z"), "2020-05-01");
        assert_eq!(display_date("sometime"), "sometime");
    }
}
