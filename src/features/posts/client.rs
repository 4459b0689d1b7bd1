use crate::{
    app_lib::{
        api::{ApiRequest, Transport},
        errors::ApiError,
    },
    features::posts::types::Post,
};

pub const POSTS_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
pub const POSTS_PATH: &str = "/posts";

/// Fetches the post feed. The endpoint answers with a bare array.
pub async fn list_posts(transport: &impl Transport) -> Result<Vec<Post>, ApiError> {
    let body = transport.send(ApiRequest::get(POSTS_PATH)).await?;
    serde_json::from_value(body)
        .map_err(|err| ApiError::decode(format!("Unexpected posts payload: {err}")))
}
