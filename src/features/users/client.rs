//! Client helpers for the users REST resource. These functions keep endpoint
//! paths centralized, validate ids locally, and normalize both enveloped and
//! bare response bodies.

use crate::{
    app_lib::{
        api::{encode_path_segment, unwrap_envelope, ApiRequest, Transport},
        errors::ApiError,
    },
    features::users::types::{CreateUserBody, UpdateUserBody, User, UserInput},
};
use serde::Serialize;
use serde_json::Value;

pub const USERS_PATH: &str = "/users";

/// Fetches the user list. A payload that is not an array yields no users.
pub async fn list_users(transport: &impl Transport) -> Result<Vec<User>, ApiError> {
    let body = transport.send(ApiRequest::get(USERS_PATH)).await?;

    Ok(match unwrap_envelope(body) {
        Value::Array(items) => items.iter().map(User::from).collect(),
        _ => Vec::new(),
    })
}

/// Fetches one user. A `null` payload means the record does not exist.
pub async fn get_user(transport: &impl Transport, id: &str) -> Result<Option<User>, ApiError> {
    let path = user_path(id)?;
    let body = transport.send(ApiRequest::get(path)).await?;
    Ok(decode_user(body))
}

pub async fn create_user(
    transport: &impl Transport,
    input: &UserInput,
) -> Result<Option<User>, ApiError> {
    let body = to_json(&CreateUserBody::from(input))?;
    tracing::info!(role = %input.role, "creating user");

    let response = transport.send(ApiRequest::post(USERS_PATH, body)).await?;
    Ok(decode_user(response))
}

/// Updates username, email and role. The password in `input` is never sent.
pub async fn update_user(
    transport: &impl Transport,
    id: &str,
    input: &UserInput,
) -> Result<Option<User>, ApiError> {
    let path = user_path(id)?;
    let body = to_json(&UpdateUserBody::from(input))?;
    tracing::info!(user_id = id.trim(), "updating user");

    let response = transport.send(ApiRequest::patch(path, body)).await?;
    Ok(decode_user(response))
}

/// Deletes a user and returns whatever payload the backend sent back.
pub async fn delete_user(transport: &impl Transport, id: &str) -> Result<Value, ApiError> {
    let path = user_path(id)?;
    tracing::info!(user_id = id.trim(), "deleting user");

    let response = transport.send(ApiRequest::delete(path)).await?;
    Ok(unwrap_envelope(response))
}

/// Builds `/users/{id}` after rejecting blank ids.
fn user_path(id: &str) -> Result<String, ApiError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(ApiError::invalid_argument("userId is required"));
    }
    Ok(format!("{USERS_PATH}/{}", encode_path_segment(trimmed)))
}

fn decode_user(body: Value) -> Option<User> {
    match unwrap_envelope(body) {
        Value::Null => None,
        value => Some(User::from(value)),
    }
}

fn to_json(body: &impl Serialize) -> Result<Value, ApiError> {
    serde_json::to_value(body)
        .map_err(|err| ApiError::config(format!("Failed to encode request: {err}")))
}
