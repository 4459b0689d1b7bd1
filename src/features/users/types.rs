use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder rendered for attributes the backend did not send.
pub const MISSING: &str = "—";

/// A user as returned by the backend. Backends disagree on key names, so the
/// record is decoded leniently from any JSON value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "Value")]
pub struct User {
    pub id: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl From<Value> for User {
    fn from(value: Value) -> Self {
        Self::from(&value)
    }
}

impl From<&Value> for User {
    fn from(value: &Value) -> Self {
        let Some(map) = value.as_object() else {
            return Self::default();
        };
        let text = |keys: &[&str]| keys.iter().find_map(|key| map.get(*key).and_then(scalar_text));

        Self {
            id: text(&["_id", "id", "uuid"]),
            username: text(&["username", "name"]),
            email: text(&["email"]),
            role: text(&["role"]),
        }
    }
}

impl User {
    pub fn display_username(&self) -> &str {
        self.username.as_deref().unwrap_or(MISSING)
    }

    pub fn display_email(&self) -> &str {
        self.email.as_deref().unwrap_or(MISSING)
    }

    pub fn display_role(&self) -> &str {
        self.role.as_deref().unwrap_or(MISSING)
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Form values in the UI's vocabulary. `password` is only collected on create.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserInput {
    pub name: String,
    pub email: String,
    pub role: String,
    pub password: Option<String>,
}

/// Create payload in the backend's vocabulary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateUserBody {
    pub username: String,
    pub email: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl From<&UserInput> for CreateUserBody {
    fn from(input: &UserInput) -> Self {
        Self {
            username: input.name.clone(),
            email: input.email.clone(),
            role: input.role.clone(),
            password: input.password.clone(),
        }
    }
}

/// Update payload. Passwords cannot be changed through this endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UpdateUserBody {
    pub username: String,
    pub email: String,
    pub role: String,
}

impl From<&UserInput> for UpdateUserBody {
    fn from(input: &UserInput) -> Self {
        Self {
            username: input.name.clone(),
            email: input.email.clone(),
            role: input.role.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn id_prefers_underscore_then_id_then_uuid() {
        let user = User::from(json!({ "_id": "mongo", "id": "sql", "uuid": "u" }));
        assert_eq!(user.id.as_deref(), Some("mongo"));

        let user = User::from(json!({ "id": 42, "uuid": "u" }));
        assert_eq!(user.id.as_deref(), Some("42"));

        let user = User::from(json!({ "uuid": "0f8c" }));
        assert_eq!(user.id.as_deref(), Some("0f8c"));
    }

    #[test]
    fn username_falls_back_to_name() {
        let user = User::from(json!({ "id": "1", "name": "bob" }));
        assert_eq!(user.display_username(), "bob");

        let user = User::from(json!({ "id": "1", "username": "ana", "name": "ignored" }));
        assert_eq!(user.display_username(), "ana");
    }

    #[test]
    fn missing_attributes_render_placeholder() {
        let user = User::from(json!({ "id": "1" }));
        assert_eq!(user.display_username(), MISSING);
        assert_eq!(user.display_email(), MISSING);
        assert_eq!(user.display_role(), MISSING);
    }

    #[test]
    fn non_objects_decode_to_empty_user() {
        assert_eq!(User::from(json!("ana")), User::default());
        assert_eq!(User::from(Value::Null), User::default());
    }

    #[test]
    fn deserializes_through_serde() {
        let users: Vec<User> =
            serde_json::from_value(json!([{ "_id": "a1", "username": "ana" }, 3])).unwrap();
        assert_eq!(users[0].id.as_deref(), Some("a1"));
        assert_eq!(users[1], User::default());
    }

    #[test]
    fn create_body_renames_name_to_username() {
        let input = UserInput {
            name: "bob".into(),
            email: "bob@x.com".into(),
            role: "user".into(),
            password: Some("longenough".into()),
        };
        let body = serde_json::to_value(CreateUserBody::from(&input)).unwrap();
        assert_eq!(
            body,
            json!({ "username": "bob", "email": "bob@x.com", "role": "user", "password": "longenough" })
        );
    }

    #[test]
    fn update_body_has_no_password_field() {
        let input = UserInput {
            name: "bob".into(),
            email: "bob@x.com".into(),
            role: "admin".into(),
            password: Some("ignored-secret".into()),
        };
        let body = serde_json::to_value(UpdateUserBody::from(&input)).unwrap();
        assert_eq!(body, json!({ "username": "bob", "email": "bob@x.com", "role": "admin" }));
        assert!(body.get("password").is_none());
    }
}
