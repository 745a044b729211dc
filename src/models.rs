//! Frontend Models
//!
//! Data structures matching backend entities and request bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User profile (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Never rendered
    #[serde(default)]
    pub password_hash: String,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl UserInfo {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Todo item (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: String,
    pub user_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub is_done: bool,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub color: Option<String>,
}

/// `GET /api/todo` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoPayload {
    pub user: UserInfo,
    pub todos: Vec<TodoItem>,
}

// ========================
// Request / Response Bodies
// ========================

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
}

#[derive(Debug, Default, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Body for `PUT /api/todo`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub title: String,
    pub description: String,
    pub color: String,
    pub is_done: bool,
}

/// Full-form body for `PATCH /api/todo`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoUpdate {
    pub id: String,
    pub title: String,
    pub description: String,
    pub color: String,
    pub is_done: bool,
}

/// Completion-only body for `PATCH /api/todo`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DoneUpdate {
    pub id: String,
    pub is_done: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdArgs {
    pub id: String,
}

/// Error payload returned by the backend on non-2xx responses
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Timestamps come as RFC 3339, as ISO date-times with a colon-less offset
/// (`+0000`), or as naive ISO date-times (read as UTC).
pub(crate) mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z") {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
            .ok()
            .map(|naive| naive.and_utc())
    }

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp: {raw}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_todo_item_from_backend_json() {
        let json = r##"{
            "id": "a1",
            "userId": "u1",
            "title": "Buy milk",
            "description": null,
            "isDone": true,
            "createdAt": "2024-03-05T08:15:00.000Z",
            "updatedAt": "2024-03-05T09:00:00",
            "color": "#123456"
        }"##;

        let item: TodoItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.user_id, "u1");
        assert!(item.is_done);
        assert_eq!(item.description, None);
        assert_eq!(item.color.as_deref(), Some("#123456"));
        assert_eq!(item.created_at, Utc.with_ymd_and_hms(2024, 3, 5, 8, 15, 0).unwrap());
        assert_eq!(item.updated_at, Utc.with_ymd_and_hms(2024, 3, 5, 9, 0, 0).unwrap());
    }

    #[test]
    fn test_optional_fields_may_be_missing() {
        let json = r#"{
            "user": {
                "id": "u1",
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "ada@example.com",
                "createdAt": "2024-01-01T00:00:00+07:00"
            },
            "todos": [{
                "id": "a1",
                "userId": "u1",
                "title": "Plain",
                "isDone": false,
                "createdAt": "2024-01-02 10:00:00",
                "updatedAt": "2024-01-02 10:00:00"
            }]
        }"#;

        let payload: TodoPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.user.display_name(), "Ada Lovelace");
        assert_eq!(payload.user.password_hash, "");
        assert_eq!(payload.user.created_at, Utc.with_ymd_and_hms(2023, 12, 31, 17, 0, 0).unwrap());
        assert_eq!(payload.todos[0].color, None);
        assert_eq!(payload.todos[0].description, None);
    }

    #[test]
    fn test_offset_without_colon_keeps_board_decodable() {
        let json = r#"{
            "user": {
                "id": "u1",
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "ada@example.com",
                "createdAt": "2024-01-01T00:00:00Z"
            },
            "todos": [{
                "id": "a1",
                "userId": "u1",
                "title": "Offset",
                "isDone": false,
                "createdAt": "2024-01-01T00:00:00+0000",
                "updatedAt": "2024-01-01T09:30:00.250+0200"
            }]
        }"#;

        let payload: TodoPayload = serde_json::from_str(json).unwrap();
        let item = &payload.todos[0];
        assert_eq!(item.created_at, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(
            item.updated_at,
            Utc.with_ymd_and_hms(2024, 1, 1, 7, 30, 0).unwrap() + chrono::Duration::milliseconds(250)
        );
    }

    #[test]
    fn test_bad_timestamp_is_rejected() {
        assert!(timestamp::parse("yesterday").is_none());
    }

    #[test]
    fn test_request_bodies_use_camel_case() {
        let body = serde_json::to_value(RegisterRequest {
            email: "a@b.com",
            password: "secret",
            first_name: "Ada",
            last_name: "L",
        })
        .unwrap();
        assert_eq!(body["firstName"], "Ada");
        assert_eq!(body["lastName"], "L");

        let done = serde_json::to_value(DoneUpdate { id: "x".into(), is_done: true }).unwrap();
        assert_eq!(done, serde_json::json!({ "id": "x", "isDone": true }));
    }
}
