use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A persisted board message. `id` and `created_at` are assigned by the
/// database at insert time and never change afterwards.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Message {
    pub id: i64,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize, Validate, Debug)]
pub struct CreateMessageRequest {
    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: String,
    #[validate(length(
        min = 1,
        max = 100,
        message = "The author name must be between 1 and 100 characters long"
    ))]
    pub author: String,
}

/// Partial update payload: absent fields keep their stored value.
#[derive(Deserialize, Validate, Debug, Default)]
pub struct UpdateMessageRequest {
    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: Option<String>,
    #[validate(length(
        min = 1,
        max = 100,
        message = "The author name must be between 1 and 100 characters long"
    ))]
    pub author: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn create_request_accepts_valid_fields() {
        let payload = CreateMessageRequest {
            content: "hello".to_string(),
            author: "alice".to_string(),
        };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn create_request_rejects_overlong_author() {
        let payload = CreateMessageRequest {
            content: "hello".to_string(),
            author: "a".repeat(101),
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("author"));
    }

    #[test]
    fn create_request_accepts_author_at_the_bound() {
        let payload = CreateMessageRequest {
            content: "hello".to_string(),
            author: "a".repeat(100),
        };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn create_request_rejects_empty_fields() {
        let payload = CreateMessageRequest {
            content: String::new(),
            author: "alice".to_string(),
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("content"));
    }

    #[test]
    fn update_request_validates_only_supplied_fields() {
        let partial: UpdateMessageRequest =
            serde_json::from_str(r#"{"content": "hello again"}"#).unwrap();
        assert!(partial.validate().is_ok());
        assert_eq!(partial.content.as_deref(), Some("hello again"));
        assert!(partial.author.is_none());

        let bad: UpdateMessageRequest =
            serde_json::from_value(serde_json::json!({ "author": "b".repeat(101) })).unwrap();
        let errors = bad.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("author"));
    }

    #[test]
    fn update_request_allows_an_empty_body() {
        let empty: UpdateMessageRequest = serde_json::from_str("{}").unwrap();
        assert!(empty.validate().is_ok());
        assert!(empty.content.is_none() && empty.author.is_none());
    }

    #[test]
    fn message_serializes_with_rfc3339_timestamp() {
        let message = Message {
            id: 1,
            content: "hello".to_string(),
            author: "alice".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
        };
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["content"], "hello");
        assert_eq!(value["author"], "alice");
        assert_eq!(value["created_at"], "2024-05-01T12:30:00Z");
    }
}
