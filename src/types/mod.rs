//! Typed views over API payloads.
//!
//! Endpoint methods return raw [`serde_json::Value`]; these types are for
//! callers who want structure, via `serde_json::from_value`. Unmodeled
//! fields are preserved in each type's flattened `extra` map, so nothing a
//! deployment sends is lost in the round trip.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub mod callback_query;
pub mod keyboard;
pub mod media;
pub mod message;

pub use callback_query::CallbackQuery;
pub use keyboard::{InlineKeyboardButton, InlineKeyboardMarkup};
pub use media::{Contact, PhotoSize, Sticker};
pub use message::{Chat, Message, User};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Poll {
    pub id: String,
    pub question: String,
    #[serde(default)]
    pub options: Vec<Value>,
    #[serde(default)]
    pub is_closed: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One element of the `getUpdates` result array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Update {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edited_message: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_post: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edited_channel_post: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_query: Option<CallbackQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_query: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poll: Option<Poll>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_deserializes_message_variant() {
        let update: Update = serde_json::from_value(json!({
            "update_id": 10,
            "message": {
                "message_id": 7,
                "date": 1700000000,
                "chat": {"id": 42, "type": "private"},
                "from": {"id": 9, "first_name": "Sara", "is_bot": false},
                "text": "/start"
            }
        }))
        .unwrap();

        assert_eq!(update.update_id, Some(10));
        let message = update.message.unwrap();
        assert_eq!(message.message_id, Some(7));
        assert_eq!(message.text.as_deref(), Some("/start"));
        assert_eq!(message.chat.unwrap().id, 42);
        assert_eq!(message.from_user.unwrap().first_name.as_deref(), Some("Sara"));
        assert!(update.callback_query.is_none());
    }

    #[test]
    fn test_update_keeps_unknown_variants_in_extra() {
        let update: Update = serde_json::from_value(json!({
            "update_id": 11,
            "shipping_query": {"id": "s1"}
        }))
        .unwrap();
        assert_eq!(update.extra["shipping_query"], json!({"id": "s1"}));
    }

    #[test]
    fn test_poll_defaults() {
        let poll: Poll = serde_json::from_value(json!({
            "id": "p1",
            "question": "tea or coffee?"
        }))
        .unwrap();
        assert!(poll.options.is_empty());
        assert!(!poll.is_closed);
    }
}
