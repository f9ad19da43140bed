use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// Extra optional fields forwarded verbatim with a request.
///
/// This is an unvalidated passthrough: keys and values are merged into the
/// required parameters as-is, so fields the client does not model explicitly
/// (e.g. `parse_mode`, `reply_markup`, `disable_notification`) still reach
/// the server. A passthrough key that collides with a required field wins.
#[derive(Debug, Clone, Default)]
pub struct Params(Map<String, Value>);

impl Params {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Adds one field, builder style.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn merge_into(self, payload: &mut Map<String, Value>) {
        for (key, value) in self.0 {
            payload.insert(key, value);
        }
    }
}

impl From<Map<String, Value>> for Params {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Chat addressing: a numeric chat id or a username string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChatId {
    Id(i64),
    Username(String),
}

impl ChatId {
    pub(crate) fn into_value(self) -> Value {
        match self {
            ChatId::Id(id) => Value::from(id),
            ChatId::Username(name) => Value::from(name),
        }
    }
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        ChatId::Id(id)
    }
}

impl From<i32> for ChatId {
    fn from(id: i32) -> Self {
        ChatId::Id(id as i64)
    }
}

impl From<&str> for ChatId {
    fn from(name: &str) -> Self {
        ChatId::Username(name.to_string())
    }
}

impl From<String> for ChatId {
    fn from(name: String) -> Self {
        ChatId::Username(name)
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatId::Id(id) => write!(f, "{}", id),
            ChatId::Username(name) => write!(f, "{}", name),
        }
    }
}

/// Addressing for message-edit operations.
///
/// An edit targets either a message inside a chat or an inline message; the
/// two modes are mutually exclusive on the wire, so the enum makes supplying
/// both (or neither) impossible.
#[derive(Debug, Clone)]
pub enum MessageRef {
    Chat { chat_id: ChatId, message_id: i64 },
    Inline(String),
}

impl MessageRef {
    pub fn chat(chat_id: impl Into<ChatId>, message_id: i64) -> Self {
        MessageRef::Chat {
            chat_id: chat_id.into(),
            message_id,
        }
    }

    pub fn inline(inline_message_id: impl Into<String>) -> Self {
        MessageRef::Inline(inline_message_id.into())
    }

    pub(crate) fn apply(self, payload: &mut Map<String, Value>) {
        match self {
            MessageRef::Chat {
                chat_id,
                message_id,
            } => {
                payload.insert("chat_id".to_string(), chat_id.into_value());
                payload.insert("message_id".to_string(), Value::from(message_id));
            }
            MessageRef::Inline(id) => {
                payload.insert("inline_message_id".to_string(), Value::from(id));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_params_merge_preserves_value_types() {
        let mut payload = Map::new();
        payload.insert("chat_id".to_string(), json!(42));
        Params::new()
            .set("show_alert", true)
            .set("cache_time", 30)
            .set("reply_markup", json!({"inline_keyboard": []}))
            .merge_into(&mut payload);

        assert_eq!(payload["show_alert"], json!(true));
        assert_eq!(payload["cache_time"], json!(30));
        assert_eq!(payload["reply_markup"], json!({"inline_keyboard": []}));
    }

    #[test]
    fn test_params_override_required_field() {
        // Passthrough wins on collision, same as the dict-update semantics
        // the API's other bindings expose.
        let mut payload = Map::new();
        payload.insert("text".to_string(), json!("original"));
        Params::new().set("text", "override").merge_into(&mut payload);
        assert_eq!(payload["text"], json!("override"));
    }

    #[test]
    fn test_chat_id_serialization() {
        assert_eq!(serde_json::to_value(ChatId::from(42)).unwrap(), json!(42));
        assert_eq!(
            serde_json::to_value(ChatId::from("@channel")).unwrap(),
            json!("@channel")
        );
    }

    #[test]
    fn test_message_ref_chat_fields() {
        let mut payload = Map::new();
        MessageRef::chat(42, 7).apply(&mut payload);
        assert_eq!(payload["chat_id"], json!(42));
        assert_eq!(payload["message_id"], json!(7));
        assert!(!payload.contains_key("inline_message_id"));
    }

    #[test]
    fn test_message_ref_inline_fields() {
        let mut payload = Map::new();
        MessageRef::inline("abc").apply(&mut payload);
        assert_eq!(payload["inline_message_id"], json!("abc"));
        assert!(!payload.contains_key("chat_id"));
        assert!(!payload.contains_key("message_id"));
    }
}
