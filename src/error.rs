use thiserror::Error;

/// Failures surfaced by the client.
///
/// The three wire-facing kinds are kept distinct so callers can apply
/// differentiated retry policy: a `Transport` failure may be worth retrying,
/// an `Api` rejection is not. Never match on message text.
#[derive(Debug, Error)]
pub enum BotError {
    /// Connection, timeout or TLS failure before a response body was read.
    #[error("HTTP error while calling {method}: {source}")]
    Transport {
        method: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not valid JSON.
    #[error("non-JSON response from API ({status}) while calling {method}")]
    Decode {
        method: String,
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// The envelope decoded but carried `ok: false`.
    #[error("API error {method}: {description}")]
    Api { method: String, description: String },

    /// A local file or stream destined for a multipart upload could not be read.
    #[error("failed to read upload for {method}: {source}")]
    Upload {
        method: String,
        #[source]
        source: std::io::Error,
    },
}

impl BotError {
    /// The API method name the failure belongs to.
    pub fn method(&self) -> &str {
        match self {
            BotError::Transport { method, .. }
            | BotError::Decode { method, .. }
            | BotError::Api { method, .. }
            | BotError::Upload { method, .. } => method,
        }
    }

    /// True for failures that happened before the server produced an answer.
    pub fn is_transport(&self) -> bool {
        matches!(self, BotError::Transport { .. })
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, BotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message_contains_description() {
        let err = BotError::Api {
            method: "sendMessage".to_string(),
            description: "chat not found".to_string(),
        };
        assert_eq!(err.to_string(), "API error sendMessage: chat not found");
        assert_eq!(err.method(), "sendMessage");
        assert!(!err.is_transport());
    }
}
