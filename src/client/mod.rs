use log::{debug, error, warn};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{BotError, Result};
use crate::upload::{FileInput, Uploadable, classify};

pub mod api;

/// Base URL of the hosted Bale API.
pub const DEFAULT_BASE_URL: &str = "https://tapi.bale.ai";

/// Wire-level JSON wrapper used by every API response.
#[derive(Debug, Deserialize)]
struct Envelope {
    ok: bool,
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    description: Option<String>,
}

/// Outcome of the convenience health probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Health {
    Healthy,
    Unreachable(String),
}

impl Health {
    /// Boolean projection for callers that only want a yes/no.
    pub fn is_healthy(&self) -> bool {
        matches!(self, Health::Healthy)
    }
}

/// Client for the Bale bot API.
///
/// Holds only immutable configuration plus a shared [`reqwest::Client`], so
/// a single instance is safe to use from concurrent tasks. Every endpoint
/// method is one HTTP exchange: parameters in, unwrapped `result` out.
pub struct BaleBot {
    token: String,
    base_url: String,
    client: Client,
}

impl BaleBot {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            client: Client::new(),
        }
    }

    /// Points the client at a different deployment, e.g. a self-hosted
    /// gateway or a test server. Trailing slashes are tolerated.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Replaces the HTTP client, for callers that need custom transport
    /// settings (proxies, timeouts).
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, self.token, method)
    }

    /// Download URL for a `file_path` returned by `getFile`.
    pub fn file_download_url(&self, file_path: &str) -> String {
        format!("{}/file/bot{}/{}", self.base_url, self.token, file_path)
    }

    // ------------------------------------------------------------------
    // request gateway
    // ------------------------------------------------------------------

    pub(crate) async fn get(&self, method: &str, query: Map<String, Value>) -> Result<Value> {
        let url = self.method_url(method);
        debug!("GET {}", url);
        let pairs: Vec<(String, String)> = query
            .iter()
            .map(|(key, value)| (key.clone(), form_value(value)))
            .collect();
        self.execute(method, self.client.get(&url).query(&pairs))
            .await
    }

    pub(crate) async fn post_json(&self, method: &str, payload: Map<String, Value>) -> Result<Value> {
        let url = self.method_url(method);
        debug!("POST {}", url);
        self.execute(method, self.client.post(&url).json(&payload))
            .await
    }

    /// Routes an upload-capable call: remote references stay plain fields in
    /// a JSON body, local paths and streams become multipart file parts with
    /// the remaining fields as form text.
    pub(crate) async fn post_upload(
        &self,
        method: &str,
        mut payload: Map<String, Value>,
        field: &str,
        input: FileInput,
    ) -> Result<Value> {
        match classify(input) {
            Uploadable::RemoteReference(reference) => {
                payload.insert(field.to_string(), Value::from(reference));
                self.post_json(method, payload).await
            }
            Uploadable::LocalPath(path) => {
                let file_name = path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .unwrap_or("file")
                    .to_string();
                // Scoped read: the handle is gone before the request starts
                // and on every failure path.
                let bytes = tokio::fs::read(&path).await.map_err(|source| BotError::Upload {
                    method: method.to_string(),
                    source,
                })?;
                let part = Part::bytes(bytes).file_name(file_name);
                self.post_multipart(method, payload, field, part).await
            }
            Uploadable::Stream(stream) => {
                let (file_name, bytes) = stream.into_bytes().map_err(|source| BotError::Upload {
                    method: method.to_string(),
                    source,
                })?;
                let part = Part::bytes(bytes).file_name(file_name);
                self.post_multipart(method, payload, field, part).await
            }
        }
    }

    async fn post_multipart(
        &self,
        method: &str,
        fields: Map<String, Value>,
        file_field: &str,
        part: Part,
    ) -> Result<Value> {
        let url = self.method_url(method);
        debug!("POST {} (multipart)", url);
        let mut form = Form::new().part(file_field.to_string(), part);
        for (key, value) in &fields {
            form = form.text(key.clone(), form_value(value));
        }
        self.execute(method, self.client.post(&url).multipart(form))
            .await
    }

    /// Sends the request and unwraps the envelope.
    async fn execute(&self, method: &str, request: RequestBuilder) -> Result<Value> {
        let response = request.send().await.map_err(|source| {
            error!("HTTP error while calling {}: {}", method, source);
            BotError::Transport {
                method: method.to_string(),
                source,
            }
        })?;
        let status = response.status();
        let body = response.text().await.map_err(|source| {
            error!("HTTP error while calling {}: {}", method, source);
            BotError::Transport {
                method: method.to_string(),
                source,
            }
        })?;
        let envelope: Envelope = serde_json::from_str(&body).map_err(|source| {
            error!("non-JSON response from API ({}) while calling {}", status, method);
            BotError::Decode {
                method: method.to_string(),
                status: status.as_u16(),
                source,
            }
        })?;
        if !envelope.ok {
            let description = envelope
                .description
                .unwrap_or_else(|| "no description".to_string());
            error!("API error {}: {}", method, description);
            return Err(BotError::Api {
                method: method.to_string(),
                description,
            });
        }
        Ok(envelope.result.unwrap_or(Value::Null))
    }

    // ------------------------------------------------------------------
    // derived helpers
    // ------------------------------------------------------------------

    /// Convenience probe wrapping `getMe`. Never fails; any error is folded
    /// into [`Health::Unreachable`]. Use only for probing, never for results
    /// the caller depends on.
    pub async fn ping(&self) -> Health {
        match self.get_me().await {
            Ok(_) => Health::Healthy,
            Err(e) => {
                warn!("ping failed: {}", e);
                Health::Unreachable(e.to_string())
            }
        }
    }

    /// Raw reachability probe against the bare base URL, bypassing the API
    /// envelope entirely.
    pub async fn ping_raw(&self) -> bool {
        match self.client.get(&self.base_url).send().await {
            Ok(response) => {
                let code = response.status().as_u16();
                (200..400).contains(&code)
            }
            Err(_) => false,
        }
    }

    /// Fetches file metadata via `getFile` and downloads the content in one
    /// step. Returns `Ok(None)` when the metadata lacks a `file_path` (a
    /// deployment this helper does not support) or when the secondary fetch
    /// fails; gateway errors from `getFile` itself still propagate.
    pub async fn download_file(&self, file_id: &str) -> Result<Option<Vec<u8>>> {
        let info = self.get_file(file_id).await?;
        let Some(file_path) = info.get("file_path").and_then(Value::as_str) else {
            warn!("getFile result for {} carries no file_path", file_id);
            return Ok(None);
        };
        let url = self.file_download_url(file_path);
        debug!("GET {}", url);
        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("file download failed: {}", e);
                return Ok(None);
            }
        };
        if !response.status().is_success() {
            warn!("file download returned status {}", response.status());
            return Ok(None);
        }
        match response.bytes().await {
            Ok(bytes) => Ok(Some(bytes.to_vec())),
            Err(e) => {
                warn!("file download failed: {}", e);
                Ok(None)
            }
        }
    }
}

/// Text form of a value for query strings and multipart text fields: strings
/// stay as-is, everything else is serialized to JSON text.
fn form_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_method_url_layout() {
        let bot = BaleBot::new("123:abc");
        assert_eq!(
            bot.method_url("sendMessage"),
            "https://tapi.bale.ai/bot123:abc/sendMessage"
        );
    }

    #[test]
    fn test_file_download_url_layout() {
        let bot = BaleBot::new("123:abc").with_base_url("https://example.org/");
        assert_eq!(
            bot.file_download_url("photos/p.jpg"),
            "https://example.org/file/bot123:abc/photos/p.jpg"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let bot = BaleBot::new("t").with_base_url("http://localhost:8080///");
        assert_eq!(bot.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_form_value_shapes() {
        assert_eq!(form_value(&json!("plain")), "plain");
        assert_eq!(form_value(&json!(42)), "42");
        assert_eq!(form_value(&json!(true)), "true");
        assert_eq!(form_value(&json!(["a", "b"])), r#"["a","b"]"#);
        assert_eq!(form_value(&json!({"k": 1})), r#"{"k":1}"#);
    }

    #[test]
    fn test_health_projection() {
        assert!(Health::Healthy.is_healthy());
        assert!(!Health::Unreachable("connection refused".to_string()).is_healthy());
    }
}
