//! Telegram Bot API client
//!
//! Only `sendMessage` is needed. The bot token is part of every request path,
//! so URLs are never logged and transport errors are stripped of them. The
//! chat id is treated as a secret too and stays out of the logs.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{describe, preview};
use homework_core::{Failure, Result};

/// Public Bot API server
pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

/// HTTP client for the Telegram Bot API
#[derive(Clone)]
pub struct TelegramClient {
    base_url: String,
    token: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Envelope every Bot API method answers with
#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

impl TelegramClient {
    /// Create a client against the public Bot API
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_API_URL, token)
    }

    /// Create a client against another Bot API server (self-hosted or a test double)
    pub fn with_base_url(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
            client: Client::new(),
        }
    }

    /// Get the base URL of the Bot API server
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, self.token, method)
    }

    /// Send a text message to a chat
    ///
    /// Any transport fault, non-success status, or `ok: false` answer is a
    /// [`Failure::DeliveryFailure`].
    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<()> {
        debug!("Sending message to the configured chat");

        let response = self
            .client
            .post(self.api_url("sendMessage"))
            .json(&SendMessageRequest { chat_id, text })
            .send()
            .await
            .map_err(|e| Failure::DeliveryFailure(describe(e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Failure::DeliveryFailure(describe(e)))?;

        let answer = serde_json::from_str::<ApiResponse>(&body).ok();

        match answer {
            Some(ApiResponse { ok: true, .. }) if status.is_success() => Ok(()),
            Some(ApiResponse {
                description: Some(description),
                ..
            }) => Err(Failure::DeliveryFailure(format!(
                "{} ({})",
                description,
                status.as_u16()
            ))),
            _ => Err(Failure::DeliveryFailure(format!(
                "Bot API returned {}: {}",
                status.as_u16(),
                preview(&body)
            ))),
        }
    }
}

impl std::fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramClient")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish()
    }
}
