//! Homework HTTP Clients
//!
//! Thin, typed clients for the two remote services the bot talks to:
//! - [`PracticumClient`]: the homework status endpoint
//! - [`TelegramClient`]: the Bot API `sendMessage` call
//!
//! Both classify every failure into [`homework_core::Failure`] so the poll
//! loop never sees a raw transport error.
//!
//! # Example
//!
//! ```no_run
//! use homework_client::PracticumClient;
//!
//! #[tokio::main]
//! async fn main() -> homework_client::Result<()> {
//!     let client = PracticumClient::new(
//!         "https://practicum.yandex.ru/api/user_api/homework_statuses/",
//!         "token",
//!     );
//!
//!     let payload = client.fetch(0).await?;
//!     println!("{payload}");
//!     Ok(())
//! }
//! ```

pub mod error;
mod statuses;
pub mod telegram;

pub use homework_core::{Failure, Result};
pub use telegram::TelegramClient;

use reqwest::Client;

/// HTTP client for the homework status endpoint
#[derive(Clone)]
pub struct PracticumClient {
    /// Full endpoint URL, queried as-is with a `from_date` filter
    endpoint: String,
    /// OAuth token; sent in a header, never logged
    token: String,
    /// HTTP client instance
    client: Client,
}

impl PracticumClient {
    /// Create a new status client
    ///
    /// # Arguments
    /// * `endpoint` - The status endpoint URL
    /// * `token` - The OAuth token presented in the `Authorization` header
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(endpoint, token, Client::new())
    }

    /// Create a new status client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client,
        }
    }

    /// Get the endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl std::fmt::Debug for PracticumClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PracticumClient")
            .field("endpoint", &self.endpoint)
            .field("token", &"<redacted>")
            .finish()
    }
}
