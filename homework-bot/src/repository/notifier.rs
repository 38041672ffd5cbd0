//! Chat notifier
//!
//! Delivers text to the single configured chat. Delivery problems come back
//! as `DeliveryFailure`; they are logged here and never panic.

use async_trait::async_trait;
use homework_client::TelegramClient;
use homework_core::Result;
use tracing::{debug, error};

/// Delivers a message to the configured chat
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends a text message
    ///
    /// # Arguments
    /// * `message` - The text to deliver
    async fn send(&self, message: &str) -> Result<()>;
}

/// Telegram implementation of Notifier
pub struct TelegramNotifier {
    client: TelegramClient,
    chat_id: String,
}

impl TelegramNotifier {
    /// Creates a notifier bound to one chat
    ///
    /// # Arguments
    /// * `client` - Bot API client
    /// * `chat_id` - Destination chat identifier
    pub fn new(client: TelegramClient, chat_id: String) -> Self {
        Self { client, chat_id }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, message: &str) -> Result<()> {
        match self.client.send_message(&self.chat_id, message).await {
            Ok(()) => {
                debug!("Message sent: {}", message);
                Ok(())
            }
            Err(e) => {
                error!("Failed to send message: {}", e);
                Err(e)
            }
        }
    }
}
