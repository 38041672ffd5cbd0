//! Status repository
//!
//! Fetches the raw status payload from the homework service.

use async_trait::async_trait;
use homework_client::PracticumClient;
use homework_core::Result;
use serde_json::Value;

/// Repository trait for the homework status endpoint
#[async_trait]
pub trait StatusRepository: Send + Sync {
    /// Fetches statuses updated since `since` (unix seconds)
    ///
    /// Returns the decoded but unvalidated payload.
    async fn fetch(&self, since: i64) -> Result<Value>;
}

/// HTTP implementation of StatusRepository
pub struct HttpStatusRepository {
    client: PracticumClient,
}

impl HttpStatusRepository {
    pub fn new(client: PracticumClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StatusRepository for HttpStatusRepository {
    async fn fetch(&self, since: i64) -> Result<Value> {
        self.client.fetch(since).await
    }
}
