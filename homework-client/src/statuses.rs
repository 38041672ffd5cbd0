//! Homework status endpoint

use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;
use tracing::{info, warn};

use crate::PracticumClient;
use crate::error::{describe, preview};
use homework_core::{Failure, Result};

impl PracticumClient {
    /// Fetch homework statuses updated since a point in time
    ///
    /// # Arguments
    /// * `since` - Unix seconds, sent as the `from_date` filter
    ///
    /// # Returns
    /// The decoded JSON body, untouched. Shape checks are the validator's job.
    pub async fn fetch(&self, since: i64) -> Result<Value> {
        info!("Sending request to {} with from_date={}", self.endpoint, since);

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", since)])
            .send()
            .await
            .map_err(|e| Failure::ConnectionFailure(describe(e)))?;

        self.handle_response(response).await
    }

    /// Check the status code and decode the body
    async fn handle_response(&self, response: reqwest::Response) -> Result<Value> {
        let status = response.status();

        // A non-200 answer is classified by its code alone; the body is best effort
        if status != StatusCode::OK {
            let body = preview(&response.text().await.unwrap_or_default());
            warn!("Status endpoint returned {}: {}", status, body);
            return Err(Failure::UnexpectedStatusCode {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| Failure::ConnectionFailure(describe(e)))?;

        serde_json::from_str(&body).map_err(|e| Failure::MalformedPayload(e.to_string()))
    }
}
