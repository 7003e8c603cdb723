use reqwest;
use std::time::Duration;
use tracing;

use crate::errors::ApiError;
use crate::models::{Client, ClientRef, EmailRequest};

/// Client for interacting with the UCRM REST API.
///
/// One instance is constructed per run and shared by reference between the
/// batch runner and the notifier; the underlying `reqwest::Client` handles
/// connection reuse.
#[derive(Clone)]
pub struct UcrmClient {
    client: reqwest::Client,
    base_url: String,
    app_key: String,
}

impl UcrmClient {
    /// Creates a new `UcrmClient`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the UCRM API, without trailing slash.
    /// * `app_key` - The plugin app key sent as `X-Auth-App-Key`.
    pub fn new(base_url: String, app_key: String) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::Transport(format!("Failed to create UCRM client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            app_key,
        })
    }

    /// Fetches the full client list.
    ///
    /// # Returns
    ///
    /// * `Result<Vec<ClientRef>, ApiError>` - One entry per client; only the
    ///   ids are retained, detail comes from `get_client`.
    pub async fn list_clients(&self) -> Result<Vec<ClientRef>, ApiError> {
        let url = format!("{}/clients", self.base_url);
        tracing::debug!("Fetching client list: {}", url);

        let response = self
            .client
            .get(&url)
            .header("X-Auth-App-Key", &self.app_key)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("UCRM request failed: {}", e)))?;

        let response = Self::check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(format!("Failed to parse client list: {}", e)))
    }

    /// Fetches one client with attributes and contacts.
    ///
    /// # Arguments
    ///
    /// * `id` - The UCRM client id.
    pub async fn get_client(&self, id: i64) -> Result<Client, ApiError> {
        let url = format!("{}/clients/{}", self.base_url, id);
        tracing::debug!("Fetching client {}: {}", id, url);

        let response = self
            .client
            .get(&url)
            .header("X-Auth-App-Key", &self.app_key)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("UCRM request failed: {}", e)))?;

        let response = Self::check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(format!("Failed to parse client {}: {}", id, e)))
    }

    /// Enqueues a templated email for asynchronous delivery by the CRM.
    ///
    /// Delivery outcome is not observed; a success here only means the CRM
    /// accepted the message into its outbound queue.
    pub async fn enqueue_email(
        &self,
        template_id: u32,
        request: &EmailRequest,
    ) -> Result<(), ApiError> {
        let url = format!("{}/email/{}/enqueue", self.base_url, template_id);
        tracing::debug!("Enqueueing email for client {}: {}", request.client_id, url);

        let response = self
            .client
            .post(&url)
            .header("X-Auth-App-Key", &self.app_key)
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("UCRM request failed: {}", e)))?;

        Self::check_status(response).await?;
        Ok(())
    }

    /// Maps a non-success status to `ApiError::Http`, reading the body for
    /// the operator log.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(ApiError::Http { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = UcrmClient::new(
            "https://crm.example.com/api/v1.0".to_string(),
            "key".to_string(),
        );
        assert!(client.is_ok());
    }
}
