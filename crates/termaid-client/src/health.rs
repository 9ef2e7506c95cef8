//! Backend health probe

use reqwest::Client;
use url::Url;

use termaid_core::prelude::*;
use termaid_core::ConnectivityStatus;

/// Issues `GET /health` requests
#[derive(Debug, Clone)]
pub struct HealthClient {
    client: Client,
    endpoint: Url,
}

impl HealthClient {
    pub fn new(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    /// Probe the backend. The response body is ignored.
    pub async fn probe(&self) -> ConnectivityStatus {
        match self.client.get(self.endpoint.clone()).send().await {
            Ok(response) if response.status().is_success() => ConnectivityStatus::Connected,
            Ok(response) => {
                warn!("health probe returned HTTP {}", response.status());
                ConnectivityStatus::ServerError
            }
            Err(e) => {
                debug!("health probe failed: {}", e);
                ConnectivityStatus::Disconnected
            }
        }
    }
}
