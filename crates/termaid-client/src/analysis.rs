//! Reasoning-service client
//!
//! Unlike execution, analysis surfaces faults as `Err`; the session
//! controller turns them into a fixed apology message.

use reqwest::Client;
use url::Url;

use termaid_core::prelude::*;

use crate::protocol::{AnalyzeRequest, AnalyzeResponse};

/// Issues `POST /analyze` requests
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    client: Client,
    endpoint: Url,
}

impl AnalysisClient {
    pub fn new(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Ask the reasoning service about `text` (error output or a chat message)
    pub async fn analyze(&self, text: &str) -> Result<String> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&AnalyzeRequest { output: text })
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("analyze returned HTTP {}", status);
            return Err(Error::http_status(status.as_u16()));
        }

        let body: AnalyzeResponse = response
            .json()
            .await
            .map_err(|e| Error::analysis(format!("undecodable response: {e}")))?;

        body.suggestion
            .ok_or_else(|| Error::analysis("response did not include a suggestion"))
    }
}
