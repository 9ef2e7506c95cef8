//! Backend abstraction over the three service contracts
//!
//! The TUI spawns tasks against the `Send` variant; tests substitute a
//! scripted implementation (see `test_utils`, feature `test-helpers`).

use std::time::Duration;

use reqwest::Client;
use url::Url;

use termaid_core::prelude::*;
use termaid_core::ConnectivityStatus;

use crate::analysis::AnalysisClient;
use crate::execution::ExecutionClient;
use crate::health::HealthClient;
use crate::protocol::{ExecutionResult, ANALYZE_PATH, EXECUTE_PATH, HEALTH_PATH};

/// Operations the session controller needs from the outside world
#[trait_variant::make(Backend: Send)]
pub trait LocalBackend {
    /// Run a command; never fails, faults come back as `error: true`
    async fn execute(&self, command: &str, cwd: &str) -> ExecutionResult;

    /// Ask for a suggestion about error output or a chat message
    async fn analyze(&self, text: &str) -> Result<String>;

    /// Probe service reachability
    async fn check_health(&self) -> ConnectivityStatus;
}

/// HTTP implementation sharing one connection pool across all three clients
#[derive(Debug, Clone)]
pub struct HttpBackend {
    base_url: Url,
    execution: ExecutionClient,
    analysis: AnalysisClient,
    health: HealthClient,
}

impl HttpBackend {
    /// Build a backend rooted at `base_url` with a per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base = parse_base_url(base_url)?;

        let client = Client::builder()
            .user_agent(concat!("termaid/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| Error::transport(format!("failed to initialize HTTP client: {e}")))?;

        let execution = ExecutionClient::new(client.clone(), join(&base, EXECUTE_PATH)?);
        let analysis = AnalysisClient::new(client.clone(), join(&base, ANALYZE_PATH)?);
        let health = HealthClient::new(client, join(&base, HEALTH_PATH)?);

        info!("Backend configured at {}", base);

        Ok(Self {
            base_url: base,
            execution,
            analysis,
            health,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl Backend for HttpBackend {
    async fn execute(&self, command: &str, cwd: &str) -> ExecutionResult {
        self.execution.execute(command, cwd).await
    }

    async fn analyze(&self, text: &str) -> Result<String> {
        self.analysis.analyze(text).await
    }

    async fn check_health(&self) -> ConnectivityStatus {
        self.health.probe().await
    }
}

/// Parse the configured base URL, forcing a trailing slash so relative
/// endpoint joins keep any path prefix (`http://host/api/` + `execute`)
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim()).map_err(|e| Error::invalid_url(raw, e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::invalid_url(
            raw,
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn join(base: &Url, path: &str) -> Result<Url> {
    base.join(path)
        .map_err(|e| Error::invalid_url(base.as_str(), e.to_string()))
}
