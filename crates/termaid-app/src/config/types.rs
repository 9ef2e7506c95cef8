//! Configuration types for termaid
//!
//! Defines `Settings` (the `config.toml` root) and its sections.

use serde::{Deserialize, Serialize};

/// Application settings (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub session: SessionSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Backend connection settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerSettings {
    /// Base URL the `/health`, `/execute` and `/analyze` paths are joined to
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request transport timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Re-probe `/health` every N seconds (0 = probe once at start)
    #[serde(default)]
    pub health_poll_secs: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
            health_poll_secs: 0,
        }
    }
}

/// Session start-up settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SessionSettings {
    /// Initial working directory (empty = current directory of the process)
    #[serde(default)]
    pub start_dir: String,
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Maximum commands kept in history (0 = unbounded)
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_request_timeout() -> u64 {
    60
}

fn default_history_limit() -> usize {
    500
}
