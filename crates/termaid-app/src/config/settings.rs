//! Settings loader for termaid's `config.toml`
//!
//! Resolution order, lowest to highest precedence:
//! 1. built-in defaults
//! 2. `config.toml` (explicit `--config` path, else the user config dir)
//! 3. `TERMAID_SERVER` / `TERMAID_CWD` environment variables
//! 4. command-line flags (applied by the binary via [`CliOverrides`])

use std::path::{Path, PathBuf};

use termaid_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "termaid";

pub const SERVER_ENV_VAR: &str = "TERMAID_SERVER";
pub const CWD_ENV_VAR: &str = "TERMAID_CWD";

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub server: Option<String>,
    pub cwd: Option<String>,
}

/// Default location: `<config_dir>/termaid/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `path`, or from [`default_config_path`] when `None`.
///
/// A missing file yields defaults. An unreadable or malformed file is
/// logged and also yields defaults.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let config_path = match path.map(Path::to_path_buf).or_else(default_config_path) {
        Some(p) => p,
        None => {
            debug!("No config directory available, using defaults");
            return Settings::default();
        }
    };

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Apply environment overrides from the process environment
pub fn apply_env_overrides(settings: &mut Settings) {
    apply_overrides_from(settings, |key| std::env::var(key).ok());
}

/// Apply environment-style overrides from an arbitrary lookup
pub fn apply_overrides_from(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(server) = lookup(SERVER_ENV_VAR).filter(|v| !v.trim().is_empty()) {
        debug!("{} overrides base_url", SERVER_ENV_VAR);
        settings.server.base_url = server;
    }
    if let Some(cwd) = lookup(CWD_ENV_VAR).filter(|v| !v.trim().is_empty()) {
        debug!("{} overrides start_dir", CWD_ENV_VAR);
        settings.session.start_dir = cwd;
    }
}

/// Apply command-line overrides
pub fn apply_cli_overrides(settings: &mut Settings, cli: &CliOverrides) {
    if let Some(server) = &cli.server {
        settings.server.base_url = server.clone();
    }
    if let Some(cwd) = &cli.cwd {
        settings.session.start_dir = cwd.clone();
    }
}

/// Resolve the session's initial working directory.
///
/// Falls back to the process working directory, then to `.`.
pub fn resolve_start_dir(settings: &Settings) -> String {
    let configured = settings.session.start_dir.trim();
    if !configured.is_empty() {
        return configured.to_string();
    }

    match std::env::current_dir() {
        Ok(dir) => dir.to_string_lossy().into_owned(),
        Err(e) => {
            warn!("Could not read current directory: {}", e);
            ".".to_string()
        }
    }
}

/// Write a commented default `config.toml` to `path` (or the default
/// location). Existing files are left untouched.
pub fn init_config_file(path: Option<&Path>) -> Result<PathBuf> {
    let config_path = path
        .map(Path::to_path_buf)
        .or_else(default_config_path)
        .ok_or_else(|| Error::config("No config directory available on this platform"))?;

    if config_path.exists() {
        info!("Config already exists at {:?}", config_path);
        return Ok(config_path);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    let default_content = r#"# termaid configuration

[server]
# Backend exposing /health, /execute and /analyze
base_url = "http://127.0.0.1:5000"
# Seconds before a request is abandoned
request_timeout_secs = 60
# Re-check /health every N seconds (0 = only at start-up)
health_poll_secs = 0

[session]
# Initial working directory ("" = directory termaid was started from)
start_dir = ""

[ui]
# Commands remembered for Up/Down recall (0 = unbounded)
history_limit = 500
"#;

    std::fs::write(&config_path, default_content)
        .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
    info!("Created default config at {:?}", config_path);

    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_missing_file_uses_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(Some(&temp.path().join("nope.toml")));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_reads_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[server]
base_url = "http://backend:9000"
health_poll_secs = 15

[ui]
history_limit = 20
"#,
        )
        .unwrap();

        let settings = load_settings(Some(&path));
        assert_eq!(settings.server.base_url, "http://backend:9000");
        assert_eq!(settings.server.health_poll_secs, 15);
        assert_eq!(settings.ui.history_limit, 20);
    }

    #[test]
    fn test_load_settings_malformed_file_uses_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[server\nbase_url = ").unwrap();

        assert_eq!(load_settings(Some(&path)), Settings::default());
    }

    #[test]
    fn test_init_config_file_round_trips_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        let written = init_config_file(Some(&path)).unwrap();
        assert_eq!(written, path);
        assert_eq!(load_settings(Some(&path)), Settings::default());
    }

    #[test]
    fn test_init_config_file_keeps_existing() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[ui]\nhistory_limit = 3\n").unwrap();

        init_config_file(Some(&path)).unwrap();

        assert_eq!(load_settings(Some(&path)).ui.history_limit, 3);
    }

    #[test]
    fn test_overrides_from_lookup() {
        let mut settings = Settings::default();
        apply_overrides_from(&mut settings, |key| match key {
            SERVER_ENV_VAR => Some("http://env:1".to_string()),
            CWD_ENV_VAR => Some("  ".to_string()),
            _ => None,
        });

        assert_eq!(settings.server.base_url, "http://env:1");
        assert!(settings.session.start_dir.is_empty());
    }

    #[test]
    #[serial]
    fn test_env_overrides_then_cli_wins() {
        std::env::set_var(SERVER_ENV_VAR, "http://env:2");
        std::env::set_var(CWD_ENV_VAR, "/from/env");

        let mut settings = Settings::default();
        apply_env_overrides(&mut settings);
        assert_eq!(settings.server.base_url, "http://env:2");
        assert_eq!(settings.session.start_dir, "/from/env");

        apply_cli_overrides(
            &mut settings,
            &CliOverrides {
                server: Some("http://cli:3".to_string()),
                cwd: None,
            },
        );
        assert_eq!(settings.server.base_url, "http://cli:3");
        assert_eq!(settings.session.start_dir, "/from/env");

        std::env::remove_var(SERVER_ENV_VAR);
        std::env::remove_var(CWD_ENV_VAR);
    }

    #[test]
    fn test_resolve_start_dir_prefers_configured() {
        let mut settings = Settings::default();
        settings.session.start_dir = "C:\\Users\\dev".to_string();
        assert_eq!(resolve_start_dir(&settings), "C:\\Users\\dev");
    }

    #[test]
    #[serial]
    fn test_resolve_start_dir_falls_back_to_process_dir() {
        let settings = Settings::default();
        let expected = std::env::current_dir()
            .unwrap()
            .to_string_lossy()
            .into_owned();
        assert_eq!(resolve_start_dir(&settings), expected);
    }
}
