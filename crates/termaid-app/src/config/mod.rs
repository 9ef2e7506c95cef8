//! Configuration file parsing for termaid
//!
//! Supports `<config_dir>/termaid/config.toml` plus environment and
//! command-line overrides.

pub mod settings;
pub mod types;

pub use settings::{
    apply_cli_overrides, apply_env_overrides, apply_overrides_from, default_config_path,
    init_config_file, load_settings, resolve_start_dir, CliOverrides, CWD_ENV_VAR,
    SERVER_ENV_VAR,
};
pub use types::*;
