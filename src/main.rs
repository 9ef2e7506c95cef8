//! termaid - a terminal with an AI assistant beside it
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use termaid_app::config::{self, CliOverrides};
use termaid_core::prelude::*;

/// termaid - run commands, get help when they fail
#[derive(Parser, Debug)]
#[command(name = "termaid")]
#[command(version, about = "A terminal with an AI assistant that explains failed commands", long_about = None)]
struct Args {
    /// Path to config.toml (defaults to the user config directory)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Backend base URL, e.g. http://127.0.0.1:5000
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Starting working directory
    #[arg(long, value_name = "DIR")]
    cwd: Option<String>,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.init_config {
        let path = config::init_config_file(args.config.as_deref())?;
        eprintln!("Config file: {}", path.display());
        return Ok(());
    }

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Log to file, the TUI owns stdout
    termaid_core::logging::init()?;

    let mut settings = config::load_settings(args.config.as_deref());
    config::apply_env_overrides(&mut settings);
    config::apply_cli_overrides(
        &mut settings,
        &CliOverrides {
            server: args.server,
            cwd: args.cwd,
        },
    );

    let start_dir = config::resolve_start_dir(&settings);
    info!("Backend: {}", settings.server.base_url);

    let result = termaid_tui::run(settings, start_dir).await;
    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
        if let Ok(log_file) = termaid_core::logging::get_current_log_file() {
            eprintln!("See {} for details", log_file.display());
        }
    }

    info!("termaid exiting");
    result
}
