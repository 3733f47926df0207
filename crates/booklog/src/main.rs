// SPDX-FileCopyrightText: 2026 Booklog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Booklog - a reading-tracker client.
//!
//! This is the binary entry point. The interactive shell is the rendering
//! layer: all domain state lives in `booklog-client`.

use clap::{Parser, Subcommand};

mod shell;
mod status;

/// Booklog - track what you read.
#[derive(Parser, Debug)]
#[command(name = "booklog", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Launch the interactive shell (default).
    Shell,
    /// Show configuration, session, and backend health.
    Status,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match booklog_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            booklog_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.app.log_level);

    let result = match cli.command {
        Some(Commands::Status) => status::run_status(&config).await,
        Some(Commands::Shell) | None => shell::run_shell(config).await,
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// Initialize the tracing subscriber on stderr, honoring `RUST_LOG` over the
/// configured level.
fn init_tracing(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
