//! Cursor service entry point.
//!
//! Serves a small JSON API that tracks one cursor on a bounded canvas:
//!
//! ```text
//! GET  /get_cursor_position/   current position
//! POST /move_cursor/           apply a batch of arrow-key presses
//! GET  /focus_cursor/          simulate a 2 s focus (blocks other actions)
//! ```
//!
//! # Usage
//!
//! ```text
//! cursor-server [OPTIONS]
//!
//! Options:
//!   --bind   <ADDR>  IP address to listen on [default: 127.0.0.1]
//!   --port   <PORT>  TCP port to listen on [default: 8000]
//!   --config <PATH>  Optional TOML file with canvas size and start position
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable        | Default     | Description             |
//! |-----------------|-------------|-------------------------|
//! | `CURSOR_BIND`   | `127.0.0.1` | Listen address          |
//! | `CURSOR_PORT`   | `8000`      | Listen port             |
//! | `CURSOR_CONFIG` | (none)      | Path to the config file |
//!
//! CLI args take precedence when both are present.  Log verbosity follows
//! `RUST_LOG` (default `info`).

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cursor_server::domain::ServerConfig;
use cursor_server::infrastructure::{load_config, run_server};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Single-cursor canvas service.
#[derive(Debug, Parser)]
#[command(
    name = "cursor-server",
    about = "HTTP service that moves a single cursor across a bounded canvas",
    version
)]
struct Cli {
    /// IP address to bind the HTTP server to.
    ///
    /// Use `0.0.0.0` to accept connections from other machines.
    #[arg(long, default_value = "127.0.0.1", env = "CURSOR_BIND")]
    bind: String,

    /// TCP port for the HTTP server.
    #[arg(long, default_value_t = 8000, env = "CURSOR_PORT")]
    port: u16,

    /// Path to a TOML config file overriding the canvas size and the cursor's
    /// start position.
    #[arg(long, env = "CURSOR_CONFIG")]
    config: Option<PathBuf>,
}

impl Cli {
    /// Converts the parsed CLI arguments into a [`ServerConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if `--bind` is not a valid IP address, or if the
    /// config file cannot be read, parsed or validated.
    fn into_server_config(self) -> anyhow::Result<ServerConfig> {
        let bind_addr: SocketAddr = format!("{}:{}", self.bind, self.port)
            .parse()
            .with_context(|| format!("invalid bind address: '{}:{}'", self.bind, self.port))?;

        let base = ServerConfig {
            bind_addr,
            ..ServerConfig::default()
        };

        match self.config {
            Some(path) => {
                let file = load_config(&path)
                    .with_context(|| format!("failed to load config from {}", path.display()))?;
                file.apply(base)
                    .with_context(|| format!("invalid config in {}", path.display()))
            }
            None => Ok(base),
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Cli::parse().into_server_config()?;

    info!("cursor service starting on {}", config.bind_addr);

    run_server(config, shutdown_signal()).await?;

    info!("cursor service stopped");
    Ok(())
}

/// Resolves when the user presses Ctrl+C.
///
/// If the signal handler cannot be installed the future never resolves, so
/// the server keeps running rather than shutting down immediately.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("received Ctrl+C, starting graceful shutdown"),
        Err(e) => {
            error!("failed to listen for Ctrl+C signal: {e}");
            std::future::pending::<()>().await;
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
