//! Server configuration types.
//!
//! [`ServerConfig`] is the single source of truth for all runtime settings.
//! It is assembled once at startup from CLI arguments and an optional TOML
//! file, then handed to the service.  Nothing here reads the environment or
//! the file system; that is the infrastructure layer's job.

use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use cursor_core::{CanvasConfig, CursorPosition};

/// Default listen port, matching what the browser client is built against.
pub const DEFAULT_PORT: u16 = 8000;

/// How long a focus operation holds the action gate.
pub const DEFAULT_FOCUS_DURATION: Duration = Duration::from_millis(2000);

/// All runtime configuration for the cursor service.
///
/// # Example
///
/// ```rust
/// use cursor_server::domain::ServerConfig;
///
/// let cfg = ServerConfig::default();
/// assert_eq!(cfg.bind_addr.port(), 8000);
/// assert_eq!(cfg.canvas.width(), 1850.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// The address and port the HTTP server binds to.
    pub bind_addr: SocketAddr,

    /// Bounds every cursor position is clamped to.
    pub canvas: CanvasConfig,

    /// Where the cursor sits when the process starts.
    ///
    /// Must lie inside `canvas`; the config loader enforces this.
    pub start_position: CursorPosition,

    /// How long `GET /focus_cursor/` blocks the caller and the action gate.
    pub focus_duration: Duration,
}

impl Default for ServerConfig {
    /// | Field           | Default            |
    /// |-----------------|--------------------|
    /// | bind_addr       | `127.0.0.1:8000`   |
    /// | canvas          | 1850 × 925         |
    /// | start_position  | (925, 456)         |
    /// | focus_duration  | 2000 ms            |
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
            canvas: CanvasConfig::default(),
            start_position: CursorPosition::DEFAULT_START,
            focus_duration: DEFAULT_FOCUS_DURATION,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
