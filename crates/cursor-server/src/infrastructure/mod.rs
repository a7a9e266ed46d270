//! Infrastructure layer for cursor-server.
//!
//! Everything that touches the outside world lives here:
//!
//! - Binding the TCP listener and serving HTTP (axum)
//! - CORS, request/response logging and panic recovery (tower-http)
//! - Translating application errors into HTTP responses
//! - Reading the optional TOML config file
//!
//! # What does NOT belong here?
//!
//! - Cursor state or the action gate (application layer)
//! - Movement rules (`cursor-core`)
//! - CLI parsing (that is done in `main.rs`)

pub mod api_error;
pub mod config_file;
pub mod http_server;

pub use api_error::ApiError;
pub use config_file::{load_config, ConfigError, FileConfig};
pub use http_server::{build_router, run_server};
