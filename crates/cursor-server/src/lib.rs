//! cursor-server library crate.
//!
//! An HTTP service that tracks one cursor on a bounded canvas, moves it in
//! response to batches of arrow-key presses, and reports a synthetic move
//! duration.
//!
//! # Architecture (clean architecture)
//!
//! ```text
//! Browser (JSON over HTTP)
//!         ↕
//! [cursor-server]
//!   ├── domain/           Pure types: JSON request/response bodies, ServerConfig
//!   ├── application/      CursorService: state, action gate, delay simulation
//!   └── infrastructure/
//!         ├── http_server/ axum router, CORS, request logging, error mapping
//!         └── config_file/ TOML config loading
//! ```
//!
//! # Layer rules
//!
//! - `domain` has no I/O and no async.
//! - `application` depends on `domain` and `cursor-core`, plus tokio sync
//!   primitives and timers.
//! - `infrastructure` depends on all other layers plus `axum` and `tower-http`.

/// Domain layer: wire types and configuration (no I/O).
pub mod domain;

/// Application layer: cursor state, action gate and the service facade.
pub mod application;

/// Infrastructure layer: HTTP server and config file loading.
pub mod infrastructure;
