//! Domain layer for cursor-server.
//!
//! Pure types with no dependencies on I/O, networking or async runtimes:
//!
//! - The JSON bodies exchanged with the browser
//! - The runtime configuration structure

pub mod config;
pub mod messages;

pub use config::ServerConfig;
pub use messages::{
    ErrorResponse, FocusCursorResponse, KeyPressJson, MoveCursorRequest, MoveCursorResponse,
    PositionJson,
};
