//! Application layer for cursor-server.
//!
//! The application layer owns the service's only mutable state and decides
//! *when* things happen; the domain crate decides *what* a move does, and the
//! infrastructure layer decides *how* requests arrive.
//!
//! # Responsibilities
//!
//! - Holding the current cursor position ([`CursorState`])
//! - Serialising every mutating or delay-simulating action ([`SerializedActionGate`])
//! - Simulating move and focus durations ([`DelaySimulator`])
//! - Tying it together behind [`CursorService`]
//!
//! # What does NOT belong here?
//!
//! - HTTP routing, CORS, status codes (infrastructure)
//! - The movement rules themselves (`cursor-core`)

pub mod cursor_service;
pub mod cursor_state;
pub mod delay;
pub mod gate;

pub use cursor_service::{CursorService, ServiceError};
pub use cursor_state::{CursorState, StateError};
pub use delay::{DelaySimulator, TokioDelay};
pub use gate::{GateGuard, SerializedActionGate};
