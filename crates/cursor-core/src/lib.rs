//! # cursor-core
//!
//! Domain types for the cursor service: the canvas the cursor lives on, the
//! cursor position itself, the arrow-key presses that move it, and the move
//! calculator that turns a batch of key presses into a clamped destination
//! plus a synthetic move duration.
//!
//! This crate has no I/O, no async runtime and no global state.  The service
//! crate (`cursor-server`) owns the mutable position and serialises access to
//! it; everything here is a pure function of its inputs.
//!
//! # Architecture overview
//!
//! - **`domain::canvas`** – [`CanvasConfig`], the immutable inclusive bounds
//!   `[0, width] × [0, height]`.
//! - **`domain::position`** – [`CursorPosition`], a plain `Copy` value.
//! - **`domain::keys`** – [`KeyPress`] and [`KeyPressBatch`], parsed from the
//!   browser's `KeyboardEvent.key` tokens.
//! - **`domain::movement`** – [`compute`], the move calculator.

pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `cursor_core::CanvasConfig` instead of `cursor_core::domain::canvas::CanvasConfig`.
pub use domain::canvas::{CanvasConfig, CanvasError};
pub use domain::keys::{KeyPress, KeyPressBatch, KeyTally};
pub use domain::movement::{compute, move_time_ms, MoveResult, STEP_SIZE};
pub use domain::position::CursorPosition;
