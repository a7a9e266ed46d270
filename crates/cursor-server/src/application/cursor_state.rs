//! The single mutable cursor position.
//!
//! The position lives in a `tokio::sync::watch` channel: readers take a
//! snapshot of the whole value with no lock contention against each other and
//! can never observe a half-written position, while the writer swaps in a new
//! value atomically.
//!
//! Writes take a [`GateGuard`] so that a read-modify-write move cannot run
//! outside the action gate and lose another move's update.

use cursor_core::{CanvasConfig, CursorPosition};
use thiserror::Error;
use tokio::sync::watch;

use super::gate::GateGuard;

/// Errors raised when storing a position.
#[derive(Debug, Error, PartialEq)]
pub enum StateError {
    /// The position lies outside the canvas and would break the bounds invariant.
    #[error("position ({}, {}) is outside the {width}x{height} canvas", .position.x, .position.y)]
    OutOfBounds {
        position: CursorPosition,
        width: f64,
        height: f64,
    },
}

/// Owner of the current cursor position.
#[derive(Debug)]
pub struct CursorState {
    current: watch::Sender<CursorPosition>,
}

impl CursorState {
    /// Creates the state with its seed position.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::OutOfBounds`] if `start` is not inside `bounds`.
    pub fn new(start: CursorPosition, bounds: &CanvasConfig) -> Result<Self, StateError> {
        check_bounds(start, bounds)?;
        let (current, _) = watch::channel(start);
        Ok(Self { current })
    }

    /// Returns the current position.  Does not wait for the action gate.
    pub fn read(&self) -> CursorPosition {
        *self.current.borrow()
    }

    /// Overwrites the current position.
    ///
    /// The guard argument ties the write to the action gate.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::OutOfBounds`] and leaves the stored position
    /// untouched if `position` is not inside `bounds`.
    pub fn replace(
        &self,
        _gate: &GateGuard<'_>,
        position: CursorPosition,
        bounds: &CanvasConfig,
    ) -> Result<(), StateError> {
        check_bounds(position, bounds)?;
        self.current.send_replace(position);
        Ok(())
    }

    /// Returns a receiver that is notified after every committed replace.
    pub fn subscribe(&self) -> watch::Receiver<CursorPosition> {
        self.current.subscribe()
    }
}

fn check_bounds(position: CursorPosition, bounds: &CanvasConfig) -> Result<(), StateError> {
    if bounds.contains(position) {
        Ok(())
    } else {
        Err(StateError::OutOfBounds {
            position,
            width: bounds.width(),
            height: bounds.height(),
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
