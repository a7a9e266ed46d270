//! CursorService: the three cursor actions behind one shared handle.
//!
//! The service owns the canvas, the current position, the action gate and
//! the delay simulator.  The HTTP layer holds it as `Arc<CursorService>`; no
//! part of it is global, so tests build as many independent services as they
//! like.
//!
//! ```text
//! position()    ── read ──────────────────────────────────────────► position
//! move_cursor() ── gate ─ read ─ compute ─ replace ─ spawn delay ─► MoveResult
//! focus()       ── gate ─ await delay (focus_duration) ───────────► Duration
//! ```
//!
//! A move either commits its new position or fails before touching state;
//! there is no partially applied move.

use std::sync::Arc;
use std::time::Duration;

use cursor_core::{compute, CanvasConfig, CursorPosition, KeyPressBatch, MoveResult};
use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, info};

use crate::domain::ServerConfig;

use super::cursor_state::{CursorState, StateError};
use super::delay::{self, DelaySimulator, TokioDelay};
use super::gate::SerializedActionGate;

/// Errors returned by [`CursorService`] operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storing a position failed.
    #[error(transparent)]
    State(#[from] StateError),
}

/// Owner of the cursor and the rules for changing it.
pub struct CursorService {
    canvas: CanvasConfig,
    state: CursorState,
    gate: SerializedActionGate,
    delay: Arc<dyn DelaySimulator>,
    focus_duration: Duration,
}

impl CursorService {
    /// Creates a service using real Tokio timers.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::State`] if the configured start position lies
    /// outside the configured canvas.
    pub fn new(config: &ServerConfig) -> Result<Self, ServiceError> {
        Self::with_delay(config, Arc::new(TokioDelay))
    }

    /// Creates a service with an injected [`DelaySimulator`].
    ///
    /// # Errors
    ///
    /// Same as [`CursorService::new`].
    pub fn with_delay(
        config: &ServerConfig,
        delay: Arc<dyn DelaySimulator>,
    ) -> Result<Self, ServiceError> {
        let state = CursorState::new(config.start_position, &config.canvas)?;
        Ok(Self {
            canvas: config.canvas,
            state,
            gate: SerializedActionGate::new(),
            delay,
            focus_duration: config.focus_duration,
        })
    }

    /// The canvas positions are clamped to.
    pub fn canvas(&self) -> CanvasConfig {
        self.canvas
    }

    /// The current cursor position.  Never waits for the action gate.
    pub fn position(&self) -> CursorPosition {
        self.state.read()
    }

    /// Subscribes to committed position changes.
    pub fn subscribe(&self) -> watch::Receiver<CursorPosition> {
        self.state.subscribe()
    }

    /// Returns `true` while a move or focus holds the action gate.
    pub fn is_busy(&self) -> bool {
        self.gate.is_held()
    }

    /// Applies a batch of key presses to the cursor.
    ///
    /// Waits for the action gate, computes the destination from the current
    /// position, stores it, then starts the simulated move delay in the
    /// background and returns without waiting for it.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::State`] if the computed position would break
    /// the canvas invariant.  The stored position is unchanged in that case.
    pub async fn move_cursor(&self, batch: &KeyPressBatch) -> Result<MoveResult, ServiceError> {
        let gate = self.gate.acquire("move").await;

        let current = self.state.read();
        let result = compute(current, batch, &self.canvas);
        debug!(
            "move of {} key presses from ({}, {}) takes {} steps",
            batch.len(),
            current.x,
            current.y,
            result.steps
        );

        self.state.replace(&gate, result.new_position, &self.canvas)?;

        info!(
            "moving cursor to new position: ({}, {}) with a move time of {}ms",
            result.new_position.x, result.new_position.y, result.move_time_ms
        );

        delay::spawn_detached(
            Arc::clone(&self.delay),
            delay::duration_from_ms(result.move_time_ms),
        );

        Ok(result)
    }

    /// Simulates focusing the cursor.
    ///
    /// Holds the action gate for the whole focus duration, so moves and other
    /// focuses queue behind it.  Returns the duration that was simulated.
    pub async fn focus(&self) -> Duration {
        let _gate = self.gate.acquire("focus").await;
        self.delay.simulate(self.focus_duration).await;
        debug!("cursor focus completed");
        self.focus_duration
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
