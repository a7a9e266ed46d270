//! The action gate: one mutating or delay-simulating action at a time.
//!
//! Moves and focuses both acquire the gate before doing any work.  Position
//! reads never touch it.  Holding the gate across an `.await` is the whole
//! point (focus sleeps while holding it), which is why this is a
//! `tokio::sync::Mutex` rather than a `std` one.
//!
//! # Ordering
//!
//! Callers that find the gate held wait until it is released.  Which waiter
//! goes next is not part of the contract.  Tokio's mutex happens to be fair
//! today, but nothing in this crate relies on that.
//!
//! # Liveness
//!
//! There is no timeout on [`SerializedActionGate::acquire`].  Release happens
//! when the [`GateGuard`] is dropped, which covers normal returns, `?` early
//! exits and unwinding alike; a holder that never finishes blocks every other
//! action indefinitely.

use tokio::sync::{Mutex, MutexGuard};
use tracing::debug;

/// Process-wide mutual exclusion for cursor actions.
#[derive(Debug, Default)]
pub struct SerializedActionGate {
    lock: Mutex<()>,
}

/// Proof that the gate is held.  Dropping it releases the gate.
#[derive(Debug)]
pub struct GateGuard<'a> {
    _held: MutexGuard<'a, ()>,
    action: &'static str,
}

impl SerializedActionGate {
    /// Creates an unheld gate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits until the gate is free and takes it.
    ///
    /// `action` names the caller in debug logs.
    pub async fn acquire(&self, action: &'static str) -> GateGuard<'_> {
        debug!("{action}: waiting for action gate");
        let held = self.lock.lock().await;
        debug!("{action}: action gate acquired");
        GateGuard { _held: held, action }
    }

    /// Returns `true` while some action holds the gate.
    pub fn is_held(&self) -> bool {
        self.lock.try_lock().is_err()
    }
}

impl GateGuard<'_> {
    /// The action that holds the gate.
    pub fn action(&self) -> &'static str {
        self.action
    }
}

impl Drop for GateGuard<'_> {
    fn drop(&mut self) {
        debug!("{}: action gate released", self.action);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
