//! The move calculator.
//!
//! [`compute`] maps the current position, a batch of key presses and the
//! canvas bounds to a new clamped position plus a synthetic move duration.
//! It is a pure function: the caller decides whether and when to store the
//! result.
//!
//! # Algorithm
//!
//! ```text
//! tally   up/down/left/right presses
//! delta   dx = (right - left) * STEP_SIZE,  dy = (down - up) * STEP_SIZE
//! steps   steps_x = |right - left|,         steps_y = |down - up|
//! clamp   lower bound first, then upper bound, per axis:
//!           x <= 0      → x = 0,     steps_x = floor(|current.x| / STEP_SIZE)
//!           y <= 0      → y = 0,     steps_y = floor(|current.y| / STEP_SIZE)
//!           x >= width  → x = width, steps_x = floor(|width  - current.x| / STEP_SIZE)
//!           y >= height → y = height,steps_y = floor(|height - current.y| / STEP_SIZE)
//! time    3 * sqrt(steps_x + steps_y) * 1000 ms
//! ```
//!
//! The lower-bound recount uses the distance from the *original* coordinate
//! to zero, whatever the direction of travel.  Clients rely on these exact
//! durations to pace their animation, so the recount rules are kept as-is.
//! When both clamps fire on one axis (only possible on a zero-sized canvas)
//! the upper-bound recount wins.

use super::canvas::CanvasConfig;
use super::keys::KeyPressBatch;
use super::position::CursorPosition;

/// Distance covered by one key press, in canvas units.
pub const STEP_SIZE: f64 = 50.0;

/// Outcome of one move calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveResult {
    /// Destination, always inside the canvas.
    pub new_position: CursorPosition,
    /// Step count the duration was derived from.
    pub steps: u64,
    /// Synthetic time the move takes, in milliseconds.
    pub move_time_ms: f64,
}

/// Computes where a batch of key presses moves the cursor and how long it takes.
///
/// # Example
///
/// ```rust
/// use cursor_core::{compute, CanvasConfig, CursorPosition, KeyPressBatch};
///
/// let canvas = CanvasConfig::new(1850.0, 925.0).unwrap();
/// let batch = KeyPressBatch::from_tokens(["ArrowUp", "ArrowUp", "ArrowRight"]);
/// let result = compute(CursorPosition::new(925.0, 456.0), &batch, &canvas);
///
/// assert_eq!(result.new_position, CursorPosition::new(975.0, 356.0));
/// assert_eq!(result.steps, 3);
/// ```
pub fn compute(current: CursorPosition, batch: &KeyPressBatch, bounds: &CanvasConfig) -> MoveResult {
    let tally = batch.tally();
    let net_x = tally.net_x();
    let net_y = tally.net_y();

    let mut steps_x = net_x.unsigned_abs();
    let mut steps_y = net_y.unsigned_abs();

    let mut new_x = current.x + net_x as f64 * STEP_SIZE;
    let mut new_y = current.y + net_y as f64 * STEP_SIZE;

    if new_x <= 0.0 {
        new_x = 0.0;
        steps_x = whole_steps(current.x.abs());
    }
    if new_y <= 0.0 {
        new_y = 0.0;
        steps_y = whole_steps(current.y.abs());
    }
    if new_x >= bounds.width() {
        new_x = bounds.width();
        steps_x = whole_steps((new_x - current.x).abs());
    }
    if new_y >= bounds.height() {
        new_y = bounds.height();
        steps_y = whole_steps((new_y - current.y).abs());
    }

    let steps = steps_x + steps_y;
    MoveResult {
        new_position: CursorPosition::new(new_x, new_y),
        steps,
        move_time_ms: move_time_ms(steps),
    }
}

/// Converts a step count into a move duration in milliseconds.
///
/// Duration grows with the square root of distance, so long moves are
/// proportionally faster than short ones.
pub fn move_time_ms(steps: u64) -> f64 {
    3.0 * (steps as f64).sqrt() * 1000.0
}

/// Number of whole steps that fit in a non-negative distance.
fn whole_steps(distance: f64) -> u64 {
    // Float-to-int `as` saturates, so a huge distance cannot wrap.
    (distance / STEP_SIZE).floor() as u64
}

// ── Tests ─────────────────────────────────────────────────────────────────────
