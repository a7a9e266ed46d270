//! Cursor position value type.

use serde::{Deserialize, Serialize};

/// A point on the canvas.
///
/// Positions are plain values: a move never edits one in place, it produces a
/// new `CursorPosition` that the service then stores.  Coordinates are `f64`
/// so a configured start position or canvas size need not be a multiple of the
/// step size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CursorPosition {
    /// Horizontal coordinate, `0` at the left edge.
    pub x: f64,
    /// Vertical coordinate, `0` at the top edge; grows downwards.
    pub y: f64,
}

impl CursorPosition {
    /// Seed position of a freshly started service.
    pub const DEFAULT_START: Self = Self { x: 925.0, y: 456.0 };

    /// Creates a position at `(x, y)`.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Default for CursorPosition {
    fn default() -> Self {
        Self::DEFAULT_START
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_seed_position() {
        assert_eq!(CursorPosition::default(), CursorPosition::new(925.0, 456.0));
    }

    #[test]
    fn test_serializes_as_x_y_object() {
        let json = serde_json::to_value(CursorPosition::new(975.0, 356.0)).unwrap();
        assert_eq!(json, serde_json::json!({ "x": 975.0, "y": 356.0 }));
    }
}
