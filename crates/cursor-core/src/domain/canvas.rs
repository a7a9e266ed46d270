//! Canvas bounds domain entity.
//!
//! The canvas is the rectangular coordinate space the cursor moves on.  Its
//! bounds are inclusive on both ends: a cursor at `(width, height)` is valid.
//! The canvas is fixed when the service starts and never changes afterwards.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::position::CursorPosition;

/// Width of the production canvas in coordinate units.
pub const DEFAULT_WIDTH: f64 = 1850.0;

/// Height of the production canvas in coordinate units.
pub const DEFAULT_HEIGHT: f64 = 925.0;

/// Errors that can occur when constructing a [`CanvasConfig`].
#[derive(Debug, Error, PartialEq)]
pub enum CanvasError {
    /// A dimension was negative, NaN or infinite.
    #[error("invalid canvas {axis}: {value} (must be a finite, non-negative number)")]
    InvalidDimension {
        /// Which dimension was rejected (`"width"` or `"height"`).
        axis: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Raw, unvalidated canvas dimensions as they appear in a config file.
#[derive(Debug, Clone, Copy, Deserialize)]
struct CanvasDimensions {
    width: f64,
    height: f64,
}

/// Immutable canvas bounds `[0, width] × [0, height]`.
///
/// Construct with [`CanvasConfig::new`], which rejects dimensions that would
/// make the clamping rules meaningless.  Deserialisation goes through the same
/// validation.
///
/// # Example
///
/// ```rust
/// use cursor_core::{CanvasConfig, CursorPosition};
///
/// let canvas = CanvasConfig::new(100.0, 50.0).unwrap();
/// assert!(canvas.contains(CursorPosition::new(100.0, 0.0)));
/// assert!(!canvas.contains(CursorPosition::new(100.5, 0.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CanvasDimensions")]
pub struct CanvasConfig {
    width: f64,
    height: f64,
}

impl CanvasConfig {
    /// Creates a canvas with the given dimensions.
    ///
    /// Zero is accepted for either dimension; it produces a degenerate canvas
    /// where every move on that axis clamps to `0`.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::InvalidDimension`] if either dimension is
    /// negative, NaN or infinite.
    pub fn new(width: f64, height: f64) -> Result<Self, CanvasError> {
        validate_dimension("width", width)?;
        validate_dimension("height", height)?;
        Ok(Self { width, height })
    }

    /// Returns the canvas width (the largest valid `x`).
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the canvas height (the largest valid `y`).
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns `true` if `position` lies inside the inclusive canvas bounds.
    pub fn contains(&self, position: CursorPosition) -> bool {
        (0.0..=self.width).contains(&position.x) && (0.0..=self.height).contains(&position.y)
    }
}

impl Default for CanvasConfig {
    /// The production canvas, 1850 × 925.
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl TryFrom<CanvasDimensions> for CanvasConfig {
    type Error = CanvasError;

    fn try_from(raw: CanvasDimensions) -> Result<Self, Self::Error> {
        Self::new(raw.width, raw.height)
    }
}

fn validate_dimension(axis: &'static str, value: f64) -> Result<(), CanvasError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CanvasError::InvalidDimension { axis, value })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_canvas_is_1850_by_925() {
        let canvas = CanvasConfig::default();
        assert_eq!(canvas.width(), 1850.0);
        assert_eq!(canvas.height(), 925.0);
    }

    #[test]
    fn test_new_accepts_zero_dimensions() {
        // A degenerate canvas is allowed; every move clamps to the origin.
        let canvas = CanvasConfig::new(0.0, 0.0).unwrap();
        assert!(canvas.contains(CursorPosition::new(0.0, 0.0)));
    }

    #[test]
    fn test_new_rejects_negative_width() {
        let result = CanvasConfig::new(-1.0, 10.0);
        assert_eq!(
            result,
            Err(CanvasError::InvalidDimension {
                axis: "width",
                value: -1.0
            })
        );
    }

    #[test]
    fn test_new_rejects_infinite_height() {
        let result = CanvasConfig::new(10.0, f64::INFINITY);
        assert!(matches!(
            result,
            Err(CanvasError::InvalidDimension { axis: "height", .. })
        ));
    }

    #[test]
    fn test_new_rejects_nan() {
        assert!(CanvasConfig::new(f64::NAN, 10.0).is_err());
    }

    #[test]
    fn test_contains_is_inclusive_on_both_ends() {
        let canvas = CanvasConfig::new(1850.0, 925.0).unwrap();
        assert!(canvas.contains(CursorPosition::new(0.0, 0.0)));
        assert!(canvas.contains(CursorPosition::new(1850.0, 925.0)));
    }

    #[test]
    fn test_contains_rejects_outside_positions() {
        let canvas = CanvasConfig::new(1850.0, 925.0).unwrap();
        assert!(!canvas.contains(CursorPosition::new(-0.5, 10.0)));
        assert!(!canvas.contains(CursorPosition::new(10.0, 925.1)));
        assert!(!canvas.contains(CursorPosition::new(f64::NAN, 10.0)));
    }

    #[test]
    fn test_deserialize_validates_dimensions() {
        // Arrange: one valid and one invalid JSON document
        let ok: Result<CanvasConfig, _> = serde_json::from_str(r#"{"width": 800, "height": 600}"#);
        let bad: Result<CanvasConfig, _> = serde_json::from_str(r#"{"width": -800, "height": 600}"#);

        // Assert
        assert_eq!(ok.unwrap(), CanvasConfig::new(800.0, 600.0).unwrap());
        assert!(bad.is_err(), "negative width must be rejected on deserialize");
    }
}
