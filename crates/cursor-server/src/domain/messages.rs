//! JSON message types exchanged with the browser.
//!
//! Field names are the wire names; the browser client reads them directly
//! (`response.data.new_position`, `response.data.move_time`), so renaming a
//! field here is a breaking protocol change.
//!
//! # Request / response shapes
//!
//! ```text
//! GET  /get_cursor_position/  → {"x": 925.0, "y": 456.0}
//! POST /move_cursor/          ← {"key_presses": [{"key": "ArrowUp"}, ...]}
//!                             → {"new_position": {"x": .., "y": ..}, "move_time": 5196.15}
//! GET  /focus_cursor/         → {"focus_time": 2000}
//! any  (internal fault)       → {"message": "Internal Server Error: ..."}
//! ```

use serde::{Deserialize, Serialize};

use cursor_core::{CursorPosition, KeyPressBatch};

/// One key press as sent by the browser.
///
/// `key` is the raw `KeyboardEvent.key` value.  Tokens other than the four
/// arrow keys are accepted here and dropped when the batch is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPressJson {
    pub key: String,
}

/// Body of `POST /move_cursor/`.
///
/// `key_presses` is required but may be empty.  A body without it is
/// rejected by the JSON extractor before any handler code runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCursorRequest {
    pub key_presses: Vec<KeyPressJson>,
}

impl MoveCursorRequest {
    /// Converts the raw tokens into a [`KeyPressBatch`], ignoring unknown keys.
    pub fn to_batch(&self) -> KeyPressBatch {
        KeyPressBatch::from_tokens(self.key_presses.iter().map(|k| k.key.as_str()))
    }
}

/// A cursor position on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionJson {
    pub x: f64,
    pub y: f64,
}

impl From<CursorPosition> for PositionJson {
    fn from(p: CursorPosition) -> Self {
        Self { x: p.x, y: p.y }
    }
}

/// Response of `POST /move_cursor/`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoveCursorResponse {
    pub new_position: PositionJson,
    /// Synthetic move duration in milliseconds.
    pub move_time: f64,
}

/// Response of `GET /focus_cursor/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusCursorResponse {
    /// Focus duration in whole milliseconds.
    pub focus_time: u64,
}

/// Body of every 500 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use cursor_core::KeyPress;

    #[test]
    fn test_move_request_deserializes_from_browser_json() {
        // Arrange: the exact shape the browser client posts
        let json = r#"{"key_presses":[{"key":"ArrowUp"},{"key":"ArrowRight"}]}"#;

        // Act
        let req: MoveCursorRequest = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(req.key_presses.len(), 2);
        assert_eq!(req.key_presses[0].key, "ArrowUp");
    }

    #[test]
    fn test_move_request_accepts_empty_list() {
        let req: MoveCursorRequest = serde_json::from_str(r#"{"key_presses":[]}"#).unwrap();
        assert!(req.to_batch().is_empty());
    }

    #[test]
    fn test_move_request_requires_key_presses() {
        let result: Result<MoveCursorRequest, _> = serde_json::from_str("{}");
        assert!(result.is_err(), "missing key_presses must not deserialize");
    }

    #[test]
    fn test_to_batch_ignores_unknown_keys() {
        let req = MoveCursorRequest {
            key_presses: vec![
                KeyPressJson { key: "Escape".to_string() },
                KeyPressJson { key: "ArrowDown".to_string() },
            ],
        };
        let presses: Vec<_> = req.to_batch().iter().copied().collect();
        assert_eq!(presses, vec![KeyPress::Down]);
    }

    #[test]
    fn test_move_response_wire_shape() {
        let resp = MoveCursorResponse {
            new_position: CursorPosition::new(975.0, 356.0).into(),
            move_time: 3000.0,
        };
        let json = serde_json::to_value(resp).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "new_position": { "x": 975.0, "y": 356.0 }, "move_time": 3000.0 })
        );
    }

    #[test]
    fn test_focus_response_wire_shape() {
        let json = serde_json::to_value(FocusCursorResponse { focus_time: 2000 }).unwrap();
        assert_eq!(json, serde_json::json!({ "focus_time": 2000 }));
    }
}
