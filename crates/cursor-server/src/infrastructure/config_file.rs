//! TOML config file loading.
//!
//! The config file is optional.  When given, it can override the canvas size
//! and the cursor's start position; every key has a default so a partial file
//! (or an empty one) is valid:
//!
//! ```toml
//! [canvas]
//! width = 1850
//! height = 925
//!
//! [cursor]
//! start_x = 925
//! start_y = 456
//! ```
//!
//! The file is read once at startup.  There is no reload and no endpoint for
//! changing configuration at runtime.

use std::path::{Path, PathBuf};

use cursor_core::domain::canvas::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use cursor_core::{CanvasConfig, CanvasError, CursorPosition};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::ServerConfig;

/// Error type for config file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error reading config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The canvas dimensions are invalid.
    #[error(transparent)]
    Canvas(#[from] CanvasError),

    /// The start position does not fit on the canvas.
    #[error("start position ({x}, {y}) is outside the {width}x{height} canvas")]
    StartOutOfBounds { x: f64, y: f64, width: f64, height: f64 },
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level config file contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub canvas: CanvasSection,
    #[serde(default)]
    pub cursor: CursorSection,
}

/// `[canvas]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CanvasSection {
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
}

/// `[cursor]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CursorSection {
    #[serde(default = "default_start_x")]
    pub start_x: f64,
    #[serde(default = "default_start_y")]
    pub start_y: f64,
}

fn default_width() -> f64 {
    DEFAULT_WIDTH
}
fn default_height() -> f64 {
    DEFAULT_HEIGHT
}
fn default_start_x() -> f64 {
    CursorPosition::DEFAULT_START.x
}
fn default_start_y() -> f64 {
    CursorPosition::DEFAULT_START.y
}

impl Default for CanvasSection {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

impl Default for CursorSection {
    fn default() -> Self {
        Self {
            start_x: default_start_x(),
            start_y: default_start_y(),
        }
    }
}

impl FileConfig {
    /// Parses config file contents.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed TOML or unknown keys.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Overlays the file's canvas and start position onto `base`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Canvas`] for invalid dimensions and
    /// [`ConfigError::StartOutOfBounds`] if the start position is not on the
    /// canvas.
    pub fn apply(&self, base: ServerConfig) -> Result<ServerConfig, ConfigError> {
        let canvas = CanvasConfig::new(self.canvas.width, self.canvas.height)?;
        let start = CursorPosition::new(self.cursor.start_x, self.cursor.start_y);
        if !canvas.contains(start) {
            return Err(ConfigError::StartOutOfBounds {
                x: start.x,
                y: start.y,
                width: canvas.width(),
                height: canvas.height(),
            });
        }
        Ok(ServerConfig {
            canvas,
            start_position: start,
            ..base
        })
    }
}

/// Reads and parses the config file at `path`.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read, or
/// [`ConfigError::Parse`] if its contents are not valid.
pub fn load_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    FileConfig::parse(&text)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let cfg = FileConfig::parse("").unwrap();
        assert_eq!(cfg, FileConfig::default());

        let server = cfg.apply(ServerConfig::default()).unwrap();
        assert_eq!(server, ServerConfig::default());
    }

    #[test]
    fn test_full_file_overrides_canvas_and_start() {
        // Arrange
        let text = r#"
            [canvas]
            width = 800
            height = 600

            [cursor]
            start_x = 400
            start_y = 300
        "#;

        // Act
        let server = FileConfig::parse(text)
            .unwrap()
            .apply(ServerConfig::default())
            .unwrap();

        // Assert
        assert_eq!(server.canvas, CanvasConfig::new(800.0, 600.0).unwrap());
        assert_eq!(server.start_position, CursorPosition::new(400.0, 300.0));
        // Untouched fields come from the base config
        assert_eq!(server.bind_addr, ServerConfig::default().bind_addr);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let cfg = FileConfig::parse("[canvas]\nwidth = 2000\n").unwrap();
        assert_eq!(cfg.canvas.width, 2000.0);
        assert_eq!(cfg.canvas.height, 925.0);
        assert_eq!(cfg.cursor, CursorSection::default());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result = FileConfig::parse("[canvas]\ndepth = 3\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_negative_canvas_is_rejected() {
        let cfg = FileConfig::parse("[canvas]\nwidth = -10\n").unwrap();
        assert!(matches!(
            cfg.apply(ServerConfig::default()),
            Err(ConfigError::Canvas(_))
        ));
    }

    #[test]
    fn test_start_outside_canvas_is_rejected() {
        // Default start (925, 456) does not fit on a 500x500 canvas.
        let cfg = FileConfig::parse("[canvas]\nwidth = 500\nheight = 500\n").unwrap();
        assert!(matches!(
            cfg.apply(ServerConfig::default()),
            Err(ConfigError::StartOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_load_config_missing_file_is_io_error() {
        let result = load_config(Path::new("/definitely/not/a/real/cursor-config.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
