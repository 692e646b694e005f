//! Error types for palette extraction
//!
//! Missing theme keys are never errors; only unreadable files, unparsable
//! documents and malformed color values abort a run.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a palette run
#[derive(Debug, Error)]
pub enum PaletteError {
    /// Theme file is missing, unreadable, or a directory
    #[error("cannot read theme file {}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Theme file is not valid relaxed JSON, or its top level is not a mapping
    #[error("cannot parse theme file {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// A color value that is not `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`
    #[error("invalid color format: {value}")]
    InvalidColor { value: String },
}

impl PaletteError {
    pub(crate) fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
        }
    }
}

pub type Result<T, E = PaletteError> = std::result::Result<T, E>;
