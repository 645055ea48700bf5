//! Error types for the wiring diagram renderer.
//!
//! Two failure classes reach the process boundary: the drawing backend being
//! unusable (`Backend`) and an output path being unwritable (`Write`).
//! Neither is caught internally; `main` logs the error and exits nonzero.

use std::{io, path::PathBuf};

use thiserror::Error;

/// The main error type for wiring diagram operations.
#[derive(Debug, Error)]
pub enum WiringError {
    /// The rendering backend could not parse or rasterize the diagram,
    /// e.g. SVG tree construction or pixmap allocation failed.
    #[error("rendering backend unavailable: {0}")]
    Backend(String),

    /// An output file could not be written.
    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The fixed diagram definition contained an invalid literal.
    ///
    /// Unreachable for the shipped constants, but color literals parse at
    /// model-build time and the parse result has to go somewhere.
    #[error("invalid diagram definition: {0}")]
    Diagram(String),
}

impl WiringError {
    /// Wrap an I/O error together with the path it occurred on.
    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

impl From<String> for WiringError {
    fn from(message: String) -> Self {
        Self::Diagram(message)
    }
}
