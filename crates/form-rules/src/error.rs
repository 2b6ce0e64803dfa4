// File: src/error.rs
// Purpose: Errors surfaced by renderers

use std::path::PathBuf;

/// Failure to turn a view name into markup
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("View not found: {0}")]
    NotFound(String),

    #[error("Failed to read view {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Other(String),
}
