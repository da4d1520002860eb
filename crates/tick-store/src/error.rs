//! Storage error types for tick-store.

use std::path::PathBuf;

use thiserror::Error;
use tick_core::errors::CoreError;

/// Errors from loading, saving, or mutating the task list.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the task file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The task file is not valid UTF-8.
    #[error("Task file is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A domain rule rejected the operation.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error means the persisted data is unreadable rather than
    /// the file being inaccessible.
    #[must_use]
    pub const fn is_corruption(&self) -> bool {
        matches!(self, Self::Utf8(_) | Self::Json(_))
    }
}
