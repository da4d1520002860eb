//! Cross-cutting error types for Ticklist.
//!
//! Storage and configuration errors live in their own crates. A unified error
//! is left to `tick-cli` where everything converges into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Ticklist crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Input failed validation (empty description, unknown priority).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A display index fell outside `1..=len`.
    #[error("Invalid task number {index}: expected a number between 1 and {len}")]
    InvalidIndex { index: usize, len: usize },

    /// No task carries the given ID.
    #[error("Task not found: {id}")]
    NotFound { id: String },

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
