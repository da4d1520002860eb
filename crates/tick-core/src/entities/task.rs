use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Priority;
use crate::errors::CoreError;

/// A single to-do item.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub description: String,
    pub done: bool,
    pub priority: Priority,
}

impl Task {
    /// Build a pending task, trimming the description.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the description is empty after trimming.
    pub fn new(id: String, description: &str, priority: Priority) -> Result<Self, CoreError> {
        let description = normalize_description(description)?;
        Ok(Self {
            id,
            description,
            done: false,
            priority,
        })
    }
}

/// Trim a description and reject it when nothing is left.
///
/// # Errors
///
/// Returns `CoreError::Validation` for empty or whitespace-only input.
pub fn normalize_description(raw: &str) -> Result<String, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Task description cannot be empty.".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}
