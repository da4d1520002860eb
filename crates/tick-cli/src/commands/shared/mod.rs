pub mod parse;

use tick_core::errors::CoreError;
use tick_store::StoreError;

pub const INVALID_NUMBER: &str = "Invalid input. Please enter a valid number.";
pub const INVALID_TASK_NUMBER: &str = "Invalid task number. Please try again.";

/// User-facing line for a failed repository operation.
pub fn describe_failure(error: &StoreError) -> String {
    match error {
        StoreError::Core(CoreError::Validation(message)) => message.clone(),
        StoreError::Core(CoreError::InvalidIndex { .. }) => INVALID_TASK_NUMBER.to_string(),
        StoreError::Core(CoreError::NotFound { .. }) => "That task no longer exists.".to_string(),
        other => format!("Could not save tasks: {other}. The change is kept until the next save."),
    }
}
