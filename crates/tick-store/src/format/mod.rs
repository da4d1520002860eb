//! Task file codecs.
//!
//! Both codecs decode into [`StoredTask`] records, which may lack an ID or
//! carry a blank description. [`into_task_list`] turns those records into a
//! valid [`TaskList`]: blank records are dropped and missing, malformed, or
//! duplicate IDs are replaced.

pub mod json;
pub mod text;

use std::collections::HashSet;

use serde::Deserialize;
use tick_core::TaskList;
use tick_core::entities::Task;
use tick_core::enums::{Priority, StorageFormat};
use tick_core::ids::{PREFIX_TASK, generate_id, is_valid_id};

use crate::error::StoreError;

/// A task as read from disk, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StoredTask {
    #[serde(default)]
    pub id: Option<String>,
    pub description: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub priority: Priority,
}

/// Decode file contents in the given (resolved) format.
///
/// # Errors
///
/// Returns `StoreError::Json` when a JSON file cannot be parsed.
pub fn decode(format: StorageFormat, content: &str) -> Result<Vec<StoredTask>, StoreError> {
    match format {
        StorageFormat::Text => Ok(text::decode(content)),
        StorageFormat::Json | StorageFormat::Auto => json::decode(content),
    }
}

/// Encode tasks (storage order) in the given (resolved) format.
///
/// # Errors
///
/// Returns `StoreError::Json` if JSON serialization fails.
pub fn encode(format: StorageFormat, tasks: &[Task]) -> Result<String, StoreError> {
    match format {
        StorageFormat::Text => Ok(text::encode(tasks)),
        StorageFormat::Json | StorageFormat::Auto => json::encode(tasks),
    }
}

/// Validate decoded records and build the collection.
///
/// # Errors
///
/// Propagates ID generation failures.
pub fn into_task_list(records: Vec<StoredTask>) -> Result<TaskList, StoreError> {
    let mut tasks = Vec::with_capacity(records.len());
    let mut seen = HashSet::new();

    for (position, record) in records.into_iter().enumerate() {
        let description = record.description.trim();
        if description.is_empty() {
            tracing::warn!(
                record = position + 1,
                "skipping stored task with empty description"
            );
            continue;
        }

        let id = match record.id {
            Some(id) if is_valid_id(PREFIX_TASK, &id) && !seen.contains(&id) => id,
            Some(id) => {
                tracing::warn!(%id, "stored task has a malformed or duplicate id; assigning a new one");
                unused_id(&seen)?
            }
            None => unused_id(&seen)?,
        };
        seen.insert(id.clone());

        tasks.push(Task {
            id,
            description: description.to_string(),
            done: record.done,
            priority: record.priority,
        });
    }

    Ok(TaskList::from_tasks(tasks))
}

fn unused_id(seen: &HashSet<String>) -> Result<String, StoreError> {
    loop {
        let id = generate_id(PREFIX_TASK)?;
        if !seen.contains(&id) {
            return Ok(id);
        }
    }
}
