//! Response rows rendered by the `tick` CLI.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Task;
use crate::enums::Priority;

/// One line of the display view, carrying its 1-based display index.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskRow {
    pub index: usize,
    pub id: String,
    pub status: String,
    pub priority: Priority,
    pub description: String,
}

impl TaskRow {
    #[must_use]
    pub fn new(index: usize, task: &Task) -> Self {
        Self {
            index,
            id: task.id.clone(),
            status: status_label(task.done).to_string(),
            priority: task.priority,
            description: task.description.clone(),
        }
    }

    /// Number a view (already in display order) starting at 1.
    #[must_use]
    pub fn from_view<'a, I>(view: I) -> Vec<Self>
    where
        I: IntoIterator<Item = &'a Task>,
    {
        view.into_iter()
            .enumerate()
            .map(|(position, task)| Self::new(position + 1, task))
            .collect()
    }
}

#[must_use]
pub const fn status_label(done: bool) -> &'static str {
    if done { "done" } else { "pending" }
}
