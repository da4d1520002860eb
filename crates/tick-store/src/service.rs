//! Service layer: the task repository.
//!
//! `TodoService` owns the in-memory `TaskList`, the store it came from, and
//! the configured `ViewOrder`. Every successful mutation writes the whole
//! collection back to the store.
//!
//! If a save fails, the mutation stays applied in memory and the error is
//! returned; the next successful save persists it.

use tick_core::entities::Task;
use tick_core::enums::{Priority, ViewOrder};
use tick_core::responses::TaskRow;
use tick_core::{Completion, TaskList};

use crate::error::StoreError;
use crate::store::TaskStore;

pub struct TodoService<S: TaskStore> {
    store: S,
    tasks: TaskList,
    order: ViewOrder,
}

impl<S: TaskStore> TodoService<S> {
    /// Load the collection from `store`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be read for reasons other than
    /// a missing or corrupt file.
    pub fn open(store: S, order: ViewOrder) -> Result<Self, StoreError> {
        let tasks = store.load()?;
        Ok(Self {
            store,
            tasks,
            order,
        })
    }

    /// Re-read the store, discarding in-memory state.
    ///
    /// # Errors
    ///
    /// Same as [`Self::open`].
    pub fn load(&mut self) -> Result<&[Task], StoreError> {
        self.tasks = self.store.load()?;
        Ok(self.tasks.tasks())
    }

    /// Write the whole collection to the store.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write fails.
    pub fn save(&mut self) -> Result<(), StoreError> {
        self.store.save(self.tasks.tasks()).inspect_err(|error| {
            tracing::error!(%error, "failed to save tasks");
        })
    }

    /// Add a pending task and persist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Core(CoreError::Validation)` for a blank
    /// description (nothing changes), or a save error.
    pub fn add(&mut self, description: &str, priority: Priority) -> Result<Task, StoreError> {
        let task = self.tasks.add(description, priority)?;
        tracing::debug!(id = %task.id, %priority, "added task");
        self.save()?;
        Ok(task)
    }

    /// Tasks in display order.
    #[must_use]
    pub fn view(&self) -> Vec<Task> {
        self.tasks.view(self.order).into_iter().cloned().collect()
    }

    /// Numbered display rows.
    #[must_use]
    pub fn rows(&self) -> Vec<TaskRow> {
        TaskRow::from_view(self.tasks.view(self.order))
    }

    /// Complete the task at a 1-based display index. Persists only when the
    /// task actually changed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Core(CoreError::InvalidIndex)` outside `1..=len`,
    /// or a save error.
    pub fn mark_done(&mut self, display_index: usize) -> Result<Completion, StoreError> {
        let id = self.tasks.resolve(display_index, self.order)?;
        self.complete_by_id(&id)
    }

    /// Delete the task at a 1-based display index and persist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Core(CoreError::InvalidIndex)` outside `1..=len`,
    /// or a save error.
    pub fn delete(&mut self, display_index: usize) -> Result<Task, StoreError> {
        let id = self.tasks.resolve(display_index, self.order)?;
        self.delete_by_id(&id)
    }

    /// Complete a task by ID.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Core(CoreError::NotFound)` for an unknown ID, or a
    /// save error.
    pub fn complete_by_id(&mut self, id: &str) -> Result<Completion, StoreError> {
        let completion = self.tasks.complete(id)?;
        if completion.changed() {
            tracing::debug!(%id, "completed task");
            self.save()?;
        } else {
            tracing::debug!(%id, "task was already done");
        }
        Ok(completion)
    }

    /// Delete a task by ID.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Core(CoreError::NotFound)` for an unknown ID, or a
    /// save error.
    pub fn delete_by_id(&mut self, id: &str) -> Result<Task, StoreError> {
        let removed = self.tasks.remove(id)?;
        tracing::debug!(%id, "deleted task");
        self.save()?;
        Ok(removed)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.get(id)
    }

    /// Tasks in storage order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.tasks.tasks()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    #[must_use]
    pub const fn order(&self) -> ViewOrder {
        self.order
    }

    pub const fn set_order(&mut self, order: ViewOrder) {
        self.order = order;
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }
}
