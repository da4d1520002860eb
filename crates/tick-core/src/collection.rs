//! The owned task collection.
//!
//! `TaskList` keeps tasks in storage (insertion) order. Display order is
//! computed on demand from a [`ViewOrder`], and every display-index operation
//! resolves the 1-based index to a task ID before touching storage, so two
//! tasks with identical fields are never confused.

use crate::entities::Task;
use crate::enums::{Priority, ViewOrder};
use crate::errors::CoreError;
use crate::ids::{PREFIX_TASK, generate_id};

/// Outcome of completing a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// The task moved from pending to done.
    Completed(Task),
    /// The task was already done; nothing changed.
    AlreadyDone(Task),
}

impl Completion {
    #[must_use]
    pub const fn task(&self) -> &Task {
        match self {
            Self::Completed(task) | Self::AlreadyDone(task) => task,
        }
    }

    #[must_use]
    pub const fn changed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Wrap tasks already in storage order. Callers guarantee unique IDs.
    #[must_use]
    pub const fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Tasks in storage order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[must_use]
    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
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
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    #[must_use]
    pub fn contains_id(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Generate an ID not yet used in this list.
    ///
    /// # Errors
    ///
    /// Propagates entropy failures from [`generate_id`].
    pub fn fresh_id(&self) -> Result<String, CoreError> {
        loop {
            let id = generate_id(PREFIX_TASK)?;
            if !self.contains_id(&id) {
                return Ok(id);
            }
        }
    }

    /// Append a new pending task.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` when the trimmed description is empty;
    /// the list is left unchanged.
    pub fn add(&mut self, description: &str, priority: Priority) -> Result<Task, CoreError> {
        let task = Task::new(self.fresh_id()?, description, priority)?;
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Borrowed view in display order. Storage order is untouched.
    #[must_use]
    pub fn view(&self, order: ViewOrder) -> Vec<&Task> {
        let mut view: Vec<&Task> = self.tasks.iter().collect();
        view.sort_by_key(|task| order.sort_key(task));
        view
    }

    /// Map a 1-based display index to the ID of the task shown there.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidIndex` outside `1..=len`.
    pub fn resolve(&self, display_index: usize, order: ViewOrder) -> Result<String, CoreError> {
        let view = self.view(order);
        display_index
            .checked_sub(1)
            .and_then(|position| view.get(position))
            .map(|task| task.id.clone())
            .ok_or(CoreError::InvalidIndex {
                index: display_index,
                len: self.tasks.len(),
            })
    }

    /// Mark the task with `id` done.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` for an unknown ID.
    pub fn complete(&mut self, id: &str) -> Result<Completion, CoreError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or_else(|| CoreError::NotFound { id: id.to_string() })?;

        if task.done {
            return Ok(Completion::AlreadyDone(task.clone()));
        }
        task.done = true;
        Ok(Completion::Completed(task.clone()))
    }

    /// Remove the task with `id`, returning it.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` for an unknown ID.
    pub fn remove(&mut self, id: &str) -> Result<Task, CoreError> {
        let position = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or_else(|| CoreError::NotFound { id: id.to_string() })?;
        Ok(self.tasks.remove(position))
    }

    /// Complete the task shown at `display_index`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidIndex` outside `1..=len`.
    pub fn mark_done(
        &mut self,
        display_index: usize,
        order: ViewOrder,
    ) -> Result<Completion, CoreError> {
        let id = self.resolve(display_index, order)?;
        self.complete(&id)
    }

    /// Delete the task shown at `display_index`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidIndex` outside `1..=len`.
    pub fn delete(&mut self, display_index: usize, order: ViewOrder) -> Result<Task, CoreError> {
        let id = self.resolve(display_index, order)?;
        self.remove(&id)
    }
}
