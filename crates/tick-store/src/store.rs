//! Task stores.
//!
//! A store reads and writes the whole collection at once. Loading fails soft:
//! a missing file is an empty list, and unreadable contents are logged and
//! treated as an empty list.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tick_core::TaskList;
use tick_core::entities::Task;
use tick_core::enums::StorageFormat;

use crate::error::StoreError;
use crate::format;

/// Whole-collection persistence.
pub trait TaskStore {
    /// Read the persisted collection.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` only for failures other than a missing or corrupt
    /// store (for example a permission error).
    fn load(&self) -> Result<TaskList, StoreError>;

    /// Replace the persisted collection with `tasks` (storage order).
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write fails.
    fn save(&mut self, tasks: &[Task]) -> Result<(), StoreError>;
}

/// A task file on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    format: StorageFormat,
}

impl FileStore {
    /// Create a store for `path`. `StorageFormat::Auto` is resolved here.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, format: StorageFormat) -> Self {
        let path = path.into();
        let format = format.resolve(&path);
        Self { path, format }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn format(&self) -> StorageFormat {
        self.format
    }

    fn read(&self) -> Result<Option<TaskList>, StoreError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(StoreError::io(&self.path, error)),
        };
        let content = String::from_utf8(bytes)?;
        let records = format::decode(self.format, &content)?;
        format::into_task_list(records).map(Some)
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl TaskStore for FileStore {
    fn load(&self) -> Result<TaskList, StoreError> {
        match self.read() {
            Ok(Some(list)) => {
                tracing::debug!(
                    path = %self.path.display(),
                    format = %self.format,
                    tasks = list.len(),
                    "loaded task file"
                );
                Ok(list)
            }
            Ok(None) => {
                tracing::debug!(path = %self.path.display(), "no task file yet; starting empty");
                Ok(TaskList::new())
            }
            Err(error) if error.is_corruption() => {
                tracing::warn!(
                    path = %self.path.display(),
                    %error,
                    "task file is corrupt; starting with an empty list"
                );
                Ok(TaskList::new())
            }
            Err(error) => Err(error),
        }
    }

    /// Write to a sibling `.tmp` file, then rename over the target.
    fn save(&mut self, tasks: &[Task]) -> Result<(), StoreError> {
        let encoded = format::encode(self.format, tasks)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }

        let tmp_path = self.temp_path();
        std::fs::write(&tmp_path, encoded).map_err(|e| StoreError::io(&tmp_path, e))?;
        std::fs::rename(&tmp_path, &self.path).map_err(|e| StoreError::io(&self.path, e))?;

        tracing::debug!(path = %self.path.display(), tasks = tasks.len(), "saved task file");
        Ok(())
    }
}

/// Keeps the last saved collection in memory. Nothing touches disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tasks: Vec<Task>,
    saves: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing collection.
    #[must_use]
    pub const fn with_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks, saves: 0 }
    }

    /// The last saved collection.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// How many times `save` has been called.
    #[must_use]
    pub const fn saves(&self) -> usize {
        self.saves
    }
}

impl TaskStore for MemoryStore {
    fn load(&self) -> Result<TaskList, StoreError> {
        Ok(TaskList::from_tasks(self.tasks.clone()))
    }

    fn save(&mut self, tasks: &[Task]) -> Result<(), StoreError> {
        self.tasks = tasks.to_vec();
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;
    use tick_core::enums::Priority;

    use super::*;

    fn sample() -> Vec<Task> {
        let mut rent = Task::new("tsk-00000001".into(), "Pay rent", Priority::High).unwrap();
        rent.done = true;
        let milk = Task::new("tsk-00000002".into(), "Buy milk", Priority::Low).unwrap();
        vec![milk, rent]
    }

    #[test]
    fn missing_file_loads_empty() {
        let temp = TempDir::new().expect("tempdir should create");
        let store = FileStore::new(temp.path().join("absent.json"), StorageFormat::Auto);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn corrupt_json_loads_empty() {
        let temp = TempDir::new().expect("tempdir should create");
        let path = temp.path().join("todos.json");
        std::fs::write(&path, "[{\"description\": ").unwrap();

        let store = FileStore::new(&path, StorageFormat::Auto);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn invalid_utf8_loads_empty() {
        let temp = TempDir::new().expect("tempdir should create");
        let path = temp.path().join("todos.txt");
        std::fs::write(&path, [0xff, 0xfe, b'\n']).unwrap();

        let store = FileStore::new(&path, StorageFormat::Auto);
        assert_eq!(store.format(), StorageFormat::Text);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn json_save_then_load_keeps_everything() {
        let temp = TempDir::new().expect("tempdir should create");
        let mut store = FileStore::new(temp.path().join("todos.json"), StorageFormat::Auto);

        store.save(&sample()).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded.tasks(), sample().as_slice());
        assert!(!temp.path().join("todos.json.tmp").exists());
    }

    #[test]
    fn text_save_then_load_keeps_status_but_not_priority() {
        let temp = TempDir::new().expect("tempdir should create");
        let path = temp.path().join("todos.txt");
        let mut store = FileStore::new(&path, StorageFormat::Auto);

        store.save(&sample()).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "[!] Buy milk\n[x] Pay rent\n"
        );

        let loaded = store.load().unwrap();
        let summary: Vec<(&str, bool, Priority)> = loaded
            .tasks()
            .iter()
            .map(|t| (t.description.as_str(), t.done, t.priority))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Buy milk", false, Priority::None),
                ("Pay rent", true, Priority::None)
            ]
        );
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp = TempDir::new().expect("tempdir should create");
        let path = temp.path().join("nested/dir/todos.json");
        let mut store = FileStore::new(&path, StorageFormat::Json);

        store.save(&sample()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let temp = TempDir::new().expect("tempdir should create");
        let mut store = FileStore::new(temp.path().join("todos.json"), StorageFormat::Json);

        store.save(&sample()).unwrap();
        store.save(&sample()[..1]).unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn unreadable_path_is_an_error() {
        let temp = TempDir::new().expect("tempdir should create");
        // a directory cannot be read as a file
        let store = FileStore::new(temp.path(), StorageFormat::Json);
        assert!(matches!(store.load(), Err(StoreError::Io { .. })));
    }

    #[test]
    fn memory_store_counts_saves() {
        let mut store = MemoryStore::new();
        store.save(&sample()).unwrap();
        store.save(&sample()).unwrap();

        assert_eq!(store.saves(), 2);
        assert_eq!(store.load().unwrap().len(), 2);
    }
}
