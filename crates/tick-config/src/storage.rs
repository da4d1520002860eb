//! Task file configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tick_core::enums::StorageFormat;

use crate::ConfigError;

/// Default task file, relative to the working directory.
fn default_path() -> PathBuf {
    PathBuf::from("todos.json")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Path of the task file.
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// File format; `auto` picks from the extension.
    #[serde(default)]
    pub format: StorageFormat,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            format: StorageFormat::default(),
        }
    }
}

impl StorageConfig {
    /// The concrete format for `path` (never `Auto`).
    #[must_use]
    pub fn resolved_format(&self) -> StorageFormat {
        self.format.resolve(&self.path)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "storage.path".to_string(),
                reason: "path must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
