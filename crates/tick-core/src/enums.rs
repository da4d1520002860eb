//! Priority, view ordering, and storage format enums for Ticklist.
//!
//! `Priority` is persisted with upper-case labels (`"HIGH"`) to stay readable
//! in hand-edited task files; the other enums use `snake_case`.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::entities::Task;
use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Priority of a task. Display order is `High`, `Medium`, `Low`, `None`.
///
/// Deserialization is lenient: labels match case-insensitively and anything
/// unrecognised (other labels, `null`, numbers, booleans) becomes `None`. User input goes through
/// [`FromStr`], which is strict.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    High,
    Medium,
    Low,
    #[default]
    None,
}

impl Priority {
    pub const ALL: [Self; 4] = [Self::High, Self::Medium, Self::Low, Self::None];

    /// Sort rank; lower sorts first.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
            Self::None => 3,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
            Self::None => "NONE",
        }
    }

    /// Lenient lookup used for persisted data.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_uppercase().as_str() {
            "HIGH" => Self::High,
            "MEDIUM" => Self::Medium,
            "LOW" => Self::Low,
            _ => Self::None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = CoreError;

    /// Strict parse for user input. Empty input means `None`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "high" | "h" => Ok(Self::High),
            "medium" | "med" | "m" => Ok(Self::Medium),
            "low" | "l" => Ok(Self::Low),
            "none" | "n" | "" => Ok(Self::None),
            _ => Err(CoreError::Validation(format!(
                "invalid priority '{}': expected high, medium, low, or none",
                raw.trim()
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match StoredPriority::deserialize(deserializer)? {
            StoredPriority::Label(label) => Ok(Self::from_label(&label)),
            StoredPriority::Other(_) => Ok(Self::None),
        }
    }
}

/// Whatever a hand-edited file put in the `priority` slot.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredPriority {
    Label(String),
    Other(IgnoredAny),
}

// ---------------------------------------------------------------------------
// ViewOrder
// ---------------------------------------------------------------------------

/// How the display view orders tasks. Display indices refer to this order.
///
/// ```text
/// priority       HIGH → MEDIUM → LOW → NONE, ties by insertion order
/// pending_first  not-done before done, then as `priority`
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ViewOrder {
    #[default]
    Priority,
    PendingFirst,
}

impl ViewOrder {
    /// Sort key for a task. Used with a stable sort so ties keep insertion order.
    #[must_use]
    pub fn sort_key(self, task: &Task) -> (u8, u8) {
        match self {
            Self::Priority => (0, task.priority.rank()),
            Self::PendingFirst => (u8::from(task.done), task.priority.rank()),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Priority => "priority",
            Self::PendingFirst => "pending_first",
        }
    }
}

impl fmt::Display for ViewOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// StorageFormat
// ---------------------------------------------------------------------------

/// On-disk format of the task file.
///
/// `Auto` resolves from the file extension: `.txt` is `Text`, anything else
/// is `Json`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StorageFormat {
    #[default]
    Auto,
    Text,
    Json,
}

impl StorageFormat {
    /// Resolve `Auto` against a path. Never returns `Auto`.
    #[must_use]
    pub fn resolve(self, path: &Path) -> Self {
        match self {
            Self::Auto => {
                let is_text = path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
                if is_text { Self::Text } else { Self::Json }
            }
            other => other,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for StorageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
