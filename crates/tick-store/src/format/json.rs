//! JSON array format.
//!
//! ```json
//! [{ "id": "tsk-a3f8b2c1", "description": "Pay rent", "done": false, "priority": "HIGH" }]
//! ```
//!
//! Files written by older tools may omit `id`, `done`, or `priority`.

use tick_core::entities::Task;

use super::StoredTask;
use crate::error::StoreError;

/// Decode a JSON array. Whitespace-only content is an empty list.
///
/// # Errors
///
/// Returns `StoreError::Json` if the content is not an array of task objects.
pub fn decode(content: &str) -> Result<Vec<StoredTask>, StoreError> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(content)?)
}

/// Encode tasks as a pretty-printed JSON array with a trailing newline.
///
/// # Errors
///
/// Returns `StoreError::Json` if serialization fails.
pub fn encode(tasks: &[Task]) -> Result<String, StoreError> {
    let mut out = serde_json::to_string_pretty(tasks)?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tick_core::enums::Priority;

    use super::*;

    #[test]
    fn decodes_legacy_records_without_ids() {
        let records = decode(
            r#"[
                {"description": "Buy milk", "done": false, "priority": "LOW"},
                {"description": "Pay rent", "priority": "high"},
                {"description": "Call mum", "done": true, "priority": "SOMEDAY"},
                {"description": "Water plants"}
            ]"#,
        )
        .unwrap();

        assert_eq!(records.len(), 4);
        assert_eq!(records[0].priority, Priority::Low);
        assert_eq!(records[1].priority, Priority::High);
        assert!(!records[1].done);
        assert_eq!(records[2].priority, Priority::None);
        assert!(records[2].done);
        assert_eq!(records[3].priority, Priority::None);
        assert!(records.iter().all(|r| r.id.is_none()));
    }

    #[test]
    fn non_string_priorities_do_not_sink_the_file() {
        let records = decode(
            r#"[
                {"description": "Pay rent", "priority": "HIGH"},
                {"description": "Buy milk", "priority": 3},
                {"description": "Call mum", "priority": true},
                {"description": "Water plants", "priority": {"level": "LOW"}}
            ]"#,
        )
        .unwrap();

        let priorities: Vec<Priority> = records.iter().map(|r| r.priority).collect();
        assert_eq!(
            priorities,
            vec![Priority::High, Priority::None, Priority::None, Priority::None]
        );
    }

    #[test]
    fn blank_content_is_empty() {
        assert!(decode("  \n").unwrap().is_empty());
    }

    #[test]
    fn malformed_content_is_an_error() {
        assert!(matches!(decode("{not json"), Err(StoreError::Json(_))));
        assert!(matches!(
            decode(r#"{"description": "not an array"}"#),
            Err(StoreError::Json(_))
        ));
    }

    #[test]
    fn encoded_tasks_decode_with_ids() {
        let task = Task::new("tsk-a3f8b2c1".into(), "Pay rent", Priority::High).unwrap();
        let encoded = encode(std::slice::from_ref(&task)).unwrap();
        assert!(encoded.ends_with("]\n"));
        assert!(encoded.contains("\"priority\": \"HIGH\""));

        let records = decode(&encoded).unwrap();
        assert_eq!(records[0].id.as_deref(), Some("tsk-a3f8b2c1"));
        assert_eq!(records[0].description, "Pay rent");
    }
}
