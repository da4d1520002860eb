//! Line-oriented text format.
//!
//! ```text
//! [!] Buy milk
//! [x] Pay rent
//! ```
//!
//! The format has no room for IDs or priorities. Loaded tasks get priority
//! `NONE`; priorities are dropped on save.

use tick_core::entities::Task;

use super::StoredTask;

pub const DONE_MARKER: &str = "[x]";
pub const PENDING_MARKER: &str = "[!]";

#[must_use]
pub fn decode(content: &str) -> Vec<StoredTask> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(decode_line)
        .collect()
}

fn decode_line(line: &str) -> StoredTask {
    let (done, description) = if let Some(rest) = strip_marker(line, DONE_MARKER) {
        (true, rest)
    } else if let Some(rest) = strip_marker(line, PENDING_MARKER) {
        (false, rest)
    } else {
        tracing::debug!(line, "line has no status marker; loading as pending");
        (false, line)
    };

    StoredTask {
        id: None,
        description: description.trim().to_string(),
        done,
        ..StoredTask::default()
    }
}

fn strip_marker<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    let head = line.get(..marker.len())?;
    head.eq_ignore_ascii_case(marker)
        .then(|| &line[marker.len()..])
}

#[must_use]
pub fn encode(tasks: &[Task]) -> String {
    let mut out = String::new();
    for task in tasks {
        let marker = if task.done {
            DONE_MARKER
        } else {
            PENDING_MARKER
        };
        // one task per line
        let description = task.description.replace(['\r', '\n'], " ");
        out.push_str(marker);
        out.push(' ');
        out.push_str(&description);
        out.push('\n');
    }
    out
}
