use tick_core::enums::Priority;
use tick_core::responses::TaskRow;

pub const TASK_HEADERS: [&str; 4] = ["#", "status", "priority", "description"];

#[derive(Clone, Copy, Debug, Default)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render task rows as an aligned table. `NONE` priorities show as `-`.
#[must_use]
pub fn render_task_table(rows: &[TaskRow], options: TableOptions) -> String {
    let cells = rows
        .iter()
        .map(|row| {
            let priority = if row.priority == Priority::None {
                "-".to_string()
            } else {
                row.priority.to_string()
            };
            vec![
                row.index.to_string(),
                row.status.clone(),
                priority,
                row.description.clone(),
            ]
        })
        .collect::<Vec<_>>();

    render_table(&TASK_HEADERS, &cells, options)
}

/// Render a simple aligned table for string rows.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(min_width(header))
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| format_cell(&truncate_text(header, *width), *width, false, false))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(header_line.trim_end().chars().count());

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).cloned().unwrap_or_else(|| "-".to_string());
                let truncated = truncate_text(&value, *width);
                let numeric = looks_numeric(&truncated);
                let colored = if options.color {
                    colorize(headers[index], &truncated)
                } else {
                    truncated
                };
                format_cell(&colored, *width, numeric, options.color)
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    });

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line.trim_end().to_string());
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

fn min_width(header: &str) -> usize {
    header.chars().count().max(if header == "#" { 2 } else { 6 })
}

/// Shrink the widest shrinkable column until the table fits.
fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let candidate = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > min_width(headers[*idx]))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = candidate else {
            break;
        };

        widths[idx] -= 1;
        total -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.chars().all(|ch| ch.is_ascii_digit())
}

fn format_cell(value: &str, width: usize, numeric: bool, has_ansi: bool) -> String {
    let plain_len = if has_ansi {
        strip_ansi(value).chars().count()
    } else {
        value.chars().count()
    };
    let pad = " ".repeat(width.saturating_sub(plain_len));
    if numeric {
        format!("{pad}{value}")
    } else {
        format!("{value}{pad}")
    }
}

/// Status and priority cells only; descriptions are never colored.
fn colorize(header: &str, value: &str) -> String {
    let code = match (header, value) {
        ("status", "done") | ("priority", "LOW") => Some("32"),
        ("status", "pending") | ("priority", "MEDIUM") => Some("33"),
        ("priority", "HIGH") => Some("1;31"),
        _ => None,
    };

    match code {
        Some(code) => format!("\u{1b}[{code}m{value}\u{1b}[0m"),
        None => value.to_string(),
    }
}

fn strip_ansi(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' && chars.peek() == Some(&'[') {
            let _ = chars.next();
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
            continue;
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tick_core::entities::Task;

    use super::*;

    fn rows() -> Vec<TaskRow> {
        let mut rent = Task::new("tsk-00000001".into(), "Pay rent", Priority::High).unwrap();
        rent.done = true;
        let milk = Task::new("tsk-00000002".into(), "Buy milk", Priority::None).unwrap();
        TaskRow::from_view([&rent, &milk])
    }

    #[test]
    fn renders_aligned_task_rows() {
        let table = render_task_table(&rows(), TableOptions::default());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "#   status   priority  description");
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2], " 1  done     HIGH      Pay rent");
        assert_eq!(lines[3], " 2  pending  -         Buy milk");
    }

    #[test]
    fn narrow_terminal_truncates_description() {
        let task = Task::new(
            "tsk-00000003".into(),
            "a very long description that will not fit",
            Priority::Low,
        )
        .unwrap();
        let table = render_task_table(
            &TaskRow::from_view([&task]),
            TableOptions {
                max_width: Some(40),
                color: false,
            },
        );

        assert!(table.lines().all(|line| line.chars().count() <= 40));
        assert!(table.contains('…'));
    }

    #[test]
    fn color_applies_to_status_and_priority_only() {
        let mut task = Task::new("tsk-00000004".into(), "done", Priority::High).unwrap();
        task.done = true;
        let table = render_task_table(
            &TaskRow::from_view([&task]),
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        let row = table.lines().nth(2).unwrap();

        assert!(row.contains("\u{1b}[32mdone\u{1b}[0m"));
        assert!(row.contains("\u{1b}[1;31mHIGH\u{1b}[0m"));
        assert!(row.ends_with("  done"));
        assert_eq!(strip_ansi(row).chars().count(), " 1  done    HIGH      done".len());
    }
}
