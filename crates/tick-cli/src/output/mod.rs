use serde::Serialize;
use tick_core::responses::TaskRow;

use crate::cli::OutputFormat;

pub mod table;

pub use table::TableOptions;

pub const BANNER_RULE: &str = "==================================";
pub const BANNER_TITLE: &str = "        CURRENT TO-DO LIST";
pub const EMPTY_LIST: &str = "--- Your to-do list is empty ---";

/// Render a serializable response as JSON. `Raw` is single-line.
pub fn render_json<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Json | OutputFormat::Table => Ok(serde_json::to_string_pretty(value)?),
    }
}

/// Render the numbered task view in the requested format.
pub fn render_rows(
    rows: &[TaskRow],
    format: OutputFormat,
    options: TableOptions,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => {
            let table = table::render_task_table(rows, options);
            Ok([BANNER_RULE, BANNER_TITLE, BANNER_RULE, table.as_str(), BANNER_RULE].join("\n"))
        }
        OutputFormat::Json | OutputFormat::Raw => render_json(&rows, format),
    }
}
