use std::io::IsTerminal;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::TableOptions;

#[derive(Clone, Copy, Debug, Default)]
pub struct UiPrefs {
    pub table_color: bool,
    pub term_width: Option<usize>,
}

impl UiPrefs {
    /// Inspect the terminal and environment.
    #[must_use]
    pub fn detect(flags: &GlobalFlags) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let no_color = std::env::var_os("NO_COLOR").is_some();
        let columns = std::env::var("COLUMNS").ok();
        Self::resolve(flags, is_tty, no_color, columns.as_deref())
    }

    fn resolve(flags: &GlobalFlags, is_tty: bool, no_color: bool, columns: Option<&str>) -> Self {
        let table_color = is_tty && flags.format == OutputFormat::Table && !no_color;
        let term_width = columns
            .and_then(|value| value.trim().parse::<usize>().ok())
            .filter(|width| *width >= 40);

        Self {
            table_color,
            term_width,
        }
    }

    #[must_use]
    pub const fn table_options(self) -> TableOptions {
        TableOptions {
            max_width: self.term_width,
            color: self.table_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(format: OutputFormat) -> GlobalFlags {
        GlobalFlags {
            file: None,
            storage: None,
            order: None,
            format,
            quiet: false,
            verbose: false,
        }
    }

    #[test]
    fn color_needs_a_terminal_and_table_output() {
        assert!(UiPrefs::resolve(&flags(OutputFormat::Table), true, false, None).table_color);
        assert!(!UiPrefs::resolve(&flags(OutputFormat::Table), false, false, None).table_color);
        assert!(!UiPrefs::resolve(&flags(OutputFormat::Json), true, false, None).table_color);
        assert!(!UiPrefs::resolve(&flags(OutputFormat::Table), true, true, None).table_color);
    }

    #[test]
    fn narrow_or_bogus_columns_are_ignored() {
        let table = flags(OutputFormat::Table);
        assert_eq!(UiPrefs::resolve(&table, false, false, Some("120")).term_width, Some(120));
        assert_eq!(UiPrefs::resolve(&table, false, false, Some("20")).term_width, None);
        assert_eq!(UiPrefs::resolve(&table, false, false, Some("wide")).term_width, None);
    }
}
