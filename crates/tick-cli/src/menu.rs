//! Interactive menu loop.
//!
//! The loop reads one choice per line, dispatches to a command handler, and
//! keeps going until the user quits or input ends. Errors from repository
//! operations are shown to the user; only terminal I/O failures end the loop.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use tick_store::{TaskStore, TodoService};

use crate::cli::OutputFormat;
use crate::commands::{self, Flow, MenuChoice};
use crate::output::TableOptions;

pub const WELCOME: &str = "Welcome to your CLI To-Do Manager!";
pub const GOODBYE: &str = "Goodbye! All tasks saved.";
pub const INVALID_CHOICE: &str = "Invalid choice. Please enter a number between 1 and 5.";

const MENU: &str = "\
What would you like to do?
1. View To-Dos
2. Add New To-Do
3. Mark To-Do as Done
4. Delete To-Do
5. Quit";

/// Line-based terminal I/O.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Print `text` without a newline and read one line. `None` at end of input.
    pub fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Everything a command handler needs.
pub struct Session<S: TaskStore, R, W> {
    pub service: TodoService<S>,
    pub console: Console<R, W>,
    pub format: OutputFormat,
    pub table: TableOptions,
}

impl<S: TaskStore, R: BufRead, W: Write> Session<S, R, W> {
    pub const fn new(
        service: TodoService<S>,
        console: Console<R, W>,
        format: OutputFormat,
        table: TableOptions,
    ) -> Self {
        Self {
            service,
            console,
            format,
            table,
        }
    }

    /// Run until quit or end of input.
    pub fn run(&mut self) -> anyhow::Result<()> {
        self.console.say(WELCOME)?;

        loop {
            self.console.say("")?;
            self.console.say(MENU)?;

            let Some(raw) = self.console.prompt("Enter your choice (1-5): ")? else {
                tracing::debug!("input closed at menu prompt");
                break;
            };

            let Some(choice) = MenuChoice::parse(&raw) else {
                self.console.say(INVALID_CHOICE)?;
                continue;
            };

            tracing::debug!(?choice, "menu choice");
            if commands::dispatch(choice, self)? == Flow::Quit {
                break;
            }
        }

        self.console.say("")?;
        self.console.say(GOODBYE)?;
        Ok(())
    }
}
