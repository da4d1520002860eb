pub mod add;
pub mod delete;
pub mod done;
pub mod shared;
pub mod view;

use std::io::{BufRead, Write};

use tick_store::TaskStore;

use crate::menu::Session;

/// Numbered menu entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    View,
    Add,
    MarkDone,
    Delete,
    Quit,
}

impl MenuChoice {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(Self::View),
            "2" => Some(Self::Add),
            "3" => Some(Self::MarkDone),
            "4" => Some(Self::Delete),
            "5" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Whether the menu loop keeps going after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Route a menu choice to its handler.
pub fn dispatch<S, R, W>(choice: MenuChoice, session: &mut Session<S, R, W>) -> anyhow::Result<Flow>
where
    S: TaskStore,
    R: BufRead,
    W: Write,
{
    match choice {
        MenuChoice::View => view::handle(session),
        MenuChoice::Add => add::handle(session),
        MenuChoice::MarkDone => done::handle(session),
        MenuChoice::Delete => delete::handle(session),
        MenuChoice::Quit => Ok(Flow::Quit),
    }
}
