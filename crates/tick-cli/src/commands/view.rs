use std::io::{BufRead, Write};

use tick_store::TaskStore;

use crate::commands::Flow;
use crate::menu::Session;
use crate::output;

/// Show the numbered list.
pub fn handle<S, R, W>(session: &mut Session<S, R, W>) -> anyhow::Result<Flow>
where
    S: TaskStore,
    R: BufRead,
    W: Write,
{
    show(session)?;
    Ok(Flow::Continue)
}

/// Print the list and report whether it had any tasks.
pub fn show<S, R, W>(session: &mut Session<S, R, W>) -> anyhow::Result<bool>
where
    S: TaskStore,
    R: BufRead,
    W: Write,
{
    session.console.say("")?;

    if session.service.is_empty() {
        session.console.say(output::EMPTY_LIST)?;
        return Ok(false);
    }

    let rows = session.service.rows();
    let rendered = output::render_rows(&rows, session.format, session.table)?;
    session.console.say(rendered)?;
    Ok(true)
}
