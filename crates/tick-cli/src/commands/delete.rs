use std::io::{BufRead, Write};

use tick_store::TaskStore;

use crate::commands::shared::parse::parse_task_number;
use crate::commands::shared::{INVALID_NUMBER, describe_failure};
use crate::commands::{Flow, view};
use crate::menu::Session;

/// Show the list, then delete the chosen task.
pub fn handle<S, R, W>(session: &mut Session<S, R, W>) -> anyhow::Result<Flow>
where
    S: TaskStore,
    R: BufRead,
    W: Write,
{
    if !view::show(session)? {
        return Ok(Flow::Continue);
    }

    let Some(raw) = session
        .console
        .prompt("Enter the number of the task to DELETE: ")?
    else {
        return Ok(Flow::Quit);
    };

    let Some(number) = parse_task_number(&raw) else {
        session.console.say(INVALID_NUMBER)?;
        return Ok(Flow::Continue);
    };

    match session.service.delete(number) {
        Ok(task) => {
            session
                .console
                .say(format!("Deleted task {number}: '{}'", task.description))?;
        }
        Err(error) => session.console.say(describe_failure(&error))?,
    }

    Ok(Flow::Continue)
}
