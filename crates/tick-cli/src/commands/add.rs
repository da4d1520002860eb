use std::io::{BufRead, Write};

use tick_core::entities::normalize_description;
use tick_core::enums::Priority;
use tick_store::TaskStore;

use crate::commands::Flow;
use crate::commands::shared::describe_failure;
use crate::commands::shared::parse::parse_priority;
use crate::menu::Session;

/// Prompt for a description and a priority, then add the task.
///
/// A blank description is rejected before the priority prompt.
pub fn handle<S, R, W>(session: &mut Session<S, R, W>) -> anyhow::Result<Flow>
where
    S: TaskStore,
    R: BufRead,
    W: Write,
{
    let Some(raw) = session
        .console
        .prompt("Enter the new task description: ")?
    else {
        return Ok(Flow::Quit);
    };

    if let Err(error) = normalize_description(&raw) {
        session.console.say(describe_failure(&error.into()))?;
        return Ok(Flow::Continue);
    }

    let Some(raw_priority) = session
        .console
        .prompt("Enter priority (high/medium/low, blank for none): ")?
    else {
        return Ok(Flow::Quit);
    };

    let priority = match parse_priority(&raw_priority) {
        Ok(priority) => priority,
        Err(message) => {
            session.console.say(message)?;
            return Ok(Flow::Continue);
        }
    };

    match session.service.add(&raw, priority) {
        Ok(task) if task.priority == Priority::None => {
            session
                .console
                .say(format!("Added task: '{}'", task.description))?;
        }
        Ok(task) => {
            session.console.say(format!(
                "Added task: '{}' ({})",
                task.description, task.priority
            ))?;
        }
        Err(error) => session.console.say(describe_failure(&error))?,
    }

    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tick_core::enums::Priority;

    use crate::menu::testing::{session, transcript};

    #[test]
    fn adds_trimmed_task_with_priority() {
        let (out, rest) = transcript(session("2\n  Water plants  \nm\n5\n"));

        assert!(out.contains("Added task: 'Water plants' (MEDIUM)"));
        assert_eq!(rest.service.tasks()[0].description, "Water plants");
        assert_eq!(rest.service.tasks()[0].priority, Priority::Medium);
        assert_eq!(rest.service.store().saves(), 1);
    }

    #[test]
    fn blank_priority_means_none() {
        let (out, rest) = transcript(session("2\nCall mum\n\n5\n"));
        assert!(out.contains("Added task: 'Call mum'\n"));
        assert_eq!(rest.service.tasks()[0].priority, Priority::None);
    }

    #[test]
    fn blank_description_is_rejected_without_priority_prompt() {
        let (out, rest) = transcript(session("2\n   \n5\n"));

        assert!(out.contains("Task description cannot be empty."));
        assert!(!out.contains("Enter priority"));
        assert!(rest.service.is_empty());
        assert_eq!(rest.service.store().saves(), 0);
    }

    #[test]
    fn unknown_priority_is_rejected() {
        let (out, rest) = transcript(session("2\nPay rent\nurgent\n5\n"));

        assert!(out.contains("invalid priority 'urgent'"));
        assert!(rest.service.is_empty());
    }

    #[test]
    fn input_ending_mid_add_quits() {
        let (out, rest) = transcript(session("2\nPay rent\n"));
        assert!(out.trim_end().ends_with(crate::menu::GOODBYE));
        assert!(rest.service.is_empty());
    }
}
