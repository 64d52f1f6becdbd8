//! Line commands accepted by an editing session.

use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail};
use followup_core::{Action, TaskType};

/// Help text printed by the `help` command.
pub const HELP: &str = "\
# Commands

- `show`: print the schedule
- `edit D`: edit day D
- `count D emails|calls|whatsapp N`: set a channel's task count
- `time D email|call|whatsapp I HH:MM`: set the time of task I
- `note D email|call|whatsapp I TEXT`: set the notes of task I
- `day D N`: move day D to day N on save (`day D` clears it)
- `save D`: save day D
- `cancel`: discard unsaved edits
- `add`: add a day after the last one
- `status`: show the execute control
- `execute`: store the schedule as a plan
- `quit`: end the session
";

/// One parsed session line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Show,
    Help,
    Status,
    Execute,
    Quit,
    /// An editor transition
    Edit(Action),
}

impl FromStr for SessionCommand {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim_start();

        let command = match word {
            "show" => SessionCommand::Show,
            "help" | "?" => SessionCommand::Help,
            "status" => SessionCommand::Status,
            "execute" => SessionCommand::Execute,
            "quit" | "exit" => SessionCommand::Quit,
            "cancel" => SessionCommand::Edit(Action::CancelEdit),
            "add" => SessionCommand::Edit(Action::AddDay),
            "edit" => SessionCommand::Edit(Action::BeginEdit {
                day: parse_day(rest)?,
            }),
            "save" => SessionCommand::Edit(Action::SaveDay {
                day: parse_day(rest)?,
            }),
            "day" => {
                let (day, value) = split_first(rest);
                SessionCommand::Edit(Action::ReassignDay {
                    day: parse_day(day)?,
                    value: value.to_string(),
                })
            }
            "count" => {
                let (day, rest) = split_first(rest);
                let (kind, value) = split_first(rest);
                SessionCommand::Edit(Action::SetCount {
                    day: parse_day(day)?,
                    kind: parse_kind(kind)?,
                    value: value.to_string(),
                })
            }
            "time" | "note" => {
                let (day, rest) = split_first(rest);
                let (kind, rest) = split_first(rest);
                let (index, value) = split_first(rest);
                let (day, kind, value) = (parse_day(day)?, parse_kind(kind)?, value.to_string());
                let index = index
                    .parse()
                    .with_context(|| format!("Invalid task index '{index}'"))?;
                if word == "time" {
                    SessionCommand::Edit(Action::SetTime {
                        day,
                        kind,
                        index,
                        value,
                    })
                } else {
                    SessionCommand::Edit(Action::SetNote {
                        day,
                        kind,
                        index,
                        value,
                    })
                }
            }
            "" => bail!("Empty command"),
            other => bail!("Unknown command '{other}', try 'help'"),
        };
        Ok(command)
    }
}

fn split_first(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((first, rest)) => (first, rest.trim_start()),
        None => (input, ""),
    }
}

fn parse_day(input: &str) -> Result<u32> {
    input
        .trim()
        .parse()
        .map_err(|_| anyhow!("Invalid day number '{}'", input.trim()))
}

fn parse_kind(input: &str) -> Result<TaskType> {
    input
        .parse()
        .map_err(|_| anyhow!("Unknown channel '{input}', use email, call or whatsapp"))
}
