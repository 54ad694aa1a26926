// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Line-oriented commands accepted by the terminal session.
//!
//! Each line names one action, optionally followed by its text argument:
//! `input <text>`, `submit`, `edit <text>`, `copy`, `reset`, `confirm`,
//! `cancel`, `show`, `help`, `quit`. Arguments keep their inner whitespace
//! so repeated spaces reach the slugifier untouched.

use crate::{error::Error, session::Trigger};

/// Help text printed by the `help` command.
pub const HELP: &str = "\
commands:
  input <text>   replace the text to convert
  submit         convert the current text
  edit <text>    overwrite the result by hand
  copy           copy the result to the clipboard
  reset          ask to clear everything
  confirm        confirm a pending reset
  cancel         dismiss a pending reset
  show           print the current state
  help           print this help
  quit           leave the session";

/// Parsed session command.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub enum SessionCommand
{
    /// Forward a trigger to the session.
    Trigger(Trigger,),
    /// Print the current state.
    Show,
    /// Print [`HELP`].
    Help,
    /// End the session.
    Quit,
}

/// Parses one input line.
///
/// Blank lines yield `Ok(None)`.
///
/// # Errors
///
/// Returns [`Error::Validation`] for unknown commands and for `input` or
/// `edit` without an argument separator.
///
/// # Examples
///
/// ```
/// use slugline::{SessionCommand, Trigger, parse_command};
///
/// let command = parse_command("input Hello  World",).expect("valid command",);
/// assert_eq!(command, Some(SessionCommand::Trigger(Trigger::Input("Hello  World".to_owned()))));
/// ```
pub fn parse_command(line: &str,) -> Result<Option<SessionCommand,>, Error,>
{
    let line = line.trim_end_matches(['\r', '\n',],);
    let trimmed = line.trim_start();
    if trimmed.trim_end().is_empty() {
        return Ok(None,);
    }

    let (name, argument,) = match trimmed.split_once(' ',) {
        Some((name, argument,),) => (name, Some(argument,),),
        None => (trimmed.trim_end(), None,),
    };

    let command = match (name.to_ascii_lowercase().as_str(), argument,) {
        ("input" | "type", Some(text,),) => SessionCommand::Trigger(Trigger::Input(text.to_owned(),),),
        ("input" | "type", None,) => SessionCommand::Trigger(Trigger::Input(String::new(),),),
        ("edit", Some(text,),) => SessionCommand::Trigger(Trigger::EditResult(text.to_owned(),),),
        ("edit", None,) => SessionCommand::Trigger(Trigger::EditResult(String::new(),),),
        ("submit", _,) => SessionCommand::Trigger(Trigger::Submit,),
        ("copy", _,) => SessionCommand::Trigger(Trigger::Copy,),
        ("reset", _,) => SessionCommand::Trigger(Trigger::RequestReset,),
        ("confirm" | "yes", _,) => SessionCommand::Trigger(Trigger::ConfirmReset,),
        ("cancel" | "no", _,) => SessionCommand::Trigger(Trigger::CancelReset,),
        ("show", _,) => SessionCommand::Show,
        ("help" | "?", _,) => SessionCommand::Help,
        ("quit" | "exit", _,) => SessionCommand::Quit,
        (other, _,) => {
            return Err(Error::validation(format!("unknown command '{other}', try 'help'"),),);
        }
    };

    Ok(Some(command,),)
}
