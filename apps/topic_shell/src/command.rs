//! Parses shell input lines into controller actions.

use client_core::{Action, ControllerError};
use shared::{
    domain::READ_HREF_PREFIX,
    error::{ErrorCode, StatusError},
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Action(Action),
    List,
    Export,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}'; type 'help'")]
    Unknown(String),
    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),
    #[error("expected '<title> | <body>'")]
    MissingSeparator,
    #[error(transparent)]
    Target(#[from] ControllerError),
}

impl From<CommandError> for StatusError {
    fn from(value: CommandError) -> Self {
        match value {
            CommandError::Target(err) => err.into(),
            other => StatusError::new(ErrorCode::Validation, other.to_string()),
        }
    }
}

pub const HELP: &str = "\
commands:
  home                     show the welcome page
  read <id|/read/id>       read a topic
  /read/<id>               read a topic by its link
  create                   open the create form
  create <title> | <body>  create a topic directly
  update                   edit the topic being read
  update <title> | <body>  replace the topic being read
  title <text>             set the form title
  body <text>              set the form body
  save, submit             submit the open form
  delete                   delete the topic being read
  list, ls                 list topics
  export                   print the page state as JSON
  help, ?                  show this text
  quit, exit               leave";

/// Returns `Ok(None)` for blank lines.
pub fn parse_command(line: &str) -> Result<Option<ShellCommand>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    if line.starts_with(READ_HREF_PREFIX) {
        return Ok(Some(ShellCommand::Action(Action::select_from_nav(line)?)));
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "home" => ShellCommand::Action(Action::GoHome),
        "read" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument("read"));
            }
            ShellCommand::Action(Action::select_from_nav(rest)?)
        }
        "create" if rest.is_empty() => ShellCommand::Action(Action::StartCreate),
        "create" => {
            let (title, body) = split_fields(rest)?;
            ShellCommand::Action(Action::SubmitCreate { title, body })
        }
        "update" if rest.is_empty() => ShellCommand::Action(Action::StartUpdate),
        "update" => {
            let (title, body) = split_fields(rest)?;
            ShellCommand::Action(Action::SubmitUpdate { title, body })
        }
        "title" => ShellCommand::Action(Action::SetDraftTitle(rest.to_string())),
        "body" => ShellCommand::Action(Action::SetDraftBody(rest.to_string())),
        "save" | "submit" => ShellCommand::Action(Action::SubmitDraft),
        "delete" => ShellCommand::Action(Action::DeleteSelected),
        "list" | "ls" => ShellCommand::List,
        "export" => ShellCommand::Export,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        _ => return Err(CommandError::Unknown(word.to_string())),
    };
    Ok(Some(command))
}

fn split_fields(raw: &str) -> Result<(String, String), CommandError> {
    let (title, body) = raw.split_once('|').ok_or(CommandError::MissingSeparator)?;
    Ok((title.trim().to_string(), body.trim().to_string()))
}
