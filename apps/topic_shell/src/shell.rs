use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use client_core::ViewController;
use shared::error::StatusError;
use tracing::{debug, info};

use crate::{
    command::{parse_command, ShellCommand, HELP},
    render::{render_list, render_page, render_status, PageState},
};

/// Reads commands from `input` until EOF or `quit`, writing the page after
/// every action.
pub fn run<R: BufRead, W: Write>(
    title: &str,
    controller: &mut ViewController,
    input: R,
    mut output: W,
) -> Result<()> {
    write!(output, "{}", render_page(title, controller))?;

    for line in input.lines() {
        let line = line.context("failed to read command")?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                debug!(%line, error = %err, "unparsed command");
                writeln!(output, "{}", render_status(&StatusError::from(err)))?;
                continue;
            }
        };

        match command {
            ShellCommand::Action(action) => {
                if let Err(err) = controller.dispatch(action) {
                    writeln!(output, "{}", render_status(&StatusError::from(err)))?;
                }
                write!(output, "{}", render_page(title, controller))?;
            }
            ShellCommand::List => write!(output, "{}", render_list(controller))?,
            ShellCommand::Export => {
                let json = serde_json::to_string_pretty(&PageState::capture(controller))?;
                writeln!(output, "{json}")?;
            }
            ShellCommand::Help => writeln!(output, "{HELP}")?,
            ShellCommand::Quit => break,
        }
        output.flush()?;
    }

    info!(topics = controller.store().len(), "shell finished");
    Ok(())
}
