use crate::{
    command::{self, ConsoleInput, SessionScript},
    session::{Notice, Session},
};
use anyhow::{Context, Result};
use std::{
    fs,
    io::{BufRead, Write},
};

/// Reads commands line by line until `quit` or end of input.
pub fn run_interactive<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "{}", command::HELP)?;
    prompt(output)?;
    for line in input.lines() {
        let line = line.context("Failed to read from standard input")?;
        match command::parse_line(&line) {
            Ok(ConsoleInput::Command(cmd)) => {
                let notice = session.execute(cmd);
                writeln!(output, "{}", notice)?;
            }
            Ok(ConsoleInput::Help) => writeln!(output, "{}", command::HELP)?,
            Ok(ConsoleInput::Quit) => break,
            Ok(ConsoleInput::Blank) => {}
            Err(err) => {
                log::warn!("Unreadable command '{}': {}", line.trim(), err);
                writeln!(output, "Warning: {}", err)?;
            }
        }
        prompt(output)?;
    }
    Ok(())
}

/// Runs every command of a YAML script in order and returns the notices.
pub fn run_script<W: Write>(
    session: &mut Session,
    path: &str,
    output: &mut W,
) -> Result<Vec<Notice>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read script '{}'", path))?;
    let script: SessionScript = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse script '{}'", path))?;

    writeln!(output, "Running {} command(s) from '{}'", script.commands.len(), path)?;
    let mut notices = Vec::with_capacity(script.commands.len());
    for cmd in script.commands {
        let notice = session.execute(cmd);
        writeln!(output, "{}", notice)?;
        notices.push(notice);
    }
    Ok(notices)
}

fn prompt<W: Write>(output: &mut W) -> Result<()> {
    write!(output, "risc> ")?;
    output.flush()?;
    Ok(())
}
