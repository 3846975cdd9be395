// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{Read, Write};

use r3bl_rawline::{EXIT_CODE_INTERRUPT, EXIT_CODE_SUSPEND, InMemoryHistory, LineReader,
                   NoHistory, ReadLineOutcome, ReadlineError};
use strum_macros::AsRefStr;

/// Lines that end the session.
pub const EXIT_COMMANDS: [&str; 2] = ["exit", "quit"];

/// Why [`run_session()`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum SessionEnd {
    /// One of the [`EXIT_COMMANDS`] was entered.
    Quit,
    /// Input ran out.
    Eof,
    /// Ctrl+C.
    Interrupted,
    /// Ctrl+Z.
    Suspended,
}

impl SessionEnd {
    #[must_use]
    pub fn exit_code(self) -> i32 {
        match self {
            SessionEnd::Quit | SessionEnd::Eof => 0,
            SessionEnd::Interrupted => EXIT_CODE_INTERRUPT,
            SessionEnd::Suspended => EXIT_CODE_SUSPEND,
        }
    }
}

/// Read lines until the user quits, echoing each one back as `Read line: <line>`.
/// Submitted lines are added to `maybe_history` when there is one.
///
/// # Errors
///
/// Returns any error from [`LineReader::read_line()`] or from writing the echo.
pub fn run_session(
    reader: &LineReader,
    mut maybe_history: Option<InMemoryHistory>,
    input: &mut dyn Read,
    output: &mut dyn Write,
) -> Result<SessionEnd, ReadlineError> {
    loop {
        let outcome = match maybe_history.as_mut() {
            Some(history) => reader.read_line(input, output, history)?,
            None => reader.read_line(input, output, &mut NoHistory)?,
        };

        let line = match outcome {
            ReadLineOutcome::Line(line) => line,
            ReadLineOutcome::Interrupted => return Ok(SessionEnd::Interrupted),
            ReadLineOutcome::Suspended => return Ok(SessionEnd::Suspended),
            ReadLineOutcome::Eof => return Ok(SessionEnd::Eof),
        };

        writeln!(output, "Read line: {line}")?;
        output.flush()?;

        if EXIT_COMMANDS.contains(&line.trim()) {
            return Ok(SessionEnd::Quit);
        }

        if let Some(history) = maybe_history.as_mut() {
            history.update(Some(line));
        }
    }
}
