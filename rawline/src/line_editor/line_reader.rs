// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The blocking driver that ties a byte source, a terminal sink, the [`KeyDecoder`],
//! the [`LineState`] and a [`HistoryProvider`] together.
//!
//! # Order of operations for one read
//!
//! 1. Fresh [`LineState`].
//! 2. Raw mode is entered (unless [`TerminalMode::Unchanged`]).
//! 3. `\r<prompt>` is written. Doing this *after* raw mode is on means that keys
//!    pressed as soon as the prompt shows up are never echoed by the cooked mode line
//!    discipline.
//! 4. Bytes are read one at a time until the line ends or input runs out. If the
//!    line ended because a byte didn't fit, the rest of the input line is read and
//!    thrown away.
//! 5. The terminal attributes are restored.
//! 6. The final line (or a bare newline) is written, now with output processing back
//!    on.
//!
//! The process is never terminated from inside [`LineReader::read_line()`]. Use
//! [`LineReader::read_line_or_exit()`] for that, which exits only once the terminal
//! has been restored.

use std::io::{self, Read, Write};

use super::{KeyDecoder, LineEnd, LineReaderConfig, LineState, TerminalMode};
use crate::{CARRIAGE_RETURN, CR_RESET_COLUMN, EditorEffect, HistoryProvider, LINE_FEED,
            NEW_LINE, RawModeGuard, ReadlineError, ok};

/// Exit status used by [`LineReader::read_line_or_exit()`] on Ctrl+C.
pub const EXIT_CODE_INTERRUPT: i32 = 0;
/// Exit status used by [`LineReader::read_line_or_exit()`] on Ctrl+Z.
pub const EXIT_CODE_SUSPEND: i32 = 1;

/// Returned from [`LineReader::read_line()`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadLineOutcome {
    /// The user pressed Enter, or typed past the end of a full buffer.
    Line(String),
    /// The user pressed Ctrl+C.
    Interrupted,
    /// The user pressed Ctrl+Z.
    Suspended,
    /// Input ran out before the line was finished. The partial line is dropped.
    Eof,
}

impl ReadLineOutcome {
    /// Status the process should exit with, if this outcome means it should exit.
    #[must_use]
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ReadLineOutcome::Interrupted => Some(EXIT_CODE_INTERRUPT),
            ReadLineOutcome::Suspended => Some(EXIT_CODE_SUSPEND),
            ReadLineOutcome::Line(_) | ReadLineOutcome::Eof => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LineReader {
    config: LineReaderConfig,
}

impl LineReader {
    #[must_use]
    pub fn new(config: LineReaderConfig) -> Self { Self { config } }

    #[must_use]
    pub fn config(&self) -> &LineReaderConfig { &self.config }

    /// Read one line from `input`, echoing edits to `output`.
    ///
    /// # Errors
    ///
    /// - [`ReadlineError::InvalidCapacity`] if the configured capacity is 0.
    /// - [`ReadlineError::RawMode`] if the terminal attributes can't be changed.
    /// - [`ReadlineError::IO`] if reading or writing fails.
    pub fn read_line(
        &self,
        input: &mut dyn Read,
        output: &mut dyn Write,
        history: &mut dyn HistoryProvider,
    ) -> Result<ReadLineOutcome, ReadlineError> {
        let mut line_state = LineState::try_new(self.config.capacity)?;
        let prompt = self.config.rendered_prompt();

        let maybe_line_end = {
            let _maybe_guard = enter_terminal_mode(self.config.terminal_mode)?;

            output.write_all(CR_RESET_COLUMN.as_bytes())?;
            output.write_all(prompt.as_bytes())?;
            output.flush()?;

            let maybe_line_end =
                run_event_loop(&mut line_state, &prompt, input, output, history)?;

            if maybe_line_end == Some(LineEnd::Exhausted) {
                let discarded = drain_line(input)?;
                tracing::debug!(message = "Line buffer full, drained input", discarded);
            }

            maybe_line_end
            // Terminal attributes restored here.
        };

        let outcome = match maybe_line_end {
            Some(LineEnd::Submitted | LineEnd::Exhausted) => {
                ReadLineOutcome::Line(line_state.into_line())
            }
            Some(LineEnd::Interrupted) => ReadLineOutcome::Interrupted,
            Some(LineEnd::Suspended) => ReadLineOutcome::Suspended,
            None => ReadLineOutcome::Eof,
        };

        write_final_output(&outcome, &prompt, output)?;

        // % is Display, ? is Debug.
        tracing::debug!(message = "read_line", outcome = ?outcome);

        Ok(outcome)
    }

    /// Like [`Self::read_line()`], but terminates the process on Ctrl+C (status
    /// [`EXIT_CODE_INTERRUPT`]) and Ctrl+Z (status [`EXIT_CODE_SUSPEND`]). Returns
    /// `None` when input ran out.
    ///
    /// The process exits only after [`Self::read_line()`] returned, so the terminal has
    /// already been restored.
    ///
    /// # Errors
    ///
    /// Same as [`Self::read_line()`].
    pub fn read_line_or_exit(
        &self,
        input: &mut dyn Read,
        output: &mut dyn Write,
        history: &mut dyn HistoryProvider,
    ) -> Result<Option<String>, ReadlineError> {
        let outcome = self.read_line(input, output, history)?;
        if let Some(exit_code) = outcome.exit_code() {
            tracing::debug!(message = "Exiting", exit_code);
            std::process::exit(exit_code);
        }
        match outcome {
            ReadLineOutcome::Line(line) => Ok(Some(line)),
            _ => Ok(None),
        }
    }
}

fn enter_terminal_mode(
    terminal_mode: TerminalMode,
) -> Result<Option<RawModeGuard>, ReadlineError> {
    match terminal_mode {
        TerminalMode::Raw => Ok(Some(RawModeGuard::new()?)),
        TerminalMode::Unchanged => Ok(None),
    }
}

/// Returns `None` if input ran out before the line ended.
fn run_event_loop(
    line_state: &mut LineState,
    prompt: &str,
    input: &mut dyn Read,
    output: &mut dyn Write,
    history: &mut dyn HistoryProvider,
) -> Result<Option<LineEnd>, ReadlineError> {
    let mut decoder = KeyDecoder::new();

    while let Some(byte) = read_byte(input)? {
        // Mid escape sequence.
        let Some(event) = decoder.push(byte) else {
            continue;
        };

        match line_state.apply_event(event, history) {
            EditorEffect::Redraw(instruction) => {
                instruction.render_and_flush(prompt, output)?;
            }
            EditorEffect::Finish(line_end) => {
                tracing::debug!(message = "Line ended", line_end = line_end.as_ref());
                return Ok(Some(line_end));
            }
        }
    }

    if decoder.is_mid_sequence() {
        tracing::debug!(message = "Input ended inside an escape sequence");
    }

    Ok(None)
}

/// Read and discard until the end of the current input line. Returns how many bytes
/// were thrown away.
fn drain_line(input: &mut dyn Read) -> io::Result<usize> {
    let mut discarded = 0;
    while let Some(byte) = read_byte(input)? {
        if byte == CARRIAGE_RETURN || byte == LINE_FEED {
            break;
        }
        discarded += 1;
    }
    Ok(discarded)
}

fn read_byte(input: &mut dyn Read) -> io::Result<Option<u8>> {
    let mut buf = [0_u8; 1];
    loop {
        match input.read(&mut buf) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(buf[0])),
            Err(error) if error.kind() == io::ErrorKind::Interrupted => {}
            Err(error) => return Err(error),
        }
    }
}

fn write_final_output(
    outcome: &ReadLineOutcome,
    prompt: &str,
    output: &mut dyn Write,
) -> io::Result<()> {
    if let ReadLineOutcome::Line(line) = outcome {
        output.write_all(CR_RESET_COLUMN.as_bytes())?;
        output.write_all(prompt.as_bytes())?;
        output.write_all(line.as_bytes())?;
    }
    output.write_all(NEW_LINE.as_bytes())?;
    output.flush()?;

    ok!()
}
