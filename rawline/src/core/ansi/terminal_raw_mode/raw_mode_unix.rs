// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Unix/Linux/macOS implementation of raw mode using rustix's safe termios API.

use miette::miette;
use rustix::{fd::{AsFd, BorrowedFd},
             termios::{self, OptionalActions, Termios}};
use std::{fs::File, io};

/// Represents either stdin or `/dev/tty` for terminal operations.
///
/// This enum allows us to handle both cases where stdin is a tty (normal terminal usage)
/// and where stdin is redirected (e.g., piped input), requiring us to use `/dev/tty`.
#[derive(Debug)]
enum TerminalFd {
    /// Using standard input (when it's a terminal)
    Stdin(io::Stdin),
    /// Using `/dev/tty` (when stdin is redirected)
    DevTty(File),
}

impl AsFd for TerminalFd {
    fn as_fd(&self) -> BorrowedFd<'_> {
        match self {
            TerminalFd::Stdin(stdin) => stdin.as_fd(),
            TerminalFd::DevTty(file) => file.as_fd(),
        }
    }
}

/// Gets a file descriptor for the controlling terminal.
///
/// Checks if stdin is a tty and uses it if so; otherwise opens `/dev/tty`.
///
/// # Errors
///
/// Returns an error if stdin is not a tty and `/dev/tty` cannot be opened.
fn get_terminal_fd() -> io::Result<TerminalFd> {
    let stdin = io::stdin();
    if termios::isatty(&stdin) {
        Ok(TerminalFd::Stdin(stdin))
    } else {
        let file = File::options().read(true).write(true).open("/dev/tty")?;
        Ok(TerminalFd::DevTty(file))
    }
}

/// The terminal attributes as they were before raw mode was applied, together with the
/// descriptor they have to be restored on.
#[derive(Debug)]
pub struct SavedTerminalMode {
    fd: TerminalFd,
    original: Termios,
}

/// Save the current terminal attributes, then apply raw mode.
///
/// Uses rustix's `make_raw()`, which implements `cfmakeraw` (no canonical mode, no
/// signal generation, no echo, no `ICRNL`, no output post processing, `VMIN=1`,
/// `VTIME=0`).
///
/// # Errors
///
/// Returns miette diagnostic errors if:
/// - Terminal file descriptor cannot be obtained
/// - Terminal attributes cannot be retrieved or set
pub fn enable_raw_mode() -> miette::Result<SavedTerminalMode> {
    let fd = get_terminal_fd()
        .map_err(|e| miette!("failed to get terminal file descriptor: {e}"))?;

    let original = termios::tcgetattr(&fd)
        .map_err(|e| miette!("failed to retrieve terminal attributes: {e}"))?;

    // rustix's Termios doesn't implement Copy, so we need to clone.
    let mut raw = original.clone();
    raw.make_raw();

    termios::tcsetattr(&fd, OptionalActions::Now, &raw)
        .map_err(|e| miette!("failed to set terminal attributes: {e}"))?;

    Ok(SavedTerminalMode { fd, original })
}

/// Put back the attributes captured by [`enable_raw_mode()`].
///
/// # Errors
///
/// Returns a miette diagnostic error if the terminal attributes cannot be set.
pub fn restore_terminal_mode(saved: &SavedTerminalMode) -> miette::Result<()> {
    termios::tcsetattr(&saved.fd, OptionalActions::Now, &saved.original)
        .map_err(|e| miette!("failed to restore terminal attributes: {e}"))
}

/// Returns `true` if stdin is connected to a terminal.
#[must_use]
pub fn is_stdin_a_tty() -> bool { termios::isatty(io::stdin()) }
