// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Platform-agnostic raw mode API: the [`RawModeGuard`] RAII wrapper.

#[cfg(unix)]
use super::raw_mode_unix;

/// RAII guard that owns one save/restore pair of the terminal attributes.
///
/// Construction saves the current attributes and applies raw mode. Dropping the guard
/// restores the saved attributes, on every exit path including panics. See [module
/// documentation] for details.
///
/// [module documentation]: mod@crate::core::ansi::terminal_raw_mode
#[derive(Debug)]
pub struct RawModeGuard {
    #[cfg(unix)]
    saved: raw_mode_unix::SavedTerminalMode,
}

impl RawModeGuard {
    /// Save the terminal attributes and enable raw mode.
    ///
    /// # Errors
    ///
    /// Returns miette diagnostic errors if:
    /// - Terminal attributes cannot be retrieved or set
    /// - Platform is not supported
    pub fn new() -> miette::Result<Self> {
        #[cfg(unix)]
        {
            let saved = raw_mode_unix::enable_raw_mode()?;
            tracing::debug!(message = "Raw mode enabled");
            Ok(RawModeGuard { saved })
        }

        #[cfg(not(unix))]
        {
            Err(miette::miette!("Platform not supported"))
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        #[cfg(unix)]
        match raw_mode_unix::restore_terminal_mode(&self.saved) {
            Ok(()) => tracing::debug!(message = "Raw mode disabled"),
            // % is Display, ? is Debug.
            Err(report) => tracing::error!(
                message = "Could not restore terminal attributes",
                error = ?report
            ),
        }
    }
}

/// Returns `true` if stdin is connected to a terminal, ie, raw mode can be applied to
/// it directly.
#[must_use]
pub fn is_stdin_a_tty() -> bool {
    #[cfg(unix)]
    {
        raw_mode_unix::is_stdin_a_tty()
    }

    #[cfg(not(unix))]
    {
        false
    }
}
