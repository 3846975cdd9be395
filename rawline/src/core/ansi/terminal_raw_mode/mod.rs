// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Terminal raw mode for the line reader.
//!
//! ## Raw Mode vs Cooked Mode
//!
//! **Cooked Mode** (default):
//! - Input is line-buffered (waits for Enter key)
//! - Special characters are interpreted (Ctrl+C, Ctrl+Z, etc.)
//! - Enter arrives as `\n` (`ICRNL` translates the carriage return)
//! - Echoing is enabled (typed characters appear on screen)
//!
//! **Raw Mode**:
//! - No line buffering - bytes available immediately
//! - No special character processing - Ctrl+C arrives as `0x03`, Ctrl+Z as `0x1A`
//! - Enter arrives as `\r`
//! - No echo - the line editor redraws the line itself
//!
//! The line editor depends on all of the raw mode properties: it reads one byte at a
//! time, interprets Ctrl+C / Ctrl+Z itself, and submits on `\r`.
//!
//! ## Scoped Acquisition
//!
//! [`RawModeGuard::new()`] saves the current terminal attributes and applies raw mode.
//! Dropping the guard restores exactly the attributes it saved. Each guard owns its own
//! saved copy, so a guard per [`crate::LineReader::read_line()`] call gives one
//! save/restore pair per read.
//!
//! Note that [`std::process::exit()`] does not run destructors. Code that wants to exit
//! the process on Ctrl+C must drop the guard first, which is what
//! [`crate::LineReader::read_line_or_exit()`] does by only exiting after the read has
//! returned.
//!
//! ## Platform Support
//!
//! - **Unix/Linux/macOS**: Uses rustix's safe termios API
//! - **Other platforms**: [`RawModeGuard::new()`] returns an error; use
//!   [`crate::TerminalMode::Unchanged`] instead
//!
//! ```no_run
//! use r3bl_rawline::RawModeGuard;
//!
//! {
//!     let _guard = RawModeGuard::new().expect("Failed to enable raw mode");
//!     // Terminal is now in raw mode
//!     // ... read bytes ...
//! } // Original terminal attributes restored when guard is dropped
//! ```

// Private modules (hide internal structure).
mod raw_mode_core;

#[cfg(unix)]
mod raw_mode_unix;

// Re-export the public API (flat, ergonomic surface).
pub use raw_mode_core::*;
