// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_rawline
//!
//! A small, synchronous line editor for terminals in raw mode. It reads one line at a
//! time from any [`std::io::Read`], echoes edits to any [`std::io::Write`], and
//! supports:
//!
//! - Left/right arrows, Home, End, Backspace, Delete.
//! - Up/down arrow history through the [`HistoryProvider`] trait.
//! - Ctrl+C and Ctrl+Z, reported as [`ReadLineOutcome::Interrupted`] and
//!   [`ReadLineOutcome::Suspended`].
//! - A bounded [`LineBuffer`]: a full line can still be edited, but typing one more
//!   byte ends the line and the rest of the input line is discarded.
//!
//! The terminal is put in raw mode only for the duration of each read, by a
//! [`RawModeGuard`], so it is always restored before control comes back to the caller.
//!
//! ```no_run
//! use r3bl_rawline::{InMemoryHistory, LineReader, LineReaderConfig};
//!
//! let reader = LineReader::new(LineReaderConfig::default().with_prompt("name"));
//! let mut history = InMemoryHistory::default();
//! let mut stdin = std::io::stdin();
//! let mut stdout = std::io::stdout();
//! if let Ok(Some(line)) = reader.read_line_or_exit(&mut stdin, &mut stdout, &mut history) {
//!     println!("Read line: {line}");
//! }
//! ```
//!
//! # Logging
//!
//! The crate emits [`tracing`] events. Use [`try_initialize_logging_global()`] with a
//! [`TracingConfig`] to send them to a file (stdout is a bad idea while the terminal is
//! in raw mode).

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap().
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod core;
pub mod line_editor;

// Re-export stable public API using glob imports for ergonomic, flat API surface.
#[allow(ambiguous_glob_reexports)]
pub use core::*;
#[allow(ambiguous_glob_reexports)]
pub use line_editor::*;
