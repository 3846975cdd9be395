// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io;

use thiserror::Error;

/// Error returned from [`LineReader::read_line()`](crate::LineReader::read_line).
/// Editing itself never fails; these are all problems with the terminal or the
/// configuration.
#[derive(Debug, Error)]
pub enum ReadlineError {
    /// An internal I/O error occurred.
    #[error(transparent)]
    IO(#[from] io::Error),

    /// The line buffer needs room for at least the terminator slot.
    #[error("invalid line capacity {0}, it must be at least 1")]
    InvalidCapacity(usize),

    /// The terminal attributes could not be saved, changed, or restored.
    #[error("raw mode: {0}")]
    RawMode(String),
}

/// For convenience, convert [`miette::Report`] to [`ReadlineError`], so that `?` works
/// on the raw mode functions.
impl From<miette::Report> for ReadlineError {
    fn from(report: miette::Report) -> Self { ReadlineError::RawMode(format!("{report}")) }
}
