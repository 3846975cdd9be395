// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::RedrawInstruction;
use crate::{LineBuffer, ReadlineError};
use strum_macros::AsRefStr;

/// Why a read ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum LineEnd {
    /// Enter was pressed.
    Submitted,
    /// A byte arrived while the buffer was already full. The byte is dropped and the
    /// caller must drain the rest of the input line.
    Exhausted,
    /// Ctrl+C.
    Interrupted,
    /// Ctrl+Z.
    Suspended,
}

/// Result of feeding one event to [`LineState::apply_event()`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEffect {
    Redraw(RedrawInstruction),
    Finish(LineEnd),
}

/// The line being edited. Created fresh for every read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineState {
    pub(super) buffer: LineBuffer,
    /// Cursor distance from the end of the content, in bytes.
    pub(super) off: usize,
    /// Cells vacated by deletions since the last insertion.
    pub(super) pad: usize,
}

impl LineState {
    /// # Errors
    ///
    /// Returns [`ReadlineError::InvalidCapacity`] if `capacity` is 0.
    pub fn try_new(capacity: usize) -> Result<Self, ReadlineError> {
        Ok(Self {
            buffer: LineBuffer::try_new(capacity)?,
            off: 0,
            pad: 0,
        })
    }

    #[must_use]
    pub fn content(&self) -> &[u8] { self.buffer.as_bytes() }

    #[must_use]
    pub fn len(&self) -> usize { self.buffer.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }

    #[must_use]
    pub fn off(&self) -> usize { self.off }

    #[must_use]
    pub fn pad(&self) -> usize { self.pad }

    #[must_use]
    pub fn capacity(&self) -> usize { self.buffer.capacity() }

    /// Index into the content where the cursor sits.
    #[must_use]
    pub fn cursor_index(&self) -> usize { self.buffer.len().saturating_sub(self.off) }

    /// The content as text. Bytes that aren't valid UTF-8 are replaced.
    #[must_use]
    pub fn content_as_string(&self) -> String { self.buffer.to_string_lossy() }

    /// Consume the state, producing the line.
    #[must_use]
    pub fn into_line(self) -> String { self.content_as_string() }
}
