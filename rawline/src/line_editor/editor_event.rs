// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::AsRefStr;

/// A decoded key press, as understood by [`crate::LineState::apply_event()`].
///
/// Produced by [`crate::KeyDecoder`] from the raw byte stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum EditorEvent {
    /// Any byte that isn't a recognized control code or escape sequence.
    InsertChar(u8),
    MoveLeft,
    MoveRight,
    Home,
    End,
    /// Backspace: remove the byte left of the cursor.
    DeleteBackward,
    /// Delete: remove the byte under the cursor.
    DeleteForward,
    /// Up arrow.
    HistoryPrev,
    /// Down arrow.
    HistoryNext,
    /// Enter.
    Submit,
    /// Ctrl+C.
    Interrupt,
    /// Ctrl+Z.
    Suspend,
    /// A complete escape sequence that isn't in the key table. Still causes a redraw.
    NoOp,
}
