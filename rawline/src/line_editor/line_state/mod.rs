// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Line editing state machine.
//!
//! [`LineState`] is a pure `(state, event) -> effect` transition. It does no I/O of
//! its own: [`LineState::apply_event()`] returns an [`EditorEffect`] that either asks
//! for a redraw (a [`RedrawInstruction`] the caller writes to the terminal) or says the
//! read is over (a [`LineEnd`]).
//!
//! | Module           | Responsibility                                          |
//! |------------------|---------------------------------------------------------|
//! | `core`           | [`LineState`] struct, [`EditorEffect`], [`LineEnd`]      |
//! | `event_handlers` | One handler per [`EditorEvent`](crate::EditorEvent)     |
//! | `render`         | [`RedrawInstruction`] building and writing               |
//!
//! # Cursor model
//!
//! The cursor is stored as `off`, its distance from the *end* of the line, so
//! `off == 0` is after the last byte and `off == len` is before the first. `pad`
//! counts cells freed up by deletions since the last insertion; they are overwritten
//! with spaces on the next redraw, since redraws never erase the line.

// Private modules organized by functional responsibility.
mod core;
mod event_handlers;
mod render;

// Public re-exports (expose stable API).
pub use core::*;
pub use render::*;
