// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Raw byte to [`EditorEvent`] decoding.
//!
//! The decoder is push based: feed it one byte at a time with [`KeyDecoder::push()`],
//! and it returns an event once a full key has arrived. It never blocks and never
//! reads on its own, so it can be driven by a terminal, a test script, or anything in
//! between.
//!
//! ```text
//!            0x1B               any b2              b3 in {A,B,C,D} or unknown
//! Ground ───────────▶ Escape ───────────▶ Intermediate(b2) ──────────────────▶ Ground
//!   ▲                                          │                                  (event)
//!   │                                          │ b2 == '[' and b3 in {1,3,4}
//!   │            any byte (usually '~')        ▼
//!   └──────────────────────────────── AwaitTerminator(event)
//! ```
//!
//! An escape always swallows exactly two more bytes, even when the second one isn't
//! `[`, so a stray ESC followed by Enter does *not* submit the line.

use super::EditorEvent;
use crate::{ANSI_CSI_BRACKET, ANSI_ESC, ARROW_DOWN_FINAL, ARROW_LEFT_FINAL,
            ARROW_RIGHT_FINAL, ARROW_UP_FINAL, BACKSPACE_DEL, CARRIAGE_RETURN, CTRL_C,
            CTRL_Z, SPECIAL_DELETE_CODE, SPECIAL_END_CODE, SPECIAL_HOME_CODE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum DecoderState {
    #[default]
    Ground,
    /// Got ESC, waiting for the second byte.
    Escape,
    /// Got ESC and the second byte, waiting for the third.
    Intermediate(u8),
    /// Got `ESC [ 1`, `ESC [ 3`, or `ESC [ 4`; the next byte completes the key.
    AwaitTerminator(EditorEvent),
}

#[derive(Debug, Clone, Default)]
pub struct KeyDecoder {
    state: DecoderState,
}

impl KeyDecoder {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Feed one byte. Returns the event once the key is complete, `None` while in the
    /// middle of an escape sequence.
    pub fn push(&mut self, byte: u8) -> Option<EditorEvent> {
        let (next_state, maybe_event) = match self.state {
            DecoderState::Ground => decode_ground(byte),
            DecoderState::Escape => (DecoderState::Intermediate(byte), None),
            DecoderState::Intermediate(b2) => decode_escape_sequence(b2, byte),
            DecoderState::AwaitTerminator(event) => (DecoderState::Ground, Some(event)),
        };
        self.state = next_state;
        maybe_event
    }

    /// `true` while part of an escape sequence has been consumed.
    #[must_use]
    pub fn is_mid_sequence(&self) -> bool { self.state != DecoderState::Ground }

    /// Decode a whole byte slice. A trailing incomplete sequence yields nothing.
    #[cfg(test)]
    fn decode_all(&mut self, bytes: &[u8]) -> Vec<EditorEvent> {
        bytes.iter().filter_map(|byte| self.push(*byte)).collect()
    }
}

fn decode_ground(byte: u8) -> (DecoderState, Option<EditorEvent>) {
    let event = match byte {
        CTRL_C => EditorEvent::Interrupt,
        CTRL_Z => EditorEvent::Suspend,
        ANSI_ESC => return (DecoderState::Escape, None),
        BACKSPACE_DEL => EditorEvent::DeleteBackward,
        CARRIAGE_RETURN => EditorEvent::Submit,
        _ => EditorEvent::InsertChar(byte),
    };
    (DecoderState::Ground, Some(event))
}

fn decode_escape_sequence(b2: u8, b3: u8) -> (DecoderState, Option<EditorEvent>) {
    if b2 != ANSI_CSI_BRACKET {
        return (DecoderState::Ground, Some(EditorEvent::NoOp));
    }

    let event = match b3 {
        ARROW_LEFT_FINAL => EditorEvent::MoveLeft,
        ARROW_RIGHT_FINAL => EditorEvent::MoveRight,
        ARROW_DOWN_FINAL => EditorEvent::HistoryNext,
        ARROW_UP_FINAL => EditorEvent::HistoryPrev,
        SPECIAL_HOME_CODE => {
            return (DecoderState::AwaitTerminator(EditorEvent::Home), None);
        }
        SPECIAL_DELETE_CODE => {
            return (DecoderState::AwaitTerminator(EditorEvent::DeleteForward), None);
        }
        SPECIAL_END_CODE => {
            return (DecoderState::AwaitTerminator(EditorEvent::End), None);
        }
        _ => EditorEvent::NoOp,
    };
    (DecoderState::Ground, Some(event))
}
