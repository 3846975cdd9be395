// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::core::{EditorEffect, LineEnd, LineState};
use crate::{EditorEvent, HistoryDirection, HistoryProvider};

impl LineState {
    /// Apply one decoded key to the line.
    ///
    /// Every event that doesn't end the read produces a redraw, even when it changed
    /// nothing (e.g. backspace at the start of the line).
    pub fn apply_event(
        &mut self,
        event: EditorEvent,
        history: &mut dyn HistoryProvider,
    ) -> EditorEffect {
        tracing::trace!(message = "apply_event", event = event.as_ref());

        match event {
            EditorEvent::InsertChar(byte) => {
                // This byte doesn't fit, so the line ends with what is already there.
                if self.buffer.is_full() {
                    return EditorEffect::Finish(LineEnd::Exhausted);
                }
                handle_insert(self, byte);
            }
            EditorEvent::MoveLeft => handle_left(self),
            EditorEvent::MoveRight => handle_right(self),
            EditorEvent::Home => handle_home(self),
            EditorEvent::End => handle_end(self),
            EditorEvent::DeleteBackward => handle_backspace(self),
            EditorEvent::DeleteForward => handle_delete(self),
            EditorEvent::HistoryPrev => {
                handle_history(self, history, HistoryDirection::Older);
            }
            EditorEvent::HistoryNext => {
                handle_history(self, history, HistoryDirection::Newer);
            }
            EditorEvent::Submit => {
                self.off = 0;
                self.pad = 0;
                return EditorEffect::Finish(LineEnd::Submitted);
            }
            EditorEvent::Interrupt => return EditorEffect::Finish(LineEnd::Interrupted),
            EditorEvent::Suspend => return EditorEffect::Finish(LineEnd::Suspended),
            EditorEvent::NoOp => {}
        }

        EditorEffect::Redraw(self.redraw_instruction())
    }
}

/// Insert to the left of the cursor. `off` stays put, so the cursor keeps its place
/// relative to the text after it.
fn handle_insert(line_state: &mut LineState, byte: u8) {
    let index = line_state.cursor_index();
    if line_state.buffer.insert_at(index, byte) {
        line_state.pad = 0;
    }
}

fn handle_left(line_state: &mut LineState) {
    line_state.off = line_state.off.saturating_add(1).min(line_state.buffer.len());
}

fn handle_right(line_state: &mut LineState) {
    line_state.off = line_state.off.saturating_sub(1);
}

fn handle_home(line_state: &mut LineState) { line_state.off = line_state.buffer.len(); }

fn handle_end(line_state: &mut LineState) { line_state.off = 0; }

fn handle_backspace(line_state: &mut LineState) {
    let Some(index) = line_state.cursor_index().checked_sub(1) else {
        return;
    };
    if line_state.buffer.remove_at(index).is_some() {
        line_state.pad += 1;
    }
}

fn handle_delete(line_state: &mut LineState) {
    if line_state.off == 0 {
        return;
    }
    let index = line_state.cursor_index();
    if line_state.buffer.remove_at(index).is_some() {
        line_state.pad += 1;
        line_state.off -= 1;
    }
}

fn handle_history(
    line_state: &mut LineState,
    history: &mut dyn HistoryProvider,
    direction: HistoryDirection,
) {
    let current = line_state.buffer.to_string_lossy();
    let maybe_entry = history.navigate(direction, &current, line_state.buffer.capacity());

    tracing::debug!(
        message = "history navigation",
        direction = direction.as_ref(),
        found = maybe_entry.is_some()
    );

    if let Some(entry) = maybe_entry {
        line_state.buffer.replace_with(entry.as_bytes());
        line_state.off = 0;
        line_state.pad = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InMemoryHistory, KeyDecoder, NoHistory, RedrawInstruction};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    /// Feed raw key bytes through the decoder and the editor, stopping at the first
    /// event that ends the read.
    fn run_keys(
        line_state: &mut LineState,
        history: &mut dyn HistoryProvider,
        bytes: &[u8],
    ) -> Option<LineEnd> {
        let mut decoder = KeyDecoder::new();
        for byte in bytes {
            if let Some(event) = decoder.push(*byte)
                && let EditorEffect::Finish(end) = line_state.apply_event(event, history)
            {
                return Some(end);
            }
        }
        None
    }

    fn type_text(line_state: &mut LineState, text: &str) {
        for byte in text.bytes() {
            line_state.apply_event(EditorEvent::InsertChar(byte), &mut NoHistory);
        }
    }

    /// Provider that hands out a fixed sequence of answers, then `None`.
    struct ScriptedHistory(Vec<Option<String>>);

    impl HistoryProvider for ScriptedHistory {
        fn navigate(&mut self, _: HistoryDirection, _: &str, _: usize) -> Option<String> {
            if self.0.is_empty() { None } else { self.0.remove(0) }
        }
    }

    #[test]
    fn test_append_only() {
        let mut line_state = LineState::try_new(32).unwrap();
        type_text(&mut line_state, "hello world");
        assert_eq!(line_state.content(), b"hello world");
        assert_eq!(line_state.len(), 11);
        assert_eq!(line_state.off(), 0);
        assert_eq!(line_state.pad(), 0);
    }

    #[test]
    fn test_insert_left_of_cursor_keeps_off() {
        let mut line_state = LineState::try_new(32).unwrap();
        type_text(&mut line_state, "abcd");
        line_state.apply_event(EditorEvent::MoveLeft, &mut NoHistory);
        line_state.apply_event(EditorEvent::MoveLeft, &mut NoHistory);
        type_text(&mut line_state, "XY");
        assert_eq!(line_state.content(), b"abXYcd");
        assert_eq!(line_state.off(), 2);
    }

    #[test]
    fn test_backspace_then_retype_restores_content() {
        let mut line_state = LineState::try_new(32).unwrap();
        type_text(&mut line_state, "hello");
        line_state.apply_event(EditorEvent::MoveLeft, &mut NoHistory);
        line_state.apply_event(EditorEvent::MoveLeft, &mut NoHistory);

        line_state.apply_event(EditorEvent::DeleteBackward, &mut NoHistory);
        assert_eq!(line_state.content(), b"helo");
        assert_eq!(line_state.pad(), 1);

        line_state.apply_event(EditorEvent::InsertChar(b'l'), &mut NoHistory);
        assert_eq!(line_state.content(), b"hello");
        assert_eq!(line_state.pad(), 0);
        assert_eq!(line_state.off(), 2);
    }

    #[test_case(0; "empty line")]
    #[test_case(7; "some text")]
    fn test_moves_are_clamped(len: usize) {
        let mut line_state = LineState::try_new(32).unwrap();
        type_text(&mut line_state, &"x".repeat(len));

        for _ in 0..len + 5 {
            line_state.apply_event(EditorEvent::MoveLeft, &mut NoHistory);
        }
        assert_eq!(line_state.off(), len);

        for _ in 0..len + 5 {
            line_state.apply_event(EditorEvent::MoveRight, &mut NoHistory);
        }
        assert_eq!(line_state.off(), 0);
    }

    #[test]
    fn test_home_then_end() {
        let mut line_state = LineState::try_new(32).unwrap();
        type_text(&mut line_state, "abc");
        line_state.apply_event(EditorEvent::Home, &mut NoHistory);
        assert_eq!(line_state.off(), 3);
        assert_eq!(line_state.cursor_index(), 0);
        line_state.apply_event(EditorEvent::End, &mut NoHistory);
        assert_eq!(line_state.off(), 0);
    }

    #[test]
    fn test_delete_forward() {
        let mut line_state = LineState::try_new(32).unwrap();
        type_text(&mut line_state, "abc");

        // Cursor at the end, nothing under it.
        line_state.apply_event(EditorEvent::DeleteForward, &mut NoHistory);
        assert_eq!(line_state.content(), b"abc");
        assert_eq!(line_state.pad(), 0);

        line_state.apply_event(EditorEvent::Home, &mut NoHistory);
        line_state.apply_event(EditorEvent::DeleteForward, &mut NoHistory);
        assert_eq!(line_state.content(), b"bc");
        assert_eq!(line_state.off(), 2);
        assert_eq!(line_state.pad(), 1);
    }

    #[test]
    fn test_backspace_at_start_is_a_no_op_that_redraws() {
        let mut line_state = LineState::try_new(32).unwrap();
        type_text(&mut line_state, "ab");
        line_state.apply_event(EditorEvent::Home, &mut NoHistory);
        let effect = line_state.apply_event(EditorEvent::DeleteBackward, &mut NoHistory);
        assert_eq!(line_state.content(), b"ab");
        assert_eq!(
            effect,
            EditorEffect::Redraw(RedrawInstruction {
                text: b"ab".to_vec(),
                cursor_left: 2,
            })
        );
    }

    #[test]
    fn test_immediate_enter_is_empty_line() {
        let mut line_state = LineState::try_new(32).unwrap();
        let end = run_keys(&mut line_state, &mut NoHistory, b"\r");
        assert_eq!(end, Some(LineEnd::Submitted));
        assert_eq!(line_state.into_line(), "");
    }

    #[test]
    fn test_home_insert_with_small_capacity() {
        let mut line_state = LineState::try_new(8).unwrap();
        let end = run_keys(&mut line_state, &mut NoHistory, b"hello\x1b[1~X\r");
        assert_eq!(end, Some(LineEnd::Submitted));
        assert_eq!(line_state.into_line(), "Xhello");
    }

    #[test]
    fn test_two_backspaces() {
        let mut line_state = LineState::try_new(32).unwrap();
        let end = run_keys(&mut line_state, &mut NoHistory, b"abc\x7f\x7f\r");
        assert_eq!(end, Some(LineEnd::Submitted));
        assert_eq!(line_state.into_line(), "a");
    }

    #[test]
    fn test_submit_resets_cursor() {
        let mut line_state = LineState::try_new(32).unwrap();
        let end = run_keys(&mut line_state, &mut NoHistory, b"ab\x7f\x1b[D\r");
        assert_eq!(end, Some(LineEnd::Submitted));
        assert_eq!(line_state.off(), 0);
        assert_eq!(line_state.pad(), 0);
    }

    #[test]
    fn test_filling_insert_redraws() {
        let mut line_state = LineState::try_new(4).unwrap();
        type_text(&mut line_state, "ab");
        let effect = line_state.apply_event(EditorEvent::InsertChar(b'c'), &mut NoHistory);
        assert_eq!(
            effect,
            EditorEffect::Redraw(RedrawInstruction {
                text: b"abc".to_vec(),
                cursor_left: 0,
            })
        );
        assert_eq!(line_state.len(), 3);
    }

    #[test]
    fn test_full_line_can_still_be_edited_and_submitted() {
        let mut line_state = LineState::try_new(8).unwrap();
        let end = run_keys(&mut line_state, &mut NoHistory, b"abcdefg\x7f\x1b[DX\r");
        assert_eq!(end, Some(LineEnd::Submitted));
        assert_eq!(line_state.into_line(), "abcdeXf");
    }

    #[test]
    fn test_insert_into_full_buffer_ends_the_read() {
        let mut line_state = LineState::try_new(4).unwrap();
        let end = run_keys(&mut line_state, &mut NoHistory, b"abcdef\r");
        assert_eq!(end, Some(LineEnd::Exhausted));
        assert_eq!(line_state.content(), b"abc");
        assert!(line_state.len() < line_state.capacity());
    }

    #[test]
    fn test_capacity_one_ends_on_first_key() {
        let mut line_state = LineState::try_new(1).unwrap();
        let effect = line_state.apply_event(EditorEvent::InsertChar(b'a'), &mut NoHistory);
        assert_eq!(effect, EditorEffect::Finish(LineEnd::Exhausted));
        assert!(line_state.is_empty());
    }

    #[test_case(b"\x03", LineEnd::Interrupted; "ctrl c")]
    #[test_case(b"abc\x03", LineEnd::Interrupted; "ctrl c after text")]
    #[test_case(b"a\x1b[D\x1a", LineEnd::Suspended; "ctrl z")]
    fn test_terminal_keys(bytes: &[u8], expected: LineEnd) {
        let mut line_state = LineState::try_new(32).unwrap();
        assert_eq!(run_keys(&mut line_state, &mut NoHistory, bytes), Some(expected));
    }

    #[test]
    fn test_history_none_keeps_line() {
        let mut line_state = LineState::try_new(32).unwrap();
        let mut history = ScriptedHistory(vec![Some("prev1".into())]);
        let end = run_keys(&mut line_state, &mut history, b"\x1b[A\x1b[A");
        assert_eq!(end, None);
        assert_eq!(line_state.content(), b"prev1");
    }

    #[test]
    fn test_history_none_keeps_cursor() {
        let mut line_state = LineState::try_new(32).unwrap();
        type_text(&mut line_state, "abc");
        line_state.apply_event(EditorEvent::DeleteBackward, &mut NoHistory);
        line_state.apply_event(EditorEvent::MoveLeft, &mut NoHistory);
        line_state.apply_event(EditorEvent::HistoryPrev, &mut NoHistory);
        assert_eq!(line_state.content(), b"ab");
        assert_eq!(line_state.off(), 1);
        assert_eq!(line_state.pad(), 1);
    }

    #[test]
    fn test_history_entry_replaces_line_and_is_truncated() {
        let mut line_state = LineState::try_new(6).unwrap();
        type_text(&mut line_state, "ab");
        line_state.apply_event(EditorEvent::DeleteBackward, &mut NoHistory);
        line_state.apply_event(EditorEvent::Home, &mut NoHistory);

        let mut history = ScriptedHistory(vec![Some("0123456789".into())]);
        line_state.apply_event(EditorEvent::HistoryPrev, &mut history);
        assert_eq!(line_state.content(), b"01234");
        assert_eq!(line_state.off(), 0);
        assert_eq!(line_state.pad(), 0);
    }

    #[test]
    fn test_in_memory_history_round_trip() {
        let mut history = InMemoryHistory::default();
        history.update(Some("first".into()));
        history.update(Some("second".into()));

        let mut line_state = LineState::try_new(32).unwrap();
        type_text(&mut line_state, "dr");
        run_keys(&mut line_state, &mut history, b"\x1b[A\x1b[A");
        assert_eq!(line_state.content(), b"first");
        run_keys(&mut line_state, &mut history, b"\x1b[B");
        assert_eq!(line_state.content(), b"second");
        run_keys(&mut line_state, &mut history, b"\x1b[B");
        assert_eq!(line_state.content(), b"dr");
    }

    #[test]
    fn test_unknown_sequence_redraws() {
        let mut line_state = LineState::try_new(32).unwrap();
        type_text(&mut line_state, "a");
        let effect = line_state.apply_event(EditorEvent::NoOp, &mut NoHistory);
        assert_eq!(
            effect,
            EditorEffect::Redraw(RedrawInstruction {
                text: b"a".to_vec(),
                cursor_left: 0,
            })
        );
    }
}
