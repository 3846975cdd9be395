// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::core::LineState;
use crate::{CR_RESET_COLUMN, cursor_backward, ok};
use std::io::{self, Write};

/// What to write to the terminal after an edit.
///
/// There is no diffing: the whole line is rewritten from column 0 every time, followed
/// by `pad` spaces to blank out cells freed up by deletions, then the cursor is moved
/// back into place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedrawInstruction {
    /// Content followed by the pad spaces.
    pub text: Vec<u8>,
    /// How many columns to move left after writing `text` (`off + pad`).
    pub cursor_left: usize,
}

impl RedrawInstruction {
    /// Write `\r`, the prompt, the text, and (if needed) `ESC [ n D`, then flush.
    ///
    /// # Errors
    ///
    /// Returns an error if writing or flushing the terminal fails.
    pub fn render_and_flush(&self, prompt: &str, term: &mut dyn Write) -> io::Result<()> {
        term.write_all(CR_RESET_COLUMN.as_bytes())?;
        term.write_all(prompt.as_bytes())?;
        term.write_all(&self.text)?;
        if self.cursor_left > 0 {
            term.write_all(cursor_backward(self.cursor_left).as_bytes())?;
        }
        term.flush()?;

        ok!()
    }
}

impl LineState {
    #[must_use]
    pub fn redraw_instruction(&self) -> RedrawInstruction {
        let content = self.buffer.as_bytes();
        let mut text = Vec::with_capacity(content.len() + self.pad);
        text.extend_from_slice(content);
        text.resize(content.len() + self.pad, b' ');

        RedrawInstruction {
            text,
            cursor_left: self.off + self.pad,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EditorEvent, NoHistory, core::test_fixtures::StdoutMock};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_redraw_pads_and_moves_cursor_back() {
        let mut line_state = LineState::try_new(16).unwrap();
        for byte in b"abcd" {
            line_state.apply_event(EditorEvent::InsertChar(*byte), &mut NoHistory);
        }
        line_state.apply_event(EditorEvent::MoveLeft, &mut NoHistory);
        line_state.apply_event(EditorEvent::DeleteBackward, &mut NoHistory);

        let instruction = line_state.redraw_instruction();
        assert_eq!(instruction.text, b"abd ".to_vec());
        assert_eq!(instruction.cursor_left, 2);

        let mut stdout_mock = StdoutMock::new();
        instruction.render_and_flush("> ", &mut stdout_mock).unwrap();
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "\r> abd \x1b[2D");
    }

    #[test]
    fn test_no_cursor_move_when_at_end() {
        let instruction = RedrawInstruction {
            text: b"hi".to_vec(),
            cursor_left: 0,
        };
        let mut stdout_mock = StdoutMock::new();
        instruction.render_and_flush("p > ", &mut stdout_mock).unwrap();
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "\rp > hi");
    }
}
