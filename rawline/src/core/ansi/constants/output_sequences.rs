// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Sequences written to the terminal while redrawing the line.

/// Moves the cursor to column 0 without advancing the line, so the line can be
/// rewritten in place.
pub const CR_RESET_COLUMN: &str = "\r";

/// Ends the line once the read is over.
pub const NEW_LINE: &str = "\n";

/// CSI prefix: `ESC [`.
pub const CSI_START: &str = "\x1b[";

/// CUB final byte: move the cursor left by the preceding count.
pub const CUB_CURSOR_BACKWARD: char = 'D';

/// Separator rendered between the prompt label and the editable line.
pub const PROMPT_SEPARATOR: &str = " > ";

/// Builds `ESC [ <count> D`.
///
/// ```
/// use r3bl_rawline::cursor_backward;
///
/// assert_eq!(cursor_backward(3), "\x1b[3D");
/// ```
#[must_use]
pub fn cursor_backward(count: usize) -> String {
    format!("{CSI_START}{count}{CUB_CURSOR_BACKWARD}")
}
