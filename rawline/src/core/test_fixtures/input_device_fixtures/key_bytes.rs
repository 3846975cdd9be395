// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! What a VT100 style terminal in raw mode sends for each key the line editor knows.

use crate::{ANSI_CSI_BRACKET, ANSI_ESC, ANSI_FUNCTION_KEY_TERMINATOR, ARROW_DOWN_FINAL,
            ARROW_LEFT_FINAL, ARROW_RIGHT_FINAL, ARROW_UP_FINAL, BACKSPACE_DEL,
            CARRIAGE_RETURN, CTRL_C, CTRL_Z, SPECIAL_DELETE_CODE, SPECIAL_END_CODE,
            SPECIAL_HOME_CODE};

pub const KEY_ENTER: &[u8] = &[CARRIAGE_RETURN];
pub const KEY_BACKSPACE: &[u8] = &[BACKSPACE_DEL];
pub const KEY_CTRL_C: &[u8] = &[CTRL_C];
pub const KEY_CTRL_Z: &[u8] = &[CTRL_Z];
pub const KEY_UP: &[u8] = &[ANSI_ESC, ANSI_CSI_BRACKET, ARROW_UP_FINAL];
pub const KEY_DOWN: &[u8] = &[ANSI_ESC, ANSI_CSI_BRACKET, ARROW_DOWN_FINAL];
pub const KEY_RIGHT: &[u8] = &[ANSI_ESC, ANSI_CSI_BRACKET, ARROW_RIGHT_FINAL];
pub const KEY_LEFT: &[u8] = &[ANSI_ESC, ANSI_CSI_BRACKET, ARROW_LEFT_FINAL];
pub const KEY_HOME: &[u8] = &[
    ANSI_ESC,
    ANSI_CSI_BRACKET,
    SPECIAL_HOME_CODE,
    ANSI_FUNCTION_KEY_TERMINATOR,
];
pub const KEY_DELETE: &[u8] = &[
    ANSI_ESC,
    ANSI_CSI_BRACKET,
    SPECIAL_DELETE_CODE,
    ANSI_FUNCTION_KEY_TERMINATOR,
];
pub const KEY_END: &[u8] = &[
    ANSI_ESC,
    ANSI_CSI_BRACKET,
    SPECIAL_END_CODE,
    ANSI_FUNCTION_KEY_TERMINATOR,
];
