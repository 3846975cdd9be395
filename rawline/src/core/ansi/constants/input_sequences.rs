// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Raw input byte constants.
//!
//! In raw mode the terminal delivers keys as plain bytes, control codes, or escape
//! sequences. The line editor only understands a small subset of them:
//!
//! | Key         | Bytes             |
//! |-------------|-------------------|
//! | Ctrl+C      | `0x03`            |
//! | Ctrl+Z      | `0x1A`            |
//! | Enter       | `0x0D`            |
//! | Backspace   | `0x7F`            |
//! | Up          | `ESC [ A`         |
//! | Down        | `ESC [ B`         |
//! | Right       | `ESC [ C`         |
//! | Left        | `ESC [ D`         |
//! | Home        | `ESC [ 1 ~`       |
//! | Delete      | `ESC [ 3 ~`       |
//! | End         | `ESC [ 4 ~`       |
//!
//! The `~` terminator of the `1`/`3`/`4` group is never inspected, any byte in that
//! position is accepted.

// ==================== Control Codes ====================

/// ETX, sent by Ctrl+C.
pub const CTRL_C: u8 = 0x03;

/// SUB, sent by Ctrl+Z.
pub const CTRL_Z: u8 = 0x1A;

/// Carriage return, sent by Enter in raw mode (no `ICRNL` translation).
pub const CARRIAGE_RETURN: u8 = 0x0D;

/// Line feed. Only used to stop draining input that is not coming from a raw terminal.
pub const LINE_FEED: u8 = 0x0A;

/// DEL, sent by Backspace on most terminals.
pub const BACKSPACE_DEL: u8 = 0x7F;

// ==================== ANSI Sequence Components ====================

/// ESC byte (27 in decimal, 0x1B in hex)
pub const ANSI_ESC: u8 = 0x1B;

/// CSI bracket byte: `[` (91 in decimal, 0x5B in hex)
pub const ANSI_CSI_BRACKET: u8 = 0x5B;

/// Function key terminator: `~` (126 in decimal, 0x7E in hex)
pub const ANSI_FUNCTION_KEY_TERMINATOR: u8 = b'~';

// ==================== Arrow Keys (CSI A/B/C/D) ====================

/// CSI A: Up arrow key final byte
pub const ARROW_UP_FINAL: u8 = b'A';

/// CSI B: Down arrow key final byte
pub const ARROW_DOWN_FINAL: u8 = b'B';

/// CSI C: Right arrow key final byte
pub const ARROW_RIGHT_FINAL: u8 = b'C';

/// CSI D: Left arrow key final byte
pub const ARROW_LEFT_FINAL: u8 = b'D';

// ==================== Special Keys (CSI n~) ====================

/// CSI 1~: Home key code.
pub const SPECIAL_HOME_CODE: u8 = b'1';

/// CSI 3~: Delete key code.
pub const SPECIAL_DELETE_CODE: u8 = b'3';

/// CSI 4~: End key code.
pub const SPECIAL_END_CODE: u8 = b'4';
