// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Single line, byte oriented line editor for raw mode terminals.
//!
//! The pieces, bottom up:
//!
//! - [`LineBuffer`]: bounded byte storage for the line.
//! - [`KeyDecoder`]: raw bytes in, [`EditorEvent`]s out.
//! - [`LineState`]: applies one [`EditorEvent`] at a time and says what to redraw.
//! - [`HistoryProvider`]: optional up/down arrow history ([`NoHistory`],
//!   [`InMemoryHistory`]).
//! - [`LineReader`]: the blocking loop that drives all of the above against a real
//!   (or fake) terminal.

// Attach sources.
pub mod editor_event;
pub mod history;
pub mod key_decoder;
pub mod line_buffer;
pub mod line_reader;
pub mod line_reader_config;
pub mod line_state;
pub mod readline_error;

// Re-export.
pub use editor_event::*;
pub use history::*;
pub use key_decoder::*;
pub use line_buffer::*;
pub use line_reader::*;
pub use line_reader_config::*;
pub use line_state::*;
pub use readline_error::*;
