// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Byte level constants for the keys the line editor understands, and for the escape
//! sequences it writes back to the terminal.

// Attach sources.
pub mod input_sequences;
pub mod output_sequences;

// Re-export.
pub use input_sequences::*;
pub use output_sequences::*;
