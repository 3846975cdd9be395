// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod byte_script;
pub mod key_bytes;

// Re-export.
pub use byte_script::*;
pub use key_bytes::*;
