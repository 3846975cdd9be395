// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Library half of the `rawline` binary: command line arguments and the read loop.
//!
//! Keeping the loop here (rather than in `main`) means it can be driven by scripted
//! input in tests, with no terminal involved.

#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod clap_config;
pub mod session;

// Re-export.
pub use clap_config::*;
pub use session::*;
