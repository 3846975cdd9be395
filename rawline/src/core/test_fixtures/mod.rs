// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Fixtures to drive the line reader without a real terminal: a scripted input device,
//! a shared in-memory output device, and the byte sequences real terminals send for the
//! keys the editor understands.

// Attach sources.
pub mod input_device_fixtures;
pub mod output_device_fixtures;

// Re-export.
pub use input_device_fixtures::*;
pub use output_device_fixtures::*;
