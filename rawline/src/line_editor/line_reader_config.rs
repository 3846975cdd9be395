// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DEFAULT_LINE_CAPACITY, PROMPT_SEPARATOR};

/// Whether [`crate::LineReader`] switches the terminal into raw mode for each read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalMode {
    /// Save the terminal attributes, apply raw mode, restore when the read ends.
    #[default]
    Raw,
    /// Leave the terminal alone. For piped input and tests.
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineReaderConfig {
    /// Label shown before the separator.
    pub prompt: String,
    /// Declared buffer capacity, including the terminator slot.
    pub capacity: usize,
    pub terminal_mode: TerminalMode,
}

impl Default for LineReaderConfig {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            capacity: DEFAULT_LINE_CAPACITY,
            terminal_mode: TerminalMode::default(),
        }
    }
}

impl LineReaderConfig {
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_terminal_mode(mut self, terminal_mode: TerminalMode) -> Self {
        self.terminal_mode = terminal_mode;
        self
    }

    /// The prompt as it appears on screen, eg: `"name > "`.
    #[must_use]
    pub fn rendered_prompt(&self) -> String { format!("{}{PROMPT_SEPARATOR}", self.prompt) }
}
