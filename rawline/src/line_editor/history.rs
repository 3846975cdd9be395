// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Optional history capability for the line editor.
//!
//! The editor only knows about the [`HistoryProvider`] trait. Up and down arrows ask
//! the provider for an older or newer entry; `None` means there is nothing in that
//! direction and the line is left alone.

use std::collections::VecDeque;

use strum_macros::AsRefStr;

pub const HISTORY_SIZE_MAX: usize = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum HistoryDirection {
    /// Up arrow.
    Older,
    /// Down arrow.
    Newer,
}

pub trait HistoryProvider {
    /// Return the entry to show when moving in `direction`, or `None` to leave the
    /// current line untouched.
    ///
    /// `current` is the line as it is right now (an implementation may stash it and
    /// give it back when navigating past the newest entry). `max_len` is the capacity
    /// of the line buffer; the editor truncates anything that doesn't fit.
    fn navigate(
        &mut self,
        direction: HistoryDirection,
        current: &str,
        max_len: usize,
    ) -> Option<String>;
}

/// Provider that never has anything to offer.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHistory;

impl HistoryProvider for NoHistory {
    fn navigate(&mut self, _: HistoryDirection, _: &str, _: usize) -> Option<String> {
        None
    }
}

/// Session only history. Entries are stored newest first and capped at `max_size`.
#[derive(Debug, Clone)]
pub struct InMemoryHistory {
    pub entries: VecDeque<String>,
    pub max_size: usize,
    current_position: Option<usize>,
    /// The line that was being edited before navigation started.
    draft: Option<String>,
}

impl Default for InMemoryHistory {
    fn default() -> Self { Self::new(HISTORY_SIZE_MAX) }
}

impl InMemoryHistory {
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: VecDeque::default(),
            max_size,
            current_position: None,
            draft: None,
        }
    }

    /// Record a submitted line. Navigation always starts over from the newest entry.
    pub fn update(&mut self, maybe_line: Option<String>) {
        self.current_position = None;
        self.draft = None;

        if let Some(line) = maybe_line {
            // Don't add entry if last entry was same, or line was empty.
            if self.entries.front() == Some(&line) || line.is_empty() {
                return;
            }
            self.entries.push_front(line);

            if self.entries.len() > self.max_size {
                self.entries.pop_back();
            }
        }
    }

    fn older(&mut self, current: &str) -> Option<&str> {
        match self.current_position {
            Some(index) => {
                let next_index = index.checked_add(1)?;
                let entry = self.entries.get(next_index)?;
                self.current_position = Some(next_index);
                Some(entry)
            }
            None => {
                let entry = self.entries.front()?;
                self.draft = Some(current.to_owned());
                self.current_position = Some(0);
                Some(entry)
            }
        }
    }

    fn newer(&mut self) -> Option<String> {
        let index = self.current_position?;
        match index.checked_sub(1) {
            Some(prev_index) => {
                self.current_position = Some(prev_index);
                self.entries.get(prev_index).cloned()
            }
            None => {
                self.current_position = None;
                Some(self.draft.take().unwrap_or_default())
            }
        }
    }
}

impl HistoryProvider for InMemoryHistory {
    fn navigate(
        &mut self,
        direction: HistoryDirection,
        current: &str,
        max_len: usize,
    ) -> Option<String> {
        let maybe_entry = match direction {
            HistoryDirection::Older => self.older(current).map(str::to_owned),
            HistoryDirection::Newer => self.newer(),
        };
        maybe_entry.map(|entry| truncate_at_char_boundary(entry, max_len.saturating_sub(1)))
    }
}

/// Keep at most `max_bytes` bytes of `text`, without splitting a multi byte character.
fn truncate_at_char_boundary(mut text: String, max_bytes: usize) -> String {
    if text.len() > max_bytes {
        let mut cut = max_bytes;
        while !text.is_char_boundary(cut) {
            cut -= 1;
        }
        text.truncate(cut);
    }
    text
}
