// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::ReadlineError;
use smallvec::SmallVec;

/// Capacity used when the caller doesn't declare one. Counts the terminator slot, so
/// 255 bytes of content fit.
pub const DEFAULT_LINE_CAPACITY: usize = 256;

/// Lines up to this many bytes are stored inline, without a heap allocation.
pub const LINE_BUFFER_INLINE_SIZE: usize = 128;

pub type LineBytes = SmallVec<[u8; LINE_BUFFER_INLINE_SIZE]>;

/// Bounded byte buffer holding the line being edited.
///
/// The declared `capacity` follows the convention of a C string buffer: it counts one
/// slot for the terminator. So at most `capacity - 1` bytes of content are ever stored,
/// and every mutation is checked against that limit instead of relying on a sentinel.
///
/// ```
/// use r3bl_rawline::LineBuffer;
///
/// let mut buffer = LineBuffer::try_new(4).unwrap();
/// assert!(buffer.insert_at(0, b'b'));
/// assert!(buffer.insert_at(0, b'a'));
/// assert!(buffer.insert_at(2, b'c'));
/// assert!(!buffer.insert_at(3, b'd')); // Full: 3 bytes + terminator slot.
/// assert_eq!(buffer.as_bytes(), b"abc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    bytes: LineBytes,
    capacity: usize,
}

impl LineBuffer {
    /// # Errors
    ///
    /// Returns [`ReadlineError::InvalidCapacity`] if `capacity` is 0, since there is
    /// no room for the terminator slot.
    pub fn try_new(capacity: usize) -> Result<Self, ReadlineError> {
        if capacity == 0 {
            return Err(ReadlineError::InvalidCapacity(capacity));
        }
        Ok(Self {
            bytes: LineBytes::new(),
            capacity,
        })
    }

    /// The declared capacity, including the terminator slot.
    #[must_use]
    pub fn capacity(&self) -> usize { self.capacity }

    /// Maximum number of content bytes.
    #[must_use]
    pub fn max_len(&self) -> usize { self.capacity.saturating_sub(1) }

    #[must_use]
    pub fn len(&self) -> usize { self.bytes.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.bytes.is_empty() }

    #[must_use]
    pub fn is_full(&self) -> bool { self.len() >= self.max_len() }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] { &self.bytes }

    /// Insert `byte` at `index`, shifting everything from `index` onward one position
    /// to the right. Returns `false` (and changes nothing) if the buffer is full or
    /// `index` is past the end.
    pub fn insert_at(&mut self, index: usize, byte: u8) -> bool {
        if self.is_full() || index > self.len() {
            return false;
        }
        self.bytes.insert(index, byte);
        true
    }

    /// Remove the byte at `index`, shifting everything after it one position to the
    /// left. Returns `None` if `index` is out of bounds.
    pub fn remove_at(&mut self, index: usize) -> Option<u8> {
        (index < self.len()).then(|| self.bytes.remove(index))
    }

    /// Replace the whole content, keeping only the first [`Self::max_len()`] bytes.
    /// Returns the new length.
    pub fn replace_with(&mut self, new_content: &[u8]) -> usize {
        let keep = new_content.len().min(self.max_len());
        self.bytes.clear();
        self.bytes.extend_from_slice(&new_content[..keep]);
        keep
    }

    /// Lossy since raw input is arbitrary bytes, not necessarily UTF-8.
    #[must_use]
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_zero_capacity_is_rejected() {
        assert!(matches!(
            LineBuffer::try_new(0),
            Err(ReadlineError::InvalidCapacity(0))
        ));
    }

    #[test]
    fn test_capacity_one_holds_nothing() {
        let mut buffer = LineBuffer::try_new(1).unwrap();
        assert!(buffer.is_full());
        assert!(!buffer.insert_at(0, b'a'));
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_insert_shifts_tail_right() {
        let mut buffer = LineBuffer::try_new(8).unwrap();
        buffer.replace_with(b"hlo");
        assert!(buffer.insert_at(1, b'e'));
        assert!(buffer.insert_at(3, b'l'));
        assert_eq!(buffer.as_bytes(), b"hello");
    }

    #[test]
    fn test_insert_past_end_is_rejected() {
        let mut buffer = LineBuffer::try_new(8).unwrap();
        buffer.replace_with(b"ab");
        assert!(!buffer.insert_at(3, b'x'));
        assert_eq!(buffer.as_bytes(), b"ab");
    }

    #[test]
    fn test_remove_shifts_tail_left() {
        let mut buffer = LineBuffer::try_new(8).unwrap();
        buffer.replace_with(b"hexllo");
        assert_eq!(buffer.remove_at(2), Some(b'x'));
        assert_eq!(buffer.as_bytes(), b"hello");
        assert_eq!(buffer.remove_at(5), None);
    }

    #[test]
    fn test_replace_with_truncates_to_max_len() {
        let mut buffer = LineBuffer::try_new(4).unwrap();
        assert_eq!(buffer.replace_with(b"abcdef"), 3);
        assert_eq!(buffer.as_bytes(), b"abc");
        assert!(buffer.is_full());
    }

    #[test]
    fn test_to_string_lossy_replaces_invalid_utf8() {
        let mut buffer = LineBuffer::try_new(8).unwrap();
        buffer.replace_with(&[b'a', 0xFF, b'b']);
        assert_eq!(buffer.to_string_lossy(), "a\u{FFFD}b");
    }
}
