// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{Read, Result};

/// Scripted input device. Hands out the scripted bytes one at a time, the way a raw
/// mode terminal does, then reports end of input.
///
/// # Example
///
/// ```
/// use r3bl_rawline::core::test_fixtures::{ByteScript, KEY_ENTER, KEY_LEFT};
///
/// let script = ByteScript::new().text("ab").key(KEY_LEFT).key(KEY_ENTER);
/// assert_eq!(script.remaining(), 6);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteScript {
    bytes: Vec<u8>,
    position: usize,
}

impl ByteScript {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Append typed text, byte by byte.
    #[must_use]
    pub fn text(mut self, text: &str) -> Self {
        self.bytes.extend_from_slice(text.as_bytes());
        self
    }

    /// Append the bytes of a key, eg [`super::KEY_LEFT`].
    #[must_use]
    pub fn key(mut self, key_bytes: &[u8]) -> Self {
        self.bytes.extend_from_slice(key_bytes);
        self
    }

    /// Append the same key `count` times.
    #[must_use]
    pub fn key_times(mut self, key_bytes: &[u8], count: usize) -> Self {
        for _ in 0..count {
            self.bytes.extend_from_slice(key_bytes);
        }
        self
    }

    /// Number of bytes not consumed yet.
    #[must_use]
    pub fn remaining(&self) -> usize { self.bytes.len().saturating_sub(self.position) }
}

impl Read for ByteScript {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let Some(byte) = self.bytes.get(self.position) else {
            return Ok(0);
        };
        let Some(slot) = buf.first_mut() else {
            return Ok(0);
        };
        *slot = *byte;
        self.position += 1;
        Ok(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_fixtures::KEY_UP;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_byte_script_hands_out_one_byte_per_read() {
        let mut script = ByteScript::new().text("a").key(KEY_UP);
        let mut buf = [0_u8; 8];

        assert_eq!(script.read(&mut buf).unwrap(), 1);
        assert_eq!(buf[0], b'a');
        assert_eq!(script.remaining(), 3);

        let mut rest = vec![];
        script.read_to_end(&mut rest).unwrap();
        assert_eq!(rest, b"\x1b[A");
        assert_eq!(script.read(&mut buf).unwrap(), 0);
    }
}
