//! Forward-only byte cursor over the TGA input.

use crate::error::TgaError;

/// Read position into the source buffer, owned by a single decode call.
///
/// Every read advances the position; there is no seek or rewind.
pub(crate) struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Borrow the next `n` bytes and advance past them.
    pub(crate) fn take(&mut self, n: usize, what: &'static str) -> Result<&'a [u8], TgaError> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|&end| end <= self.data.len())
            .ok_or(TgaError::TruncatedData {
                what,
                offset: self.pos,
                needed: n,
                available: self.remaining(),
            })?;
        let bytes = &self.data[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    pub(crate) fn skip(&mut self, n: usize, what: &'static str) -> Result<(), TgaError> {
        self.take(n, what).map(|_| ())
    }

    pub(crate) fn read_u8(&mut self, what: &'static str) -> Result<u8, TgaError> {
        Ok(self.take(1, what)?[0])
    }

    pub(crate) fn read_u16_le(&mut self, what: &'static str) -> Result<u16, TgaError> {
        let bytes = self.take(2, what)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }
}

/// Little-endian value of up to four bytes: `Σ bytes[i] << (8 * i)`.
pub(crate) fn read_le(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .take(4)
        .enumerate()
        .fold(0u32, |acc, (i, &b)| acc | (u32::from(b) << (8 * i)))
}
