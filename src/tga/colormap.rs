//! Image ID skip and color-map (palette) extraction.

use super::format::TgaFormat;
use super::header::TgaHeader;
use super::reader::Cursor;
use crate::error::TgaError;

/// Palette bytes borrowed from the input.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ColorMap<'a> {
    bytes: &'a [u8],
    entry_size: usize,
}

impl<'a> ColorMap<'a> {
    /// Skip the image ID field, then borrow the color map if the header
    /// declares one.
    pub(crate) fn read(
        cur: &mut Cursor<'a>,
        header: &TgaHeader,
        format: &TgaFormat,
    ) -> Result<Option<Self>, TgaError> {
        cur.skip(usize::from(header.id_length), "image id")?;
        if header.color_map_type == 0 {
            return Ok(None);
        }
        let len = usize::from(header.color_map_length) * format.color_map_entry_size;
        let bytes = cur.take(len, "color map")?;
        Ok(Some(Self {
            bytes,
            entry_size: format.color_map_entry_size,
        }))
    }

    pub(crate) fn entry_size(&self) -> usize {
        self.entry_size
    }

    /// Raw bytes of palette entry `index`.
    ///
    /// `color_map_start` is not subtracted: stored indices address the
    /// palette bytes directly.
    pub(crate) fn entry(&self, index: usize) -> Result<&'a [u8], TgaError> {
        let start = index.saturating_mul(self.entry_size);
        self.bytes
            .get(start..start.saturating_add(self.entry_size))
            .ok_or(TgaError::TruncatedData {
                what: "color map entry",
                offset: start,
                needed: self.entry_size,
                available: self.bytes.len().saturating_sub(start),
            })
    }
}
