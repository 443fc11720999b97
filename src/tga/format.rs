//! Decoding parameters derived from the header.

use super::header::TgaHeader;

const GREY_BITS: u8 = 0b011;

/// Read-only decoding parameters, computed once per decode.
///
/// Classification only looks at bits; nonsense combinations are caught
/// later by the pixel translator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct TgaFormat {
    pub is_indexed: bool,
    pub is_grey: bool,
    pub is_rle: bool,
    /// Bytes per stored pixel.
    pub pixel_size: usize,
    pub pixel_count: usize,
    /// Bytes per color-map entry.
    pub color_map_entry_size: usize,
    /// Alpha bits per pixel (descriptor bits 0-3).
    pub alpha_depth: u8,
}

impl TgaFormat {
    pub(crate) fn classify(header: &TgaHeader) -> Self {
        let image_type = header.image_type;
        Self {
            is_indexed: matches!(image_type, 1 | 9),
            is_grey: image_type & GREY_BITS == GREY_BITS,
            is_rle: image_type >> 3 != 0,
            pixel_size: usize::from(header.pixel_depth / 8),
            pixel_count: usize::from(header.width) * usize::from(header.height),
            color_map_entry_size: usize::from(header.color_map_entry_depth / 8),
            alpha_depth: header.descriptor & 0b1111,
        }
    }
}
