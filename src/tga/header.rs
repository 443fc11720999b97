//! The fixed 18-byte TGA file header.

use super::reader::Cursor;
use crate::error::TgaError;

/// Size of the fixed header in bytes.
pub const HEADER_LEN: usize = 18;

/// Image type code from header byte 2.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageType {
    /// 0: no image data.
    NoData,
    /// 1: uncompressed, color-mapped.
    ColorMapped,
    /// 2: uncompressed, true-color.
    TrueColor,
    /// 3: uncompressed, greyscale.
    Grey,
    /// 9: RLE, color-mapped.
    RleColorMapped,
    /// 10: RLE, true-color.
    RleTrueColor,
    /// 11: RLE, greyscale.
    RleGrey,
    /// Any other code. Decoding still follows the code's bits.
    Unknown(u8),
}

impl ImageType {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::NoData,
            1 => Self::ColorMapped,
            2 => Self::TrueColor,
            3 => Self::Grey,
            9 => Self::RleColorMapped,
            10 => Self::RleTrueColor,
            11 => Self::RleGrey,
            other => Self::Unknown(other),
        }
    }
}

/// Corner of the screen holding the first stored pixel (descriptor bits 4-5).
///
/// Decoding reports this but never reorders pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Origin {
    BottomLeft,
    BottomRight,
    TopLeft,
    TopRight,
}

impl Origin {
    fn from_descriptor(descriptor: u8) -> Self {
        match (descriptor >> 4) & 0b11 {
            0b00 => Self::BottomLeft,
            0b01 => Self::BottomRight,
            0b10 => Self::TopLeft,
            _ => Self::TopRight,
        }
    }
}

/// Raw header fields, read once and never modified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TgaHeader {
    pub id_length: u8,
    pub color_map_type: u8,
    pub image_type: u8,
    pub color_map_start: u16,
    pub color_map_length: u16,
    /// Bits per color-map entry. 15 is stored as 16.
    pub color_map_entry_depth: u8,
    pub x_origin: u16,
    pub y_origin: u16,
    pub width: u16,
    pub height: u16,
    pub pixel_depth: u8,
    pub descriptor: u8,
}

impl TgaHeader {
    /// Parse the header from the start of the cursor, leaving it at byte 18.
    pub(crate) fn read(cur: &mut Cursor<'_>) -> Result<Self, TgaError> {
        let id_length = cur.read_u8("id length")?;
        let color_map_type = cur.read_u8("color map type")?;
        let image_type = cur.read_u8("image type")?;
        let color_map_start = cur.read_u16_le("color map start")?;
        let color_map_length = cur.read_u16_le("color map length")?;
        let color_map_entry_depth = match cur.read_u8("color map entry depth")? {
            // 15- and 16-bit entries both occupy two bytes
            15 => 16,
            depth => depth,
        };
        let x_origin = cur.read_u16_le("x origin")?;
        let y_origin = cur.read_u16_le("y origin")?;
        let width = cur.read_u16_le("width")?;
        let height = cur.read_u16_le("height")?;
        let pixel_depth = cur.read_u8("pixel depth")?;
        let descriptor = cur.read_u8("image descriptor")?;

        log::trace!(
            "TGA header: type {image_type}, {width}x{height}, {pixel_depth} bpp, \
             color map type {color_map_type} ({color_map_length} x {color_map_entry_depth} bits), \
             descriptor {descriptor:#04x}"
        );

        Ok(Self {
            id_length,
            color_map_type,
            image_type,
            color_map_start,
            color_map_length,
            color_map_entry_depth,
            x_origin,
            y_origin,
            width,
            height,
            pixel_depth,
            descriptor,
        })
    }

    /// Parse the header from the first 18 bytes of `data`.
    pub fn parse(data: &[u8]) -> Result<Self, TgaError> {
        Self::read(&mut Cursor::new(data))
    }

    pub fn kind(&self) -> ImageType {
        ImageType::from_code(self.image_type)
    }

    pub fn origin(&self) -> Origin {
        Origin::from_descriptor(self.descriptor)
    }
}
