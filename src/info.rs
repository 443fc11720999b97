use crate::error::TgaError;
use crate::tga::{ImageType, Origin};

/// Header-level facts about a TGA file, read without decoding pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u16,
    pub height: u16,
    pub image_type: ImageType,
    /// Bits per stored pixel.
    pub pixel_depth: u8,
    /// Alpha bits per pixel from the image descriptor.
    pub alpha_depth: u8,
    pub origin: Origin,
    pub has_color_map: bool,
    pub is_indexed: bool,
    pub is_grey: bool,
    pub is_rle: bool,
}

impl ImageInfo {
    /// Read the 18-byte header. Only fails if the header itself is truncated.
    pub fn from_bytes(data: &[u8]) -> Result<Self, TgaError> {
        let (header, format) = crate::tga::read_info(data)?;
        Ok(Self {
            width: header.width,
            height: header.height,
            image_type: header.kind(),
            pixel_depth: header.pixel_depth,
            alpha_depth: format.alpha_depth,
            origin: header.origin(),
            has_color_map: header.color_map_type != 0,
            is_indexed: format.is_indexed,
            is_grey: format.is_grey,
            is_rle: format.is_rle,
        })
    }
}
