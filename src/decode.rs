use alloc::vec::Vec;

use enough::Stop;

use crate::error::TgaError;
use crate::limits::Limits;
use crate::tga::Origin;

/// Decoded image: RGBA8 pixels in file storage order.
#[derive(Clone, Debug)]
pub struct DecodeOutput {
    pixels: Vec<u8>,
    pub width: u16,
    pub height: u16,
    /// Corner of the first stored row and column, as declared by the file.
    /// Pixels are not reordered to match it.
    pub origin: Origin,
}

impl DecodeOutput {
    pub(crate) fn new(pixels: Vec<u8>, width: u16, height: u16, origin: Origin) -> Self {
        Self {
            pixels,
            width,
            height,
            origin,
        }
    }

    /// RGBA8 pixel data, `width * height * 4` bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Take ownership of the pixel data.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Reinterpret pixel data as a typed RGBA slice.
    #[cfg(feature = "rgb")]
    pub fn as_rgba(&self) -> &[rgb::RGBA8] {
        use rgb::FromSlice as _;
        self.pixels.as_rgba()
    }

    /// Zero-copy view as an [`imgref::ImgRef`] of RGBA pixels.
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, rgb::RGBA8> {
        imgref::ImgRef::new(
            self.as_rgba(),
            usize::from(self.width),
            usize::from(self.height),
        )
    }

    /// Copy into an [`imgref::ImgVec`] of RGBA pixels.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> imgref::ImgVec<rgb::RGBA8> {
        imgref::ImgVec::new(
            self.as_rgba().to_vec(),
            usize::from(self.width),
            usize::from(self.height),
        )
    }
}

/// Builder for a decode with optional resource limits.
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Decode to RGBA8. `stop` is polled between stages and periodically
    /// while expanding and translating pixels.
    pub fn decode(self, stop: impl Stop) -> Result<DecodeOutput, TgaError> {
        crate::tga::decode(self.data, self.limits, &stop)
    }
}
