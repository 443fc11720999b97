//! # zentga
//!
//! Truevision TGA (Targa) image decoder producing RGBA8.
//!
//! ## Supported Images
//!
//! - Image types 1, 2, 3 (color-mapped, true-color, greyscale) and their
//!   run-length encoded variants 9, 10, 11
//! - 8-bit indexed pixels, 16-bit indexed pixels into large palettes
//! - 15/16-bit (5-5-5), 24-bit (BGR) and 32-bit (BGRA) true-color
//! - 8-bit grey, 16-bit grey + alpha
//! - Color maps with 15/16, 24 or 32-bit entries
//!
//! Output is always RGBA8, `width * height * 4` bytes, in the order the
//! pixels are stored in the file. The origin bits of the image descriptor
//! are reported as [`Origin`] but never applied, so bottom-up images
//! (the TGA default) come out bottom row first.
//!
//! ## Non-Goals
//!
//! - Encoding
//! - The TGA 2.0 extension area and footer
//! - Incremental decoding (the whole file must be in memory)
//!
//! ## Usage
//!
//! ```no_run
//! use zentga::{DecodeRequest, ImageInfo, Limits};
//! use enough::Unstoppable;
//!
//! let data: &[u8] = &[]; // your TGA bytes
//!
//! // Header fields without decoding
//! let info = ImageInfo::from_bytes(data)?;
//! println!("{}x{} {:?}", info.width, info.height, info.image_type);
//!
//! // Decode with limits
//! let limits = Limits {
//!     max_pixels: Some(16_000_000),
//!     ..Default::default()
//! };
//! let decoded = DecodeRequest::new(data)
//!     .with_limits(&limits)
//!     .decode(Unstoppable)?;
//! assert_eq!(decoded.pixels().len(), decoded.width as usize * decoded.height as usize * 4);
//! # Ok::<(), zentga::TgaError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod decode;
mod error;
mod info;
mod limits;
mod tga;

pub use decode::{DecodeOutput, DecodeRequest};
pub use enough::{Stop, Unstoppable};
#[cfg(feature = "std")]
pub use error::LoadError;
pub use error::TgaError;
pub use info::ImageInfo;
pub use limits::Limits;
pub use tga::{HEADER_LEN, ImageType, Origin, TgaHeader};

/// Decode TGA bytes to RGBA8 with no resource limits.
pub fn decode(data: &[u8], stop: impl Stop) -> Result<DecodeOutput, TgaError> {
    DecodeRequest::new(data).decode(stop)
}

/// Read a TGA file from disk and decode it.
///
/// I/O failures come back as [`LoadError::Io`], malformed contents as
/// [`LoadError::Decode`].
#[cfg(feature = "std")]
pub fn decode_file(
    path: impl AsRef<std::path::Path>,
    stop: impl Stop,
) -> Result<DecodeOutput, LoadError> {
    let data = std::fs::read(path)?;
    Ok(decode(&data, stop)?)
}
