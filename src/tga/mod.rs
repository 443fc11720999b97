//! TGA (Truevision Targa) decoder (internal).
//!
//! Pipeline: header, format classification, image ID skip and color map,
//! pixel data (RLE-expanded if needed), then per-pixel translation to RGBA8.
//! Pixels come out in storage order; the origin bits are reported, not applied.
//!
//! Use top-level [`crate::decode`] or [`crate::DecodeRequest`].

mod colormap;
mod format;
mod header;
mod reader;
mod rle;
mod translate;

pub use header::{HEADER_LEN, ImageType, Origin, TgaHeader};
pub(crate) use format::TgaFormat;

use alloc::vec;
use enough::Stop;

use crate::decode::DecodeOutput;
use crate::error::TgaError;
use crate::limits::Limits;
use colormap::ColorMap;
use reader::Cursor;

/// Output bytes per pixel (RGBA8).
const OUT_BPP: usize = 4;

/// Parse the header and derive the decoding parameters, without touching
/// anything past byte 18.
pub(crate) fn read_info(data: &[u8]) -> Result<(TgaHeader, TgaFormat), TgaError> {
    let header = TgaHeader::parse(data)?;
    let format = TgaFormat::classify(&header);
    Ok((header, format))
}

/// Decode a complete TGA file to RGBA8.
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<DecodeOutput, TgaError> {
    let mut cur = Cursor::new(data);
    let header = TgaHeader::read(&mut cur)?;
    let format = TgaFormat::classify(&header);
    log::trace!("TGA format: {format:?}");

    let too_large = || TgaError::DimensionsTooLarge {
        width: u32::from(header.width),
        height: u32::from(header.height),
    };
    let raw_len = format
        .pixel_count
        .checked_mul(format.pixel_size)
        .ok_or_else(too_large)?;
    let out_len = format
        .pixel_count
        .checked_mul(OUT_BPP)
        .ok_or_else(too_large)?;

    if let Some(limits) = limits {
        limits.check_dimensions(header.width, header.height)?;
        let rle_buf = if format.is_rle { raw_len } else { 0 };
        limits.check_memory(out_len.saturating_add(rle_buf))?;
    }

    let color_map = ColorMap::read(&mut cur, &header, &format)?;
    stop.check()?;

    let raw = rle::read_pixel_data(&mut cur, raw_len, format.pixel_size, format.is_rle, stop)?;
    log::trace!(
        "TGA pixel data: {} bytes ({}), ends at offset {}",
        raw.len(),
        if format.is_rle { "expanded" } else { "borrowed" },
        cur.position()
    );

    let mut pixels = vec![0u8; out_len];
    translate::translate(
        &raw,
        &format,
        color_map.as_ref(),
        usize::from(header.width),
        &mut pixels,
        stop,
    )?;

    Ok(DecodeOutput::new(
        pixels,
        header.width,
        header.height,
        header.origin(),
    ))
}
