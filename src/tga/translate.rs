//! Raw TGA pixels to RGBA8.

use enough::Stop;

use super::colormap::ColorMap;
use super::format::TgaFormat;
use super::reader::read_le;
use crate::error::TgaError;

const OPAQUE: u8 = 255;

/// Expand a 5-bit channel to 8 bits, replicating the high bits.
#[inline]
fn expand5(v: u16) -> u8 {
    let v = (v & 0x1F) as u8;
    (v << 3) | (v >> 2)
}

/// Alpha from the attribute byte, only when the descriptor declares 8 alpha bits.
#[inline]
fn alpha(byte: u8, alpha_depth: u8) -> u8 {
    if alpha_depth == 8 { byte } else { OPAQUE }
}

/// True-color entry (2, 3 or 4 bytes) to RGBA. Shared by direct pixels and
/// palette entries.
fn true_color(entry: &[u8], alpha_depth: u8) -> Option<[u8; 4]> {
    match *entry {
        [lo, hi] => {
            let word = u16::from_le_bytes([lo, hi]);
            Some([
                expand5(word >> 10),
                expand5(word >> 5),
                expand5(word),
                OPAQUE,
            ])
        }
        [b, g, r] => Some([r, g, b, OPAQUE]),
        [b, g, r, a] => Some([r, g, b, alpha(a, alpha_depth)]),
        _ => None,
    }
}

fn palette_lookup(
    map: Option<&ColorMap<'_>>,
    index: usize,
    alpha_depth: u8,
) -> Result<[u8; 4], TgaError> {
    let map = map.ok_or(TgaError::TruncatedData {
        what: "color map (none declared)",
        offset: 0,
        needed: index.saturating_add(1),
        available: 0,
    })?;
    let size = map.entry_size();
    if !(2..=4).contains(&size) {
        return Err(TgaError::UnsupportedColorMapEntry(size));
    }
    let entry = map.entry(index)?;
    true_color(entry, alpha_depth).ok_or(TgaError::UnsupportedColorMapEntry(size))
}

/// Resolve one raw pixel entry to RGBA.
pub(crate) fn resolve_pixel(
    entry: &[u8],
    format: &TgaFormat,
    map: Option<&ColorMap<'_>>,
) -> Result<[u8; 4], TgaError> {
    let unsupported = || TgaError::UnsupportedPixelFormat {
        pixel_size: entry.len(),
        indexed: format.is_indexed,
        grey: format.is_grey,
    };
    match (entry.len(), format.is_indexed, format.is_grey) {
        (1 | 2, true, _) => palette_lookup(map, read_le(entry) as usize, format.alpha_depth),
        (1, false, true) => {
            let g = entry[0];
            Ok([g, g, g, OPAQUE])
        }
        (2, false, true) => {
            let g = entry[0];
            Ok([g, g, g, alpha(entry[1], format.alpha_depth)])
        }
        (1, false, false) => Err(unsupported()),
        (2..=4, _, _) => true_color(entry, format.alpha_depth).ok_or_else(unsupported),
        _ => Err(unsupported()),
    }
}

/// Translate every pixel of `raw` into `out` (4 bytes per pixel).
///
/// `raw` holds `pixel_count * pixel_size` bytes and `out` has room for
/// `pixel_count * 4`.
pub(crate) fn translate(
    raw: &[u8],
    format: &TgaFormat,
    map: Option<&ColorMap<'_>>,
    row_len: usize,
    out: &mut [u8],
    stop: &dyn Stop,
) -> Result<(), TgaError> {
    if format.pixel_count == 0 {
        return Ok(());
    }
    // pixel_count > 0 implies row_len (the width) > 0
    let pixel_size = format.pixel_size;
    if pixel_size == 0 || pixel_size > 4 {
        return Err(TgaError::UnsupportedPixelFormat {
            pixel_size,
            indexed: format.is_indexed,
            grey: format.is_grey,
        });
    }

    let rows = raw
        .chunks(row_len * pixel_size)
        .zip(out.chunks_mut(row_len * 4));
    for (row_idx, (src_row, dst_row)) in rows.enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        for (entry, px) in src_row
            .chunks_exact(pixel_size)
            .zip(dst_row.chunks_exact_mut(4))
        {
            px.copy_from_slice(&resolve_pixel(entry, format, map)?);
        }
    }
    Ok(())
}
