//! Pixel data extraction, with TGA run-length expansion.

use alloc::borrow::Cow;
use alloc::vec;

use enough::Stop;

use super::reader::Cursor;
use crate::error::TgaError;

const RUN_FLAG: u8 = 0x80;
const COUNT_MASK: u8 = 0x7F;
/// How many packets to expand between stop checks.
const PACKETS_PER_STOP_CHECK: usize = 4096;

/// Read `len` bytes of per-pixel data, `pixel_size` bytes per pixel.
///
/// Uncompressed data is borrowed from the input; RLE data is expanded
/// into a fresh buffer, allocated only once the remaining input could
/// possibly expand to `len` bytes.
pub(crate) fn read_pixel_data<'a>(
    cur: &mut Cursor<'a>,
    len: usize,
    pixel_size: usize,
    is_rle: bool,
    stop: &dyn Stop,
) -> Result<Cow<'a, [u8]>, TgaError> {
    if !is_rle {
        return cur.take(len, "pixel data").map(Cow::Borrowed);
    }
    let max_len = max_expanded_len(cur.remaining(), pixel_size);
    if max_len < len {
        return Err(TgaError::TruncatedData {
            what: "RLE pixel data",
            offset: cur.position(),
            needed: len,
            available: max_len,
        });
    }
    let mut out = vec![0u8; len];
    expand_rle(cur, &mut out, pixel_size, stop)?;
    Ok(Cow::Owned(out))
}

/// Most bytes `remaining` input bytes can expand to: every packet costs at
/// least a header byte plus one pixel and yields at most 128 pixels.
fn max_expanded_len(remaining: usize, pixel_size: usize) -> usize {
    (remaining / (1 + pixel_size))
        .saturating_mul(usize::from(COUNT_MASK) + 1)
        .saturating_mul(pixel_size)
}

/// Expand RLE packets from `cur` until `out` is full.
///
/// A packet running past the end of `out` is clamped: its source bytes
/// are consumed, the excess is dropped.
pub(crate) fn expand_rle(
    cur: &mut Cursor<'_>,
    out: &mut [u8],
    pixel_size: usize,
    stop: &dyn Stop,
) -> Result<(), TgaError> {
    let mut pos = 0;
    let mut packets = 0usize;

    while pos < out.len() {
        if packets % PACKETS_PER_STOP_CHECK == 0 {
            stop.check()?;
        }
        packets += 1;

        let head = cur.read_u8("RLE packet header")?;
        let count = usize::from(head & COUNT_MASK) + 1;
        let span = count * pixel_size;
        let room = out.len() - pos;
        if span > room {
            log::warn!(
                "RLE packet of {count} pixels at offset {} overruns output by {} bytes, clamping",
                cur.position() - 1,
                span - room
            );
        }
        let dest = &mut out[pos..pos + span.min(room)];

        if head & RUN_FLAG != 0 {
            let pixel = cur.take(pixel_size, "RLE run pixel")?;
            if pixel_size == 1 {
                dest.fill(pixel[0]);
            } else {
                // The clamped tail may end mid-pixel.
                for (d, s) in dest.iter_mut().zip(pixel.iter().cycle()) {
                    *d = *s;
                }
            }
        } else {
            let literal = cur.take(span, "RLE raw packet")?;
            dest.copy_from_slice(&literal[..dest.len()]);
        }
        pos += dest.len();
    }

    Ok(())
}
