//! Test corpus: generated images in every supported layout, decoded both
//! uncompressed and run-length encoded.

use enough::Unstoppable;
use zentga::*;

fn checkerboard(w: usize, h: usize, bpp: usize) -> Vec<u8> {
    let mut pixels = vec![0u8; w * h * bpp];
    for y in 0..h {
        for x in 0..w {
            let off = (y * w + x) * bpp;
            if (x + y) % 2 == 0 {
                for c in 0..bpp {
                    pixels[off + c] = 200 + (c as u8 * 20);
                }
            } else {
                for c in 0..bpp {
                    pixels[off + c] = 10 + (c as u8 * 30);
                }
            }
        }
    }
    pixels
}

fn noise_pattern(w: usize, h: usize, bpp: usize) -> Vec<u8> {
    let mut pixels = vec![0u8; w * h * bpp];
    let mut state: u32 = 0xDEAD_BEEF;
    for p in pixels.iter_mut() {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        *p = state as u8;
    }
    pixels
}

/// Horizontal stripes: long runs that compress well.
fn stripes(w: usize, h: usize, bpp: usize) -> Vec<u8> {
    let mut pixels = vec![0u8; w * h * bpp];
    for (i, px) in pixels.chunks_exact_mut(bpp).enumerate() {
        let row = i / w;
        px.fill((row * 37) as u8);
    }
    pixels
}

/// Greedy TGA run-length encoder: runs of 2+ identical pixels become run
/// packets, everything else literal packets. Packets may cross rows.
fn rle_encode(raw: &[u8], bpp: usize) -> Vec<u8> {
    let pixels: Vec<&[u8]> = raw.chunks_exact(bpp).collect();
    let mut out = Vec::new();
    let mut i = 0;
    while i < pixels.len() {
        let mut run = 1;
        while i + run < pixels.len() && run < 128 && pixels[i + run] == pixels[i] {
            run += 1;
        }
        if run > 1 {
            out.push(0x80 | (run - 1) as u8);
            out.extend_from_slice(pixels[i]);
            i += run;
            continue;
        }
        let start = i;
        while i < pixels.len()
            && i - start < 128
            && !(i + 1 < pixels.len() && pixels[i + 1] == pixels[i])
        {
            i += 1;
        }
        if i == start {
            i += 1;
        }
        out.push((i - start - 1) as u8);
        for p in &pixels[start..i] {
            out.extend_from_slice(p);
        }
    }
    out
}

fn file(
    image_type: u8,
    w: u16,
    h: u16,
    depth: u8,
    descriptor: u8,
    palette: Option<(&[u8], u8)>,
    body: &[u8],
) -> Vec<u8> {
    let (map_type, map_len, entry_depth, map_bytes) = match palette {
        Some((bytes, entry_depth)) => {
            let entry_size = usize::from(entry_depth.div_ceil(8));
            (1u8, (bytes.len() / entry_size) as u16, entry_depth, bytes)
        }
        None => (0, 0, 0, &[][..]),
    };
    let mut data = vec![0, map_type, image_type, 0, 0];
    data.extend_from_slice(&map_len.to_le_bytes());
    data.push(entry_depth);
    data.extend_from_slice(&[0, 0, 0, 0]);
    data.extend_from_slice(&w.to_le_bytes());
    data.extend_from_slice(&h.to_le_bytes());
    data.push(depth);
    data.push(descriptor);
    data.extend_from_slice(map_bytes);
    data.extend_from_slice(body);
    data
}

/// Decode `raw` stored uncompressed and RLE-compressed; both must agree.
fn decode_both(
    image_type: u8,
    w: u16,
    h: u16,
    depth: u8,
    descriptor: u8,
    palette: Option<(&[u8], u8)>,
    raw: &[u8],
) -> Vec<u8> {
    let bpp = usize::from(depth / 8);
    let plain = file(image_type, w, h, depth, descriptor, palette, raw);
    let packed = file(
        image_type | 0b1000,
        w,
        h,
        depth,
        descriptor,
        palette,
        &rle_encode(raw, bpp),
    );

    let a = decode(&plain, Unstoppable).unwrap();
    let b = decode(&packed, Unstoppable).unwrap();
    assert_eq!((a.width, a.height), (w, h));
    assert_eq!(a.pixels().len(), usize::from(w) * usize::from(h) * 4);
    assert_eq!(a.pixels(), b.pixels(), "RLE and uncompressed decodes differ");
    a.into_pixels()
}

// ── True-color ───────────────────────────────────────────────────────

#[test]
fn bgr24_patterns() {
    for (w, h) in [(1, 1), (8, 6), (33, 7), (200, 3)] {
        for raw in [checkerboard(w, h, 3), noise_pattern(w, h, 3), stripes(w, h, 3)] {
            let out = decode_both(2, w as u16, h as u16, 24, 0, None, &raw);
            for (src, dst) in raw.chunks_exact(3).zip(out.chunks_exact(4)) {
                assert_eq!(dst, [src[2], src[1], src[0], 255]);
            }
        }
    }
}

#[test]
fn bgra32_patterns() {
    let raw = noise_pattern(17, 9, 4);
    let out = decode_both(2, 17, 9, 32, 8, None, &raw);
    for (src, dst) in raw.chunks_exact(4).zip(out.chunks_exact(4)) {
        assert_eq!(dst, [src[2], src[1], src[0], src[3]]);
    }

    // no alpha bits declared: attribute byte ignored
    let out = decode_both(2, 17, 9, 32, 0, None, &raw);
    assert!(out.chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn rgb555_patterns() {
    let raw = stripes(40, 5, 2);
    let out = decode_both(2, 40, 5, 16, 0, None, &raw);
    for (src, dst) in raw.chunks_exact(2).zip(out.chunks_exact(4)) {
        let word = u16::from_le_bytes([src[0], src[1]]);
        let expand = |v: u16| {
            let v = (v & 0x1F) as u8;
            (v << 3) | (v >> 2)
        };
        assert_eq!(dst, [expand(word >> 10), expand(word >> 5), expand(word), 255]);
    }
}

// ── Greyscale ────────────────────────────────────────────────────────

#[test]
fn grey8_patterns() {
    let raw = checkerboard(12, 12, 1);
    let out = decode_both(3, 12, 12, 8, 0, None, &raw);
    for (&g, dst) in raw.iter().zip(out.chunks_exact(4)) {
        assert_eq!(dst, [g, g, g, 255]);
    }
}

#[test]
fn grey16_with_alpha() {
    let raw = noise_pattern(9, 4, 2);
    let out = decode_both(3, 9, 4, 16, 8, None, &raw);
    for (src, dst) in raw.chunks_exact(2).zip(out.chunks_exact(4)) {
        assert_eq!(dst, [src[0], src[0], src[0], src[1]]);
    }
}

// ── Color-mapped ─────────────────────────────────────────────────────

#[test]
fn indexed8_with_bgr_palette() {
    let palette: Vec<u8> = (0..=255u8).flat_map(|i| [i, 255 - i, i / 2]).collect();
    let raw = noise_pattern(23, 11, 1);
    let out = decode_both(1, 23, 11, 8, 0, Some((palette.as_slice(), 24)), &raw);
    for (&idx, dst) in raw.iter().zip(out.chunks_exact(4)) {
        let e = &palette[usize::from(idx) * 3..][..3];
        assert_eq!(dst, [e[2], e[1], e[0], 255]);
    }
}

#[test]
fn indexed8_with_bgra_palette() {
    let palette: Vec<u8> = (0..4u8).flat_map(|i| [i, i + 1, i + 2, 64 * i]).collect();
    let raw: Vec<u8> = (0..30u8).map(|i| i % 4).collect();
    let out = decode_both(1, 6, 5, 8, 8, Some((palette.as_slice(), 32)), &raw);
    for (&idx, dst) in raw.iter().zip(out.chunks_exact(4)) {
        let e = &palette[usize::from(idx) * 4..][..4];
        assert_eq!(dst, [e[2], e[1], e[0], e[3]]);
    }
}

#[test]
fn indexed16_into_large_palette() {
    let entries = 300u16;
    let palette: Vec<u8> = (0..entries).flat_map(|i| (i * 97).to_le_bytes()).collect();
    let raw: Vec<u8> = (0..entries).rev().flat_map(|i| i.to_le_bytes()).collect();
    let out = decode_both(1, 20, 15, 16, 0, Some((palette.as_slice(), 16)), &raw);
    assert_eq!(out.len(), 300 * 4);
    // last pixel is index 0, whose entry is the zero word
    assert_eq!(&out[out.len() - 4..], &[0, 0, 0, 255]);
}
