#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn header(color_map_type: u8, image_type: u8, map_len: u16, entry_depth: u8, w: u16, h: u16, depth: u8, descriptor: u8) -> Vec<u8> {
    let mut h_ = vec![0, color_map_type, image_type, 0, 0];
    h_.extend_from_slice(&map_len.to_le_bytes());
    h_.push(entry_depth);
    h_.extend_from_slice(&[0, 0, 0, 0]);
    h_.extend_from_slice(&w.to_le_bytes());
    h_.extend_from_slice(&h.to_le_bytes());
    h_.push(depth);
    h_.push(descriptor);
    h_
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // True-color 2x2, 24-bit
    let mut tc = header(0, 2, 0, 0, 2, 2, 24, 0);
    tc.extend_from_slice(&[0xff, 0, 0, 0, 0xff, 0, 0, 0, 0xff, 0x80, 0x80, 0x80]);
    fs::write(format!("{dir}/truecolor_2x2.tga"), tc).unwrap();

    // RLE BGRA 4x1, top-left origin, 8 alpha bits
    let mut rle = header(0, 10, 0, 0, 4, 1, 32, 0x28);
    rle.extend_from_slice(&[0x82, 1, 2, 3, 4, 0x00, 5, 6, 7, 8]);
    fs::write(format!("{dir}/rle_bgra_4x1.tga"), rle).unwrap();

    // Indexed 3x1 with a 15-bit palette
    let mut idx = header(1, 1, 2, 15, 3, 1, 8, 0);
    idx.extend_from_slice(&[0x00, 0x7c, 0xe0, 0x03, 0, 1, 0]);
    fs::write(format!("{dir}/indexed_3x1.tga"), idx).unwrap();

    // RLE grey + alpha 2x2
    let mut grey = header(0, 11, 0, 0, 2, 2, 16, 8);
    grey.extend_from_slice(&[0x83, 0x80, 0x40]);
    fs::write(format!("{dir}/rle_grey_alpha_2x2.tga"), grey).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/short_header.bin"), &header(0, 2, 0, 0, 1, 1, 24, 0)[..10]).unwrap();
    fs::write(format!("{dir}/no_pixels.bin"), header(0, 2, 0, 0, 64, 64, 24, 0)).unwrap();
    fs::write(format!("{dir}/rle_overrun.bin"), [header(0, 11, 0, 0, 1, 1, 8, 0), vec![0xff, 0x01]].concat()).unwrap();

    println!("Generated seed corpus in {dir}/");
}
