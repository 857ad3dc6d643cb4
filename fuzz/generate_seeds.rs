#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn bmp(width: u32, height: u32, bpp: u16, pixel_bytes: usize) -> Vec<u8> {
    let mut bmp = vec![0u8; 54 + pixel_bytes];
    let file_size = bmp.len() as u32;
    bmp[0] = b'B'; bmp[1] = b'M';
    bmp[2..6].copy_from_slice(&file_size.to_le_bytes());
    bmp[10..14].copy_from_slice(&54u32.to_le_bytes()); // data offset
    bmp[14..18].copy_from_slice(&40u32.to_le_bytes()); // DIB header size
    bmp[18..22].copy_from_slice(&width.to_le_bytes());
    bmp[22..26].copy_from_slice(&height.to_le_bytes());
    bmp[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    bmp[28..30].copy_from_slice(&bpp.to_le_bytes());
    bmp
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // 1x1 24-bit: 3 bytes BGR + 1 padding
    let mut one = bmp(1, 1, 24, 4);
    one[54] = 0xff;
    fs::write(format!("{dir}/bmp24_1x1.bmp"), one).unwrap();

    // 5x3 24-bit: stride 3 * 5 + 5 % 4 = 16
    fs::write(format!("{dir}/bmp24_5x3.bmp"), bmp(5, 3, 24, 16 * 3)).unwrap();

    // 2x2 32-bit
    let mut rgba = bmp(2, 2, 32, 16);
    rgba[54..70].copy_from_slice(&[0, 0, 255, 255, 0, 255, 0, 128, 255, 0, 0, 64, 9, 9, 9, 0]);
    fs::write(format!("{dir}/bmp32_2x2.bmp"), rgba).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    fs::write(format!("{dir}/bmp8.bin"), bmp(2, 2, 8, 8)).unwrap();
    let mut truncated = bmp(4, 4, 24, 48);
    truncated.truncate(80);
    fs::write(format!("{dir}/truncated.bmp"), truncated).unwrap();

    println!("Generated seed corpus in {dir}/");
}
