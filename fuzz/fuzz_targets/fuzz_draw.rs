#![no_main]
use libfuzzer_sys::fuzz_target;
use zenraster::{Color, Surface};

fn coord(bytes: &[u8], i: usize) -> i32 {
    let mut b = [0u8; 4];
    if let Some(src) = bytes.get(i * 4..i * 4 + 4) {
        b.copy_from_slice(src);
    }
    // Small values land on the canvas; the top bit of the last byte
    // selects the full i32 range so extreme shapes are covered too.
    if b[3] & 0x80 == 0 {
        i32::from(i16::from_le_bytes([b[0], b[1]])) / 64
    } else {
        i32::from_le_bytes(b)
    }
}

fuzz_target!(|data: &[u8]| {
    // Arbitrary shapes must never panic or resize the buffer.
    let Some((&mode, rest)) = data.split_first() else {
        return;
    };
    let Ok(mut img) = Surface::new("fuzz.bmp", 61, 47, mode & 1 == 1) else {
        return;
    };
    let len = img.pixels().len();
    let color = Color::rgba(mode, !mode, mode.rotate_left(3), 200);
    let c = |i| coord(rest, i);

    match mode % 8 {
        0 => img.draw_line(c(0), c(1), c(2), c(3), color),
        1 => img.draw_rect(c(0), c(1), c(2), c(3), color),
        2 => img.fill_rect(c(0), c(1), c(2), c(3), color),
        // Circle cost grows with the radius, keep it to a few canvases.
        3 => img.draw_circle(c(0), c(1), c(2) % 4096, color),
        4 => img.fill_circle(c(0), c(1), c(2) % 4096, color),
        5 => img.draw_triangle((c(0), c(1)), (c(2), c(3)), (c(4), c(5)), color),
        6 => img.fill_triangle((c(0), c(1)), (c(2), c(3)), (c(4), c(5)), color),
        _ => img.set_pixel(c(0), c(1), color),
    }
    assert_eq!(img.pixels().len(), len);
});
