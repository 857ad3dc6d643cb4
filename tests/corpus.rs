//! Hand-built and damaged BMP inputs against each strictness level.

use zenraster::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Minimal 24-bit BMP with `pixel_bytes` of pixel data, headers filled
/// in the way another encoder might.
fn handmade_bmp(width: u32, height: u32, bpp: u16, pixel_bytes: usize) -> Vec<u8> {
    let mut bmp = vec![0u8; 54 + pixel_bytes];
    let file_size = bmp.len() as u32;
    bmp[0] = b'B';
    bmp[1] = b'M';
    bmp[2..6].copy_from_slice(&file_size.to_le_bytes());
    bmp[10..14].copy_from_slice(&54u32.to_le_bytes());
    bmp[14..18].copy_from_slice(&40u32.to_le_bytes());
    bmp[18..22].copy_from_slice(&width.to_le_bytes());
    bmp[22..26].copy_from_slice(&height.to_le_bytes());
    bmp[26..28].copy_from_slice(&1u16.to_le_bytes());
    bmp[28..30].copy_from_slice(&bpp.to_le_bytes());
    bmp
}

fn decode_with(data: &[u8], level: BmpPermissiveness) -> Result<Surface, BitmapError> {
    DecodeRequest::new(data).with_permissiveness(level).decode()
}

#[test]
fn one_pixel_24bit() {
    let mut bmp = handmade_bmp(1, 1, 24, 4);
    bmp[54..57].copy_from_slice(&[0xff, 0x00, 0x00]); // BGR: blue
    let img = decode_with(&bmp, BmpPermissiveness::Strict).unwrap();
    assert_eq!(img.get_pixel_color(0, 0), Color::BLUE);
    assert_eq!(img.bit_depth(), BitDepth::Bgr24);
}

#[test]
fn empty_and_short_inputs() {
    for len in [0, 2, 14, 53] {
        let bmp = handmade_bmp(1, 1, 24, 4);
        match Surface::from_bytes(&bmp[..len]) {
            Err(BitmapError::UnexpectedEof) => {}
            other => panic!("len {len}: expected UnexpectedEof, got {other:?}"),
        }
    }
}

#[test]
fn bad_signature() {
    init_logging();
    let mut bmp = handmade_bmp(2, 2, 24, 16);
    bmp[0] = b'X';
    assert!(matches!(
        Surface::from_bytes(&bmp),
        Err(BitmapError::UnrecognizedFormat)
    ));
    assert!(matches!(
        decode_with(&bmp, BmpPermissiveness::Strict),
        Err(BitmapError::UnrecognizedFormat)
    ));

    let img = decode_with(&bmp, BmpPermissiveness::Permissive).unwrap();
    assert_eq!(img.file_header().signature, u16::from_le_bytes([b'X', b'M']));
    assert_eq!(img.to_bytes(), bmp);
}

#[test]
fn unsupported_bit_depths_are_errors() {
    for bpp in [0u16, 1, 4, 8, 16, 48] {
        let bmp = handmade_bmp(2, 2, bpp, 16);
        for level in [
            BmpPermissiveness::Strict,
            BmpPermissiveness::Standard,
            BmpPermissiveness::Permissive,
        ] {
            match decode_with(&bmp, level) {
                Err(BitmapError::UnsupportedVariant(_)) => {}
                other => panic!("{bpp} bits, {level:?}: got {other:?}"),
            }
        }
    }
}

#[test]
fn compressed_data_is_unsupported() {
    let mut bmp = handmade_bmp(2, 2, 24, 16);
    bmp[30..34].copy_from_slice(&1u32.to_le_bytes()); // BI_RLE8
    assert!(matches!(
        Surface::from_bytes(&bmp),
        Err(BitmapError::UnsupportedVariant(_))
    ));
}

#[test]
fn zero_and_negative_dimensions() {
    let bmp = handmade_bmp(0, 2, 24, 0);
    assert!(matches!(Surface::from_bytes(&bmp), Err(BitmapError::InvalidHeader(_))));

    let bmp = handmade_bmp(2, 0, 24, 0);
    assert!(matches!(Surface::from_bytes(&bmp), Err(BitmapError::InvalidHeader(_))));

    let bmp = handmade_bmp(2, (-2i32) as u32, 24, 16);
    assert!(matches!(
        Surface::from_bytes(&bmp),
        Err(BitmapError::UnsupportedVariant(_))
    ));
}

#[test]
fn truncated_pixel_data() {
    init_logging();
    // 3x2 at 24 bits needs (9 + 3) * 2 = 24 bytes; only 20 are present.
    let bmp = handmade_bmp(3, 2, 24, 20);
    assert!(matches!(
        decode_with(&bmp, BmpPermissiveness::Standard),
        Err(BitmapError::InvalidData(_))
    ));

    // file_size claims more than the input holds.
    let mut lying = handmade_bmp(3, 2, 24, 20);
    lying[2..6].copy_from_slice(&(54u32 + 24).to_le_bytes());
    assert!(matches!(
        decode_with(&lying, BmpPermissiveness::Standard),
        Err(BitmapError::UnexpectedEof)
    ));

    let repaired = decode_with(&lying, BmpPermissiveness::Permissive).unwrap();
    assert_eq!(repaired.pixels().len(), 24);
    assert_eq!(&repaired.pixels()[20..], &[0, 0, 0, 0]);
    assert_eq!(repaired.file_size(), 54 + 24);
    assert_eq!(repaired.to_bytes().len(), 54 + 24);
}

#[test]
fn trailing_bytes() {
    // 2x1 at 24 bits needs 8 bytes; the file carries 12.
    let bmp = handmade_bmp(2, 1, 24, 12);
    let img = decode_with(&bmp, BmpPermissiveness::Standard).unwrap();
    assert_eq!(img.pixels().len(), 12);
    assert_eq!(img.to_bytes(), bmp);

    assert!(matches!(
        decode_with(&bmp, BmpPermissiveness::Strict),
        Err(BitmapError::InvalidData(_))
    ));
}

#[test]
fn larger_info_header_with_gap() {
    // A V4-sized info header pushes the pixels to offset 122.
    let mut bmp = handmade_bmp(1, 1, 32, 68 + 4);
    bmp[10..14].copy_from_slice(&122u32.to_le_bytes());
    bmp[14..18].copy_from_slice(&108u32.to_le_bytes());
    bmp[122..126].copy_from_slice(&[1, 2, 3, 4]);

    let img = decode_with(&bmp, BmpPermissiveness::Standard).unwrap();
    assert_eq!(img.get_pixel_color(0, 0), Color::rgba(3, 2, 1, 4));
    let encoded = img.to_bytes();
    assert_eq!(encoded.len(), bmp.len());
    assert_eq!(&encoded[122..], &[1, 2, 3, 4]);

    assert!(matches!(
        decode_with(&bmp, BmpPermissiveness::Strict),
        Err(BitmapError::InvalidHeader(_))
    ));
}

#[test]
fn pixel_offset_inside_headers() {
    let mut bmp = handmade_bmp(1, 1, 24, 4);
    bmp[10..14].copy_from_slice(&20u32.to_le_bytes());
    for level in [BmpPermissiveness::Standard, BmpPermissiveness::Permissive] {
        assert!(matches!(decode_with(&bmp, level), Err(BitmapError::InvalidHeader(_))));
    }
}

#[test]
fn planes_must_be_one_unless_permissive() {
    init_logging();
    let mut bmp = handmade_bmp(1, 1, 24, 4);
    bmp[26..28].copy_from_slice(&3u16.to_le_bytes());
    assert!(matches!(Surface::from_bytes(&bmp), Err(BitmapError::InvalidHeader(_))));
    let img = decode_with(&bmp, BmpPermissiveness::Permissive).unwrap();
    assert_eq!(img.info_header().planes, 3);
}

#[test]
fn strict_checks_file_size_and_image_size() {
    let mut bmp = handmade_bmp(2, 2, 24, 16);
    bmp[2..6].copy_from_slice(&60u32.to_le_bytes());
    // Standard trusts the field and copies [54, 60).
    assert!(matches!(
        decode_with(&bmp, BmpPermissiveness::Standard),
        Err(BitmapError::InvalidData(_))
    ));
    assert!(matches!(
        decode_with(&bmp, BmpPermissiveness::Strict),
        Err(BitmapError::InvalidHeader(_))
    ));

    let mut bmp = handmade_bmp(2, 2, 24, 16);
    bmp[34..38].copy_from_slice(&99u32.to_le_bytes());
    assert!(decode_with(&bmp, BmpPermissiveness::Standard).is_ok());
    assert!(matches!(
        decode_with(&bmp, BmpPermissiveness::Strict),
        Err(BitmapError::InvalidHeader(_))
    ));
}

#[test]
fn huge_dimensions_do_not_allocate() {
    let bmp = handmade_bmp(0x7FFF_FFFF, 0x7FFF_FFFF, 32, 16);
    assert!(Surface::from_bytes(&bmp).is_err());
    assert!(ImageInfo::from_bytes(&bmp).is_ok());
}

#[test]
fn permissive_repair_that_overflows_file_size_fails_early() {
    // 8 GiB of 32-bit pixels cannot be described by a u32 file size.
    let bmp = handmade_bmp(0x4000_0000, 2, 32, 16);
    match decode_with(&bmp, BmpPermissiveness::Permissive) {
        Err(BitmapError::DimensionsTooLarge { width, height }) => {
            assert_eq!((width, height), (0x4000_0000, 2));
        }
        other => panic!("expected DimensionsTooLarge, got {other:?}"),
    }
}
