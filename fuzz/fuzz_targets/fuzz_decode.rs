#![no_main]
use libfuzzer_sys::fuzz_target;
use zenraster::{BmpPermissiveness, DecodeRequest, ImageInfo, Limits};

fuzz_target!(|data: &[u8]| {
    // Probing and decoding at every strictness level must never panic.
    let _ = ImageInfo::from_bytes(data);

    let limits = Limits {
        max_memory_bytes: Some(64 << 20),
        ..Default::default()
    };
    for level in [
        BmpPermissiveness::Strict,
        BmpPermissiveness::Standard,
        BmpPermissiveness::Permissive,
    ] {
        if let Ok(img) = DecodeRequest::new(data)
            .with_limits(&limits)
            .with_permissiveness(level)
            .decode()
        {
            let _ = img.get_pixel_color(0, 0);
            let _ = img.to_bytes();
        }
    }
});
