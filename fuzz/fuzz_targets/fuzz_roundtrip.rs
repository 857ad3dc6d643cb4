#![no_main]
use libfuzzer_sys::fuzz_target;
use zenraster::*;

fuzz_target!(|data: &[u8]| {
    // If we can decode it, encoding and decoding again must reproduce it.
    let limits = Limits {
        max_memory_bytes: Some(64 << 20),
        ..Default::default()
    };
    let Ok(decoded) = DecodeRequest::new(data).with_limits(&limits).decode() else {
        return;
    };

    let reencoded = decoded.to_bytes();
    assert_eq!(reencoded.len(), decoded.file_size() as usize);
    let Ok(decoded2) = Surface::from_bytes(&reencoded) else {
        panic!("re-encoded data failed to decode");
    };

    assert_eq!(decoded.file_header(), decoded2.file_header());
    assert_eq!(decoded.info_header(), decoded2.info_header());
    assert_eq!(decoded.pixels(), decoded2.pixels(), "roundtrip pixel mismatch");
});
