//! BMP encoder: headers at their fixed offsets followed by the raw
//! pixel buffer.

use alloc::vec::Vec;

use log::debug;

use super::header::{FILE_HEADER_SIZE, FileHeader, HEADERS_SIZE, INFO_HEADER_SIZE, InfoHeader};

/// Serialize headers and pixel bytes.
///
/// The output is `offset_data + pixels.len()` bytes long. Any gap between
/// the end of the info header and `offset_data` is zero-filled.
pub(crate) fn encode_bmp(file_header: &FileHeader, info_header: &InfoHeader, pixels: &[u8]) -> Vec<u8> {
    let offset = (file_header.offset_data as usize).max(HEADERS_SIZE);
    let total = offset + pixels.len();

    let mut out = Vec::with_capacity(total);

    let mut file_bytes = [0u8; FILE_HEADER_SIZE];
    file_header.write_to(&mut file_bytes);
    out.extend_from_slice(&file_bytes);

    let mut info_bytes = [0u8; INFO_HEADER_SIZE];
    info_header.write_to(&mut info_bytes);
    out.extend_from_slice(&info_bytes);

    out.resize(offset, 0);
    out.extend_from_slice(pixels);

    debug!(
        "encoded {}x{} BMP, {} bytes",
        info_header.width,
        info_header.height,
        out.len()
    );
    out
}
