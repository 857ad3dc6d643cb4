use crate::bmp::{self, BmpPermissiveness};
use crate::error::BitmapError;
use crate::pixel::BitDepth;

/// Header-level facts about a BMP, read without copying pixel data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub bit_depth: BitDepth,
    /// The file size recorded in the header.
    pub file_size: u32,
    /// Where the pixel rows start.
    pub offset_data: u32,
}

impl ImageInfo {
    /// Probe BMP headers with [`BmpPermissiveness::Standard`] rules.
    ///
    /// Only the 54 header bytes need to be present.
    pub fn from_bytes(data: &[u8]) -> Result<Self, BitmapError> {
        let (file, info) = bmp::parse_headers(data)?;
        let bit_depth =
            bmp::validate_headers(&file, &info, data.len(), BmpPermissiveness::Standard)?;
        Ok(Self {
            width: info.width,
            height: info.height,
            bit_depth,
            file_size: file.file_size,
            offset_data: file.offset_data,
        })
    }
}
