//! The two fixed-layout BMP headers.

use super::utils::{pack_u16, pack_u32};
use crate::pixel::BitDepth;

/// `"BM"` read as a little-endian u16.
pub const SIGNATURE: u16 = 0x4D42;
/// Size of the file header on disk.
pub const FILE_HEADER_SIZE: usize = 14;
/// Size of a BITMAPINFOHEADER on disk.
pub const INFO_HEADER_SIZE: usize = 40;
/// Where pixel data starts when no palette follows the headers.
pub const HEADERS_SIZE: usize = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

/// BMP file header (bytes `0x00..0x0E`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeader {
    pub signature: u16,
    /// Total file size in bytes.
    pub file_size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    /// Byte offset of the first pixel row.
    pub offset_data: u32,
}

impl Default for FileHeader {
    fn default() -> Self {
        Self {
            signature: SIGNATURE,
            file_size: HEADERS_SIZE as u32,
            reserved1: 0,
            reserved2: 0,
            offset_data: HEADERS_SIZE as u32,
        }
    }
}

impl FileHeader {
    pub(crate) fn write_to(&self, out: &mut [u8; FILE_HEADER_SIZE]) {
        out[0x00..0x02].copy_from_slice(&pack_u16(self.signature));
        out[0x02..0x06].copy_from_slice(&pack_u32(self.file_size));
        out[0x06..0x08].copy_from_slice(&pack_u16(self.reserved1));
        out[0x08..0x0A].copy_from_slice(&pack_u16(self.reserved2));
        out[0x0A..0x0E].copy_from_slice(&pack_u32(self.offset_data));
    }
}

/// BITMAPINFOHEADER (bytes `0x0E..0x36`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoHeader {
    pub header_size: u32,
    pub width: u32,
    /// Positive: rows are stored bottom-up.
    pub height: u32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    /// 0 (`BI_RGB`) is the only supported value.
    pub compression: u32,
    pub image_size: u32,
    pub x_res: u32,
    pub y_res: u32,
    pub colors_used: u32,
    pub colors_important: u32,
}

impl Default for InfoHeader {
    fn default() -> Self {
        Self {
            header_size: INFO_HEADER_SIZE as u32,
            width: 0,
            height: 0,
            planes: 1,
            bits_per_pixel: BitDepth::Bgr24.bits_per_pixel(),
            compression: 0,
            image_size: 0,
            x_res: 0,
            y_res: 0,
            colors_used: 0,
            colors_important: 0,
        }
    }
}

impl InfoHeader {
    pub(crate) fn write_to(&self, out: &mut [u8; INFO_HEADER_SIZE]) {
        // Offsets here are relative to the start of the info header (0x0E).
        out[0x00..0x04].copy_from_slice(&pack_u32(self.header_size));
        out[0x04..0x08].copy_from_slice(&pack_u32(self.width));
        out[0x08..0x0C].copy_from_slice(&pack_u32(self.height));
        out[0x0C..0x0E].copy_from_slice(&pack_u16(self.planes));
        out[0x0E..0x10].copy_from_slice(&pack_u16(self.bits_per_pixel));
        out[0x10..0x14].copy_from_slice(&pack_u32(self.compression));
        out[0x14..0x18].copy_from_slice(&pack_u32(self.image_size));
        out[0x18..0x1C].copy_from_slice(&pack_u32(self.x_res));
        out[0x1C..0x20].copy_from_slice(&pack_u32(self.y_res));
        out[0x20..0x24].copy_from_slice(&pack_u32(self.colors_used));
        out[0x24..0x28].copy_from_slice(&pack_u32(self.colors_important));
    }
}
