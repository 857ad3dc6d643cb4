//! BMP header parsing and pixel extraction.
//!
//! Only the uncompressed BITMAPINFOHEADER layout at 24 and 32 bits per
//! pixel is accepted. Pixel bytes are copied verbatim: rows stay
//! bottom-up and channels stay in B, G, R(, A) order.

use alloc::vec::Vec;

use log::{debug, warn};

use super::header::{FileHeader, HEADERS_SIZE, INFO_HEADER_SIZE, InfoHeader, SIGNATURE};
use super::utils::{unpack_u16, unpack_u32};
use crate::error::BitmapError;
use crate::limits::Limits;
use crate::pixel::BitDepth;

// ── Permissiveness ──────────────────────────────────────────────────

/// Controls how strictly the BMP decoder validates input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BmpPermissiveness {
    /// Reject anything this crate would not have written itself:
    /// header size other than 40, planes other than 1, a file size field
    /// that disagrees with the input length, a pixel offset other than
    /// 54, a non-zero image size that disagrees with the row stride, or
    /// trailing bytes after the last pixel row.
    Strict,

    /// Default behavior. Trust `offset_data` and `file_size` as given,
    /// accept trailing bytes after the pixel rows and larger (V4/V5)
    /// info headers. Reject a bad signature, planes != 1 and pixel
    /// data shorter than `row_stride * height`.
    #[default]
    Standard,

    /// Accept as much as possible. A bad signature or planes value is
    /// logged and ignored, and truncated pixel data is zero-padded.
    /// `file_size` is rewritten to match the repaired buffer.
    Permissive,
}

// ── Cursor over the fixed-layout headers ────────────────────────────

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N], BitmapError> {
        let end = self.pos.checked_add(N).ok_or(BitmapError::UnexpectedEof)?;
        let src = self
            .data
            .get(self.pos..end)
            .ok_or(BitmapError::UnexpectedEof)?;
        let mut buf = [0u8; N];
        buf.copy_from_slice(src);
        self.pos = end;
        Ok(buf)
    }

    fn get_u16_le(&mut self) -> Result<u16, BitmapError> {
        self.read_fixed_bytes().map(unpack_u16)
    }

    fn get_u32_le(&mut self) -> Result<u32, BitmapError> {
        self.read_fixed_bytes().map(unpack_u32)
    }
}

// ── Header parsing ──────────────────────────────────────────────────

/// Read both headers from their fixed offsets without validating them.
pub(crate) fn parse_headers(data: &[u8]) -> Result<(FileHeader, InfoHeader), BitmapError> {
    if data.len() < HEADERS_SIZE {
        return Err(BitmapError::UnexpectedEof);
    }
    let mut bytes = Cursor::new(data);

    // Struct fields are evaluated in source order, which is file order.
    let file_header = FileHeader {
        signature: bytes.get_u16_le()?,
        file_size: bytes.get_u32_le()?,
        reserved1: bytes.get_u16_le()?,
        reserved2: bytes.get_u16_le()?,
        offset_data: bytes.get_u32_le()?,
    };
    let info_header = InfoHeader {
        header_size: bytes.get_u32_le()?,
        width: bytes.get_u32_le()?,
        height: bytes.get_u32_le()?,
        planes: bytes.get_u16_le()?,
        bits_per_pixel: bytes.get_u16_le()?,
        compression: bytes.get_u32_le()?,
        image_size: bytes.get_u32_le()?,
        x_res: bytes.get_u32_le()?,
        y_res: bytes.get_u32_le()?,
        colors_used: bytes.get_u32_le()?,
        colors_important: bytes.get_u32_le()?,
    };
    debug_assert_eq!(bytes.pos, HEADERS_SIZE);

    Ok((file_header, info_header))
}

/// Check parsed headers against `permissiveness` and resolve the bit depth.
pub(crate) fn validate_headers(
    file: &FileHeader,
    info: &InfoHeader,
    data_len: usize,
    permissiveness: BmpPermissiveness,
) -> Result<BitDepth, BitmapError> {
    let is_strict = permissiveness == BmpPermissiveness::Strict;
    let is_permissive = permissiveness == BmpPermissiveness::Permissive;

    if file.signature != SIGNATURE {
        if !is_permissive {
            return Err(BitmapError::UnrecognizedFormat);
        }
        warn!(
            "BMP signature is {:#06x}, expected {SIGNATURE:#06x}; decoding anyway",
            file.signature
        );
    }

    let bpp = info.bits_per_pixel;
    let bit_depth = BitDepth::from_bits(bpp).ok_or_else(|| {
        BitmapError::UnsupportedVariant(alloc::format!("BMP bit depth {bpp} unsupported"))
    })?;

    if info.compression != 0 {
        return Err(BitmapError::UnsupportedVariant(alloc::format!(
            "BMP compression method {} unsupported",
            info.compression
        )));
    }

    if info.width == 0 {
        return Err(BitmapError::InvalidHeader("BMP width is zero".into()));
    }
    if info.height == 0 {
        return Err(BitmapError::InvalidHeader("BMP height is zero".into()));
    }
    if (info.width as i32) < 0 {
        return Err(BitmapError::InvalidHeader(alloc::format!(
            "BMP width is negative ({})",
            info.width as i32
        )));
    }
    if (info.height as i32) < 0 {
        return Err(BitmapError::UnsupportedVariant(
            "top-down BMP (negative height)".into(),
        ));
    }

    if (info.header_size as usize) < INFO_HEADER_SIZE {
        return Err(BitmapError::InvalidHeader(alloc::format!(
            "BMP info header size {} is smaller than {INFO_HEADER_SIZE}",
            info.header_size
        )));
    }

    if info.planes != 1 {
        if !is_permissive {
            return Err(BitmapError::InvalidHeader(alloc::format!(
                "BMP planes field is {}, expected 1",
                info.planes
            )));
        }
        warn!("BMP planes field is {}, ignoring", info.planes);
    }

    let offset = file.offset_data as usize;
    if offset < HEADERS_SIZE {
        return Err(BitmapError::InvalidHeader(alloc::format!(
            "BMP pixel offset {offset} overlaps the headers"
        )));
    }
    if !is_permissive && file.offset_data > file.file_size {
        return Err(BitmapError::InvalidHeader(alloc::format!(
            "BMP pixel offset {} lies past the file size {}",
            file.offset_data, file.file_size
        )));
    }

    if is_strict {
        if info.header_size as usize != INFO_HEADER_SIZE {
            return Err(BitmapError::InvalidHeader(alloc::format!(
                "BMP info header size is {}, expected {INFO_HEADER_SIZE}",
                info.header_size
            )));
        }
        if offset != HEADERS_SIZE {
            return Err(BitmapError::InvalidHeader(alloc::format!(
                "BMP pixel offset is {offset}, expected {HEADERS_SIZE}"
            )));
        }
        if file.file_size as usize != data_len {
            return Err(BitmapError::InvalidHeader(alloc::format!(
                "BMP file size field ({}) doesn't match actual size ({data_len})",
                file.file_size
            )));
        }
        let expected = bit_depth.buffer_len(info.width, info.height);
        if info.image_size != 0 && expected != Some(info.image_size as usize) {
            return Err(BitmapError::InvalidHeader(alloc::format!(
                "BMP image size field ({}) doesn't match the row layout",
                info.image_size
            )));
        }
    }

    Ok(bit_depth)
}

// ── Full decode ─────────────────────────────────────────────────────

/// Headers plus the verbatim pixel byte range of a decoded BMP.
pub(crate) struct DecodedBmp {
    pub file_header: FileHeader,
    pub info_header: InfoHeader,
    pub bit_depth: BitDepth,
    pub pixels: Vec<u8>,
}

/// Decode BMP data, copying `[offset_data, file_size)` as the pixel buffer.
pub(crate) fn decode_bmp(
    data: &[u8],
    limits: Option<&Limits>,
    permissiveness: BmpPermissiveness,
) -> Result<DecodedBmp, BitmapError> {
    let (mut file_header, info_header) = parse_headers(data)?;
    let bit_depth = validate_headers(&file_header, &info_header, data.len(), permissiveness)?;

    let (width, height) = (info_header.width, info_header.height);
    let expected = bit_depth
        .buffer_len(width, height)
        .ok_or(BitmapError::DimensionsTooLarge { width, height })?;
    if let Some(limits) = limits {
        limits.check(width, height, expected)?;
    }

    let start = file_header.offset_data as usize;
    let end = file_header.file_size as usize;

    let pixels = if permissiveness == BmpPermissiveness::Permissive {
        let available = data.get(start..).unwrap_or(&[]);
        // Trailing bytes are kept only when they are actually present.
        let declared = end.saturating_sub(start).min(available.len());
        let len = declared.max(expected);
        // The repaired size must fit the header before anything is allocated.
        let repaired = start
            .checked_add(len)
            .and_then(|n| u32::try_from(n).ok())
            .ok_or(BitmapError::DimensionsTooLarge { width, height })?;

        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(len)
            .map_err(|_| BitmapError::DimensionsTooLarge { width, height })?;
        let copied = available.len().min(len);
        pixels.extend_from_slice(&available[..copied]);
        if copied < len {
            warn!(
                "BMP pixel data truncated: {copied} of {len} bytes present, zero-padding"
            );
            pixels.resize(len, 0);
        }

        if repaired != file_header.file_size {
            warn!(
                "BMP file size field {} repaired to {repaired}",
                file_header.file_size
            );
            file_header.file_size = repaired;
        }
        pixels
    } else {
        let range = data.get(start..end).ok_or(BitmapError::UnexpectedEof)?;
        if range.len() < expected {
            return Err(BitmapError::InvalidData(alloc::format!(
                "BMP pixel data is {} bytes, {width}x{height} at {} bits needs {expected}",
                range.len(),
                bit_depth.bits_per_pixel()
            )));
        }
        if permissiveness == BmpPermissiveness::Strict && range.len() != expected {
            return Err(BitmapError::InvalidData(alloc::format!(
                "BMP pixel data has {} trailing bytes",
                range.len() - expected
            )));
        }
        range.to_vec()
    };

    debug!(
        "decoded {width}x{height} BMP, {} bits per pixel, {} pixel bytes",
        bit_depth.bits_per_pixel(),
        pixels.len()
    );

    Ok(DecodedBmp {
        file_header,
        info_header,
        bit_depth,
        pixels,
    })
}
