use alloc::string::String;
use alloc::vec::Vec;

use log::warn;

use crate::bmp::{self, DecodedBmp, FileHeader, HEADERS_SIZE, InfoHeader};
use crate::decode::DecodeRequest;
use crate::error::BitmapError;
use crate::pixel::{BitDepth, Color};

/// File name given to surfaces that were not created with one.
pub const DEFAULT_FILE_NAME: &str = "img.bmp";

/// A BMP image held in memory: both headers plus the raw pixel buffer.
///
/// The buffer keeps the on-disk layout (bottom-up rows, B, G, R(, A)
/// channel order, 24-bit rows padded to 4 bytes). Every public
/// coordinate is top-down with the origin at the top-left corner.
/// Width and height are fixed for the lifetime of the surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    file_header: FileHeader,
    info_header: InfoHeader,
    bit_depth: BitDepth,
    pixels: Vec<u8>,
    file_name: String,
}

impl Surface {
    /// Create a zero-filled (black, and transparent for 32-bit) surface.
    ///
    /// `alpha` selects 32-bit BGRA storage, otherwise 24-bit BGR.
    pub fn new(
        file_name: impl Into<String>,
        width: u32,
        height: u32,
        alpha: bool,
    ) -> Result<Self, BitmapError> {
        if width == 0 || height == 0 {
            return Err(BitmapError::InvalidHeader(alloc::format!(
                "surface dimensions must be non-zero, got {width}x{height}"
            )));
        }
        let too_large = BitmapError::DimensionsTooLarge { width, height };
        // Drawing coordinates are i32.
        if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            return Err(too_large);
        }

        let bit_depth = if alpha {
            BitDepth::Bgra32
        } else {
            BitDepth::Bgr24
        };
        let len = bit_depth.buffer_len(width, height).ok_or(too_large)?;
        let file_size = HEADERS_SIZE
            .checked_add(len)
            .and_then(|n| u32::try_from(n).ok())
            .ok_or(BitmapError::DimensionsTooLarge { width, height })?;

        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(len)
            .map_err(|_| BitmapError::DimensionsTooLarge { width, height })?;
        pixels.resize(len, 0);

        Ok(Self {
            file_header: FileHeader {
                file_size,
                ..FileHeader::default()
            },
            info_header: InfoHeader {
                width,
                height,
                bits_per_pixel: bit_depth.bits_per_pixel(),
                image_size: len as u32,
                ..InfoHeader::default()
            },
            bit_depth,
            pixels,
            file_name: file_name.into(),
        })
    }

    /// Decode BMP bytes with default settings.
    ///
    /// Use [`DecodeRequest`] for limits or a different strictness.
    pub fn from_bytes(data: &[u8]) -> Result<Self, BitmapError> {
        DecodeRequest::new(data).decode()
    }

    pub(crate) fn from_decoded(decoded: DecodedBmp, file_name: String) -> Self {
        Self {
            file_header: decoded.file_header,
            info_header: decoded.info_header,
            bit_depth: decoded.bit_depth,
            pixels: decoded.pixels,
            file_name,
        }
    }

    /// Encode headers and pixels as a BMP byte stream of `file_size()` bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        bmp::encode_bmp(&self.file_header, &self.info_header, &self.pixels)
    }

    /// Load a BMP file. The path becomes the surface's file name.
    #[cfg(feature = "std")]
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, BitmapError> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        let file_name = path.to_string_lossy();
        DecodeRequest::new(&data).with_file_name(&file_name).decode()
    }

    /// Replace headers and pixels with the contents of a BMP file.
    ///
    /// The file name is left unchanged. On error `self` is untouched.
    #[cfg(feature = "std")]
    pub fn read(&mut self, path: impl AsRef<std::path::Path>) -> Result<(), BitmapError> {
        let data = std::fs::read(path)?;
        let decoded = bmp::decode_bmp(&data, None, Default::default())?;
        self.file_header = decoded.file_header;
        self.info_header = decoded.info_header;
        self.bit_depth = decoded.bit_depth;
        self.pixels = decoded.pixels;
        Ok(())
    }

    /// Encode and write to `path`, creating or truncating the file.
    #[cfg(feature = "std")]
    pub fn write(&self, path: impl AsRef<std::path::Path>) -> Result<(), BitmapError> {
        std::fs::write(path, self.to_bytes())?;
        Ok(())
    }

    /// Write to [`Surface::file_name`].
    #[cfg(feature = "std")]
    pub fn save(&self) -> Result<(), BitmapError> {
        self.write(&self.file_name)
    }

    pub fn width(&self) -> u32 {
        self.info_header.width
    }

    pub fn height(&self) -> u32 {
        self.info_header.height
    }

    pub fn file_size(&self) -> u32 {
        self.file_header.file_size
    }

    pub fn bit_depth(&self) -> BitDepth {
        self.bit_depth
    }

    pub fn file_header(&self) -> &FileHeader {
        &self.file_header
    }

    pub fn info_header(&self) -> &InfoHeader {
        &self.info_header
    }

    /// Raw pixel bytes in storage order.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn set_file_name(&mut self, file_name: impl Into<String>) {
        self.file_name = file_name.into();
    }

    /// Replace the pixel buffer with a copy of `data`.
    ///
    /// The bytes are taken as already laid out for this surface's width,
    /// height and bit depth; nothing is revalidated. `file_size` follows
    /// the new length so that [`Surface::to_bytes`] stays consistent.
    /// Pixels that fall past the end of a short buffer read as black and
    /// ignore writes.
    pub fn load_from_bytes(&mut self, data: &[u8]) {
        self.pixels.clear();
        self.pixels.extend_from_slice(data);

        let total = self.file_header.offset_data as usize + data.len();
        self.file_header.file_size = u32::try_from(total).unwrap_or_else(|_| {
            warn!("pixel buffer of {} bytes overflows the BMP file size field", data.len());
            u32::MAX
        });
    }

    // ── Pixel access ────────────────────────────────────────────────

    /// Byte offset of pixel (x, y), or `None` outside the surface.
    fn pixel_offset(&self, x: i32, y: i32) -> Option<usize> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let row = (self.height() - y - 1) as usize;
        let stride = self.bit_depth.row_stride(self.width() as usize);
        Some(row * stride + x as usize * self.bit_depth.bytes_per_pixel())
    }

    /// Set one pixel. Coordinates outside the surface are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        let Some(offset) = self.pixel_offset(x, y) else {
            return;
        };
        let bpp = self.bit_depth.bytes_per_pixel();
        let stored = color.to_stored(self.bit_depth);
        if let Some(dst) = self.pixels.get_mut(offset..offset + bpp) {
            dst.copy_from_slice(&stored[..bpp]);
        }
    }

    /// The color at (x, y), or `None` outside the surface.
    ///
    /// 24-bit surfaces always read back with alpha 255.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        let offset = self.pixel_offset(x, y)?;
        let bpp = self.bit_depth.bytes_per_pixel();
        let src = self.pixels.get(offset..offset + bpp)?;
        Some(Color::from_stored(src, self.bit_depth))
    }

    /// The color at (x, y). Out-of-bounds reads log a warning and
    /// return opaque black.
    pub fn get_pixel_color(&self, x: i32, y: i32) -> Color {
        self.pixel(x, y).unwrap_or_else(|| {
            warn!(
                "pixel ({x}, {y}) is out of bounds for a {}x{} surface",
                self.width(),
                self.height()
            );
            Color::BLACK
        })
    }

    /// Set every pixel to `color`. Row padding stays zero.
    pub fn fill(&mut self, color: Color) {
        let bpp = self.bit_depth.bytes_per_pixel();
        let stored = color.to_stored(self.bit_depth);
        let width = self.width() as usize;
        let stride = self.bit_depth.row_stride(width);
        let height = self.height() as usize;

        for row in self.pixels.chunks_exact_mut(stride).take(height) {
            for dst in row[..width * bpp].chunks_exact_mut(bpp) {
                dst.copy_from_slice(&stored[..bpp]);
            }
        }
    }

    // ── Typed pixel interop ─────────────────────────────────────────

    /// Copy the image into a top-down [`imgref::ImgVec`].
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> imgref::ImgVec<rgb::RGBA8> {
        let (w, h) = (self.width() as usize, self.height() as usize);
        let mut buf = Vec::with_capacity(w * h);
        for y in 0..h as i32 {
            for x in 0..w as i32 {
                buf.push(self.pixel(x, y).unwrap_or_default().into());
            }
        }
        imgref::ImgVec::new(buf, w, h)
    }

    /// Build a surface from top-down RGBA pixels.
    ///
    /// With `alpha == false` the alpha channel is dropped.
    #[cfg(feature = "imgref")]
    pub fn from_imgref(
        file_name: impl Into<String>,
        img: imgref::ImgRef<'_, rgb::RGBA8>,
        alpha: bool,
    ) -> Result<Self, BitmapError> {
        let too_large = || BitmapError::DimensionsTooLarge {
            width: img.width() as u32,
            height: img.height() as u32,
        };
        let width = u32::try_from(img.width()).map_err(|_| too_large())?;
        let height = u32::try_from(img.height()).map_err(|_| too_large())?;

        let mut surface = Self::new(file_name, width, height, alpha)?;
        for (y, row) in img.rows().enumerate() {
            for (x, px) in row.iter().enumerate() {
                surface.set_pixel(x as i32, y as i32, Color::from(*px));
            }
        }
        Ok(surface)
    }
}
