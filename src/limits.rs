use crate::BitmapError;

/// Resource limits applied when decoding untrusted BMP data.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum size of the decoded pixel buffer, in bytes.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Check header dimensions and the pixel buffer they imply.
    pub(crate) fn check(
        &self,
        width: u32,
        height: u32,
        buffer_bytes: usize,
    ) -> Result<(), BitmapError> {
        exceeds("width", u64::from(width), self.max_width)?;
        exceeds("height", u64::from(height), self.max_height)?;
        exceeds(
            "pixel count",
            u64::from(width) * u64::from(height),
            self.max_pixels,
        )?;
        exceeds("pixel buffer size", buffer_bytes as u64, self.max_memory_bytes)
    }
}

fn exceeds(what: &str, value: u64, limit: Option<u64>) -> Result<(), BitmapError> {
    match limit {
        Some(max) if value > max => Err(BitmapError::LimitExceeded(alloc::format!(
            "{what} {value} exceeds limit {max}"
        ))),
        _ => Ok(()),
    }
}
