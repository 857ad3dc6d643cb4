/// Storage depth of a surface's pixel buffer.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BitDepth {
    /// 3 bytes per pixel in B, G, R order. Rows are zero-padded to a
    /// multiple of 4 bytes.
    Bgr24,
    /// 4 bytes per pixel in B, G, R, A order. Rows are never padded.
    Bgra32,
}

impl BitDepth {
    /// Map the info header's `bits_per_pixel` field to a depth.
    pub fn from_bits(bits: u16) -> Option<Self> {
        match bits {
            24 => Some(Self::Bgr24),
            32 => Some(Self::Bgra32),
            _ => None,
        }
    }

    pub fn bits_per_pixel(&self) -> u16 {
        match self {
            Self::Bgr24 => 24,
            Self::Bgra32 => 32,
        }
    }

    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Bgr24 => 3,
            Self::Bgra32 => 4,
        }
    }

    pub fn has_alpha(&self) -> bool {
        matches!(self, Self::Bgra32)
    }

    /// Byte length of one stored row, padding included.
    ///
    /// `3 * width + width % 4` is the smallest multiple of 4 that holds
    /// `3 * width` bytes.
    pub fn row_stride(&self, width: usize) -> usize {
        match self {
            Self::Bgr24 => 3 * width + width % 4,
            Self::Bgra32 => 4 * width,
        }
    }

    /// Checked `row_stride(width) * height`, the full pixel buffer size.
    pub(crate) fn buffer_len(&self, width: u32, height: u32) -> Option<usize> {
        let w = usize::try_from(width).ok()?;
        let h = usize::try_from(height).ok()?;
        w.checked_mul(self.bytes_per_pixel())?
            .checked_add(if self.has_alpha() { 0 } else { w % 4 })?
            .checked_mul(h)
    }
}

/// An 8-bit RGBA color. The default is opaque black.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    /// Opaque color.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 255)
    }

    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Stored byte order for `depth`; only the first
    /// `depth.bytes_per_pixel()` bytes are meaningful.
    pub(crate) fn to_stored(self, depth: BitDepth) -> [u8; 4] {
        match depth {
            BitDepth::Bgr24 => [self.blue, self.green, self.red, 0],
            BitDepth::Bgra32 => [self.blue, self.green, self.red, self.alpha],
        }
    }

    /// Inverse of [`Color::to_stored`]. 24-bit pixels read back opaque.
    pub(crate) fn from_stored(bytes: &[u8], depth: BitDepth) -> Self {
        match (depth, bytes) {
            (BitDepth::Bgr24, [b, g, r, ..]) => Self::rgb(*r, *g, *b),
            (BitDepth::Bgra32, [b, g, r, a, ..]) => Self::rgba(*r, *g, *b, *a),
            _ => Self::BLACK,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

#[cfg(feature = "rgb")]
impl From<rgb::RGBA8> for Color {
    fn from(px: rgb::RGBA8) -> Self {
        Self::rgba(px.r, px.g, px.b, px.a)
    }
}

#[cfg(feature = "rgb")]
impl From<rgb::RGB8> for Color {
    fn from(px: rgb::RGB8) -> Self {
        Self::rgb(px.r, px.g, px.b)
    }
}

#[cfg(feature = "rgb")]
impl From<Color> for rgb::RGBA8 {
    fn from(c: Color) -> Self {
        rgb::RGBA8::new(c.red, c.green, c.blue, c.alpha)
    }
}

/// A position in top-down surface coordinates: origin at the top-left
/// corner, y growing downward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}
