use alloc::string::String;

use crate::bmp::{self, BmpPermissiveness};
use crate::error::BitmapError;
use crate::limits::Limits;
use crate::surface::{DEFAULT_FILE_NAME, Surface};

/// Builder for decoding BMP bytes into a [`Surface`].
///
/// ```
/// use zenraster::{BmpPermissiveness, DecodeRequest, Limits, Surface};
///
/// let bytes = Surface::new("in.bmp", 4, 4, false)?.to_bytes();
/// let limits = Limits { max_pixels: Some(1 << 20), ..Default::default() };
/// let surface = DecodeRequest::new(&bytes)
///     .with_limits(&limits)
///     .with_permissiveness(BmpPermissiveness::Strict)
///     .decode()?;
/// assert_eq!(surface.width(), 4);
/// # Ok::<(), zenraster::BitmapError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
    permissiveness: BmpPermissiveness,
    file_name: Option<&'a str>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            limits: None,
            permissiveness: BmpPermissiveness::default(),
            file_name: None,
        }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn with_permissiveness(mut self, permissiveness: BmpPermissiveness) -> Self {
        self.permissiveness = permissiveness;
        self
    }

    /// File name the decoded surface saves to. Defaults to `img.bmp`.
    pub fn with_file_name(mut self, file_name: &'a str) -> Self {
        self.file_name = Some(file_name);
        self
    }

    pub fn decode(self) -> Result<Surface, BitmapError> {
        let decoded = bmp::decode_bmp(self.data, self.limits, self.permissiveness)?;
        let file_name = String::from(self.file_name.unwrap_or(DEFAULT_FILE_NAME));
        Ok(Surface::from_decoded(decoded, file_name))
    }
}
