//! BMP container codec: the 14-byte file header, the 40-byte info header
//! and the raw pixel bytes behind them.
//!
//! All integers are little-endian at fixed offsets:
//!
//! | Offset | Field            | Width |
//! |--------|------------------|-------|
//! | `0x00` | signature        | 2     |
//! | `0x02` | file_size        | 4     |
//! | `0x06` | reserved1        | 2     |
//! | `0x08` | reserved2        | 2     |
//! | `0x0A` | offset_data      | 4     |
//! | `0x0E` | header_size      | 4     |
//! | `0x12` | width            | 4     |
//! | `0x16` | height           | 4     |
//! | `0x1A` | planes           | 2     |
//! | `0x1C` | bits_per_pixel   | 2     |
//! | `0x1E` | compression      | 4     |
//! | `0x22` | image_size       | 4     |
//! | `0x26` | x_res            | 4     |
//! | `0x2A` | y_res            | 4     |
//! | `0x2E` | colors_used      | 4     |
//! | `0x32` | colors_important | 4     |
//!
//! Most callers go through [`crate::Surface::from_bytes`],
//! [`crate::DecodeRequest`] and [`crate::Surface::to_bytes`].

mod decode;
mod encode;
mod header;
mod utils;

pub use decode::BmpPermissiveness;
pub use header::{
    FILE_HEADER_SIZE, FileHeader, HEADERS_SIZE, INFO_HEADER_SIZE, InfoHeader, SIGNATURE,
};
pub use utils::{pack_u16, pack_u32, unpack_u16, unpack_u32};

pub(crate) use decode::{DecodedBmp, decode_bmp, parse_headers, validate_headers};
pub(crate) use encode::encode_bmp;
