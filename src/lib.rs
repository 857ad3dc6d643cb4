//! # zenraster
//!
//! Uncompressed BMP reading and writing, plus integer rasterization of
//! lines, rectangles, circles and triangles straight into the decoded
//! pixel buffer.
//!
//! ## Supported Formats
//!
//! - 24-bit BGR (rows padded to 4 bytes) and 32-bit BGRA (unpadded),
//!   uncompressed, bottom-up, 14-byte file header + 40-byte
//!   BITMAPINFOHEADER. Larger info headers are accepted on read.
//!
//! ## Non-Goals
//!
//! - RLE/bitfield compression, palettes, sub-byte depths
//! - Color management
//! - Formats other than BMP
//!
//! ## Coordinates
//!
//! Drawing and pixel access use top-down coordinates: (0, 0) is the
//! top-left pixel. Writes outside the surface are silently dropped, so
//! shapes may hang off any edge.
//!
//! ## Usage
//!
//! ```no_run
//! use zenraster::{Color, Surface};
//!
//! let mut img = Surface::new("shapes.bmp", 100, 100, false)?;
//! img.fill(Color::WHITE);
//! img.draw_line(0, 10, 90, 50, Color::RED);
//! img.fill_rect(30, 70, 50, 20, Color::BLUE);
//! img.fill_circle(50, 50, 20, Color::GREEN);
//! img.fill_triangle((0, 0), (50, 99), (99, 0), Color::rgb(255, 0, 255));
//! img.save()?;
//!
//! let back = Surface::open("shapes.bmp")?;
//! assert_eq!(back.get_pixel_color(0, 10), Color::RED);
//! # Ok::<(), zenraster::BitmapError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod info;
mod limits;
mod pixel;

pub mod bmp;

mod decode;
mod draw;
mod surface;

// Re-exports
pub use bmp::{BmpPermissiveness, FileHeader, InfoHeader};
pub use decode::DecodeRequest;
pub use error::BitmapError;
pub use info::ImageInfo;
pub use limits::Limits;
pub use pixel::{BitDepth, Color, Point};
pub use surface::{DEFAULT_FILE_NAME, Surface};
