//! # A minimal write-only PNG encoder
//!
//! Produces single-frame, non-interlaced, 8-bit RGBA PNG files: the signature,
//! one IHDR chunk, one IDAT chunk holding the zlib-compressed scanlines, and
//! an IEND chunk. Nothing else from the [PNG specification] is supported.
//!
//! ## Usage
//!
//! Pixels come from any [`PixelSource`]: a closure `Fn(u32, u32) -> Rgba`
//! or a [`raster::Canvas`], whose unpainted coordinates resolve to
//! transparent white.
//!
//! ```
//! use raster::Rgba;
//! use tomato_encoder::{encode, SIGNATURE};
//!
//! let icon = raster::compose(32);
//! let png = encode(32, 32, &icon)?;
//! assert_eq!(&png[..8], &SIGNATURE);
//!
//! let gradient = |x: u32, y: u32| Rgba::new(x as u8, y as u8, 0, 255);
//! let png = encode(256, 256, &gradient)?;
//! assert!(png.len() > SIGNATURE.len());
//! # Ok::<(), tomato_encoder::EncodeError>(())
//! ```
//!
//! Width and height are signed; anything outside `1..=2^31 - 1` (the PNG
//! limit), or an image whose raw scanlines would not fit in memory, is
//! rejected with [`EncodeError::InvalidDimensions`] before any pixel is read.
//!
//! [PNG specification]: <https://www.w3.org/TR/png/>

mod chunk;
mod consts;
mod encoder;
mod error;
mod header;

pub use crate::chunk::{Chunk, ChunkType, crc, payload_len};
pub use crate::consts::{MAX_PNG_VALUE, SIGNATURE};
pub use crate::encoder::{PixelSource, encode, raw_scanlines};
pub use crate::error::EncodeError;
pub use crate::header::Header;
