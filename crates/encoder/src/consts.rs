/// The 8 bytes every PNG file starts with.
pub const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Bits per channel.
pub const BIT_DEPTH: u8 = 8;

/// Truecolor with alpha.
pub const COLOR_TYPE_RGBA: u8 = 6;

/// Deflate, the only compression method PNG defines.
pub const COMPRESSION_METHOD: u8 = 0;

/// Adaptive filtering, the only filter method PNG defines.
pub const FILTER_METHOD: u8 = 0;

pub const INTERLACE_NONE: u8 = 0;

/// Scanline filter type prefixed to every row (None).
pub const FILTER_TYPE_NONE: u8 = 0;

/// Bytes per RGBA pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Size of the IHDR payload.
pub const HEADER_LEN: usize = 13;

/// Largest width or height, and largest chunk payload, PNG allows (2^31 - 1).
pub const MAX_PNG_VALUE: u32 = 0x7FFF_FFFF;
