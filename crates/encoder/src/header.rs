use crate::consts::{
    BIT_DEPTH, BYTES_PER_PIXEL, COLOR_TYPE_RGBA, COMPRESSION_METHOD, FILTER_METHOD, HEADER_LEN,
    INTERLACE_NONE, MAX_PNG_VALUE,
};
use crate::error::EncodeError;

/// Validated image dimensions, serialized as the IHDR payload.
///
/// Bit depth, color type and the method fields are fixed: every image this
/// crate writes is 8-bit RGBA, non-interlaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    width: u32,
    height: u32,
}

impl Header {
    /// Accepts any width and height in `1..=2^31 - 1`.
    pub fn new(width: i64, height: i64) -> Result<Self, EncodeError> {
        let invalid = || EncodeError::InvalidDimensions { width, height };
        let w = u32::try_from(width).map_err(|_| invalid())?;
        let h = u32::try_from(height).map_err(|_| invalid())?;
        if w == 0 || h == 0 || w > MAX_PNG_VALUE || h > MAX_PNG_VALUE {
            return Err(invalid());
        }
        Ok(Self { width: w, height: h })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes in one filtered scanline: the filter byte plus the pixels.
    /// None if it does not fit in memory on this target.
    pub fn scanline_len(&self) -> Option<usize> {
        usize::try_from(self.width)
            .ok()?
            .checked_mul(BYTES_PER_PIXEL)?
            .checked_add(1)
    }

    /// Bytes in the whole raw (uncompressed) image.
    /// None if it overflows or exceeds the largest possible allocation (`isize::MAX`).
    pub fn raw_len(&self) -> Option<usize> {
        self.scanline_len()?
            .checked_mul(usize::try_from(self.height).ok()?)
            .filter(|&len| len <= isize::MAX as usize)
    }

    pub fn to_bytes(self) -> [u8; HEADER_LEN] {
        let mut output = [0; HEADER_LEN];
        output[0..4].copy_from_slice(&self.width.to_be_bytes());
        output[4..8].copy_from_slice(&self.height.to_be_bytes());
        output[8] = BIT_DEPTH;
        output[9] = COLOR_TYPE_RGBA;
        output[10] = COMPRESSION_METHOD;
        output[11] = FILTER_METHOD;
        output[12] = INTERLACE_NONE;
        output
    }
}
