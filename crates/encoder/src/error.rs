use thiserror::Error;

/// The ways encoding a PNG can fail
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Width or height is not a positive value that fits a PNG dimension
    #[error("Invalid dimensions: {width}x{height} (both must be in 1..={max})", max = crate::consts::MAX_PNG_VALUE)]
    InvalidDimensions { width: i64, height: i64 },

    /// The compressor could not produce the image data
    #[error("Encoding failed: {0}")]
    EncodingFailure(#[source] std::io::Error),
}
