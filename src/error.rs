use alloc::string::String;
use enough::StopReason;

/// Errors from TGA decoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TgaError {
    /// A read needed more bytes than the input holds.
    #[error("truncated data reading {what} at offset {offset}: need {needed} bytes, {available} available")]
    TruncatedData {
        what: &'static str,
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("unsupported pixel format: {pixel_size} bytes per pixel (indexed: {indexed}, grey: {grey})")]
    UnsupportedPixelFormat {
        pixel_size: usize,
        indexed: bool,
        grey: bool,
    },

    #[error("unsupported color map entry size: {0} bytes")]
    UnsupportedColorMapEntry(usize),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for TgaError {
    fn from(r: StopReason) -> Self {
        TgaError::Cancelled(r)
    }
}

/// Errors from [`crate::decode_file`]: reading the file, or decoding its bytes.
#[cfg(feature = "std")]
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("failed to read TGA file: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Decode(#[from] TgaError),
}
