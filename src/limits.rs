use crate::error::TgaError;

/// Resource limits for decode operations.
///
/// All fields default to `None` (no limit). TGA dimensions are 16-bit,
/// so the dimension limits only bite below 65535.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes allocated by one decode: the RGBA output plus the
    /// expanded RLE buffer, if any.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Check header dimensions before anything is allocated.
    pub(crate) fn check_dimensions(&self, width: u16, height: u16) -> Result<(), TgaError> {
        let exceeds = |what: &str, value: u64, max: Option<u64>| match max {
            Some(max) if value > max => Err(TgaError::LimitExceeded(alloc::format!(
                "{what} {value} exceeds limit {max}"
            ))),
            _ => Ok(()),
        };
        exceeds("width", u64::from(width), self.max_width)?;
        exceeds("height", u64::from(height), self.max_height)?;
        exceeds(
            "pixel count",
            u64::from(width) * u64::from(height),
            self.max_pixels,
        )
    }

    /// Check the total bytes a decode is about to allocate.
    pub(crate) fn check_memory(&self, bytes: usize) -> Result<(), TgaError> {
        match self.max_memory_bytes {
            Some(max_mem) if bytes as u64 > max_mem => Err(TgaError::LimitExceeded(
                alloc::format!("allocation {bytes} bytes exceeds memory limit {max_mem}"),
            )),
            _ => Ok(()),
        }
    }
}
