//! Errors raised while preparing an icon.

use thiserror::Error;

/// Icon errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IconError {
    #[error("Invalid icon size: {0} (must be at least 1 pixel)")]
    InvalidSize(u32),
}

/// Result type for icon operations.
pub type IconResult<T> = Result<T, IconError>;

/// Reject sizes that cannot hold a single pixel.
pub fn validate_size(size: u32) -> IconResult<u32> {
    if size == 0 {
        return Err(IconError::InvalidSize(size));
    }
    Ok(size)
}
