//! Error types for packrs.

use std::fmt;

/// Errors that can occur while configuring or feeding a packer.
#[derive(Debug)]
pub enum PackError {
    /// A segment could not be appended even to a freshly reset buffer.
    ///
    /// This is a programmer error: it means segments are being produced
    /// larger than the buffer capacity, which cannot happen when the segment
    /// size equals the capacity (the only supported configuration).
    SegmentTooLarge {
        /// The segment size that was attempted.
        actual: usize,
        /// The buffer capacity it had to fit into.
        capacity: usize,
    },

    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },
}

impl fmt::Display for PackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackError::SegmentTooLarge { actual, capacity } => {
                write!(
                    f,
                    "segment too large: {} bytes cannot fit an empty {}-byte buffer",
                    actual, capacity
                )
            }
            PackError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
        }
    }
}

impl std::error::Error for PackError {}
