//! Configuration for packing behavior.
//!
//! [`PackConfig`] controls the frame buffer capacity and the obfuscation
//! key. Both are fixed for the lifetime of a [`Packer`](crate::Packer); the
//! key is injected here rather than living as a hidden global so it stays
//! testable and swappable.
//!
//! # Example
//!
//! ```
//! use packrs::PackConfig;
//!
//! // Custom capacity
//! let config = PackConfig::new(64)?;
//!
//! // Custom key
//! let config = PackConfig::default().with_key([0xAA; 8]);
//!
//! # Ok::<(), packrs::PackError>(())
//! ```

use crate::codec::{DEFAULT_KEY, KEY_LEN};
use crate::error::PackError;

/// Default frame buffer capacity (128 bytes).
pub const DEFAULT_CAPACITY: usize = 128;

/// Configuration for a [`Packer`](crate::Packer).
///
/// Segments are produced at exactly `capacity` bytes, so a valid
/// configuration guarantees every segment fits an empty buffer.
///
/// # Example
///
/// ```
/// use packrs::PackConfig;
///
/// // Use default configuration
/// let config = PackConfig::default();
/// assert_eq!(config.capacity(), 128);
///
/// // Builder pattern
/// let config = PackConfig::default().with_capacity(256);
/// assert_eq!(config.capacity(), 256);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackConfig {
    /// Frame buffer capacity in bytes.
    capacity: usize,

    /// Obfuscation key applied to every message.
    key: [u8; KEY_LEN],
}

impl PackConfig {
    /// Creates a configuration with the given capacity and the default key.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::InvalidConfig`] if `capacity` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use packrs::PackConfig;
    ///
    /// let config = PackConfig::new(64)?;
    /// assert_eq!(config.capacity(), 64);
    /// # Ok::<(), packrs::PackError>(())
    /// ```
    pub fn new(capacity: usize) -> Result<Self, PackError> {
        let config = Self {
            capacity,
            key: DEFAULT_KEY,
        };
        config.validate()?;
        Ok(config)
    }

    /// Sets the buffer capacity.
    ///
    /// Note: This does not validate the configuration. Use
    /// [`PackConfig::validate`] to check if the configuration is valid.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the obfuscation key.
    pub fn with_key(mut self, key: [u8; KEY_LEN]) -> Self {
        self.key = key;
        self
    }

    /// Returns the frame buffer capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the obfuscation key.
    pub fn key(&self) -> &[u8; KEY_LEN] {
        &self.key
    }

    /// Validates the current configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use packrs::PackConfig;
    ///
    /// let config = PackConfig::default().with_capacity(0);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), PackError> {
        if self.capacity == 0 {
            return Err(PackError::InvalidConfig {
                message: "capacity must be non-zero",
            });
        }
        Ok(())
    }
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            key: DEFAULT_KEY,
        }
    }
}
