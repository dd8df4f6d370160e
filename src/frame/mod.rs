//! The Frame type - a dispatched buffer snapshot.

use bytes::Bytes;
use std::fmt;

/// An immutable snapshot of the frame buffer at dispatch time.
///
/// A frame always carries the buffer's full capacity worth of bytes: the
/// packed segments first, then whatever zero bytes were never written. The
/// snapshot is copied out of the live buffer before the buffer is reset, so
/// a frame never aliases packer state.
///
/// # Example
///
/// ```
/// use packrs::Frame;
/// use bytes::Bytes;
///
/// let frame = Frame::new(Bytes::from(vec![0u8; 128]));
/// assert_eq!(frame.len(), 128);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    data: Bytes,
}

impl Frame {
    /// Creates a frame from snapshot bytes.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self { data: data.into() }
    }

    /// Returns the snapshot length (the originating buffer's capacity).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the frame has no data.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a reference to the snapshot bytes.
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Consumes the frame and returns the underlying bytes.
    pub fn into_data(self) -> Bytes {
        self.data
    }
}

impl From<Bytes> for Frame {
    fn from(data: Bytes) -> Self {
        Self::new(data)
    }
}

impl From<Vec<u8>> for Frame {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl AsRef<[u8]> for Frame {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame({} bytes)", self.len())
    }
}
