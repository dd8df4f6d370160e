//! Core packing engine - the Packer.
//!
//! A [`Packer`] owns the fixed-capacity frame buffer and its write cursor.
//! Submitted messages are encoded, segmented, and appended in order; when a
//! segment no longer fits, the buffer is dispatched to the sink and reset
//! before the segment is appended to the fresh buffer.
//!
//! # Example
//!
//! ```
//! use packrs::{PackConfig, Packer, Frame};
//! use tokio::sync::mpsc;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), packrs::PackError> {
//!     let (tx, mut rx) = mpsc::unbounded_channel::<Frame>();
//!     let mut packer = Packer::new(PackConfig::default(), tx)?;
//!
//!     packer.submit("first")?;
//!     packer.flush();
//!
//!     assert_eq!(rx.recv().await.unwrap().len(), 128);
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

use bytes::Bytes;

use crate::codec::XorCodec;
use crate::config::PackConfig;
use crate::error::PackError;
use crate::frame::Frame;
use crate::segment::segment_bytes;
use crate::sink::FrameSink;

/// Packs encoded message segments into a fixed-capacity frame buffer and
/// dispatches full frames to a sink.
///
/// # Concurrency
///
/// The buffer and cursor are single-writer state: every mutation goes
/// through `&mut self`, so the borrow checker enforces exclusive access.
/// Callers that submit from several tasks wrap the packer in a mutex (or
/// funnel messages through one owning task); the packer itself takes no
/// locks.
///
/// # Dispatch
///
/// Each dispatch copies the full buffer into a [`Frame`] and spawns a
/// background task that hands it to the sink. The spawn happens on the
/// ambient Tokio runtime, so [`Packer::submit`] and [`Packer::flush`] must
/// be called from within one; they never await. Frame contents are totally
/// ordered (the buffer is reset synchronously before anything else can be
/// appended), but the background sends may complete in any order.
pub struct Packer<S> {
    config: PackConfig,
    codec: XorCodec,
    sink: Arc<S>,
    buf: Vec<u8>,
    cursor: usize,
}

impl<S: FrameSink> Packer<S> {
    /// Creates a packer with a zeroed buffer and cursor at 0.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::InvalidConfig`] if the configuration fails
    /// [`PackConfig::validate`].
    pub fn new(config: PackConfig, sink: S) -> Result<Self, PackError> {
        config.validate()?;
        Ok(Self {
            codec: XorCodec::new(*config.key()),
            sink: Arc::new(sink),
            buf: vec![0; config.capacity()],
            cursor: 0,
            config,
        })
    }

    /// Submits one message: encode, segment, pack.
    ///
    /// Messages that are empty (or trim to empty) are silently ignored: no
    /// encode, no append, no dispatch. Otherwise each segment is appended
    /// in order, dispatching and resetting the buffer whenever a segment no
    /// longer fits. Zero or more frames may be dispatched per call.
    ///
    /// # Errors
    ///
    /// [`PackError::SegmentTooLarge`] if a segment cannot fit even a freshly
    /// reset buffer. Segments are produced at exactly the buffer capacity,
    /// so this is unreachable with a validated configuration and signals a
    /// defect rather than a runtime condition to handle.
    pub fn submit(&mut self, message: &str) -> Result<(), PackError> {
        if message.trim().is_empty() {
            return Ok(());
        }

        let encoded = self.codec.encode(message);
        for segment in segment_bytes(&encoded, self.config.capacity()) {
            self.append_or_dispatch(&segment)?;
        }
        Ok(())
    }

    /// Unconditionally dispatches the current buffer and resets.
    ///
    /// Callable at any time, including on a never-written packer, in which
    /// case the sink receives a frame of all zero bytes. The cursor is 0
    /// when this returns.
    pub fn flush(&mut self) {
        self.dispatch_and_reset();
    }

    /// Returns the frame buffer capacity.
    pub fn capacity(&self) -> usize {
        self.config.capacity()
    }

    /// Returns the current write cursor. Always within `0..=capacity`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns how many bytes the buffer can still accept before the next
    /// append forces a dispatch.
    pub fn remaining(&self) -> usize {
        self.config.capacity() - self.cursor
    }

    /// Returns true if nothing has been appended since the last reset.
    pub fn is_empty(&self) -> bool {
        self.cursor == 0
    }

    /// Returns the configuration this packer was built with.
    pub fn config(&self) -> &PackConfig {
        &self.config
    }

    /// Appends a segment, dispatching the buffer first if it does not fit.
    ///
    /// The retry-after-dispatch happens at most once: a segment that fails
    /// against an empty buffer is oversized, full stop.
    fn append_or_dispatch(&mut self, segment: &[u8]) -> Result<(), PackError> {
        if self.try_append(segment) {
            return Ok(());
        }

        self.dispatch_and_reset();

        if self.try_append(segment) {
            return Ok(());
        }

        Err(PackError::SegmentTooLarge {
            actual: segment.len(),
            capacity: self.config.capacity(),
        })
    }

    /// Copies `segment` at the cursor if it fits. Pure capacity check: a
    /// failed append leaves buffer and cursor untouched.
    fn try_append(&mut self, segment: &[u8]) -> bool {
        let end = self.cursor + segment.len();
        if end > self.config.capacity() {
            return false;
        }

        self.buf[self.cursor..end].copy_from_slice(segment);
        self.cursor = end;
        true
    }

    /// Snapshots the full buffer, hands it to the sink on a background
    /// task, and resets to a fresh zeroed buffer with cursor 0.
    ///
    /// The snapshot is copied before the reset, so it never aliases the
    /// live buffer. The spawned send is fire-and-forget: its outcome is not
    /// awaited, not retried, and surfaces only as a `tracing` warning when
    /// that feature is enabled.
    fn dispatch_and_reset(&mut self) {
        let frame = Frame::new(Bytes::copy_from_slice(&self.buf));
        let sink = Arc::clone(&self.sink);

        tokio::spawn(async move {
            let outcome = sink.send(frame).await;

            #[cfg(feature = "tracing")]
            if let Err(e) = &outcome {
                tracing::warn!("frame sink send failed: {}", e);
            }

            let _ = outcome;
        });

        self.buf = vec![0; self.config.capacity()];
        self.cursor = 0;
    }
}
