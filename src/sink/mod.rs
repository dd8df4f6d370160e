//! The sink boundary.
//!
//! A [`FrameSink`] is the external collaborator that receives dispatched
//! frames. What it does with them (network call, file write, counting in a
//! test) is entirely up to the implementation; the packer only guarantees
//! the sink is invoked once per dispatch with a correct, immutable snapshot.
//! The outcome of a send is never observed and never retried.

use std::future::Future;
use std::io;

use tokio::sync::mpsc;

use crate::frame::Frame;

/// Receives dispatched frames.
///
/// Implementations must be shareable across tasks: each dispatch hands the
/// frame to a spawned background task holding a clone of the sink handle.
///
/// The returned outcome exists for the sink's own benefit (an impl may want
/// `?` internally); the packer discards it, logging a warning when the
/// `tracing` feature is enabled.
///
/// # Example
///
/// ```
/// use packrs::{Frame, FrameSink};
/// use std::future::Future;
/// use std::io;
///
/// struct Stdout;
///
/// impl FrameSink for Stdout {
///     fn send(&self, frame: Frame) -> impl Future<Output = io::Result<()>> + Send {
///         async move {
///             println!("{}", frame);
///             Ok(())
///         }
///     }
/// }
/// ```
pub trait FrameSink: Send + Sync + 'static {
    /// Delivers one frame. Called once per dispatch.
    fn send(&self, frame: Frame) -> impl Future<Output = io::Result<()>> + Send;
}

/// Channel-backed sink: every dispatched frame is forwarded over the
/// channel. Errors only when the receiving end has been dropped.
///
/// This is the workhorse for tests and for consumers that want to drain
/// frames from a single place.
impl FrameSink for mpsc::UnboundedSender<Frame> {
    fn send(&self, frame: Frame) -> impl Future<Output = io::Result<()>> + Send {
        let result = mpsc::UnboundedSender::send(self, frame)
            .map_err(|_| io::Error::new(io::ErrorKind::BrokenPipe, "frame receiver dropped"));
        std::future::ready(result)
    }
}
