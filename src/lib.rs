//! packrs
//!
//! Bounded byte-buffer aggregation for Rust.
//!
//! `packrs` collects variable-length text messages, obfuscates them with a
//! repeating-key XOR, slices the result into buffer-sized segments, and packs
//! those segments into a fixed-capacity frame buffer. When the buffer cannot
//! accept the next segment, its full contents are handed to an external sink
//! as a background task and the buffer starts over from zero.
//!
//! It is designed as a small, composable primitive for:
//!
//! - best-effort telemetry shipping
//! - batching small messages into fixed-size frames
//! - feeding frame-oriented transports
//!
//! The crate intentionally:
//! - is NOT cryptographically secure (the XOR transform only obscures bytes)
//! - does NOT guarantee delivery or retry failed sends
//! - does NOT order sink completions (frame *contents* are ordered; the
//!   background sends racing each other are not)
//! - does NOT manage the sink itself (network, file, whatever — yours)
//!
//! It only does one thing: **messages in → full frames out**
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
//!     packer.submit("status: all quiet")?;
//!     packer.flush();
//!
//!     let frame = rx.recv().await.expect("one frame");
//!     assert_eq!(frame.len(), packer.capacity());
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod codec;
mod config;
mod error;
mod frame;
mod packer;
mod segment;
mod sink;

//
// Public surface (intentionally tiny)
//

pub use codec::{DEFAULT_KEY, KEY_LEN, XorCodec};
pub use config::{DEFAULT_CAPACITY, PackConfig};
pub use error::PackError;
pub use frame::Frame;
pub use packer::Packer;
pub use segment::segment_bytes;
pub use sink::FrameSink;
