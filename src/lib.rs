//! Blocking rendezvous and bounded-buffered channels for OS threads.
//!
//! A [`Channel`] hands owned values from producer threads to consumer
//! threads. Capacity `0` gives a rendezvous channel where every send waits
//! for the matching receive to make room; capacity `>= 1` gives a bounded
//! buffer with FIFO delivery. Closing the channel is the end-of-stream
//! signal: producers start failing, consumers drain what is left.
//!
//! ```
//! use handover::ChannelBuilder;
//!
//! let chan = ChannelBuilder::new().with_capacity(4).build::<u32>();
//! chan.send(1).unwrap();
//! chan.close();
//! assert_eq!(chan.receive().unwrap(), 1);
//! assert!(chan.receive().is_err()); // closed and drained
//! ```

mod builder;
mod channel;
mod debug;
mod error;
mod slot;

// Re-export the whole public surface at the crate root for a stable path.
pub use builder::ChannelBuilder;
pub use channel::Channel;
pub use error::{Drained, SendError, TryReceiveError, TrySendError};
