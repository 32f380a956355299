//! Background feed poller.
//!
//! Fire-and-log: a fixed-interval GET whose result is only logged. There is
//! no retry or backoff beyond waiting for the next tick.

pub mod monitor;

pub use monitor::{FeedPoller, PollError};
