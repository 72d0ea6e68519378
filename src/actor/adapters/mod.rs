//! Notifier adapters.
//!
//! - [`memory::RecordingNotifier`]: in-process notifier that keeps every
//!   delivered notification for inspection
//! - [`channel::ChannelNotifier`]: forwards notifications to a session task
//!   over an unbounded `tokio` channel

pub mod channel;
pub mod memory;
