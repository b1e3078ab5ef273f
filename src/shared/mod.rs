//! Messaging between the dashboard and the toast board
//!
//! The dashboard reports confirmations and validation failures through a
//! [`Notifier`]; the toast board receives them over a channel.

pub mod messages;
pub mod notifier;

pub use messages::{Notification, Severity};
pub use notifier::{ChannelNotifier, Notifier};

#[cfg(test)]
pub use notifier::RecordingNotifier;
