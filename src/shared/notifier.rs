//! Notification channel between the dashboard and whatever presents toasts

use crossbeam_channel::Sender;
use tracing::debug;

use crate::shared::messages::Notification;

/// Something that can present a notification to the user
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Forwards notifications over a channel to the toast board
pub struct ChannelNotifier {
    sender: Sender<Notification>,
}

impl ChannelNotifier {
    pub fn new(sender: Sender<Notification>) -> Self {
        Self { sender }
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notification: Notification) {
        debug!(title = %notification.title, "Sending notification");
        // The board only goes away on shutdown
        let _ = self.sender.send(notification);
    }
}

/// Records every notification it receives
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    received: parking_lot::Mutex<Vec<Notification>>,
}

#[cfg(test)]
impl RecordingNotifier {
    pub fn notifications(&self) -> Vec<Notification> {
        self.received.lock().clone()
    }

    pub fn count(&self) -> usize {
        self.received.lock().len()
    }

    pub fn last(&self) -> Option<Notification> {
        self.received.lock().last().cloned()
    }
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.received.lock().push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    #[test]
    fn test_channel_notifier_forwards() {
        let (tx, rx) = unbounded();
        let notifier = ChannelNotifier::new(tx);

        notifier.notify(Notification::info("Messages", "Opening..."));

        let received = rx.try_recv().unwrap();
        assert_eq!(received.title, "Messages");
        assert!(!received.is_error());
    }

    #[test]
    fn test_channel_notifier_survives_closed_receiver() {
        let (tx, rx) = unbounded();
        drop(rx);
        ChannelNotifier::new(tx).notify(Notification::error("Oops", "ignored"));
    }

    #[test]
    fn test_recording_notifier_keeps_order() {
        let recorder = RecordingNotifier::default();
        recorder.notify(Notification::info("a", "1"));
        recorder.notify(Notification::error("b", "2"));

        assert_eq!(recorder.count(), 2);
        assert_eq!(recorder.notifications()[0].title, "a");
        assert!(recorder.last().unwrap().is_error());
    }
}
