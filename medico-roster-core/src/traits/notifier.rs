use crate::types::Notification;

/// Platform alert surface.
///
/// Fire-and-forget: the screens never wait for a notification to be
/// acknowledged.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}
