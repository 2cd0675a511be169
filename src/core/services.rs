use crate::models::notification::{Notification, Severity};
use camino::Utf8PathBuf;
use parking_lot::Mutex;
use std::future::Future;

/// Native folder picker. Resolves to `None` when the dialog is cancelled.
pub trait FolderPicker {
    fn select_folder(&self) -> impl Future<Output = Option<Utf8PathBuf>> + Send;
}

/// Fire-and-forget user notifications.
pub trait NotificationSink {
    fn notify(&self, title: &str, body: &str, severity: Severity);
}

/// In-memory notification queue with monotonic ids.
///
/// Display timing and dismissal belong to the UI; this only holds the queue.
#[derive(Debug, Default)]
pub struct ToastQueue {
    inner: Mutex<ToastState>,
}

#[derive(Debug, Default)]
struct ToastState {
    toasts: Vec<Notification>,
    next_id: u64,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes a toast by id. Returns whether it was present.
    pub fn dismiss(&self, id: u64) -> bool {
        let mut state = self.inner.lock();
        let before = state.toasts.len();
        state.toasts.retain(|t| t.id != id);
        state.toasts.len() != before
    }

    pub fn snapshot(&self) -> Vec<Notification> {
        self.inner.lock().toasts.clone()
    }

    pub fn last(&self) -> Option<Notification> {
        self.inner.lock().toasts.last().cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.inner.lock().toasts.clear();
    }
}

impl NotificationSink for ToastQueue {
    fn notify(&self, title: &str, body: &str, severity: Severity) {
        let mut state = self.inner.lock();
        let id = state.next_id;
        state.next_id += 1;
        state.toasts.push(Notification {
            id,
            title: title.to_string(),
            body: body.to_string(),
            severity,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_monotonic_across_dismissals() {
        let queue = ToastQueue::new();
        queue.notify("a", "b", Severity::Info);
        queue.notify("c", "d", Severity::Error);
        assert!(queue.dismiss(0));
        assert!(!queue.dismiss(0));
        queue.notify("e", "f", Severity::Success);

        let ids: Vec<u64> = queue.snapshot().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
