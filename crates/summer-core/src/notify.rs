//! # Notifications
//!
//! The cart store reports every mutation through a [`Notifier`]. The app
//! decides where notices go (a toast queue, a log, nowhere).
//!
//! ```text
//! CartStore::add_to_cart ──► notifier.notify("Taro added to cart", Success)
//!                                  │
//!             ┌────────────────────┼─────────────────────┐
//!             ▼                    ▼                     ▼
//!      SilentNotifier      RecordingNotifier      |msg, sev| { ... }
//!       (drops it)        (shared Vec<Notice>)       (closure)
//! ```

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How a notice should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Severity {
    #[default]
    Success,
    Error,
    Info,
}

/// Receives a message after each cart mutation.
pub trait Notifier {
    fn notify(&self, message: &str, severity: Severity);
}

impl<F> Notifier for F
where
    F: Fn(&str, Severity),
{
    fn notify(&self, message: &str, severity: Severity) {
        self(message, severity)
    }
}

/// Discards every notice.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, _message: &str, _severity: Severity) {}
}

/// One recorded notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

/// Collects notices in memory.
///
/// Clones share the same buffer, so one clone can be handed to the store
/// while another drains it.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies the recorded notices, oldest first.
    pub fn notices(&self) -> Vec<Notice> {
        self.lock().clone()
    }

    /// Takes all recorded notices, leaving the buffer empty.
    pub fn drain(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.lock())
    }

    /// Message text of the newest notice.
    pub fn last_message(&self) -> Option<String> {
        self.lock().last().map(|n| n.message.clone())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Notice>> {
        // A panic while holding this lock cannot leave the Vec half-written
        self.notices.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        self.lock().push(Notice {
            message: message.to_string(),
            severity,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_recording_notifier_shares_buffer() {
        let recorder = RecordingNotifier::new();
        let handle = recorder.clone();

        recorder.notify("Cart cleared", Severity::Success);
        recorder.notify("heads up", Severity::Info);

        assert_eq!(handle.last_message().as_deref(), Some("heads up"));
        let drained = handle.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].severity, Severity::Success);
        assert!(recorder.notices().is_empty());
    }

    #[test]
    fn test_closure_notifier() {
        let seen = RefCell::new(Vec::new());
        let notifier = |message: &str, severity: Severity| {
            seen.borrow_mut().push((message.to_string(), severity));
        };

        notifier.notify("Taro added to cart", Severity::Success);

        assert_eq!(
            seen.into_inner(),
            vec![("Taro added to cart".to_string(), Severity::Success)]
        );
    }

    #[test]
    fn test_severity_wire_names() {
        assert_eq!(serde_json::to_string(&Severity::Success).unwrap(), "\"success\"");
        assert_eq!(serde_json::to_string(&Severity::Error).unwrap(), "\"error\"");
    }
}
