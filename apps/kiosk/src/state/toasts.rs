//! # Toast Queue
//!
//! The notifier the cart store talks to. Each notice becomes a toast with
//! an id and a dismissal deadline; toasts are drained into the next command
//! response. Dismissal timing is display-only and never touches the cart.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use summer_core::{Notifier, Severity};
use tracing::debug;
use uuid::Uuid;

/// Longest accepted toast duration (one day).
const MAX_TOAST_MS: u64 = 86_400_000;

/// A toast for the frontend to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
    /// When the frontend should auto-dismiss it.
    pub expires_at: DateTime<Utc>,
}

/// Shared, cloneable toast buffer.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: Arc<Mutex<Vec<Toast>>>,
    duration: Duration,
}

impl ToastQueue {
    pub fn new(duration_ms: u64) -> Self {
        ToastQueue {
            toasts: Arc::new(Mutex::new(Vec::new())),
            duration: Duration::milliseconds(duration_ms.min(MAX_TOAST_MS) as i64),
        }
    }

    /// Pushes a toast directly (used for command errors).
    pub fn push(&self, message: &str, severity: Severity) {
        let created_at = Utc::now();
        let toast = Toast {
            id: Uuid::new_v4(),
            message: message.to_string(),
            severity,
            created_at,
            expires_at: created_at + self.duration,
        };
        debug!(id = %toast.id, message = %toast.message, "Toast queued");
        self.toasts.lock().expect("Toast mutex poisoned").push(toast);
    }

    /// Takes all pending toasts, oldest first.
    pub fn drain(&self) -> Vec<Toast> {
        std::mem::take(&mut *self.toasts.lock().expect("Toast mutex poisoned"))
    }

    pub fn len(&self) -> usize {
        self.toasts.lock().expect("Toast mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, message: &str, severity: Severity) {
        self.push(message, severity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_becomes_toast() {
        let queue = ToastQueue::new(3000);
        queue.notify("Taro added to cart", Severity::Success);

        let toasts = queue.drain();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].message, "Taro added to cart");
        assert_eq!(
            toasts[0].expires_at - toasts[0].created_at,
            Duration::milliseconds(3000)
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn test_clones_share_buffer() {
        let queue = ToastQueue::new(1000);
        let handle = queue.clone();

        handle.notify("Cart cleared", Severity::Success);
        handle.notify("Cart cleared", Severity::Success);

        assert_eq!(queue.len(), 2);
        let toasts = queue.drain();
        assert_ne!(toasts[0].id, toasts[1].id);
    }

    #[test]
    fn test_toast_serialization() {
        let queue = ToastQueue::new(3000);
        queue.push("Oops", Severity::Error);

        let json = serde_json::to_value(&queue.drain()[0]).unwrap();
        assert_eq!(json["severity"], "error");
        assert!(json["expiresAt"].is_string());
    }
}
