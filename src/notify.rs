//! Notifications
//!
//! Transient toasts raised by the outcome of async operations.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::error::CommandError;
use crate::handlers::Feedback;

/// Visual category of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Danger,
}

impl Severity {
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Success => "toast text-white bg-success",
            Severity::Info => "toast text-white bg-info",
            Severity::Warning => "toast bg-warning text-dark",
            Severity::Danger => "toast text-white bg-danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub severity: Severity,
}

/// Stack of visible toasts in insertion order
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    next_id: u32,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    /// Append a toast and return its id
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> u32 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            severity,
        });
        id
    }

    /// Remove a toast; unknown ids are ignored
    pub fn dismiss(&mut self, id: u32) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

}

/// Toast surface shared through context
#[derive(Clone, Copy)]
pub struct Notifier {
    queue: RwSignal<ToastQueue>,
    ttl_ms: u32,
}

impl Notifier {
    pub fn new(ttl_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
            ttl_ms,
        }
    }

    /// Show a toast that removes itself after the configured lifetime
    pub fn notify(&self, message: impl Into<String>, severity: Severity) {
        let message = message.into();
        log::debug!("[TOAST] {:?}: {}", severity, message);
        let mut id = 0;
        self.queue.update(|q| id = q.push(message, severity));

        let queue = self.queue;
        let ttl_ms = self.ttl_ms;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(ttl_ms).await;
            queue.update(|q| q.dismiss(id));
        });
    }

    /// Show the outcome of a handler
    pub fn show(&self, feedback: Feedback) {
        self.notify(feedback.message, feedback.severity);
    }

    pub fn error(&self, err: &CommandError) {
        self.show(Feedback::from(err));
    }

    pub fn dismiss(&self, id: u32) {
        self.queue.update(|q| q.dismiss(id));
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.with(|q| q.toasts().to_vec())
    }

    pub fn is_empty(&self) -> bool {
        self.queue.with(|q| q.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_stack_in_order() {
        let mut queue = ToastQueue::default();
        let a = queue.push("first", Severity::Info);
        let b = queue.push("first", Severity::Info);
        assert_ne!(a, b);
        // No deduplication
        assert_eq!(queue.toasts().len(), 2);
        assert_eq!(queue.toasts()[0].id, a);
    }

    #[test]
    fn test_dismiss_removes_only_target() {
        let mut queue = ToastQueue::default();
        let a = queue.push("saved", Severity::Success);
        let b = queue.push("failed", Severity::Danger);
        queue.dismiss(a);
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts().last().map(|t| t.id), Some(b));
        queue.dismiss(999);
        assert_eq!(queue.toasts().len(), 1);
        queue.dismiss(b);
        assert!(queue.is_empty());
    }
}
