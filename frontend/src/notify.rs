//! User-visible transient notifications.
//!
//! The API client and the auth actions report each failure exactly once
//! through a [`Notifier`]; callers never re-report.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

pub trait Notifier {
    fn notify(&self, kind: ToastKind, message: &str);

    fn error(&self, message: &str) {
        self.notify(ToastKind::Error, message);
    }

    fn success(&self, message: &str) {
        self.notify(ToastKind::Success, message);
    }
}
