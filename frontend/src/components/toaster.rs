//! Toast notifications.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::config::TOAST_DURATION_MS;
use crate::notify::{Notifier, ToastKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub kind: ToastKind,
    pub message: String,
}

/// Visible toasts, newest last.
#[derive(Clone, Copy)]
pub struct ToastQueue {
    pub toasts: ReadSignal<Vec<Toast>>,
    set_toasts: WriteSignal<Vec<Toast>>,
}

impl ToastQueue {
    pub fn new() -> Self {
        let (toasts, set_toasts) = signal(Vec::new());
        Self { toasts, set_toasts }
    }

    pub fn notifier(&self) -> ToastNotifier {
        ToastNotifier {
            set_toasts: self.set_toasts,
        }
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Pushes toasts and removes each one after [`TOAST_DURATION_MS`].
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    set_toasts: WriteSignal<Vec<Toast>>,
}

impl Notifier for ToastNotifier {
    fn notify(&self, kind: ToastKind, message: &str) {
        let id = uuid::Uuid::new_v4().to_string();
        let toast = Toast {
            id: id.clone(),
            kind,
            message: message.to_string(),
        };
        self.set_toasts.update(|list| list.push(toast));

        let set_toasts = self.set_toasts;
        Timeout::new(TOAST_DURATION_MS, move || {
            set_toasts.update(|list| list.retain(|t| t.id != id));
        })
        .forget();
    }
}

#[component]
pub fn Toaster(queue: ToastQueue) -> impl IntoView {
    view! {
        <div class="toast toast-top toast-end z-50">
            <For
                each=move || queue.toasts.get()
                key=|toast| toast.id.clone()
                children=move |toast| {
                    let class = match toast.kind {
                        ToastKind::Success => "alert alert-success shadow-lg",
                        ToastKind::Error => "alert alert-error shadow-lg",
                    };
                    view! {
                        <div role="alert" class=class>
                            <span>{toast.message}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
