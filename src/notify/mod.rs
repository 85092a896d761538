use leptos::prelude::*;
use leptos_dom::helpers::set_timeout;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// How long a success toast stays on screen.
pub(crate) const SUCCESS_DISMISS_MS: u64 = 1500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NotificationLevel {
    Success,
    Error,
}

/// A transient, user-facing message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub text: String,
}

impl Notification {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            title: "Success!".to_string(),
            text: text.into(),
        }
    }

    pub fn error(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            title: title.into(),
            text: text.into(),
        }
    }

    /// Success toasts close themselves; errors wait for the user.
    pub fn auto_dismiss(&self) -> Option<Duration> {
        match self.level {
            NotificationLevel::Success => Some(Duration::from_millis(SUCCESS_DISMISS_MS)),
            NotificationLevel::Error => None,
        }
    }
}

pub(crate) trait Notifier {
    fn notify(&self, notification: Notification);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Toast {
    pub id: u64,
    pub notification: Notification,
}

static NEXT_TOAST_ID: AtomicU64 = AtomicU64::new(1);

/// Browser notifier: keeps the visible toasts in a signal rendered by `ToastStack`.
#[derive(Clone, Copy)]
pub(crate) struct ToastNotifier {
    pub toasts: RwSignal<Vec<Toast>>,
}

impl ToastNotifier {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(vec![]),
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }

    pub fn dismiss_all(&self) {
        self.toasts.set(vec![]);
    }
}

impl Default for ToastNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notification: Notification) {
        let id = NEXT_TOAST_ID.fetch_add(1, Ordering::SeqCst);
        let after = notification.auto_dismiss();

        self.toasts.update(|list| list.push(Toast { id, notification }));

        if let Some(after) = after {
            let this = *self;
            set_timeout(move || this.dismiss(id), after);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_notification_auto_dismisses() {
        let n = Notification::success("Note added.");
        assert_eq!(n.title, "Success!");
        assert_eq!(n.auto_dismiss(), Some(Duration::from_millis(1500)));
    }

    #[test]
    fn test_error_notification_is_sticky() {
        let n = Notification::error("Oops!", "Failed to fetch notes");
        assert_eq!(n.level, NotificationLevel::Error);
        assert!(n.auto_dismiss().is_none());
    }
}
