//! Toast notifications
//!
//! Short acknowledgments ("message sent", "redirecting to booking") shown in
//! the corner of the page and dismissed on a timer.

use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;
use std::collections::VecDeque;

/// Maximum number of notifications to show at once
const MAX_NOTIFICATIONS: usize = 5;

/// How long a toast stays before fading out
pub const DEFAULT_DISMISS_MS: u32 = 5000;

/// Length of the exit transition
const EXIT_ANIMATION_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

impl NoticeKind {
    fn classes(&self) -> (&'static str, &'static str) {
        match self {
            NoticeKind::Success => ("border-secondary/40 bg-white", "text-secondary"),
            NoticeKind::Error => ("border-red-300 bg-red-50", "text-red-500"),
            NoticeKind::Info => ("border-primary/40 bg-white", "text-primary"),
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            NoticeKind::Success => icons::CHECK_CIRCLE,
            NoticeKind::Error => icons::ALERT_CIRCLE,
            NoticeKind::Info => icons::INFO,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
    /// `None` keeps the toast until it is closed by hand
    pub auto_dismiss_ms: Option<u32>,
}

impl Notice {
    fn new(kind: NoticeKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms: Some(DEFAULT_DISMISS_MS),
        }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, title, message)
    }

    /// Failures stay up until closed
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            auto_dismiss_ms: None,
            ..Self::new(NoticeKind::Error, title, message)
        }
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Info, title, message)
    }
}

/// Notice with unique ID for tracking
#[derive(Clone, Debug)]
pub struct NoticeItem {
    pub id: u64,
    pub notice: Notice,
}

/// Append, dropping the oldest entries beyond the cap
fn push_bounded(queue: &mut VecDeque<NoticeItem>, item: NoticeItem) {
    queue.push_back(item);
    while queue.len() > MAX_NOTIFICATIONS {
        queue.pop_front();
    }
}

/// Handle for raising toasts from any page
#[derive(Clone, Copy)]
pub struct NotificationManager {
    notices: RwSignal<VecDeque<NoticeItem>>,
    next_id: RwSignal<u64>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self {
            notices: RwSignal::new(VecDeque::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn notices(&self) -> RwSignal<VecDeque<NoticeItem>> {
        self.notices
    }

    pub fn notify(&self, notice: Notice) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        tracing::debug!(id, title = %notice.title, "notification raised");
        self.notices
            .update(|queue| push_bounded(queue, NoticeItem { id, notice }));
    }

    pub fn success(&self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(Notice::success(title, message));
    }

    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(Notice::error(title, message));
    }

    pub fn info(&self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(Notice::info(title, message));
    }

    pub fn dismiss(&self, id: u64) {
        self.notices.update(|queue| queue.retain(|item| item.id != id));
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide the notification manager to the component tree
pub fn provide_notifications() -> NotificationManager {
    let manager = NotificationManager::new();
    provide_context(manager);
    manager
}

/// Use the notification manager from anywhere in the component tree
pub fn use_notifications() -> NotificationManager {
    use_context::<NotificationManager>().expect("NotificationManager should be provided")
}

/// Toast stack, placed once at the app root
#[component]
pub fn NotificationsContainer() -> impl IntoView {
    let manager = use_notifications();
    let notices = manager.notices();

    view! {
        <div class="fixed top-24 right-4 z-[60] flex flex-col gap-2 w-full max-w-sm">
            <For
                each=move || notices.get()
                key=|item| item.id
                children=move |item| view! { <NoticeToast item=item manager=manager /> }
            />
        </div>
    }
}

#[component]
fn NoticeToast(item: NoticeItem, manager: NotificationManager) -> impl IntoView {
    let id = item.id;
    let notice = item.notice;
    let (is_exiting, set_is_exiting) = signal(false);

    if let Some(ms) = notice.auto_dismiss_ms {
        #[cfg(feature = "csr")]
        {
            use gloo_timers::future::TimeoutFuture;
            use leptos::task::spawn_local;

            spawn_local(async move {
                TimeoutFuture::new(ms).await;
                set_is_exiting.set(true);
                TimeoutFuture::new(EXIT_ANIMATION_MS).await;
                manager.dismiss(id);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (ms, set_is_exiting);
        }
    }

    let (container, accent) = notice.kind.classes();
    let container_class = format!(
        "flex items-start gap-3 p-4 rounded-xl border shadow-lg transition-all duration-300 {}",
        container
    );

    view! {
        <div
            class=container_class
            role="status"
            style=move || {
                if is_exiting.get() {
                    "opacity: 0; transform: translateX(1rem);"
                } else {
                    "opacity: 1; transform: translateX(0);"
                }
            }
        >
            <span class=accent>
                <Icon name=notice.kind.icon() class="w-5 h-5" />
            </span>
            <div class="flex-1 min-w-0">
                <h4 class="text-sm font-heading font-semibold text-foreground">{notice.title}</h4>
                <p class="text-sm text-foreground/70 mt-0.5 whitespace-pre-line">{notice.message}</p>
            </div>
            <button
                class="text-foreground/40 hover:text-foreground transition-colors"
                aria-label="Dismiss"
                on:click=move |_| manager.dismiss(id)
            >
                <Icon name=icons::X class="w-4 h-4" />
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64) -> NoticeItem {
        NoticeItem {
            id,
            notice: Notice::info("Heads up", format!("notice {id}")),
        }
    }

    #[test]
    fn test_notice_constructors() {
        let notice = Notice::success("Message sent", "Thanks");
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.auto_dismiss_ms, Some(DEFAULT_DISMISS_MS));
        assert_eq!(Notice::info("Booking", "Redirecting").auto_dismiss_ms, Some(DEFAULT_DISMISS_MS));

        let failure = Notice::error("Message not sent", "There is no message waiting to be sent");
        assert_eq!(failure.kind, NoticeKind::Error);
        assert_eq!(failure.auto_dismiss_ms, None);
        assert_eq!(failure.kind.icon(), icons::ALERT_CIRCLE);
    }

    #[test]
    fn test_queue_is_capped() {
        let mut queue = VecDeque::new();
        for id in 0..8 {
            push_bounded(&mut queue, item(id));
        }
        assert_eq!(queue.len(), MAX_NOTIFICATIONS);
        assert_eq!(queue.front().map(|i| i.id), Some(3));
        assert_eq!(queue.back().map(|i| i.id), Some(7));
    }
}
