//! Notification surface.
//!
//! Every component reports outcomes through a [`Notifier`]; the
//! [`NotificationStack`] renders them in the top-right corner until
//! they time out or are closed.

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::config::NOTIFICATION_TIMEOUT_MS;
use crate::state::NotificationQueue;
use crate::types::{Notice, NoticeKind};

/// Handle shared by everything that shows notices.
#[derive(Clone, Copy)]
pub struct Notifier {
    queue: RwSignal<NotificationQueue>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            queue: create_rw_signal(NotificationQueue::new()),
        }
    }

    /// Show a notice until the timeout fires or the user closes it.
    pub fn notify(&self, notice: Notice) {
        match notice.kind {
            NoticeKind::Danger => log::warn!("🔔 {}", notice.message),
            _ => log::info!("🔔 {}", notice.message),
        }

        let now = chrono::Utc::now().timestamp_millis() as f64;
        let queue = self.queue;
        let id = queue.try_update(|q| {
            q.expire(now);
            q.push(notice, now)
        });

        if let Some(id) = id {
            Timeout::new(NOTIFICATION_TIMEOUT_MS, move || {
                queue.update(|q| {
                    q.dismiss(id);
                });
            })
            .forget();
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn NotificationStack(notifier: Notifier) -> impl IntoView {
    let queue = notifier.queue;

    view! {
        <div
            class="notification-stack"
            style="position: fixed; top: 20px; right: 20px; z-index: 9999; min-width: 300px;"
        >
            <For
                each=move || queue.with(|q| q.items().to_vec())
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    view! {
                        <div class=n.css_class() role="alert">
                            {n.message.clone()}
                            <button
                                type="button"
                                class="btn-close"
                                aria-label="Close"
                                on:click=move |_| notifier.dismiss(id)
                            ></button>
                        </div>
                    }
                }
            />
        </div>
    }
}
