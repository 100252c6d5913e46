use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use leptos::prelude::*;

use super::{use_page_config, use_task_group};
use crate::contact::Notification;
use crate::schedule::{BrowserScheduler, TaskGroup};

/// Shows one notification at a time; a newer one replaces the current one.
#[derive(Clone)]
pub struct Toasts {
    current: RwSignal<Option<(u64, Notification)>>,
    next_id: Arc<AtomicU64>,
    dismiss_after: Duration,
    tasks: TaskGroup<BrowserScheduler>,
}

impl Toasts {
    pub fn notify(&self, notification: Notification) {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.current.set(Some((id, notification)));

        let current = self.current;
        self.tasks.spawn_after(self.dismiss_after, move || {
            current.try_update(|c| {
                if matches!(c, Some((shown, _)) if *shown == id) {
                    *c = None;
                }
            });
        });
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }
}

pub fn provide_toasts() {
    provide_context(Toasts {
        current: RwSignal::new(None),
        next_id: Arc::new(AtomicU64::new(0)),
        dismiss_after: use_page_config().toast_duration,
        tasks: use_task_group(),
    });
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();
    let current = toasts.current;

    view! {
        <div class="fixed bottom-4 right-4 z-[100] w-full max-w-sm" role="status" aria-live="polite">
            {move || {
                let toasts = toasts.clone();
                current
                    .get()
                    .map(|(_, n)| {
                        view! {
                            <div class="relative bg-card border border-border rounded-lg p-4 pr-8 shadow-strong fade-in-up">
                                <div class="font-semibold text-foreground">{n.title}</div>
                                <div class="text-sm text-muted-foreground">{n.description}</div>
                                <button
                                    class="absolute top-2 right-2 text-muted-foreground hover:text-foreground"
                                    on:click=move |_| toasts.dismiss()
                                    aria-label="Dismiss notification"
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
