//! Toast notifications.
//!
//! Fire-and-forget messages with a severity flag. Each toast dismisses
//! itself after [`TOAST_DISMISS_MS`](crate::config::TOAST_DISMISS_MS) or
//! when clicked.

use std::cell::Cell;

use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::config::TOAST_DISMISS_MS;
use crate::types::{Toast, ToastKind};

thread_local! {
    static NEXT_TOAST_ID: Cell<u64> = Cell::new(0);
}

/// Push a toast and schedule its auto-dismissal.
pub fn push_toast(set_toasts: WriteSignal<Vec<Toast>>, kind: ToastKind, title: &str, message: &str) {
    let id = NEXT_TOAST_ID.with(|next| {
        let id = next.get();
        next.set(id + 1);
        id
    });

    set_toasts.update(|toasts| {
        toasts.push(Toast {
            id,
            kind,
            title: title.to_string(),
            message: message.to_string(),
        });
    });

    spawn_local(async move {
        TimeoutFuture::new(TOAST_DISMISS_MS).await;
        set_toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
    });
}

/// Renders the current toast stack in a fixed overlay.
#[component]
pub fn ToastHost(
    toasts: ReadSignal<Vec<Toast>>,
    set_toasts: WriteSignal<Vec<Toast>>,
) -> impl IntoView {
    view! {
        <div class="toast-host">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let dismiss = move |_| {
                        set_toasts.update(|toasts| toasts.retain(|entry| entry.id != id));
                    };

                    view! {
                        <div class=format!("toast {}", toast.kind.css_class()) on:click=dismiss>
                            <div class="toast-title">{toast.kind.emoji()} " " {toast.title.clone()}</div>
                            <div class="toast-message">{toast.message.clone()}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}
