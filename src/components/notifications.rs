//! Toast notification stack.

use leptos::prelude::*;

use crate::state::notify::{NotifyState, ToastKind};

/// How long a toast stays up before auto-dismissal.
#[cfg(feature = "hydrate")]
const TOAST_MILLIS: u32 = 3_000;

/// Push a toast and schedule its auto-dismissal.
pub fn push_toast(notify: RwSignal<NotifyState>, kind: ToastKind, message: impl Into<String>) {
    let id = {
        let message = message.into();
        let mut pushed = None;
        notify.update(|state| pushed = Some(state.push(kind, message)));
        pushed
    };

    #[cfg(feature = "hydrate")]
    if let Some(id) = id {
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MILLIS).await;
            notify.update(|state| state.dismiss(&id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Fixed-position toast container; clicking a toast dismisses it early.
#[component]
pub fn Notifications() -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();

    view! {
        <div class="toasts">
            {move || {
                notify
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let class = match toast.kind {
                            ToastKind::Info => "toast toast--info",
                            ToastKind::Success => "toast toast--success",
                            ToastKind::Error => "toast toast--error",
                        };
                        let id = toast.id.clone();
                        view! {
                            <div
                                class=class
                                on:click=move |_| {
                                    let id = id.clone();
                                    notify.update(|state| state.dismiss(&id));
                                }
                            >
                                {toast.message}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
