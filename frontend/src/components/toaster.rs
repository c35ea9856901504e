use leptos::prelude::*;
use serenova_shared::Notification;

use crate::toast::use_toast;

/// 通知宿主，渲染队列中的全部通知（最新在上）
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toast();
    let queue = toasts.queue();

    view! {
        <div class="toast toast-top toast-end z-50">
            <For
                each=move || queue.with(|q| q.iter().cloned().collect::<Vec<Notification>>())
                key=|n| n.id
                children=move |n: Notification| {
                    let id = n.id;
                    let class = if n.notice.is_destructive() {
                        "alert alert-error shadow-lg"
                    } else {
                        "alert alert-success shadow-lg"
                    };
                    view! {
                        <div role="alert" class=class>
                            <div class="flex flex-col">
                                <span class="font-semibold">{n.notice.title}</span>
                                <span class="text-sm">{n.notice.description}</span>
                            </div>
                            <button
                                class="btn btn-ghost btn-xs"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
