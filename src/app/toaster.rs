use leptos::prelude::*;

use crate::notify::{NotificationKind, NotificationQueue};

/// Transient notifications pinned to the bottom-right corner. Click to dismiss.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<NotificationQueue>>();

    view! {
        <Show when=move || !toasts.with(NotificationQueue::is_empty)>
            <div class="fixed bottom-4 right-4 z-[100] flex flex-col gap-2" aria-live="polite">
                <For
                    each=move || toasts.with(|q| q.items().to_vec())
                    key=|n| n.id
                    children=move |n| {
                        let id = n.id;
                        let icon = match n.kind {
                            NotificationKind::Success => "✓",
                        };
                        view! {
                            <div
                                role="status"
                                class="flex items-center gap-3 max-w-sm px-4 py-3 rounded-lg bg-slate-800/95 border border-green-500/40 text-gray-100 shadow-lg cursor-pointer animate-fade-in"
                                on:click=move |_| {
                                    toasts
                                        .update(|q| {
                                            q.dismiss(id);
                                        });
                                }
                            >
                                <span class="text-green-400 font-bold">{icon}</span>
                                <span class="text-sm">{n.message}</span>
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}
