use crate::state::notifications::use_notifications;
use leptos::*;

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = use_notifications();
    let items = toasts.items();

    view! {
        <div class="fixed bottom-4 right-4 z-[80] flex flex-col gap-2 w-80" aria-live="polite">
            <For
                each=move || items.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("border rounded shadow px-4 py-3 text-sm flex items-start justify-between gap-3 {}", toast.kind.classes())>
                            <span>{toast.message}</span>
                            <button
                                type="button"
                                aria-label="Dismiss"
                                class="opacity-70 hover:opacity-100"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                {"✕"}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
