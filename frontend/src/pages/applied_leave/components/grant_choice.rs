use crate::api::LeaveRequest;
use leptos::*;

/// Asks whether a pending request is granted in full or date by date.
#[component]
pub fn GrantChoiceDialog(
    request: RwSignal<Option<LeaveRequest>>,
    on_full: Callback<()>,
    on_partial: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || request.get().is_some()>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| on_cancel.call(())
                ></button>
                <div
                    class="relative z-[71] w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                >
                    <h2 class="text-lg font-semibold text-fg">{"Grant leave"}</h2>
                    <p class="text-sm text-fg-muted">
                        {"Do you want to grant full leave or partially grant selected dates?"}
                    </p>
                    <p class="text-sm font-medium">
                        {move || request.get().map(|r| r.employee_name).unwrap_or_default()}
                    </p>
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class="rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg"
                            on:click=move |_| on_cancel.call(())
                        >
                            {"Cancel"}
                        </button>
                        <button
                            type="button"
                            class="rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg border border-border"
                            on:click=move |_| on_partial.call(())
                        >
                            {"Partial Grant"}
                        </button>
                        <button
                            type="button"
                            class="rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text"
                            on:click=move |_| on_full.call(())
                        >
                            {"Full Grant"}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
