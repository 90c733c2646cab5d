use crate::api::{LeaveRequest, LeaveStatus};
use crate::pages::applied_leave::workflow::GrantSelection;
use chrono::NaiveDate;
use leptos::ev::KeyboardEvent;
use leptos::*;

pub fn date_label(date: &NaiveDate) -> String {
    date.format("%a, %d %b %Y").to_string()
}

/// Request details plus the clickable date grid used for partial grants.
#[component]
pub fn LeaveDateModal(
    viewing: RwSignal<Option<LeaveRequest>>,
    selection: RwSignal<GrantSelection>,
    #[prop(into)] busy: Signal<bool>,
    on_toggle: Callback<NaiveDate>,
    on_select_all: Callback<()>,
    on_clear: Callback<()>,
    on_grant: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let field = move |pick: fn(&LeaveRequest) -> String| {
        move || viewing.get().map(|r| pick(&r)).unwrap_or_default()
    };
    let selected_count = move || selection.with(GrantSelection::selected_count);
    let decidable = move || {
        viewing.with(|r| r.as_ref().map(|r| r.status == LeaveStatus::Pending).unwrap_or(false))
    };

    view! {
        <Show when=move || viewing.get().is_some()>
            <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
                <div class="fixed inset-0 bg-overlay-backdrop" on:click=move |_| on_close.call(())></div>
                <div
                    class="relative w-full max-w-2xl rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_close.call(());
                        }
                    }
                >
                    <div class="flex items-start justify-between">
                        <h2 class="text-lg font-semibold">{"Leave Application"}</h2>
                        <button type="button" aria-label="Close" class="text-fg-muted" on:click=move |_| on_close.call(())>
                            {"✕"}
                        </button>
                    </div>
                    <dl class="grid grid-cols-2 gap-2 text-sm">
                        <dt class="text-fg-muted">{"Employee"}</dt>
                        <dd>{field(|r| r.employee_name.clone())}</dd>
                        <dt class="text-fg-muted">{"From"}</dt>
                        <dd>{field(|r| r.start_date.clone())}</dd>
                        <dt class="text-fg-muted">{"To"}</dt>
                        <dd>{field(|r| r.end_date.clone())}</dd>
                        <dt class="text-fg-muted">{"Reason"}</dt>
                        <dd>{field(|r| r.reason.clone().unwrap_or_else(|| "-".into()))}</dd>
                    </dl>
                    <div>
                        <h3 class="text-sm font-semibold mb-2">{"Leave Dates (Click to Select)"}</h3>
                        <div class="flex flex-wrap gap-2">
                            <For
                                each=move || selection.with(|s| s.requested().to_vec())
                                key=|date| *date
                                children=move |date: NaiveDate| {
                                    let chip = move || {
                                        if selection.with(|s| s.is_selected(&date)) {
                                            "px-3 py-1 rounded-full text-xs border bg-action-primary-bg text-action-primary-text"
                                        } else {
                                            "px-3 py-1 rounded-full text-xs border border-border text-fg"
                                        }
                                    };
                                    view! {
                                        <button
                                            type="button"
                                            class=chip
                                            aria-pressed=move || selection.with(|s| s.is_selected(&date)).to_string()
                                            disabled=move || !decidable()
                                            on:click=move |_| on_toggle.call(date)
                                        >
                                            {date_label(&date)}
                                        </button>
                                    }
                                }
                            />
                        </div>
                        <p class="mt-2 text-xs text-fg-muted">
                            {move || format!("{} day(s) selected", selected_count())}
                        </p>
                    </div>
                    <div class="flex flex-wrap justify-end gap-2">
                        <Show when=decidable>
                            <button type="button" class="rounded-md px-3 py-2 text-sm border border-border" on:click=move |_| on_select_all.call(())>
                                {"Select All"}
                            </button>
                            <button type="button" class="rounded-md px-3 py-2 text-sm border border-border" on:click=move |_| on_clear.call(())>
                                {"Clear"}
                            </button>
                            <button
                                type="button"
                                class="rounded-md px-3 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                                disabled=move || busy.get()
                                on:click=move |_| on_grant.call(())
                            >
                                {"Grant Selected"}
                            </button>
                        </Show>
                        <button type="button" class="rounded-md px-3 py-2 text-sm bg-surface-muted" on:click=move |_| on_close.call(())>
                            {"Close"}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
