use crate::api::{LeaveRequest, LeaveStatus};
use crate::components::{empty_state::TableMessageRow, layout::LoadingSpinner};
use leptos::*;

const COLUMNS: [&str; 9] = [
    "Employee ID",
    "Name",
    "Position",
    "Leave type",
    "Start",
    "End",
    "Day's",
    "Action",
    "Status",
];

/// Which row buttons apply to a request in `status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowActions {
    pub can_decide: bool,
    pub can_revoke: bool,
}

impl RowActions {
    pub fn for_status(status: LeaveStatus) -> Self {
        Self {
            can_decide: status == LeaveStatus::Pending,
            can_revoke: status == LeaveStatus::Approved,
        }
    }
}

pub fn status_badge_class(status: LeaveStatus) -> &'static str {
    match status {
        LeaveStatus::Pending => "bg-status-warning-bg text-status-warning-text",
        LeaveStatus::Approved => "bg-status-success-bg text-status-success-text",
        LeaveStatus::Declined => "bg-status-error-bg text-status-error-text",
        LeaveStatus::Cancelled => "bg-surface-muted text-fg-muted",
    }
}

#[component]
pub fn AppliedLeaveTable(
    #[prop(into)] leaves: Signal<Vec<LeaveRequest>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] busy: Signal<bool>,
    on_accept: Callback<LeaveRequest>,
    on_view: Callback<LeaveRequest>,
    on_decline: Callback<LeaveRequest>,
    on_revoke: Callback<LeaveRequest>,
) -> impl IntoView {
    let action_button = "px-3 py-1 rounded text-xs font-semibold disabled:opacity-40 disabled:cursor-not-allowed";

    view! {
        <div class="bg-surface-elevated shadow rounded-lg overflow-x-auto">
            <table class="min-w-full divide-y divide-border">
                <thead class="bg-surface-muted">
                    <tr>
                        {COLUMNS
                            .iter()
                            .map(|title| view! {
                                <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">{*title}</th>
                            })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    <Show when=move || loading.get() && leaves.get().is_empty()>
                        <tr><td colspan="9"><LoadingSpinner/></td></tr>
                    </Show>
                    <Show when=move || !loading.get() && leaves.get().is_empty()>
                        <TableMessageRow colspan=9 message="No leave requests found"/>
                    </Show>
                    <For
                        each=move || leaves.get()
                        key=|leave| (leave.id.clone(), leave.status, leave.granted_dates.len())
                        children=move |leave: LeaveRequest| {
                            let actions = RowActions::for_status(leave.status);
                            let disabled = move || !actions.can_decide || busy.get();
                            let stored = store_value(leave.clone());
                            let days = leave
                                .total_days
                                .map(|days| days.to_string())
                                .unwrap_or_else(|| leave.requested_dates.len().to_string());
                            view! {
                                <tr class="hover:bg-action-ghost-bg-hover">
                                    <td class="px-4 py-3 text-sm">{leave.employee_id.clone()}</td>
                                    <td class="px-4 py-3 text-sm font-medium">{leave.employee_name.clone()}</td>
                                    <td class="px-4 py-3 text-sm">{leave.position.clone()}</td>
                                    <td class="px-4 py-3 text-sm">{leave.leave_type.clone()}</td>
                                    <td class="px-4 py-3 text-sm">{leave.start_date.clone()}</td>
                                    <td class="px-4 py-3 text-sm">{leave.end_date.clone()}</td>
                                    <td class="px-4 py-3 text-sm">{days}</td>
                                    <td class="px-4 py-3 text-sm">
                                        <div class="flex gap-2">
                                            <button
                                                class=format!("{} bg-action-primary-bg text-action-primary-text", action_button)
                                                disabled=disabled
                                                on:click=move |_| on_accept.call(stored.get_value())
                                            >
                                                {"Accept"}
                                            </button>
                                            <button
                                                class=format!("{} bg-surface-muted text-fg border border-border", action_button)
                                                on:click=move |_| on_view.call(stored.get_value())
                                            >
                                                {"View"}
                                            </button>
                                            <button
                                                class=format!("{} bg-action-danger-bg text-action-danger-text", action_button)
                                                disabled=disabled
                                                on:click=move |_| on_decline.call(stored.get_value())
                                            >
                                                {"Decline"}
                                            </button>
                                            <Show when=move || actions.can_revoke>
                                                <button
                                                    class=format!("{} border border-action-danger-bg text-action-danger-bg", action_button)
                                                    disabled=move || busy.get()
                                                    on:click=move |_| on_revoke.call(stored.get_value())
                                                >
                                                    {"Revoke"}
                                                </button>
                                            </Show>
                                        </div>
                                    </td>
                                    <td class="px-4 py-3 text-sm">
                                        <span class=format!("px-2 py-1 rounded-full text-xs font-semibold {}", status_badge_class(leave.status))>
                                            {leave.status.label()}
                                        </span>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
