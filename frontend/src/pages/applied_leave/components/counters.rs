use crate::pages::applied_leave::workflow::LeaveCounters;
use leptos::*;

#[component]
fn CounterCard(label: &'static str, #[prop(into)] value: Signal<usize>, accent: &'static str) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-4 border border-border">
            <p class="text-sm text-fg-muted">{label}</p>
            <p class=format!("text-2xl font-semibold {}", accent)>{move || value.get()}</p>
        </div>
    }
}

#[component]
pub fn LeaveCountersBar(#[prop(into)] counters: Signal<LeaveCounters>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
            <CounterCard label="Total Requests" value=Signal::derive(move || counters.get().total) accent="text-fg"/>
            <CounterCard label="Approved" value=Signal::derive(move || counters.get().approved) accent="text-status-success-text"/>
            <CounterCard label="Pending" value=Signal::derive(move || counters.get().pending) accent="text-status-warning-text"/>
        </div>
    }
}
