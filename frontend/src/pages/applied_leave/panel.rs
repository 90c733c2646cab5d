use crate::api::LeaveRequest;
use crate::components::{
    confirm_dialog::ConfirmDialog, error::InlineErrorMessage, guard::RequirePayroll, layout::Layout,
};
use crate::pages::applied_leave::{
    components::{
        counters::LeaveCountersBar, date_modal::LeaveDateModal, grant_choice::GrantChoiceDialog,
        list::AppliedLeaveTable,
    },
    view_model::use_applied_leave_view_model,
};
use chrono::NaiveDate;
use leptos::*;

#[component]
pub fn AppliedLeavePage() -> impl IntoView {
    view! {
        <RequirePayroll>
            <Layout>
                <AppliedLeavePanel/>
            </Layout>
        </RequirePayroll>
    }
}

#[component]
fn AppliedLeavePanel() -> impl IntoView {
    let vm = use_applied_leave_view_model();
    let leaves = Signal::from(vm.shown);
    let load_error = Signal::derive(move || vm.load_error());
    let loading = vm.leaves.loading();
    let busy = Signal::derive(move || vm.is_submitting());
    let counters = Signal::derive(move || vm.counters());

    let on_accept = Callback::new(move |request: LeaveRequest| vm.open_grant_choice(request));
    let on_view = Callback::new(move |request: LeaveRequest| vm.open_view(request));
    let on_decline = Callback::new(move |request: LeaveRequest| vm.decline(&request));
    let on_revoke = Callback::new(move |request: LeaveRequest| vm.ask_revoke(&request));

    let revoke_open = Signal::derive(move || vm.pending_revoke.with(Option::is_some));
    let revoke_message = Signal::derive(move || {
        vm.pending_revoke
            .get()
            .map(|pending| pending.prompt())
            .unwrap_or_default()
    });

    view! {
        <div class="space-y-6">
            <h1 class="text-2xl font-semibold text-fg">{"Applied Leave"}</h1>
            <LeaveCountersBar counters=counters/>
            <InlineErrorMessage error=load_error/>
            <AppliedLeaveTable
                leaves=leaves
                loading=loading
                busy=busy
                on_accept=on_accept
                on_view=on_view
                on_decline=on_decline
                on_revoke=on_revoke
            />
            <GrantChoiceDialog
                request=vm.grant_choice
                on_full=Callback::new(move |_| vm.choose_full_grant())
                on_partial=Callback::new(move |_| vm.choose_partial_grant())
                on_cancel=Callback::new(move |_| vm.cancel_grant_choice())
            />
            <LeaveDateModal
                viewing=vm.viewing
                selection=vm.selection
                busy=busy
                on_toggle=Callback::new(move |date: NaiveDate| vm.toggle_date(date))
                on_select_all=Callback::new(move |_| vm.select_all())
                on_clear=Callback::new(move |_| vm.clear_selection())
                on_grant=Callback::new(move |_| vm.grant_selected())
                on_close=Callback::new(move |_| vm.close_view())
            />
            <ConfirmDialog
                is_open=revoke_open
                title="Revoke granted leave?"
                message=revoke_message
                confirm_label="Revoke"
                confirm_disabled=busy
                destructive=true
                on_confirm=Callback::new(move |_| vm.confirm_revoke())
                on_cancel=Callback::new(move |_| vm.cancel_revoke())
            />
        </div>
    }
}
