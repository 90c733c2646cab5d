use crate::api::Shift;
use crate::components::{
    common::Button,
    error::InlineErrorMessage,
    guard::RequirePayroll,
    layout::{Layout, LoadingSpinner},
};
use crate::pages::shifts::{
    components::{form_modal::ShiftFormModal, list::ShiftList},
    view_model::use_shifts_view_model,
};
use leptos::*;

#[component]
pub fn ShiftsPage() -> impl IntoView {
    view! {
        <RequirePayroll>
            <Layout>
                <ShiftsPanel/>
            </Layout>
        </RequirePayroll>
    }
}

#[component]
fn ShiftsPanel() -> impl IntoView {
    let vm = use_shifts_view_model();
    let shifts = Signal::derive(move || {
        vm.shifts
            .get()
            .and_then(Result::ok)
            .unwrap_or_default()
    });
    let load_error = Signal::derive(move || vm.shifts.get().and_then(Result::err));
    let loading = vm.shifts.loading();

    view! {
        <section class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-semibold text-fg">{"Shifting"}</h1>
                <Button on_click=Callback::new(move |_| vm.open_create())>
                    {"New Shift"}
                </Button>
            </div>
            <InlineErrorMessage error=load_error/>
            <div class="bg-surface-elevated shadow overflow-x-auto">
                <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner/> }>
                    <ShiftList shifts=shifts on_edit=Callback::new(move |shift: Shift| vm.open_edit(&shift))/>
                </Show>
            </div>
            <ShiftFormModal
                form=vm.form
                saving=Signal::derive(move || vm.is_saving())
                on_submit=Callback::new(move |_| vm.submit())
                on_close=Callback::new(move |_| vm.close())
            />
        </section>
    }
}
