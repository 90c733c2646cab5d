use crate::api::Month;
use crate::components::{guard::RequirePayroll, layout::Layout, pagination::Pagination};
use crate::pages::salary_sheet::{
    components::{table::SalaryTable, toolbar::SalaryToolbar},
    view_model::{use_salary_sheet_view_model, ExportKind},
};
use crate::state::list_query::PageSize;
use leptos::*;

#[component]
pub fn SalarySheetPage() -> impl IntoView {
    view! {
        <RequirePayroll>
            <Layout>
                <SalarySheetPanel/>
            </Layout>
        </RequirePayroll>
    }
}

#[component]
fn SalarySheetPanel() -> impl IntoView {
    let vm = use_salary_sheet_view_model();
    let list_query = vm.controller.query();
    let rows = Signal::derive(move || vm.sheet.with(|s| s.rows.clone()));
    let loading = Signal::derive(move || vm.sheet.with(|s| s.is_loading));
    let total_pages = Signal::derive(move || vm.sheet.with(|s| s.total_pages));
    let page = Signal::derive(move || list_query.with(|q| q.page));

    view! {
        <div class="space-y-6">
            <div class="flex flex-wrap items-center justify-between gap-4">
                <h2 class="text-2xl font-semibold text-fg">{"Salary Sheet"}</h2>
                <SalaryToolbar
                    month=vm.month
                    page_size=Signal::derive(move || list_query.with(|q| q.page_size))
                    search=vm.controller.pending_search()
                    exporting_sheet=Signal::derive(move || vm.is_exporting(ExportKind::Spreadsheet))
                    exporting_letter=Signal::derive(move || vm.is_exporting(ExportKind::TransferLetter))
                    on_search=Callback::new(move |text: String| vm.on_search_input(text))
                    on_month=Callback::new(move |month: Option<Month>| vm.select_month(month))
                    on_page_size=Callback::new(move |size: PageSize| vm.set_page_size(size))
                    on_export_sheet=Callback::new(move |_| vm.export(ExportKind::Spreadsheet))
                    on_export_letter=Callback::new(move |_| vm.export(ExportKind::TransferLetter))
                />
            </div>
            <div class="border border-border shadow overflow-x-auto">
                <Show
                    when=move || vm.month.with(Option::is_some)
                    fallback=|| view! {
                        <div class="text-center text-fg-muted py-10">
                            {"Please select a month to view salary sheet."}
                        </div>
                    }
                >
                    <SalaryTable rows=rows query=list_query loading=loading/>
                </Show>
            </div>
            <Show when=move || vm.month.with(Option::is_some)>
                <Pagination
                    page=page
                    total_pages=total_pages
                    on_change=Callback::new(move |p: u32| vm.set_page(p))
                />
            </Show>
        </div>
    }
}
