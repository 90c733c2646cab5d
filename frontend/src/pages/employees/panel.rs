use crate::components::{guard::RequirePayroll, layout::Layout, pagination::Pagination};
use crate::pages::employees::{
    components::{table::EmployeeTable, toolbar::EmployeeToolbar},
    view_model::{showing_range, use_employees_view_model},
};
use crate::state::list_query::{PageSize, SortKey, SortOrder};
use leptos::*;

#[component]
pub fn EmployeesPage() -> impl IntoView {
    view! {
        <RequirePayroll>
            <Layout>
                <EmployeesPanel/>
            </Layout>
        </RequirePayroll>
    }
}

#[component]
fn EmployeesPanel() -> impl IntoView {
    let vm = use_employees_view_model();
    let controller = vm.controller;
    let query = controller.query();
    let employees = vm.employees;

    let summary = move || {
        let (first, last, total) = employees.with(|state| {
            showing_range(&query.get(), state.rows.len(), state.total_count)
        });
        format!("Showing {} - {} of {}", first, last, total)
    };

    view! {
        <section class="space-y-6">
            <h1 class="text-2xl font-semibold text-fg">{"Employees"}</h1>
            <EmployeeToolbar
                search=controller.pending_search()
                sort_key=Signal::derive(move || query.with(|q| q.sort_key))
                sort_order=Signal::derive(move || query.with(|q| q.sort_order))
                page_size=Signal::derive(move || query.with(|q| q.page_size))
                on_search=Callback::new(move |text: String| controller.on_search_input(text))
                on_sort_key=Callback::new(move |key: SortKey| controller.set_sort_key(key))
                on_sort_order=Callback::new(move |order: SortOrder| controller.set_sort_order(order))
                on_page_size=Callback::new(move |size: PageSize| controller.set_page_size(size))
            />
            <div class="bg-surface-elevated shadow overflow-x-auto">
                <EmployeeTable
                    employees=Signal::derive(move || employees.with(|s| s.rows.clone()))
                    query=query
                    loading=Signal::derive(move || employees.with(|s| s.is_loading))
                />
            </div>
            <div class="flex flex-wrap items-center justify-between gap-4">
                <p class="text-sm text-fg-muted">{summary}</p>
                <Pagination
                    page=Signal::derive(move || query.with(|q| q.page))
                    total_pages=Signal::derive(move || employees.with(|s| s.total_pages))
                    on_change=Callback::new(move |page: u32| controller.set_page(page))
                />
            </div>
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::Role;
    use crate::state::{notifications::provide_notifications, refetch::provide_refetch_bus};
    use crate::test_support::helpers::provide_session_as;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_toolbar_and_empty_summary() {
        let html = render_to_string(|| {
            provide_session_as(Role::Developer);
            provide_notifications();
            provide_refetch_bus();
            view! { <EmployeesPage/> }
        });
        assert!(html.contains("Employees"));
        assert!(html.contains("Search name or ID..."));
        assert!(html.contains("Showing 0 - 0 of 0"));
    }
}
