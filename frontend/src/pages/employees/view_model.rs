use super::repository::EmployeeRepository;
use crate::api::{ApiClient, EmployeeRecord};
use crate::state::{
    list_fetch::{use_list_fetch, FetchState},
    list_query::{use_list_query, ListQuery, ListQueryController},
};
use leptos::*;
use std::rc::Rc;

/// "Showing a - b of n" for the current page; zero rows read "0 - 0".
pub fn showing_range(query: &ListQuery, rows_on_page: usize, total: u64) -> (u64, u64, u64) {
    if rows_on_page == 0 {
        return (0, 0, total);
    }
    let first = query.serial_number(0);
    let last = query.serial_number(rows_on_page - 1);
    (first, last, total)
}

#[derive(Clone, Copy)]
pub struct EmployeesViewModel {
    pub controller: ListQueryController,
    pub employees: RwSignal<FetchState<EmployeeRecord>>,
}

pub fn use_employees_view_model() -> EmployeesViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let repo = EmployeeRepository::new_with_client(Rc::new(api));
    let controller = use_list_query();
    let employees = use_list_fetch(repo, controller.query().into());

    create_effect(move |_| {
        let state = employees.get();
        if !state.is_loading && state.error.is_none() {
            controller.clamp_page(state.total_pages);
        }
    });

    EmployeesViewModel {
        controller,
        employees,
    }
}
