use leptos::*;
use leptos_router::*;

use crate::{
    components::toast::ToastStack,
    pages::{AppliedLeavePage, DashboardPage, EmployeesPage, SalarySheetPage, ShiftsPage},
    state::{
        notifications::provide_notifications, refetch::provide_refetch_bus,
        session::SessionProvider,
    },
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/dashboard",
    "/employees",
    "/shifting",
    "/applied-leave",
    "/salary-sheet",
];

/// Routes that only payroll roles (admin, developer, HR admin) may open.
pub const PAYROLL_ROUTE_PATHS: &[&str] =
    &["/employees", "/shifting", "/applied-leave", "/salary-sheet"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    provide_notifications();
    provide_refetch_bus();
    view! {
        <SessionProvider>
            <Router>
                <Routes>
                    <Route path="/" view=DashboardPage/>
                    <Route path="/dashboard" view=DashboardPage/>
                    <Route path="/employees" view=EmployeesPage/>
                    <Route path="/shifting" view=ShiftsPage/>
                    <Route path="/applied-leave" view=AppliedLeavePage/>
                    <Route path="/salary-sheet" view=SalarySheetPage/>
                </Routes>
            </Router>
            <ToastStack/>
        </SessionProvider>
    }
}
