pub mod applied_leave;
pub mod dashboard;
pub mod employees;
pub mod salary_sheet;
pub mod shifts;

pub use applied_leave::AppliedLeavePage;
pub use dashboard::DashboardPage;
pub use employees::EmployeesPage;
pub use salary_sheet::SalarySheetPage;
pub use shifts::ShiftsPage;
