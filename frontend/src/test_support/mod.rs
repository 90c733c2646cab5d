#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{CurrentUser, LeaveRequest, LeaveStatus, Role, SalaryRow};
    use crate::state::session::SessionContext;
    use chrono::NaiveDate;
    use leptos::*;

    pub fn user_with_role(role: Role) -> CurrentUser {
        CurrentUser {
            email: format!("{}@example.com", role.as_str().to_lowercase()),
            name: format!("{} User", role.as_str()),
            role,
        }
    }

    pub fn provide_session_as(role: Role) -> SessionContext {
        let session = SessionContext::signed_in(user_with_role(role));
        provide_context(session);
        session
    }

    /// Leave request whose dates are days of April 2025.
    pub fn leave_request(
        id: &str,
        status: LeaveStatus,
        requested_days: &[u32],
        granted_days: &[u32],
    ) -> LeaveRequest {
        let day = |d: &u32| NaiveDate::from_ymd_opt(2025, 4, *d).unwrap();
        LeaveRequest {
            id: id.into(),
            employee_id: "WB0012".into(),
            employee_name: "Nila Akter".into(),
            position: "Accountant".into(),
            leave_type: "Sick".into(),
            start_date: requested_days.first().map(|d| day(d).to_string()).unwrap_or_default(),
            end_date: requested_days.last().map(|d| day(d).to_string()).unwrap_or_default(),
            total_days: Some(requested_days.len() as u32),
            requested_dates: requested_days.iter().map(day).collect(),
            granted_dates: granted_days.iter().map(day).collect(),
            status,
            reason: Some("fever".into()),
        }
    }

    pub fn salary_row(name: &str, total: f64) -> SalaryRow {
        SalaryRow {
            name: name.into(),
            email: format!("{}@example.com", name.to_lowercase()),
            account_number: "2781100000001".into(),
            salary: 30_000.0,
            per_day_salary: 1_000.0,
            present: Some(26),
            absent: Some(4),
            total,
        }
    }
}
