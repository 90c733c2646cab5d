use chrono::NaiveDate;
use leptos::{IntoView, View};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Developer,
    HrAdmin,
    Client,
    #[default]
    Employee,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Developer => "Developer",
            Role::HrAdmin => "HR-ADMIN",
            Role::Client => "client",
            Role::Employee => "employee",
        }
    }

    /// Payroll screens (employees, shifting, applied leave, salary sheet).
    pub fn can_manage_payroll(&self) -> bool {
        matches!(self, Role::Admin | Role::Developer | Role::HrAdmin)
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        match value.trim() {
            "Admin" => Role::Admin,
            "Developer" => Role::Developer,
            "HR-ADMIN" => Role::HrAdmin,
            "client" => Role::Client,
            _ => Role::Employee,
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Role::from(value.as_str())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl Serialize for Role {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map(Role::from).unwrap_or(Role::Employee))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub eid: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub designation: String,
    #[serde(default)]
    pub branch: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeListResponse {
    #[serde(default)]
    pub data: Vec<EmployeeRecord>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub total_pages: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRow {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub account_number: String,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub salary: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub per_day_salary: f64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub present: Option<u32>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub absent: Option<u32>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub total: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalarySheetResponse {
    #[serde(default)]
    pub data: Vec<SalaryRow>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub total_pages: u32,
}

/// Reporting period for salary sheets; travels as the English month name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    pub fn parse(value: &str) -> Option<Month> {
        let value = value.trim();
        Month::ALL
            .iter()
            .copied()
            .find(|month| month.name().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeaveStatus {
    Pending,
    Approved,
    Declined,
    Cancelled,
}

impl LeaveStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Declined => "Declined",
            LeaveStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub employee_id: String,
    #[serde(default)]
    pub employee_name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub leave_type: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_days: Option<u32>,
    #[serde(rename = "leaveDates", default, deserialize_with = "lenient_dates")]
    pub requested_dates: Vec<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_dates")]
    pub granted_dates: Vec<NaiveDate>,
    pub status: LeaveStatus,
    #[serde(default)]
    pub reason: Option<String>,
}

impl LeaveRequest {
    /// Decodes records one by one so a malformed entry only drops itself.
    pub fn from_records(records: Vec<Value>) -> Vec<LeaveRequest> {
        records
            .into_iter()
            .filter_map(|record| match serde_json::from_value::<LeaveRequest>(record) {
                Ok(leave) => Some(leave),
                Err(err) => {
                    log::warn!("skipping unreadable leave record: {}", err);
                    None
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrantLeaveRequest {
    pub granted_dates: Vec<NaiveDate>,
    pub declined_dates: Vec<NaiveDate>,
    pub granted_by: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevokeGrantRequest {
    pub revoked_dates: Vec<NaiveDate>,
    pub revoked_by: String,
    pub set_status_to: LeaveStatus,
}

/// Acknowledgement returned by the leave mutation endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationAck {
    #[serde(default)]
    pub modified_count: Option<u64>,
    #[serde(default)]
    pub message: Option<String>,
}

impl MutationAck {
    pub fn is_applied(&self) -> bool {
        self.modified_count.map(|count| count > 0).unwrap_or(false)
            || self
                .message
                .as_deref()
                .map(|msg| !msg.trim().is_empty())
                .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WeekDay {
    Friday,
    Saturday,
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
}

impl WeekDay {
    pub const ALL: [WeekDay; 7] = [
        WeekDay::Friday,
        WeekDay::Saturday,
        WeekDay::Sunday,
        WeekDay::Monday,
        WeekDay::Tuesday,
        WeekDay::Wednesday,
        WeekDay::Thursday,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WeekDay::Friday => "Friday",
            WeekDay::Saturday => "Saturday",
            WeekDay::Sunday => "Sunday",
            WeekDay::Monday => "Monday",
            WeekDay::Tuesday => "Tuesday",
            WeekDay::Wednesday => "Wednesday",
            WeekDay::Thursday => "Thursday",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub shift_name: String,
    #[serde(default)]
    pub branch: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default, deserialize_with = "lenient_minutes")]
    pub late_after_minutes: u32,
    #[serde(default, deserialize_with = "lenient_minutes")]
    pub absent_after_minutes: u32,
    #[serde(rename = "allowOT", default)]
    pub allow_ot: bool,
    #[serde(default)]
    pub weekends: Vec<WeekDay>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftSubmission {
    #[serde(flatten)]
    pub shift: Shift,
    pub user_email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShiftAck {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(number)) => number.as_f64().unwrap_or(0.0),
        Some(Value::String(raw)) => raw.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    })
}

// Accepts `YYYY-MM-DD` as well as full timestamps; anything else is dropped.
fn lenient_dates<'de, D>(deserializer: D) -> Result<Vec<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<Value>>::deserialize(deserializer)?;
    Ok(values
        .unwrap_or_default()
        .iter()
        .filter_map(|value| {
            let raw = value.as_str()?;
            let day = raw.get(..10).unwrap_or(raw);
            match NaiveDate::parse_from_str(day, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    log::warn!("ignoring unreadable leave date {:?}", raw);
                    None
                }
            }
        })
        .collect())
}

fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(number)) => number
            .as_u64()
            .or_else(|| number.as_f64().map(|f| f.max(0.0).round() as u64))
            .and_then(|n| u32::try_from(n).ok()),
        Some(Value::String(raw)) => raw.trim().parse::<u32>().ok(),
        _ => None,
    })
}

fn lenient_minutes<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_count(deserializer).map(|value| value.unwrap_or(0))
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.code == "VALIDATION_ERROR"
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use leptos::IntoView;
    use serde_json::json;

    #[test]
    fn api_error_helpers_set_expected_codes() {
        let validation = ApiError::validation("invalid payload");
        assert_eq!(validation.code, "VALIDATION_ERROR");
        assert!(validation.is_validation());
        assert!(validation.details.is_none());

        assert_eq!(ApiError::unknown("something failed").code, "UNKNOWN");
        assert_eq!(
            ApiError::request_failed("network error").code,
            "REQUEST_FAILED"
        );
    }

    #[test]
    fn api_error_display_and_string_conversion_match_error_text() {
        let error = ApiError::unknown("boom");
        assert_eq!(format!("{}", error), "boom");

        let raw: String = ApiError::validation("bad input").into();
        assert_eq!(raw, "bad input");
    }

    #[test]
    fn api_error_can_be_converted_to_view() {
        let _: View = ApiError::request_failed("request failed").into_view();
    }

    #[test]
    fn role_parses_wire_strings_and_falls_back_to_employee() {
        assert_eq!(Role::from("Admin"), Role::Admin);
        assert_eq!(Role::from("Developer"), Role::Developer);
        assert_eq!(Role::from("HR-ADMIN"), Role::HrAdmin);
        assert_eq!(Role::from("client"), Role::Client);
        assert_eq!(Role::from("employee"), Role::Employee);
        assert_eq!(Role::from("something-else"), Role::Employee);

        let user: CurrentUser = serde_json::from_value(json!({
            "email": "hr@example.com",
            "role": "HR-ADMIN"
        }))
        .unwrap();
        assert_eq!(user.role, Role::HrAdmin);
        assert!(user.role.can_manage_payroll());
        assert!(!Role::Client.can_manage_payroll());
        assert!(!Role::Employee.can_manage_payroll());
    }

    #[test]
    fn deserialize_leave_request_with_mongo_id_and_dates() {
        let leave: LeaveRequest = serde_json::from_value(json!({
            "_id": "lv-1",
            "employeeId": "WB000166",
            "employeeName": "Somiya Akter",
            "position": "Executive",
            "leaveType": "Casual",
            "startDate": "2025-01-10",
            "endDate": "2025-01-12",
            "totalDays": 3,
            "leaveDates": ["2025-01-10", "2025-01-11", "2025-01-12"],
            "status": "Pending",
            "reason": "Family event"
        }))
        .unwrap();
        assert_eq!(leave.id, "lv-1");
        assert_eq!(leave.requested_dates.len(), 3);
        assert!(leave.granted_dates.is_empty());
        assert_eq!(leave.status, LeaveStatus::Pending);
        assert_eq!(leave.total_days, Some(3));
    }

    #[test]
    fn leave_dates_accept_timestamps() {
        let leave: LeaveRequest = serde_json::from_value(json!({
            "_id": "lv-2",
            "leaveDates": ["2025-01-10T00:00:00.000Z", "2025-01-11", "soon"],
            "grantedDates": null,
            "status": "Approved"
        }))
        .unwrap();
        assert_eq!(
            leave.requested_dates,
            vec![
                NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
                NaiveDate::from_ymd_opt(2025, 1, 11).unwrap(),
            ]
        );
        assert!(leave.granted_dates.is_empty());
    }

    #[test]
    fn unreadable_leave_records_are_skipped() {
        let leaves = LeaveRequest::from_records(vec![
            json!({ "_id": "ok", "leaveDates": ["2025-01-10"], "status": "Pending" }),
            json!({ "_id": "odd", "leaveDates": ["2025-01-10"], "status": "Escalated" }),
            json!("not a record"),
        ]);
        assert_eq!(leaves.len(), 1);
        assert_eq!(leaves[0].id, "ok");
    }

    #[test]
    fn salary_row_reads_amounts_leniently() {
        let row: SalaryRow = serde_json::from_value(json!({
            "name": "Aisha Rahman",
            "accountNumber": "123",
            "salary": "30000",
            "perDaySalary": 1000.5,
            "present": 20,
            "absent": null,
            "total": "not-a-number"
        }))
        .unwrap();
        assert_eq!(row.salary, 30000.0);
        assert_eq!(row.per_day_salary, 1000.5);
        assert_eq!(row.present, Some(20));
        assert_eq!(row.absent, None);
        assert_eq!(row.total, 0.0);
        assert_eq!(row.email, "");
    }

    #[test]
    fn serialize_grant_and_revoke_payloads_in_camel_case() {
        let grant = GrantLeaveRequest {
            granted_dates: vec![NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()],
            declined_dates: vec![],
            granted_by: "hr@example.com".into(),
        };
        let value = serde_json::to_value(&grant).unwrap();
        assert_eq!(value["grantedDates"], json!(["2025-01-10"]));
        assert_eq!(value["declinedDates"], json!([]));
        assert_eq!(value["grantedBy"], json!("hr@example.com"));

        let revoke = RevokeGrantRequest {
            revoked_dates: vec![NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()],
            revoked_by: "hr@example.com".into(),
            set_status_to: LeaveStatus::Cancelled,
        };
        let value = serde_json::to_value(&revoke).unwrap();
        assert_eq!(value["setStatusTo"], json!("Cancelled"));
        assert_eq!(value["revokedBy"], json!("hr@example.com"));
    }

    #[test]
    fn month_parses_names_case_insensitively() {
        assert_eq!(Month::parse("march"), Some(Month::March));
        assert_eq!(Month::parse(" December "), Some(Month::December));
        assert_eq!(Month::parse(""), None);
        assert_eq!(serde_json::to_value(Month::July).unwrap(), json!("July"));
    }

    #[test]
    fn mutation_ack_requires_modified_count_or_message() {
        assert!(!MutationAck::default().is_applied());
        assert!(!MutationAck {
            modified_count: Some(0),
            message: None
        }
        .is_applied());
        assert!(MutationAck {
            modified_count: Some(1),
            message: None
        }
        .is_applied());
        assert!(MutationAck {
            modified_count: None,
            message: Some("Leave granted".into())
        }
        .is_applied());
    }

    #[test]
    fn shift_submission_flattens_shift_fields() {
        let submission = ShiftSubmission {
            shift: Shift {
                id: None,
                shift_name: "Morning".into(),
                branch: "dhaka".into(),
                start_time: "09:00".into(),
                end_time: "17:00".into(),
                late_after_minutes: 0,
                absent_after_minutes: 5,
                allow_ot: true,
                weekends: vec![WeekDay::Friday],
            },
            user_email: "hr@example.com".into(),
        };
        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(value["shiftName"], json!("Morning"));
        assert_eq!(value["allowOT"], json!(true));
        assert_eq!(value["weekends"], json!(["Friday"]));
        assert_eq!(value["userEmail"], json!("hr@example.com"));
        assert!(value.get("_id").is_none());

        let parsed: Shift = serde_json::from_value(json!({
            "_id": "s1",
            "shiftName": "Night",
            "lateAfterMinutes": "10"
        }))
        .unwrap();
        assert_eq!(parsed.id.as_deref(), Some("s1"));
        assert_eq!(parsed.late_after_minutes, 10);
        assert!(!parsed.allow_ot);
    }
}
