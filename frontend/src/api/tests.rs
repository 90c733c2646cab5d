#![cfg(not(coverage))]

use super::*;
use crate::state::list_query::{ListQuery, PageSize, SortKey, SortOrder};
use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_client(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.uri())
}

fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
}

fn leave_json(id: &str, status: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "employeeId": "WB0007",
        "employeeName": "Rafiq Islam",
        "position": "Designer",
        "leaveType": "Casual",
        "startDate": "2025-03-02",
        "endDate": "2025-03-04",
        "totalDays": 3,
        "leaveDates": ["2025-03-02", "2025-03-03", "2025-03-04"],
        "grantedDates": [],
        "status": status,
        "reason": "family event"
    })
}

fn shift_json() -> serde_json::Value {
    json!({
        "_id": "s1",
        "shiftName": "Morning",
        "branch": "dhaka",
        "startTime": "09:00",
        "endTime": "18:00",
        "lateAfterMinutes": 10,
        "absentAfterMinutes": "5",
        "allowOT": true,
        "weekends": ["Friday"]
    })
}

#[tokio::test]
async fn list_endpoints_send_expected_queries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/employees/get-employees"))
        .and(query_param("search", "rafiq"))
        .and(query_param("page", "2"))
        .and(query_param("perPage", "50"))
        .and(query_param("sortKey", "status"))
        .and(query_param("sortOrder", "-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "_id": "e1", "eid": "WB0007", "fullName": "Rafiq Islam", "status": "active" }],
            "total": 51,
            "totalPages": 2
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/salary/get-salary-sheet"))
        .and(query_param("month", "March"))
        .and(query_param("limit", "999999"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                { "name": "Rafiq", "accountNumber": "111", "salary": "30000", "perDaySalary": 1000, "present": 28, "absent": 2, "total": 28000 },
                { "name": "Nila", "accountNumber": "222", "salary": 25000, "perDaySalary": "833.33", "present": null, "total": "25000.5" }
            ],
            "totalPages": 1
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/getAppliedLeave"))
        .and(query_param("userEmail", "hr@example.com"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([
                    leave_json("l1", "Pending"),
                    leave_json("l2", "Approved"),
                    leave_json("l3", "Archived")
                ])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/shifts/get-shifts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([shift_json()])))
        .mount(&server)
        .await;

    let client = api_client(&server);

    let employees = client
        .list_employees(&ListQuery {
            search_text: "rafiq".into(),
            sort_key: SortKey::Status,
            sort_order: SortOrder::Desc,
            page: 2,
            page_size: PageSize::Fifty,
        })
        .await
        .unwrap();
    assert_eq!(employees.total, 51);
    assert_eq!(employees.total_pages, 2);
    assert_eq!(employees.data[0].full_name, "Rafiq Islam");

    let sheet = client.get_full_salary_sheet("", Month::March).await.unwrap();
    assert_eq!(sheet.data.len(), 2);
    assert_eq!(sheet.data[0].salary, 30000.0);
    assert_eq!(sheet.data[1].per_day_salary, 833.33);
    assert_eq!(sheet.data[1].present, None);
    assert_eq!(sheet.data[1].total, 25000.5);

    let leaves = client.list_applied_leave("hr@example.com").await.unwrap();
    assert_eq!(leaves.len(), 2);
    assert_eq!(leaves[0].requested_dates.len(), 3);
    assert_eq!(leaves[1].status, LeaveStatus::Approved);

    let shifts = client.list_shifts().await.unwrap();
    assert_eq!(shifts[0].absent_after_minutes, 5);
    assert_eq!(shifts[0].weekends, vec![WeekDay::Friday]);
}

#[tokio::test]
async fn leave_mutations_send_camel_case_bodies() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/grantLeave/l1"))
        .and(body_json(json!({
            "grantedDates": ["2025-03-02", "2025-03-04"],
            "declinedDates": ["2025-03-03"],
            "grantedBy": "hr@example.com"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "modifiedCount": 1 })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/declineLeave/l2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "declined" })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/revokeGrant/l3"))
        .and(body_json(json!({
            "revokedDates": ["2025-03-02"],
            "revokedBy": "hr@example.com",
            "setStatusTo": "Cancelled"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "modifiedCount": 0 })))
        .mount(&server)
        .await;

    let client = api_client(&server);
    let ack = client
        .grant_leave(
            "l1",
            &GrantLeaveRequest {
                granted_dates: vec![date("2025-03-02"), date("2025-03-04")],
                declined_dates: vec![date("2025-03-03")],
                granted_by: "hr@example.com".into(),
            },
        )
        .await
        .unwrap();
    assert!(ack.is_applied());

    assert!(client.decline_leave("l2").await.unwrap().is_applied());

    let ack = client
        .revoke_grant(
            "l3",
            &RevokeGrantRequest {
                revoked_dates: vec![date("2025-03-02")],
                revoked_by: "hr@example.com".into(),
                set_status_to: LeaveStatus::Cancelled,
            },
        )
        .await
        .unwrap();
    assert!(!ack.is_applied());
}

#[tokio::test]
async fn shift_mutations_post_and_put() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/shifts/new-shift"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "success": true, "message": "Shift created" })),
        )
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/shifts/update-shift"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "success": false, "message": "Not found" })),
        )
        .mount(&server)
        .await;

    let client = api_client(&server);
    let shift: Shift = serde_json::from_value(shift_json()).unwrap();
    let submission = ShiftSubmission {
        shift,
        user_email: "hr@example.com".into(),
    };
    let created = client.create_shift(&submission).await.unwrap();
    assert!(created.success);
    let updated = client.update_shift(&submission).await.unwrap();
    assert!(!updated.success);
    assert_eq!(updated.message.as_deref(), Some("Not found"));
}

#[tokio::test]
async fn error_responses_become_api_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/salary/get-salary-sheet"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "message": "Month is required" })),
        )
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/declineLeave/l9"))
        .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/getAppliedLeave"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = api_client(&server);
    let err = client
        .get_salary_sheet("", Month::May, 1, 20)
        .await
        .unwrap_err();
    assert_eq!(err.error, "Month is required");
    assert_eq!(err.code, "HTTP_400");

    let err = client.decline_leave("l9").await.unwrap_err();
    assert_eq!(err.error, "Request failed with status 500");

    let err = client.list_applied_leave("hr@example.com").await.unwrap_err();
    assert_eq!(err.code, "UNKNOWN");
}

#[tokio::test]
async fn null_list_bodies_read_as_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/getAppliedLeave"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(null)))
        .mount(&server)
        .await;

    let client = api_client(&server);
    assert!(client.list_applied_leave("x@example.com").await.unwrap().is_empty());
}

#[tokio::test]
async fn unreachable_server_is_request_failed() {
    let client = ApiClient::new_with_base_url("http://127.0.0.1:9");
    let err = client.list_shifts().await.unwrap_err();
    assert_eq!(err.code, "REQUEST_FAILED");
}
