use super::{
    client::ApiClient,
    types::{ApiError, Month, SalarySheetResponse},
};

/// Page size used when an export needs every row of the month.
pub const FULL_SHEET_LIMIT: u32 = 999_999;

fn salary_sheet_params(
    search: &str,
    month: Month,
    page: u32,
    limit: u32,
) -> Vec<(&'static str, String)> {
    vec![
        ("search", search.to_string()),
        ("month", month.name().to_string()),
        ("page", page.to_string()),
        ("limit", limit.to_string()),
    ]
}

impl ApiClient {
    pub async fn get_salary_sheet(
        &self,
        search: &str,
        month: Month,
        page: u32,
        limit: u32,
    ) -> Result<SalarySheetResponse, ApiError> {
        let url = self.endpoint("/salary/get-salary-sheet").await;
        let params = salary_sheet_params(search, month, page, limit);
        let response = self
            .send(self.http_client().get(url).query(&params))
            .await?;
        self.map_json_response(response).await
    }

    pub async fn get_full_salary_sheet(
        &self,
        search: &str,
        month: Month,
    ) -> Result<SalarySheetResponse, ApiError> {
        self.get_salary_sheet(search, month, 1, FULL_SHEET_LIMIT)
            .await
    }
}
