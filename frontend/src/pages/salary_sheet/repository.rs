use crate::api::{ApiClient, ApiError, Month, SalaryRow, SalarySheetResponse};
use crate::state::{
    list_fetch::{ListPage, ListSource},
    list_query::ListQuery,
};
use async_trait::async_trait;
use std::rc::Rc;

/// Listing parameters of the salary sheet: the shared list query plus the
/// reporting month, without which nothing is fetched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalaryQuery {
    pub month: Option<Month>,
    pub list: ListQuery,
}

#[derive(Clone)]
pub struct SalaryRepository {
    client: Rc<ApiClient>,
}

impl Default for SalaryRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn into_page(response: SalarySheetResponse) -> ListPage<SalaryRow> {
    let total_count = if response.total > 0 {
        response.total
    } else {
        response.data.len() as u64
    };
    ListPage {
        rows: response.data,
        total_count,
        total_pages: response.total_pages,
    }
}

impl SalaryRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// Every row of `month` matching `search`, ignoring pagination.
    pub async fn fetch_full(&self, search: &str, month: Month) -> Result<Vec<SalaryRow>, ApiError> {
        let response = self.client.get_full_salary_sheet(search, month).await?;
        Ok(response.data)
    }
}

#[async_trait(?Send)]
impl ListSource<SalaryQuery> for SalaryRepository {
    type Row = SalaryRow;

    async fn fetch_page(&self, query: &SalaryQuery) -> Result<ListPage<SalaryRow>, ApiError> {
        let Some(month) = query.month else {
            return Ok(ListPage::empty());
        };
        let response = self
            .client
            .get_salary_sheet(
                &query.list.search_text,
                month,
                query.list.page,
                query.list.page_size.get(),
            )
            .await?;
        Ok(into_page(response))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::list_query::PageSize;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn repo(server: &MockServer) -> SalaryRepository {
        SalaryRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(server.uri())))
    }

    #[tokio::test]
    async fn no_month_means_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;

        let page = repo(&server)
            .fetch_page(&SalaryQuery::default())
            .await
            .unwrap();
        assert!(page.rows.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[tokio::test]
    async fn page_request_uses_list_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/salary/get-salary-sheet"))
            .and(query_param("month", "March"))
            .and(query_param("page", "2"))
            .and(query_param("limit", "50"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{ "name": "Rahim", "salary": "30000", "total": 28000 }],
                "totalPages": 3
            })))
            .expect(1)
            .mount(&server)
            .await;

        let query = SalaryQuery {
            month: Some(Month::March),
            list: ListQuery {
                page: 2,
                page_size: PageSize::Fifty,
                ..ListQuery::default()
            },
        };
        let page = repo(&server).fetch_page(&query).await.unwrap();
        assert_eq!(page.rows.len(), 1);
        assert_eq!(page.rows[0].salary, 30000.0);
        assert_eq!(page.total_count, 1);
        assert_eq!(page.total_pages, 3);
    }

    #[tokio::test]
    async fn full_fetch_asks_for_every_row() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/salary/get-salary-sheet"))
            .and(query_param("page", "1"))
            .and(query_param("limit", "999999"))
            .and(query_param("search", "ra"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{ "name": "Rahim" }, { "name": "Rana" }],
                "totalPages": 1
            })))
            .expect(1)
            .mount(&server)
            .await;

        let rows = repo(&server).fetch_full("ra", Month::May).await.unwrap();
        assert_eq!(rows.len(), 2);
    }
}
