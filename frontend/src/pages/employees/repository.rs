use crate::api::{ApiClient, ApiError, EmployeeRecord};
use crate::state::{
    list_fetch::{ListPage, ListSource},
    list_query::ListQuery,
};
use async_trait::async_trait;
use std::rc::Rc;

#[derive(Clone)]
pub struct EmployeeRepository {
    client: Rc<ApiClient>,
}

impl Default for EmployeeRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl ListSource<ListQuery> for EmployeeRepository {
    type Row = EmployeeRecord;

    async fn fetch_page(&self, query: &ListQuery) -> Result<ListPage<EmployeeRecord>, ApiError> {
        let response = self.client.list_employees(query).await?;
        Ok(ListPage {
            rows: response.data,
            total_count: response.total,
            total_pages: response.total_pages,
        })
    }
}
