use super::{
    client::ApiClient,
    types::{ApiError, EmployeeListResponse},
};
use crate::state::list_query::ListQuery;

fn employee_list_params(query: &ListQuery) -> Vec<(&'static str, String)> {
    vec![
        ("search", query.search_text.clone()),
        ("page", query.page.to_string()),
        ("perPage", query.page_size.get().to_string()),
        ("sortKey", query.sort_key.wire_name().to_string()),
        ("sortOrder", query.sort_order.wire_value().to_string()),
    ]
}

impl ApiClient {
    pub async fn list_employees(&self, query: &ListQuery) -> Result<EmployeeListResponse, ApiError> {
        let url = self.endpoint("/employees/get-employees").await;
        let params = employee_list_params(query);
        let response = self
            .send(self.http_client().get(url).query(&params))
            .await?;
        self.map_json_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::list_query::{PageSize, SortKey, SortOrder};

    #[test]
    fn employee_list_params_use_wire_names() {
        let query = ListQuery {
            search_text: "WB0001".into(),
            sort_key: SortKey::Branch,
            sort_order: SortOrder::Desc,
            page: 3,
            page_size: PageSize::Fifty,
        };
        let params = employee_list_params(&query);
        assert!(params.contains(&("search", "WB0001".to_string())));
        assert!(params.contains(&("page", "3".to_string())));
        assert!(params.contains(&("perPage", "50".to_string())));
        assert!(params.contains(&("sortKey", "branch".to_string())));
        assert!(params.contains(&("sortOrder", "-1".to_string())));
    }
}
