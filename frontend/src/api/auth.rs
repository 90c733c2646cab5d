use super::{
    client::ApiClient,
    types::{ApiError, CurrentUser},
};

impl ApiClient {
    pub async fn get_me(&self) -> Result<CurrentUser, ApiError> {
        let url = self.endpoint("/auth/me").await;
        let response = self.send(self.http_client().get(url)).await?;
        self.map_json_response(response).await
    }
}
