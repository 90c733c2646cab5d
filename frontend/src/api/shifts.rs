use super::{
    client::ApiClient,
    types::{ApiError, Shift, ShiftAck, ShiftSubmission},
};

impl ApiClient {
    pub async fn list_shifts(&self) -> Result<Vec<Shift>, ApiError> {
        let url = self.endpoint("/shifts/get-shifts").await;
        let response = self.send(self.http_client().get(url)).await?;
        let shifts: Option<Vec<Shift>> = self.map_json_response(response).await?;
        Ok(shifts.unwrap_or_default())
    }

    pub async fn create_shift(&self, payload: &ShiftSubmission) -> Result<ShiftAck, ApiError> {
        let url = self.endpoint("/shifts/new-shift").await;
        let response = self.send(self.http_client().post(url).json(payload)).await?;
        self.map_json_response(response).await
    }

    pub async fn update_shift(&self, payload: &ShiftSubmission) -> Result<ShiftAck, ApiError> {
        let url = self.endpoint("/shifts/update-shift").await;
        let response = self.send(self.http_client().put(url).json(payload)).await?;
        self.map_json_response(response).await
    }
}
