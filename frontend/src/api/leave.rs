use super::{
    client::ApiClient,
    types::{ApiError, GrantLeaveRequest, LeaveRequest, MutationAck, RevokeGrantRequest},
};

impl ApiClient {
    pub async fn list_applied_leave(&self, user_email: &str) -> Result<Vec<LeaveRequest>, ApiError> {
        let url = self.endpoint("/getAppliedLeave").await;
        let response = self
            .send(
                self.http_client()
                    .get(url)
                    .query(&[("userEmail", user_email)]),
            )
            .await?;
        let records: Option<Vec<serde_json::Value>> = self.map_json_response(response).await?;
        Ok(LeaveRequest::from_records(records.unwrap_or_default()))
    }

    pub async fn grant_leave(
        &self,
        id: &str,
        payload: &GrantLeaveRequest,
    ) -> Result<MutationAck, ApiError> {
        let url = self.endpoint(&format!("/grantLeave/{}", id)).await;
        let response = self.send(self.http_client().put(url).json(payload)).await?;
        self.map_json_response(response).await
    }

    pub async fn decline_leave(&self, id: &str) -> Result<MutationAck, ApiError> {
        let url = self.endpoint(&format!("/declineLeave/{}", id)).await;
        let response = self.send(self.http_client().put(url)).await?;
        self.map_json_response(response).await
    }

    pub async fn revoke_grant(
        &self,
        id: &str,
        payload: &RevokeGrantRequest,
    ) -> Result<MutationAck, ApiError> {
        let url = self.endpoint(&format!("/revokeGrant/{}", id)).await;
        let response = self.send(self.http_client().put(url).json(payload)).await?;
        self.map_json_response(response).await
    }
}
