use super::workflow::LeaveGateway;
use crate::api::{
    ApiClient, ApiError, GrantLeaveRequest, LeaveRequest, MutationAck, RevokeGrantRequest,
};
use async_trait::async_trait;
use std::rc::Rc;

#[derive(Clone)]
pub struct LeaveRepository {
    client: Rc<ApiClient>,
}

impl Default for LeaveRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl LeaveRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_applied(&self, user_email: &str) -> Result<Vec<LeaveRequest>, ApiError> {
        self.client.list_applied_leave(user_email).await
    }
}

#[async_trait(?Send)]
impl LeaveGateway for LeaveRepository {
    async fn grant(&self, leave_id: &str, payload: &GrantLeaveRequest) -> Result<MutationAck, ApiError> {
        self.client.grant_leave(leave_id, payload).await
    }

    async fn decline(&self, leave_id: &str) -> Result<MutationAck, ApiError> {
        self.client.decline_leave(leave_id).await
    }

    async fn revoke(&self, leave_id: &str, payload: &RevokeGrantRequest) -> Result<MutationAck, ApiError> {
        self.client.revoke_grant(leave_id, payload).await
    }
}
