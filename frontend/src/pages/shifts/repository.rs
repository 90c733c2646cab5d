use crate::api::{ApiClient, ApiError, Shift, ShiftAck, ShiftSubmission};
use std::rc::Rc;

#[derive(Clone)]
pub struct ShiftRepository {
    client: Rc<ApiClient>,
}

impl Default for ShiftRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn accepted(ack: ShiftAck, fallback_error: &str, fallback_success: &str) -> Result<String, ApiError> {
    let message = ack.message.filter(|msg| !msg.trim().is_empty());
    if ack.success {
        Ok(message.unwrap_or_else(|| fallback_success.to_string()))
    } else {
        Err(ApiError::unknown(
            message.unwrap_or_else(|| fallback_error.to_string()),
        ))
    }
}

impl ShiftRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Shift>, ApiError> {
        self.client.list_shifts().await
    }

    /// Creates or updates depending on whether the shift has an id. Returns
    /// the server's confirmation text.
    pub async fn save(&self, shift: Shift, user_email: &str) -> Result<String, ApiError> {
        let is_update = shift.id.is_some();
        let submission = ShiftSubmission {
            shift,
            user_email: user_email.to_string(),
        };
        if is_update {
            let ack = self.client.update_shift(&submission).await?;
            accepted(ack, "Failed to update shift", "Shift updated successfully")
        } else {
            let ack = self.client.create_shift(&submission).await?;
            accepted(ack, "Failed to create shift", "Shift created successfully")
        }
    }
}
