use crate::api::{
    ApiError, GrantLeaveRequest, LeaveRequest, LeaveStatus, MutationAck, RevokeGrantRequest,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error("Only pending requests can be granted or declined (status: {0})")]
    NotPending(LeaveStatus),
    #[error("Only approved requests can be revoked (status: {0})")]
    NotApproved(LeaveStatus),
    #[error("No granted dates to revoke")]
    NothingToRevoke,
    #[error("Select at least one date to grant, or decline the request")]
    EmptySelection,
    #[error("{0} is not one of the requested dates")]
    DateNotRequested(NaiveDate),
}

impl From<WorkflowError> for ApiError {
    fn from(err: WorkflowError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Dates ticked in the partial-grant modal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GrantSelection {
    requested: Vec<NaiveDate>,
    selected: BTreeSet<NaiveDate>,
}

impl GrantSelection {
    /// Starts from the dates already granted, restricted to the requested ones.
    pub fn for_request(request: &LeaveRequest) -> Self {
        let selected = request
            .granted_dates
            .iter()
            .filter(|date| request.requested_dates.contains(date))
            .copied()
            .collect();
        Self {
            requested: request.requested_dates.clone(),
            selected,
        }
    }

    pub fn requested(&self) -> &[NaiveDate] {
        &self.requested
    }

    pub fn is_selected(&self, date: &NaiveDate) -> bool {
        self.selected.contains(date)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn toggle(&mut self, date: NaiveDate) -> Result<(), WorkflowError> {
        if !self.requested.contains(&date) {
            return Err(WorkflowError::DateNotRequested(date));
        }
        if !self.selected.remove(&date) {
            self.selected.insert(date);
        }
        Ok(())
    }

    pub fn select_all(&mut self) {
        self.selected = self.requested.iter().copied().collect();
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn plan(&self) -> Result<GrantPlan, WorkflowError> {
        if self.selected.is_empty() {
            return Err(WorkflowError::EmptySelection);
        }
        let granted: Vec<NaiveDate> = self.selected.iter().copied().collect();
        let declined = self
            .requested
            .iter()
            .filter(|date| !self.selected.contains(date))
            .copied()
            .collect();
        Ok(GrantPlan { granted, declined })
    }
}

/// Granted and declined dates; together they partition the requested dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrantPlan {
    pub granted: Vec<NaiveDate>,
    pub declined: Vec<NaiveDate>,
}

impl GrantPlan {
    pub fn full(request: &LeaveRequest) -> Self {
        Self {
            granted: request.requested_dates.clone(),
            declined: Vec::new(),
        }
    }

    pub fn is_partial(&self) -> bool {
        !self.declined.is_empty()
    }
}

/// A revoke that still waits for the operator's confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRevoke {
    leave_id: String,
    dates: Vec<NaiveDate>,
}

impl PendingRevoke {
    pub fn day_count(&self) -> usize {
        self.dates.len()
    }

    pub fn prompt(&self) -> String {
        format!(
            "This will cancel {} granted day(s) and restore leave balance.",
            self.day_count()
        )
    }

    pub fn confirm(self) -> LeaveTransition {
        LeaveTransition::Revoke {
            leave_id: self.leave_id,
            revoked: self.dates,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeaveTransition {
    Grant { leave_id: String, plan: GrantPlan },
    Decline { leave_id: String },
    Revoke { leave_id: String, revoked: Vec<NaiveDate> },
}

fn ensure_pending(request: &LeaveRequest) -> Result<(), WorkflowError> {
    if request.status == LeaveStatus::Pending {
        Ok(())
    } else {
        Err(WorkflowError::NotPending(request.status))
    }
}

pub fn full_grant(request: &LeaveRequest) -> Result<LeaveTransition, WorkflowError> {
    ensure_pending(request)?;
    if request.requested_dates.is_empty() {
        return Err(WorkflowError::EmptySelection);
    }
    Ok(LeaveTransition::Grant {
        leave_id: request.id.clone(),
        plan: GrantPlan::full(request),
    })
}

pub fn partial_grant(
    request: &LeaveRequest,
    selection: &GrantSelection,
) -> Result<LeaveTransition, WorkflowError> {
    ensure_pending(request)?;
    Ok(LeaveTransition::Grant {
        leave_id: request.id.clone(),
        plan: selection.plan()?,
    })
}

pub fn decline(request: &LeaveRequest) -> Result<LeaveTransition, WorkflowError> {
    ensure_pending(request)?;
    Ok(LeaveTransition::Decline {
        leave_id: request.id.clone(),
    })
}

pub fn request_revoke(request: &LeaveRequest) -> Result<PendingRevoke, WorkflowError> {
    if request.status != LeaveStatus::Approved {
        return Err(WorkflowError::NotApproved(request.status));
    }
    if request.granted_dates.is_empty() {
        return Err(WorkflowError::NothingToRevoke);
    }
    Ok(PendingRevoke {
        leave_id: request.id.clone(),
        dates: request.granted_dates.clone(),
    })
}

impl LeaveTransition {
    pub fn leave_id(&self) -> &str {
        match self {
            LeaveTransition::Grant { leave_id, .. }
            | LeaveTransition::Decline { leave_id }
            | LeaveTransition::Revoke { leave_id, .. } => leave_id,
        }
    }

    pub fn target_status(&self) -> LeaveStatus {
        match self {
            LeaveTransition::Grant { .. } => LeaveStatus::Approved,
            LeaveTransition::Decline { .. } => LeaveStatus::Declined,
            LeaveTransition::Revoke { .. } => LeaveStatus::Cancelled,
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            LeaveTransition::Grant { plan, .. } if plan.is_partial() => {
                "Leave granted successfully"
            }
            LeaveTransition::Grant { .. } => "Full leave granted",
            LeaveTransition::Decline { .. } => "Leave application declined",
            LeaveTransition::Revoke { .. } => "Grant revoked",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            LeaveTransition::Grant { plan, .. } if plan.is_partial() => {
                "Failed to grant selected dates"
            }
            LeaveTransition::Grant { .. } => "Failed to grant full leave",
            LeaveTransition::Decline { .. } => "Failed to decline leave",
            LeaveTransition::Revoke { .. } => "Failed to revoke leave",
        }
    }

    /// The request as it reads once the server accepted this transition.
    pub fn applied_to(&self, request: &LeaveRequest) -> LeaveRequest {
        let mut next = request.clone();
        next.status = self.target_status();
        match self {
            LeaveTransition::Grant { plan, .. } => next.granted_dates = plan.granted.clone(),
            LeaveTransition::Decline { .. } => {}
            LeaveTransition::Revoke { .. } => next.granted_dates.clear(),
        }
        next
    }
}

/// Remote side of the leave workflow.
#[async_trait(?Send)]
pub trait LeaveGateway {
    async fn grant(&self, leave_id: &str, payload: &GrantLeaveRequest) -> Result<MutationAck, ApiError>;
    async fn decline(&self, leave_id: &str) -> Result<MutationAck, ApiError>;
    async fn revoke(&self, leave_id: &str, payload: &RevokeGrantRequest) -> Result<MutationAck, ApiError>;
}

/// Sends one transition as a single request. An acknowledgement that
/// reports no change counts as a rejection.
pub async fn submit_transition<G>(
    gateway: &G,
    transition: &LeaveTransition,
    actor_email: &str,
) -> Result<(), ApiError>
where
    G: LeaveGateway + ?Sized,
{
    let ack = match transition {
        LeaveTransition::Grant { leave_id, plan } => {
            let payload = GrantLeaveRequest {
                granted_dates: plan.granted.clone(),
                declined_dates: plan.declined.clone(),
                granted_by: actor_email.to_string(),
            };
            gateway.grant(leave_id, &payload).await?
        }
        LeaveTransition::Decline { leave_id } => gateway.decline(leave_id).await?,
        LeaveTransition::Revoke { leave_id, revoked } => {
            let payload = RevokeGrantRequest {
                revoked_dates: revoked.clone(),
                revoked_by: actor_email.to_string(),
                set_status_to: LeaveStatus::Cancelled,
            };
            gateway.revoke(leave_id, &payload).await?
        }
    };
    if ack.is_applied() {
        log::info!(
            "leave {} -> {}",
            transition.leave_id(),
            transition.target_status()
        );
        Ok(())
    } else {
        Err(ApiError::unknown(transition.failure_message()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LeaveCounters {
    pub total: usize,
    pub approved: usize,
    pub pending: usize,
}

impl LeaveCounters {
    pub fn tally(requests: &[LeaveRequest]) -> Self {
        let count = |status: LeaveStatus| requests.iter().filter(|r| r.status == status).count();
        Self {
            total: requests.len(),
            approved: count(LeaveStatus::Approved),
            pending: count(LeaveStatus::Pending),
        }
    }
}
