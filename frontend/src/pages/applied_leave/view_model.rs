use super::{
    repository::LeaveRepository,
    workflow::{
        self, submit_transition, GrantSelection, LeaveCounters, LeaveTransition, PendingRevoke,
        WorkflowError,
    },
};
use crate::api::{ApiClient, ApiError, LeaveRequest};
use crate::state::{
    notifications::{use_notifications, Notifications},
    refetch::use_refetch_bus,
    session::use_session,
};
use chrono::NaiveDate;
use leptos::*;
use std::rc::Rc;

pub type LeaveListResource = Resource<(String, u64), Result<Vec<LeaveRequest>, ApiError>>;

#[derive(Clone, Copy)]
pub struct AppliedLeaveViewModel {
    pub leaves: LeaveListResource,
    /// Last list that loaded successfully.
    pub shown: Memo<Vec<LeaveRequest>>,
    pub grant_choice: RwSignal<Option<LeaveRequest>>,
    pub viewing: RwSignal<Option<LeaveRequest>>,
    pub selection: RwSignal<GrantSelection>,
    pub pending_revoke: RwSignal<Option<PendingRevoke>>,
    pub transition_action: Action<LeaveTransition, Result<LeaveTransition, ApiError>>,
    toasts: Notifications,
}

pub fn use_applied_leave_view_model() -> AppliedLeaveViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let repo = LeaveRepository::new_with_client(Rc::new(api));
    let session = use_session();
    let refetch = use_refetch_bus();
    let toasts = use_notifications();

    let repo_list = repo.clone();
    let leaves = create_resource(
        move || (session.email(), refetch.track()),
        move |(email, _)| {
            let repo = repo_list.clone();
            async move {
                if email.is_empty() {
                    return Ok(Vec::new());
                }
                repo.fetch_applied(&email).await
            }
        },
    );

    create_effect(move |_| {
        if let Some(Err(err)) = leaves.get() {
            toasts.error(format!("Error fetching data: {}", err));
        }
    });

    let shown = create_memo(move |previous: Option<&Vec<LeaveRequest>>| {
        retain_loaded(previous, leaves.get())
    });

    let transition_action = create_action(move |transition: &LeaveTransition| {
        let repo = repo.clone();
        let transition = transition.clone();
        let actor = session.email_untracked();
        async move {
            submit_transition(&repo, &transition, &actor).await?;
            Ok(transition)
        }
    });

    let vm = AppliedLeaveViewModel {
        leaves,
        shown,
        grant_choice: create_rw_signal(None),
        viewing: create_rw_signal(None),
        selection: create_rw_signal(GrantSelection::default()),
        pending_revoke: create_rw_signal(None),
        transition_action,
        toasts,
    };

    create_effect(move |_| {
        if let Some(result) = transition_action.value().get() {
            match result {
                Ok(transition) => {
                    toasts.success(transition.success_message());
                    if let LeaveTransition::Grant { .. } = transition {
                        vm.close_view();
                    }
                    refetch.notify();
                }
                Err(err) => {
                    toasts.error(err.error);
                }
            }
        }
    });

    vm
}

/// Rows to display: a successful load replaces `previous`, anything else keeps it.
pub fn retain_loaded(
    previous: Option<&Vec<LeaveRequest>>,
    result: Option<Result<Vec<LeaveRequest>, ApiError>>,
) -> Vec<LeaveRequest> {
    match result {
        Some(Ok(rows)) => rows,
        _ => previous.cloned().unwrap_or_default(),
    }
}

impl AppliedLeaveViewModel {
    pub fn counters(&self) -> LeaveCounters {
        self.shown.with(|rows| LeaveCounters::tally(rows))
    }

    pub fn load_error(&self) -> Option<ApiError> {
        self.leaves.get().and_then(Result::err)
    }

    pub fn is_submitting(&self) -> bool {
        self.transition_action.pending().get()
    }

    fn reject(&self, err: WorkflowError) {
        match err {
            WorkflowError::NothingToRevoke => {
                self.toasts.info(err.to_string());
            }
            other => {
                self.toasts.warning(ApiError::from(other).error);
            }
        }
    }

    fn dispatch(&self, transition: Result<LeaveTransition, WorkflowError>) {
        match transition {
            Ok(transition) => self.transition_action.dispatch(transition),
            Err(err) => self.reject(err),
        }
    }

    pub fn open_grant_choice(&self, request: LeaveRequest) {
        self.grant_choice.set(Some(request));
    }

    pub fn cancel_grant_choice(&self) {
        self.grant_choice.set(None);
    }

    pub fn choose_full_grant(&self) {
        if let Some(request) = self.grant_choice.get_untracked() {
            self.grant_choice.set(None);
            self.dispatch(workflow::full_grant(&request));
        }
    }

    pub fn choose_partial_grant(&self) {
        if let Some(request) = self.grant_choice.get_untracked() {
            self.grant_choice.set(None);
            self.open_view(request);
        }
    }

    pub fn open_view(&self, request: LeaveRequest) {
        self.selection.set(GrantSelection::for_request(&request));
        self.viewing.set(Some(request));
    }

    pub fn close_view(&self) {
        self.viewing.set(None);
        self.selection.set(GrantSelection::default());
    }

    pub fn toggle_date(&self, date: NaiveDate) {
        let mut outcome = Ok(());
        self.selection.update(|selection| outcome = selection.toggle(date));
        if let Err(err) = outcome {
            self.reject(err);
        }
    }

    pub fn select_all(&self) {
        self.selection.update(GrantSelection::select_all);
    }

    pub fn clear_selection(&self) {
        self.selection.update(GrantSelection::clear);
    }

    pub fn grant_selected(&self) {
        let Some(request) = self.viewing.get_untracked() else {
            return;
        };
        let selection = self.selection.get_untracked();
        self.dispatch(workflow::partial_grant(&request, &selection));
    }

    pub fn decline(&self, request: &LeaveRequest) {
        self.dispatch(workflow::decline(request));
    }

    pub fn ask_revoke(&self, request: &LeaveRequest) {
        match workflow::request_revoke(request) {
            Ok(pending) => self.pending_revoke.set(Some(pending)),
            Err(err) => self.reject(err),
        }
    }

    pub fn confirm_revoke(&self) {
        if let Some(pending) = self.pending_revoke.get_untracked() {
            self.pending_revoke.set(None);
            self.transition_action.dispatch(pending.confirm());
        }
    }

    pub fn cancel_revoke(&self) {
        self.pending_revoke.set(None);
    }
}
