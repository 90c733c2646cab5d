use crate::api::{ApiClient, ApiError, CurrentUser, Role};
use leptos::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<CurrentUser>,
    pub loading: bool,
}

/// Signed-in user, provided once at the app root.
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: RwSignal<SessionState>,
}

impl SessionContext {
    pub fn new(initial: SessionState) -> Self {
        Self {
            state: create_rw_signal(initial),
        }
    }

    pub fn signed_in(user: CurrentUser) -> Self {
        Self::new(SessionState {
            user: Some(user),
            loading: false,
        })
    }

    pub fn state(&self) -> Signal<SessionState> {
        self.state.into()
    }

    pub fn user(&self) -> Option<CurrentUser> {
        self.state.with(|s| s.user.clone())
    }

    pub fn role(&self) -> Option<Role> {
        self.state.with(|s| s.user.as_ref().map(|u| u.role))
    }

    pub fn email(&self) -> String {
        self.state
            .with(|s| s.user.as_ref().map(|u| u.email.clone()))
            .unwrap_or_default()
    }

    pub fn email_untracked(&self) -> String {
        self.state
            .with_untracked(|s| s.user.as_ref().map(|u| u.email.clone()))
            .unwrap_or_default()
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    pub fn is_signed_in(&self) -> bool {
        self.state.with(|s| s.user.is_some())
    }

    pub fn can_manage_payroll(&self) -> bool {
        self.role().map(|r| r.can_manage_payroll()).unwrap_or(false)
    }

    pub fn set_user(&self, user: Option<CurrentUser>) {
        self.state.set(SessionState {
            user,
            loading: false,
        });
    }
}

pub async fn load_session(api: &ApiClient, session: SessionContext) -> Result<(), ApiError> {
    session.state.update(|s| s.loading = true);
    match api.get_me().await {
        Ok(user) => {
            log::info!("signed in as {} ({})", user.email, user.role.as_str());
            session.set_user(Some(user));
            Ok(())
        }
        Err(err) => {
            session.set_user(None);
            Err(err)
        }
    }
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let session = SessionContext::new(SessionState {
        user: None,
        loading: true,
    });
    provide_context(session);
    let api = use_context::<ApiClient>().unwrap_or_default();
    spawn_local(async move {
        if let Err(err) = load_session(&api, session).await {
            log::warn!("session bootstrap failed: {}", err);
        }
    });
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| SessionContext::new(SessionState::default()))
}
