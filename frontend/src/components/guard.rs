use crate::{components::layout::LoadingSpinner, state::session::use_session, utils::redirect_to};
use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Wait,
    Render,
    Redirect(&'static str),
}

pub fn session_decision(loading: bool, signed_in: bool) -> GuardDecision {
    if loading {
        GuardDecision::Wait
    } else if signed_in {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect("/login")
    }
}

pub fn payroll_decision(loading: bool, signed_in: bool, can_manage_payroll: bool) -> GuardDecision {
    match session_decision(loading, signed_in) {
        GuardDecision::Render if !can_manage_payroll => GuardDecision::Redirect("/dashboard"),
        other => other,
    }
}

fn guarded(decision: Memo<GuardDecision>, children: ChildrenFn) -> impl IntoView {
    create_effect(move |_| {
        if let GuardDecision::Redirect(target) = decision.get() {
            redirect_to(target);
        }
    });
    view! {
        <Show
            when=move || decision.get() == GuardDecision::Render
            fallback=move || {
                if decision.get() == GuardDecision::Wait {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let decision =
        create_memo(move |_| session_decision(session.is_loading(), session.is_signed_in()));
    guarded(decision, children)
}

/// Employees, shifting, applied leave and salary sheet screens.
#[component]
pub fn RequirePayroll(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let decision = create_memo(move |_| {
        payroll_decision(
            session.is_loading(),
            session.is_signed_in(),
            session.can_manage_payroll(),
        )
    });
    guarded(decision, children)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_guard_waits_then_redirects() {
        assert_eq!(session_decision(true, false), GuardDecision::Wait);
        assert_eq!(session_decision(false, false), GuardDecision::Redirect("/login"));
        assert_eq!(session_decision(false, true), GuardDecision::Render);
    }

    #[test]
    fn payroll_guard_sends_other_roles_to_dashboard() {
        assert_eq!(payroll_decision(false, true, false), GuardDecision::Redirect("/dashboard"));
        assert_eq!(payroll_decision(false, true, true), GuardDecision::Render);
        assert_eq!(payroll_decision(false, false, true), GuardDecision::Redirect("/login"));
        assert_eq!(payroll_decision(true, true, true), GuardDecision::Wait);
    }
}
