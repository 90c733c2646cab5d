use crate::api::Role;
use crate::components::{empty_state::EmptyState, guard::RequireSession, layout::Layout};
use crate::state::session::use_session;
use leptos::*;

/// Which home screen a role lands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardKind {
    Admin,
    Hr,
    Client,
    Employee,
}

type Shortcut = (&'static str, &'static str, &'static str);

const PAYROLL_SHORTCUTS: [Shortcut; 4] = [
    ("/employees", "Employees", "Search and browse the employee directory"),
    ("/shifting", "Shifting", "Create and edit work shifts"),
    ("/applied-leave", "Applied Leave", "Grant, decline or revoke leave requests"),
    ("/salary-sheet", "Salary Sheet", "Monthly salaries, Excel export and bank letter"),
];

impl DashboardKind {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Admin | Role::Developer => DashboardKind::Admin,
            Role::HrAdmin => DashboardKind::Hr,
            Role::Client => DashboardKind::Client,
            Role::Employee => DashboardKind::Employee,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DashboardKind::Admin => "Admin Dashboard",
            DashboardKind::Hr => "HR Dashboard",
            DashboardKind::Client => "Client Dashboard",
            DashboardKind::Employee => "Employee Dashboard",
        }
    }

    pub fn shortcuts(&self) -> &'static [Shortcut] {
        match self {
            DashboardKind::Admin | DashboardKind::Hr => &PAYROLL_SHORTCUTS,
            DashboardKind::Client | DashboardKind::Employee => &[],
        }
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <RequireSession>
            <Layout>
                <DashboardPanel/>
            </Layout>
        </RequireSession>
    }
}

#[component]
fn DashboardPanel() -> impl IntoView {
    let session = use_session();
    let kind = create_memo(move |_| DashboardKind::for_role(session.role().unwrap_or_default()));
    let greeting = move || {
        session
            .user()
            .map(|user| format!("Welcome back, {}", user.name))
            .unwrap_or_default()
    };

    view! {
        <section class="space-y-6">
            <div>
                <h1 class="text-2xl font-semibold text-fg">{move || kind.get().title()}</h1>
                <p class="text-sm text-fg-muted">{greeting}</p>
            </div>
            {move || {
                let shortcuts = kind.get().shortcuts();
                if shortcuts.is_empty() {
                    view! {
                        <EmptyState
                            title="Nothing to review"
                            description="Your requests and notices will appear here."
                        />
                    }
                    .into_view()
                } else {
                    view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                            {shortcuts
                                .iter()
                                .map(|(path, label, description)| view! {
                                    <a href=*path class="block rounded-lg border border-border bg-surface-elevated p-4 hover:shadow">
                                        <h2 class="font-semibold text-fg">{*label}</h2>
                                        <p class="text-sm text-fg-muted">{*description}</p>
                                    </a>
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_view()
                }
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_map_to_dashboards() {
        assert_eq!(DashboardKind::for_role(Role::Admin), DashboardKind::Admin);
        assert_eq!(DashboardKind::for_role(Role::Developer), DashboardKind::Admin);
        assert_eq!(DashboardKind::for_role(Role::HrAdmin), DashboardKind::Hr);
        assert_eq!(DashboardKind::for_role(Role::Client), DashboardKind::Client);
        assert_eq!(DashboardKind::for_role(Role::Employee), DashboardKind::Employee);
    }

    #[test]
    fn only_payroll_dashboards_have_shortcuts() {
        assert_eq!(DashboardKind::Hr.shortcuts().len(), 4);
        assert!(DashboardKind::Client.shortcuts().is_empty());
        assert!(DashboardKind::Employee.shortcuts().is_empty());
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::provide_session_as;
    use crate::test_support::ssr::render_to_string;

    fn render(role: Role) -> String {
        render_to_string(move || {
            provide_session_as(role);
            view! { <DashboardPage/> }
        })
    }

    #[test]
    fn hr_sees_payroll_shortcuts() {
        let html = render(Role::HrAdmin);
        assert!(html.contains("HR Dashboard"));
        assert!(html.contains("/salary-sheet"));
    }

    #[test]
    fn client_dashboard_has_no_shortcuts() {
        let html = render(Role::Client);
        assert!(html.contains("Client Dashboard"));
        assert!(!html.contains("Grant, decline or revoke"));
        assert!(html.contains("Nothing to review"));
    }
}
