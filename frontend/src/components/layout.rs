use crate::{api::Role, state::session::use_session};
use leptos::*;

/// Navigation entries shown in the header for `role`.
pub fn nav_links(role: Option<Role>) -> Vec<(&'static str, &'static str)> {
    let mut links = vec![("/dashboard", "Dashboard")];
    if role.map(|r| r.can_manage_payroll()).unwrap_or(false) {
        links.extend([
            ("/employees", "Employees"),
            ("/shifting", "Shifting"),
            ("/applied-leave", "Applied Leave"),
            ("/salary-sheet", "Salary Sheet"),
        ]);
    }
    links
}

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let (menu_open, set_menu_open) = create_signal(false);
    let links = create_memo(move |_| nav_links(session.role()));
    let user_label = move || {
        session
            .user()
            .map(|user| {
                let name = if user.name.trim().is_empty() {
                    user.email
                } else {
                    user.name
                };
                format!("{} ({})", name, user.role.as_str())
            })
            .unwrap_or_default()
    };
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center">
                        <h1 class="text-xl font-semibold text-fg">"HR Desk"</h1>
                    </div>
                    <div class="flex items-center gap-4">
                        <nav class="hidden lg:flex space-x-4">
                            <For
                                each=move || links.get()
                                key=|(href, _)| *href
                                children=move |(href, label)| view! {
                                    <a href=href class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                                        {label}
                                    </a>
                                }
                            />
                        </nav>
                        <span class="hidden lg:inline text-sm text-fg-muted">{user_label}</span>
                        <button
                            type="button"
                            class="lg:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                            on:click=toggle_menu
                            aria-expanded=move || menu_open.get()
                            aria-controls="mobile-nav"
                        >
                            <span class="sr-only">
                                {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                            </span>
                            <svg class="h-6 w-6" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                            </svg>
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <div id="mobile-nav" class="lg:hidden border-t border-border">
                        <nav class="px-4 py-3 space-y-2">
                            {move || links.get().into_iter().map(|(href, label)| view! {
                                <a
                                    href=href
                                    class="block text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    {label}
                                </a>
                            }).collect_view()}
                        </nav>
                    </div>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::provide_session_as;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn payroll_links_follow_role() {
        assert_eq!(nav_links(None).len(), 1);
        assert_eq!(nav_links(Some(Role::Client)).len(), 1);
        let hr = nav_links(Some(Role::HrAdmin));
        assert!(hr.contains(&("/salary-sheet", "Salary Sheet")));
        assert!(hr.contains(&("/applied-leave", "Applied Leave")));
    }

    #[test]
    fn header_renders_payroll_menu_for_admin() {
        let html = render_to_string(move || {
            provide_session_as(Role::Admin);
            view! { <Header /> }
        });
        assert!(html.contains("Salary Sheet"));
        assert!(html.contains("Admin User (Admin)"));
    }

    #[test]
    fn header_hides_payroll_menu_for_employee() {
        let html = render_to_string(move || {
            provide_session_as(Role::Employee);
            view! { <Header /> }
        });
        assert!(html.contains("Dashboard"));
        assert!(!html.contains("Salary Sheet"));
    }

    #[test]
    fn layout_renders_children_and_spinner() {
        let html = render_to_string(move || {
            provide_session_as(Role::Developer);
            view! {
                <Layout>
                    <LoadingSpinner />
                    <div>"child"</div>
                </Layout>
            }
        });
        assert!(html.contains("child"));
        assert!(html.contains("animate-spin"));
    }
}
