use crate::api::EmployeeRecord;
use crate::components::{empty_state::TableMessageRow, layout::LoadingSpinner};
use crate::state::list_query::ListQuery;
use leptos::*;

pub fn status_badge_class(status: &str) -> &'static str {
    match status.trim().to_lowercase().as_str() {
        "active" => "bg-status-success-bg text-status-success-text",
        "on leave" => "bg-status-warning-bg text-status-warning-text",
        "pending" => "bg-status-info-bg text-status-info-text",
        "absent" => "bg-status-error-bg text-status-error-text",
        "suspended" => "bg-surface-muted text-fg",
        _ => "bg-action-ghost-bg-hover text-fg-muted",
    }
}

pub fn initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "U".to_string())
}

#[component]
pub fn EmployeeTable(
    #[prop(into)] employees: Signal<Vec<EmployeeRecord>>,
    #[prop(into)] query: Signal<ListQuery>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <table class="min-w-full text-sm">
            <thead class="bg-surface-muted text-fg-muted text-xs tracking-wider">
                <tr>
                    <th class="px-4 py-3 text-left">{"#"}</th>
                    <th class="px-4 py-3 text-left">{"Employee"}</th>
                    <th class="px-4 py-3 text-left">{"Designation"}</th>
                    <th class="px-4 py-3 text-left">{"Branch"}</th>
                    <th class="px-4 py-3 text-left">{"Phone"}</th>
                    <th class="px-4 py-3 text-left">{"Status"}</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    if loading.get() {
                        return view! { <tr><td colspan="6"><LoadingSpinner/></td></tr> }.into_view();
                    }
                    let rows = employees.get();
                    if rows.is_empty() {
                        return view! { <TableMessageRow colspan=6 message="No employees found"/> }
                            .into_view();
                    }
                    let query = query.get();
                    rows.into_iter()
                        .enumerate()
                        .map(|(index, emp)| {
                            let serial = query.serial_number(index);
                            let badge = format!(
                                "px-3 py-1 rounded-full text-xs capitalize {}",
                                status_badge_class(&emp.status)
                            );
                            view! {
                                <tr class="hover:bg-action-ghost-bg-hover">
                                    <td class="px-4 py-3 text-fg-muted">{serial}</td>
                                    <td class="px-4 py-3">
                                        <div class="flex items-center gap-2">
                                            <span class="w-8 h-8 rounded-full bg-surface-muted flex items-center justify-center font-semibold">
                                                {initial(&emp.full_name)}
                                            </span>
                                            <div>
                                                <p class="font-medium text-fg">{emp.full_name.clone()}</p>
                                                <p class="text-xs text-fg-muted">{emp.eid.clone()}</p>
                                            </div>
                                        </div>
                                    </td>
                                    <td class="px-4 py-3 capitalize">{emp.designation.clone()}</td>
                                    <td class="px-4 py-3 capitalize">{emp.branch.clone()}</td>
                                    <td class="px-4 py-3">{emp.phone_number.clone()}</td>
                                    <td class="px-4 py-3"><span class=badge>{emp.status.clone()}</span></td>
                                </tr>
                            }
                        })
                        .collect_view()
                }}
            </tbody>
        </table>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badges_are_case_insensitive_with_fallback() {
        assert_eq!(status_badge_class("Active"), status_badge_class("active"));
        assert!(status_badge_class("On Leave").contains("warning"));
        assert!(status_badge_class("retired").contains("fg-muted"));
    }

    #[test]
    fn initial_defaults_to_u() {
        assert_eq!(initial("rahim"), "R");
        assert_eq!(initial(""), "U");
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    fn employee(name: &str, status: &str) -> EmployeeRecord {
        EmployeeRecord {
            id: format!("id-{}", name),
            eid: "WB0001".into(),
            full_name: name.into(),
            email: String::new(),
            phone_number: "01700000000".into(),
            designation: "designer".into(),
            branch: "dhaka".into(),
            status: status.into(),
            role: "employee".into(),
        }
    }

    #[test]
    fn rows_carry_badges() {
        let html = render_to_string(|| {
            view! {
                <EmployeeTable
                    employees=Signal::derive(|| vec![employee("Rahim", "active"), employee("Karim", "suspended")])
                    query=Signal::derive(ListQuery::default)
                    loading=Signal::derive(|| false)
                />
            }
        });
        assert!(html.contains("Rahim"));
        assert!(html.contains("Karim"));
        assert!(html.contains("bg-status-success-bg"));
        assert!(!html.contains("No employees found"));
    }

    #[test]
    fn empty_result_has_message_row() {
        let html = render_to_string(|| {
            view! {
                <EmployeeTable
                    employees=Signal::derive(Vec::new)
                    query=Signal::derive(ListQuery::default)
                    loading=Signal::derive(|| false)
                />
            }
        });
        assert!(html.contains("No employees found"));
    }
}
