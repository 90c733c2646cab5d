use crate::api::SalaryRow;
use crate::components::{empty_state::TableMessageRow, layout::LoadingSpinner};
use crate::export::{count_or_dash, grouped};
use crate::state::list_query::ListQuery;
use leptos::*;

const HEADERS: [&str; 8] = [
    "Serial", "Name", "Account No.", "Salary", "Per Day", "Present", "Absent", "Total",
];

/// Display cells for one row; `serial` is the row's position across pages.
pub fn display_cells(serial: u64, row: &SalaryRow) -> [String; 8] {
    let account = if row.account_number.trim().is_empty() {
        "-".to_string()
    } else {
        row.account_number.clone()
    };
    [
        serial.to_string(),
        row.name.clone(),
        account,
        grouped(row.salary),
        grouped(row.per_day_salary),
        count_or_dash(row.present),
        count_or_dash(row.absent),
        grouped(row.total),
    ]
}

#[component]
pub fn SalaryTable(
    #[prop(into)] rows: Signal<Vec<SalaryRow>>,
    #[prop(into)] query: Signal<ListQuery>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    let numbered = move || {
        let query = query.get();
        rows.get()
            .iter()
            .enumerate()
            .map(|(index, row)| display_cells(query.serial_number(index), row))
            .collect::<Vec<_>>()
    };

    view! {
        <table class="min-w-full text-sm">
            <thead class="bg-action-primary-bg text-action-primary-text">
                <tr>
                    {HEADERS.iter().map(|title| view! { <th class="px-4 py-2">{*title}</th> }).collect_view()}
                </tr>
            </thead>
            <tbody>
                {move || {
                    if loading.get() {
                        view! { <tr><td colspan="8"><LoadingSpinner/></td></tr> }.into_view()
                    } else if rows.with(Vec::is_empty) {
                        view! { <TableMessageRow colspan=8 message="No data found"/> }.into_view()
                    } else {
                        numbered()
                            .into_iter()
                            .map(|cells| {
                                let [serial, name, account, salary, per_day, present, absent, total] = cells;
                                view! {
                                    <tr class="border-b border-border hover:bg-action-ghost-bg-hover">
                                        <td class="px-4 py-2">{serial}</td>
                                        <td class="px-4 py-2">{name}</td>
                                        <td class="px-4 py-2">{account}</td>
                                        <td class="px-4 py-2 text-center">{salary}</td>
                                        <td class="px-4 py-2 text-center">{per_day}</td>
                                        <td class="px-4 py-2 text-center">{present}</td>
                                        <td class="px-4 py-2 text-center">{absent}</td>
                                        <td class="px-4 py-2 text-center font-semibold">{total}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }
                }}
            </tbody>
        </table>
    }
}
