use crate::api::Shift;
use crate::components::empty_state::TableMessageRow;
use leptos::*;

pub fn weekend_summary(shift: &Shift) -> String {
    if shift.weekends.is_empty() {
        "-".to_string()
    } else {
        shift
            .weekends
            .iter()
            .map(|day| day.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[component]
pub fn ShiftList(#[prop(into)] shifts: Signal<Vec<Shift>>, on_edit: Callback<Shift>) -> impl IntoView {
    view! {
        <table class="min-w-full text-sm">
            <thead class="bg-surface-muted text-fg-muted text-xs">
                <tr>
                    <th class="px-4 py-3 text-left">{"Shift"}</th>
                    <th class="px-4 py-3 text-left">{"Branch"}</th>
                    <th class="px-4 py-3 text-left">{"Time"}</th>
                    <th class="px-4 py-3 text-left">{"Late / Absent after"}</th>
                    <th class="px-4 py-3 text-left">{"OT"}</th>
                    <th class="px-4 py-3 text-left">{"Weekends"}</th>
                    <th class="px-4 py-3 text-center">{"Action"}</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    let rows = shifts.get();
                    if rows.is_empty() {
                        return view! { <TableMessageRow colspan=7 message="No shifts found"/> }.into_view();
                    }
                    rows.into_iter()
                        .map(|shift| {
                            let weekends = weekend_summary(&shift);
                            let stored = store_value(shift.clone());
                            view! {
                                <tr class="hover:bg-action-ghost-bg-hover">
                                    <td class="px-4 py-3 font-medium">{shift.shift_name.clone()}</td>
                                    <td class="px-4 py-3 capitalize">{shift.branch.clone()}</td>
                                    <td class="px-4 py-3">{format!("{} - {}", shift.start_time, shift.end_time)}</td>
                                    <td class="px-4 py-3">
                                        {format!("{} / {} min", shift.late_after_minutes, shift.absent_after_minutes)}
                                    </td>
                                    <td class="px-4 py-3">{if shift.allow_ot { "Yes" } else { "No" }}</td>
                                    <td class="px-4 py-3">{weekends}</td>
                                    <td class="px-4 py-3 text-center">
                                        <button
                                            type="button"
                                            class="text-action-primary-bg hover:underline"
                                            on:click=move |_| on_edit.call(stored.get_value())
                                        >
                                            {"Edit"}
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()
                }}
            </tbody>
        </table>
    }
}
