use crate::state::list_query::{PageSize, SortKey, SortOrder};
use leptos::*;

#[component]
pub fn EmployeeToolbar(
    #[prop(into)] search: Signal<String>,
    #[prop(into)] sort_key: Signal<SortKey>,
    #[prop(into)] sort_order: Signal<SortOrder>,
    #[prop(into)] page_size: Signal<PageSize>,
    on_search: Callback<String>,
    on_sort_key: Callback<SortKey>,
    on_sort_order: Callback<SortOrder>,
    on_page_size: Callback<PageSize>,
) -> impl IntoView {
    let select = "border border-border rounded-md px-3 py-2 text-sm bg-surface-elevated";

    view! {
        <div class="flex flex-wrap items-center justify-between gap-6">
            <input
                type="text"
                placeholder="Search name or ID..."
                class="w-full max-w-sm border border-border px-3 py-2 text-sm rounded-md"
                prop:value=move || search.get()
                on:input=move |ev| on_search.call(event_target_value(&ev))
            />
            <div class="flex items-center gap-4">
                <select
                    class=select
                    on:change=move |ev| {
                        if let Some(key) = SortKey::from_wire(&event_target_value(&ev)) {
                            on_sort_key.call(key);
                        }
                    }
                >
                    {SortKey::ALL
                        .iter()
                        .map(|key| {
                            let key = *key;
                            view! {
                                <option value=key.wire_name() selected=move || sort_key.get() == key>
                                    {format!("Sort by {}", key.label())}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <select
                    class=select
                    on:change=move |ev| {
                        if let Some(order) = SortOrder::from_wire(&event_target_value(&ev)) {
                            on_sort_order.call(order);
                        }
                    }
                >
                    {[SortOrder::Asc, SortOrder::Desc]
                        .into_iter()
                        .map(|order| {
                            view! {
                                <option value=order.wire_value().to_string() selected=move || sort_order.get() == order>
                                    {order.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <select
                    class=select
                    on:change=move |ev| {
                        let size = event_target_value(&ev)
                            .parse::<u32>()
                            .ok()
                            .and_then(PageSize::from_u32);
                        if let Some(size) = size {
                            on_page_size.call(size);
                        }
                    }
                >
                    {PageSize::ALL
                        .iter()
                        .map(|size| {
                            let size = *size;
                            view! {
                                <option value=size.get().to_string() selected=move || page_size.get() == size>
                                    {size.get().to_string()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
        </div>
    }
}
