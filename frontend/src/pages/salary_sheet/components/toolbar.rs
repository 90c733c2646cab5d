use crate::api::Month;
use crate::components::common::SearchInput;
use crate::state::list_query::PageSize;
use leptos::*;

#[component]
fn ExportButton(
    label: &'static str,
    #[prop(into)] enabled: Signal<bool>,
    #[prop(into)] spinning: Signal<bool>,
    #[prop(into)] blocked: Signal<bool>,
    accent: &'static str,
    on_click: Callback<()>,
) -> impl IntoView {
    let class = move || {
        if enabled.get() {
            format!("flex items-center gap-2 px-4 py-1.5 rounded-lg shadow {}", accent)
        } else {
            "flex items-center gap-2 px-4 py-1.5 rounded-lg shadow bg-surface-muted text-fg-muted cursor-not-allowed".to_string()
        }
    };
    view! {
        <button
            type="button"
            class=class
            disabled=move || !enabled.get() || blocked.get()
            on:click=move |_| on_click.call(())
        >
            <Show
                when=move || spinning.get()
                fallback=|| view! { <i class="fas fa-download"></i> }
            >
                <span class="h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent"></span>
            </Show>
            {label}
        </button>
    }
}

#[component]
pub fn SalaryToolbar(
    #[prop(into)] month: Signal<Option<Month>>,
    #[prop(into)] page_size: Signal<PageSize>,
    #[prop(into)] search: Signal<String>,
    #[prop(into)] exporting_sheet: Signal<bool>,
    #[prop(into)] exporting_letter: Signal<bool>,
    on_search: Callback<String>,
    on_month: Callback<Option<Month>>,
    on_page_size: Callback<PageSize>,
    on_export_sheet: Callback<()>,
    on_export_letter: Callback<()>,
) -> impl IntoView {
    let has_month = Signal::derive(move || month.get().is_some());
    let any_busy = Signal::derive(move || exporting_sheet.get() || exporting_letter.get());

    view! {
        <div class="flex flex-wrap items-center gap-4">
            <SearchInput placeholder="Search by name or email..." value=search on_input=on_search/>
            <select
                class="border border-border rounded-lg px-3 py-1 bg-surface-elevated shadow-sm"
                on:change=move |ev| on_month.call(Month::parse(&event_target_value(&ev)))
            >
                <option value="" selected=move || month.get().is_none()>{"Select Month (Required)"}</option>
                {Month::ALL
                    .iter()
                    .map(|m| {
                        let m = *m;
                        view! {
                            <option value=m.name() selected=move || month.get() == Some(m)>{m.name()}</option>
                        }
                    })
                    .collect_view()}
            </select>
            <select
                class="border border-border rounded-lg px-3 py-1 bg-surface-elevated shadow-sm"
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
            <ExportButton
                label="Export Excel"
                enabled=has_month
                spinning=exporting_sheet
                blocked=any_busy
                accent="bg-action-primary-bg hover:bg-action-primary-bg-hover text-action-primary-text"
                on_click=on_export_sheet
            />
            <ExportButton
                label="Generate PDF"
                enabled=has_month
                spinning=exporting_letter
                blocked=any_busy
                accent="bg-action-danger-bg hover:bg-action-danger-bg-hover text-action-danger-text"
                on_click=on_export_letter
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    fn render(month: Option<Month>) -> String {
        render_to_string(move || {
            let noop = Callback::new(|_: ()| {});
            view! {
                <SalaryToolbar
                    month=Signal::derive(move || month)
                    page_size=Signal::derive(PageSize::default)
                    search=Signal::derive(String::new)
                    exporting_sheet=Signal::derive(|| false)
                    exporting_letter=Signal::derive(|| false)
                    on_search=Callback::new(|_: String| {})
                    on_month=Callback::new(|_: Option<Month>| {})
                    on_page_size=Callback::new(|_: PageSize| {})
                    on_export_sheet=noop
                    on_export_letter=noop
                />
            }
        })
    }

    #[test]
    fn exports_are_disabled_without_month() {
        let html = render(None);
        assert!(html.contains("Select Month (Required)"));
        assert!(html.contains("cursor-not-allowed"));
        assert_eq!(html.matches("disabled").count(), 2);
    }

    #[test]
    fn exports_are_enabled_with_month() {
        let html = render(Some(Month::March));
        assert!(html.contains("Export Excel"));
        assert!(html.contains("Generate PDF"));
        assert!(!html.contains("cursor-not-allowed"));
    }
}
