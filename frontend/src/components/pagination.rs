use leptos::*;

pub fn has_previous(page: u32) -> bool {
    page > 1
}

pub fn has_next(page: u32, total_pages: u32) -> bool {
    page < total_pages
}

#[component]
pub fn Pagination(
    #[prop(into)] page: MaybeSignal<u32>,
    #[prop(into)] total_pages: MaybeSignal<u32>,
    on_change: Callback<u32>,
) -> impl IntoView {
    let button = "px-4 py-1 border border-border rounded-lg hover:bg-action-ghost-bg-hover disabled:opacity-40";

    view! {
        <Show when=move || { total_pages.get() > 0 }>
            <div class="flex items-center justify-center gap-3 pt-4 flex-wrap">
                <button
                    type="button"
                    class=button
                    disabled=move || !has_previous(page.get())
                    on:click=move |_| {
                        let current = page.get_untracked();
                        if has_previous(current) {
                            on_change.call(current - 1);
                        }
                    }
                >
                    "Previous"
                </button>
                {move || {
                    let current = page.get();
                    (1..=total_pages.get())
                        .map(|number| {
                            let class = if number == current {
                                "px-3 py-1 border rounded-lg m-1 bg-action-primary-bg text-action-primary-text border-action-primary-bg"
                            } else {
                                "px-3 py-1 border rounded-lg m-1 border-border hover:bg-action-ghost-bg-hover"
                            };
                            view! {
                                <button
                                    type="button"
                                    class=class
                                    aria-current=move || (number == current).then_some("page")
                                    on:click=move |_| on_change.call(number)
                                >
                                    {number}
                                </button>
                            }
                        })
                        .collect_view()
                }}
                <button
                    type="button"
                    class=button
                    disabled=move || !has_next(page.get(), total_pages.get())
                    on:click=move |_| {
                        let current = page.get_untracked();
                        if has_next(current, total_pages.get_untracked()) {
                            on_change.call(current + 1);
                        }
                    }
                >
                    "Next"
                </button>
            </div>
        </Show>
    }
}
