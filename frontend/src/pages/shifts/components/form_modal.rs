use crate::api::WeekDay;
use crate::pages::shifts::form::{ShiftForm, BRANCHES};
use leptos::ev::SubmitEvent;
use leptos::*;

#[component]
fn TextField(
    label: &'static str,
    input_type: &'static str,
    form: RwSignal<Option<ShiftForm>>,
    read: fn(&ShiftForm) -> String,
    write: fn(&mut ShiftForm, String),
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="block text-sm">
            <span class="text-fg-muted">{label}</span>
            <input
                type=input_type
                placeholder=placeholder
                class="mt-1 w-full border border-border rounded-md px-3 py-2"
                prop:value=move || form.with(|f| f.as_ref().map(read).unwrap_or_default())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| {
                        if let Some(f) = f.as_mut() {
                            write(f, value);
                        }
                    });
                }
            />
        </label>
    }
}

/// Create/edit dialog; shown whenever `form` holds a value.
#[component]
pub fn ShiftFormModal(
    form: RwSignal<Option<ShiftForm>>,
    #[prop(into)] saving: Signal<bool>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let title = move || {
        if form.with(|f| f.as_ref().map(ShiftForm::is_edit).unwrap_or(false)) {
            "Update Shift"
        } else {
            "Create New Shift"
        }
    };
    let update = move |change: Box<dyn FnOnce(&mut ShiftForm)>| {
        form.update(|f| {
            if let Some(f) = f.as_mut() {
                change(f);
            }
        });
    };

    view! {
        <Show when=move || form.with(Option::is_some)>
            <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
                <div class="fixed inset-0 bg-overlay-backdrop" on:click=move |_| on_close.call(())></div>
                <form
                    class="relative w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    on:submit=move |ev: SubmitEvent| {
                        ev.prevent_default();
                        on_submit.call(());
                    }
                >
                    <h3 class="font-bold text-lg">{title}</h3>
                    <TextField
                        label="Shift Name"
                        input_type="text"
                        placeholder="e.g. Morning Shift"
                        form=form
                        read=|f| f.shift_name.clone()
                        write=|f, v| f.shift_name = v
                    />
                    <label class="block text-sm">
                        <span class="text-fg-muted">{"Branch"}</span>
                        <select
                            class="mt-1 w-full border border-border rounded-md px-3 py-2 capitalize"
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                update(Box::new(move |f| f.branch = value));
                            }
                        >
                            {BRANCHES
                                .iter()
                                .map(|branch| {
                                    let branch = *branch;
                                    view! {
                                        <option
                                            value=branch
                                            selected=move || form.with(|f| f.as_ref().map(|f| f.branch == branch).unwrap_or(false))
                                        >
                                            {branch}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </label>
                    <div class="grid grid-cols-2 gap-4">
                        <TextField label="Start Time" input_type="time" form=form read=|f| f.start_time.clone() write=|f, v| f.start_time = v/>
                        <TextField label="End Time" input_type="time" form=form read=|f| f.end_time.clone() write=|f, v| f.end_time = v/>
                    </div>
                    <div class="grid grid-cols-2 gap-4">
                        <TextField
                            label="Late After (min)"
                            input_type="number"
                            form=form
                            read=|f| f.late_after_minutes.clone()
                            write=|f, v| f.late_after_minutes = v
                        />
                        <TextField
                            label="Absent After (min)"
                            input_type="number"
                            form=form
                            read=|f| f.absent_after_minutes.clone()
                            write=|f, v| f.absent_after_minutes = v
                        />
                    </div>
                    <label class="flex items-center gap-2 text-sm">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.as_ref().map(|f| f.allow_ot).unwrap_or(false))
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                update(Box::new(move |f| f.allow_ot = checked));
                            }
                        />
                        <span>{"Allow Overtime"}</span>
                    </label>
                    <div>
                        <span class="text-sm text-fg-muted">{"Weekend Days"}</span>
                        <div class="mt-1 flex flex-wrap gap-2">
                            {WeekDay::ALL
                                .iter()
                                .map(|day| {
                                    let day = *day;
                                    let checked = move || {
                                        form.with(|f| f.as_ref().map(|f| f.weekends.contains(&day)).unwrap_or(false))
                                    };
                                    view! {
                                        <label class="flex items-center gap-1 text-xs">
                                            <input
                                                type="checkbox"
                                                prop:checked=checked
                                                on:change=move |_| update(Box::new(move |f| f.toggle_weekend(day)))
                                            />
                                            {day.label()}
                                        </label>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class="rounded-md px-4 py-2 text-sm bg-surface-muted"
                            on:click=move |_| on_close.call(())
                        >
                            {"Cancel"}
                        </button>
                        <button
                            type="submit"
                            class="rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                            disabled=move || saving.get()
                        >
                            {move || if saving.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    fn render(form: Option<ShiftForm>) -> String {
        render_to_string(move || {
            let form = create_rw_signal(form);
            let noop = Callback::new(|_: ()| {});
            view! { <ShiftFormModal form=form saving=Signal::derive(|| false) on_submit=noop on_close=noop/> }
        })
    }

    #[test]
    fn create_dialog_lists_weekdays_and_branches() {
        let html = render(Some(ShiftForm::default()));
        assert!(html.contains("Create New Shift"));
        assert!(html.contains("gaibandha"));
        assert!(html.contains("Thursday"));
        assert!(html.contains("Allow Overtime"));
    }

    #[test]
    fn edit_dialog_has_update_title() {
        let form = ShiftForm {
            id: Some("s1".into()),
            ..ShiftForm::default()
        };
        assert!(render(Some(form)).contains("Update Shift"));
    }

    #[test]
    fn closed_dialog_renders_nothing() {
        assert!(!render(None).contains("Shift Name"));
    }
}
