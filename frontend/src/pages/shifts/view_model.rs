use super::{form::ShiftForm, repository::ShiftRepository};
use crate::api::{ApiClient, ApiError, Shift};
use crate::state::{
    notifications::{use_notifications, Notifications},
    refetch::use_refetch_bus,
    session::use_session,
};
use leptos::*;
use std::rc::Rc;

pub type ShiftListResource = Resource<u64, Result<Vec<Shift>, ApiError>>;

#[derive(Clone, Copy)]
pub struct ShiftsViewModel {
    pub shifts: ShiftListResource,
    /// Open dialog contents; `None` while closed.
    pub form: RwSignal<Option<ShiftForm>>,
    pub save_action: Action<Shift, Result<String, ApiError>>,
    toasts: Notifications,
}

pub fn use_shifts_view_model() -> ShiftsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let repo = ShiftRepository::new_with_client(Rc::new(api));
    let session = use_session();
    let refetch = use_refetch_bus();
    let toasts = use_notifications();

    let repo_list = repo.clone();
    let shifts = create_resource(
        move || refetch.track(),
        move |_| {
            let repo = repo_list.clone();
            async move { repo.list().await }
        },
    );

    create_effect(move |_| {
        if let Some(Err(err)) = shifts.get() {
            toasts.error(format!("Error fetching data: {}", err));
        }
    });

    let save_action = create_action(move |shift: &Shift| {
        let repo = repo.clone();
        let shift = shift.clone();
        let actor = session.email_untracked();
        async move { repo.save(shift, &actor).await }
    });

    let form = create_rw_signal(None::<ShiftForm>);

    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(message) => {
                    toasts.success(message);
                    form.set(None);
                    refetch.notify();
                }
                Err(err) => {
                    toasts.error(err.error);
                }
            }
        }
    });

    ShiftsViewModel {
        shifts,
        form,
        save_action,
        toasts,
    }
}

impl ShiftsViewModel {
    pub fn open_create(&self) {
        self.form.set(Some(ShiftForm::default()));
    }

    pub fn open_edit(&self, shift: &Shift) {
        self.form.set(Some(ShiftForm::from_shift(shift)));
    }

    pub fn close(&self) {
        self.form.set(None);
    }

    pub fn edit(&self, change: impl FnOnce(&mut ShiftForm)) {
        self.form.update(|form| {
            if let Some(form) = form.as_mut() {
                change(form);
            }
        });
    }

    pub fn is_saving(&self) -> bool {
        self.save_action.pending().get()
    }

    pub fn submit(&self) {
        let Some(form) = self.form.get_untracked() else {
            return;
        };
        match form.validate() {
            Ok(shift) => self.save_action.dispatch(shift),
            Err(err) => {
                log::warn!("shift form rejected: {}", err);
                self.toasts.warning(ApiError::from(err).error);
            }
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{Role, WeekDay};
    use crate::state::notifications::{provide_notifications, ToastKind};
    use crate::test_support::helpers::provide_session_as;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn invalid_form_warns_without_saving() {
        with_runtime(|| {
            provide_session_as(Role::HrAdmin);
            let toasts = provide_notifications();
            let vm = use_shifts_view_model();
            vm.open_create();
            vm.edit(|form| form.shift_name = "Morning".into());
            vm.submit();
            assert_eq!(vm.save_action.version().get_untracked(), 0);
            let items = toasts.items().get_untracked();
            assert_eq!(items[0].kind, ToastKind::Warning);
            assert_eq!(items[0].message, "Start time must be a time in HH:MM format");
        });
    }

    #[test]
    fn edit_prefills_and_updates_form() {
        with_runtime(|| {
            provide_session_as(Role::Admin);
            let vm = use_shifts_view_model();
            let shift = Shift {
                id: Some("s1".into()),
                shift_name: "Evening".into(),
                branch: "gaibandha".into(),
                start_time: "14:00".into(),
                end_time: "22:00".into(),
                late_after_minutes: 10,
                absent_after_minutes: 30,
                allow_ot: false,
                weekends: vec![WeekDay::Friday],
            };
            vm.open_edit(&shift);
            vm.edit(|form| form.toggle_weekend(WeekDay::Saturday));
            let form = vm.form.get_untracked().unwrap();
            assert!(form.is_edit());
            assert_eq!(form.branch, "gaibandha");
            assert_eq!(form.weekends.len(), 2);
            vm.close();
            assert!(vm.form.get_untracked().is_none());
        });
    }
}
