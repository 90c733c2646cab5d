use super::repository::{SalaryQuery, SalaryRepository};
use crate::api::{ApiClient, ApiError, Month, SalaryRow};
use crate::config::{self, RuntimeConfig};
use crate::export::{spreadsheet_file, transfer_letter_file, ExportFile, SalaryReport};
use crate::state::{
    list_fetch::{use_list_fetch, FetchState},
    list_query::{use_list_query, ListQueryController, PageSize},
    notifications::{use_notifications, Notifications},
};
use chrono::{Datelike, NaiveDate};
use leptos::*;
use std::rc::Rc;

pub const SEARCH_NEEDS_MONTH: &str = "Please select a month before searching.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Spreadsheet,
    TransferLetter,
}

impl ExportKind {
    pub fn missing_month_message(&self) -> &'static str {
        match self {
            ExportKind::Spreadsheet => "Please select a month before exporting.",
            ExportKind::TransferLetter => "Please select a month before exporting PDF.",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            ExportKind::Spreadsheet => "Excel exported successfully!",
            ExportKind::TransferLetter => "PDF generated!",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            ExportKind::Spreadsheet => "Export failed.",
            ExportKind::TransferLetter => "PDF generation failed!",
        }
    }
}

/// Fetches the whole month and renders it as `kind`. The visible page plays
/// no part in what gets exported.
pub async fn build_export(
    repo: &SalaryRepository,
    kind: ExportKind,
    month: Option<Month>,
    search: &str,
    config: &RuntimeConfig,
    today: NaiveDate,
) -> Result<ExportFile, ApiError> {
    let rows = match month {
        Some(month) => repo.fetch_full(search, month).await?,
        None => return Err(ApiError::validation(kind.missing_month_message())),
    };
    let report = SalaryReport::new(month, today.year(), rows)?;
    let file = match kind {
        ExportKind::Spreadsheet => spreadsheet_file(&report)?,
        ExportKind::TransferLetter => transfer_letter_file(&report, config, today)?,
    };
    log::info!(
        "{} ready: {} rows, {} bytes",
        file.filename,
        report.rows.len(),
        file.bytes.len()
    );
    Ok(file)
}

#[derive(Clone, Copy)]
pub struct SalarySheetViewModel {
    pub controller: ListQueryController,
    pub month: RwSignal<Option<Month>>,
    pub query: Memo<SalaryQuery>,
    pub sheet: RwSignal<FetchState<SalaryRow>>,
    pub export_action: Action<ExportKind, (ExportKind, Result<(), ApiError>)>,
    toasts: Notifications,
}

pub fn use_salary_sheet_view_model() -> SalarySheetViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let repo = SalaryRepository::new_with_client(Rc::new(api));
    let controller = use_list_query();
    let toasts = use_notifications();
    let month = create_rw_signal(None::<Month>);

    let list_query = controller.query();
    let query = create_memo(move |_| SalaryQuery {
        month: month.get(),
        list: list_query.get(),
    });
    let sheet = use_list_fetch(repo.clone(), query.into());

    create_effect(move |_| {
        let state = sheet.get();
        if !state.is_loading && state.error.is_none() {
            controller.clamp_page(state.total_pages);
        }
    });

    let export_action = create_action(move |kind: &ExportKind| {
        let repo = repo.clone();
        let kind = *kind;
        let selected = month.get_untracked();
        let search = controller.snapshot().search_text;
        async move {
            let config = config::current();
            let today = chrono::Local::now().date_naive();
            let result = build_export(&repo, kind, selected, &search, &config, today)
                .await
                .and_then(|file| file.download().map_err(ApiError::from));
            (kind, result)
        }
    });

    create_effect(move |_| {
        if let Some((kind, result)) = export_action.value().get() {
            match result {
                Ok(()) => {
                    toasts.success(kind.success_message());
                }
                Err(err) => {
                    log::error!("{:?} export failed: {}", kind, err);
                    toasts.error(kind.failure_message());
                }
            }
        }
    });

    SalarySheetViewModel {
        controller,
        month,
        query,
        sheet,
        export_action,
        toasts,
    }
}

impl SalarySheetViewModel {
    /// A new month starts again from the first page.
    /// Month and page change together so only one query is issued.
    pub fn select_month(&self, month: Option<Month>) {
        batch(|| {
            self.month.set(month);
            self.controller.reset_page();
        });
    }

    pub fn on_search_input(&self, text: String) {
        let month = self.month;
        let toasts = self.toasts;
        self.controller.schedule_search(text, move || {
            if month.get_untracked().is_some() {
                true
            } else {
                toasts.warning(SEARCH_NEEDS_MONTH);
                false
            }
        });
    }

    pub fn set_page_size(&self, size: PageSize) {
        self.controller.set_page_size(size);
    }

    pub fn set_page(&self, page: u32) {
        self.controller.set_page(page);
    }

    pub fn export(&self, kind: ExportKind) {
        if self.month.get_untracked().is_none() {
            log::warn!("export refused: no month selected");
            self.toasts.warning(kind.missing_month_message());
            return;
        }
        if self.export_action.pending().get_untracked() {
            return;
        }
        self.export_action.dispatch(kind);
    }

    pub fn is_exporting(&self, kind: ExportKind) -> bool {
        self.export_action.pending().get() && self.export_action.input().get() == Some(kind)
    }
}
