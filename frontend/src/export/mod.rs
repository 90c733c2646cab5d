//! Salary sheet exports: the xlsx workbook and the bank transfer letter.

mod letter;
mod money;
mod report;
mod spreadsheet;
mod words;

pub use letter::{letter_filename, TransferLetter};
pub use money::{count_or_dash, fixed2, grouped};
pub use report::SalaryReport;
pub use spreadsheet::{row_cells, spreadsheet_filename, workbook_bytes, COLUMNS, SHEET_NAME};
pub use words::number_to_words;

use chrono::NaiveDate;
use thiserror::Error;

use crate::{
    api::ApiError,
    config::RuntimeConfig,
    utils::{trigger_download, PDF_MIME, XLSX_MIME},
};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Please select a month before exporting.")]
    MonthRequired,
    #[error("Failed to build workbook: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
    #[error("Failed to build PDF: {0}")]
    Pdf(String),
    #[error("Download failed: {0}")]
    Download(String),
}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::MonthRequired => ApiError::validation(err.to_string()),
            other => ApiError::unknown(other.to_string()),
        }
    }
}

/// A finished export waiting to be handed to the browser.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportFile {
    pub filename: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportFile {
    pub fn download(&self) -> Result<(), ExportError> {
        trigger_download(&self.filename, &self.bytes, self.mime).map_err(ExportError::Download)
    }
}

pub fn spreadsheet_file(report: &SalaryReport) -> Result<ExportFile, ExportError> {
    Ok(ExportFile {
        filename: spreadsheet_filename(report.month, report.year),
        mime: XLSX_MIME,
        bytes: workbook_bytes(report)?,
    })
}

pub fn transfer_letter_file(
    report: &SalaryReport,
    config: &RuntimeConfig,
    today: NaiveDate,
) -> Result<ExportFile, ExportError> {
    let letter = TransferLetter::compose(
        &config.transfer_letter,
        report,
        &config.currency_label,
        today,
    );
    Ok(ExportFile {
        filename: letter_filename(report.month),
        mime: PDF_MIME,
        bytes: letter.render_pdf()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{api::Month, test_support::helpers::salary_row};

    fn march() -> SalaryReport {
        SalaryReport::new(Some(Month::March), 2025, vec![salary_row("Rahim", 28000.0)]).unwrap()
    }

    #[test]
    fn missing_month_is_a_validation_error() {
        let err: ApiError = ExportError::MonthRequired.into();
        assert!(err.is_validation());
        assert_eq!(err.error, "Please select a month before exporting.");
    }

    #[test]
    fn other_failures_are_unknown_errors() {
        let err: ApiError = ExportError::Download("No document".into()).into();
        assert!(!err.is_validation());
        assert_eq!(err.error, "Download failed: No document");
    }

    #[test]
    fn files_carry_names_and_mime_types() {
        let xlsx = spreadsheet_file(&march()).unwrap();
        assert_eq!(xlsx.filename, "salary_sheet_march_2025.xlsx");
        assert_eq!(xlsx.mime, XLSX_MIME);

        let today = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        let pdf = transfer_letter_file(&march(), &RuntimeConfig::default(), today).unwrap();
        assert_eq!(pdf.filename, "salary_transfer_March.pdf");
        assert_eq!(pdf.mime, PDF_MIME);
        assert!(!pdf.bytes.is_empty());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn host_download_reports_failure() {
        let file = spreadsheet_file(&march()).unwrap();
        assert!(matches!(file.download(), Err(ExportError::Download(_))));
    }
}
