use rust_xlsxwriter::{Format, Workbook};

use crate::{
    api::{Month, SalaryRow},
    export::{money, ExportError, SalaryReport},
};

pub const SHEET_NAME: &str = "Salary Sheet";

/// Column titles, in sheet order.
pub const COLUMNS: [&str; 8] = [
    "Name",
    "Email",
    "Account Number",
    "Salary",
    "Per Day Salary",
    "Present",
    "Absent",
    "Total Payable",
];

/// Cell values for one salary row, aligned with [`COLUMNS`].
pub fn row_cells(row: &SalaryRow) -> [String; 8] {
    [
        row.name.clone(),
        row.email.clone(),
        row.account_number.clone(),
        money::fixed2(row.salary),
        money::fixed2(row.per_day_salary),
        row.present.map(|v| v.to_string()).unwrap_or_default(),
        row.absent.map(|v| v.to_string()).unwrap_or_default(),
        money::fixed2(row.total),
    ]
}

pub fn spreadsheet_filename(month: Month, year: i32) -> String {
    let month = month
        .name()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    format!("salary_sheet_{}_{}.xlsx", month, year)
}

pub fn workbook_bytes(report: &SalaryReport) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, title) in COLUMNS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *title, &header)?;
    }
    for (index, row) in report.rows.iter().enumerate() {
        let line = index as u32 + 1;
        for (col, value) in row_cells(row).into_iter().enumerate() {
            sheet.write_string(line, col as u16, value)?;
        }
    }
    sheet.set_column_width(0, 24)?;
    sheet.set_column_width(1, 30)?;
    sheet.set_column_width(2, 18)?;

    let bytes = workbook.save_to_buffer()?;
    log::debug!(
        "built {} with {} rows ({} bytes)",
        SHEET_NAME,
        report.rows.len(),
        bytes.len()
    );
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::salary_row;

    #[test]
    fn cells_follow_column_order() {
        let mut row = salary_row("Rahim", 28000.0);
        row.absent = None;
        assert_eq!(
            row_cells(&row),
            [
                "Rahim".to_string(),
                "rahim@example.com".to_string(),
                "2781100000001".to_string(),
                "30000.00".to_string(),
                "1000.00".to_string(),
                "26".to_string(),
                String::new(),
                "28000.00".to_string(),
            ]
        );
    }

    #[test]
    fn filename_uses_lowercase_month_and_year() {
        assert_eq!(
            spreadsheet_filename(Month::September, 2025),
            "salary_sheet_september_2025.xlsx"
        );
    }

    #[test]
    fn workbook_is_a_zip_container() {
        let report = SalaryReport::new(
            Some(Month::March),
            2025,
            vec![salary_row("Rahim", 28000.0), salary_row("Karim", 30000.0)],
        )
        .unwrap();
        let bytes = workbook_bytes(&report).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }
}
