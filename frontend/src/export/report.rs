use crate::{
    api::{Month, SalaryRow},
    export::{money, words::number_to_words, ExportError},
};

/// One month's salary rows, fetched in full, ready to be written out.
#[derive(Debug, Clone, PartialEq)]
pub struct SalaryReport {
    pub month: Month,
    pub year: i32,
    pub rows: Vec<SalaryRow>,
}

impl SalaryReport {
    pub fn new(month: Option<Month>, year: i32, rows: Vec<SalaryRow>) -> Result<Self, ExportError> {
        let month = month.ok_or(ExportError::MonthRequired)?;
        Ok(Self { month, year, rows })
    }

    pub fn title(&self) -> String {
        format!("Salary Sheet - {} {}", self.month, self.year)
    }

    pub fn grand_total(&self) -> f64 {
        self.rows.iter().map(|row| row.total).sum()
    }

    pub fn total_line(&self, currency: &str) -> String {
        format!(
            "Total Amount to Transfer: {} {}",
            money::fixed2(self.grand_total()),
            currency
        )
    }

    /// Whole units only; paisa are dropped before spelling.
    pub fn total_in_words(&self, currency: &str) -> String {
        let whole = self.grand_total().max(0.0).round() as u64;
        format!(
            "{} {} ONLY",
            number_to_words(whole).to_uppercase(),
            currency
        )
    }
}
