use chrono::NaiveDate;
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};

use crate::{
    api::{Month, SalaryRow},
    config::LetterProfile,
    export::{money, ExportError, SalaryReport},
};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN_LEFT: f32 = 14.0;
const MARGIN_TOP: f32 = 20.0;
const MARGIN_BOTTOM: f32 = 18.0;
const FIRST_LINE: f32 = PAGE_HEIGHT - 56.0;
const WRAP_AT: usize = 84;

pub const TABLE_HEADER: [&str; 8] = [
    "SL", "Name", "Account No.", "Salary", "Per Day", "Present", "Absent", "Total",
];
const TABLE_COLUMNS: [f32; 8] = [14.0, 23.0, 72.0, 108.0, 130.0, 150.0, 166.0, 182.0];
const NAME_WIDTH: usize = 26;

/// Text content of the fund transfer letter, independent of layout.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferLetter {
    pub date_line: String,
    pub recipient: Vec<String>,
    pub subject: String,
    pub body: Vec<String>,
    pub table_title: String,
    pub table_rows: Vec<[String; 8]>,
    pub total_line: String,
    pub words_line: String,
    pub closing: Vec<String>,
}

pub fn letter_filename(month: Month) -> String {
    format!("salary_transfer_{}.pdf", month)
}

fn table_row(index: usize, row: &SalaryRow) -> [String; 8] {
    let name = if row.name.chars().count() > NAME_WIDTH {
        let cut: String = row.name.chars().take(NAME_WIDTH - 1).collect();
        format!("{}.", cut)
    } else {
        row.name.clone()
    };
    let or_dash = |value: &str| {
        if value.trim().is_empty() {
            "-".to_string()
        } else {
            value.to_string()
        }
    };
    [
        (index + 1).to_string(),
        or_dash(&name),
        or_dash(&row.account_number),
        money::fixed2(row.salary),
        money::fixed2(row.per_day_salary),
        money::count_or_dash(row.present),
        money::count_or_dash(row.absent),
        money::fixed2(row.total),
    ]
}

/// Greedy word wrap on character count.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

impl TransferLetter {
    pub fn compose(
        profile: &LetterProfile,
        report: &SalaryReport,
        currency: &str,
        today: NaiveDate,
    ) -> Self {
        let mut recipient = vec![
            "To".to_string(),
            "The Manager,".to_string(),
            profile.bank_name.clone(),
        ];
        recipient.extend(profile.bank_branch_lines.iter().cloned());

        Self {
            date_line: format!("Date: {}", today.format("%d/%m/%Y")),
            recipient,
            subject: format!(
                "Subject: Request for fund transfer from account no. {} named: {}",
                profile.account_number, profile.company_name
            ),
            body: vec![
                "Dear Sir,".into(),
                String::new(),
                "We request you to transfer the below listed employee salaries".into(),
                "from our current account:".into(),
                String::new(),
                format!("Account Name: {}", profile.company_name),
                format!("Account Number: {}", profile.account_number),
            ],
            table_title: report.title(),
            table_rows: report
                .rows
                .iter()
                .enumerate()
                .map(|(index, row)| table_row(index, row))
                .collect(),
            total_line: report.total_line(currency),
            words_line: format!("In Words: {}", report.total_in_words(currency)),
            closing: vec![
                "With best regards,".into(),
                String::new(),
                profile.company_name.clone(),
                profile.signatory_title.clone(),
            ],
        }
    }

    pub fn render_pdf(&self) -> Result<Vec<u8>, ExportError> {
        let (doc, page, layer) = PdfDocument::new(
            self.table_title.as_str(),
            Mm(PAGE_WIDTH),
            Mm(PAGE_HEIGHT),
            "Layer 1",
        );
        let regular = doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_error)?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(pdf_error)?;

        {
            let mut pen = Pen {
                doc: &doc,
                layer: doc.get_page(page).get_layer(layer),
                y: FIRST_LINE,
            };

            pen.line(&self.date_line, 12.0, 6.5, &regular);
            pen.gap(4.0);
            for line in &self.recipient {
                pen.line(line, 12.0, 6.0, &regular);
            }
            pen.gap(4.0);
            for line in wrap(&self.subject, WRAP_AT) {
                pen.line(&line, 12.0, 6.0, &bold);
            }
            pen.gap(4.0);
            for line in &self.body {
                pen.line(line, 12.0, 6.0, &regular);
            }

            pen.gap(6.0);
            pen.line(&self.table_title, 14.0, 8.0, &bold);
            pen.cells(&TABLE_HEADER.map(String::from), 9.0, &bold);
            for row in &self.table_rows {
                pen.cells(row, 9.0, &regular);
            }

            pen.gap(6.0);
            pen.line(&self.total_line, 12.0, 7.0, &bold);
            for line in wrap(&self.words_line, WRAP_AT) {
                pen.line(&line, 12.0, 6.5, &regular);
            }
            pen.gap(10.0);
            for line in &self.closing {
                pen.line(line, 12.0, 6.0, &regular);
            }
        }

        doc.save_to_bytes().map_err(pdf_error)
    }
}

fn pdf_error(err: printpdf::Error) -> ExportError {
    ExportError::Pdf(format!("{:?}", err))
}

/// Writes lines top to bottom, starting a new page when the bottom margin
/// is reached.
struct Pen<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
}

impl Pen<'_> {
    fn advance(&mut self, height: f32) {
        if self.y - height < MARGIN_BOTTOM {
            let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT - MARGIN_TOP;
        }
        self.y -= height;
    }

    fn gap(&mut self, height: f32) {
        self.y -= height;
    }

    fn line(&mut self, text: &str, size: f32, height: f32, font: &IndirectFontRef) {
        self.advance(height);
        if !text.is_empty() {
            self.layer.use_text(text, size, Mm(MARGIN_LEFT), Mm(self.y), font);
        }
    }

    fn cells(&mut self, cells: &[String; 8], size: f32, font: &IndirectFontRef) {
        self.advance(5.5);
        for (x, text) in TABLE_COLUMNS.iter().zip(cells.iter()) {
            self.layer.use_text(text.as_str(), size, Mm(*x), Mm(self.y), font);
        }
    }
}
