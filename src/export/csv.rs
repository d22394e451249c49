//! CSV export
//!
//! Serializes a filtered view into CSV text plus a suggested filename. The
//! builder is pure: handing the result to a file write is the CLI handler's
//! job, which keeps every rule here testable.
//!
//! Each domain declares an ordered column list. Free-text and multi-valued
//! columns are always quoted; every other value is quoted only when it
//! contains a comma, quote, or newline. Embedded quotes are doubled.

use chrono::NaiveDate;

use crate::models::{Emi, Expense, LendingEntry, SplitExpense};

/// Quoting rule for a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quote {
    /// Always wrap the value in double quotes (free-text and multi-valued
    /// columns)
    Always,
    /// Quote only when the value contains a comma, quote, or newline
    WhenNeeded,
}

/// One declared export column: a header name, a quoting rule, and a field
/// accessor
pub struct Column<R> {
    header: &'static str,
    quote: Quote,
    value: fn(&R) -> String,
}

impl<R> Column<R> {
    /// Declare a column
    pub fn new(header: &'static str, quote: Quote, value: fn(&R) -> String) -> Self {
        Self {
            header,
            quote,
            value,
        }
    }

    /// The column header name
    pub fn header(&self) -> &'static str {
        self.header
    }

    /// Render a record's value for this column, applying the quoting rule
    pub fn render(&self, record: &R) -> String {
        let raw = (self.value)(record);
        match self.quote {
            Quote::Always => quote(&raw),
            Quote::WhenNeeded => {
                if raw.contains(',') || raw.contains('"') || raw.contains('\n') {
                    quote(&raw)
                } else {
                    raw
                }
            }
        }
    }
}

/// Wrap a value in double quotes, doubling embedded quotes
fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Implemented by record types that can be exported to CSV
pub trait Exportable: Sized {
    /// Filename slug for this list (e.g. "expenses")
    const SLUG: &'static str;

    /// The declared column list, in export order
    fn columns() -> Vec<Column<Self>>;
}

/// A built export: serialized contents and a suggested filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub contents: String,
}

/// Serialize a filtered view to CSV
///
/// One header row, then one row per record in filter order. The filename is
/// `<slug>_<ISO-date>.csv` for every domain.
pub fn export_csv<R: Exportable>(records: &[R], exported_on: NaiveDate) -> ExportFile {
    let columns = R::columns();

    let mut contents = columns
        .iter()
        .map(|c| c.header())
        .collect::<Vec<_>>()
        .join(",");
    contents.push('\n');

    for record in records {
        let row = columns
            .iter()
            .map(|c| c.render(record))
            .collect::<Vec<_>>()
            .join(",");
        contents.push_str(&row);
        contents.push('\n');
    }

    ExportFile {
        filename: format!("{}_{}.csv", R::SLUG, exported_on),
        contents,
    }
}

/// Render an optional date, using the `-` sentinel when absent
fn date_or_dash(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.to_string(),
        None => "-".to_string(),
    }
}

impl Exportable for Expense {
    const SLUG: &'static str = "expenses";

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Date", Quote::WhenNeeded, |e: &Expense| e.date.to_string()),
            Column::new("Category", Quote::WhenNeeded, |e: &Expense| {
                e.category.as_str().to_string()
            }),
            Column::new("Description", Quote::Always, |e: &Expense| {
                e.description.clone()
            }),
            Column::new("Amount", Quote::WhenNeeded, |e: &Expense| {
                e.amount.units().to_string()
            }),
            Column::new("Payment Method", Quote::WhenNeeded, |e: &Expense| {
                e.payment_method.clone()
            }),
        ]
    }
}

impl Exportable for Emi {
    const SLUG: &'static str = "emi";

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Loan Type", Quote::WhenNeeded, |e: &Emi| {
                e.loan_type.clone()
            }),
            Column::new("Lender", Quote::Always, |e: &Emi| e.lender.clone()),
            Column::new("Total Amount", Quote::WhenNeeded, |e: &Emi| {
                e.total_amount.units().to_string()
            }),
            Column::new("EMI Amount", Quote::WhenNeeded, |e: &Emi| {
                e.emi_amount.units().to_string()
            }),
            Column::new("Tenure", Quote::WhenNeeded, |e: &Emi| e.tenure.to_string()),
            Column::new("Paid Months", Quote::WhenNeeded, |e: &Emi| {
                e.paid_months.to_string()
            }),
            Column::new("Next Due Date", Quote::WhenNeeded, |e: &Emi| {
                date_or_dash(e.next_due_date)
            }),
            Column::new("Status", Quote::WhenNeeded, |e: &Emi| {
                e.status.as_str().to_string()
            }),
        ]
    }
}

impl Exportable for LendingEntry {
    const SLUG: &'static str = "lending";

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Date", Quote::WhenNeeded, |e: &LendingEntry| {
                e.date.to_string()
            }),
            Column::new("Person", Quote::Always, |e: &LendingEntry| e.person.clone()),
            Column::new("Amount", Quote::WhenNeeded, |e: &LendingEntry| {
                e.amount.units().to_string()
            }),
            Column::new("Type", Quote::WhenNeeded, |e: &LendingEntry| {
                e.kind.as_str().to_string()
            }),
            Column::new("Due Date", Quote::WhenNeeded, |e: &LendingEntry| {
                date_or_dash(e.due_date)
            }),
            Column::new("Status", Quote::WhenNeeded, |e: &LendingEntry| {
                e.status.as_str().to_string()
            }),
            Column::new("Notes", Quote::Always, |e: &LendingEntry| e.notes.clone()),
        ]
    }
}

impl Exportable for SplitExpense {
    const SLUG: &'static str = "split_expenses";

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Date", Quote::WhenNeeded, |e: &SplitExpense| {
                e.date.to_string()
            }),
            Column::new("Description", Quote::Always, |e: &SplitExpense| {
                e.description.clone()
            }),
            Column::new("Total Amount", Quote::WhenNeeded, |e: &SplitExpense| {
                e.total_amount.units().to_string()
            }),
            Column::new("Paid By", Quote::Always, |e: &SplitExpense| {
                e.paid_by.clone()
            }),
            Column::new("Split With", Quote::Always, |e: &SplitExpense| {
                e.split_with.join(", ")
            }),
            Column::new("Your Share", Quote::WhenNeeded, |e: &SplitExpense| {
                e.your_share.units().to_string()
            }),
            Column::new("Status", Quote::WhenNeeded, |e: &SplitExpense| {
                e.status.as_str().to_string()
            }),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ExpenseCategory, LendingKind, LendingStatus, Money, SplitStatus, YOU,
    };
    use crate::storage::seed;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 21).unwrap()
    }

    #[test]
    fn test_expense_export_shape() {
        let file = export_csv(&seed::sample_expenses(), today());

        assert_eq!(file.filename, "expenses_2024-03-21.csv");

        let mut lines = file.contents.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Date,Category,Description,Amount,Payment Method"
        );
        assert_eq!(
            lines.next().unwrap(),
            "2024-03-20,Groceries,\"Weekly groceries from Supermart\",2500,Credit Card"
        );
        assert_eq!(file.contents.lines().count(), 6);
    }

    #[test]
    fn test_emi_filename_carries_date_like_the_rest() {
        let file = export_csv(&seed::sample_emis(), today());
        assert_eq!(file.filename, "emi_2024-03-21.csv");
    }

    #[test]
    fn test_missing_due_date_exports_dash() {
        let file = export_csv(&seed::sample_emis(), today());
        let completed_row = file
            .contents
            .lines()
            .find(|l| l.contains("Personal Loan"))
            .unwrap();
        assert!(completed_row.contains(",-,"));
    }

    #[test]
    fn test_multi_valued_field_is_one_quoted_field() {
        let file = export_csv(&seed::sample_splits(), today());
        let grocery_row = file
            .contents
            .lines()
            .find(|l| l.contains("\"Groceries\""))
            .unwrap();
        assert!(grocery_row.contains("\"Sarah, Mike, John\""));
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        let expense = crate::models::Expense::new(
            today(),
            ExpenseCategory::Others,
            "the \"special\" one",
            Money::from_units(10),
            "Cash",
        );
        let file = export_csv(&[expense], today());
        assert!(file.contents.contains("\"the \"\"special\"\" one\""));
    }

    #[test]
    fn test_empty_view_exports_header_only() {
        let file = export_csv::<Expense>(&[], today());
        assert_eq!(file.contents.lines().count(), 1);
    }

    #[test]
    fn test_roundtrip_with_csv_reader() {
        let records = seed::sample_lending();
        let file = export_csv(&records, today());

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(file.contents.as_bytes());

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), records.len());

        for (row, record) in rows.iter().zip(records.iter()) {
            assert_eq!(&row[0], record.date.to_string().as_str());
            assert_eq!(&row[1], record.person.as_str());
            assert_eq!(&row[2], record.amount.units().to_string().as_str());
            assert_eq!(&row[3], record.kind.as_str());
            assert_eq!(&row[5], record.status.as_str());
            assert_eq!(&row[6], record.notes.as_str());
        }
    }

    #[test]
    fn test_rows_follow_filter_order() {
        let entries = vec![
            crate::models::LendingEntry::new(
                today(),
                "Beta",
                Money::from_units(1),
                LendingKind::Lent,
                None,
                LendingStatus::Pending,
                "",
            ),
            crate::models::LendingEntry::new(
                today(),
                "Alpha",
                Money::from_units(2),
                LendingKind::Lent,
                None,
                LendingStatus::Pending,
                "",
            ),
        ];

        let file = export_csv(&entries, today());
        let body: Vec<&str> = file.contents.lines().skip(1).collect();
        assert!(body[0].contains("Beta"));
        assert!(body[1].contains("Alpha"));
    }

    #[test]
    fn test_split_roundtrip_preserves_participants() {
        let split = crate::models::SplitExpense::new(
            today(),
            "Trip",
            Money::from_units(900),
            YOU,
            vec!["A, Jr.".into(), "B".into()],
            Money::from_units(300),
            SplitStatus::Pending,
        );
        let file = export_csv(&[split], today());

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(file.contents.as_bytes());
        let row = reader.records().next().unwrap().unwrap();
        assert_eq!(&row[4], "A, Jr., B");
    }
}
