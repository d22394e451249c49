//! Lending display formatting

use crate::models::LendingEntry;
use crate::reports::LendingSummary;

use super::truncate;

/// Format a list of lending entries as a table
pub fn format_lending_table(entries: &[LendingEntry]) -> String {
    if entries.is_empty() {
        return "No lending entries found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:12} {:>10} {:9} {:10} {:8} {}\n",
        "Date", "Person", "Amount", "Type", "Due Date", "Status", "Notes"
    ));
    output.push_str(&"-".repeat(78));
    output.push('\n');

    for entry in entries {
        let due_date = match entry.due_date {
            Some(d) => d.format("%Y-%m-%d").to_string(),
            None => "-".to_string(),
        };

        output.push_str(&format!(
            "{} {} {:>10} {} {:10} {} {}\n",
            entry.date.format("%Y-%m-%d"),
            truncate(&entry.person, 12),
            entry.amount.to_string(),
            truncate(entry.kind.as_str(), 9),
            due_date,
            truncate(entry.status.as_str(), 8),
            entry.notes
        ));
    }

    output
}

/// Format the lending summary cards
pub fn format_lending_summary(summary: &LendingSummary) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:12} {:>12}   pending amount to receive\n",
        "To Receive",
        summary.to_receive.to_string()
    ));
    output.push_str(&format!(
        "{:12} {:>12}   pending amount to pay\n",
        "To Pay",
        summary.to_pay.to_string()
    ));
    output.push_str(&format!(
        "{:12} {:>12}   overall lending balance\n",
        "Net Balance",
        summary.net_balance().to_string()
    ));

    output
}
