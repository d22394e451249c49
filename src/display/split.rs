//! Split-expense display formatting

use crate::models::SplitExpense;
use crate::reports::SplitSummary;

use super::truncate;

/// Format a list of split expenses as a table
pub fn format_split_table(splits: &[SplitExpense]) -> String {
    if splits.is_empty() {
        return "No split expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:24} {:>10} {:8} {:24} {:>10} {}\n",
        "Date", "Description", "Total", "Paid By", "Split With", "Share", "Status"
    ));
    output.push_str(&"-".repeat(100));
    output.push('\n');

    for split in splits {
        output.push_str(&format!(
            "{} {} {:>10} {} {} {:>10} {}\n",
            split.date.format("%Y-%m-%d"),
            truncate(&split.description, 24),
            split.total_amount.to_string(),
            truncate(&split.paid_by, 8),
            truncate(&split.split_with.join(", "), 24),
            split.your_share.to_string(),
            split.status
        ));
    }

    output
}

/// Format the split-expense summary cards
pub fn format_split_summary(summary: &SplitSummary) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:14} {:>12}   owed to you on bills you paid\n",
        "You'll Receive",
        summary.to_receive.to_string()
    ));
    output.push_str(&format!(
        "{:14} {:>12}   your share on bills others paid\n",
        "You'll Pay",
        summary.to_pay.to_string()
    ));
    output.push_str(&format!(
        "{:14} {:>12}   overall settlement balance\n",
        "Net Balance",
        summary.net_balance().to_string()
    ));

    output
}
