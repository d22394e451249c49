//! EMI display formatting

use crate::models::Emi;

use super::truncate;

/// Format a list of EMIs as a table with per-loan progress
pub fn format_emi_table(emis: &[Emi]) -> String {
    if emis.is_empty() {
        return "No EMIs found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:15} {:12} {:>18} {:>12} {:12} {}\n",
        "Loan Type", "Lender", "Progress", "EMI Amount", "Next Due", "Status"
    ));
    output.push_str(&"-".repeat(82));
    output.push('\n');

    for emi in emis {
        let progress = format!(
            "{}/{} ({:.0}%)",
            emi.paid_months,
            emi.tenure,
            emi.progress_percent()
        );
        let next_due = match emi.next_due_date {
            Some(d) => d.format("%Y-%m-%d").to_string(),
            None => "-".to_string(),
        };

        output.push_str(&format!(
            "{} {} {:>18} {:>12} {:12} {}\n",
            truncate(&emi.loan_type, 15),
            truncate(&emi.lender, 12),
            progress,
            emi.emi_amount.to_string(),
            next_due,
            emi.status
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::seed::sample_emis;

    #[test]
    fn test_format_table_shows_progress() {
        let formatted = format_emi_table(&sample_emis());
        assert!(formatted.contains("24/120 (20%)"));
        assert!(formatted.contains("48/48 (100%)"));
        assert!(formatted.contains("Completed"));
    }

    #[test]
    fn test_completed_loan_has_no_due_date() {
        let formatted = format_emi_table(&sample_emis());
        let completed_line = formatted
            .lines()
            .find(|l| l.contains("Personal Loan"))
            .unwrap();
        assert!(completed_line.contains(" - "));
    }

    #[test]
    fn test_format_empty_table() {
        assert!(format_emi_table(&[]).contains("No EMIs found"));
    }
}
