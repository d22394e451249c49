//! CLI command for the overview report

use crate::error::FintrackResult;
use crate::reports::OverviewReport;
use crate::storage::Store;

/// Handle the report command: print the cross-list overview
pub fn handle_report_command(store: &Store) -> FintrackResult<()> {
    let report = OverviewReport::generate(store)?;
    print!("{}", report.format_terminal());
    Ok(())
}
