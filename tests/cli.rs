//! End-to-end CLI tests
//!
//! Each test runs the binary against its own temporary data directory via
//! the `FINTRACK_DATA_DIR` override.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fintrack(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fintrack").unwrap();
    cmd.env("FINTRACK_DATA_DIR", dir.path());
    cmd
}

fn seeded_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fintrack(&dir).arg("init").assert().success();
    dir
}

#[test]
fn init_seeds_sample_data() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    fintrack(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Weekly groceries from Supermart"))
        .stdout(predicate::str::contains("₹2,500"));
}

#[test]
fn uninitialized_lists_are_empty() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found"));
}

#[test]
fn category_filter_narrows_the_list() {
    let dir = seeded_dir();

    fintrack(&dir)
        .args(["expense", "list", "--category", "Groceries"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Supermart"))
        .stdout(predicate::str::contains("metro").not());
}

#[test]
fn unknown_category_matches_nothing() {
    let dir = seeded_dir();

    fintrack(&dir)
        .args(["expense", "list", "--category", "Rent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found"));
}

#[test]
fn search_is_case_insensitive() {
    let dir = seeded_dir();

    fintrack(&dir)
        .args(["expense", "list", "--search", "SUPERMART"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Weekly groceries from Supermart"))
        .stdout(predicate::str::contains("Electricity").not());
}

#[test]
fn lending_summary_reports_pending_balances() {
    let dir = seeded_dir();

    fintrack(&dir)
        .args(["lending", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("₹5,000"))
        .stdout(predicate::str::contains("₹2,000"))
        .stdout(predicate::str::contains("₹3,000"));
}

#[test]
fn emi_status_filter_includes_and_excludes() {
    let dir = seeded_dir();

    fintrack(&dir)
        .args(["emi", "list", "--status", "Completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Personal Loan"))
        .stdout(predicate::str::contains("48/48 (100%)"))
        .stdout(predicate::str::contains("Home Loan").not());

    fintrack(&dir)
        .args(["emi", "list", "--status", "Active"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Home Loan"))
        .stdout(predicate::str::contains("Personal Loan").not());
}

#[test]
fn export_writes_filtered_csv() {
    let dir = seeded_dir();
    let out = dir.path().join("out.csv");

    fintrack(&dir)
        .args(["expense", "export", "--category", "Groceries"])
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 expenses"));

    let contents = std::fs::read_to_string(&out).unwrap();
    let mut lines = contents.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Date,Category,Description,Amount,Payment Method"
    );
    assert_eq!(
        lines.next().unwrap(),
        "2024-03-20,Groceries,\"Weekly groceries from Supermart\",2500,Credit Card"
    );
    assert!(lines.next().is_none());
}

#[test]
fn add_expense_persists_across_invocations() {
    let dir = seeded_dir();

    fintrack(&dir)
        .args([
            "expense",
            "add",
            "Healthcare",
            "Pharmacy run",
            "450",
            "--date",
            "2024-04-02",
            "--payment-method",
            "UPI",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added expense exp-6"));

    fintrack(&dir)
        .args(["expense", "list", "--search", "pharmacy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pharmacy run"))
        .stdout(predicate::str::contains("₹450"));
}

#[test]
fn add_rejects_invalid_input() {
    let dir = seeded_dir();

    fintrack(&dir)
        .args(["expense", "add", "Rent", "Monthly rent", "12000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category"));
}

#[test]
fn report_shows_overview_figures() {
    let dir = seeded_dir();

    fintrack(&dir)
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("₹12,500"))
        .stdout(predicate::str::contains("₹40,000"))
        .stdout(predicate::str::contains("Lending Net Balance"));
}

#[test]
fn csv_export_import_roundtrip() {
    let source = seeded_dir();
    let exported = source.path().join("expenses.csv");

    fintrack(&source)
        .args(["expense", "export"])
        .arg("--output")
        .arg(&exported)
        .assert()
        .success();

    let fresh = TempDir::new().unwrap();
    fintrack(&fresh)
        .args(["expense", "import"])
        .arg(&exported)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 5 expenses"));

    fintrack(&fresh)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Electricity bill"))
        .stdout(predicate::str::contains("Total (5 expenses):"));
}

#[test]
fn export_all_writes_json_snapshot() {
    let dir = seeded_dir();
    let out = dir.path().join("backup.json");

    fintrack(&dir)
        .args(["export", "all"])
        .arg(&out)
        .args(["--format", "json", "--pretty"])
        .assert()
        .success();

    let contents = std::fs::read_to_string(&out).unwrap();
    assert!(contents.contains("\"schema_version\""));
    assert!(contents.contains("Weekly groceries from Supermart"));
}

#[test]
fn config_shows_paths() {
    let dir = seeded_dir();

    fintrack(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Data directory"))
        .stdout(predicate::str::contains("Currency symbol: ₹"));
}
