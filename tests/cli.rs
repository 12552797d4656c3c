//! End-to-end tests for the `tally` binary
//!
//! Each test runs against its own data directory via TALLY_DATA_DIR.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tally(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.env("TALLY_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn config_shows_data_directory() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tally Configuration"))
        .stdout(predicate::str::contains("Currency: USD"));
}

#[test]
fn add_then_list_shows_transaction() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args([
            "transaction",
            "add",
            "42.50",
            "Lunch with friends",
            "--category",
            "food",
            "--date",
            "2025-01-15",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added"));

    tally(&dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch with friends"))
        .stdout(predicate::str::contains("2025-01-15"))
        .stdout(predicate::str::contains("-$42.50"));
}

#[test]
fn income_uses_placeholder_category() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args([
            "transaction",
            "add",
            "5000",
            "Monthly Salary",
            "--kind",
            "income",
            "--category",
            "food",
            "--date",
            "2025-01-01",
        ])
        .assert()
        .success();

    tally(&dir)
        .args(["transaction", "list", "--kind", "income"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Other"))
        .stdout(predicate::str::contains("+$5,000.00"));
}

#[test]
fn export_with_no_transactions_is_a_notice() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions to export."));
}

#[test]
fn export_then_import_round_trips() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("out.csv");

    tally(&dir)
        .args([
            "transaction",
            "add",
            "85.50",
            "Grocery Shopping",
            "--category",
            "food",
            "--date",
            "2025-01-07",
        ])
        .assert()
        .success();

    tally(&dir)
        .args(["export", csv_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 transactions"));

    let contents = std::fs::read_to_string(&csv_path).unwrap();
    assert!(contents.starts_with("Date,Type,Category,Amount,Description"));
    assert!(contents.contains("2025-01-07,expense,Food,85.50,\"Grocery Shopping\""));

    // Import into a fresh data directory
    let other = TempDir::new().unwrap();
    tally(&other)
        .args(["import", csv_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 transactions."));

    tally(&other)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Grocery Shopping"));
}

#[test]
fn budget_set_and_list() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["budget", "set", "food", "500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget for Food set to $500.00"));

    tally(&dir)
        .args(["budget", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("$500.00"));
}

#[test]
fn delete_unknown_id_is_a_noop() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["transaction", "delete", "ffffffff"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing deleted"));
}

#[test]
fn clear_requires_confirmation() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args([
            "transaction",
            "add",
            "10",
            "Something",
            "--date",
            "2025-01-01",
        ])
        .assert()
        .success();

    tally(&dir)
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("--yes"));

    tally(&dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Something"));

    tally(&dir)
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All data cleared."));

    tally(&dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found."));
}

#[test]
fn currency_change_affects_formatting() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["currency", "eur"])
        .assert()
        .success()
        .stdout(predicate::str::contains("EUR"));

    tally(&dir)
        .args([
            "transaction",
            "add",
            "10",
            "Coffee",
            "--date",
            "2025-01-01",
        ])
        .assert()
        .success();

    tally(&dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("€10.00"));
}

#[test]
fn init_with_sample_seeds_data() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["init", "--sample"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sample transactions"));

    tally(&dir)
        .args(["budget", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rent"));
}
