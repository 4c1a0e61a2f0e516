use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn budget(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budget").unwrap();
    cmd.env("BUDGET_CLI_DATA_DIR", data_dir.path());
    cmd
}

fn session(data_dir: &TempDir) -> Command {
    let mut cmd = budget(data_dir);
    cmd.args(["session", "--today", "2025-11-20"]);
    cmd
}

const DEBTS: &str = "\
settings income 3000
debt add Visa --balance 1000 --apr 19.99 --minimum 25 --due-day 15
debt add Amex --balance 500 --apr 22 --minimum 25 --due-day 3
";

#[test]
fn plan_reports_remaining_allocation() {
    let dir = TempDir::new().unwrap();
    let script = format!("{DEBTS}plan total 100\nplan pay Visa 40\nplan pay Amex 40\n");

    session(&dir)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Remaining allocation: $20.00"));
}

#[test]
fn plan_reports_over_allocation() {
    let dir = TempDir::new().unwrap();
    let script = format!("{DEBTS}plan total 100\nplan pay Visa 70\nplan pay Amex 40\n");

    session(&dir)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Over allocated by: $10.00"));
}

#[test]
fn errors_do_not_end_the_session() {
    let dir = TempDir::new().unwrap();
    let script = "debt remove Nope\nexpense log 10 Gym\nexpense log 12 Food\nspending\n";

    session(&dir)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Debt not found: Nope"))
        .stdout(predicate::str::contains(
            "Error: Validation error: Unknown category 'Gym'",
        ))
        .stdout(predicate::str::contains("Logged expense: Food $12.00"))
        .stdout(predicate::str::contains("Spending (November 2025)"));
}

#[test]
fn quit_stops_reading() {
    let dir = TempDir::new().unwrap();

    session(&dir)
        .write_stdin("quit\ndebt list\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No debts added yet").not());
}

#[test]
fn demo_prints_all_views() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["demo", "--today", "2025-11-20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Home (2025-11-20)"))
        .stdout(predicate::str::contains("Top category: Rent ($1200.00)"))
        .stdout(predicate::str::contains("Money to Debts: $270.00"))
        .stdout(predicate::str::contains("Spending (November 2025)"));
}

#[test]
fn exported_snapshot_seeds_a_new_session() {
    let dir = TempDir::new().unwrap();
    let snapshot = dir.path().join("snapshot.yaml");
    let script = format!(
        "{DEBTS}expense log 45.20 Food -n Groceries\nexport yaml --output {}\n",
        snapshot.display()
    );

    session(&dir)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Snapshot exported to:"));
    assert!(fs::read_to_string(&snapshot)
        .unwrap()
        .starts_with("# budget-cli snapshot"));

    session(&dir)
        .arg("--seed")
        .arg(&snapshot)
        .write_stdin("debt list\nsettings show\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Debt: $1500.00"))
        .stdout(predicate::str::contains("Monthly Income: $3000.00"));
}

#[test]
fn bad_seed_file_fails() {
    let dir = TempDir::new().unwrap();
    let seed = dir.path().join("seed.json");
    fs::write(&seed, "{ not json").unwrap();

    session(&dir)
        .arg("--seed")
        .arg(&seed)
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Import error"));
}

#[test]
fn audit_log_is_written_on_exit() {
    let dir = TempDir::new().unwrap();

    session(&dir)
        .arg("--audit-log")
        .write_stdin(DEBTS)
        .assert()
        .success();

    let log = fs::read_to_string(dir.path().join("audit.log")).unwrap();
    assert_eq!(log.lines().count(), 3);
    assert!(log.contains("\"operation\":\"create\""));
}

#[test]
fn no_audit_log_by_default() {
    let dir = TempDir::new().unwrap();

    session(&dir).write_stdin(DEBTS).assert().success();

    assert!(!dir.path().join("audit.log").exists());
}

#[test]
fn init_writes_config() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));
    assert!(dir.path().join("config.json").exists());

    budget(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized:      true"));
}
