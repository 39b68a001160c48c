//! End-to-end tests for the `spendwise` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn spendwise(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("spendwise").unwrap();
    cmd.env("SPENDWISE_DATA_DIR", data_dir);
    cmd
}

fn add(data_dir: &Path, args: &[&str]) {
    spendwise(data_dir)
        .args(["expense", "add"])
        .args(args)
        .assert()
        .success();
}

fn stored_ids(data_dir: &Path) -> Vec<String> {
    let raw = std::fs::read_to_string(data_dir.join("data").join("expenses.json")).unwrap();
    let file: serde_json::Value = serde_json::from_str(&raw).unwrap();
    file["expenses"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_init_and_config() {
    let temp = TempDir::new().unwrap();

    spendwise(temp.path())
        .args(["init", "--username", "robin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert!(temp.path().join("config.json").exists());
    let profile = std::fs::read_to_string(temp.path().join("data").join("profile.json")).unwrap();
    assert!(profile.contains("robin"));

    spendwise(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized:    true"))
        .stdout(predicate::str::contains("Page size:         10"));
}

#[test]
fn test_add_and_list() {
    let temp = TempDir::new().unwrap();

    spendwise(temp.path())
        .args(["expense", "add", "12.50", "--category", "food", "--name", "Lunch"])
        .args(["--date", "2024-03-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged $12.50 for Food on 2024-03-01"));

    add(temp.path(), &["7", "--custom", "Pets", "--date", "2024-03-02"]);

    spendwise(temp.path())
        .args(["expense", "list", "--sort", "amount"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch"))
        .stdout(predicate::str::contains("Pets"))
        .stdout(predicate::str::contains("Page 1 of 1 (2 expenses)"));
}

#[test]
fn test_list_pages() {
    let temp = TempDir::new().unwrap();
    for day in 1..=3 {
        add(
            temp.path(),
            &["5", "--category", "bills", "--date", &format!("2024-03-0{}", day)],
        );
    }

    spendwise(temp.path())
        .args(["expense", "list", "--page-size", "2", "--page", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 2 of 2 (3 expenses)"))
        .stdout(predicate::str::contains("2024-03-01"))
        .stdout(predicate::str::contains("2024-03-03").not());
}

#[test]
fn test_add_requires_category() {
    let temp = TempDir::new().unwrap();

    spendwise(temp.path())
        .args(["expense", "add", "10"])
        .assert()
        .failure();

    spendwise(temp.path())
        .args(["expense", "add", "10", "--category", "groceries"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category"));

    spendwise(temp.path())
        .args(["expense", "add", "10", "--custom", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Custom category cannot be empty"));
}

#[test]
fn test_edit_and_delete() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), &["10", "--category", "transport", "--date", "2024-03-01"]);
    let id = stored_ids(temp.path()).remove(0);

    spendwise(temp.path())
        .args(["expense", "edit", &id, "--amount", "20", "--name", "Taxi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated expense"))
        .stdout(predicate::str::contains("$20.00"));

    spendwise(temp.path())
        .args(["expense", "show", &id[..8]])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name:        Taxi"));

    spendwise(temp.path())
        .args(["expense", "delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted expense"));

    spendwise(temp.path())
        .args(["expense", "delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing removed"));

    assert!(stored_ids(temp.path()).is_empty());
}

#[test]
fn test_edit_unknown_id_fails() {
    let temp = TempDir::new().unwrap();

    spendwise(temp.path())
        .args(["expense", "edit", "does-not-exist", "--amount", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expense not found"));
}

#[test]
fn test_budget_and_dashboard() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), &["12.50", "--category", "food", "--date", "2024-03-01"]);
    add(temp.path(), &["10", "--category", "food", "--date", "2024-02-10"]);

    spendwise(temp.path())
        .args(["budget", "set", "500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly budget set to $500.00"));

    spendwise(temp.path())
        .args(["budget", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly budget: $500.00"));

    spendwise(temp.path())
        .args(["report", "dashboard", "--today", "2024-03-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Spent this month:  $12.50"))
        .stdout(predicate::str::contains("25.0% more than last month"))
        .stdout(predicate::str::contains("2.5% used"));
}

#[test]
fn test_dashboard_without_history() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), &["30", "--category", "health", "--date", "2024-03-05"]);

    spendwise(temp.path())
        .args(["report", "dashboard", "--today", "2024-03-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("New spending trend"))
        .stdout(predicate::str::contains("Budget unavailable"));
}

#[test]
fn test_dashboard_csv_export() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), &["12.50", "--category", "food", "--date", "2024-03-01"]);
    let out = temp.path().join("dashboard.csv");

    spendwise(temp.path())
        .args(["report", "dashboard", "--today", "2024-03-15", "--output"])
        .arg(&out)
        .assert()
        .success();

    let csv = std::fs::read_to_string(out).unwrap();
    assert!(csv.starts_with("Section,Key,Amount,Count,Percentage"));
    assert!(csv.contains("category,Food,12.50,1,100.00"));
}

#[test]
fn test_category_and_daily_reports() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), &["30", "--category", "food", "--date", "2024-03-01"]);
    add(temp.path(), &["10", "--category", "transport", "--date", "2024-03-02"]);

    spendwise(temp.path())
        .args(["report", "categories"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("75%"))
        .stdout(predicate::str::contains("Total: $40.00"));

    spendwise(temp.path())
        .args(["report", "daily", "--days", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-03-02"))
        .stdout(predicate::str::contains("2024-03-01").not());
}

#[test]
fn test_export_csv_and_json() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), &["3.25", "--category", "shopping", "--date", "2024-03-01"]);

    spendwise(temp.path())
        .args(["export", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ID,Date,Category,Name,Description,Amount"))
        .stdout(predicate::str::contains("2024-03-01,Shopping,,,3.25"));

    spendwise(temp.path())
        .args(["export", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"schema_version\":\"1.0.0\""))
        .stdout(predicate::str::contains("\"expense_count\":1"));
}

#[test]
fn test_audit_log() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), &["1", "--category", "food"]);

    spendwise(temp.path())
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Expense"));
}

#[test]
fn test_unreadable_entries_are_reported_and_kept() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(
        data.join("expenses.json"),
        r#"[
            {"id": 1, "amount": "50.00", "category": "Food", "date": "2024-03-01"},
            {"id": 2, "amount": "fifty", "category": "Food", "date": "2024-03-01"}
        ]"#,
    )
    .unwrap();

    spendwise(temp.path())
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$50.00"))
        .stdout(predicate::str::contains("1 stored entries could not be read"));

    add(temp.path(), &["1", "--category", "food", "--date", "2024-03-02"]);

    let raw = std::fs::read_to_string(data.join("expenses.json")).unwrap();
    assert!(raw.contains("fifty"));
}
