use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn expenses(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expenses").unwrap();
    cmd.env("EXPENSE_LEDGER_DATA_DIR", dir.path());
    cmd
}

fn add(dir: &TempDir, date: &str, category: &str, amount: &str, description: &str) {
    expenses(dir)
        .args(["add", date, category, amount, "-d", description])
        .assert()
        .success();
}

#[test]
fn test_add_then_list() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["add", "2024-01-05", "food", "12.50", "-d", "Lunch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added successfully!"));

    expenses(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-05"))
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("Lunch"))
        .stdout(predicate::str::contains("1 expense(s)"));

    let ledger = fs::read_to_string(dir.path().join("data").join("expenses.csv")).unwrap();
    assert_eq!(
        ledger,
        "Date,Category,Amount,Description\n2024-01-05,Food,12.50,Lunch\n"
    );
}

#[test]
fn test_list_without_ledger() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found."));
}

#[test]
fn test_duplicate_add_fails() {
    let dir = TempDir::new().unwrap();
    add(&dir, "2024-01-05", "Food", "10", "Lunch");

    expenses(&dir)
        .args(["add", "2024-01-05", "Food", "10", "-d", "Lunch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_invalid_input_rejected() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["add", "2024-13-01", "Food", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));

    expenses(&dir)
        .args(["add", "2024-01-05", "Food", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive number"));

    expenses(&dir)
        .args(["add", "2024-01-05", "Groceries", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));

    assert!(!dir.path().join("data").join("expenses.csv").exists());
}

#[test]
fn test_search_exact_field_match() {
    let dir = TempDir::new().unwrap();
    add(&dir, "2024-01-05", "Food", "10", "Lunch");
    add(&dir, "2024-01-06", "Rent", "500", "January rent");

    expenses(&dir)
        .args(["search", "FOOD"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch"))
        .stdout(predicate::str::contains("January rent").not());

    expenses(&dir)
        .args(["search", "rent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("January rent"));

    expenses(&dir)
        .args(["search", "lun"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching records found."));
}

#[test]
fn test_total_and_reports() {
    let dir = TempDir::new().unwrap();
    add(&dir, "2024-01-05", "Food", "10", "Lunch");
    add(&dir, "2024-02-01", "Food", "5.25", "Snack");
    add(&dir, "2024-02-03", "Rent", "100", "Room");

    expenses(&dir)
        .arg("total")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Expenses: ₹115.25"));

    expenses(&dir)
        .args(["report", "category"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Category-wise Spending"))
        .stdout(predicate::str::contains("₹15.25"))
        .stdout(predicate::str::contains("₹100.00"));

    expenses(&dir)
        .args(["report", "monthly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01"))
        .stdout(predicate::str::contains("2024-02"))
        .stdout(predicate::str::contains("₹105.25"));
}

#[test]
fn test_export_copies_ledger_bytes() {
    let dir = TempDir::new().unwrap();
    add(&dir, "2024-01-05", "Food", "10", "Dinner, with friends");

    let out = dir.path().join("dump.txt");
    expenses(&dir)
        .arg("export")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Expenses exported to"));

    let ledger = fs::read(dir.path().join("data").join("expenses.csv")).unwrap();
    assert_eq!(fs::read(&out).unwrap(), ledger);
}

#[test]
fn test_edit_and_delete() {
    let dir = TempDir::new().unwrap();
    add(&dir, "2024-01-05", "Food", "10", "Lunch");

    expenses(&dir)
        .args(["edit", "2024-01-05", "Food", "10", "-d", "Lunch", "--set-amount", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense updated successfully!"));

    expenses(&dir)
        .args(["delete", "2024-01-05", "Food", "10", "-d", "Lunch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));

    expenses(&dir)
        .args(["delete", "2024-01-05", "Food", "12", "-d", "Lunch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense deleted successfully!"));

    expenses(&dir)
        .arg("total")
        .assert()
        .success()
        .stdout(predicate::str::contains("₹0.00"));
}

#[test]
fn test_history_records_changes() {
    let dir = TempDir::new().unwrap();
    add(&dir, "2024-01-05", "Food", "10", "Lunch");

    expenses(&dir)
        .args(["delete", "2024-01-05", "Food", "10", "-d", "Lunch"])
        .assert()
        .success();

    expenses(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE"))
        .stdout(predicate::str::contains("DELETE"));
}

#[test]
fn test_categories_listed() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Entertainment"))
        .stdout(predicate::str::contains("Utilities"));
}

#[test]
fn test_total_overflow_reports_error() {
    let dir = TempDir::new().unwrap();
    add(&dir, "2024-01-05", "Food", "79228162514264337593543950335", "a");
    add(&dir, "2024-01-06", "Food", "79228162514264337593543950335", "b");

    let commands: [&[&str]; 3] = [&["total"], &["report", "category"], &["report", "monthly"]];
    for args in commands {
        expenses(&dir)
            .args(args)
            .assert()
            .failure()
            .stderr(predicate::str::contains("exceeds the supported range"));
    }
}

#[test]
fn test_out_of_range_amount_rejected() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["add", "2024-01-05", "Food", "1e29"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount out of range"));
}

#[test]
fn test_unwritable_audit_log_warns_but_saves() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("audit.log")).unwrap();

    expenses(&dir)
        .args(["add", "2024-01-05", "Food", "10", "-d", "Lunch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added successfully!"))
        .stderr(predicate::str::contains("Warning"));

    expenses(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 expense(s)"));
}

#[test]
fn test_report_export_to_file() {
    let dir = TempDir::new().unwrap();
    add(&dir, "2024-01-05", "Food", "100", "Lunch");
    add(&dir, "2024-01-06", "Rent", "300", "Room");

    let out = dir.path().join("category.csv");
    expenses(&dir)
        .args(["report", "category", "-o"])
        .arg(&out)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "Category,Amount,Count,Percentage\nFood,100,1,25.00\nRent,300,1,75.00\n"
    );
}
