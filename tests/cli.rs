//! E2E tests for the tax, invest, schema and interactive commands

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn paycalc(args: &[&str]) -> Output {
    Command::new("cargo")
        .args(["run", "--quiet", "--"])
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Test the resident tax summary
#[test]
fn tax_resident_summary() {
    let output = paycalc(&["tax", "--salary", "50000", "--name", "Jane Citizen"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    assert!(stdout.contains("Name: Jane Citizen"));
    assert!(stdout.contains("Per Week: $782.69"));
    assert!(stdout.contains("Per Year: $40,700.00"));
    assert!(stdout.contains("Per Year: $8,550.00"));
    assert!(stdout.contains("Medicare Levy Per Year: $750.00"));
}

/// Test the non-resident table with expenses
#[test]
fn tax_non_resident_with_expenses() {
    let output = paycalc(&[
        "tax",
        "--salary",
        "90000",
        "--non-resident",
        "--expenses",
        "205.19",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    assert!(stdout.contains("Per Year: $62,670.00"));
    assert!(stdout.contains("Per Year: $27,330.00"));
    assert!(stdout.contains("Medicare Levy Per Year: $0.00"));
    assert!(stdout.contains("Available Funds: $1,000.00"));
}

/// Test tax JSON output
#[test]
fn tax_json_output() {
    let output = paycalc(&["tax", "--salary", "50000", "--json"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    let number = |key: &str| -> f64 {
        json[key]
            .as_str()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(|| panic!("missing {key}"))
    };
    assert_eq!(number("tax"), 8550.0);
    assert_eq!(number("medicare"), 750.0);
    assert_eq!(number("net_salary"), 40700.0);
    assert_eq!(number("weekly_net_salary"), 782.69);
    assert_eq!(json["resident"], serde_json::Value::Bool(true));
}

/// Test that a zero salary is rejected
#[test]
fn tax_rejects_zero_salary() {
    let output = paycalc(&["tax", "--salary", "0"]);
    assert!(!output.status.success());
}

/// Test the investment table with a partial final group
#[test]
fn invest_table() {
    let output = paycalc(&["invest", "--amount", "100", "--rate", "12", "--weeks", "10"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    assert!(stdout.contains("Invested per week: $100.00"));
    assert!(stdout.contains("Interest rate: 12%"));
    assert!(stdout.contains("Number of weeks: 10"));
    assert!(stdout.contains("$403.69"));
    assert!(stdout.contains("$811.11"));
    assert!(stdout.contains("$1,011.11"));
}

/// Test investment CSV output
#[test]
fn invest_csv_output() {
    let output = paycalc(&["invest", "-a", "200", "-r", "7.5", "-w", "13", "--csv"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "week,balance");
    assert_eq!(lines.len(), 5);
    assert!(lines[1].starts_with("4,804.6"));
    assert!(lines[4].starts_with("13,2627.8"));
}

/// Test that the interest rate must be within 1-100
#[test]
fn invest_rejects_rate_out_of_range() {
    let output = paycalc(&["invest", "-a", "100", "-r", "150", "-w", "10"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("interest rate must be between 1 and 100"));
}

/// Test that a balance too large to represent is an error, not a crash
#[test]
fn invest_reports_overflowing_balance() {
    let output = paycalc(&["invest", "-a", "100", "-r", "100", "-w", "5000"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("projected balance is too large to represent"));
    assert!(!stderr.contains("panicked"));
}

/// Test the locale option
#[test]
fn invest_with_locale() {
    let output = paycalc(&["--locale", "de-de", "invest", "-a", "100", "-r", "12", "-w", "10"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("1.011,11 €"));
}

/// Test the schema of the invest JSON output
#[test]
fn schema_invest() {
    let output = paycalc(&["schema", "invest"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("\"checkpoints\""));
    assert!(stdout.contains("\"week\""));
}

/// Test a full interactive session on stdin
#[test]
fn interactive_session() {
    let mut child = Command::new("cargo")
        .args(["run", "--quiet", "--", "interactive"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("Failed to execute command");

    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"jane citizen\n50000\nyes\n300\n1\n100\n12\n10\n3\n5\n3\n")
        .expect("write stdin");

    let output = child.wait_with_output().expect("wait");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("Name: Jane Citizen"));
    assert!(stdout.contains("Investment Menu"));
    assert!(stdout.contains("$1,011.11"));
    assert!(stdout.contains("Exit Menu"));
}

/// Test that the schema types agree with the emitted tax JSON
#[test]
fn schema_tax_types_match_json() {
    let schema = paycalc(&["schema", "tax"]);
    let output = paycalc(&["tax", "--salary", "50000", "--json"]);
    assert!(schema.status.success(), "Command failed: {:?}", schema);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let schema: serde_json::Value = serde_json::from_slice(&schema.stdout).expect("valid JSON");
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    for key in ["gross_salary", "tax", "medicare", "net_salary", "weekly_net_salary"] {
        assert_eq!(schema["properties"][key]["type"], "string", "schema type of {key}");
        assert!(json[key].is_string(), "JSON value of {key}");
    }
}
