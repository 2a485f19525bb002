mod common;

use cashflow_core::storage::PlanStorage;
use cashflow_domain::{EntryKind, Period};
use cashflow_storage_json::JsonPlanStorage;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

use common::{run_script, script_command, test_home};

const MARCH_SETUP: &str = "period 2025-03\n\
balance 1000\n\
expense add Rent 2000 2025-03-05\n\
income add Paycheck 500 2025-03-10\n";

fn march() -> Period {
    Period::new(2025, 3).unwrap()
}

#[test]
fn script_mode_builds_timeline_and_transfers() {
    let home = test_home();
    let input = format!("{MARCH_SETUP}timeline\ntransfers\nsummary\nexit\n");

    run_script(&home, &input)
        .success()
        .stdout(contains("OK: Starting balance set to $1,000.00."))
        .stdout(contains("=== Timeline for March 2025 ==="))
        .stdout(contains("Starting Balance"))
        .stdout(contains("-$1,000.00").and(contains("NEGATIVE")))
        .stdout(contains("+$500.00"))
        .stdout(contains("By Mar 5").and(contains("Before: Rent")))
        .stdout(contains("End balance     : -$500.00"))
        .stdout(contains("Transfer needed : $1,000.00"));
}

#[test]
fn empty_month_prints_hint_instead_of_table() {
    let home = test_home();

    run_script(&home, "period 2025-03\ntimeline\ntransfers\n")
        .success()
        .stdout(contains(
            "Add income and expenses to see your cash flow timeline.",
        ))
        .stdout(contains("No transfers needed"));
}

#[test]
fn entries_are_persisted_per_period() {
    let home = test_home();
    run_script(&home, MARCH_SETUP).success();

    let storage = JsonPlanStorage::new(home.join("plans")).unwrap();
    let plan = storage.load_plan(march()).unwrap();
    assert_eq!(plan.entries(EntryKind::Expense).len(), 1);
    assert_eq!(plan.entries(EntryKind::Income).len(), 1);
    assert_eq!(storage.list_periods().unwrap(), vec![march()]);

    // A fresh process resumes on the last period used.
    run_script(&home, "summary\n")
        .success()
        .stdout(contains("Summary for March 2025"))
        .stdout(contains("Total expenses  : $2,000.00"));
}

#[test]
fn remove_by_short_id_updates_the_plan() {
    let home = test_home();
    run_script(&home, MARCH_SETUP).success();

    let storage = JsonPlanStorage::new(home.join("plans")).unwrap();
    let plan = storage.load_plan(march()).unwrap();
    let rent = plan.entries(EntryKind::Expense)[0].clone();
    let short = cashflow_domain::Identifiable::id(&rent).short();

    run_script(&home, &format!("expense remove {short}\ntransfers\n"))
        .success()
        .stdout(contains("Removed expense `Rent`."))
        .stdout(contains("No transfers needed"));

    let plan = storage.load_plan(march()).unwrap();
    assert!(plan.entries(EntryKind::Expense).is_empty());
}

#[test]
fn invalid_input_is_reported_without_stopping() {
    let home = test_home();
    let input = "period 2025-03\n\
income add Pay abc\n\
expense add \"\" 10\n\
period 2025-13\n\
income add Bonus 250\n\
income list\n";

    run_script(&home, input)
        .success()
        .stderr(contains("`abc` is not a valid amount"))
        .stderr(contains("entry name is required"))
        .stderr(contains("Invalid period: 2025-13"))
        .stdout(contains("Added income `Bonus` $250.00 on 2025-03-01"))
        .stdout(contains("Bonus"));
}

#[test]
fn unknown_commands_get_suggestions() {
    let home = test_home();

    run_script(&home, "timelin\n")
        .success()
        .stdout(contains("Unknown command `timelin`"))
        .stdout(contains("Did you mean `timeline`?"));
}

#[test]
fn period_navigation_and_clear() {
    let home = test_home();
    let input = format!("{MARCH_SETUP}period next\nperiod\nperiod prev\nclear\nbalance\n");

    run_script(&home, &input)
        .success()
        .stdout(contains("Now planning April 2025."))
        .stdout(contains("Planning April 2025 (2025-04)."))
        .stdout(contains("Cleared March 2025."))
        .stdout(contains("Starting balance: $0.00"));
}

#[test]
fn config_changes_currency_display() {
    let home = test_home();
    let input = format!("{MARCH_SETUP}config set currency eur\nsummary\n");

    run_script(&home, &input)
        .success()
        .stdout(contains("Amounts now display as €1,234.50."))
        .stdout(contains("Transfer needed : €1,000.00"));
}

#[test]
fn script_skips_comments_and_stops_at_exit() {
    let home = test_home();
    let input = "# March plan\n\
period 2025-03\n\
expense add \"Car payment\" 350 2025-03-15\n\
income add \"unterminated 10\n\
exit\n\
balance 999\n";

    run_script(&home, input)
        .success()
        .stdout(contains("Added expense `Car payment` $350.00 on 2025-03-15"))
        .stdout(contains("WARNING: Could not read"))
        .stdout(contains("Starting balance set to").not());

    let storage = JsonPlanStorage::new(home.join("plans")).unwrap();
    let plan = storage.load_plan(march()).unwrap();
    assert_eq!(plan.starting_balance, rust_decimal::Decimal::ZERO);
    assert!(plan.entries(EntryKind::Income).is_empty());
}

#[test]
fn out_of_period_entries_are_logged_by_default() {
    let home = test_home();

    script_command(&home)
        .write_stdin("period 2025-03\nincome add Refund 25 2025-04-02\n")
        .assert()
        .success()
        .stdout(contains("2025-04-02 falls outside March 2025."))
        .stderr(contains("entry falls outside the planned period"));
}
