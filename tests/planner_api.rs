use cashflow_planner::{EntryDraft, EntryKind, EntryService, MonthPlan, Period, PlanService};
use rust_decimal_macros::dec;

#[test]
fn library_facade_drives_a_month() {
    cashflow_planner::init();
    let period = Period::new(2025, 6).unwrap();
    let mut plan = MonthPlan::new(dec!(100));

    EntryService::add(
        &mut plan,
        period,
        EntryKind::Expense,
        &EntryDraft::new("Utilities", "80", "2025-06-15"),
    )
    .unwrap();
    EntryService::add(
        &mut plan,
        period,
        EntryKind::Expense,
        &EntryDraft::new("Phone", "$70", "2025-06-15"),
    )
    .unwrap();

    let report = PlanService::report(&plan, period);
    assert_eq!(report.timeline.len(), 3);
    assert_eq!(report.timeline[0].description, "Starting Balance");
    assert_eq!(report.stats.end_balance, dec!(-50));
    assert_eq!(report.stats.transfer_needed, dec!(100));
    assert_eq!(report.transfers.len(), 1);
    assert_eq!(report.transfers[0].before_event, "Phone");
    assert_eq!(report.transfers[0].amount, dec!(100));
}

#[test]
fn out_of_period_entries_still_count() {
    let period = Period::new(2025, 6).unwrap();
    let mut plan = MonthPlan::default();
    EntryService::add(
        &mut plan,
        period,
        EntryKind::Income,
        &EntryDraft::new("Refund", "25", "2025-07-02"),
    )
    .unwrap();

    let report = cashflow_planner::compute_timeline(
        plan.starting_balance,
        &plan.incomes,
        &plan.expenses,
        period.first_day(),
    );
    assert_eq!(report.stats.end_balance, dec!(25));
    assert!(report.transfers.is_empty());
}
