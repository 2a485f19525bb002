//! Helper functions for high-level plan orchestration.

use rust_decimal::Decimal;

use cashflow_domain::{CashFlowReport, MonthPlan, Period};

use crate::{entry_service::parse_amount, ledger_engine::compute_timeline, CoreError};

/// Connects a stored [`MonthPlan`] to the ledger engine.
pub struct PlanService;

impl PlanService {
    /// Recomputes the full report for `plan`, anchoring the opening balance
    /// on the first day of `period`.
    pub fn report(plan: &MonthPlan, period: Period) -> CashFlowReport {
        compute_timeline(
            plan.starting_balance,
            &plan.incomes,
            &plan.expenses,
            period.first_day(),
        )
    }

    /// Parses and stores a new starting balance. Any sign is accepted.
    pub fn set_starting_balance(plan: &mut MonthPlan, input: &str) -> Result<Decimal, CoreError> {
        let value = parse_amount(input)?;
        plan.starting_balance = value;
        Ok(value)
    }

    /// Drops every entry and resets the starting balance.
    pub fn clear(plan: &mut MonthPlan) {
        *plan = MonthPlan::default();
    }
}
