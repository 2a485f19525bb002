#![doc(test(attr(deny(warnings))))]

//! Cash-flow planner: a monthly running-balance ledger with savings-transfer
//! recommendations, plus the shell used to drive it.

pub mod cli;
pub mod currency;
pub mod errors;
pub mod utils;

pub use cashflow_core::{compute_timeline, EntryDraft, EntryService, PlanService};
pub use cashflow_domain::{CashFlowReport, Entry, EntryId, EntryKind, MonthPlan, Period};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Cash-flow planner tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
