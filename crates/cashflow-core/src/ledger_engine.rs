//! Timeline and transfer computation for a single planning period.
//!
//! The engine is a stateless transformation: it reads a snapshot of the
//! opening balance and the two entry collections and returns a fresh
//! [`CashFlowReport`]. It never mutates its inputs.
//!
//! Two negative-balance figures are produced and kept apart:
//!
//! * `recommend_transfers` walks the events greedily, topping the balance up
//!   on each date it would dip below zero. Later shortfalls can still trigger
//!   further recommendations.
//! * `aggregate_transfer_need` rounds the single worst point of the
//!   unadjusted running balance.
//!
//! The sum of the first and the value of the second can disagree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use cashflow_domain::{
    Amounted, CashFlowReport, CashFlowStats, Entry, Event, EventKind, NamedEntity, TimelineRow,
    TransferRecommendation, OPENING_BALANCE_LABEL,
};

/// Granularity of every recommended transfer amount.
pub const TRANSFER_INCREMENT: Decimal = Decimal::ONE_HUNDRED;

/// Builds the sorted timeline, itemized transfers and aggregate stats.
pub fn compute_timeline(
    opening_balance: Decimal,
    incomes: &[Entry],
    expenses: &[Entry],
    period_start: NaiveDate,
) -> CashFlowReport {
    let events = build_events(opening_balance, incomes, expenses, period_start);
    let pass = running_balance_pass(&events);
    let transfers = recommend_transfers(opening_balance, &events);
    let transfer_needed = aggregate_transfer_need(pass.min_balance);

    debug!(
        events = events.len(),
        transfers = transfers.len(),
        end_balance = %pass.balance,
        transfer_needed = %transfer_needed,
        "computed cash-flow timeline"
    );

    CashFlowReport {
        timeline: pass.rows,
        transfers,
        stats: CashFlowStats {
            total_income: pass.total_income,
            total_expenses: pass.total_expenses,
            end_balance: pass.balance,
            transfer_needed,
        },
    }
}

/// Rounds a non-negative `value` up to the next multiple of `increment`.
pub fn round_up_to_increment(value: Decimal, increment: Decimal) -> Decimal {
    (value / increment).ceil() * increment
}

/// Opening balance first, then incomes, then expenses, stably sorted by date.
fn build_events(
    opening_balance: Decimal,
    incomes: &[Entry],
    expenses: &[Entry],
    period_start: NaiveDate,
) -> Vec<Event> {
    let mut events = Vec::with_capacity(1 + incomes.len() + expenses.len());
    events.push(Event {
        date: period_start,
        description: OPENING_BALANCE_LABEL.to_string(),
        kind: EventKind::OpeningBalance,
        amount: opening_balance,
    });
    events.extend(incomes.iter().map(|entry| event_from(entry, EventKind::Income)));
    events.extend(expenses.iter().map(|entry| event_from(entry, EventKind::Expense)));
    events.sort_by_key(|event| event.date);
    events
}

fn event_from(entry: &Entry, kind: EventKind) -> Event {
    Event {
        date: entry.date(),
        description: entry.name().to_string(),
        kind,
        amount: entry.amount(),
    }
}

struct RunningBalance {
    rows: Vec<TimelineRow>,
    balance: Decimal,
    total_income: Decimal,
    total_expenses: Decimal,
    min_balance: Option<Decimal>,
}

fn running_balance_pass(events: &[Event]) -> RunningBalance {
    let mut pass = RunningBalance {
        rows: Vec::with_capacity(events.len()),
        balance: Decimal::ZERO,
        total_income: Decimal::ZERO,
        total_expenses: Decimal::ZERO,
        min_balance: None,
    };

    for event in events {
        match event.kind {
            // The opening amount replaces the balance rather than adding to it.
            EventKind::OpeningBalance => pass.balance = event.amount,
            EventKind::Income => {
                pass.balance += event.amount;
                pass.total_income += event.amount;
            }
            EventKind::Expense => {
                pass.balance -= event.amount;
                pass.total_expenses += event.amount;
            }
        }

        if pass.min_balance.map_or(true, |min| pass.balance < min) {
            pass.min_balance = Some(pass.balance);
        }

        pass.rows.push(TimelineRow {
            date: event.date,
            description: event.description.clone(),
            kind: event.kind,
            change: event.change(),
            balance_after: pass.balance,
            is_negative: pass.balance < Decimal::ZERO,
        });
    }

    pass
}

/// Greedy per-date top-ups over its own running balance.
///
/// A date gets at most one recommendation. A later shortfall on the same date
/// only raises it (never lowers it) and only the increase is credited back.
fn recommend_transfers(opening_balance: Decimal, events: &[Event]) -> Vec<TransferRecommendation> {
    let mut transfers: Vec<TransferRecommendation> = Vec::new();
    let mut running = opening_balance;

    for event in events {
        running += event.change();
        if running >= Decimal::ZERO {
            continue;
        }

        let needed = round_up_to_increment(running.abs(), TRANSFER_INCREMENT);
        match transfers.iter_mut().find(|transfer| transfer.date == event.date) {
            Some(existing) => {
                if needed > existing.amount {
                    running += needed - existing.amount;
                    existing.amount = needed;
                }
            }
            None => {
                transfers.push(TransferRecommendation {
                    date: event.date,
                    before_event: event.description.clone(),
                    amount: needed,
                });
                running += needed;
            }
        }
    }

    transfers
}

/// Rounded magnitude of the lowest unadjusted balance, or zero.
fn aggregate_transfer_need(min_balance: Option<Decimal>) -> Decimal {
    match min_balance {
        Some(min) if min < Decimal::ZERO => round_up_to_increment(min.abs(), TRANSFER_INCREMENT),
        _ => Decimal::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cashflow_domain::EntryId;
    use rust_decimal_macros::dec;

    fn day(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
    }

    fn entry(name: &str, amount: Decimal, on: u32) -> Entry {
        Entry::new(EntryId::generate(), name, amount, day(on))
    }

    #[test]
    fn rounding_goes_up_to_next_hundred() {
        assert_eq!(round_up_to_increment(dec!(0.01), TRANSFER_INCREMENT), dec!(100));
        assert_eq!(round_up_to_increment(dec!(100), TRANSFER_INCREMENT), dec!(100));
        assert_eq!(round_up_to_increment(dec!(100.01), TRANSFER_INCREMENT), dec!(200));
        assert_eq!(round_up_to_increment(Decimal::ZERO, TRANSFER_INCREMENT), Decimal::ZERO);
    }

    #[test]
    fn ties_keep_opening_then_incomes_then_expenses() {
        let incomes = vec![entry("Salary", dec!(100), 1)];
        let expenses = vec![entry("Rent", dec!(50), 1), entry("Phone", dec!(20), 1)];
        let events = build_events(dec!(10), &incomes, &expenses, day(1));

        let order: Vec<&str> = events.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(order, vec![OPENING_BALANCE_LABEL, "Salary", "Rent", "Phone"]);
    }

    #[test]
    fn aggregate_need_is_zero_without_negative_point() {
        assert_eq!(aggregate_transfer_need(None), Decimal::ZERO);
        assert_eq!(aggregate_transfer_need(Some(dec!(0))), Decimal::ZERO);
        assert_eq!(aggregate_transfer_need(Some(dec!(-0.5))), dec!(100));
    }

    #[test]
    fn same_date_shortfall_only_credits_the_increase() {
        let expenses = vec![entry("Small", dec!(30), 4), entry("Large", dec!(200), 4)];
        let events = build_events(Decimal::ZERO, &[], &expenses, day(1));
        let transfers = recommend_transfers(Decimal::ZERO, &events);

        assert_eq!(transfers.len(), 1);
        assert_eq!(transfers[0].before_event, "Small");
        assert_eq!(transfers[0].amount, dec!(200));
    }
}
