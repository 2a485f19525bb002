//! Derived records produced by the ledger engine.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Description carried by the opening-balance event.
pub const OPENING_BALANCE_LABEL: &str = "Starting Balance";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    OpeningBalance,
    Income,
    Expense,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EventKind::OpeningBalance => "Opening balance",
            EventKind::Income => "Income",
            EventKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}

/// A dated balance event built from an entry or from the opening balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub date: NaiveDate,
    pub description: String,
    pub kind: EventKind,
    pub amount: Decimal,
}

impl Event {
    /// Signed delta this event applies: zero for the opening balance.
    pub fn change(&self) -> Decimal {
        match self.kind {
            EventKind::OpeningBalance => Decimal::ZERO,
            EventKind::Income => self.amount,
            EventKind::Expense => -self.amount,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Classifies a running balance for display.
pub enum BalanceStatus {
    Negative,
    Low,
    Healthy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineRow {
    pub date: NaiveDate,
    pub description: String,
    pub kind: EventKind,
    pub change: Decimal,
    pub balance_after: Decimal,
    pub is_negative: bool,
}

impl TimelineRow {
    /// `Low` covers balances in `[0, low_threshold)`.
    pub fn status(&self, low_threshold: Decimal) -> BalanceStatus {
        if self.is_negative {
            BalanceStatus::Negative
        } else if self.balance_after < low_threshold {
            BalanceStatus::Low
        } else {
            BalanceStatus::Healthy
        }
    }
}

/// A suggested deposit to make on or before `date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRecommendation {
    pub date: NaiveDate,
    pub before_event: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowStats {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub end_balance: Decimal,
    /// Rounded shortfall at the period's lowest point. Computed independently
    /// of the itemized transfers and may differ from their sum.
    pub transfer_needed: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowReport {
    pub timeline: Vec<TimelineRow>,
    pub transfers: Vec<TransferRecommendation>,
    pub stats: CashFlowStats,
}

impl CashFlowReport {
    /// Sum of the itemized recommendations.
    pub fn itemized_transfer_total(&self) -> Decimal {
        self.transfers.iter().map(|transfer| transfer.amount).sum()
    }

    /// True when only the opening balance is present.
    pub fn has_activity(&self) -> bool {
        self.timeline.len() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn row(balance: Decimal) -> TimelineRow {
        TimelineRow {
            date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            description: "Rent".into(),
            kind: EventKind::Expense,
            change: dec!(-10),
            balance_after: balance,
            is_negative: balance < Decimal::ZERO,
        }
    }

    #[test]
    fn status_bands() {
        assert_eq!(row(dec!(-0.01)).status(dec!(100)), BalanceStatus::Negative);
        assert_eq!(row(dec!(0)).status(dec!(100)), BalanceStatus::Low);
        assert_eq!(row(dec!(99.99)).status(dec!(100)), BalanceStatus::Low);
        assert_eq!(row(dec!(100)).status(dec!(100)), BalanceStatus::Healthy);
    }

    #[test]
    fn event_change_is_signed() {
        let mut event = Event {
            date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            description: OPENING_BALANCE_LABEL.into(),
            kind: EventKind::OpeningBalance,
            amount: dec!(500),
        };
        assert_eq!(event.change(), Decimal::ZERO);
        event.kind = EventKind::Expense;
        assert_eq!(event.change(), dec!(-500));
        event.kind = EventKind::Income;
        assert_eq!(event.change(), dec!(500));
    }
}
