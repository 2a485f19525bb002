//! Input validation and mutation helpers for plan entries.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use cashflow_domain::{Entry, EntryId, EntryKind, Identifiable, MonthPlan, Period};

use crate::CoreError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw user input for a new entry, before validation.
#[derive(Debug, Clone, Default)]
pub struct EntryDraft {
    pub name: String,
    pub amount: String,
    pub date: String,
}

impl EntryDraft {
    pub fn new(name: impl Into<String>, amount: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            date: date.into(),
        }
    }
}

/// Rejects malformed entries before they reach the ledger engine.
pub struct EntryService;

impl EntryService {
    /// Validates a draft and assigns it a fresh identifier.
    pub fn validate(draft: &EntryDraft) -> Result<Entry, CoreError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(CoreError::Validation("entry name is required".into()));
        }
        let amount = parse_amount(&draft.amount)?;
        if amount < Decimal::ZERO {
            return Err(CoreError::Validation(format!(
                "amount must not be negative (got {})",
                amount
            )));
        }
        let date = parse_date(&draft.date)?;
        Ok(Entry::new(EntryId::generate(), name, amount, date))
    }

    /// Validates `draft` and appends it to the `kind` collection of `plan`.
    pub fn add(
        plan: &mut MonthPlan,
        period: Period,
        kind: EntryKind,
        draft: &EntryDraft,
    ) -> Result<EntryId, CoreError> {
        let entry = Self::validate(draft).inspect_err(|err| {
            debug!(%kind, error = %err, "rejected entry draft");
        })?;
        if !period.contains(entry.date()) {
            warn!(
                %period,
                date = %entry.date(),
                "entry falls outside the planned period"
            );
        }
        let id = entry.id();
        plan.push(kind, entry);
        Ok(id)
    }

    pub fn remove(plan: &mut MonthPlan, id: EntryId) -> Result<(EntryKind, Entry), CoreError> {
        plan.remove(id).ok_or_else(|| CoreError::EntryNotFound(id.to_string()))
    }

    /// Removes the single entry whose id starts with `prefix`.
    pub fn remove_by_prefix(
        plan: &mut MonthPlan,
        prefix: &str,
    ) -> Result<(EntryKind, Entry), CoreError> {
        let id = Self::resolve_prefix(plan, prefix)?;
        Self::remove(plan, id)
    }

    pub fn resolve_prefix(plan: &MonthPlan, prefix: &str) -> Result<EntryId, CoreError> {
        if let Ok(id) = EntryId::from_str(prefix) {
            if plan.find(id).is_some() {
                return Ok(id);
            }
        }
        let matches = plan.find_by_prefix(prefix);
        match matches.as_slice() {
            [] => Err(CoreError::EntryNotFound(prefix.to_string())),
            [(_, entry)] => Ok(entry.id()),
            _ => Err(CoreError::AmbiguousEntry(prefix.to_string())),
        }
    }
}

/// Parses a decimal amount, tolerating a leading currency symbol and
/// thousands separators.
pub fn parse_amount(input: &str) -> Result<Decimal, CoreError> {
    let cleaned: String = input
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',' && *c != '_')
        .collect();
    if cleaned.is_empty() {
        return Err(CoreError::Validation("amount is required".into()));
    }
    Decimal::from_str(&cleaned)
        .map_err(|_| CoreError::Validation(format!("`{}` is not a valid amount", input.trim())))
}

pub fn parse_date(input: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| {
        CoreError::Validation(format!(
            "`{}` is not a valid date (expected YYYY-MM-DD)",
            input.trim()
        ))
    })
}
