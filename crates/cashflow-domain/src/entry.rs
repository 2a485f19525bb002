//! Dated income and expense entries.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// Opaque identity of an entry, assigned once at creation by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }

    /// First eight hex digits, enough to address an entry from the shell.
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl From<Uuid> for EntryId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntryId {
    type Err = uuid::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(value.trim()).map(Self)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
/// Names the two disjoint entry collections of a plan.
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    pub fn plural(self) -> &'static str {
        match self {
            EntryKind::Income => "incomes",
            EntryKind::Expense => "expenses",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntryKind::Income => "income",
            EntryKind::Expense => "expense",
        };
        f.write_str(label)
    }
}

/// A named, dated, non-negative amount. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    id: EntryId,
    name: String,
    amount: Decimal,
    date: NaiveDate,
}

impl Entry {
    pub fn new(id: EntryId, name: impl Into<String>, amount: Decimal, date: NaiveDate) -> Self {
        Self {
            id,
            name: name.into(),
            amount,
            date,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Identifiable for Entry {
    fn id(&self) -> EntryId {
        self.id
    }
}

impl NamedEntity for Entry {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Amounted for Entry {
    fn amount(&self) -> Decimal {
        self.amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn entry_serializes_with_plain_fields() {
        let id: EntryId = "6f1c2a52-4c3e-4d7b-9a55-1b6a2f0d9e01".parse().unwrap();
        let entry = Entry::new(
            id,
            "Paycheck",
            dec!(1500.00),
            NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
        );
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["id"], "6f1c2a52-4c3e-4d7b-9a55-1b6a2f0d9e01");
        assert_eq!(json["name"], "Paycheck");
        assert_eq!(json["date"], "2025-03-15");

        let back: Entry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn short_id_is_uuid_prefix() {
        let id = EntryId::generate();
        assert_eq!(id.short().len(), 8);
        assert!(id.as_uuid().simple().to_string().starts_with(&id.short()));
    }
}
