//! The persisted record for one planning period.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{common::*, entry::*};

/// Starting balance plus the income and expense collections for a period.
///
/// Collections are kept in insertion order; the ledger engine relies on that
/// order to break ties between entries on the same date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthPlan {
    #[serde(default)]
    pub starting_balance: Decimal,
    #[serde(default)]
    pub incomes: Vec<Entry>,
    #[serde(default)]
    pub expenses: Vec<Entry>,
}

impl MonthPlan {
    pub fn new(starting_balance: Decimal) -> Self {
        Self {
            starting_balance,
            ..Self::default()
        }
    }

    pub fn entries(&self, kind: EntryKind) -> &[Entry] {
        match kind {
            EntryKind::Income => &self.incomes,
            EntryKind::Expense => &self.expenses,
        }
    }

    pub fn push(&mut self, kind: EntryKind, entry: Entry) {
        match kind {
            EntryKind::Income => self.incomes.push(entry),
            EntryKind::Expense => self.expenses.push(entry),
        }
    }

    /// Removes the entry with `id` from whichever collection holds it.
    pub fn remove(&mut self, id: EntryId) -> Option<(EntryKind, Entry)> {
        for kind in [EntryKind::Income, EntryKind::Expense] {
            let entries = match kind {
                EntryKind::Income => &mut self.incomes,
                EntryKind::Expense => &mut self.expenses,
            };
            if let Some(pos) = entries.iter().position(|entry| entry.id() == id) {
                return Some((kind, entries.remove(pos)));
            }
        }
        None
    }

    pub fn find(&self, id: EntryId) -> Option<(EntryKind, &Entry)> {
        self.iter().find(|(_, entry)| entry.id() == id)
    }

    /// Entries whose id (hyphens ignored) starts with `prefix`.
    pub fn find_by_prefix(&self, prefix: &str) -> Vec<(EntryKind, &Entry)> {
        let needle = prefix.trim().replace('-', "").to_ascii_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.iter()
            .filter(|(_, entry)| entry.id().as_uuid().simple().to_string().starts_with(&needle))
            .collect()
    }

    /// Date-sorted copy of one collection for display; stored order is untouched.
    pub fn sorted_entries(&self, kind: EntryKind) -> Vec<&Entry> {
        let mut entries: Vec<&Entry> = self.entries(kind).iter().collect();
        entries.sort_by_key(|entry| entry.date());
        entries
    }

    pub fn is_empty(&self) -> bool {
        self.incomes.is_empty() && self.expenses.is_empty()
    }

    fn iter(&self) -> impl Iterator<Item = (EntryKind, &Entry)> {
        self.incomes
            .iter()
            .map(|entry| (EntryKind::Income, entry))
            .chain(self.expenses.iter().map(|entry| (EntryKind::Expense, entry)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn entry(name: &str, amount: Decimal, day: u32) -> Entry {
        Entry::new(
            EntryId::generate(),
            name,
            amount,
            NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
        )
    }

    #[test]
    fn remove_finds_entry_in_either_collection() {
        let mut plan = MonthPlan::new(dec!(250));
        let salary = entry("Salary", dec!(2000), 1);
        let rent = entry("Rent", dec!(1200), 3);
        let rent_id = rent.id();
        plan.push(EntryKind::Income, salary);
        plan.push(EntryKind::Expense, rent);

        let (kind, removed) = plan.remove(rent_id).expect("rent removed");
        assert_eq!(kind, EntryKind::Expense);
        assert_eq!(removed.name(), "Rent");
        assert!(plan.expenses.is_empty());
        assert_eq!(plan.incomes.len(), 1);
        assert!(plan.remove(rent_id).is_none());
    }

    #[test]
    fn sorted_entries_leave_storage_order_alone() {
        let mut plan = MonthPlan::default();
        plan.push(EntryKind::Expense, entry("Late", dec!(10), 20));
        plan.push(EntryKind::Expense, entry("Early", dec!(10), 2));

        let sorted: Vec<&str> = plan
            .sorted_entries(EntryKind::Expense)
            .iter()
            .map(|entry| entry.name())
            .collect();
        assert_eq!(sorted, vec!["Early", "Late"]);
        assert_eq!(plan.expenses[0].name(), "Late");
    }

    #[test]
    fn prefix_lookup_matches_short_ids() {
        let mut plan = MonthPlan::default();
        let gym = entry("Gym", dec!(45), 5);
        let short = gym.id().short();
        plan.push(EntryKind::Expense, gym);

        let hits = plan.find_by_prefix(&short);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].1.name(), "Gym");
        assert!(plan.find_by_prefix("").is_empty());
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let plan: MonthPlan = serde_json::from_str("{}").unwrap();
        assert_eq!(plan, MonthPlan::default());
    }
}
