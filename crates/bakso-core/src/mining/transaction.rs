//! Transactions derived from usage records.
//!
//! A transaction is the set of ingredients used together in one record.
//! Support of an itemset is the fraction of transactions containing all of
//! its items.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::history::UsageRecord;

/// Item identifier inside a transaction (an ingredient id).
pub type ItemId = String;

/// The ingredients used together in one usage record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Transaction {
    items: BTreeSet<ItemId>,
}

impl Transaction {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ItemId>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Ingredients with a nonzero amount in the record.
    pub fn from_record(record: &UsageRecord) -> Self {
        Self {
            items: record
                .ingredients
                .iter()
                .filter(|&(_, &amount)| amount != 0.0)
                .map(|(id, _)| id.clone())
                .collect(),
        }
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.contains(item)
    }

    /// True when every item is present.
    pub fn contains_all<S: AsRef<str>>(&self, items: &[S]) -> bool {
        items.iter().all(|item| self.items.contains(item.as_ref()))
    }

    pub fn items(&self) -> impl Iterator<Item = &ItemId> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// An immutable snapshot of transactions to mine.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TransactionSet {
    transactions: Vec<Transaction>,
}

impl TransactionSet {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    pub fn from_records(records: &[UsageRecord]) -> Self {
        Self::new(records.iter().map(Transaction::from_record).collect())
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }

    /// Distinct items in order of first appearance.
    pub fn distinct_items(&self) -> Vec<ItemId> {
        let mut seen = HashSet::new();
        let mut items = Vec::new();
        for item in self.transactions.iter().flat_map(|t| t.items()) {
            if seen.insert(item.as_str()) {
                items.push(item.clone());
            }
        }
        items
    }

    /// Number of transactions containing every item.
    pub fn count_containing<S: AsRef<str>>(&self, items: &[S]) -> usize {
        self.transactions
            .iter()
            .filter(|t| t.contains_all(items))
            .count()
    }

    /// Fraction of transactions containing every item; 0 when there are none.
    pub fn support<S: AsRef<str>>(&self, items: &[S]) -> f64 {
        if self.transactions.is_empty() {
            return 0.0;
        }
        self.count_containing(items) as f64 / self.transactions.len() as f64
    }
}

impl FromIterator<Transaction> for TransactionSet {
    fn from_iter<T: IntoIterator<Item = Transaction>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    fn set(lists: &[&[&str]]) -> TransactionSet {
        lists.iter().map(|items| Transaction::new(items.iter().copied())).collect()
    }

    #[test]
    fn test_support_counts_full_containment() {
        let transactions = set(&[&["A", "B"], &["A", "B"], &["A", "C"], &["B", "C"]]);
        assert_eq!(transactions.support(&["A"]), 0.75);
        assert_eq!(transactions.support(&["C"]), 0.5);
        assert_eq!(transactions.support(&["A", "B"]), 0.5);
        assert_eq!(transactions.support(&["A", "B", "C"]), 0.0);
    }

    #[test]
    fn test_support_of_empty_set_is_zero() {
        let transactions = TransactionSet::default();
        assert_eq!(transactions.support(&["A"]), 0.0);
        assert!(transactions.distinct_items().is_empty());
    }

    #[test]
    fn test_distinct_items_keep_first_appearance() {
        let transactions = set(&[&["C", "B"], &["A", "B"], &["D"]]);
        assert_eq!(transactions.distinct_items(), vec!["B", "C", "A", "D"]);
    }

    #[test]
    fn test_from_record_skips_zero_amounts() {
        let mut ingredients = BTreeMap::new();
        ingredients.insert("x".to_string(), 2.0);
        ingredients.insert("y".to_string(), 0.0);
        let record = UsageRecord::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 3, ingredients, 1.0);
        let transaction = Transaction::from_record(&record);
        assert!(transaction.contains("x"));
        assert!(!transaction.contains("y"));
        assert_eq!(transaction.len(), 1);
    }
}
