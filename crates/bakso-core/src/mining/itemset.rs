//! Frequent itemset generation
//!
//! Level-wise (Apriori) search bounded to itemsets of one, two and three
//! ingredients. Every candidate's support is measured by scanning the
//! transactions; nothing is derived from the supports of smaller sets.
//!
//! Level 3 joins every pair of frequent 2-itemsets that share exactly one
//! item. Different pairs can produce the same triple (`{A,B}+{A,C}` and
//! `{A,B}+{B,C}` both give `{A,B,C}`); each join is kept as its own result
//! unless deduplication is requested.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::transaction::{ItemId, TransactionSet};

/// A set of ingredients with its measured support.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itemset {
    /// Items in generation order
    pub items: Vec<ItemId>,
    /// Fraction of transactions containing every item
    pub support: f64,
}

impl Itemset {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }

    /// Order-independent identity of the itemset.
    pub fn key(&self) -> Vec<ItemId> {
        sorted_key(&self.items)
    }
}

fn sorted_key(items: &[ItemId]) -> Vec<ItemId> {
    let mut key = items.to_vec();
    key.sort();
    key
}

/// Frequent itemsets grouped by size.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FrequentItemsets {
    pub level1: Vec<Itemset>,
    pub level2: Vec<Itemset>,
    pub level3: Vec<Itemset>,
}

impl FrequentItemsets {
    /// Run all three levels.
    pub fn mine(transactions: &TransactionSet, min_support: f64, deduplicate_triples: bool) -> Self {
        let level1 = frequent_1_itemsets(transactions, min_support);
        let level2 = frequent_2_itemsets(transactions, &level1, min_support);
        let level3 = frequent_3_itemsets(transactions, &level2, min_support, deduplicate_triples);

        tracing::debug!(
            transactions = transactions.len(),
            min_support,
            level1 = level1.len(),
            level2 = level2.len(),
            level3 = level3.len(),
            "frequent itemsets mined"
        );

        Self {
            level1,
            level2,
            level3,
        }
    }

    pub fn len(&self) -> usize {
        self.level1.len() + self.level2.len() + self.level3.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Counts per level, smallest itemsets first.
    pub fn level_counts(&self) -> [usize; 3] {
        [self.level1.len(), self.level2.len(), self.level3.len()]
    }

    /// Levels 1, 2 and 3 concatenated in that order.
    pub fn into_vec(self) -> Vec<Itemset> {
        let mut all = self.level1;
        all.extend(self.level2);
        all.extend(self.level3);
        all
    }
}

/// Frequent itemsets of size 1 to 3, levels concatenated, each level sorted
/// by descending support.
pub fn generate_frequent_itemsets(transactions: &TransactionSet, min_support: f64) -> Vec<Itemset> {
    FrequentItemsets::mine(transactions, min_support, false).into_vec()
}

/// Single items meeting the support threshold.
pub fn frequent_1_itemsets(transactions: &TransactionSet, min_support: f64) -> Vec<Itemset> {
    let mut frequent: Vec<Itemset> = transactions
        .distinct_items()
        .into_iter()
        .filter_map(|item| measure(transactions, vec![item], min_support))
        .collect();
    sort_by_support(&mut frequent);
    frequent
}

/// Pairs of frequent single items meeting the support threshold.
pub fn frequent_2_itemsets(
    transactions: &TransactionSet,
    level1: &[Itemset],
    min_support: f64,
) -> Vec<Itemset> {
    let items: Vec<&ItemId> = level1.iter().filter_map(|i| i.items.first()).collect();
    let mut frequent = Vec::new();

    for i in 0..items.len() {
        for j in (i + 1)..items.len() {
            let candidate = vec![items[i].clone(), items[j].clone()];
            if let Some(itemset) = measure(transactions, candidate, min_support) {
                frequent.push(itemset);
            }
        }
    }

    sort_by_support(&mut frequent);
    frequent
}

/// Triples joined from frequent pairs sharing exactly one item.
pub fn frequent_3_itemsets(
    transactions: &TransactionSet,
    level2: &[Itemset],
    min_support: f64,
    deduplicate: bool,
) -> Vec<Itemset> {
    let mut seen: HashSet<Vec<ItemId>> = HashSet::new();
    let mut frequent = Vec::new();

    for i in 0..level2.len() {
        for j in (i + 1)..level2.len() {
            let Some(candidate) = join(&level2[i], &level2[j]) else {
                continue;
            };
            if deduplicate && !seen.insert(sorted_key(&candidate)) {
                continue;
            }
            if let Some(itemset) = measure(transactions, candidate, min_support) {
                frequent.push(itemset);
            }
        }
    }

    sort_by_support(&mut frequent);
    frequent
}

/// Union of two pairs that overlap in exactly one item, in first-seen order.
fn join(a: &Itemset, b: &Itemset) -> Option<Vec<ItemId>> {
    let shared = a.items.iter().filter(|item| b.contains(item)).count();
    if shared != 1 {
        return None;
    }

    let mut union = a.items.clone();
    for item in &b.items {
        if !union.contains(item) {
            union.push(item.clone());
        }
    }
    (union.len() == 3).then_some(union)
}

fn measure(transactions: &TransactionSet, items: Vec<ItemId>, min_support: f64) -> Option<Itemset> {
    let support = transactions.support(&items);
    (support >= min_support).then_some(Itemset { items, support })
}

/// Stable sort, highest support first.
fn sort_by_support(itemsets: &mut [Itemset]) {
    itemsets.sort_by(|a, b| b.support.total_cmp(&a.support));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mining::Transaction;

    fn set(lists: &[&[&str]]) -> TransactionSet {
        lists.iter().map(|items| Transaction::new(items.iter().copied())).collect()
    }

    fn scenario() -> TransactionSet {
        set(&[&["A", "B"], &["A", "B"], &["A", "C"], &["B", "C"]])
    }

    #[test]
    fn test_level1_sorted_by_support() {
        let level1 = frequent_1_itemsets(&scenario(), 0.5);
        let items: Vec<&str> = level1.iter().map(|i| i.items[0].as_str()).collect();
        // A and B tie at 0.75 and keep first-appearance order
        assert_eq!(items, vec!["A", "B", "C"]);
        assert_eq!(level1[0].support, 0.75);
        assert_eq!(level1[1].support, 0.75);
        assert_eq!(level1[2].support, 0.5);
    }

    #[test]
    fn test_level2_measured_directly() {
        let transactions = scenario();
        let level1 = frequent_1_itemsets(&transactions, 0.5);
        let level2 = frequent_2_itemsets(&transactions, &level1, 0.5);
        assert_eq!(level2.len(), 1);
        assert_eq!(level2[0].key(), vec!["A", "B"]);
        assert_eq!(level2[0].support, 0.5);
    }

    #[test]
    fn test_empty_transactions() {
        let transactions = TransactionSet::default();
        assert!(generate_frequent_itemsets(&transactions, 0.0).is_empty());
        assert!(generate_frequent_itemsets(&transactions, -1.0).is_empty());
    }

    #[test]
    fn test_zero_support_admits_unseen_pairs() {
        let transactions = set(&[&["A"], &["B"]]);
        let all = generate_frequent_itemsets(&transactions, 0.0);
        assert_eq!(all.len(), 3);
        assert_eq!(all[2].support, 0.0);
    }

    #[test]
    fn test_threshold_above_one_admits_nothing() {
        assert!(generate_frequent_itemsets(&scenario(), 1.01).is_empty());
    }

    #[test]
    fn test_triples_duplicated_per_join() {
        let transactions = set(&[&["A", "B", "C"], &["A", "B", "C"]]);
        let mined = FrequentItemsets::mine(&transactions, 0.5, false);
        assert_eq!(mined.level_counts(), [3, 3, 3]);
        assert!(mined.level3.iter().all(|i| i.key() == vec!["A", "B", "C"]));
    }

    #[test]
    fn test_triples_deduplicated_on_request() {
        let transactions = set(&[&["A", "B", "C"], &["A", "B", "C"]]);
        let mined = FrequentItemsets::mine(&transactions, 0.5, true);
        assert_eq!(mined.level_counts(), [3, 3, 1]);
        assert_eq!(mined.level3[0].support, 1.0);
    }

    #[test]
    fn test_join_requires_single_overlap() {
        let ab = Itemset { items: vec!["A".into(), "B".into()], support: 1.0 };
        let cd = Itemset { items: vec!["C".into(), "D".into()], support: 1.0 };
        let bc = Itemset { items: vec!["B".into(), "C".into()], support: 1.0 };
        assert_eq!(join(&ab, &cd), None);
        assert_eq!(join(&ab, &ab), None);
        assert_eq!(join(&ab, &bc), Some(vec!["A".into(), "B".into(), "C".into()]));
    }

    #[test]
    fn test_levels_concatenated_in_order() {
        let transactions = set(&[&["A", "B", "C"], &["A", "B"], &["A"]]);
        let all = generate_frequent_itemsets(&transactions, 0.3);
        let sizes: Vec<usize> = all.iter().map(Itemset::len).collect();
        let mut sorted = sizes.clone();
        sorted.sort();
        assert_eq!(sizes, sorted);
    }
}
