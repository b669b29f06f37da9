//! Association rule generation
//!
//! Each frequent itemset of two or more items is split every possible way
//! into an antecedent and a consequent. Bit `i` of the split mask puts item
//! `i` on the antecedent side; masks run from 1 to 2^k - 2 so neither side is
//! ever empty.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::itemset::Itemset;
use super::transaction::{ItemId, TransactionSet};

/// Lift within this distance of 1.0 counts as independence.
const LIFT_EPSILON: f64 = 1e-9;

/// An "if antecedent then consequent" rule mined from one itemset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssociationRule {
    pub antecedent: Vec<ItemId>,
    pub consequent: Vec<ItemId>,
    /// Support of the whole itemset
    pub support: f64,
    /// support(itemset) / support(antecedent)
    pub confidence: f64,
    /// confidence / support(consequent)
    pub lift: f64,
}

/// Direction of the association implied by a rule's lift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Association {
    /// Lift above 1
    Positive,
    /// Lift of 1
    Independent,
    /// Lift below 1
    Negative,
}

impl Association {
    pub fn from_lift(lift: f64) -> Self {
        if (lift - 1.0).abs() <= LIFT_EPSILON {
            Association::Independent
        } else if lift > 1.0 {
            Association::Positive
        } else {
            Association::Negative
        }
    }
}

impl fmt::Display for Association {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Association::Positive => write!(f, "positive"),
            Association::Independent => write!(f, "independent"),
            Association::Negative => write!(f, "negative"),
        }
    }
}

impl AssociationRule {
    pub fn association(&self) -> Association {
        Association::from_lift(self.lift)
    }
}

/// Rules from every itemset of size two or more whose confidence meets the
/// threshold, highest confidence first.
pub fn generate_rules(
    transactions: &TransactionSet,
    itemsets: &[Itemset],
    min_confidence: f64,
) -> Vec<AssociationRule> {
    let mut rules = Vec::new();

    for itemset in itemsets.iter().filter(|i| i.len() >= 2) {
        let k = itemset.len();
        let Some(full) = 1u64.checked_shl(k as u32).map(|bit| bit - 1) else {
            tracing::warn!(size = k, "itemset too large to split, skipped");
            continue;
        };

        for mask in 1..full {
            let (antecedent, consequent) = split(&itemset.items, mask);
            let rule = score(transactions, itemset.support, antecedent, consequent);
            if rule.confidence >= min_confidence {
                rules.push(rule);
            }
        }
    }

    rules.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    tracing::debug!(
        itemsets = itemsets.len(),
        min_confidence,
        rules = rules.len(),
        "association rules generated"
    );
    rules
}

/// Partition items by mask bits: set bits go to the antecedent.
fn split(items: &[ItemId], mask: u64) -> (Vec<ItemId>, Vec<ItemId>) {
    let mut antecedent = Vec::new();
    let mut consequent = Vec::new();
    for (index, item) in items.iter().enumerate() {
        if mask & (1 << index) != 0 {
            antecedent.push(item.clone());
        } else {
            consequent.push(item.clone());
        }
    }
    (antecedent, consequent)
}

fn score(
    transactions: &TransactionSet,
    support: f64,
    antecedent: Vec<ItemId>,
    consequent: Vec<ItemId>,
) -> AssociationRule {
    let antecedent_support = transactions.support(&antecedent);
    let confidence = if antecedent_support > 0.0 {
        support / antecedent_support
    } else {
        0.0
    };

    let consequent_support = transactions.support(&consequent);
    let lift = if consequent_support > 0.0 {
        confidence / consequent_support
    } else {
        0.0
    };

    AssociationRule {
        antecedent,
        consequent,
        support,
        confidence,
        lift,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mining::Transaction;

    fn set(lists: &[&[&str]]) -> TransactionSet {
        lists.iter().map(|items| Transaction::new(items.iter().copied())).collect()
    }

    fn itemset(items: &[&str], support: f64) -> Itemset {
        Itemset {
            items: items.iter().map(|s| s.to_string()).collect(),
            support,
        }
    }

    #[test]
    fn test_oversized_itemset_skipped() {
        let names: Vec<String> = (0..64).map(|i| format!("i{i}")).collect();
        let transactions: TransactionSet =
            std::iter::once(Transaction::new(names.iter().map(String::as_str))).collect();
        let huge = Itemset {
            items: names.clone(),
            support: 1.0,
        };

        let rules = generate_rules(&transactions, &[huge, itemset(&["i0", "i1"], 1.0)], 0.0);
        assert_eq!(rules.len(), 2);
        assert!(rules.iter().all(|r| r.antecedent.len() + r.consequent.len() == 2));
    }

    #[test]
    fn test_split_masks() {
        let items: Vec<ItemId> = vec!["A".into(), "B".into(), "C".into()];
        assert_eq!(split(&items, 0b001), (vec!["A".into()], vec!["B".into(), "C".into()]));
        assert_eq!(split(&items, 0b110), (vec!["B".into(), "C".into()], vec!["A".into()]));
    }

    #[test]
    fn test_pair_yields_both_directions() {
        let transactions = set(&[&["A", "B"], &["A", "B"], &["B", "C"], &["C"]]);
        let rules = generate_rules(&transactions, &[itemset(&["A", "B"], 0.5)], 0.0);
        assert_eq!(rules.len(), 2);

        let a_to_b = &rules[0];
        assert_eq!(a_to_b.antecedent, vec!["A"]);
        assert_eq!(a_to_b.consequent, vec!["B"]);
        assert_eq!(a_to_b.confidence, 1.0);
        assert!((a_to_b.lift - 4.0 / 3.0).abs() < 1e-12);
        assert_eq!(a_to_b.association(), Association::Positive);

        let b_to_a = &rules[1];
        assert!((b_to_a.confidence - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_triple_yields_six_splits() {
        let transactions = set(&[&["A", "B", "C"]]);
        let rules = generate_rules(&transactions, &[itemset(&["A", "B", "C"], 1.0)], 0.0);
        assert_eq!(rules.len(), 6);
        for rule in &rules {
            let mut all = rule.antecedent.clone();
            all.extend(rule.consequent.clone());
            all.sort();
            assert_eq!(all, vec!["A", "B", "C"]);
        }
    }

    #[test]
    fn test_singletons_produce_no_rules() {
        let transactions = set(&[&["A"]]);
        assert!(generate_rules(&transactions, &[itemset(&["A"], 1.0)], 0.0).is_empty());
    }

    #[test]
    fn test_zero_antecedent_support_gives_zero_confidence() {
        let transactions = set(&[&["A"], &["B"]]);
        let rules = generate_rules(&transactions, &[itemset(&["A", "Z"], 0.0)], 0.0);
        let from_z = rules.iter().find(|r| r.antecedent == vec!["Z"]).unwrap();
        assert_eq!(from_z.confidence, 0.0);
        assert_eq!(from_z.lift, 0.0);
    }

    #[test]
    fn test_confidence_threshold_filters() {
        let transactions = set(&[&["A", "B"], &["A", "B"], &["B", "C"], &["C"]]);
        let rules = generate_rules(&transactions, &[itemset(&["A", "B"], 0.5)], 0.8);
        assert_eq!(rules.len(), 1);
        assert!(generate_rules(&transactions, &[itemset(&["A", "B"], 0.5)], 1.5).is_empty());
    }

    #[test]
    fn test_association_from_lift() {
        assert_eq!(Association::from_lift(1.33), Association::Positive);
        assert_eq!(Association::from_lift(1.0), Association::Independent);
        assert_eq!(Association::from_lift(0.5), Association::Negative);
    }
}
