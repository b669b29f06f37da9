//! One complete Apriori run and the cut-offs used to present it.

use serde::{Deserialize, Serialize};

use super::itemset::{FrequentItemsets, Itemset};
use super::rules::{generate_rules, AssociationRule};
use super::transaction::TransactionSet;
use crate::config::{DisplayConfig, MiningConfig};

/// Result of mining one snapshot of transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AprioriReport {
    pub min_support: f64,
    pub min_confidence: f64,
    pub transaction_count: usize,
    /// Number of frequent itemsets of size 1, 2 and 3
    pub level_counts: [usize; 3],
    /// Frequent itemsets, levels concatenated, each level by descending support
    pub itemsets: Vec<Itemset>,
    /// Rules by descending confidence
    pub rules: Vec<AssociationRule>,
}

impl AprioriReport {
    /// Mine itemsets and rules with the configured thresholds.
    pub fn run(transactions: &TransactionSet, config: &MiningConfig) -> Self {
        let frequent =
            FrequentItemsets::mine(transactions, config.min_support, config.deduplicate_triples);
        let level_counts = frequent.level_counts();
        let itemsets = frequent.into_vec();
        let rules = generate_rules(transactions, &itemsets, config.min_confidence);

        Self {
            min_support: config.min_support,
            min_confidence: config.min_confidence,
            transaction_count: transactions.len(),
            level_counts,
            itemsets,
            rules,
        }
    }

    pub fn itemset_count(&self) -> usize {
        self.itemsets.len()
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// True when there was nothing to mine.
    pub fn is_empty(&self) -> bool {
        self.transaction_count == 0
    }
}

/// Presentation band for an itemset's support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupportStrength {
    High,
    Medium,
    Low,
}

impl SupportStrength {
    pub fn classify(support: f64, display: &DisplayConfig) -> Self {
        if support >= display.high_support {
            SupportStrength::High
        } else if support >= display.medium_support {
            SupportStrength::Medium
        } else {
            SupportStrength::Low
        }
    }
}

/// Whether a rule's confidence is shown as strong.
pub fn is_strong_confidence(confidence: f64, display: &DisplayConfig) -> bool {
    confidence >= display.strong_confidence
}
