//! Market-basket analysis over usage history
//!
//! - **Transactions**: one set of ingredient ids per usage record
//! - **Itemsets**: frequent sets of one to three ingredients
//! - **Rules**: antecedent/consequent splits with confidence and lift
//!
//! Everything here is a pure function of its inputs and is recomputed in
//! full on every call.

pub mod itemset;
pub mod report;
pub mod rules;
pub mod transaction;

pub use itemset::{
    frequent_1_itemsets, frequent_2_itemsets, frequent_3_itemsets, generate_frequent_itemsets,
    FrequentItemsets, Itemset,
};
pub use report::{is_strong_confidence, AprioriReport, SupportStrength};
pub use rules::{generate_rules, Association, AssociationRule};
pub use transaction::{ItemId, Transaction, TransactionSet};
