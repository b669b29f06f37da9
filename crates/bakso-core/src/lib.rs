//! Bakso Core - Ingredient costing and usage analysis for a meatball stall
//!
//! This crate provides the core functionality behind the `bakso` terminal app:
//!
//! - **Ingredient**: Catalog of ingredients with unit, cost per unit and amount per portion
//! - **Calculator**: Linear scaling of the catalog to a number of portions
//! - **History**: Append-only usage records, one per production batch
//! - **Analytics**: Cost breakdown, usage frequency, totals and monthly trend
//! - **Mining**: Apriori frequent itemsets (sizes 1 to 3) and association rules
//! - **Session**: Caller-owned state tying the pieces together
//! - **Config**: Mining thresholds and presentation cut-offs
//!
//! # Mining pipeline
//!
//! ```text
//! UsageHistory → TransactionSet → Itemsets (L1 → L2 → L3) → Rules
//! ```
//!
//! The mining functions are pure and never fail. Support is always measured
//! directly against the transactions.

pub mod analytics;
pub mod calculator;
pub mod config;
pub mod error;
pub mod format;
pub mod history;
pub mod ingredient;
pub mod mining;
pub mod session;

pub use analytics::{
    AnalyticsReport, IngredientCost, IngredientUsage, MonthlyTrend, Overview, UsageFrequency,
};
pub use calculator::{CalculationLine, PortionCalculation};
pub use config::{BaksoConfig, DisplayConfig, MiningConfig};
pub use error::{BaksoError, CalculationError, ConfigError, IngredientError, RecordError, Result};
pub use history::{RecordId, UsageHistory, UsageRecord};
pub use ingredient::{Ingredient, IngredientCatalog, IngredientDraft, IngredientId, Unit};
pub use mining::{
    generate_frequent_itemsets, generate_rules, Association, AssociationRule, AprioriReport,
    Itemset, SupportStrength, Transaction, TransactionSet,
};
pub use session::Session;
