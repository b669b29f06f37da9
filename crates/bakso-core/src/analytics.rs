//! Descriptive analytics over the catalog and usage history
//!
//! Provides the breakdowns shown on the analytics screen:
//! - Cost per portion for each ingredient
//! - How often each ingredient was used
//! - Total amount used per ingredient
//! - Monthly portions and cost

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::history::UsageHistory;
use crate::ingredient::{IngredientCatalog, IngredientId, Unit};

/// Cost of one ingredient in a single portion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientCost {
    pub ingredient_id: IngredientId,
    pub name: String,
    pub cost_per_portion: f64,
    pub cost_per_unit: f64,
}

/// Number of usage records an ingredient appears in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageFrequency {
    pub ingredient_id: IngredientId,
    pub name: String,
    pub frequency: usize,
}

/// Total amount of an ingredient used across all records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientUsage {
    pub ingredient_id: IngredientId,
    pub name: String,
    pub total_used: f64,
    pub unit: Unit,
}

/// Production and cost for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTrend {
    /// `YYYY-MM`
    pub month: String,
    pub portions: u64,
    pub cost: f64,
    pub avg_cost_per_portion: f64,
}

/// Headline numbers for the whole history.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Overview {
    pub total_records: usize,
    pub total_portions: u64,
    pub total_cost: f64,
    pub avg_cost_per_portion: f64,
}

/// All analytics for one snapshot of catalog and history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    pub overview: Overview,
    pub cost_analysis: Vec<IngredientCost>,
    pub usage_frequency: Vec<UsageFrequency>,
    pub total_usage: Vec<IngredientUsage>,
    pub monthly_trend: Vec<MonthlyTrend>,
}

impl AnalyticsReport {
    pub fn compute(catalog: &IngredientCatalog, history: &UsageHistory) -> Self {
        Self {
            overview: overview(history),
            cost_analysis: cost_analysis(catalog),
            usage_frequency: usage_frequency(catalog, history),
            total_usage: total_usage(catalog, history),
            monthly_trend: monthly_trend(history),
        }
    }
}

/// Cost per portion for each ingredient, most expensive first.
pub fn cost_analysis(catalog: &IngredientCatalog) -> Vec<IngredientCost> {
    let mut costs: Vec<IngredientCost> = catalog
        .iter()
        .map(|i| IngredientCost {
            ingredient_id: i.id.clone(),
            name: i.name.clone(),
            cost_per_portion: i.cost_per_portion(),
            cost_per_unit: i.cost_per_unit,
        })
        .collect();
    costs.sort_by(|a, b| b.cost_per_portion.total_cmp(&a.cost_per_portion));
    costs
}

/// Record count per catalog ingredient, most used first.
///
/// Ingredients that were never used are listed with a frequency of zero.
pub fn usage_frequency(catalog: &IngredientCatalog, history: &UsageHistory) -> Vec<UsageFrequency> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in history.records() {
        for id in record.ingredients.keys() {
            *counts.entry(id.as_str()).or_insert(0) += 1;
        }
    }

    let mut frequency: Vec<UsageFrequency> = catalog
        .iter()
        .map(|i| UsageFrequency {
            ingredient_id: i.id.clone(),
            name: i.name.clone(),
            frequency: counts.get(i.id.as_str()).copied().unwrap_or(0),
        })
        .collect();
    frequency.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    frequency
}

/// Summed amount per catalog ingredient, largest first, unused dropped.
pub fn total_usage(catalog: &IngredientCatalog, history: &UsageHistory) -> Vec<IngredientUsage> {
    let mut totals: HashMap<&str, f64> = HashMap::new();
    for record in history.records() {
        for (id, amount) in &record.ingredients {
            *totals.entry(id.as_str()).or_insert(0.0) += amount;
        }
    }

    let mut usage: Vec<IngredientUsage> = catalog
        .iter()
        .map(|i| IngredientUsage {
            ingredient_id: i.id.clone(),
            name: i.name.clone(),
            total_used: totals.get(i.id.as_str()).copied().unwrap_or(0.0),
            unit: i.unit,
        })
        .filter(|u| u.total_used > 0.0)
        .collect();
    usage.sort_by(|a, b| b.total_used.total_cmp(&a.total_used));
    usage
}

/// Portions and cost grouped by month, oldest first.
pub fn monthly_trend(history: &UsageHistory) -> Vec<MonthlyTrend> {
    let mut months: BTreeMap<String, (u64, f64)> = BTreeMap::new();
    for record in history.records() {
        let entry = months.entry(record.month()).or_insert((0, 0.0));
        entry.0 += record.portions as u64;
        entry.1 += record.total_cost;
    }

    months
        .into_iter()
        .map(|(month, (portions, cost))| MonthlyTrend {
            month,
            portions,
            cost,
            avg_cost_per_portion: if portions > 0 { cost / portions as f64 } else { 0.0 },
        })
        .collect()
}

pub fn overview(history: &UsageHistory) -> Overview {
    let total_portions: u64 = history.records().iter().map(|r| r.portions as u64).sum();
    let total_cost: f64 = history.records().iter().map(|r| r.total_cost).sum();
    Overview {
        total_records: history.len(),
        total_portions,
        total_cost,
        avg_cost_per_portion: if total_portions > 0 {
            total_cost / total_portions as f64
        } else {
            0.0
        },
    }
}
