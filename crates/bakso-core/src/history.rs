//! Usage history.
//!
//! An append-only list of production batches. Each record remembers how many
//! portions were made, how much of each ingredient went into them, and the
//! total cost at the time.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::RecordError;
use crate::ingredient::IngredientId;
use crate::mining::TransactionSet;

/// Usage record identifier (a UUID rendered as a string).
pub type RecordId = String;

/// One production batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageRecord {
    pub id: RecordId,
    pub date: NaiveDate,
    pub portions: u32,
    /// Amount consumed per ingredient
    pub ingredients: BTreeMap<IngredientId, f64>,
    pub total_cost: f64,
}

impl UsageRecord {
    /// Create a record with a fresh identifier.
    pub fn new(
        date: NaiveDate,
        portions: u32,
        ingredients: BTreeMap<IngredientId, f64>,
        total_cost: f64,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            date,
            portions,
            ingredients,
            total_cost,
        }
    }

    pub fn cost_per_portion(&self) -> f64 {
        if self.portions == 0 {
            0.0
        } else {
            self.total_cost / self.portions as f64
        }
    }

    /// Month key in `YYYY-MM` form.
    pub fn month(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }

    fn check(&self) -> Result<(), RecordError> {
        if self.portions == 0 {
            return Err(RecordError::ZeroPortions);
        }
        for (ingredient, &amount) in &self.ingredients {
            if !(amount.is_finite() && amount > 0.0) {
                return Err(RecordError::InvalidAmount {
                    ingredient: ingredient.clone(),
                    amount,
                });
            }
        }
        Ok(())
    }
}

/// Append-only usage history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UsageHistory {
    records: Vec<UsageRecord>,
}

impl UsageHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub fn push(&mut self, record: UsageRecord) -> Result<&UsageRecord, RecordError> {
        if let Err(err) = record.check() {
            tracing::warn!(id = %record.id, error = %err, "usage record rejected");
            return Err(err);
        }
        tracing::info!(
            id = %record.id,
            date = %record.date,
            portions = record.portions,
            "usage record added"
        );
        self.records.push(record);
        Ok(&self.records[self.records.len() - 1])
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[UsageRecord] {
        &self.records
    }

    /// Records sorted by date, newest first. Same-day records keep insertion order.
    pub fn newest_first(&self) -> Vec<&UsageRecord> {
        let mut sorted: Vec<&UsageRecord> = self.records.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }

    /// Snapshot of the history as mining transactions.
    pub fn transactions(&self) -> TransactionSet {
        TransactionSet::from_records(&self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
