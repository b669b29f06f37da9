//! Caller-owned application state.
//!
//! A [`Session`] holds the ingredient catalog, the usage history and the
//! configuration. Every analysis is computed from a fresh snapshot of the
//! history; nothing is cached here.

use chrono::NaiveDate;

use crate::analytics::AnalyticsReport;
use crate::calculator::PortionCalculation;
use crate::config::{BaksoConfig, MiningConfig};
use crate::error::Result;
use crate::history::{UsageHistory, UsageRecord};
use crate::ingredient::{Ingredient, IngredientCatalog, IngredientDraft};
use crate::mining::AprioriReport;

/// Catalog, history and configuration for one user.
#[derive(Debug, Clone, Default)]
pub struct Session {
    catalog: IngredientCatalog,
    history: UsageHistory,
    config: BaksoConfig,
}

impl Session {
    pub fn new(config: BaksoConfig) -> Self {
        Self {
            catalog: IngredientCatalog::new(),
            history: UsageHistory::new(),
            config,
        }
    }

    pub fn catalog(&self) -> &IngredientCatalog {
        &self.catalog
    }

    pub fn history(&self) -> &UsageHistory {
        &self.history
    }

    pub fn config(&self) -> &BaksoConfig {
        &self.config
    }

    /// Replace the mining thresholds used by [`Session::analyze`].
    ///
    /// Values are taken as given; range checks belong to the caller.
    pub fn set_thresholds(&mut self, min_support: f64, min_confidence: f64) {
        self.config.mining.min_support = min_support;
        self.config.mining.min_confidence = min_confidence;
    }

    pub fn add_ingredient(&mut self, draft: IngredientDraft) -> Result<&Ingredient> {
        Ok(self.catalog.add(draft)?)
    }

    pub fn update_ingredient(&mut self, id: &str, draft: IngredientDraft) -> Result<&Ingredient> {
        Ok(self.catalog.update(id, draft)?)
    }

    pub fn remove_ingredient(&mut self, id: &str) -> Result<Ingredient> {
        Ok(self.catalog.remove(id)?)
    }

    /// Requirements for a batch against the current catalog.
    pub fn calculate(&self, portions: i64) -> Result<PortionCalculation> {
        Ok(PortionCalculation::compute(&self.catalog, portions)?)
    }

    /// Save a calculated batch to the history.
    pub fn record(&mut self, calculation: &PortionCalculation, date: NaiveDate) -> Result<&UsageRecord> {
        Ok(self.history.push(calculation.to_record(date))?)
    }

    pub fn analytics(&self) -> AnalyticsReport {
        AnalyticsReport::compute(&self.catalog, &self.history)
    }

    /// Mine the history with the configured thresholds.
    pub fn analyze(&self) -> AprioriReport {
        AprioriReport::run(&self.history.transactions(), &self.config.mining)
    }

    /// Mine the history with explicit thresholds.
    pub fn analyze_with(&self, min_support: f64, min_confidence: f64) -> AprioriReport {
        let mining = MiningConfig {
            min_support,
            min_confidence,
            ..self.config.mining.clone()
        };
        AprioriReport::run(&self.history.transactions(), &mining)
    }
}
