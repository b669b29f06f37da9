//! Portion calculator.
//!
//! Scales every catalog ingredient linearly by the number of portions to
//! produce, and turns the result into a usage record.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CalculationError;
use crate::history::UsageRecord;
use crate::ingredient::{IngredientCatalog, IngredientId, Unit};

/// Requirement for one ingredient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationLine {
    pub ingredient_id: IngredientId,
    pub name: String,
    pub unit: Unit,
    /// amount per portion x portions
    pub amount: f64,
    /// amount x cost per unit
    pub cost: f64,
}

/// Ingredient requirements and cost for a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortionCalculation {
    pub portions: u32,
    pub lines: Vec<CalculationLine>,
}

impl PortionCalculation {
    /// Compute requirements for `portions` portions.
    ///
    /// Takes a signed count so that zero and negative input from a form is
    /// reported rather than silently wrapped.
    pub fn compute(catalog: &IngredientCatalog, portions: i64) -> Result<Self, CalculationError> {
        if portions <= 0 {
            return Err(CalculationError::NonPositivePortions(portions));
        }
        if portions > u32::MAX as i64 {
            return Err(CalculationError::TooManyPortions(portions));
        }
        if catalog.is_empty() {
            return Err(CalculationError::EmptyCatalog);
        }

        let lines = catalog
            .iter()
            .map(|ingredient| {
                let amount = ingredient.amount_per_portion * portions as f64;
                CalculationLine {
                    ingredient_id: ingredient.id.clone(),
                    name: ingredient.name.clone(),
                    unit: ingredient.unit,
                    amount,
                    cost: amount * ingredient.cost_per_unit,
                }
            })
            .collect();

        tracing::debug!(portions, "portion calculation");
        Ok(Self {
            portions: portions as u32,
            lines,
        })
    }

    /// Lines in catalog order.
    pub fn lines(&self) -> &[CalculationLine] {
        &self.lines
    }

    pub fn total_cost(&self) -> f64 {
        self.lines.iter().map(|l| l.cost).sum()
    }

    pub fn cost_per_portion(&self) -> f64 {
        if self.portions == 0 {
            0.0
        } else {
            self.total_cost() / self.portions as f64
        }
    }

    /// Build the usage record for this batch.
    pub fn to_record(&self, date: NaiveDate) -> UsageRecord {
        let ingredients: BTreeMap<IngredientId, f64> = self
            .lines
            .iter()
            .map(|l| (l.ingredient_id.clone(), l.amount))
            .collect();
        UsageRecord::new(date, self.portions, ingredients, self.total_cost())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingredient::IngredientDraft;

    fn catalog() -> IngredientCatalog {
        let mut catalog = IngredientCatalog::new();
        catalog
            .add(IngredientDraft::new("Daging Sapi", Unit::Kg, 120_000.0, 0.05))
            .unwrap();
        catalog
            .add(IngredientDraft::new("Tepung Tapioka", Unit::Kg, 12_000.0, 0.02))
            .unwrap();
        catalog
    }

    #[test]
    fn test_linear_scaling() {
        let calc = PortionCalculation::compute(&catalog(), 100).unwrap();
        assert_eq!(calc.lines.len(), 2);
        assert!((calc.lines[0].amount - 5.0).abs() < 1e-9);
        assert!((calc.lines[0].cost - 600_000.0).abs() < 1e-6);
        assert!((calc.lines[1].cost - 24_000.0).abs() < 1e-6);
        assert!((calc.total_cost() - 624_000.0).abs() < 1e-6);
        assert!((calc.cost_per_portion() - 6_240.0).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_non_positive_portions() {
        assert_eq!(
            PortionCalculation::compute(&catalog(), 0).unwrap_err(),
            CalculationError::NonPositivePortions(0)
        );
        assert_eq!(
            PortionCalculation::compute(&catalog(), -3).unwrap_err(),
            CalculationError::NonPositivePortions(-3)
        );
    }

    #[test]
    fn test_rejects_empty_catalog() {
        assert_eq!(
            PortionCalculation::compute(&IngredientCatalog::new(), 10).unwrap_err(),
            CalculationError::EmptyCatalog
        );
    }

    #[test]
    fn test_to_record() {
        let calc = PortionCalculation::compute(&catalog(), 10).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 5, 17).unwrap();
        let record = calc.to_record(date);
        assert_eq!(record.portions, 10);
        assert_eq!(record.date, date);
        assert_eq!(record.ingredients.len(), 2);
        assert!((record.total_cost - calc.total_cost()).abs() < 1e-9);
    }
}
