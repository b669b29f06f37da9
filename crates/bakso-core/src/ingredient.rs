//! Ingredient catalog.
//!
//! Ingredients carry a unit cost and the amount one portion of bakso
//! consumes. The catalog keeps them in insertion order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IngredientError;
use crate::format::UNKNOWN_LABEL;

/// Ingredient identifier (a UUID rendered as a string).
pub type IngredientId = String;

/// Unit of measure for an ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Kg,
    Gram,
    Liter,
    Ml,
    Buah,
    Porsi,
    Sdm,
    Sdt,
}

impl Unit {
    /// All supported units, in display order.
    pub const ALL: [Unit; 8] = [
        Unit::Kg,
        Unit::Gram,
        Unit::Liter,
        Unit::Ml,
        Unit::Buah,
        Unit::Porsi,
        Unit::Sdm,
        Unit::Sdt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Kg => "kg",
            Unit::Gram => "gram",
            Unit::Liter => "liter",
            Unit::Ml => "ml",
            Unit::Buah => "buah",
            Unit::Porsi => "porsi",
            Unit::Sdm => "sdm",
            Unit::Sdt => "sdt",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = IngredientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Unit::ALL
            .iter()
            .copied()
            .find(|u| u.as_str() == needle)
            .ok_or_else(|| IngredientError::UnknownUnit(s.to_string()))
    }
}

/// An ingredient in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: IngredientId,
    pub name: String,
    pub unit: Unit,
    /// Price of one unit, in Rupiah
    pub cost_per_unit: f64,
    /// Units consumed by a single portion
    pub amount_per_portion: f64,
}

impl Ingredient {
    /// Cost of the ingredient in one portion.
    pub fn cost_per_portion(&self) -> f64 {
        self.cost_per_unit * self.amount_per_portion
    }
}

/// Ingredient fields without an identifier, used for add and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientDraft {
    pub name: String,
    pub unit: Unit,
    pub cost_per_unit: f64,
    pub amount_per_portion: f64,
}

impl IngredientDraft {
    pub fn new(name: impl Into<String>, unit: Unit, cost_per_unit: f64, amount_per_portion: f64) -> Self {
        Self {
            name: name.into(),
            unit,
            cost_per_unit,
            amount_per_portion,
        }
    }

    /// Check the draft and return it with a trimmed name.
    pub fn validate(mut self) -> Result<Self, IngredientError> {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            return Err(IngredientError::EmptyName);
        }
        if !(self.cost_per_unit.is_finite() && self.cost_per_unit > 0.0) {
            return Err(IngredientError::InvalidCost(self.cost_per_unit));
        }
        if !(self.amount_per_portion.is_finite() && self.amount_per_portion > 0.0) {
            return Err(IngredientError::InvalidAmount(self.amount_per_portion));
        }
        self.name = trimmed.to_string();
        Ok(self)
    }
}

/// The ingredient catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngredientCatalog {
    ingredients: Vec<Ingredient>,
}

impl IngredientCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an ingredient, assigning it a fresh identifier.
    pub fn add(&mut self, draft: IngredientDraft) -> Result<&Ingredient, IngredientError> {
        let draft = draft.validate()?;
        let ingredient = Ingredient {
            id: uuid::Uuid::new_v4().to_string(),
            name: draft.name,
            unit: draft.unit,
            cost_per_unit: draft.cost_per_unit,
            amount_per_portion: draft.amount_per_portion,
        };
        tracing::info!(id = %ingredient.id, name = %ingredient.name, "ingredient added");
        self.ingredients.push(ingredient);
        Ok(&self.ingredients[self.ingredients.len() - 1])
    }

    /// Replace the fields of an existing ingredient, keeping its identifier.
    pub fn update(&mut self, id: &str, draft: IngredientDraft) -> Result<&Ingredient, IngredientError> {
        let draft = draft.validate()?;
        let idx = self.position(id)?;
        let ingredient = &mut self.ingredients[idx];
        ingredient.name = draft.name;
        ingredient.unit = draft.unit;
        ingredient.cost_per_unit = draft.cost_per_unit;
        ingredient.amount_per_portion = draft.amount_per_portion;
        tracing::info!(id = %id, "ingredient updated");
        Ok(&self.ingredients[idx])
    }

    /// Remove an ingredient and return it.
    pub fn remove(&mut self, id: &str) -> Result<Ingredient, IngredientError> {
        let idx = self.position(id)?;
        tracing::info!(id = %id, "ingredient removed");
        Ok(self.ingredients.remove(idx))
    }

    pub fn get(&self, id: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ingredient> {
        self.ingredients.iter()
    }

    pub fn as_slice(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    /// Display name for an identifier, "Unknown" when absent.
    pub fn name_of(&self, id: &str) -> &str {
        self.get(id).map(|i| i.name.as_str()).unwrap_or(UNKNOWN_LABEL)
    }

    /// Unit label for an identifier, empty when absent.
    pub fn unit_of(&self, id: &str) -> &str {
        self.get(id).map(|i| i.unit.as_str()).unwrap_or("")
    }

    fn position(&self, id: &str) -> Result<usize, IngredientError> {
        self.ingredients
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| IngredientError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beef() -> IngredientDraft {
        IngredientDraft::new("Daging Sapi", Unit::Kg, 120_000.0, 0.05)
    }

    #[test]
    fn unit_parsing() {
        assert_eq!("KG".parse::<Unit>().unwrap(), Unit::Kg);
        assert_eq!(" sdm ".parse::<Unit>().unwrap(), Unit::Sdm);
        assert_eq!(
            "cup".parse::<Unit>(),
            Err(IngredientError::UnknownUnit("cup".to_string()))
        );
    }

    #[test]
    fn add_assigns_unique_ids() {
        let mut catalog = IngredientCatalog::new();
        let a = catalog.add(beef()).unwrap().id.clone();
        let b = catalog.add(beef()).unwrap().id.clone();
        assert_ne!(a, b);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn add_trims_name() {
        let mut catalog = IngredientCatalog::new();
        let draft = IngredientDraft::new("  Garam ", Unit::Gram, 15.0, 2.0);
        assert_eq!(catalog.add(draft).unwrap().name, "Garam");
    }

    #[test]
    fn add_rejects_invalid_drafts() {
        let mut catalog = IngredientCatalog::new();
        assert_eq!(
            catalog.add(IngredientDraft::new(" ", Unit::Kg, 1.0, 1.0)).unwrap_err(),
            IngredientError::EmptyName
        );
        assert_eq!(
            catalog.add(IngredientDraft::new("x", Unit::Kg, 0.0, 1.0)).unwrap_err(),
            IngredientError::InvalidCost(0.0)
        );
        assert_eq!(
            catalog.add(IngredientDraft::new("x", Unit::Kg, 1.0, -2.0)).unwrap_err(),
            IngredientError::InvalidAmount(-2.0)
        );
        assert!(catalog.is_empty());
    }

    #[test]
    fn update_keeps_id() {
        let mut catalog = IngredientCatalog::new();
        let id = catalog.add(beef()).unwrap().id.clone();
        let updated = catalog
            .update(&id, IngredientDraft::new("Daging Ayam", Unit::Kg, 40_000.0, 0.06))
            .unwrap();
        assert_eq!(updated.id, id);
        assert_eq!(updated.name, "Daging Ayam");
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn update_and_remove_unknown() {
        let mut catalog = IngredientCatalog::new();
        assert_eq!(
            catalog.update("nope", beef()).unwrap_err(),
            IngredientError::NotFound("nope".to_string())
        );
        assert_eq!(
            catalog.remove("nope").unwrap_err(),
            IngredientError::NotFound("nope".to_string())
        );
    }

    #[test]
    fn name_lookup_falls_back() {
        let mut catalog = IngredientCatalog::new();
        let id = catalog.add(beef()).unwrap().id.clone();
        assert_eq!(catalog.name_of(&id), "Daging Sapi");
        assert_eq!(catalog.unit_of(&id), "kg");
        catalog.remove(&id).unwrap();
        assert_eq!(catalog.name_of(&id), "Unknown");
        assert_eq!(catalog.unit_of(&id), "");
    }

    #[test]
    fn cost_per_portion() {
        let mut catalog = IngredientCatalog::new();
        let ingredient = catalog.add(beef()).unwrap();
        assert!((ingredient.cost_per_portion() - 6_000.0).abs() < 1e-9);
    }
}
