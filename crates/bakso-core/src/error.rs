//! Error types for bakso-core

use thiserror::Error;

/// Result type alias for bakso operations
pub type Result<T> = std::result::Result<T, BaksoError>;

/// Main error type for bakso operations
///
/// The mining engine never produces one of these; only the collaborators
/// around it (catalog, calculator, history, configuration) can fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BaksoError {
    /// Ingredient catalog errors
    #[error("Ingredient error: {0}")]
    Ingredient(#[from] IngredientError),

    /// Portion calculation errors
    #[error("Calculation error: {0}")]
    Calculation(#[from] CalculationError),

    /// Usage record errors
    #[error("Record error: {0}")]
    Record(#[from] RecordError),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Ingredient catalog errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IngredientError {
    /// Name is empty or whitespace
    #[error("Ingredient name must not be empty")]
    EmptyName,

    /// Cost per unit is not a positive number
    #[error("Cost per unit must be positive, got {0}")]
    InvalidCost(f64),

    /// Amount per portion is not a positive number
    #[error("Amount per portion must be positive, got {0}")]
    InvalidAmount(f64),

    /// Unit is not one of the supported units
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    /// No ingredient with this identifier
    #[error("Ingredient not found: {0}")]
    NotFound(String),
}

/// Portion calculator errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculationError {
    /// Portion count must be greater than zero
    #[error("Portions must be greater than 0, got {0}")]
    NonPositivePortions(i64),

    /// Portion count does not fit a usage record
    #[error("Too many portions: {0}")]
    TooManyPortions(i64),

    /// Nothing to calculate against
    #[error("No ingredients in the catalog")]
    EmptyCatalog,
}

/// Usage history errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    /// A record must describe at least one portion
    #[error("Usage record must have at least one portion")]
    ZeroPortions,

    /// Ingredient amounts must be positive
    #[error("Invalid amount {amount} for ingredient {ingredient}")]
    InvalidAmount { ingredient: String, amount: f64 },
}

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Value is out of valid range
    #[error("Value out of range: {0}")]
    OutOfRange(String),

    /// Configuration text could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
