//! Error types for the catalog crate.
//!
//! Rust error handling concepts demonstrated:
//! - thiserror for defining custom error types
//! - Enum variants for different validation failures
//! - `#[from]` conversions so `?` works on I/O and JSON errors

use thiserror::Error;

/// Errors that can occur while building or loading a catalog
///
/// The `#[derive(Error)]` macro from thiserror implements `std::error::Error`
/// and `Display` based on the `#[error(...)]` attributes
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Catalog file is not valid JSON or does not match the record format
    #[error("Invalid catalog JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A dish record has a blank name
    #[error("Dish at position {position} has an empty name")]
    EmptyName { position: usize },

    /// A dish record has no ingredients
    #[error("Dish '{dish}' has no ingredients")]
    NoIngredients { dish: String },

    /// An ingredient has a blank name or a zero amount
    #[error("Dish '{dish}' has an invalid ingredient '{ingredient}': {reason}")]
    InvalidIngredient {
        dish: String,
        ingredient: String,
        reason: String,
    },

    /// A dish record has no preparation text
    #[error("Dish '{dish}' has an empty preparation")]
    EmptyPreparation { dish: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
