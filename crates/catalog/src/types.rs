//! Core domain types for the dish catalog.
//!
//! - `Ingredient` is a plain value type, compared and hashed by value
//! - `DishRecord` is the id-less input form (built-in table or JSON file)
//! - `Dish` is the validated, identified form handed out by the catalog

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a dish, assigned once when the catalog is built
pub type DishId = Uuid;

// =============================================================================
// Ingredient
// =============================================================================

/// One ingredient of a dish, measured in grams for a single serving.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    /// Base amount for one serving, always > 0 inside a catalog
    pub amount_grams: u32,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, amount_grams: u32) -> Self {
        Self {
            name: name.into(),
            amount_grams,
        }
    }
}

// =============================================================================
// Dish
// =============================================================================

/// A dish as it appears in a catalog file, before ids are assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishRecord {
    pub name: String,
    pub ingredients: Vec<Ingredient>,
    pub preparation: String,
}

impl DishRecord {
    pub fn new(
        name: impl Into<String>,
        ingredients: Vec<Ingredient>,
        preparation: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ingredients,
            preparation: preparation.into(),
        }
    }
}

/// A named recipe with its ingredients and free-text preparation steps.
///
/// Fields are private: a `Dish` only comes out of a `Catalog`, which
/// validates the record and assigns the id. Nothing can change it afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dish {
    id: DishId,
    name: String,
    ingredients: Vec<Ingredient>,
    preparation: String,
}

impl Dish {
    /// Attach a fresh id to an already validated record
    pub(crate) fn from_record(record: DishRecord) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: record.name,
            ingredients: record.ingredients,
            preparation: record.preparation,
        }
    }

    pub fn id(&self) -> DishId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ingredients in recipe order (never empty)
    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// Preparation text exactly as stored
    pub fn preparation(&self) -> &str {
        &self.preparation
    }
}
