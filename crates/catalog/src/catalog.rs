//! The Catalog - an immutable, ordered collection of dishes.
//!
//! A catalog is built exactly once:
//! 1. Validate every `DishRecord` (name, ingredients, amounts, preparation)
//! 2. Assign each dish a fresh `DishId`
//! 3. Build the id -> position index for lookups
//!
//! After construction there is no way to add, remove or edit a dish.

use crate::builtin;
use crate::error::{CatalogError, Result};
use crate::types::*;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Fixed set of dishes in construction order.
#[derive(Debug, Clone)]
pub struct Catalog {
    dishes: Vec<Dish>,
    /// Position of each dish in `dishes`
    by_id: HashMap<DishId, usize>,
}

impl Catalog {
    /// Build a catalog from records, rejecting the first invalid one.
    ///
    /// An empty list is allowed and yields an empty catalog; picking from it
    /// is a defined failure handled by the selector.
    pub fn from_records(records: Vec<DishRecord>) -> Result<Self> {
        for (position, record) in records.iter().enumerate() {
            validate_record(position, record)?;
        }
        if records.is_empty() {
            warn!("Catalog built without any dishes");
        }
        Ok(Self::assign_ids(records))
    }

    /// The ten dishes shipped with the application.
    pub fn builtin() -> Self {
        Self::assign_ids(builtin::records())
    }

    fn assign_ids(records: Vec<DishRecord>) -> Self {
        let dishes: Vec<Dish> = records.into_iter().map(Dish::from_record).collect();
        let by_id = dishes
            .iter()
            .enumerate()
            .map(|(position, dish)| (dish.id(), position))
            .collect();

        debug!("Catalog built with {} dishes", dishes.len());
        Self { dishes, by_id }
    }

    /// Every dish, in construction order
    pub fn all(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    /// Get a dish by id
    pub fn get(&self, id: DishId) -> Option<&Dish> {
        self.by_id.get(&id).map(|&position| &self.dishes[position])
    }

    /// Find a dish by name, ignoring case and surrounding whitespace
    pub fn find_by_name(&self, name: &str) -> Option<&Dish> {
        let wanted = name.trim().to_lowercase();
        self.dishes
            .iter()
            .find(|dish| dish.name().to_lowercase() == wanted)
    }
}

/// Check the invariants every dish in a catalog must hold
fn validate_record(position: usize, record: &DishRecord) -> Result<()> {
    if record.name.trim().is_empty() {
        return Err(CatalogError::EmptyName { position });
    }

    if record.ingredients.is_empty() {
        return Err(CatalogError::NoIngredients {
            dish: record.name.clone(),
        });
    }

    for ingredient in &record.ingredients {
        let reason = if ingredient.name.trim().is_empty() {
            Some("empty name")
        } else if ingredient.amount_grams == 0 {
            Some("amount must be positive")
        } else {
            None
        };

        if let Some(reason) = reason {
            return Err(CatalogError::InvalidIngredient {
                dish: record.name.clone(),
                ingredient: ingredient.name.clone(),
                reason: reason.to_string(),
            });
        }
    }

    if record.preparation.trim().is_empty() {
        return Err(CatalogError::EmptyPreparation {
            dish: record.name.clone(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rice() -> DishRecord {
        DishRecord::new("Rice", vec![Ingredient::new("Rice", 100)], "Cook the rice.")
    }

    #[test]
    fn test_all_preserves_construction_order() {
        let catalog = Catalog::from_records(vec![
            rice(),
            DishRecord::new("Egg", vec![Ingredient::new("Egg", 2)], "Boil the egg."),
        ])
        .unwrap();

        let names: Vec<&str> = catalog.all().iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["Rice", "Egg"]);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_ids_are_unique_and_resolvable() {
        let catalog = Catalog::builtin();

        for dish in catalog.all() {
            assert_eq!(catalog.get(dish.id()).unwrap().name(), dish.name());
        }
        let ids: std::collections::HashSet<_> = catalog.all().iter().map(|d| d.id()).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_ids_stable_across_reads() {
        let catalog = Catalog::builtin();
        let first: Vec<DishId> = catalog.all().iter().map(|d| d.id()).collect();
        let second: Vec<DishId> = catalog.all().iter().map(|d| d.id()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_catalog_is_allowed() {
        let catalog = Catalog::from_records(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.all().is_empty());
    }

    #[test]
    fn test_rejects_empty_name() {
        let mut record = rice();
        record.name = "  ".to_string();

        let err = Catalog::from_records(vec![rice(), record]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyName { position: 1 }));
    }

    #[test]
    fn test_rejects_dish_without_ingredients() {
        let mut record = rice();
        record.ingredients.clear();

        let err = Catalog::from_records(vec![record]).unwrap_err();
        assert!(matches!(err, CatalogError::NoIngredients { .. }));
    }

    #[test]
    fn test_rejects_zero_amount() {
        let mut record = rice();
        record.ingredients.push(Ingredient::new("Salt", 0));

        let err = Catalog::from_records(vec![record]).unwrap_err();
        match err {
            CatalogError::InvalidIngredient { ingredient, .. } => assert_eq!(ingredient, "Salt"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_empty_preparation() {
        let mut record = rice();
        record.preparation = String::new();

        let err = Catalog::from_records(vec![record]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyPreparation { .. }));
    }

    #[test]
    fn test_find_by_name_ignores_case() {
        let catalog = Catalog::builtin();

        let dish = catalog.find_by_name("  pizza margherita ").unwrap();
        assert_eq!(dish.name(), "Pizza Margherita");
        assert!(catalog.find_by_name("Pizza").is_none());
    }

    #[test]
    fn test_get_unknown_id() {
        let catalog = Catalog::builtin();
        assert!(catalog.get(uuid::Uuid::new_v4()).is_none());
    }
}
