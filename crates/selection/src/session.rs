//! # Picker Session
//!
//! Holds the "current selection" for a front end:
//! 1. `pick` asks the selector for a dish and remembers its id
//! 2. `ingredients` / `ingredient_table` scale the current dish
//! 3. `preparation` returns the current dish's text verbatim
//!
//! The selection starts empty and is only ever replaced by the next pick.

use crate::error::{Result, SelectionError};
use crate::scaler::{self, ScaledIngredient, Servings};
use crate::selector::RandomSelector;
use crate::traits::Selector;
use catalog::{Catalog, Dish, DishId};
use std::sync::Arc;
use tracing::info;

pub struct Session<S: Selector = RandomSelector> {
    catalog: Arc<Catalog>,
    selector: S,
    selection: Option<DishId>,
}

impl<S: Selector> Session<S> {
    pub fn new(catalog: Arc<Catalog>, selector: S) -> Self {
        Self {
            catalog,
            selector,
            selection: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Pick a new dish and make it the current selection.
    ///
    /// On error the previous selection is kept.
    pub fn pick(&mut self) -> Result<&Dish> {
        let dish = self.selector.pick(&self.catalog)?;
        self.selection = Some(dish.id());
        info!(
            selector = self.selector.name(),
            dish = dish.name(),
            "Picked dish"
        );
        Ok(dish)
    }

    /// The current selection, if any
    pub fn current(&self) -> Option<&Dish> {
        self.selection.and_then(|id| self.catalog.get(id))
    }

    fn require_current(&self) -> Result<&Dish> {
        self.current().ok_or(SelectionError::NoSelection)
    }

    /// Ingredients of the current dish for `servings` (1, 2 or 4)
    pub fn ingredients(&self, servings: u32) -> Result<Vec<ScaledIngredient>> {
        let dish = self.require_current()?;
        scaler::scale(dish.ingredients(), servings)
    }

    /// Ingredients of the current dish for every supported serving count
    pub fn ingredient_table(&self) -> Result<Vec<(Servings, Vec<ScaledIngredient>)>> {
        let dish = self.require_current()?;
        Ok(Servings::ALL
            .iter()
            .map(|&servings| (servings, scaler::scale_for(dish.ingredients(), servings)))
            .collect())
    }

    /// Preparation text of the current dish
    pub fn preparation(&self) -> Result<&str> {
        Ok(self.require_current()?.preparation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{DishRecord, Ingredient};

    fn session() -> Session {
        Session::new(Arc::new(Catalog::builtin()), RandomSelector::seeded(5))
    }

    #[test]
    fn test_no_selection_initially() {
        let session = session();

        assert!(session.current().is_none());
        assert_eq!(session.ingredients(1).unwrap_err(), SelectionError::NoSelection);
        assert_eq!(session.ingredient_table().unwrap_err(), SelectionError::NoSelection);
        assert_eq!(session.preparation().unwrap_err(), SelectionError::NoSelection);
    }

    #[test]
    fn test_pick_sets_current() {
        let mut session = session();

        let picked = session.pick().unwrap().id();
        assert_eq!(session.current().unwrap().id(), picked);
    }

    #[test]
    fn test_preparation_verbatim() {
        let mut session = session();

        let expected = session.pick().unwrap().preparation().to_string();
        assert_eq!(session.preparation().unwrap(), expected);
    }

    #[test]
    fn test_ingredient_table_has_all_servings() {
        let mut session = session();
        session.pick().unwrap();

        let table = session.ingredient_table().unwrap();
        let servings: Vec<Servings> = table.iter().map(|(s, _)| *s).collect();
        assert_eq!(servings, Servings::ALL.to_vec());

        let base = &table[0].1;
        let four = &table[2].1;
        for (one, four) in base.iter().zip(four) {
            assert_eq!(one.amount_grams * 4, four.amount_grams);
        }
    }

    #[test]
    fn test_invalid_servings_with_selection() {
        let mut session = session();
        session.pick().unwrap();

        assert_eq!(
            session.ingredients(3).unwrap_err(),
            SelectionError::InvalidServings(3)
        );
    }

    #[test]
    fn test_failed_pick_keeps_nothing_selected() {
        let empty = Arc::new(Catalog::from_records(Vec::new()).unwrap());
        let mut session = Session::new(empty, RandomSelector::seeded(1));

        assert_eq!(session.pick().unwrap_err(), SelectionError::EmptyCatalog);
        assert!(session.current().is_none());
    }

    #[test]
    fn test_selection_overwritten_by_next_pick() {
        let catalog = Catalog::from_records(vec![DishRecord::new(
            "Ei",
            vec![Ingredient::new("Eier", 2)],
            "Ei kochen.",
        )])
        .unwrap();
        let mut session = Session::new(Arc::new(catalog), RandomSelector::seeded(2));

        session.pick().unwrap();
        session.pick().unwrap();
        assert_eq!(session.current().unwrap().name(), "Ei");
        assert_eq!(session.ingredients(2).unwrap()[0].amount_grams, 4);
    }
}
