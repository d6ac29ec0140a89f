//! Core traits for dish selection.
//!
//! The `Selector` trait lets a `Session` pick dishes without knowing where
//! its randomness comes from (OS-seeded in the CLI, fixed seed in tests).

use crate::error::Result;
use catalog::{Catalog, Dish};

/// Picks one dish out of a catalog.
///
/// ## Design Note
/// - `&mut self` because random sources advance their internal state
/// - The returned dish borrows from the catalog, never from the selector
pub trait Selector {
    /// Returns the name of this selector (for logging/debugging)
    fn name(&self) -> &str;

    /// Pick a dish from `catalog`.
    ///
    /// # Returns
    /// * `Ok(&Dish)` - A dish from the catalog
    /// * `Err(SelectionError::EmptyCatalog)` - If the catalog has no dishes
    fn pick<'a>(&mut self, catalog: &'a Catalog) -> Result<&'a Dish>;
}
