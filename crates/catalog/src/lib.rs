//! # Catalog Crate
//!
//! This crate holds the fixed set of dishes the picker chooses from.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Ingredient, DishRecord, Dish)
//! - **catalog**: The immutable, ordered Catalog and its validation
//! - **builtin**: The ten dishes shipped with the application
//! - **loader**: Loading a catalog from a JSON file
//! - **error**: Error types for catalog construction
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//!
//! let catalog = Catalog::builtin();
//! for dish in catalog.all() {
//!     println!("{} ({} ingredients)", dish.name(), dish.ingredients().len());
//! }
//!
//! // Or from a file
//! let custom = Catalog::load_from_file(Path::new("dishes.json"))?;
//! ```

// Public modules
pub mod builtin;
pub mod catalog;
pub mod error;
pub mod loader;
pub mod types;

// Re-export commonly used types for convenience
pub use builtin::BUILTIN_DISH_COUNT;
pub use catalog::Catalog;
pub use error::{CatalogError, Result};
pub use types::{Dish, DishId, DishRecord, Ingredient};
