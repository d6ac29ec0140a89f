//! # Selection Crate
//!
//! Picking a random dish and scaling its ingredients.
//!
//! ## Components
//!
//! ### Selector
//! Uniform random choice over a `Catalog`, with replacement:
//! - `pick_random` works with any `rand::Rng`
//! - `RandomSelector` implements the `Selector` trait (OS-seeded or fixed seed)
//!
//! ### Scaler
//! Multiplies base gram amounts by the serving count (1, 2 or 4).
//!
//! ### Session
//! Holds the current selection between user actions.
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use selection::{RandomSelector, Session};
//! use std::sync::Arc;
//!
//! let mut session = Session::new(Arc::new(Catalog::builtin()), RandomSelector::from_os_rng());
//! let dish = session.pick()?;
//! println!("{}", dish.name());
//!
//! for ingredient in session.ingredients(2)? {
//!     println!("{ingredient}");
//! }
//! ```

pub mod error;
pub mod scaler;
pub mod selector;
pub mod session;
pub mod traits;

// Re-export main types
pub use error::{Result, SelectionError};
pub use scaler::{ScaledIngredient, Servings, scale, scale_for};
pub use selector::{RandomSelector, pick_random};
pub use session::Session;
pub use traits::Selector;
