//! Scaling ingredient amounts by serving count.
//!
//! Only 1, 2 and 4 servings are supported. Amounts are whole grams and
//! scaling is exact integer multiplication.

use crate::error::{Result, SelectionError};
use catalog::Ingredient;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Supported serving counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Servings {
    One,
    Two,
    Four,
}

impl Servings {
    /// All supported values, smallest first
    pub const ALL: [Servings; 3] = [Servings::One, Servings::Two, Servings::Four];

    pub fn multiplier(self) -> u32 {
        match self {
            Servings::One => 1,
            Servings::Two => 2,
            Servings::Four => 4,
        }
    }
}

impl TryFrom<u32> for Servings {
    type Error = SelectionError;

    fn try_from(value: u32) -> Result<Self> {
        match value {
            1 => Ok(Servings::One),
            2 => Ok(Servings::Two),
            4 => Ok(Servings::Four),
            other => Err(SelectionError::InvalidServings(other)),
        }
    }
}

impl fmt::Display for Servings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.multiplier())
    }
}

/// An ingredient amount for a given number of servings.
///
/// `u64` so that no `u32` base amount can overflow when multiplied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ScaledIngredient {
    pub name: String,
    pub amount_grams: u64,
}

impl fmt::Display for ScaledIngredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}g {}", self.amount_grams, self.name)
    }
}

/// Scale ingredients for `servings`, rejecting anything other than 1, 2 or 4.
///
/// The input is left untouched and the output keeps its order.
pub fn scale(ingredients: &[Ingredient], servings: u32) -> Result<Vec<ScaledIngredient>> {
    let servings = Servings::try_from(servings)?;
    Ok(scale_for(ingredients, servings))
}

/// Scale ingredients for an already validated serving count.
pub fn scale_for(ingredients: &[Ingredient], servings: Servings) -> Vec<ScaledIngredient> {
    let factor = u64::from(servings.multiplier());
    debug!("Scaling {} ingredients by {}", ingredients.len(), factor);

    ingredients
        .iter()
        .map(|ingredient| ScaledIngredient {
            name: ingredient.name.clone(),
            amount_grams: u64::from(ingredient.amount_grams) * factor,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bolognese() -> Vec<Ingredient> {
        vec![
            Ingredient::new("Spaghetti", 100),
            Ingredient::new("Hackfleisch", 150),
            Ingredient::new("Tomatensauce", 200),
        ]
    }

    #[test]
    fn test_scale_supported_servings() {
        let ingredients = bolognese();

        for servings in [1, 2, 4] {
            let scaled = scale(&ingredients, servings).unwrap();

            assert_eq!(scaled.len(), ingredients.len());
            for (original, scaled) in ingredients.iter().zip(&scaled) {
                assert_eq!(scaled.name, original.name);
                assert_eq!(scaled.amount_grams, u64::from(original.amount_grams * servings));
            }
        }
    }

    #[test]
    fn test_scale_rejects_unsupported_servings() {
        let ingredients = bolognese();

        for servings in [0, 3, 5, 8, u32::MAX] {
            assert_eq!(
                scale(&ingredients, servings).unwrap_err(),
                SelectionError::InvalidServings(servings)
            );
        }
    }

    #[test]
    fn test_scale_is_idempotent() {
        let ingredients = bolognese();
        assert_eq!(scale(&ingredients, 4).unwrap(), scale(&ingredients, 4).unwrap());
        assert_eq!(ingredients, bolognese());
    }

    #[test]
    fn test_scale_large_amount_does_not_overflow() {
        let scaled = scale_for(&[Ingredient::new("Mehl", u32::MAX)], Servings::Four);
        assert_eq!(scaled[0].amount_grams, u64::from(u32::MAX) * 4);
    }

    #[test]
    fn test_scaled_ingredient_display() {
        let scaled = scale(&[Ingredient::new("Eier", 2)], 4).unwrap();
        assert_eq!(scaled[0].to_string(), "8g Eier");
    }

    #[test]
    fn test_servings_conversion() {
        assert_eq!(Servings::try_from(2), Ok(Servings::Two));
        let multipliers: Vec<u32> = Servings::ALL.iter().map(|s| s.multiplier()).collect();
        assert_eq!(multipliers, vec![1, 2, 4]);
    }
}
