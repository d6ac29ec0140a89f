//! The built-in dishes.
//!
//! Amounts are grams for one serving.

use crate::types::{DishRecord, Ingredient};

/// Number of dishes shipped with the application
pub const BUILTIN_DISH_COUNT: usize = 10;

fn dish(name: &str, ingredients: &[(&str, u32)], preparation: &str) -> DishRecord {
    DishRecord::new(
        name,
        ingredients
            .iter()
            .map(|&(name, amount)| Ingredient::new(name, amount))
            .collect(),
        preparation,
    )
}

pub(crate) fn records() -> Vec<DishRecord> {
    vec![
        dish(
            "Spaghetti Bolognese",
            &[("Spaghetti", 100), ("Hackfleisch", 150), ("Tomatensauce", 200)],
            "1. Nudeln kochen. 2. Hackfleisch anbraten. 3. Tomatensauce dazugeben. 4. Alles mischen und servieren.",
        ),
        dish(
            "Pizza Margherita",
            &[("Mehl", 200), ("Tomatensauce", 100), ("Mozzarella", 150)],
            "1. Teig zubereiten. 2. Tomatensauce darauf verteilen. 3. Mit Mozzarella belegen. 4. Backen und genießen.",
        ),
        dish(
            "Sushi",
            &[("Sushireis", 100), ("Lachs", 100), ("Noriblätter", 2)],
            "1. Reis kochen. 2. Auf Noriblatt verteilen. 3. Mit Lachs belegen. 4. Rollen und schneiden.",
        ),
        dish(
            "Lasagne",
            &[("Lasagneplatten", 200), ("Hackfleisch", 150), ("Tomatensauce", 200)],
            "1. Hackfleisch anbraten. 2. Tomatensauce dazugeben. 3. In eine Auflaufform mit Lasagneplatten schichten. 4. Backen und genießen.",
        ),
        dish(
            "Bratwurst mit Sauerkraut",
            &[("Bratwurst", 200), ("Sauerkraut", 150), ("Kartoffeln", 200)],
            "1. Bratwurst braten. 2. Sauerkraut erwärmen. 3. Mit Kartoffeln servieren.",
        ),
        dish(
            "Eisbein mit Erbspüree",
            &[("Eisbein", 500), ("Erbsen", 200), ("Kartoffeln", 200)],
            "1. Eisbein kochen. 2. Erbsen pürieren. 3. Mit Kartoffeln servieren.",
        ),
        dish(
            "Schweinebraten mit Knödeln",
            &[("Schweinefleisch", 500), ("Kartoffelknödel", 200), ("Sauerkraut", 150)],
            "1. Schweinefleisch braten. 2. Knödel zubereiten. 3. Mit Sauerkraut servieren.",
        ),
        dish(
            "Leberkäse mit Spiegelei",
            &[("Leberkäse", 200), ("Eier", 2), ("Kartoffelsalat", 200)],
            "1. Leberkäse braten. 2. Spiegelei zubereiten. 3. Mit Kartoffelsalat servieren.",
        ),
        dish(
            "Kartoffelsuppe",
            &[("Kartoffeln", 500), ("Karotten", 100), ("Zwiebeln", 100)],
            "1. Gemüse würfeln. 2. Kochen und pürieren.",
        ),
        dish(
            "Schupfnudeln mit Sauerkraut",
            &[("Schupfnudeln", 300), ("Sauerkraut", 150), ("Speck", 100)],
            "1. Schupfnudeln anbraten. 2. Mit Sauerkraut und Speck servieren.",
        ),
    ]
}
