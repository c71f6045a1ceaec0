//! Maps upstream category/area vocabulary onto the internal schema and derives
//! the size-based estimates (difficulty, prep and cook time).
//!
//! Source-side tables are case-sensitive: "dessert" is not "Dessert".

use crate::model::{Category, Difficulty, DietaryInfo, Ingredient};

pub const DEFAULT_CUISINE: &str = "International";

const MEAT_KEYWORDS: &[&str] = &[
    "chicken", "beef", "pork", "fish", "meat", "lamb", "turkey", "bacon", "sausage",
];

const GLUTEN_KEYWORDS: &[&str] = &["flour", "wheat", "bread", "pasta"];

/// Map an upstream category label, defaulting to main course
pub fn map_category(source: Option<&str>) -> Category {
    match source {
        Some("Dessert") => Category::Dessert,
        Some("Breakfast") => Category::Breakfast,
        Some("Starter") | Some("Side") => Category::Appetizer,
        // Beef, Chicken, Goat, Lamb, Miscellaneous, Pasta, Pork, Seafood, Vegan, Vegetarian
        _ => Category::MainCourse,
    }
}

/// Map an upstream area label to a cuisine name.
///
/// Unknown non-blank labels pass through trimmed.
pub fn map_cuisine(source: Option<&str>) -> String {
    let cuisine = match source {
        Some("American") => "American",
        Some("British") => "British",
        Some("Canadian") => "Canadian",
        Some("Chinese") => "Chinese",
        Some("Croatian") => "Croatian",
        Some("Dutch") => "Dutch",
        Some("Egyptian") => "Egyptian",
        Some("Filipino") => "Filipino",
        Some("French") => "French",
        Some("Greek") => "Greek",
        Some("Indian") => "Indian",
        Some("Irish") => "Irish",
        Some("Italian") => "Italian",
        Some("Jamaican") => "Jamaican",
        Some("Japanese") => "Japanese",
        Some("Kenyan") => "Kenyan",
        Some("Malaysian") => "Malaysian",
        Some("Mexican") => "Mexican",
        Some("Moroccan") => "Moroccan",
        Some("Polish") => "Polish",
        Some("Portuguese") => "Portuguese",
        Some("Russian") => "Russian",
        Some("Spanish") => "Spanish",
        Some("Thai") => "Thai",
        Some("Tunisian") => "Tunisian",
        Some("Turkish") => "Turkish",
        Some("Ukrainian") => "Ukrainian",
        Some("Vietnamese") => "Vietnamese",
        Some("Unknown") => DEFAULT_CUISINE,
        Some(other) if !other.trim().is_empty() => other.trim(),
        _ => DEFAULT_CUISINE,
    };
    cuisine.to_string()
}

pub fn estimate_difficulty(ingredient_count: usize, step_count: usize) -> Difficulty {
    if ingredient_count > 10 || step_count > 8 {
        Difficulty::Hard
    } else if ingredient_count > 6 || step_count > 5 {
        Difficulty::Medium
    } else {
        Difficulty::Easy
    }
}

/// Synthetic prep and cook time in minutes.
///
/// These scale with recipe size and are not measured values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeEstimate {
    pub prep_time: u32,
    pub cook_time: u32,
}

pub fn estimate_times(ingredient_count: usize, step_count: usize) -> TimeEstimate {
    TimeEstimate {
        prep_time: (ingredient_count as u32).saturating_mul(2).max(10),
        cook_time: (step_count as u32).saturating_mul(5).max(15),
    }
}

/// Keyword-based dietary flags.
///
/// `vegan` is always false: vegan detection is not implemented.
pub fn compute_dietary_info(ingredients: &[Ingredient]) -> DietaryInfo {
    let names: Vec<String> = ingredients.iter().map(|i| i.name.to_lowercase()).collect();
    let mentions_any = |keywords: &[&str]| {
        names
            .iter()
            .any(|name| keywords.iter().any(|k| name.contains(k)))
    };

    DietaryInfo {
        vegetarian: !mentions_any(MEAT_KEYWORDS),
        vegan: false,
        gluten_free: !mentions_any(GLUTEN_KEYWORDS),
    }
}
