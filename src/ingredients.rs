use crate::model::{Ingredient, SourceRecord};

/// Number of indexed ingredient/measure slots in a source record
pub const INGREDIENT_SLOTS: usize = 20;

const DEFAULT_AMOUNT: &str = "1";

/// Extract ingredients from the `strIngredient<i>` / `strMeasure<i>` slots.
///
/// Slots with a blank or missing name are skipped. The trimmed measure is used
/// for both amount and unit, with amount defaulting to "1" and unit to "".
pub fn extract_ingredients(record: &SourceRecord) -> Vec<Ingredient> {
    (1..=INGREDIENT_SLOTS)
        .filter_map(|i| {
            let name = record.text(&format!("strIngredient{}", i))?;
            let measure = record.text(&format!("strMeasure{}", i));

            Some(Ingredient {
                name: name.to_string(),
                amount: measure.unwrap_or(DEFAULT_AMOUNT).to_string(),
                unit: measure.unwrap_or_default().to_string(),
            })
        })
        .collect()
}
