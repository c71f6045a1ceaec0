pub mod categories;
pub mod config;
pub mod error;
pub mod fetchers;
pub mod images;
pub mod ingredients;
pub mod instructions;
pub mod model;
pub mod normalizer;

pub use self::config::{NormalizerOptions, Settings};
pub use error::NormalizeError;
pub use fetchers::MealDbClient;
pub use images::resolve_image;
pub use model::{
    CanonicalRecipe, Category, Difficulty, DietaryInfo, ImageDescriptor, ImageSource, Ingredient,
    InstructionStep, Rating, SourceRecord,
};
pub use normalizer::RecipeNormalizer;

use log::warn;

/// Fetch one random meal and normalize it
pub async fn fetch_random_recipe(
    settings: &Settings,
    owner: Option<&str>,
) -> Result<CanonicalRecipe, NormalizeError> {
    let client = MealDbClient::from_config(&settings.meal_db)?;
    let record = client.random().await?;

    RecipeNormalizer::new(settings.normalizer).normalize(&record, owner)
}

/// Look up a meal by id and normalize it
pub async fn fetch_recipe_by_id(
    settings: &Settings,
    id: &str,
    owner: Option<&str>,
) -> Result<CanonicalRecipe, NormalizeError> {
    let client = MealDbClient::from_config(&settings.meal_db)?;
    let record = client
        .lookup(id)
        .await?
        .ok_or_else(|| NormalizeError::NotFound(format!("meal id {}", id)))?;

    RecipeNormalizer::new(settings.normalizer).normalize(&record, owner)
}

/// Search meals by name and normalize every hit.
///
/// Records without a title are skipped with a warning.
pub async fn search_recipes(
    settings: &Settings,
    name: &str,
    owner: Option<&str>,
) -> Result<Vec<CanonicalRecipe>, NormalizeError> {
    let client = MealDbClient::from_config(&settings.meal_db)?;
    let records = client.search(name).await?;
    let normalizer = RecipeNormalizer::new(settings.normalizer);

    Ok(normalizer
        .normalize_all(&records, owner)
        .into_iter()
        .filter_map(|result| match result {
            Ok(recipe) => Some(recipe),
            Err(e) => {
                warn!("Skipping search result: {}", e);
                None
            }
        })
        .collect())
}
