use crate::categories::{
    compute_dietary_info, estimate_difficulty, estimate_times, map_category, map_cuisine,
};
use crate::config::NormalizerOptions;
use crate::images::resolve_image;
use crate::ingredients::extract_ingredients;
use crate::instructions::segment;
use crate::model::{CanonicalRecipe, ImageDescriptor, ImageSource, Rating, SourceRecord};
use crate::NormalizeError;
use log::debug;
use std::collections::BTreeSet;

/// Builds [`CanonicalRecipe`]s from upstream source records
#[derive(Debug, Clone, Copy, Default)]
pub struct RecipeNormalizer {
    options: NormalizerOptions,
}

impl RecipeNormalizer {
    pub fn new(options: NormalizerOptions) -> Self {
        Self { options }
    }

    /// Normalize one source record.
    ///
    /// `owner` is stored as the recipe author. Only a missing title is an
    /// error; every other gap is filled with a default.
    ///
    /// # Example
    /// ```
    /// use recipe_normalize::{RecipeNormalizer, SourceRecord};
    ///
    /// let record: SourceRecord = [
    ///     ("strMeal", "Margherita Pizza"),
    ///     ("strIngredient1", "Mozzarella"),
    ///     ("strMeasure1", "200g"),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// let recipe = RecipeNormalizer::default().normalize(&record, None).unwrap();
    /// assert_eq!(recipe.ingredients.len(), 1);
    /// assert_eq!(recipe.instructions.len(), 1);
    /// ```
    pub fn normalize(
        &self,
        record: &SourceRecord,
        owner: Option<&str>,
    ) -> Result<CanonicalRecipe, NormalizeError> {
        let title = record.text("strMeal").ok_or(NormalizeError::MissingTitle)?;

        let ingredients = extract_ingredients(record);
        let instructions = segment(record.get("strInstructions"), title);

        let category = map_category(record.text("strCategory"));
        let cuisine = map_cuisine(record.get("strArea"));
        let difficulty = estimate_difficulty(ingredients.len(), instructions.len());
        let times = estimate_times(ingredients.len(), instructions.len());
        let dietary_info = compute_dietary_info(&ingredients);

        let image = source_image(record, title)
            .unwrap_or_else(|| resolve_image(Some(title), Some(cuisine.as_str())));
        debug!(
            "Normalized '{}': {} ingredient(s), {} step(s), image from {:?}",
            title,
            ingredients.len(),
            instructions.len(),
            image.source
        );

        Ok(CanonicalRecipe {
            title: title.to_string(),
            description: describe(title, &cuisine, record.text("strCategory")),
            ingredients,
            instructions,
            prep_time: times.prep_time,
            cook_time: times.cook_time,
            servings: self.options.default_servings,
            difficulty,
            cuisine,
            category,
            tags: parse_tags(record.get("strTags")),
            dietary_info,
            images: vec![image],
            author: owner.map(String::from),
            is_public: self.options.public,
            rating: Rating::default(),
            views: 0,
            external_id: record.text("idMeal").map(String::from),
            source_url: record.text("strSource").map(String::from),
            video_url: record.text("strYoutube").map(String::from),
        })
    }

    /// Normalize a batch, one result per record in input order
    pub fn normalize_all(
        &self,
        records: &[SourceRecord],
        owner: Option<&str>,
    ) -> Vec<Result<CanonicalRecipe, NormalizeError>> {
        records
            .iter()
            .map(|record| self.normalize(record, owner))
            .collect()
    }
}

/// The upstream photo, when the record carries an http(s) URL
fn source_image(record: &SourceRecord, title: &str) -> Option<ImageDescriptor> {
    let url = record
        .text("strMealThumb")
        .filter(|url| url.starts_with("https://") || url.starts_with("http://"))?;

    Some(ImageDescriptor {
        url: url.to_string(),
        alt: title.to_string(),
        is_primary: true,
        source: ImageSource::Source,
        width: None,
        height: None,
    })
}

fn describe(title: &str, cuisine: &str, source_category: Option<&str>) -> String {
    match source_category {
        Some(category) => format!(
            "Classic {} {} dish: {}.",
            cuisine,
            category.to_lowercase(),
            title
        ),
        None => format!("Classic {} dish: {}.", cuisine, title),
    }
}

fn parse_tags(raw: Option<&str>) -> BTreeSet<String> {
    raw.map(|tags| {
        tags.split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(String::from)
            .collect()
    })
    .unwrap_or_default()
}
