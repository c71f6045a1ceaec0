mod catalog;

pub use self::catalog::{
    catalog, image_for_keyword, image_url, DEFAULT_IMAGE_URL, IMAGE_HEIGHT, IMAGE_WIDTH,
};

use self::catalog::{CATEGORY_KEYWORDS, CUISINE_KEYWORDS, KEYWORD_IMAGES};
use crate::model::{ImageDescriptor, ImageSource};
use log::debug;

const DEFAULT_ALT: &str = "Recipe image";

/// Resolve a representative image for a recipe title.
///
/// Tries, in order: exact keyword match, substring match in catalog order
/// (key in title or title in key), cuisine fallback, coarse category words in
/// the title, and finally the global default. Always returns a descriptor.
pub fn resolve_image(title: Option<&str>, cuisine: Option<&str>) -> ImageDescriptor {
    let alt = title
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_ALT);

    match find_image_id(title, cuisine) {
        Some(image_id) => ImageDescriptor {
            url: image_url(image_id),
            alt: alt.to_string(),
            is_primary: true,
            source: ImageSource::Curated,
            width: Some(IMAGE_WIDTH),
            height: Some(IMAGE_HEIGHT),
        },
        None => default_image(alt),
    }
}

/// The global fallback descriptor
pub fn default_image(alt: &str) -> ImageDescriptor {
    ImageDescriptor {
        url: DEFAULT_IMAGE_URL.to_string(),
        alt: alt.to_string(),
        is_primary: true,
        source: ImageSource::Default,
        width: Some(IMAGE_WIDTH),
        height: Some(IMAGE_HEIGHT),
    }
}

fn find_image_id(title: Option<&str>, cuisine: Option<&str>) -> Option<&'static str> {
    // An empty title is contained in every key, so it never reaches the scan.
    let title = title.map(|t| t.trim().to_lowercase()).filter(|t| !t.is_empty())?;

    if let Some((keyword, id)) = KEYWORD_IMAGES.iter().find(|(key, _)| *key == title) {
        debug!("Exact image match for '{}': {}", title, keyword);
        return Some(*id);
    }

    if let Some((keyword, id)) = KEYWORD_IMAGES
        .iter()
        .find(|(key, _)| title.contains(key) || key.contains(title.as_str()))
    {
        debug!("Substring image match for '{}': {}", title, keyword);
        return Some(*id);
    }

    if let Some(cuisine) = cuisine.map(|c| c.trim().to_lowercase()).filter(|c| !c.is_empty()) {
        if let Some((_, keyword)) = CUISINE_KEYWORDS
            .iter()
            .find(|(fragment, _)| cuisine.contains(fragment))
        {
            debug!("Cuisine image match for '{}': {}", cuisine, keyword);
            return image_for_keyword(keyword);
        }
    }

    if let Some((_, keyword)) = CATEGORY_KEYWORDS
        .iter()
        .find(|(fragments, _)| fragments.iter().any(|f| title.contains(f)))
    {
        debug!("Category image match for '{}': {}", title, keyword);
        return image_for_keyword(keyword);
    }

    debug!("No image match for '{}', using default", title);
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curated(keyword: &str) -> String {
        image_url(image_for_keyword(keyword).unwrap())
    }

    #[test]
    fn test_exact_match() {
        let image = resolve_image(Some("Pad Thai"), None);
        assert_eq!(image.url, curated("pad thai"));
        assert_eq!(image.source, ImageSource::Curated);
        assert_eq!(image.alt, "Pad Thai");
        assert!(image.is_primary);
        assert_eq!(image.width, Some(800));
        assert_eq!(image.height, Some(600));
    }

    #[test]
    fn test_exact_match_wins_over_earlier_substring() {
        // "green curry" would otherwise hit "curry" first in catalog order
        let image = resolve_image(Some("  GREEN CURRY "), None);
        assert_eq!(image.url, curated("green curry"));
    }

    #[test]
    fn test_substring_uses_catalog_order() {
        // "curry" precedes "green curry", so the longer key loses here
        let image = resolve_image(Some("Thai Green Curry"), None);
        assert_eq!(image.url, curated("curry"));
    }

    #[test]
    fn test_title_contained_in_key() {
        let image = resolve_image(Some("carbonara"), None);
        assert_eq!(image.url, curated("spaghetti carbonara"));
    }

    #[test]
    fn test_short_titles_match_by_containment() {
        // "pizza" is the first key containing "a"
        assert_eq!(resolve_image(Some("a"), None).url, curated("pizza"));
        assert_eq!(resolve_image(Some("Rice"), None).url, curated("fried rice"));
    }

    #[test]
    fn test_pizza_ignores_cuisine() {
        for (title, cuisine) in [
            ("Pizza Express Margherita", Some("Italian")),
            ("Chicken Pizza", Some("Mexican")),
            ("Breakfast pizza", None),
            ("pizza", Some("Japanese")),
        ] {
            let image = resolve_image(Some(title), cuisine);
            assert_eq!(image.url, curated("pizza"), "{title}");
        }
    }

    #[test]
    fn test_cuisine_fallback() {
        let image = resolve_image(Some("Kedgeree Supreme"), Some("Indian"));
        assert_eq!(image.url, curated("curry"));

        let image = resolve_image(Some("Nasi Goreng Special"), Some("Vietnamese"));
        assert_eq!(image.url, curated("pho"));
    }

    #[test]
    fn test_category_keyword_fallback() {
        assert_eq!(
            resolve_image(Some("Oatmeal Cookies"), None).url,
            curated("cake")
        );
        assert_eq!(
            resolve_image(Some("Belgian Waffles"), None).url,
            curated("pancakes")
        );
        assert_eq!(
            resolve_image(Some("Baked Fish Fillets"), Some("Unknown")).url,
            curated("salmon")
        );
    }

    #[test]
    fn test_unknown_title_returns_default() {
        let image = resolve_image(Some("Kedgeree Supreme"), None);
        assert_eq!(image.url, DEFAULT_IMAGE_URL);
        assert_eq!(image.source, ImageSource::Default);
        assert!(image.is_primary);
    }

    #[test]
    fn test_missing_title_returns_default() {
        for title in [None, Some(""), Some("   ")] {
            let image = resolve_image(title, Some("Italian"));
            assert_eq!(image.url, DEFAULT_IMAGE_URL);
            assert_eq!(image.alt, "Recipe image");
        }
    }

    #[test]
    fn test_blank_cuisine_is_ignored() {
        let image = resolve_image(Some("Kedgeree Supreme"), Some("  "));
        assert_eq!(image.source, ImageSource::Default);
    }
}
