use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Top-level settings for fetching and normalizing recipes
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    /// Recipe API client configuration
    #[serde(default)]
    pub meal_db: MealDbConfig,
    /// Defaults applied to every normalized recipe
    #[serde(default)]
    pub normalizer: NormalizerOptions,
}

/// Configuration for the public recipe API
#[derive(Debug, Deserialize, Clone)]
pub struct MealDbConfig {
    /// Base URL including the API key path segment
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for MealDbConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
        }
    }
}

/// Values the source records never carry
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct NormalizerOptions {
    /// Servings assigned to every recipe
    #[serde(default = "default_servings")]
    pub default_servings: u32,
    /// Whether normalized recipes are publicly visible
    #[serde(default = "default_public")]
    pub public: bool,
}

impl Default for NormalizerOptions {
    fn default() -> Self {
        Self {
            default_servings: default_servings(),
            public: default_public(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://www.themealdb.com/api/json/v1/1".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_servings() -> u32 {
    4
}

fn default_public() -> bool {
    true
}

impl Settings {
    /// Load settings from file and environment variables
    ///
    /// Settings are loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_NORMALIZE__ prefix
    /// 2. recipe-normalize.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_NORMALIZE__MEAL_DB__BASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load settings from file and environment variables
///
/// See [`Settings::load`] for the precedence rules.
pub fn load_config() -> Result<Settings, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("recipe-normalize").required(false))
        // Use double underscore for nested: RECIPE_NORMALIZE__NORMALIZER__PUBLIC
        .add_source(
            Environment::with_prefix("RECIPE_NORMALIZE")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_default_values() {
        assert_eq!(default_base_url(), "https://www.themealdb.com/api/json/v1/1");
        assert_eq!(default_timeout(), 30);
        assert_eq!(default_servings(), 4);
        assert!(default_public());
    }

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.meal_db.timeout, 30);
        assert_eq!(settings.normalizer.default_servings, 4);
        assert!(settings.normalizer.public);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = Config::builder()
            .add_source(File::from_str(
                "[normalizer]\ndefault_servings = 6\n",
                FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.normalizer.default_servings, 6);
        assert!(settings.normalizer.public);
        assert_eq!(settings.meal_db.base_url, default_base_url());
    }

    #[test]
    fn test_load_config_without_file() {
        // No file and no RECIPE_NORMALIZE__ variables: everything defaults
        let result = load_config();
        assert!(result.is_ok());
    }
}
