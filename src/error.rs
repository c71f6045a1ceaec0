use thiserror::Error;

/// Errors that can occur while fetching or normalizing recipes
#[derive(Error, Debug)]
pub enum NormalizeError {
    /// Failed to fetch records from the recipe API
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// The recipe API answered with a non-success status
    #[error("Unexpected HTTP status: {0}")]
    UnexpectedStatus(u16),

    /// Failed to decode the recipe API payload
    #[error("Failed to parse recipe payload: {0}")]
    ParseError(#[from] serde_json::Error),

    /// The recipe API returned no meal for the request
    #[error("No recipe found: {0}")]
    NotFound(String),

    /// The source record has no usable title
    #[error("Source record has no title")]
    MissingTitle,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
