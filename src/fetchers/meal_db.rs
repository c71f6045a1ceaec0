use crate::config::MealDbConfig;
use crate::model::SourceRecord;
use crate::NormalizeError;
use log::{debug, info};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Envelope used by every meal endpoint; `null` means no results
#[derive(Debug, Deserialize)]
struct MealsResponse {
    meals: Option<Vec<SourceRecord>>,
}

/// Client for the public TheMealDB API.
///
/// Every call issues exactly one GET request; there is no retry.
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, NormalizeError> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("Mozilla/5.0 (compatible; RecipeNormalize/0.1)")
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &MealDbConfig) -> Result<Self, NormalizeError> {
        Self::new(
            config.base_url.clone(),
            Some(Duration::from_secs(config.timeout)),
        )
    }

    /// Search meals by name
    pub async fn search(&self, name: &str) -> Result<Vec<SourceRecord>, NormalizeError> {
        self.get_meals("search.php", &[("s", name)]).await
    }

    /// Look up one meal by its id
    pub async fn lookup(&self, id: &str) -> Result<Option<SourceRecord>, NormalizeError> {
        let meals = self.get_meals("lookup.php", &[("i", id)]).await?;
        Ok(meals.into_iter().next())
    }

    /// Fetch a single random meal
    pub async fn random(&self) -> Result<SourceRecord, NormalizeError> {
        let meals = self.get_meals("random.php", &[]).await?;
        meals
            .into_iter()
            .next()
            .ok_or_else(|| NormalizeError::NotFound("random meal".to_string()))
    }

    async fn get_meals(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<SourceRecord>, NormalizeError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        info!("Fetching {} {:?}", url, query);

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(NormalizeError::UnexpectedStatus(status.as_u16()));
        }

        let body = response.text().await?;
        let parsed: MealsResponse = serde_json::from_str(&body)?;
        let meals = parsed.meals.unwrap_or_default();
        debug!("{} returned {} meal(s)", endpoint, meals.len());

        Ok(meals)
    }
}
