pub mod config;
pub mod error;
pub mod extractors;
pub mod fetchers;
pub mod model;
pub mod pipelines;
pub mod server;

use std::time::Duration;

pub use config::{BlockPolicy, ExtractionConfig, ServiceConfig};
pub use error::{CoercionError, ErrorKind, ExtractError};
pub use fetchers::RequestFetcher;
pub use model::{FieldValue, Recipe};

/// Extract the first JSON-LD recipe from raw HTML using default options.
pub fn extract_recipe(html: &str) -> Result<Recipe, ExtractError> {
    extract_recipe_with_options(html, &ExtractionConfig::default())
}

pub fn extract_recipe_with_options(
    html: &str,
    options: &ExtractionConfig,
) -> Result<Recipe, ExtractError> {
    pipelines::html::process(html, "inline", options)
}

/// Fetch a page and extract its first JSON-LD recipe.
pub async fn fetch_recipe(url: &str) -> Result<Recipe, ExtractError> {
    fetch_recipe_with_config(url, &ServiceConfig::default()).await
}

pub async fn fetch_recipe_with_config(
    url: &str,
    config: &ServiceConfig,
) -> Result<Recipe, ExtractError> {
    let fetcher = RequestFetcher::new(
        Some(Duration::from_secs(config.timeout.max(1))),
        Some(&config.user_agent),
    )?;
    pipelines::url::process(url, &fetcher, &config.extraction).await
}
