use crate::config::ExtractionConfig;
use crate::error::ExtractError;
use crate::fetchers::RequestFetcher;
use crate::model::Recipe;
use log::debug;

/// Process a URL to extract a recipe
///
/// This pipeline:
/// 1. Fetches HTML using RequestFetcher
/// 2. Runs the JSON-LD pipeline over the body
///
/// The document tree is built after the fetch completes, so nothing
/// non-Send is held across an await point.
pub async fn process(
    url: &str,
    fetcher: &RequestFetcher,
    options: &ExtractionConfig,
) -> Result<Recipe, ExtractError> {
    let body = fetcher.fetch(url).await?;
    debug!("Fetched {} bytes from {}", body.len(), url);

    super::html::process(&body, url, options)
}
