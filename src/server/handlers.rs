use super::AppState;
use crate::error::ExtractError;
use crate::model::Recipe;
use crate::pipelines;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::{error, warn};
use reqwest::Url;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ExtractParams {
    pub url: Option<String>,
}

/// `GET /?url=...` - fetch the page and return its first recipe as JSON.
pub async fn extract(
    State(state): State<AppState>,
    Query(params): Query<ExtractParams>,
) -> Result<Json<Recipe>, ExtractError> {
    let url = parse_target_url(params.url.as_deref())?;
    let recipe = pipelines::url::process(url.as_str(), &state.fetcher, &state.options).await?;
    Ok(Json(recipe))
}

/// Any method other than GET on the extraction route.
pub async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

/// Validate the `url` query parameter.
pub fn parse_target_url(raw: Option<&str>) -> Result<Url, ExtractError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ExtractError::InvalidRequest("Missing url parameter".to_string()))?;

    let url = Url::parse(raw)
        .map_err(|e| ExtractError::InvalidRequest(format!("Invalid url parameter: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(ExtractError::InvalidRequest(format!(
            "Unsupported url scheme: {scheme}"
        ))),
    }
}

impl IntoResponse for ExtractError {
    fn into_response(self) -> Response {
        let status = if self.is_user_facing() {
            warn!("Request failed: {}", self);
            StatusCode::BAD_REQUEST
        } else {
            error!("Request failed: {}", self);
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, self.to_string()).into_response()
    }
}
