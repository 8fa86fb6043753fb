use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, RawQuery, State},
    Json,
};
use ok_core::{Error, ExtractedArticle, ImageDetail};
use serde::{Deserialize, Serialize};
use serde_json::error::Category;

use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ScrapeRequest {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Json<Self> {
        Json(Self { ok: true, data })
    }
}

/// `GET /api/onlinekhabar?url=...`: detailed images.
pub async fn scrape_by_query(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Result<Json<ApiResponse<ExtractedArticle>>, ApiError> {
    let url = query
        .as_deref()
        .and_then(first_url_param)
        .ok_or(ApiError::MissingUrl)?;
    tracing::info!(%url, "Scraping article");

    let article = state
        .scraper
        .scrape_article(state.fetcher.as_ref(), &url, ImageDetail::Detailed)
        .await
        .map_err(ApiError::ParseFailed)?;

    Ok(ApiResponse::success(article))
}

/// `POST /api/onlinekhabar` with `{"url": "..."}`: flat image URLs.
pub async fn scrape_by_body(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ApiResponse<ExtractedArticle>>, ApiError> {
    let body = body.map_err(|rejection| {
        ApiError::Internal(Error::External(anyhow::anyhow!(rejection.body_text())))
    })?;
    let request = parse_request(&body)?;
    tracing::info!(url = %request.url, "Scraping article");

    let article = state
        .scraper
        .scrape_article(state.fetcher.as_ref(), &request.url, ImageDetail::UrlsOnly)
        .await
        .map_err(ApiError::Internal)?;

    Ok(ApiResponse::success(article))
}

/// Value of the first `url` parameter, unless it is empty. Later repeats are ignored.
fn first_url_param(query: &str) -> Option<String> {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "url")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Unreadable JSON is a client error; well-formed JSON of the wrong shape is not.
fn parse_request(body: &[u8]) -> Result<ScrapeRequest, ApiError> {
    serde_json::from_slice(body).map_err(|err| match err.classify() {
        Category::Syntax | Category::Eof => ApiError::InvalidJson,
        Category::Data | Category::Io => ApiError::Internal(err.into()),
    })
}
