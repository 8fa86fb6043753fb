use axum::{
    http::{header, HeaderValue},
    response::Response,
    routing::get,
    Router,
};
use anyhow::Context;
use ok_scrappers::{HttpFetcher, OnlineKhabarScraper};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer};

pub mod config;
pub mod error;
pub mod handlers;
pub mod state;

pub use config::ServerConfig;
pub use error::ApiError;
pub use state::AppState;

pub const ARTICLE_ROUTE: &str = "/api/onlinekhabar";

/// `Cache-Control` hint for successful responses only.
fn cache_control(
    cache_seconds: u64,
) -> SetResponseHeaderLayer<impl FnMut(&Response) -> Option<HeaderValue> + Clone> {
    let value = HeaderValue::from_str(&format!(
        "public, s-maxage={}, stale-while-revalidate",
        cache_seconds
    ))
    .ok();

    SetResponseHeaderLayer::overriding(header::CACHE_CONTROL, move |response: &Response| {
        if response.status().is_success() {
            value.clone()
        } else {
            None
        }
    })
}

pub fn create_app(state: AppState, cache_seconds: u64) -> Router {
    Router::new()
        .route(
            ARTICLE_ROUTE,
            get(handlers::scrape_by_query).post(handlers::scrape_by_body),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(cache_control(cache_seconds)),
        )
        .with_state(Arc::new(state))
}

pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let state = AppState::new(
        Arc::new(OnlineKhabarScraper::new()),
        Arc::new(HttpFetcher::new()?),
    );
    let app = create_app(state, config.cache_seconds);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    tracing::info!("🌐 Listening on http://{}{}", listener.local_addr()?, ARTICLE_ROUTE);

    axum::serve(listener, app).await?;
    Ok(())
}
