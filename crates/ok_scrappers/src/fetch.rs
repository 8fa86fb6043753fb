use async_trait::async_trait;
use ok_core::{Error, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

const USER_AGENT: &str = concat!("ok-scrappers/", env!("CARGO_PKG_VERSION"));

/// Retrieves the raw markup of a page.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch_html(&self, url: &str) -> Result<String>;
}

/// `reqwest`-backed fetcher. No timeout is configured, so a stalled
/// upstream keeps the caller waiting.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch_html(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;

        if let Some(content_type) = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
        {
            if !is_html_content_type(content_type) {
                return Err(Error::Scraping(format!(
                    "Expected an HTML page from {}, got {}",
                    url, content_type
                )));
            }
        }

        tracing::debug!(url, status = %response.status(), "fetched page");
        Ok(response.text().await?)
    }
}

pub(crate) fn is_html_content_type(content_type: &str) -> bool {
    content_type.to_ascii_lowercase().contains("html")
}
