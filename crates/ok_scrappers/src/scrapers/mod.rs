use async_trait::async_trait;
use ok_core::{ExtractedArticle, ImageDetail, Result};

use crate::fetch::Fetcher;

pub mod nepal;
pub use nepal::onlinekhabar::OnlineKhabarScraper;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceMetadata {
    pub name: &'static str,
    pub emoji: &'static str,
    pub region: &'static str,
}

#[async_trait]
pub trait Scraper: Send + Sync {
    /// Returns the metadata of the news source
    fn source_metadata(&self) -> SourceMetadata;

    /// Maps a parsed article page to its fields. Never fails: missing
    /// elements yield empty values.
    fn extract(&self, html: &str, detail: ImageDetail) -> ExtractedArticle;

    /// Fetches a single article page and extracts it
    async fn scrape_article(
        &self,
        fetcher: &dyn Fetcher,
        url: &str,
        detail: ImageDetail,
    ) -> Result<ExtractedArticle>;

    /// Returns a list of CLI shorthand names for this scraper
    fn cli_names(&self) -> Vec<&str> {
        vec![]
    }
}

/// Common utilities for scrapers
pub(crate) mod utils {
    use super::*;
    use scraper::{ElementRef, Html, Selector};

    pub fn parse_url(url: &str) -> Result<url::Url> {
        Ok(url::Url::parse(url)?)
    }

    /// Untrimmed text of the first match.
    pub fn first_text(document: &Html, selector: &Selector) -> String {
        document
            .select(selector)
            .next()
            .map(|el| el.text().collect::<String>())
            .unwrap_or_default()
    }

    /// Text of every match concatenated, then trimmed.
    pub fn joined_text(document: &Html, selector: &Selector) -> String {
        document
            .select(selector)
            .flat_map(|el| el.text())
            .collect::<String>()
            .trim()
            .to_string()
    }

    /// Trimmed text of each match, in document order.
    pub fn texts(document: &Html, selector: &Selector) -> Vec<String> {
        document
            .select(selector)
            .map(|el| el.text().collect::<String>().trim().to_string())
            .collect()
    }

    /// `attr` of the first match, if both exist.
    pub fn first_attr(document: &Html, selector: &Selector, attr: &str) -> Option<String> {
        document
            .select(selector)
            .next()
            .and_then(|el| el.value().attr(attr))
            .map(str::to_string)
    }

    /// `attr` of every match; missing attributes become empty strings.
    pub fn attrs(document: &Html, selector: &Selector, attr: &str) -> Vec<String> {
        document
            .select(selector)
            .map(|el| el.value().attr(attr).unwrap_or_default().to_string())
            .collect()
    }

    /// Same as [`joined_text`], scoped to the descendants of `element`.
    pub fn joined_text_within(element: ElementRef<'_>, selector: &Selector) -> String {
        element
            .select(selector)
            .flat_map(|el| el.text())
            .collect::<String>()
            .trim()
            .to_string()
    }
}
