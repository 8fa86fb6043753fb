use async_trait::async_trait;
use lazy_static::lazy_static;
use ok_core::{ArticleImage, ArticleMedia, ExtractedArticle, ImageDetail, Result};
use scraper::{Html, Selector};

use super::REGION;
use crate::fetch::Fetcher;
use crate::logging::Logger;
use crate::scrapers::{utils, Scraper, SourceMetadata};

lazy_static! {
    static ref TITLE: Selector = Selector::parse("h1").unwrap();
    static ref AI_SUMMARIES: Selector = Selector::parse(".ai_summary_block_list li").unwrap();
    static ref AUTHOR: Selector = Selector::parse(".ok-news-author .author-name").unwrap();
    static ref POST_HOUR: Selector = Selector::parse(".ok-news-post-hour span").unwrap();
    static ref EXCERPT: Selector = Selector::parse(".sgexcerpt p").unwrap();
    static ref DESCRIPTION: Selector =
        Selector::parse(r#"p[style*="text-align: justify"], .rich-para"#).unwrap();
    static ref POST_TAGS: Selector = Selector::parse(".ok-post-tags a").unwrap();
    static ref THUMBNAIL: Selector = Selector::parse(".post-thumbnail img").unwrap();
    static ref PARAGRAPH_IMAGES: Selector =
        Selector::parse(r#"p[style*="text-align: justify"] img"#).unwrap();
    static ref FIGURE: Selector = Selector::parse("figure").unwrap();
    static ref IMG: Selector = Selector::parse("img").unwrap();
    static ref FIGCAPTION: Selector = Selector::parse("figcaption").unwrap();
}

#[derive(Debug, Clone)]
pub struct OnlineKhabarScraper {
    logger: Logger,
}

impl OnlineKhabarScraper {
    pub fn new() -> Self {
        Self {
            logger: Logger::new().with_prefix("[onlinekhabar]"),
        }
    }

    fn images(document: &Html) -> Vec<ArticleImage> {
        let mut images: Vec<ArticleImage> = utils::attrs(document, &PARAGRAPH_IMAGES, "src")
            .into_iter()
            .map(ArticleImage::paragraph)
            .collect();

        for figure in document.select(&FIGURE) {
            let src = figure
                .select(&IMG)
                .next()
                .and_then(|img| img.value().attr("src"))
                .unwrap_or_default();
            if src.is_empty() {
                continue;
            }

            let caption = utils::joined_text_within(figure, &FIGCAPTION);
            let caption = (!caption.is_empty()).then_some(caption);
            images.push(ArticleImage::figure(src, caption));
        }

        images
    }
}

impl Default for OnlineKhabarScraper {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Scraper for OnlineKhabarScraper {
    fn source_metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: "OnlineKhabar",
            emoji: "📰",
            region: REGION,
        }
    }

    fn cli_names(&self) -> Vec<&str> {
        vec!["onlinekhabar"]
    }

    fn extract(&self, html: &str, detail: ImageDetail) -> ExtractedArticle {
        let document = Html::parse_document(html);

        let media = match detail {
            ImageDetail::Detailed => ArticleMedia::Detailed(Self::images(&document)),
            ImageDetail::UrlsOnly => {
                ArticleMedia::UrlsOnly(utils::attrs(&document, &PARAGRAPH_IMAGES, "src"))
            }
        };

        ExtractedArticle {
            title: utils::first_text(&document, &TITLE),
            author: utils::joined_text(&document, &AUTHOR),
            date_time: utils::joined_text(&document, &POST_HOUR),
            ai_summaries: utils::texts(&document, &AI_SUMMARIES),
            excerpt: utils::joined_text(&document, &EXCERPT),
            news_description: utils::texts(&document, &DESCRIPTION),
            post_tags: utils::texts(&document, &POST_TAGS),
            post_thumbnail: utils::first_attr(&document, &THUMBNAIL, "src"),
            media,
        }
    }

    async fn scrape_article(
        &self,
        fetcher: &dyn Fetcher,
        url: &str,
        detail: ImageDetail,
    ) -> Result<ExtractedArticle> {
        let url = utils::parse_url(url)?;
        self.logger.info(&format!("Fetching {}", url));
        let html = fetcher.fetch_html(url.as_str()).await?;

        let article = self.extract(&html, detail);
        self.logger.debug(&format!(
            "Extracted \"{}\" with {} paragraphs",
            article.title.trim(),
            article.news_description.len()
        ));
        Ok(article)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ok_core::{Error, ImageKind};

    const ARTICLE: &str = r#"
        <html><body>
          <h1>Example Title</h1>
          <h1>Second heading</h1>
          <div class="ai_summary_block_list"><ul>
            <li> First point </li>
            <li>Second point</li>
          </ul></div>
          <div class="ok-news-author"><span class="author-name"> Jane Doe </span></div>
          <div class="ok-news-post-hour"><span> 2082 Asar 5 </span></div>
          <div class="post-thumbnail"><img src="thumb.jpg"></div>
          <div class="sgexcerpt"><p> Short excerpt </p></div>
          <p style="text-align: justify;"> A </p>
          <div class="rich-para">Rich</div>
          <p style="text-align: justify;">B<img src="inline.jpg"></p>
          <p style="text-align: justify;">A</p>
          <figure><img src="x.jpg"><figcaption> Caption text </figcaption></figure>
          <figure><figcaption>No image here</figcaption></figure>
          <figure><img src="y.jpg"></figure>
          <div class="ok-post-tags"><a href="/t/1"> Politics </a><a href="/t/2">Nepal</a></div>
        </body></html>
    "#;

    struct StaticFetcher(&'static str);

    #[async_trait]
    impl Fetcher for StaticFetcher {
        async fn fetch_html(&self, _url: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn test_extracts_text_fields() {
        let article = OnlineKhabarScraper::new().extract(ARTICLE, ImageDetail::Detailed);

        assert_eq!(article.title, "Example Title");
        assert_eq!(article.author, "Jane Doe");
        assert_eq!(article.date_time, "2082 Asar 5");
        assert_eq!(article.ai_summaries, vec!["First point", "Second point"]);
        assert_eq!(article.excerpt, "Short excerpt");
        assert_eq!(article.news_description, vec!["A", "Rich", "B", "A"]);
        assert_eq!(article.post_tags, vec!["Politics", "Nepal"]);
        assert_eq!(article.post_thumbnail.as_deref(), Some("thumb.jpg"));
    }

    #[test]
    fn test_detailed_images_list_paragraphs_before_figures() {
        let article = OnlineKhabarScraper::new().extract(ARTICLE, ImageDetail::Detailed);

        let ArticleMedia::Detailed(images) = article.media else {
            panic!("expected detailed images");
        };
        assert_eq!(
            images,
            vec![
                ArticleImage::paragraph("inline.jpg"),
                ArticleImage::figure("x.jpg", Some("Caption text".to_string())),
                ArticleImage::figure("y.jpg", None),
            ]
        );
        assert_eq!(images[1].kind, ImageKind::Figure);
    }

    #[test]
    fn test_urls_only_skips_figures() {
        let article = OnlineKhabarScraper::new().extract(ARTICLE, ImageDetail::UrlsOnly);
        assert_eq!(
            article.media,
            ArticleMedia::UrlsOnly(vec!["inline.jpg".to_string()])
        );
    }

    #[test]
    fn test_figure_without_image_contributes_nothing() {
        let html = r#"<figure><figcaption>Caption text</figcaption></figure>"#;
        let article = OnlineKhabarScraper::new().extract(html, ImageDetail::Detailed);
        assert_eq!(article.media, ArticleMedia::Detailed(vec![]));
    }

    #[test]
    fn test_figure_uses_only_its_first_image() {
        let html = r#"
            <figure><img alt="lazy"><img src="later.jpg"><figcaption>Skipped</figcaption></figure>
            <figure><img src="first.jpg"><img src="second.jpg"></figure>
        "#;
        let article = OnlineKhabarScraper::new().extract(html, ImageDetail::Detailed);
        assert_eq!(
            article.media,
            ArticleMedia::Detailed(vec![ArticleImage::figure("first.jpg", None)])
        );
    }

    #[test]
    fn test_empty_document_degrades_to_defaults() {
        let article = OnlineKhabarScraper::new().extract("<html></html>", ImageDetail::Detailed);

        assert_eq!(article.title, "");
        assert_eq!(article.author, "");
        assert_eq!(article.date_time, "");
        assert_eq!(article.excerpt, "");
        assert!(article.ai_summaries.is_empty());
        assert!(article.news_description.is_empty());
        assert!(article.post_tags.is_empty());
        assert_eq!(article.post_thumbnail, None);
        assert_eq!(article.media, ArticleMedia::Detailed(vec![]));

        let value = serde_json::to_value(&article).unwrap();
        assert!(value.get("postThumbnail").is_none());
        assert_eq!(value["author"], "");
    }

    #[test]
    fn test_title_is_not_trimmed() {
        let article =
            OnlineKhabarScraper::new().extract("<h1>  Spaced </h1>", ImageDetail::Detailed);
        assert_eq!(article.title, "  Spaced ");
    }

    #[test]
    fn test_unjustified_paragraphs_are_ignored() {
        let html = r#"
            <p style="text-align: center;">centered</p>
            <p style="text-align:justify">no space</p>
            <p>plain</p>
        "#;
        let article = OnlineKhabarScraper::new().extract(html, ImageDetail::Detailed);
        assert!(article.news_description.is_empty());
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let scraper = OnlineKhabarScraper::new();
        let render = || serde_json::to_string(&scraper.extract(ARTICLE, ImageDetail::Detailed));
        let first = render().unwrap();
        let second = render().unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_scrape_article_uses_fetcher() {
        let scraper = OnlineKhabarScraper::new();
        let fetcher = StaticFetcher(ARTICLE);

        let article = scraper
            .scrape_article(
                &fetcher,
                "https://www.onlinekhabar.com/2025/01/1",
                ImageDetail::UrlsOnly,
            )
            .await
            .unwrap();
        assert_eq!(article.title, "Example Title");
    }

    #[tokio::test]
    async fn test_scrape_article_rejects_invalid_url() {
        let scraper = OnlineKhabarScraper::new();
        let result = scraper
            .scrape_article(&StaticFetcher(ARTICLE), "not a url", ImageDetail::Detailed)
            .await;
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }
}
