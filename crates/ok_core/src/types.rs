use serde::{Deserialize, Serialize};

/// How much detail to keep about inline images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageDetail {
    /// Paragraph images and figures, with captions.
    #[default]
    Detailed,
    /// Bare `src` values of paragraph images only.
    UrlsOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageKind {
    Paragraph,
    Figure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleImage {
    pub src: String,
    pub caption: Option<String>,
    #[serde(rename = "type")]
    pub kind: ImageKind,
}

impl ArticleImage {
    pub fn paragraph(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            caption: None,
            kind: ImageKind::Paragraph,
        }
    }

    pub fn figure(src: impl Into<String>, caption: Option<String>) -> Self {
        Self {
            src: src.into(),
            caption,
            kind: ImageKind::Figure,
        }
    }
}

/// Inline images, serialized under `images` or `imageUrls` depending on the variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArticleMedia {
    #[serde(rename = "images")]
    Detailed(Vec<ArticleImage>),
    #[serde(rename = "imageUrls")]
    UrlsOnly(Vec<String>),
}

/// Snapshot of one article page at fetch time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedArticle {
    pub title: String,
    pub author: String,
    #[serde(rename = "dateTime")]
    pub date_time: String,
    pub ai_summaries: Vec<String>,
    pub excerpt: String,
    #[serde(rename = "newsDescription")]
    pub news_description: Vec<String>,
    #[serde(rename = "postTags")]
    pub post_tags: Vec<String>,
    #[serde(rename = "postThumbnail", default, skip_serializing_if = "Option::is_none")]
    pub post_thumbnail: Option<String>,
    #[serde(flatten)]
    pub media: ArticleMedia,
}
