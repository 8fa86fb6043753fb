pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{ArticleImage, ArticleMedia, ExtractedArticle, ImageDetail, ImageKind};
