pub mod onlinekhabar;

pub use onlinekhabar::OnlineKhabarScraper;

pub(crate) const REGION: &str = "Nepal";
