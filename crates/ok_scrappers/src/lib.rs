pub mod cli;
pub mod fetch;
pub mod logging;
pub mod scrapers;

pub use cli::{handle_command, ScraperArgs, ScraperCommands};
pub use fetch::{Fetcher, HttpFetcher};
pub use logging::{init_logging, Logger};
pub use scrapers::{OnlineKhabarScraper, Scraper, SourceMetadata};
