use std::sync::Arc;

use ok_scrappers::{Fetcher, Scraper};

pub struct AppState {
    pub scraper: Arc<dyn Scraper>,
    pub fetcher: Arc<dyn Fetcher>,
}

impl AppState {
    pub fn new(scraper: Arc<dyn Scraper>, fetcher: Arc<dyn Fetcher>) -> Self {
        Self { scraper, fetcher }
    }
}
