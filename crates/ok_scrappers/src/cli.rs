use std::path::PathBuf;

use clap::{Args, Subcommand};
use ok_core::{ExtractedArticle, ImageDetail, Result};

use crate::fetch::HttpFetcher;
use crate::scrapers::{OnlineKhabarScraper, Scraper};

#[derive(Args, Debug)]
pub struct ScraperArgs {
    #[command(subcommand)]
    pub command: ScraperCommands,
}

#[derive(Subcommand, Debug)]
pub enum ScraperCommands {
    /// Fetch an article page and print the extracted fields as JSON
    Url {
        url: String,
        /// Emit bare paragraph image URLs instead of detailed images
        #[arg(long)]
        urls_only: bool,
    },
    /// Extract from a saved HTML file instead of fetching
    File {
        path: PathBuf,
        #[arg(long)]
        urls_only: bool,
    },
    /// List available scrapers
    List,
}

fn image_detail(urls_only: bool) -> ImageDetail {
    if urls_only {
        ImageDetail::UrlsOnly
    } else {
        ImageDetail::Detailed
    }
}

fn print_article(article: &ExtractedArticle) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(article)?);
    Ok(())
}

pub async fn handle_command(args: ScraperArgs) -> Result<()> {
    let scraper = OnlineKhabarScraper::new();

    match args.command {
        ScraperCommands::Url { url, urls_only } => {
            let fetcher = HttpFetcher::new()?;
            let article = scraper
                .scrape_article(&fetcher, &url, image_detail(urls_only))
                .await?;
            print_article(&article)?;
        }
        ScraperCommands::File { path, urls_only } => {
            let html = tokio::fs::read_to_string(&path).await?;
            let article = scraper.extract(&html, image_detail(urls_only));
            print_article(&article)?;
        }
        ScraperCommands::List => {
            let metadata = scraper.source_metadata();
            println!("Available scrapers:");
            for name in scraper.cli_names() {
                println!(
                    "  {} {} ({}, {})",
                    metadata.emoji,
                    name,
                    metadata.name,
                    metadata.region.to_lowercase()
                );
            }
        }
    }
    Ok(())
}
