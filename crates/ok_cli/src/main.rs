use clap::Parser;
use ok_scrappers::{handle_command, init_logging, ScraperArgs};
use ok_web::ServerConfig;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log at debug level
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Serve the article extraction API
    Serve(ServerConfig),
    /// Extract a single article from the command line
    Scrape(ScraperArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Serve(config) => {
            info!("🚀 Starting server on {}", config.bind);
            ok_web::serve(config).await?;
        }
        Commands::Scrape(args) => handle_command(args).await?,
    }

    Ok(())
}
