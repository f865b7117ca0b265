//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use scrapl::{
    cli::{Commands, Scrapl},
    commands::{
        odds::handle_odds,
        scrape::{handle_scrape, ScrapeParams},
    },
    Settings,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("scrapl=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let app = Scrapl::parse();
    let settings = Settings::from_env().context("invalid settings in the environment")?;

    match app.command {
        Commands::Scrape {
            scrapers,
            output,
            json,
            no_export,
            concurrency,
        } => {
            handle_scrape(
                settings,
                ScrapeParams {
                    scrapers,
                    output,
                    as_json: json,
                    no_export,
                    concurrency,
                },
            )
            .await
            .context("scrape failed")?;
        }

        Commands::Odds { date, json } => {
            handle_odds(settings, date, json)
                .await
                .context("fetching odds failed")?;
        }
    }

    Ok(())
}
