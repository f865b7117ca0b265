//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use types::OddsDate;

use crate::scraper::ScraperConfig;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run scrapers and export the aggregated result as JSON.
    ///
    /// Without `--scraper` every registered scraper runs.
    Scrape {
        /// Scraper to run, as `name` or `name:arg` (repeatable):
        /// `-s general -s gameweek:5 -s player:233 -s odds:240817`.
        #[clap(long = "scraper", short = 's')]
        scrapers: Vec<ScraperConfig>,

        /// Export path (defaults to the user data directory).
        #[clap(long, short)]
        output: Option<PathBuf>,

        /// Print the aggregate as JSON to stdout.
        #[clap(long)]
        json: bool,

        /// Skip writing the export file.
        #[clap(long)]
        no_export: bool,

        /// Maximum in-flight per-player requests (or set `SCRAPL_CONCURRENCY`).
        #[clap(long)]
        concurrency: Option<usize>,
    },

    /// Show Premier League match odds as result probabilities.
    Odds {
        /// Historical snapshot date as YYMMDD; upcoming games when omitted.
        #[clap(long, short)]
        date: Option<OddsDate>,

        /// Output results as JSON instead of a table.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "scrapl",
    version,
    about = "Fantasy Premier League and betting odds scraper"
)]
pub struct Scrapl {
    #[clap(subcommand)]
    pub command: Commands,
}
