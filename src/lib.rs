//! Fantasy Premier League and betting-odds scraper library
//!
//! Pulls data from the public Fantasy Premier League API and The Odds API
//! and assembles it into one namespaced result:
//! `{ category: { sub_type: [records] } }`.
//!
//! ## Features
//!
//! - **Selectable scrapers**: `general`, `fixtures`, `gameweek`, `player`, `odds`
//! - **Dependency resolution**: scrapers run after the ones they depend on
//! - **Pluggable registry**: register extra scraper types at runtime
//! - **Retrying HTTP**: transient failures are retried with a fixed delay
//! - **JSON export** of the aggregated result
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scrapl::{FplScraper, ScraperConfig, Settings};
//!
//! # async fn example() -> scrapl::Result<()> {
//! let configs = vec!["general".parse::<ScraperConfig>()?, "player:233".parse()?];
//! let mut runner = FplScraper::new(Settings::from_env()?, Some(configs));
//!
//! let data = runner.scrape().await?;
//! println!("{} categories", data.len());
//! runner.to_json("scraped_data.json")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! The odds scraper needs an API key, read from the environment or `.env`:
//! ```bash
//! export API_KEY=your-odds-api-key
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod fpl;
pub mod odds;
pub mod scraper;

// Re-export commonly used types
pub use cli::types::{Gameweek, OddsDate, PlayerId, ScraperKind};
pub use config::Settings;
pub use error::{Result, ScraplError};
pub use scraper::{
    CategoryData, FplScraper, ScrapedData, Scraper, ScraperConfig, ScraperRegistry,
};
