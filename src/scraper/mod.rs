//! Scraper composition: the `Scraper` trait, configs, the registry and the
//! orchestrator that runs them in dependency order.
//!
//! - `config`: `ScraperConfig`, what the caller asks for
//! - `data`: `ScrapedData`, the namespaced aggregate
//! - `registry`: name -> factory and the dependency graph
//! - `orchestrator`: `FplScraper`, which resolves, runs and merges

pub mod config;
pub mod data;
pub mod orchestrator;
pub mod registry;


use async_trait::async_trait;

use crate::Result;

pub use config::ScraperConfig;
pub use data::{CategoryData, ScrapedData};
pub use orchestrator::FplScraper;
pub use registry::{ScraperFactory, ScraperRegistry};

/// Fetches and normalises one category of remote data.
#[async_trait]
pub trait Scraper: Send + Sync {
    /// Key this scraper's output is merged under.
    fn category(&self) -> &str;

    /// Run the scraper. `available` holds the output of every scraper that
    /// has already run in this pass, including declared dependencies.
    async fn scrape(&self, available: &ScrapedData) -> Result<CategoryData>;
}
