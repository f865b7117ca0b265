//! Run a selection of scrapers and export what they collected.

use std::path::PathBuf;

use crate::{
    config::{default_export_path, Settings},
    scraper::{FplScraper, ScrapedData, ScraperConfig},
    Result,
};

use super::resolve_settings;

/// Options of the `scrape` command.
#[derive(Debug, Clone, Default)]
pub struct ScrapeParams {
    /// Empty means every registered scraper.
    pub scrapers: Vec<ScraperConfig>,
    pub output: Option<PathBuf>,
    pub as_json: bool,
    pub no_export: bool,
    pub concurrency: Option<usize>,
}

pub async fn handle_scrape(settings: Settings, params: ScrapeParams) -> Result<ScrapedData> {
    let settings = resolve_settings(settings, params.concurrency)?;
    let configs = if params.scrapers.is_empty() {
        None
    } else {
        Some(params.scrapers)
    };

    let mut runner = FplScraper::new(settings, configs);
    runner.scrape().await?;

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(runner.data())?);
    } else {
        for line in summary_lines(runner.data()) {
            println!("{line}");
        }
    }

    if !params.no_export {
        let path = params.output.unwrap_or_else(default_export_path);
        runner.to_json(&path)?;
        if !params.as_json {
            println!("✓ Exported to {}", path.display());
        }
    }

    Ok(runner.into_data())
}

/// `category/sub_type: N records`, one line per sub-type.
pub fn summary_lines(data: &ScrapedData) -> Vec<String> {
    let mut lines = Vec::new();
    for category in data.categories() {
        let Some(subs) = data.get(category) else {
            continue;
        };
        if subs.is_empty() {
            lines.push(format!("{category}: no data"));
        }
        for (sub_type, records) in subs {
            lines.push(format!("{category}/{sub_type}: {} records", records.len()));
        }
    }
    lines
}
