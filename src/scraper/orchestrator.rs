//! Runs a selection of scrapers in dependency order and aggregates their output.

use std::{collections::HashSet, path::Path};

use tracing::{debug, info};

use crate::{config::Settings, error::ScraplError, Result};

use super::{Scraper, ScrapedData, ScraperConfig, ScraperRegistry};

/// One entry of an execution plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedStep {
    pub config: ScraperConfig,
    /// Run only to feed a dependent; kept out of the aggregate.
    pub implicit: bool,
}

/// High-level runner that coordinates the individual scrapers.
///
/// Constructed with an explicit list of [`ScraperConfig`]s, or `None` to run
/// every registered scraper type. [`scrape`](Self::scrape) resolves the
/// dependency graph, runs each scraper once and merges the results under
/// their category keys. A dependency the caller did not ask for is still run
/// first, but its output is held apart from the returned aggregate.
///
/// ```rust,no_run
/// use scrapl::{FplScraper, ScraperConfig, ScraperKind, Settings};
///
/// # async fn example() -> scrapl::Result<()> {
/// let mut runner = FplScraper::new(
///     Settings::from_env()?,
///     Some(vec![ScraperConfig::new(ScraperKind::Fixtures)]),
/// );
/// let data = runner.scrape().await?;
/// assert!(data.contains("fixtures"));
/// runner.to_json("fixtures.json")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct FplScraper {
    settings: Settings,
    registry: ScraperRegistry,
    configs: Option<Vec<ScraperConfig>>,
    scraped_data: ScrapedData,
    dependency_data: ScrapedData,
    completed: HashSet<ScraperConfig>,
}

impl FplScraper {
    /// Runner over the built-in scrapers.
    pub fn new(settings: Settings, configs: Option<Vec<ScraperConfig>>) -> Self {
        Self::with_registry(settings, ScraperRegistry::with_defaults(), configs)
    }

    pub fn with_registry(
        settings: Settings,
        registry: ScraperRegistry,
        configs: Option<Vec<ScraperConfig>>,
    ) -> Self {
        Self {
            settings,
            registry,
            configs,
            scraped_data: ScrapedData::new(),
            dependency_data: ScrapedData::new(),
            completed: HashSet::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn registry(&self) -> &ScraperRegistry {
        &self.registry
    }

    /// Register a new scraper type (or replace an existing one).
    pub fn register_scraper<F>(&mut self, name: &str, depends_on: &[&str], factory: F)
    where
        F: Fn(&ScraperConfig, &Settings) -> Result<Box<dyn Scraper>> + Send + Sync + 'static,
    {
        self.registry.register(name, depends_on, factory);
        info!(scraper = name, "registered scraper");
    }

    /// The configs a `scrape` call will honour: the explicit list, or one
    /// default config per registered type.
    pub fn configs(&self) -> Vec<ScraperConfig> {
        match &self.configs {
            Some(configs) => configs.clone(),
            None => self.registry.names().map(ScraperConfig::named).collect(),
        }
    }

    /// The aggregate collected so far.
    pub fn data(&self) -> &ScrapedData {
        &self.scraped_data
    }

    pub fn into_data(self) -> ScrapedData {
        self.scraped_data
    }

    /// Resolve the configs into an ordered execution plan without running it.
    pub fn plan(&self) -> Result<Vec<PlannedStep>> {
        let requested = self.configs();
        if requested.is_empty() {
            return Err(ScraplError::NoScrapers);
        }

        let order = self.registry.resolve_configs(&requested)?;

        let mut steps: Vec<PlannedStep> = Vec::new();
        for name in &order {
            let mut matching = requested
                .iter()
                .filter(|c| &c.scraper_type == name)
                .peekable();

            if matching.peek().is_none() {
                steps.push(PlannedStep {
                    config: ScraperConfig::named(name.as_str()),
                    implicit: true,
                });
                continue;
            }
            for config in matching {
                if !steps.iter().any(|s| &s.config == config) {
                    steps.push(PlannedStep {
                        config: config.clone(),
                        implicit: false,
                    });
                }
            }
        }
        Ok(steps)
    }

    /// Run every pending scraper and return the aggregate.
    ///
    /// Scrapers that already contributed since the last
    /// [`clear_data`](Self::clear_data) are not run again. The first failure
    /// aborts the pass; categories finished before it stay in the aggregate.
    pub async fn scrape(&mut self) -> Result<&ScrapedData> {
        let steps = self.plan()?;

        // Build everything up front so config errors surface before any request.
        let mut pending: Vec<(PlannedStep, Box<dyn Scraper>)> = Vec::new();
        for step in steps {
            if !step.implicit && self.completed.contains(&step.config) {
                debug!(scraper = %step.config, "already scraped, skipping");
                continue;
            }
            let scraper = self.registry.build(&step.config, &self.settings)?;
            pending.push((step, scraper));
        }

        let mut available = self.scraped_data.clone();
        for category in self.dependency_data.categories() {
            if !available.contains(category) {
                if let Some(data) = self.dependency_data.get(category) {
                    available.merge(category, data.clone());
                }
            }
        }

        let total = pending.len();
        for (i, (step, scraper)) in pending.into_iter().enumerate() {
            let category = scraper.category().to_string();
            if step.implicit && available.contains(&category) {
                debug!(scraper = %step.config, "dependency already available");
                continue;
            }

            info!(
                step = i + 1,
                total,
                scraper = %step.config,
                implicit = step.implicit,
                "running scraper"
            );
            let data = scraper.scrape(&available).await?;
            let records: usize = data.values().map(Vec::len).sum();
            info!(scraper = %step.config, records, "scraper finished");

            if step.implicit {
                self.dependency_data.merge(&category, data.clone());
            } else {
                self.scraped_data.merge(&category, data.clone());
                self.completed.insert(step.config);
            }
            available.merge(&category, data);
        }

        Ok(&self.scraped_data)
    }

    /// Export the aggregate as one flat JSON file keyed by category.
    pub fn to_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.scraped_data.to_json_file(path)?;
        info!(path = %path.display(), categories = self.scraped_data.len(), "exported scraped data");
        Ok(())
    }

    /// Replace the aggregate with a previous export.
    ///
    /// Loaded categories count as available input for dependents, so an
    /// implicit dependency found in the file is not fetched again. They do
    /// not mark any config as finished.
    pub fn from_json(&mut self, path: impl AsRef<Path>) -> Result<&ScrapedData> {
        let path = path.as_ref();
        let loaded = ScrapedData::from_json_file(path)?;
        info!(path = %path.display(), categories = loaded.len(), "loaded scraped data");

        self.scraped_data = loaded;
        self.dependency_data.clear();
        self.completed.clear();
        Ok(&self.scraped_data)
    }

    /// Drop all collected data; the next `scrape` runs everything again.
    pub fn clear_data(&mut self) {
        self.scraped_data.clear();
        self.dependency_data.clear();
        self.completed.clear();
        info!("cleared all scraped data");
    }
}
