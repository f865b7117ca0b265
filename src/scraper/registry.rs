//! Scraper-type name -> factory, plus the static dependency graph between types.

use std::{
    collections::{BTreeMap, HashSet},
    fmt,
    sync::Arc,
};

use crate::{
    cli::types::ScraperKind,
    config::Settings,
    error::{Result, ScraplError},
    fpl::{FixturesScraper, GameweekScraper, GeneralScraper, PlayerScraper},
    odds::OddsScraper,
};

use super::{Scraper, ScraperConfig};

/// Builds a scraper instance for one config.
pub type ScraperFactory =
    Arc<dyn Fn(&ScraperConfig, &Settings) -> Result<Box<dyn Scraper>> + Send + Sync>;

/// Decides whether a config actually needs its type's declared dependencies.
pub type DependencyFilter = fn(&ScraperConfig) -> bool;

#[derive(Clone)]
struct RegistryEntry {
    depends_on: Vec<String>,
    needs_dependencies: DependencyFilter,
    factory: ScraperFactory,
}

fn always(_: &ScraperConfig) -> bool {
    true
}

fn without_index(config: &ScraperConfig) -> bool {
    config.idx.is_none()
}

/// Registered scraper types in registration order.
#[derive(Clone, Default)]
pub struct ScraperRegistry {
    entries: BTreeMap<String, RegistryEntry>,
    order: Vec<String>,
}

impl fmt::Debug for ScraperRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for name in &self.order {
            map.entry(name, &self.entries[name].depends_on);
        }
        map.finish()
    }
}

impl ScraperRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in scrapers: general, fixtures, gameweek, player, odds.
    ///
    /// `gameweek` and `player` depend on `general` only when no index is
    /// given: they then read the current gameweek or the element ids from
    /// its output.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        let general = ScraperKind::General.as_str();

        registry.register(general, &[], |_, settings| {
            Ok(Box::new(GeneralScraper::new(settings)?) as Box<dyn Scraper>)
        });
        registry.register(ScraperKind::Fixtures.as_str(), &[], |_, settings| {
            Ok(Box::new(FixturesScraper::new(settings)?) as Box<dyn Scraper>)
        });
        registry.register_when(
            ScraperKind::Gameweek.as_str(),
            &[general],
            without_index,
            |config, settings| {
                Ok(Box::new(GameweekScraper::new(settings, config.idx)?) as Box<dyn Scraper>)
            },
        );
        registry.register_when(
            ScraperKind::Player.as_str(),
            &[general],
            without_index,
            |config, settings| {
                Ok(Box::new(PlayerScraper::new(settings, config.idx)?) as Box<dyn Scraper>)
            },
        );
        registry.register(ScraperKind::Odds.as_str(), &[], |config, settings| {
            Ok(Box::new(OddsScraper::new(settings, config.date)?) as Box<dyn Scraper>)
        });

        registry
    }

    /// Register (or replace) a scraper type.
    pub fn register<F>(&mut self, name: &str, depends_on: &[&str], factory: F)
    where
        F: Fn(&ScraperConfig, &Settings) -> Result<Box<dyn Scraper>> + Send + Sync + 'static,
    {
        self.register_when(name, depends_on, always, factory);
    }

    /// Register a scraper type whose dependencies only apply to configs
    /// accepted by `needs_dependencies`.
    ///
    /// Cycles and unregistered dependencies are still checked for every
    /// config.
    pub fn register_when<F>(
        &mut self,
        name: &str,
        depends_on: &[&str],
        needs_dependencies: DependencyFilter,
        factory: F,
    ) where
        F: Fn(&ScraperConfig, &Settings) -> Result<Box<dyn Scraper>> + Send + Sync + 'static,
    {
        let entry = RegistryEntry {
            depends_on: depends_on.iter().map(|d| d.to_string()).collect(),
            needs_dependencies,
            factory: Arc::new(factory),
        };
        if self.entries.insert(name.to_string(), entry).is_none() {
            self.order.push(name.to_string());
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Every dependency declared for a type.
    pub fn dependencies(&self, name: &str) -> Result<&[String]> {
        self.entry(name).map(|e| e.depends_on.as_slice())
    }

    /// The dependencies one config actually needs.
    pub fn dependencies_for(&self, config: &ScraperConfig) -> Result<&[String]> {
        let entry = self.entry(&config.scraper_type)?;
        if (entry.needs_dependencies)(config) {
            Ok(&entry.depends_on)
        } else {
            Ok(&[])
        }
    }

    /// Instantiate the scraper a config names.
    pub fn build(&self, config: &ScraperConfig, settings: &Settings) -> Result<Box<dyn Scraper>> {
        let entry = self.entry(&config.scraper_type)?;
        (entry.factory)(config, settings)
    }

    /// Topologically order `requested` together with everything they
    /// transitively depend on. Dependencies come first; otherwise the
    /// requested order is kept. Each name appears once.
    pub fn resolve<S: AsRef<str>>(&self, requested: &[S]) -> Result<Vec<String>> {
        let mut ordered = Vec::new();
        let mut done = HashSet::new();
        let mut visiting = Vec::new();

        for name in requested {
            let name = name.as_ref();
            self.entry(name)?;
            self.visit(name, &mut visiting, &mut done, &mut ordered)?;
        }
        Ok(ordered)
    }

    /// Like [`resolve`](Self::resolve), but only pulls in dependencies the
    /// given configs need. Implicit dependencies run with their default
    /// config.
    pub fn resolve_configs(&self, requested: &[ScraperConfig]) -> Result<Vec<String>> {
        let names: Vec<&str> = requested.iter().map(|c| c.scraper_type.as_str()).collect();
        let full = self.resolve(&names)?;

        let mut needed: HashSet<String> = names.iter().map(|n| n.to_string()).collect();
        let mut pending: Vec<String> = Vec::new();
        for config in requested {
            pending.extend(self.dependencies_for(config)?.iter().cloned());
        }
        while let Some(dep) = pending.pop() {
            if needed.insert(dep.clone()) {
                let implicit = ScraperConfig::named(dep.as_str());
                pending.extend(self.dependencies_for(&implicit)?.iter().cloned());
            }
        }

        Ok(full.into_iter().filter(|n| needed.contains(n)).collect())
    }

    fn visit(
        &self,
        name: &str,
        visiting: &mut Vec<String>,
        done: &mut HashSet<String>,
        ordered: &mut Vec<String>,
    ) -> Result<()> {
        if done.contains(name) {
            return Ok(());
        }
        if let Some(start) = visiting.iter().position(|n| n == name) {
            let mut path = visiting[start..].to_vec();
            path.push(name.to_string());
            return Err(ScraplError::DependencyCycle { path });
        }

        visiting.push(name.to_string());
        for dep in &self.entry(name)?.depends_on {
            if !self.contains(dep) {
                return Err(ScraplError::MissingDependency {
                    scraper: name.to_string(),
                    dependency: dep.clone(),
                });
            }
            self.visit(dep, visiting, done, ordered)?;
        }
        visiting.pop();

        done.insert(name.to_string());
        ordered.push(name.to_string());
        Ok(())
    }

    fn entry(&self, name: &str) -> Result<&RegistryEntry> {
        self.entries
            .get(name)
            .ok_or_else(|| ScraplError::UnknownScraper {
                name: name.to_string(),
            })
    }
}
