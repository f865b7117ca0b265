//! Command implementations for the scrapl CLI

pub mod odds;
pub mod scrape;

use crate::{config::Settings, error::ScraplError, Result};

/// Environment-derived settings with CLI overrides applied on top.
pub fn resolve_settings(base: Settings, concurrency: Option<usize>) -> Result<Settings> {
    let mut settings = base;
    if let Some(n) = concurrency {
        if n == 0 {
            return Err(ScraplError::InvalidConfig {
                message: "--concurrency must be at least 1".to_string(),
            });
        }
        settings.concurrency = n;
    }
    settings.validate()?;
    Ok(settings)
}
