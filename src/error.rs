//! Error types for the scrapl library

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, ScraplError>;

#[derive(Error, Debug)]
pub enum ScraplError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected response shape: {context}")]
    UnexpectedShape { context: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown scraper type: {name}")]
    UnknownScraper { name: String },

    #[error("Scraper dependency cycle: {}", path.join(" -> "))]
    DependencyCycle { path: Vec<String> },

    #[error("Scraper '{scraper}' depends on unregistered scraper '{dependency}'")]
    MissingDependency { scraper: String, dependency: String },

    #[error("Scraper '{scraper}' requires a {parameter}")]
    MissingParameter { scraper: String, parameter: String },

    #[error("Odds API key not provided and {env_var} environment variable not set")]
    MissingApiKey { env_var: String },

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Date must be YYMMDD, got '{value}'")]
    InvalidDate { value: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("No scrapers configured")]
    NoScrapers,
}

impl ScraplError {
    pub(crate) fn shape(context: impl Into<String>) -> Self {
        ScraplError::UnexpectedShape {
            context: context.into(),
        }
    }

    /// Whether a failed request is worth repeating.
    pub fn is_transient(&self) -> bool {
        match self {
            ScraplError::Http(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            ScraplError::Status { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}
