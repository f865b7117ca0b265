//! Built-in scraper types.

use crate::error::ScraplError;
use std::fmt;
use std::str::FromStr;

/// The scraper types shipped with the crate.
///
/// Each kind names one category of the aggregate result. Custom scrapers can
/// be registered under other names; this enum only covers the built-ins.
///
/// ```rust
/// use scrapl::ScraperKind;
///
/// let kind: ScraperKind = "fixtures".parse().unwrap();
/// assert_eq!(kind, ScraperKind::Fixtures);
/// assert_eq!(kind.as_str(), "fixtures");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScraperKind {
    General,
    Fixtures,
    Gameweek,
    Player,
    Odds,
}

impl ScraperKind {
    pub const ALL: [ScraperKind; 5] = [
        ScraperKind::General,
        ScraperKind::Fixtures,
        ScraperKind::Gameweek,
        ScraperKind::Player,
        ScraperKind::Odds,
    ];

    /// Category key used in the aggregate result and in configs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScraperKind::General => "general",
            ScraperKind::Fixtures => "fixtures",
            ScraperKind::Gameweek => "gameweek",
            ScraperKind::Player => "player",
            ScraperKind::Odds => "odds",
        }
    }
}

impl fmt::Display for ScraperKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScraperKind {
    type Err = ScraplError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ScraperKind::ALL
            .into_iter()
            .find(|k| k.as_str() == wanted)
            .ok_or_else(|| ScraplError::UnknownScraper {
                name: s.to_string(),
            })
    }
}
