//! Caller-supplied selection of which scraper to run and with what input.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{
    cli::types::{Gameweek, OddsDate, PlayerId, ScraperKind},
    error::{Result, ScraplError},
};

/// Identifies a scraper type and its narrow input.
///
/// `idx` is the gameweek for `gameweek` and the element id for `player`;
/// `date` picks a historical odds snapshot. Textual form is `name`,
/// `name:N`, or `odds:YYMMDD`.
///
/// ```rust
/// use scrapl::{ScraperConfig, ScraperKind};
///
/// let config: ScraperConfig = "gameweek:5".parse().unwrap();
/// assert_eq!(config.kind(), Some(ScraperKind::Gameweek));
/// assert_eq!(config.idx, Some(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScraperConfig {
    pub scraper_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idx: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<OddsDate>,
}

impl ScraperConfig {
    pub fn new(kind: ScraperKind) -> Self {
        Self::named(kind.as_str())
    }

    /// Config for a scraper registered under a custom name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            scraper_type: name.into(),
            idx: None,
            date: None,
        }
    }

    pub fn gameweek(gw: Gameweek) -> Self {
        Self::new(ScraperKind::Gameweek).with_idx(gw.as_u32())
    }

    pub fn player(id: PlayerId) -> Self {
        Self::new(ScraperKind::Player).with_idx(id.as_u32())
    }

    pub fn historical_odds(date: OddsDate) -> Self {
        Self::new(ScraperKind::Odds).with_date(date)
    }

    pub fn with_idx(mut self, idx: u32) -> Self {
        self.idx = Some(idx);
        self
    }

    pub fn with_date(mut self, date: OddsDate) -> Self {
        self.date = Some(date);
        self
    }

    /// The built-in kind, if this config names one.
    pub fn kind(&self) -> Option<ScraperKind> {
        self.scraper_type.parse().ok()
    }
}

impl fmt::Display for ScraperConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.scraper_type)?;
        if let Some(idx) = self.idx {
            write!(f, ":{idx}")?;
        }
        if let Some(date) = self.date {
            write!(f, ":{date}")?;
        }
        Ok(())
    }
}

impl FromStr for ScraperConfig {
    type Err = ScraplError;

    fn from_str(s: &str) -> Result<Self> {
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name.trim(), Some(arg.trim())),
            None => (s.trim(), None),
        };
        if name.is_empty() {
            return Err(ScraplError::InvalidConfig {
                message: format!("scraper config '{s}' has no scraper type"),
            });
        }

        let name = name.to_ascii_lowercase();
        let mut config = ScraperConfig::named(name.as_str());
        let Some(arg) = arg else {
            return Ok(config);
        };
        if arg.is_empty() {
            return Err(ScraplError::MissingParameter {
                scraper: name,
                parameter: match config.kind() {
                    Some(ScraperKind::Odds) => "date (YYMMDD)",
                    Some(ScraperKind::Gameweek) => "gameweek number",
                    Some(ScraperKind::Player) => "player id",
                    _ => "value after ':'",
                }
                .to_string(),
            });
        }

        match config.kind() {
            Some(ScraperKind::Odds) => config.date = Some(arg.parse()?),
            Some(ScraperKind::Gameweek) => config.idx = Some(arg.parse::<Gameweek>()?.as_u32()),
            Some(ScraperKind::Player) => config.idx = Some(arg.parse::<PlayerId>()?.as_u32()),
            Some(ScraperKind::General) | Some(ScraperKind::Fixtures) => {
                return Err(ScraplError::InvalidConfig {
                    message: format!("scraper '{name}' takes no argument"),
                })
            }
            None => config.idx = Some(arg.parse()?),
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_names() {
        let config: ScraperConfig = "fixtures".parse().unwrap();
        assert_eq!(config, ScraperConfig::new(ScraperKind::Fixtures));

        let custom: ScraperConfig = "Weather".parse().unwrap();
        assert_eq!(custom.scraper_type, "weather");
        assert_eq!(custom.kind(), None);
    }

    #[test]
    fn test_parse_arguments() {
        assert_eq!(
            "player:351".parse::<ScraperConfig>().unwrap(),
            ScraperConfig::player(PlayerId::new(351))
        );
        assert_eq!(
            "gameweek:12".parse::<ScraperConfig>().unwrap(),
            ScraperConfig::gameweek(Gameweek::new(12))
        );
        let odds: ScraperConfig = "odds:240817".parse().unwrap();
        assert_eq!(odds.date.unwrap().to_api_timestamp(), "2024-08-17T12:00:00Z");
        assert_eq!(odds.idx, None);
    }

    #[test]
    fn test_parse_rejects_bad_arguments() {
        assert!("gameweek:40".parse::<ScraperConfig>().is_err());
        assert!("player:abc".parse::<ScraperConfig>().is_err());
        assert!("odds:2024-08-17".parse::<ScraperConfig>().is_err());
        assert!("general:1".parse::<ScraperConfig>().is_err());
        assert!(":5".parse::<ScraperConfig>().is_err());
    }

    #[test]
    fn test_parse_empty_argument_is_missing_parameter() {
        match "player:".parse::<ScraperConfig>() {
            Err(ScraplError::MissingParameter { scraper, parameter }) => {
                assert_eq!(scraper, "player");
                assert_eq!(parameter, "player id");
            }
            other => panic!("Expected MissingParameter, got {other:?}"),
        }
    }

    #[test]
    fn test_display_round_trip() {
        for text in ["general", "player:7", "gameweek:3", "odds:250101", "custom:9"] {
            let config: ScraperConfig = text.parse().unwrap();
            assert_eq!(config.to_string(), text);
        }
    }

    #[test]
    fn test_serde_skips_empty_fields() {
        let json = serde_json::to_string(&ScraperConfig::new(ScraperKind::General)).unwrap();
        assert_eq!(json, r#"{"scraper_type":"general"}"#);
    }
}
