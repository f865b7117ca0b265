use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::{
    cli::types::{Gameweek, ScraperKind},
    config::Settings,
    error::ScraplError,
    scraper::{data::single, CategoryData, ScrapedData, Scraper},
    Result,
};

use super::{general::recorded_current_gameweek, http::FplClient, types::EventLive};

pub const GW_STATS: &str = "gw_stats";

/// Live per-player stats for one gameweek.
///
/// Without an explicit gameweek the current one is taken from the `general`
/// output; before the season starts there is none and the result is empty.
pub struct GameweekScraper {
    client: FplClient,
    gameweek: Option<Gameweek>,
}

impl GameweekScraper {
    pub fn new(settings: &Settings, idx: Option<u32>) -> Result<Self> {
        let gameweek = match idx {
            Some(gw) if (1..=Gameweek::LAST).contains(&gw) => Some(Gameweek::new(gw)),
            Some(gw) => {
                return Err(ScraplError::InvalidConfig {
                    message: format!("gameweek must be between 1 and {}, got {gw}", Gameweek::LAST),
                })
            }
            None => None,
        };
        Ok(Self {
            client: FplClient::new(settings)?,
            gameweek,
        })
    }
}

#[async_trait]
impl Scraper for GameweekScraper {
    fn category(&self) -> &str {
        ScraperKind::Gameweek.as_str()
    }

    async fn scrape(&self, available: &ScrapedData) -> Result<CategoryData> {
        let gameweek = match self.gameweek {
            Some(gw) => gw,
            None => match recorded_current_gameweek(available)? {
                Some(gw) => gw,
                None => {
                    warn!("no current gameweek yet, nothing to scrape");
                    return Ok(single(GW_STATS, Vec::new()));
                }
            },
        };

        let live = self.client.event_live(gameweek).await?;
        let stats = gameweek_stats(&live);
        info!(gameweek = gameweek.as_u32(), players = stats.len(), "scraped gameweek");
        Ok(single(GW_STATS, stats))
    }
}

/// One flat record per player: `id`, every live stat, and the fixture the
/// first points breakdown belongs to.
pub fn gameweek_stats(live: &EventLive) -> Vec<Value> {
    live.elements
        .iter()
        .map(|el| {
            let mut record = Map::new();
            record.insert("id".to_string(), Value::from(el.id));
            record.extend(el.stats.iter().map(|(k, v)| (k.clone(), v.clone())));
            record.insert(
                "fixture_id".to_string(),
                el.explain
                    .first()
                    .map(|e| Value::from(e.fixture))
                    .unwrap_or(Value::Null),
            );
            Value::Object(record)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fpl::general::CURRENT_GAMEWEEK;
    use serde_json::json;

    #[test]
    fn test_stats_flattened_with_fixture_id() {
        let live: EventLive = serde_json::from_value(json!({
            "elements": [
                {"id": 1, "stats": {"minutes": 90, "goals_scored": 1, "total_points": 8},
                 "explain": [{"fixture": 11, "stats": []}, {"fixture": 12, "stats": []}]},
                {"id": 2, "stats": {"minutes": 0, "total_points": 0}, "explain": []}
            ]
        }))
        .unwrap();

        let stats = gameweek_stats(&live);
        assert_eq!(
            stats[0],
            json!({"id": 1, "minutes": 90, "goals_scored": 1, "total_points": 8, "fixture_id": 11})
        );
        assert_eq!(stats[1]["fixture_id"], Value::Null);
    }

    #[test]
    fn test_rejects_out_of_range_gameweek() {
        let settings = Settings::default();
        assert!(GameweekScraper::new(&settings, Some(0)).is_err());
        assert!(GameweekScraper::new(&settings, Some(39)).is_err());
        assert!(GameweekScraper::new(&settings, Some(38)).is_ok());
        assert!(GameweekScraper::new(&settings, None).is_ok());
    }

    #[tokio::test]
    async fn test_preseason_without_index_is_empty() {
        let scraper = GameweekScraper::new(&Settings::default(), None).unwrap();
        let mut available = ScrapedData::new();
        available.merge("general", single(CURRENT_GAMEWEEK, Vec::new()));

        let data = scraper.scrape(&available).await.unwrap();
        assert!(data[GW_STATS].is_empty());
    }

    #[tokio::test]
    async fn test_without_index_or_general_is_missing_dependency() {
        let scraper = GameweekScraper::new(&Settings::default(), None).unwrap();
        let result = scraper.scrape(&ScrapedData::new()).await;
        assert!(matches!(result, Err(ScraplError::MissingDependency { .. })));
    }
}
