use async_trait::async_trait;
use tracing::info;

use crate::{
    cli::types::ScraperKind,
    config::Settings,
    scraper::{data::single, CategoryData, ScrapedData, Scraper},
    Result,
};

use super::{http::FplClient, types::Fixture};

pub const FIXTURES: &str = "fixtures";

/// Every fixture of the season, trimmed to scheduling, difficulty and score.
pub struct FixturesScraper {
    client: FplClient,
}

impl FixturesScraper {
    pub fn new(settings: &Settings) -> Result<Self> {
        Ok(Self {
            client: FplClient::new(settings)?,
        })
    }
}

#[async_trait]
impl Scraper for FixturesScraper {
    fn category(&self) -> &str {
        ScraperKind::Fixtures.as_str()
    }

    async fn scrape(&self, _available: &ScrapedData) -> Result<CategoryData> {
        let fixtures = self.client.fixtures().await?;
        info!(fixtures = fixtures.len(), "scraped fixtures");
        fixtures_category(&fixtures)
    }
}

pub fn fixtures_category(fixtures: &[Fixture]) -> Result<CategoryData> {
    let records = fixtures
        .iter()
        .map(serde_json::to_value)
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(single(FIXTURES, records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_records_keep_exactly_the_fixture_fields() {
        let fixtures: Vec<Fixture> = serde_json::from_value(json!([{
            "code": 2444470, "event": 1, "finished": true, "finished_provisional": true,
            "id": 1, "kickoff_time": "2024-08-16T19:00:00Z", "minutes": 90,
            "team_a": 9, "team_a_score": 0, "team_h": 14, "team_h_score": 1,
            "stats": [], "team_h_difficulty": 3, "team_a_difficulty": 4, "pulse_id": 115827
        }]))
        .unwrap();

        let data = fixtures_category(&fixtures).unwrap();
        let record = &data[FIXTURES][0];
        let mut keys: Vec<&String> = record.as_object().unwrap().keys().collect();
        keys.sort();
        assert_eq!(
            keys,
            vec![
                "event", "finished", "id", "kickoff_time", "team_a", "team_a_difficulty",
                "team_a_score", "team_h", "team_h_difficulty", "team_h_score"
            ]
        );
        assert_eq!(record["team_h_score"], json!(1));
    }

    #[test]
    fn test_empty_fixture_list() {
        let data = fixtures_category(&[]).unwrap();
        assert!(data[FIXTURES].is_empty());
    }
}
