use async_trait::async_trait;
use tracing::{info, warn};

use crate::{
    cli::types::{OddsDate, ScraperKind},
    config::Settings,
    core::{decode, HttpClient},
    scraper::{data::single, CategoryData, ScrapedData, Scraper},
    Result,
};

use super::{
    game::{game_odds, GameOdds},
    types::OddsResponse,
};

pub const ODDS: &str = "odds";

const SPORT: &str = "soccer_epl";
const REGIONS: &str = "uk";
const MARKETS: &str = "h2h";

/// Premier League head-to-head odds from The Odds API.
///
/// With a date the historical snapshot at midday UTC of that day is used,
/// otherwise the currently listed games.
pub struct OddsScraper {
    http: HttpClient,
    api_key: String,
    date: Option<OddsDate>,
}

impl OddsScraper {
    pub fn new(settings: &Settings, date: Option<OddsDate>) -> Result<Self> {
        let api_key = settings.require_api_key()?.to_string();
        Ok(Self {
            http: HttpClient::new(settings.odds_base_url.clone(), settings)?,
            api_key,
            date,
        })
    }

    pub fn date(&self) -> Option<OddsDate> {
        self.date
    }

    fn request(&self) -> (String, Vec<(&'static str, String)>) {
        let mut query = vec![
            ("apiKey", self.api_key.clone()),
            ("regions", REGIONS.to_string()),
            ("markets", MARKETS.to_string()),
        ];
        let path = match self.date {
            Some(date) => {
                query.push(("date", date.to_api_timestamp()));
                format!("{SPORT}/odds-history/")
            }
            None => format!("{SPORT}/odds/"),
        };
        (path, query)
    }

    /// Fetch and reduce every priced game.
    pub async fn fetch_games(&self) -> Result<Vec<GameOdds>> {
        let (path, query) = self.request();
        let body = self.http.get_json(&path, &query).await?;
        let games = decode::<OddsResponse>(body, &path)?.into_games();

        let mut out = Vec::with_capacity(games.len());
        let mut skipped = 0;
        for game in &games {
            match game_odds(game)? {
                Some(odds) => out.push(odds),
                None => skipped += 1,
            }
        }
        if skipped > 0 {
            warn!(skipped, "games without bookmaker prices were left out");
        }
        Ok(out)
    }
}

#[async_trait]
impl Scraper for OddsScraper {
    fn category(&self) -> &str {
        ScraperKind::Odds.as_str()
    }

    async fn scrape(&self, _available: &ScrapedData) -> Result<CategoryData> {
        let games = self.fetch_games().await?;
        info!(
            games = games.len(),
            date = ?self.date.map(|d| d.to_string()),
            "scraped odds"
        );
        let records = games
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(single(ODDS, records))
    }
}
