use async_trait::async_trait;
use futures::{stream, StreamExt, TryStreamExt};
use serde_json::Value;
use tracing::{debug, info};

use crate::{
    cli::types::{PlayerId, ScraperKind},
    config::Settings,
    scraper::{data::single, CategoryData, ScrapedData, Scraper},
    Result,
};

use super::{general::element_ids, http::FplClient};

pub const PLAYER_STATS: &str = "player_stats";

/// Per-match history of one player, or of every player `general` listed.
///
/// The all-players mode issues one request per player, at most
/// `concurrency` at a time; output is ordered by player id.
pub struct PlayerScraper {
    client: FplClient,
    player: Option<PlayerId>,
    concurrency: usize,
}

impl PlayerScraper {
    pub fn new(settings: &Settings, idx: Option<u32>) -> Result<Self> {
        Ok(Self {
            client: FplClient::new(settings)?,
            player: idx.map(PlayerId::new),
            concurrency: settings.concurrency.max(1),
        })
    }

    async fn history(&self, player: PlayerId) -> Result<(PlayerId, Vec<Value>)> {
        let summary = self.client.element_summary(player).await?;
        debug!(%player, matches = summary.history.len(), "scraped player");
        Ok((player, summary.history))
    }
}

#[async_trait]
impl Scraper for PlayerScraper {
    fn category(&self) -> &str {
        ScraperKind::Player.as_str()
    }

    async fn scrape(&self, available: &ScrapedData) -> Result<CategoryData> {
        let players = match self.player {
            Some(id) => vec![id],
            None => element_ids(available)?,
        };
        info!(players = players.len(), concurrency = self.concurrency, "scraping players");

        let mut histories: Vec<(PlayerId, Vec<Value>)> = stream::iter(players)
            .map(|id| self.history(id))
            .buffer_unordered(self.concurrency)
            .try_collect()
            .await?;
        histories.sort_by_key(|(id, _)| *id);

        let records: Vec<Value> = histories.into_iter().flat_map(|(_, h)| h).collect();
        info!(records = records.len(), "scraped player histories");
        Ok(single(PLAYER_STATS, records))
    }
}
