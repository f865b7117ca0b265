//! Fantasy Premier League API endpoints.

use crate::{
    cli::types::{Gameweek, PlayerId},
    config::Settings,
    core::{decode, HttpClient},
    Result,
};

use super::types::{BootstrapStatic, ElementSummary, EventLive, Fixture};

#[derive(Debug, Clone)]
pub struct FplClient {
    http: HttpClient,
}

impl FplClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(settings.fpl_base_url.as_str(), settings)?,
        })
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Teams, gameweeks and players for the season.
    pub async fn bootstrap_static(&self) -> Result<BootstrapStatic> {
        let v = self.http.get_json("bootstrap-static/", &[]).await?;
        decode(v, "bootstrap-static")
    }

    /// Every fixture of the season.
    pub async fn fixtures(&self) -> Result<Vec<Fixture>> {
        let v = self.http.get_json("fixtures/", &[]).await?;
        decode(v, "fixtures")
    }

    /// Live per-player stats for one gameweek.
    pub async fn event_live(&self, gameweek: Gameweek) -> Result<EventLive> {
        let v = self
            .http
            .get_json(&format!("event/{gameweek}/live/"), &[])
            .await?;
        decode(v, "event live")
    }

    /// Match history of one player.
    pub async fn element_summary(&self, player: PlayerId) -> Result<ElementSummary> {
        let v = self
            .http
            .get_json(&format!("element-summary/{player}/"), &[])
            .await?;
        decode(v, "element-summary")
    }
}
