//! Fantasy Premier League scrapers.

pub mod fixtures;
pub mod gameweek;
pub mod general;
pub mod http;
pub mod player;
pub mod types;

pub use fixtures::FixturesScraper;
pub use gameweek::GameweekScraper;
pub use general::GeneralScraper;
pub use http::FplClient;
pub use player::PlayerScraper;
