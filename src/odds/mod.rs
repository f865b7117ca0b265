//! Betting odds for Premier League games.

pub mod game;
pub mod scraper;
pub mod types;

pub use game::{normalise_team_name, GameOdds};
pub use scraper::OddsScraper;
