//! Turning bookmaker prices into per-game result probabilities.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{error::ScraplError, Result};

use super::types::{Bookmaker, OddsGame};

/// Odds API team names that differ from the FPL short names.
const NAME_MAP: &[(&str, &str)] = &[
    ("Manchester United", "Manchester Utd"),
    ("Tottenham Hotspur", "Tottenham"),
    ("Nottingham Forest", "Nottingham"),
    ("Brighton and Hove Albion", "Brighton"),
    ("Leicester City", "Leicester"),
    ("Leeds United", "Leeds"),
    ("Newcastle United", "Newcastle"),
    ("West Ham United", "West Ham"),
    ("Wolverhampton Wanderers", "Wolves"),
    ("Sheffield United", "Sheffield Utd"),
];

const DRAW: &str = "Draw";

pub fn normalise_team_name(name: &str) -> &str {
    NAME_MAP
        .iter()
        .find(|(from, _)| *from == name)
        .map(|(_, to)| *to)
        .unwrap_or(name)
}

/// Implied probabilities of the three match results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultOdds {
    pub home: f64,
    pub away: f64,
    pub draw: f64,
}

impl ResultOdds {
    pub fn total(&self) -> f64 {
        self.home + self.away + self.draw
    }

    /// Rescale so the three outcomes sum to 1, removing the bookmaker margin.
    pub fn without_margin(&self) -> ResultOdds {
        let total = self.total();
        ResultOdds {
            home: self.home / total,
            away: self.away / total,
            draw: self.draw / total,
        }
    }
}

/// One output record of the `odds` category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameOdds {
    pub home: String,
    pub away: String,
    /// UTC day of kickoff, serialized as `YYYY-MM-DD`.
    pub commence_date: NaiveDate,
    pub bookmakers: usize,
    pub home_odds: f64,
    pub away_odds: f64,
    pub draw_odds: f64,
}

/// `1 / price` for home, away and draw as quoted by one bookmaker.
pub fn implied_odds(game: &OddsGame, bookmaker: &Bookmaker) -> Result<ResultOdds> {
    let market = bookmaker
        .markets
        .iter()
        .find(|m| m.key.is_empty() || m.key == "h2h")
        .ok_or_else(|| {
            ScraplError::shape(format!(
                "{} has no h2h market for {} v {}",
                bookmaker.key, game.home_team, game.away_team
            ))
        })?;

    let price_of = |name: &str| -> Result<f64> {
        let outcome = market.outcomes.iter().find(|o| o.name == name).ok_or_else(|| {
            ScraplError::shape(format!("{} quotes no price for '{name}'", bookmaker.key))
        })?;
        if outcome.price <= 0.0 {
            return Err(ScraplError::shape(format!(
                "{} quotes a non-positive price for '{name}'",
                bookmaker.key
            )));
        }
        Ok(1.0 / outcome.price)
    };

    Ok(ResultOdds {
        home: price_of(&game.home_team)?,
        away: price_of(&game.away_team)?,
        draw: price_of(DRAW)?,
    })
}

/// Average the margin-free odds of every bookmaker quoting the game.
///
/// Returns `None` for a game nobody has priced yet.
pub fn game_odds(game: &OddsGame) -> Result<Option<GameOdds>> {
    if game.bookmakers.is_empty() {
        debug!(home = %game.home_team, away = %game.away_team, "no bookmakers, skipping");
        return Ok(None);
    }

    let mut sum = ResultOdds {
        home: 0.0,
        away: 0.0,
        draw: 0.0,
    };
    for bookmaker in &game.bookmakers {
        let odds = implied_odds(game, bookmaker)?.without_margin();
        sum.home += odds.home;
        sum.away += odds.away;
        sum.draw += odds.draw;
    }
    let n = game.bookmakers.len() as f64;

    Ok(Some(GameOdds {
        home: normalise_team_name(&game.home_team).to_string(),
        away: normalise_team_name(&game.away_team).to_string(),
        commence_date: game.commence_time.date_naive(),
        bookmakers: game.bookmakers.len(),
        home_odds: sum.home / n,
        away_odds: sum.away / n,
        draw_odds: sum.draw / n,
    }))
}
