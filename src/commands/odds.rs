//! Print current or historical match odds.

use crate::{
    cli::types::OddsDate,
    config::Settings,
    odds::{GameOdds, OddsScraper},
    Result,
};

pub async fn handle_odds(settings: Settings, date: Option<OddsDate>, as_json: bool) -> Result<Vec<GameOdds>> {
    let scraper = OddsScraper::new(&settings, date)?;
    let games = scraper.fetch_games().await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&games)?);
    } else if games.is_empty() {
        println!("No priced games found");
    } else {
        for line in odds_table(&games) {
            println!("{line}");
        }
    }
    Ok(games)
}

/// Fixed-width table: date, fixture, bookmaker count and the three
/// probabilities as percentages.
pub fn odds_table(games: &[GameOdds]) -> Vec<String> {
    let mut lines = vec![format!(
        "{:<10}  {:<34}  {:>5}  {:>6}  {:>6}  {:>6}",
        "Date", "Fixture", "Books", "Home", "Draw", "Away"
    )];
    for game in games {
        lines.push(format!(
            "{:<10}  {:<34}  {:>5}  {:>5.1}%  {:>5.1}%  {:>5.1}%",
            game.commence_date.to_string(),
            format!("{} v {}", game.home, game.away),
            game.bookmakers,
            game.home_odds * 100.0,
            game.draw_odds * 100.0,
            game.away_odds * 100.0,
        ));
    }
    lines
}
