use chrono::{DateTime, Utc};
use serde::Deserialize;

/// The odds endpoints answer with a bare list of games; snapshot-style
/// responses wrap the same list in `data`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OddsResponse {
    Games(Vec<OddsGame>),
    Snapshot { data: Vec<OddsGame> },
}

impl OddsResponse {
    pub fn into_games(self) -> Vec<OddsGame> {
        match self {
            OddsResponse::Games(games) => games,
            OddsResponse::Snapshot { data } => data,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OddsGame {
    pub home_team: String,
    pub away_team: String,
    /// Kickoff, sent as RFC 3339 (`2024-08-16T19:00:00Z`).
    pub commence_time: DateTime<Utc>,
    #[serde(default)]
    pub bookmakers: Vec<Bookmaker>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Bookmaker {
    pub key: String,
    pub last_update: String,
    #[serde(default)]
    pub markets: Vec<Market>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Market {
    #[serde(default)]
    pub key: String,
    pub outcomes: Vec<Outcome>,
}

/// A named result and its decimal price.
#[derive(Debug, Clone, Deserialize)]
pub struct Outcome {
    pub name: String,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn game() -> serde_json::Value {
        json!({
            "id": "abc", "sport_key": "soccer_epl",
            "commence_time": "2024-08-16T19:00:00Z",
            "home_team": "Manchester United", "away_team": "Fulham",
            "bookmakers": [{
                "key": "betfair", "title": "Betfair", "last_update": "2024-08-16T18:00:00Z",
                "markets": [{"key": "h2h", "outcomes": [
                    {"name": "Manchester United", "price": 1.5},
                    {"name": "Fulham", "price": 6.0},
                    {"name": "Draw", "price": 4.5}
                ]}]
            }]
        })
    }

    #[test]
    fn test_bare_list_response() {
        let parsed: OddsResponse = serde_json::from_value(json!([game()])).unwrap();
        let games = parsed.into_games();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].bookmakers[0].markets[0].outcomes.len(), 3);
    }

    #[test]
    fn test_snapshot_response() {
        let parsed: OddsResponse = serde_json::from_value(json!({
            "timestamp": "2024-08-16T12:00:00Z",
            "data": [game(), game()]
        }))
        .unwrap();
        assert_eq!(parsed.into_games().len(), 2);
    }

    #[test]
    fn test_game_without_bookmakers() {
        let parsed: OddsGame = serde_json::from_value(json!({
            "home_team": "Arsenal", "away_team": "Wolverhampton Wanderers",
            "commence_time": "2024-08-17T14:00:00Z"
        }))
        .unwrap();
        assert!(parsed.bookmakers.is_empty());
    }

    #[test]
    fn test_kickoff_parsed_as_utc() {
        let parsed: OddsGame = serde_json::from_value(game()).unwrap();
        assert_eq!(parsed.commence_time.to_rfc3339(), "2024-08-16T19:00:00+00:00");
    }

    #[test]
    fn test_malformed_kickoff_rejected() {
        let mut raw = game();
        raw["commence_time"] = json!("TBD");
        assert!(serde_json::from_value::<OddsGame>(raw.clone()).is_err());
        assert!(serde_json::from_value::<OddsResponse>(json!([raw])).is_err());
    }

    #[test]
    fn test_unrelated_shape_rejected() {
        assert!(serde_json::from_value::<OddsResponse>(json!({"message": "quota"})).is_err());
    }
}
