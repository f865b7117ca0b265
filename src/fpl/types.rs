use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};


/// Root of `bootstrap-static/`; only the parts the general scraper keeps.
#[derive(Debug, Clone, Deserialize)]
pub struct BootstrapStatic {
    pub teams: Vec<Team>,
    pub events: Vec<Event>,
    pub elements: Vec<Element>,
}

/// A Premier League club and its FPL strength ratings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Team {
    #[serde(skip_serializing)]
    pub id: u32,
    pub name: String,
    pub strength: u32,
    pub strength_overall_home: u32,
    pub strength_overall_away: u32,
    pub strength_attack_home: u32,
    pub strength_attack_away: u32,
    pub strength_defence_home: u32,
    pub strength_defence_away: u32,
}

/// A gameweek.
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    pub id: u32,
    pub deadline_time: String,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub finished: bool,
}

/// A player ("element" in FPL terms).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Element {
    pub id: u32,
    pub web_name: String,
    pub first_name: String,
    pub second_name: String,
    #[serde(rename(serialize = "team_id", deserialize = "team"))]
    pub team: u32,
    pub element_type: u32,
}

/// One fixture from `fixtures/`, trimmed to the fields we keep.
///
/// `event` is null for fixtures not yet assigned to a gameweek; scores and
/// kickoff are null until known.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Fixture {
    pub event: Option<u32>,
    pub finished: bool,
    pub id: u32,
    pub kickoff_time: Option<String>,
    pub team_a: u32,
    pub team_h: u32,
    pub team_a_difficulty: u32,
    pub team_h_difficulty: u32,
    pub team_a_score: Option<u32>,
    pub team_h_score: Option<u32>,
}

/// Root of `event/{gw}/live/`.
#[derive(Debug, Clone, Deserialize)]
pub struct EventLive {
    pub elements: Vec<LiveElement>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LiveElement {
    pub id: u32,
    pub stats: Map<String, Value>,
    #[serde(default)]
    pub explain: Vec<Explain>,
}

/// Points breakdown per fixture; only the fixture id is used.
#[derive(Debug, Clone, Deserialize)]
pub struct Explain {
    pub fixture: u32,
}

/// Root of `element-summary/{id}/`.
#[derive(Debug, Clone, Deserialize)]
pub struct ElementSummary {
    /// Per-match records for the current season, passed through untouched.
    pub history: Vec<Value>,
}
