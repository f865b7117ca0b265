//! General season info: teams, gameweek deadlines, players, current gameweek.

use async_trait::async_trait;
use serde_json::{json, Map, Value};
use tracing::info;

use crate::{
    cli::types::{Gameweek, PlayerId, ScraperKind},
    config::Settings,
    error::ScraplError,
    scraper::{CategoryData, ScrapedData, Scraper},
    Result,
};

use super::{
    http::FplClient,
    types::{BootstrapStatic, Element, Event, Team},
};

pub const TEAM_MAP: &str = "team_map";
pub const GW_DEADLINES: &str = "gw_deadlines";
pub const ELEMENT_MAP: &str = "element_map";
pub const CURRENT_GAMEWEEK: &str = "current_gameweek";

pub struct GeneralScraper {
    client: FplClient,
}

impl GeneralScraper {
    pub fn new(settings: &Settings) -> Result<Self> {
        Ok(Self {
            client: FplClient::new(settings)?,
        })
    }
}

#[async_trait]
impl Scraper for GeneralScraper {
    fn category(&self) -> &str {
        ScraperKind::General.as_str()
    }

    async fn scrape(&self, _available: &ScrapedData) -> Result<CategoryData> {
        let bootstrap = self.client.bootstrap_static().await?;
        info!(
            teams = bootstrap.teams.len(),
            gameweeks = bootstrap.events.len(),
            players = bootstrap.elements.len(),
            "scraped general info"
        );
        general_category(&bootstrap)
    }
}

/// Split `bootstrap-static` into the general sub-types.
///
/// Each map sub-type holds a single object keyed by id.
pub fn general_category(bootstrap: &BootstrapStatic) -> Result<CategoryData> {
    let mut data = CategoryData::new();
    data.insert(TEAM_MAP.to_string(), vec![team_map(&bootstrap.teams)?]);
    data.insert(GW_DEADLINES.to_string(), vec![gw_deadlines(&bootstrap.events)]);
    data.insert(ELEMENT_MAP.to_string(), vec![element_map(&bootstrap.elements)?]);
    data.insert(
        CURRENT_GAMEWEEK.to_string(),
        current_gameweek(&bootstrap.events)
            .map(|gw| json!({ "id": gw.as_u32() }))
            .into_iter()
            .collect(),
    );
    Ok(data)
}

pub fn team_map(teams: &[Team]) -> Result<Value> {
    let mut map = Map::new();
    for team in teams {
        map.insert(team.id.to_string(), serde_json::to_value(team)?);
    }
    Ok(Value::Object(map))
}

pub fn gw_deadlines(events: &[Event]) -> Value {
    let map: Map<String, Value> = events
        .iter()
        .map(|e| (e.id.to_string(), Value::String(e.deadline_time.clone())))
        .collect();
    Value::Object(map)
}

pub fn element_map(elements: &[Element]) -> Result<Value> {
    let mut map = Map::new();
    for el in elements {
        map.insert(el.id.to_string(), serde_json::to_value(el)?);
    }
    Ok(Value::Object(map))
}

/// The gameweek FPL flags as current; `None` before the season starts.
pub fn current_gameweek(events: &[Event]) -> Option<Gameweek> {
    events
        .iter()
        .find(|e| e.is_current)
        .map(|e| Gameweek::new(e.id))
}

fn general_output<'a>(
    available: &'a ScrapedData,
    sub_type: &str,
    dependent: ScraperKind,
) -> Result<&'a [Value]> {
    available
        .records(ScraperKind::General.as_str(), sub_type)
        .ok_or_else(|| ScraplError::MissingDependency {
            scraper: dependent.as_str().to_string(),
            dependency: ScraperKind::General.as_str().to_string(),
        })
}

/// Every element id listed by a previous `general` run, ascending.
pub fn element_ids(available: &ScrapedData) -> Result<Vec<PlayerId>> {
    let records = general_output(available, ELEMENT_MAP, ScraperKind::Player)?;

    let mut ids = Vec::new();
    for record in records {
        let map = record
            .as_object()
            .ok_or_else(|| ScraplError::shape("element_map record is not an object"))?;
        for key in map.keys() {
            let id = key
                .parse::<u32>()
                .map_err(|_| ScraplError::shape(format!("element_map key '{key}' is not an id")))?;
            ids.push(PlayerId::new(id));
        }
    }
    ids.sort();
    ids.dedup();
    Ok(ids)
}

/// The current gameweek recorded by a previous `general` run.
pub fn recorded_current_gameweek(available: &ScrapedData) -> Result<Option<Gameweek>> {
    let records = general_output(available, CURRENT_GAMEWEEK, ScraperKind::Gameweek)?;
    match records.first() {
        None => Ok(None),
        Some(record) => {
            let id = record
                .get("id")
                .and_then(Value::as_u64)
                .ok_or_else(|| ScraplError::shape("current_gameweek record has no numeric id"))?;
            let id = u32::try_from(id).map_err(|_| {
                ScraplError::shape(format!("current_gameweek id {id} is out of range"))
            })?;
            Ok(Some(Gameweek::new(id)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scraper::data::single;

    fn bootstrap() -> BootstrapStatic {
        serde_json::from_value(json!({
            "teams": [
                {"id": 1, "name": "Arsenal", "strength": 4,
                 "strength_overall_home": 1300, "strength_overall_away": 1340,
                 "strength_attack_home": 1290, "strength_attack_away": 1350,
                 "strength_defence_home": 1310, "strength_defence_away": 1330},
                {"id": 2, "name": "Aston Villa", "strength": 3,
                 "strength_overall_home": 1150, "strength_overall_away": 1200,
                 "strength_attack_home": 1140, "strength_attack_away": 1190,
                 "strength_defence_home": 1160, "strength_defence_away": 1210}
            ],
            "events": [
                {"id": 1, "deadline_time": "2024-08-16T17:30:00Z", "is_current": false, "finished": true},
                {"id": 2, "deadline_time": "2024-08-24T10:00:00Z", "is_current": true, "finished": false},
                {"id": 3, "deadline_time": "2024-08-31T10:00:00Z", "is_current": false, "finished": false}
            ],
            "elements": [
                {"id": 7, "web_name": "Saka", "first_name": "Bukayo", "second_name": "Saka", "team": 1, "element_type": 3},
                {"id": 1, "web_name": "Fábio Vieira", "first_name": "Fábio", "second_name": "Ferreira Vieira", "team": 1, "element_type": 3}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_team_map_keyed_by_id() {
        let map = team_map(&bootstrap().teams).unwrap();
        assert_eq!(map["1"]["name"], json!("Arsenal"));
        assert_eq!(map["2"]["strength_attack_away"], json!(1190));
        assert_eq!(map.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_gw_deadlines() {
        let deadlines = gw_deadlines(&bootstrap().events);
        assert_eq!(deadlines["1"], json!("2024-08-16T17:30:00Z"));
        assert_eq!(deadlines.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_element_map_fields() {
        let map = element_map(&bootstrap().elements).unwrap();
        assert_eq!(
            map["1"],
            json!({
                "id": 1, "web_name": "Fábio Vieira", "first_name": "Fábio",
                "second_name": "Ferreira Vieira", "team_id": 1, "element_type": 3
            })
        );
    }

    #[test]
    fn test_current_gameweek() {
        assert_eq!(current_gameweek(&bootstrap().events), Some(Gameweek::new(2)));
        assert_eq!(current_gameweek(&[]), None);
    }

    #[test]
    fn test_general_category_sub_types() {
        let data = general_category(&bootstrap()).unwrap();
        let keys: Vec<&str> = data.keys().map(String::as_str).collect();
        assert_eq!(keys, vec![CURRENT_GAMEWEEK, ELEMENT_MAP, GW_DEADLINES, TEAM_MAP]);
        assert_eq!(data[CURRENT_GAMEWEEK], vec![json!({"id": 2})]);
    }

    #[test]
    fn test_element_ids_sorted_from_general_output() {
        let mut available = ScrapedData::new();
        available.merge("general", general_category(&bootstrap()).unwrap());

        let ids = element_ids(&available).unwrap();
        assert_eq!(ids, vec![PlayerId::new(1), PlayerId::new(7)]);
        assert_eq!(
            recorded_current_gameweek(&available).unwrap(),
            Some(Gameweek::new(2))
        );
    }

    #[test]
    fn test_element_ids_without_general_is_missing_dependency() {
        match element_ids(&ScrapedData::new()) {
            Err(ScraplError::MissingDependency { scraper, dependency }) => {
                assert_eq!(scraper, "player");
                assert_eq!(dependency, "general");
            }
            other => panic!("Expected MissingDependency, got {other:?}"),
        }
    }

    #[test]
    fn test_element_ids_rejects_malformed_keys() {
        let mut available = ScrapedData::new();
        available.merge("general", single(ELEMENT_MAP, vec![json!({"abc": {}})]));
        assert!(matches!(
            element_ids(&available),
            Err(ScraplError::UnexpectedShape { .. })
        ));
    }

    #[test]
    fn test_preseason_has_no_recorded_gameweek() {
        let mut available = ScrapedData::new();
        available.merge("general", single(CURRENT_GAMEWEEK, vec![]));
        assert_eq!(recorded_current_gameweek(&available).unwrap(), None);
    }

    #[test]
    fn test_oversized_gameweek_id_is_shape_error() {
        let mut available = ScrapedData::new();
        available.merge(
            "general",
            single(CURRENT_GAMEWEEK, vec![json!({"id": u64::from(u32::MAX) + 2})]),
        );
        match recorded_current_gameweek(&available) {
            Err(ScraplError::UnexpectedShape { context }) => {
                assert!(context.contains("out of range"));
            }
            other => panic!("Expected UnexpectedShape, got {other:?}"),
        }
    }
}
