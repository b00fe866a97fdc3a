#![allow(dead_code)]

use chrono::{Duration, Local};
use serde_json::{json, Value};
use trello_lights::config::{Config, LifxConfig, TrelloConfig};
use trello_lights::domain::BreatheEffect;
use trello_lights::infrastructure::TrelloClient;
use trello_lights::services::{DueCardChecker, Orchestrator};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const BOARD_ID: &str = "board-1";
pub const LIST_ID: &str = "list-1";
pub const TRELLO_KEY: &str = "trello-key";
pub const TRELLO_TOKEN: &str = "trello-token";
pub const LIFX_KEY: &str = "lifx-key";
pub const SELECTOR: &str = "group:office";

pub fn test_config(trello_url: &str, lifx_url: &str) -> Config {
    Config {
        trello: TrelloConfig {
            api_key: TRELLO_KEY.into(),
            token: TRELLO_TOKEN.into(),
            board_id: BOARD_ID.into(),
            base_url: trello_url.into(),
        },
        lifx: LifxConfig {
            api_key: LIFX_KEY.into(),
            selector: SELECTOR.into(),
            base_url: lifx_url.into(),
            effect: BreatheEffect::default(),
        },
    }
}

pub fn orchestrator(trello: &MockServer, lifx: &MockServer) -> Orchestrator {
    Orchestrator::from_config(&test_config(&trello.uri(), &lifx.uri()), reqwest::Client::new())
}

pub fn checker(trello: &MockServer) -> DueCardChecker {
    let config = test_config(&trello.uri(), "http://127.0.0.1:9");
    DueCardChecker::new(
        TrelloClient::new(reqwest::Client::new(), &config.trello),
        BOARD_ID.into(),
    )
}

pub fn due_in_days(days: i64) -> String {
    (Local::now() + Duration::days(days)).to_rfc3339()
}

pub fn card(id: &str, name: &str, due: Option<String>, due_complete: bool) -> Value {
    json!({
        "id": id,
        "name": name,
        "due": due,
        "dueComplete": due_complete,
        "idList": LIST_ID,
    })
}

pub fn checklist(states: &[&str]) -> Value {
    let items: Vec<Value> = states
        .iter()
        .enumerate()
        .map(|(i, state)| json!({"id": format!("item-{i}"), "name": format!("step {i}"), "state": state}))
        .collect();
    json!({"id": "checklist-1", "name": "Steps", "checkItems": items})
}

pub async fn mount_board(trello: &MockServer) {
    Mock::given(method("GET"))
        .and(path(format!("/1/boards/{BOARD_ID}/lists")))
        .and(query_param("key", TRELLO_KEY))
        .and(query_param("token", TRELLO_TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": LIST_ID, "name": "Today"},
            {"id": "list-2", "name": "Later"}
        ])))
        .mount(trello)
        .await;
}

pub async fn mount_cards(trello: &MockServer, cards: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/1/lists/{LIST_ID}/cards")))
        .respond_with(ResponseTemplate::new(200).set_body_json(cards))
        .mount(trello)
        .await;
}

pub async fn mount_checklists(trello: &MockServer, card_id: &str, checklists: Value, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/1/cards/{card_id}/checklists")))
        .respond_with(ResponseTemplate::new(200).set_body_json(checklists))
        .expect(expected_calls)
        .mount(trello)
        .await;
}
