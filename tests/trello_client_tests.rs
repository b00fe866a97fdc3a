mod common;

use serde_json::json;
use trello_lights::domain::AlertError;
use trello_lights::infrastructure::TrelloClient;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> TrelloClient {
    let config = common::test_config(&server.uri(), "http://127.0.0.1:9");
    TrelloClient::new(reqwest::Client::new(), &config.trello)
}

#[tokio::test]
async fn test_primary_list_is_first_list() {
    let server = MockServer::start().await;
    common::mount_board(&server).await;

    let list_id = client(&server)
        .primary_list_id(common::BOARD_ID)
        .await
        .unwrap();

    assert_eq!(list_id, common::LIST_ID);
}

#[tokio::test]
async fn test_board_without_lists_is_missing_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/1/boards/{}/lists", common::BOARD_ID)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let err = client(&server)
        .primary_list_id(common::BOARD_ID)
        .await
        .unwrap_err();

    assert!(matches!(err, AlertError::MissingData(_)));
}

#[tokio::test]
async fn test_unauthorized_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/1/lists/{}/cards", common::LIST_ID)))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid token"))
        .mount(&server)
        .await;

    let err = client(&server).list_cards(common::LIST_ID).await.unwrap_err();

    match err {
        AlertError::Api { service, status } => {
            assert_eq!(service, "trello");
            assert_eq!(status.as_u16(), 401);
        }
        other => panic!("expected api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_cards_missing_required_field_fail_to_decode() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/1/lists/{}/cards", common::LIST_ID)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"name": "no id"}])))
        .mount(&server)
        .await;

    let err = client(&server).list_cards(common::LIST_ID).await.unwrap_err();

    assert!(matches!(err, AlertError::Http(_)));
    assert!(!err.to_string().contains(common::TRELLO_TOKEN));
}

#[tokio::test]
async fn test_checklists_are_decoded() {
    let server = MockServer::start().await;
    common::mount_checklists(
        &server,
        "c1",
        json!([common::checklist(&["complete", "incomplete"])]),
        1,
    )
    .await;

    let checklists = client(&server).card_checklists("c1").await.unwrap();

    assert_eq!(checklists.len(), 1);
    assert_eq!(checklists[0].check_items.len(), 2);
    assert!(!checklists[0].is_complete());
}
