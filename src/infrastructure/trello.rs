use serde::de::DeserializeOwned;

use crate::config::TrelloConfig;
use crate::domain::{AlertError, BoardList, Card, Checklist};

/// Position of the list we watch in the board's list ordering. Trello decides
/// the ordering; we only rely on it being stable between runs.
pub const PRIMARY_LIST_INDEX: usize = 0;

pub struct TrelloClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
    token: String,
}

impl TrelloClient {
    pub fn new(http_client: reqwest::Client, config: &TrelloConfig) -> Self {
        Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            token: config.token.clone(),
        }
    }

    pub async fn board_lists(&self, board_id: &str) -> Result<Vec<BoardList>, AlertError> {
        self.get_json(&format!("boards/{board_id}/lists")).await
    }

    pub async fn primary_list_id(&self, board_id: &str) -> Result<String, AlertError> {
        let lists = self.board_lists(board_id).await?;

        lists
            .into_iter()
            .nth(PRIMARY_LIST_INDEX)
            .map(|list| {
                tracing::debug!(
                    board_id = board_id,
                    list_id = list.id.as_str(),
                    list_name = list.name.as_str(),
                    "Resolved primary list"
                );
                list.id
            })
            .ok_or_else(|| AlertError::MissingData(format!("board {board_id} has no lists")))
    }

    pub async fn list_cards(&self, list_id: &str) -> Result<Vec<Card>, AlertError> {
        self.get_json(&format!("lists/{list_id}/cards")).await
    }

    pub async fn card_checklists(&self, card_id: &str) -> Result<Vec<Checklist>, AlertError> {
        self.get_json(&format!("cards/{card_id}/checklists")).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AlertError> {
        let url = format!("{}/1/{}", self.base_url, path);

        // Credentials travel in the query string, so strip the URL from any
        // transport error before it can reach a log line.
        let response = self
            .http_client
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("token", self.token.as_str())])
            .send()
            .await
            .map_err(|e| AlertError::Http(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(path = path, status = %status, "Trello returned non-success status");
            return Err(AlertError::Api {
                service: "trello",
                status,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AlertError::Http(e.without_url()))
    }
}
