use chrono::{DateTime, Local, NaiveDate};
use serde::Deserialize;

use super::CheckState;

#[derive(Debug, Clone, Deserialize)]
pub struct BoardList {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Card {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub due: Option<String>,
    #[serde(rename = "dueComplete", default)]
    pub due_complete: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Checklist {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "checkItems", default)]
    pub check_items: Vec<CheckItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckItem {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub state: CheckState,
}

impl Card {
    /// Calendar date the card is due, in local time.
    ///
    /// Accepts RFC 3339 timestamps (what Trello sends) and bare `YYYY-MM-DD`
    /// dates. Anything else yields `None` so the card is never considered due.
    pub fn due_date(&self) -> Option<NaiveDate> {
        let raw = self.due.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }

        if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
            return Some(timestamp.with_timezone(&Local).date_naive());
        }

        match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(err) => {
                tracing::warn!(
                    card_id = self.id.as_str(),
                    due = raw,
                    error = %err,
                    "Unparseable due date; treating card as not due"
                );
                None
            }
        }
    }

    /// Overdue or due on `today`, and not already marked done.
    pub fn is_due_by(&self, today: NaiveDate) -> bool {
        !self.due_complete && self.due_date().is_some_and(|due| due <= today)
    }
}

impl Checklist {
    pub fn is_complete(&self) -> bool {
        self.check_items.iter().all(|item| item.state.is_complete())
    }
}
