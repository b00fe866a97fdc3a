use chrono::NaiveDate;

use crate::domain::{AlertError, Card, Checklist};
use crate::infrastructure::TrelloClient;

pub struct DueCardChecker {
    trello: TrelloClient,
    board_id: String,
}

#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    pub due_cards: usize,
    pub incomplete: Vec<Card>,
}

impl CheckReport {
    /// True when no due card has outstanding checklist items, including the
    /// case where nothing is due at all.
    pub fn all_clear(&self) -> bool {
        self.incomplete.is_empty()
    }
}

impl DueCardChecker {
    pub fn new(trello: TrelloClient, board_id: String) -> Self {
        Self { trello, board_id }
    }

    pub async fn check(&self, today: NaiveDate) -> Result<CheckReport, AlertError> {
        let list_id = self.trello.primary_list_id(&self.board_id).await?;
        let cards = self.trello.list_cards(&list_id).await?;
        let total = cards.len();

        let due = Self::due_cards(cards, today);
        tracing::debug!(
            list_id = list_id.as_str(),
            total = total,
            due = due.len(),
            "Filtered cards due by today"
        );

        let mut report = CheckReport {
            due_cards: due.len(),
            incomplete: Vec::new(),
        };

        for card in due {
            let checklists = self.trello.card_checklists(&card.id).await?;

            if Self::checklists_satisfied(&checklists) {
                tracing::debug!(card_id = card.id.as_str(), "Card checklists complete");
            } else {
                tracing::info!(
                    card_id = card.id.as_str(),
                    card_name = card.name.as_str(),
                    "[{}] card is incomplete!",
                    card.name
                );
                for item in checklists
                    .iter()
                    .flat_map(|checklist| &checklist.check_items)
                    .filter(|item| !item.state.is_complete())
                {
                    tracing::debug!(
                        card_id = card.id.as_str(),
                        item = item.name.as_str(),
                        state = %item.state,
                        "Outstanding check item"
                    );
                }
                report.incomplete.push(card);
            }
        }

        Ok(report)
    }

    pub async fn all_checklists_complete(&self, today: NaiveDate) -> Result<bool, AlertError> {
        Ok(self.check(today).await?.all_clear())
    }

    pub fn due_cards(cards: Vec<Card>, today: NaiveDate) -> Vec<Card> {
        cards
            .into_iter()
            .filter(|card| card.is_due_by(today))
            .collect()
    }

    pub fn checklists_satisfied(checklists: &[Checklist]) -> bool {
        checklists.iter().all(Checklist::is_complete)
    }
}
