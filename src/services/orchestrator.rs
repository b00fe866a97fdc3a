use chrono::NaiveDate;

use crate::config::Config;
use crate::domain::AlertError;
use crate::infrastructure::{LifxClient, TrelloClient};

use super::{AlertDispatcher, DueCardChecker};

pub struct Orchestrator {
    checker: DueCardChecker,
    dispatcher: AlertDispatcher,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    AllClear,
    Alerted {
        status: u16,
        incomplete: Vec<String>,
    },
    Failed {
        error: String,
    },
}

impl RunOutcome {
    pub fn message(&self) -> String {
        match self {
            RunOutcome::AllClear => "🚀 All checklists completed!".to_string(),
            RunOutcome::Alerted { .. } => "🚨 Checklists are incomplete!".to_string(),
            RunOutcome::Failed { error } => format!("Error: {error}"),
        }
    }

    pub fn is_success(&self) -> bool {
        !matches!(self, RunOutcome::Failed { .. })
    }
}

impl Orchestrator {
    pub fn new(checker: DueCardChecker, dispatcher: AlertDispatcher) -> Self {
        Self {
            checker,
            dispatcher,
        }
    }

    pub fn from_config(config: &Config, http_client: reqwest::Client) -> Self {
        let trello = TrelloClient::new(http_client.clone(), &config.trello);
        let lifx = LifxClient::new(http_client, &config.lifx);

        Self::new(
            DueCardChecker::new(trello, config.trello.board_id.clone()),
            AlertDispatcher::new(lifx, config.lifx.selector.clone(), config.lifx.effect.clone()),
        )
    }

    /// Runs one check-and-notify pass. Errors never escape: they are logged
    /// and reported as [`RunOutcome::Failed`], and no alert is sent when the
    /// check itself failed.
    pub async fn run(&self, today: NaiveDate) -> RunOutcome {
        match self.try_run(today).await {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::error!(error = %err, "Checklist run failed");
                RunOutcome::Failed {
                    error: err.to_string(),
                }
            }
        }
    }

    async fn try_run(&self, today: NaiveDate) -> Result<RunOutcome, AlertError> {
        let report = self.checker.check(today).await?;

        if report.all_clear() {
            tracing::info!(due_cards = report.due_cards, "All due checklists complete");
            return Ok(RunOutcome::AllClear);
        }

        tracing::info!(
            due_cards = report.due_cards,
            incomplete = report.incomplete.len(),
            "Due cards have incomplete checklists"
        );

        let status = self.dispatcher.dispatch().await?;

        Ok(RunOutcome::Alerted {
            status,
            incomplete: report.incomplete.into_iter().map(|card| card.name).collect(),
        })
    }
}
