pub mod alert_dispatcher;
pub mod due_card_checker;
pub mod orchestrator;

pub use alert_dispatcher::AlertDispatcher;
pub use due_card_checker::{CheckReport, DueCardChecker};
pub use orchestrator::{Orchestrator, RunOutcome};
