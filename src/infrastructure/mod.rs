pub mod lifx;
pub mod trello;

pub use lifx::LifxClient;
pub use trello::{TrelloClient, PRIMARY_LIST_INDEX};
