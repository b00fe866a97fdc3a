pub mod card;
pub mod check_state;
pub mod effect;
pub mod error;

pub use card::{BoardList, Card, CheckItem, Checklist};
pub use check_state::CheckState;
pub use effect::BreatheEffect;
pub use error::AlertError;
