use std::fmt;

use serde::Deserialize;

/// Trello reports `complete` or `incomplete`; anything that is not `complete`
/// counts as outstanding work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum CheckState {
    Complete,
    Incomplete,
}

impl CheckState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckState::Complete => "complete",
            CheckState::Incomplete => "incomplete",
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, CheckState::Complete)
    }
}

impl fmt::Display for CheckState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for CheckState {
    fn from(s: &str) -> Self {
        match s {
            "complete" => CheckState::Complete,
            _ => CheckState::Incomplete,
        }
    }
}

impl From<String> for CheckState {
    fn from(s: String) -> Self {
        CheckState::from(s.as_str())
    }
}
