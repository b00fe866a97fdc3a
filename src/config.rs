use std::fmt;

use crate::domain::{AlertError, BreatheEffect};

pub const DEFAULT_TRELLO_URL: &str = "https://api.trello.com";
pub const DEFAULT_LIFX_URL: &str = "https://api.lifx.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub trello: TrelloConfig,
    pub lifx: LifxConfig,
}

#[derive(Clone)]
pub struct TrelloConfig {
    pub api_key: String,
    pub token: String,
    pub board_id: String,
    pub base_url: String,
}

#[derive(Clone)]
pub struct LifxConfig {
    pub api_key: String,
    pub selector: String,
    pub base_url: String,
    pub effect: BreatheEffect,
}

impl Config {
    pub fn from_env() -> Result<Self, AlertError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Required keys must be present
    /// and non-blank; optional ones fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AlertError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String, AlertError> {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| AlertError::Config(format!("{key} is not set")))
        };
        let optional = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let trello = TrelloConfig {
            api_key: required("TRELLO_API_KEY")?,
            token: required("TRELLO_TOKEN")?,
            board_id: required("TRELLO_BOARD_ID")?,
            base_url: optional("TRELLO_API_URL").unwrap_or_else(|| DEFAULT_TRELLO_URL.into()),
        };

        let mut effect = BreatheEffect::default();
        if let Some(from_color) = optional("LIFX_FROM_COLOR") {
            effect.from_color = from_color;
        }
        if let Some(color) = optional("LIFX_COLOR") {
            effect.color = color;
        }
        if let Some(raw) = optional("LIFX_PERIOD") {
            effect.period = raw
                .parse::<f64>()
                .ok()
                .filter(|p| p.is_finite() && *p > 0.0)
                .ok_or_else(|| {
                    AlertError::Config(format!("LIFX_PERIOD must be a positive number, got {raw:?}"))
                })?;
        }
        if let Some(raw) = optional("LIFX_CYCLES") {
            effect.cycles = raw.parse::<u32>().ok().filter(|c| *c > 0).ok_or_else(|| {
                AlertError::Config(format!("LIFX_CYCLES must be a positive integer, got {raw:?}"))
            })?;
        }

        let lifx = LifxConfig {
            api_key: required("LIFX_API_KEY")?,
            selector: required("LIFX_SELECTOR")?,
            base_url: optional("LIFX_API_URL").unwrap_or_else(|| DEFAULT_LIFX_URL.into()),
            effect,
        };

        Ok(Self { trello, lifx })
    }
}

impl fmt::Debug for TrelloConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrelloConfig")
            .field("api_key", &"<redacted>")
            .field("token", &"<redacted>")
            .field("board_id", &self.board_id)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl fmt::Debug for LifxConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LifxConfig")
            .field("api_key", &"<redacted>")
            .field("selector", &self.selector)
            .field("base_url", &self.base_url)
            .field("effect", &self.effect)
            .finish()
    }
}
