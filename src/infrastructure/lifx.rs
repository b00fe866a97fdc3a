use reqwest::{StatusCode, Url};

use crate::config::LifxConfig;
use crate::domain::{AlertError, BreatheEffect};

pub struct LifxClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl LifxClient {
    pub fn new(http_client: reqwest::Client, config: &LifxConfig) -> Self {
        Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    /// Starts a breathe effect on every light matched by `selector`.
    ///
    /// The status code is handed back as-is; only transport failures are
    /// errors.
    pub async fn breathe(
        &self,
        selector: &str,
        effect: &BreatheEffect,
    ) -> Result<StatusCode, AlertError> {
        let url = self.breathe_url(selector)?;

        let response = self
            .http_client
            .post(url)
            .bearer_auth(&self.api_key)
            .form(effect)
            .send()
            .await?;

        Ok(response.status())
    }

    /// Selectors such as `label:Desk #2` may carry characters that would end
    /// the path, so the selector goes in as a single escaped segment.
    fn breathe_url(&self, selector: &str) -> Result<Url, AlertError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| AlertError::Config(format!("invalid LIFX_API_URL: {e}")))?;

        url.path_segments_mut()
            .map_err(|_| AlertError::Config("LIFX_API_URL must be an http(s) URL".into()))?
            .pop_if_empty()
            .extend(["v1", "lights", selector, "effects", "breathe"]);

        Ok(url)
    }
}
