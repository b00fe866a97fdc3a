use crate::domain::{AlertError, BreatheEffect};
use crate::infrastructure::LifxClient;

pub struct AlertDispatcher {
    lifx: LifxClient,
    selector: String,
    effect: BreatheEffect,
}

impl AlertDispatcher {
    pub fn new(lifx: LifxClient, selector: String, effect: BreatheEffect) -> Self {
        Self {
            lifx,
            selector,
            effect,
        }
    }

    /// Fires one breathe effect and returns the status code LIFX answered
    /// with. Whether the lights actually flashed is not checked.
    pub async fn dispatch(&self) -> Result<u16, AlertError> {
        tracing::info!(
            selector = self.selector.as_str(),
            color = self.effect.color.as_str(),
            cycles = self.effect.cycles,
            "Flashing lights"
        );

        let status = self.lifx.breathe(&self.selector, &self.effect).await?;

        if !status.is_success() {
            tracing::warn!(
                selector = self.selector.as_str(),
                status = %status,
                "LIFX returned non-success status"
            );
        }

        Ok(status.as_u16())
    }
}
