use serde::Serialize;

pub const DEFAULT_FROM_COLOR: &str = "white";
pub const DEFAULT_COLOR: &str = "#4952ac";
pub const DEFAULT_PERIOD_SECS: f64 = 0.7;
pub const DEFAULT_CYCLES: u32 = 7;

/// Parameters of the LIFX breathe effect, serialized as the form body of the
/// request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreatheEffect {
    pub from_color: String,
    pub color: String,
    pub period: f64,
    pub cycles: u32,
}

impl Default for BreatheEffect {
    fn default() -> Self {
        Self {
            from_color: DEFAULT_FROM_COLOR.into(),
            color: DEFAULT_COLOR.into(),
            period: DEFAULT_PERIOD_SECS,
            cycles: DEFAULT_CYCLES,
        }
    }
}
