use serde::{Serialize, Deserialize};

pub const DEFAULT_POOL_SIZE: usize = 20;
pub const ITEM_SPAN_PX: f64 = 180.0; // tile width + gap
pub const LAUNCH_OFFSET_PX: f64 = 500.0;
pub const LAUNCH_DURATION_MS: u32 = 500;
pub const SETTLE_DURATION_MS: u32 = 5000;
pub const RESULT_GRACE_MS: u32 = 500;
pub const LAUNCH_EASING: &str = "ease-in";
pub const SETTLE_EASING: &str = "cubic-bezier(0.2, 0.7, 0.3, 1)";

/// Tunables for pool generation and the reveal animation.
///
/// Every field has a default, so a partial JSON object is a valid override.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RevealConfig {
    pub pool_size: usize,
    pub item_span_px: f64,
    pub launch_offset_px: f64,
    pub launch_duration_ms: u32,
    pub settle_duration_ms: u32,
    pub result_grace_ms: u32,
    pub launch_easing: String,
    pub settle_easing: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            pool_size: DEFAULT_POOL_SIZE,
            item_span_px: ITEM_SPAN_PX,
            launch_offset_px: LAUNCH_OFFSET_PX,
            launch_duration_ms: LAUNCH_DURATION_MS,
            settle_duration_ms: SETTLE_DURATION_MS,
            result_grace_ms: RESULT_GRACE_MS,
            launch_easing: LAUNCH_EASING.to_string(),
            settle_easing: SETTLE_EASING.to_string(),
        }
    }
}

impl RevealConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut config: Self = serde_json::from_str(json)?;
        // An empty pool has no middle copy to stop in
        if config.pool_size == 0 {
            log::warn!("pool_size 0 in config override, using {}", DEFAULT_POOL_SIZE);
            config.pool_size = DEFAULT_POOL_SIZE;
        }
        Ok(config)
    }

    /// Time from the spin click until the result view is shown.
    pub fn total_reveal_ms(&self) -> u32 {
        self.launch_duration_ms + self.settle_duration_ms + self.result_grace_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = RevealConfig::from_json(r#"{"pool_size": 30, "settle_duration_ms": 3000}"#).unwrap();
        assert_eq!(config.pool_size, 30);
        assert_eq!(config.settle_duration_ms, 3000);
        assert_eq!(config.item_span_px, ITEM_SPAN_PX);
        assert_eq!(config.launch_easing, LAUNCH_EASING);
    }

    #[test]
    fn test_zero_pool_size_falls_back() {
        let config = RevealConfig::from_json(r#"{"pool_size": 0}"#).unwrap();
        assert_eq!(config.pool_size, DEFAULT_POOL_SIZE);
    }

    #[test]
    fn test_total_reveal_time() {
        assert_eq!(RevealConfig::default().total_reveal_ms(), 6000);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(RevealConfig::from_json("{pool_size:").is_err());
    }
}
