use shared::RevealConfig;
use web_sys::window;

pub const BRAND: &str = "KC2DROP";
pub const CURRENCY: &str = "$";
pub const STARTING_BALANCE: f64 = 1000.0;
pub const QUICK_TOP_UPS: [f64; 3] = [500.0, 1000.0, 2000.0];
pub const NOTICE_TIMEOUT_MS: u32 = 3000;

/// Delay between mounting the reel and starting the launch transition, so
/// the browser paints the start position first.
pub const REEL_MOUNT_DELAY_MS: u32 = 20;

/// localStorage key holding a partial `RevealConfig` as JSON.
pub const REVEAL_CONFIG_KEY: &str = "reveal_config";

const FALLBACK_VIEWPORT_WIDTH: f64 = 1280.0;

/// Reveal tunables, with any override stored under `REVEAL_CONFIG_KEY`
/// applied on top of the defaults.
pub fn reveal_config() -> RevealConfig {
    let stored = window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(REVEAL_CONFIG_KEY).ok().flatten());
    reveal_config_from(stored.as_deref())
}

pub fn reveal_config_from(raw: Option<&str>) -> RevealConfig {
    let config = match raw {
        Some(json) => RevealConfig::from_json(json).unwrap_or_else(|err| {
            log::warn!("Ignoring stored reveal config: {}", err);
            RevealConfig::default()
        }),
        None => RevealConfig::default(),
    };
    log::debug!(
        "Reveal config: {} items, {}ms per reveal",
        config.pool_size,
        config.total_reveal_ms()
    );
    config
}

/// Width the reel is centred against. The reel spans the full window.
pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT_WIDTH)
}

pub fn format_amount(amount: f64) -> String {
    format!("{}{:.0}", CURRENCY, amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_uses_dollar_prefix() {
        assert_eq!(format_amount(1000.0), "$1000");
        assert_eq!(format_amount(499.0), "$499");
        assert_eq!(format_amount(12.4), "$12");
    }

    #[test]
    fn test_reveal_config_without_override() {
        assert_eq!(reveal_config_from(None), RevealConfig::default());
    }

    #[test]
    fn test_reveal_config_applies_override() {
        let config = reveal_config_from(Some(r#"{"settle_duration_ms": 2000}"#));
        assert_eq!(config.settle_duration_ms, 2000);
        assert_eq!(config.pool_size, RevealConfig::default().pool_size);
        assert_eq!(config.total_reveal_ms(), 3000);
    }

    #[test]
    fn test_reveal_config_ignores_malformed_override() {
        assert_eq!(reveal_config_from(Some("not json")), RevealConfig::default());
    }
}
