//! Player configuration.

use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use dioxus::logger::tracing::warn;

pub const DEFAULT_VOLUME: f64 = 0.7;

#[cfg(target_arch = "wasm32")]
const CONFIG_KEY: &str = "sharedplayer.config";
#[cfg(not(target_arch = "wasm32"))]
const API_BASE_ENV: &str = "SHARED_PLAYER_API_BASE";
#[cfg(not(target_arch = "wasm32"))]
const NATIVE_API_BASE: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Session storage key holding the player record.
    pub storage_key: String,
    pub save_interval_ms: u32,
    pub default_volume: f64,
    /// Backend origin. Falls back to the page origin on the web.
    pub api_base_url: Option<String>,
    /// Report started tracks to `/api/recently-played`.
    pub record_history: bool,
    pub notice_timeout_ms: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            storage_key: "sharedPlayerState".to_string(),
            save_interval_ms: 2000,
            default_volume: DEFAULT_VOLUME,
            api_base_url: None,
            record_history: true,
            notice_timeout_ms: 4000,
        }
    }
}

impl PlayerConfig {
    pub fn api_base(&self) -> String {
        self.api_base_url
            .clone()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(fallback_api_base)
    }
}

#[cfg(target_arch = "wasm32")]
fn fallback_api_base() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn fallback_api_base() -> String {
    NATIVE_API_BASE.to_string()
}

#[cfg(target_arch = "wasm32")]
pub fn load_config() -> PlayerConfig {
    let raw = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(CONFIG_KEY).ok().flatten());
    let Some(raw) = raw else {
        return PlayerConfig::default();
    };
    serde_json::from_str(&raw).unwrap_or_else(|err| {
        warn!("Ignoring stored player config: {err}");
        PlayerConfig::default()
    })
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_config() -> PlayerConfig {
    let mut config = PlayerConfig::default();
    if let Ok(base) = std::env::var(API_BASE_ENV) {
        config.api_base_url = Some(base);
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_page_contract() {
        let config = PlayerConfig::default();
        assert_eq!(config.storage_key, "sharedPlayerState");
        assert_eq!(config.save_interval_ms, 2000);
        assert_eq!(config.default_volume, 0.7);
        assert!(config.record_history);
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config: PlayerConfig =
            serde_json::from_str(r#"{"api_base_url":"https://music.example"}"#).unwrap();
        assert_eq!(config.api_base(), "https://music.example");
        assert_eq!(config.save_interval_ms, 2000);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn blank_base_falls_back() {
        let config = PlayerConfig {
            api_base_url: Some("  ".to_string()),
            ..PlayerConfig::default()
        };
        assert_eq!(config.api_base(), NATIVE_API_BASE);
    }
}
