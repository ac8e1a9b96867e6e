//! Session-scoped persistence of the player record.
//!
//! On the web this is `sessionStorage`, which lives exactly as long as the
//! browsing session. Desktop builds keep an in-process store with the same
//! lifetime semantics.

use crate::api::models::Track;
use crate::config::DEFAULT_VOLUME;
use crate::error::Result;
use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use crate::error::PlayerError;
#[cfg(target_arch = "wasm32")]
use web_sys::{window, Storage};
#[cfg(not(target_arch = "wasm32"))]
use once_cell::sync::Lazy;
#[cfg(not(target_arch = "wasm32"))]
use std::collections::HashMap;
#[cfg(not(target_arch = "wasm32"))]
use std::sync::Mutex;

#[cfg(not(target_arch = "wasm32"))]
static SESSION_STORE: Lazy<Mutex<HashMap<String, String>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Stored form of the player record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersistedPlayer {
    pub song: Option<Track>,
    pub current_time: f64,
    pub is_playing: bool,
    pub volume: f64,
    pub is_muted: bool,
    pub playlist: Vec<Track>,
    /// `-1` when the song was not started from a playlist.
    pub song_index: i64,
}

impl Default for PersistedPlayer {
    fn default() -> Self {
        Self {
            song: None,
            current_time: 0.0,
            is_playing: false,
            volume: DEFAULT_VOLUME,
            is_muted: false,
            playlist: Vec::new(),
            song_index: -1,
        }
    }
}

/// Blocked storage (sandboxed frames, privacy modes) surfaces as an error.
#[cfg(target_arch = "wasm32")]
fn session_storage() -> Result<Storage> {
    window()
        .ok_or_else(|| PlayerError::Storage("no window".to_string()))?
        .session_storage()
        .map_err(|e| PlayerError::Storage(format!("{e:?}")))?
        .ok_or_else(|| PlayerError::Storage("session storage unavailable".to_string()))
}

#[cfg(target_arch = "wasm32")]
pub fn save_player_state(key: &str, state: &PersistedPlayer) -> Result<()> {
    let json = serde_json::to_string(state)?;
    session_storage()?
        .set_item(key, &json)
        .map_err(|e| PlayerError::Storage(format!("{e:?}")))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_player_state(key: &str, state: &PersistedPlayer) -> Result<()> {
    let json = serde_json::to_string(state)?;
    SESSION_STORE
        .lock()
        .unwrap_or_else(|e| e.into_inner())
        .insert(key.to_string(), json);
    Ok(())
}

/// `Ok(None)` when nothing has been stored in this session yet.
#[cfg(target_arch = "wasm32")]
pub fn load_player_state(key: &str) -> Result<Option<PersistedPlayer>> {
    let raw = session_storage()?
        .get_item(key)
        .map_err(|e| PlayerError::Storage(format!("{e:?}")))?;
    match raw {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_player_state(key: &str) -> Result<Option<PersistedPlayer>> {
    let raw = SESSION_STORE
        .lock()
        .unwrap_or_else(|e| e.into_inner())
        .get(key)
        .cloned();
    match raw {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub(crate) fn put_raw(key: &str, raw: &str) {
    SESSION_STORE
        .lock()
        .unwrap_or_else(|e| e.into_inner())
        .insert(key.to_string(), raw.to_string());
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::error::PlayerError;

    fn track(id: &str) -> Track {
        Track {
            id: id.to_string(),
            title: "Title".to_string(),
            artist: "Artist".to_string(),
            cover_url: Some("cover.jpg".to_string()),
            audio_url: Some("song.mp3".to_string()),
            artist_photo_url: None,
        }
    }

    #[test]
    fn wire_format_uses_camel_case_keys() {
        let state = PersistedPlayer {
            song: Some(track("1")),
            current_time: 12.0,
            is_playing: true,
            volume: 0.5,
            is_muted: false,
            playlist: vec![track("1")],
            song_index: 0,
        };
        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value["currentTime"], 12.0);
        assert_eq!(value["isPlaying"], true);
        assert_eq!(value["songIndex"], 0);
        assert_eq!(value["song"]["audioUrl"], "song.mp3");
        assert_eq!(value["playlist"].as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let state: PersistedPlayer =
            serde_json::from_str(r#"{"song":{"id":"9","title":"x"},"isPlaying":true}"#).unwrap();
        assert_eq!(state.song_index, -1);
        assert_eq!(state.volume, DEFAULT_VOLUME);
        assert!(state.playlist.is_empty());
        assert!(state.is_playing);
    }

    #[test]
    fn session_store_round_trips() {
        let key = "test.round_trip";
        assert_eq!(load_player_state(key).unwrap(), None);

        let state = PersistedPlayer {
            song: Some(track("7")),
            current_time: 3.5,
            ..PersistedPlayer::default()
        };
        save_player_state(key, &state).unwrap();
        assert_eq!(load_player_state(key).unwrap(), Some(state));
    }

    #[test]
    fn corrupt_value_is_reported() {
        let key = "test.corrupt";
        put_raw(key, "{not json");
        assert!(matches!(
            load_player_state(key),
            Err(PlayerError::Serialization(_))
        ));
    }
}
