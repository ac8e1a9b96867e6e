//! HTTP calls against the music backend.

use crate::api::models::*;
use crate::error::{PlayerError, Result};
use once_cell::sync::Lazy;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

const RECENTLY_PLAYED_PATH: &str = "/api/recently-played";
const SONGS_PATH: &str = "/api/songs";

#[derive(Debug, Clone, PartialEq)]
pub struct MusicClient {
    base_url: String,
}

impl MusicClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Record that `track` started playing for the signed-in user.
    pub async fn record_recently_played(&self, track: &Track) -> Result<()> {
        let response = HTTP_CLIENT
            .post(self.endpoint(RECENTLY_PLAYED_PATH))
            .json(&RecentPlay::from(track))
            .send()
            .await?;
        ensure_success(response.status())
    }

    pub async fn get_recently_played(&self) -> Result<Vec<RecentlyPlayedEntry>> {
        let response = HTTP_CLIENT
            .get(self.endpoint(RECENTLY_PLAYED_PATH))
            .send()
            .await?;
        ensure_success(response.status())?;
        Ok(response.json().await?)
    }

    pub async fn get_songs(&self) -> Result<Vec<Track>> {
        let response = HTTP_CLIENT.get(self.endpoint(SONGS_PATH)).send().await?;
        ensure_success(response.status())?;
        Ok(response.json().await?)
    }
}

fn ensure_success(status: reqwest::StatusCode) -> Result<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(PlayerError::Status(status.as_u16()))
    }
}
