use serde::{Deserialize, Serialize};

/// A playable track as the player and the backend exchange it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    #[serde(default, alias = "_id", alias = "songId")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default, alias = "img")]
    pub cover_url: Option<String>,
    #[serde(default, alias = "audio_url")]
    pub audio_url: Option<String>,
    #[serde(default)]
    pub artist_photo_url: Option<String>,
}

impl Track {
    /// The audio URL, if it is usable.
    pub fn source(&self) -> Option<&str> {
        self.audio_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    pub fn artwork(&self) -> &str {
        self.cover_url.as_deref().unwrap_or_default()
    }
}

/// Body of `POST /api/recently-played`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentPlay {
    pub song_id: String,
    pub title: String,
    pub artist: String,
    pub cover_url: String,
    pub audio_url: String,
    pub artist_photo_url: String,
}

impl From<&Track> for RecentPlay {
    fn from(track: &Track) -> Self {
        Self {
            song_id: track.id.clone(),
            title: track.title.clone(),
            artist: track.artist.clone(),
            cover_url: track.artwork().to_string(),
            audio_url: track.audio_url.clone().unwrap_or_default(),
            artist_photo_url: track.artist_photo_url.clone().unwrap_or_default(),
        }
    }
}

/// One row of `GET /api/recently-played`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentlyPlayedEntry {
    pub song_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub played_at: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub audio_url: Option<String>,
    #[serde(default)]
    pub artist_photo_url: Option<String>,
}

impl RecentlyPlayedEntry {
    pub fn to_track(&self) -> Track {
        Track {
            id: self.song_id.clone(),
            title: self.title.clone(),
            artist: self.artist.clone(),
            cover_url: self.cover_url.clone(),
            audio_url: self.audio_url.clone(),
            artist_photo_url: self.artist_photo_url.clone().filter(|url| !url.is_empty()),
        }
    }
}
