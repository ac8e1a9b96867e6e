//! The shared player handle every component talks to.
//!
//! All state lives in one `Signal<PlayerState>`; this type applies the pure
//! state transitions and then drives the media element, storage and backend
//! to match. Every boundary failure is logged here and never propagated.

use crate::api::{MusicClient, Track};
use crate::components::audio_manager::{
    apply_volume, load_source, pause_playback, seek_to, start_playback, AudioState, MediaEvent,
    Shortcut,
};
use crate::config::PlayerConfig;
use crate::db::{load_player_state, save_player_state};
use crate::playback::{LoadOutcome, PlayerState, Transport};
use dioxus::logger::tracing::{debug, error, warn};
use dioxus::prelude::*;

const NO_PREVIEW_NOTICE: &str = "This song has no preview available";

#[derive(Clone, Copy, PartialEq)]
pub struct SharedPlayer {
    pub state: Signal<PlayerState>,
    pub audio: Signal<AudioState>,
    pub notice: Signal<Option<String>>,
    config: Signal<PlayerConfig>,
}

impl SharedPlayer {
    pub fn new(
        state: Signal<PlayerState>,
        audio: Signal<AudioState>,
        notice: Signal<Option<String>>,
        config: Signal<PlayerConfig>,
    ) -> Self {
        Self {
            state,
            audio,
            notice,
            config,
        }
    }

    pub fn config(&self) -> PlayerConfig {
        self.config.peek().clone()
    }

    /// Play `track`, making `playlist` the queue it belongs to.
    pub fn play_song(&self, track: Track, playlist: Vec<Track>) {
        let mut state = self.state;
        let outcome = state.write().load(track, playlist);
        self.apply_load(outcome);
    }

    pub fn next_song(&self) {
        let mut state = self.state;
        let outcome = state.write().skip_forward();
        if let Some(outcome) = outcome {
            self.apply_load(outcome);
        }
    }

    pub fn previous_song(&self) {
        let mut state = self.state;
        let outcome = state.write().skip_back();
        if let Some(outcome) = outcome {
            self.apply_load(outcome);
        }
    }

    pub fn toggle_play_pause(&self) {
        let mut state = self.state;
        let transport = state.write().toggle();
        match transport {
            Some(Transport::Play) => self.start(None),
            Some(Transport::Pause) => pause_playback(),
            None => return,
        }
        self.persist();
    }

    pub fn set_volume(&self, volume: f64) {
        let mut state = self.state;
        let applied = state.write().set_volume(volume);
        apply_volume(applied, state.peek().is_muted());
        self.persist();
    }

    pub fn toggle_mute(&self) {
        let mut state = self.state;
        let muted = state.write().toggle_mute();
        apply_volume(state.peek().volume(), muted);
        self.persist();
    }

    /// Seek to `percentage` of the loaded track; ignored until its duration is known.
    pub fn set_progress(&self, percentage: f64) {
        let duration = self.audio.peek().duration;
        let mut state = self.state;
        let target = state.write().seek_percent(percentage, duration);
        if let Some(time) = target {
            seek_to(time);
        }
    }

    pub fn dismiss_notice(&self) {
        let mut notice = self.notice;
        notice.set(None);
    }

    pub fn handle_media_event(&self, event: MediaEvent) {
        match event {
            MediaEvent::TimeUpdate { time, duration } => {
                self.set_duration(duration);
                let mut state = self.state;
                state.write().update_time(time);
            }
            MediaEvent::MetadataLoaded { duration } => self.set_duration(duration),
            MediaEvent::Ended => self.next_song(),
            MediaEvent::SaveTick => self.persist(),
            MediaEvent::Shortcut(Shortcut::TogglePlay) => self.toggle_play_pause(),
            MediaEvent::Shortcut(Shortcut::Next) => self.next_song(),
            MediaEvent::Shortcut(Shortcut::Previous) => self.previous_song(),
        }
    }

    /// Write the record to session storage.
    pub fn persist(&self) {
        let key = self.config.peek().storage_key.clone();
        let snapshot = self.state.peek().snapshot();
        if let Err(err) = save_player_state(&key, &snapshot) {
            error!("Error saving player state: {err}");
        }
    }

    /// Rehydrate from session storage and reattach the media element.
    pub fn restore(&self) {
        let config = self.config();
        let saved = match load_player_state(&config.storage_key) {
            Ok(Some(saved)) if saved.song.is_some() => saved,
            Ok(_) => return,
            Err(err) => {
                error!("Error loading player state: {err}");
                return;
            }
        };

        let restored = PlayerState::restore(saved, config.default_volume);
        let resume = restored.is_playing();
        let source = restored.current().and_then(|t| t.source()).map(str::to_string);
        apply_volume(restored.volume(), restored.is_muted());
        debug!(
            "restored player at {:.1}s, queue of {}",
            restored.current_time(),
            restored.queue().len()
        );

        let mut state = self.state;
        if let Some(src) = source {
            load_source(&src);
            seek_to(restored.current_time());
            state.set(restored);
            if resume {
                self.start(None);
            }
        } else {
            state.set(restored);
        }
    }

    fn apply_load(&self, outcome: LoadOutcome) {
        let mut audio = self.audio;
        audio.set(AudioState::default());
        match outcome {
            LoadOutcome::Ready { src } => {
                load_source(&src);
                let fresh = self.state.peek().current().cloned();
                self.start(fresh);
            }
            LoadOutcome::MissingSource => {
                let title = self
                    .state
                    .peek()
                    .current()
                    .map(|t| t.title.clone())
                    .unwrap_or_default();
                warn!("No audio URL available for song: {title}");
                pause_playback();
                self.show_notice(NO_PREVIEW_NOTICE);
                self.persist();
            }
        }
    }

    /// Fire-and-forget start of the media element. A rejection only clears
    /// the play flag. `record` is the freshly loaded track to report once
    /// playback is confirmed.
    fn start(&self, record: Option<Track>) {
        let player = *self;
        let mut state = self.state;
        spawn(async move {
            match start_playback().await {
                Ok(()) => {
                    state.write().confirm_started();
                    player.persist();
                    if let Some(track) = record {
                        player.record_recently_played(track);
                    }
                }
                Err(err) => {
                    warn!("Audio playback error: {err}");
                    state.write().playback_rejected();
                }
            }
        });
    }

    fn record_recently_played(&self, track: Track) {
        let config = self.config();
        if !config.record_history {
            return;
        }
        spawn(async move {
            let client = MusicClient::new(config.api_base());
            if let Err(err) = client.record_recently_played(&track).await {
                error!("Error tracking recently played: {err}");
            }
        });
    }

    fn set_duration(&self, duration: f64) {
        let mut audio = self.audio;
        if audio.peek().duration != duration {
            audio.set(AudioState { duration });
        }
    }

    fn show_notice(&self, message: &str) {
        let mut notice = self.notice;
        notice.set(Some(message.to_string()));

        #[cfg(target_arch = "wasm32")]
        {
            let timeout_ms = self.config.peek().notice_timeout_ms;
            let shown = message.to_string();
            spawn(async move {
                gloo_timers::future::TimeoutFuture::new(timeout_ms).await;
                if notice.peek().as_deref() == Some(shown.as_str()) {
                    notice.set(None);
                }
            });
        }
    }
}
