//! The player record and every mutation the UI and the media element apply to it.

use crate::api::models::Track;
use crate::db::PersistedPlayer;

/// Result of pointing the player at a track.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The track has audio; the caller should attach `src` and start playback.
    Ready { src: String },
    /// The track has no audio URL. Playback is stopped.
    MissingSource,
}

/// What the media element has to do after a play/pause toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Play,
    Pause,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    current: Option<Track>,
    is_playing: bool,
    current_time: f64,
    volume: f64,
    is_muted: bool,
    queue: Vec<Track>,
    /// Position of `current` in `queue`; `None` when playing outside a queue.
    index: Option<usize>,
}

impl PlayerState {
    pub fn new(volume: f64) -> Self {
        Self {
            current: None,
            is_playing: false,
            current_time: 0.0,
            volume: clamp_volume(volume).unwrap_or(0.0),
            is_muted: false,
            queue: Vec::new(),
            index: None,
        }
    }

    pub fn current(&self) -> Option<&Track> {
        self.current.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn is_muted(&self) -> bool {
        self.is_muted
    }

    pub fn queue(&self) -> &[Track] {
        &self.queue
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Make `track` current with `playlist` as the new queue.
    pub fn load(&mut self, track: Track, playlist: Vec<Track>) -> LoadOutcome {
        self.index = playlist.iter().position(|t| t.id == track.id);
        self.queue = playlist;
        self.set_current(track)
    }

    /// Advance to the next queue entry, wrapping to the start.
    pub fn skip_forward(&mut self) -> Option<LoadOutcome> {
        let len = self.queue.len();
        if len == 0 {
            return None;
        }
        let next = match self.index {
            Some(idx) => (idx + 1) % len,
            None => 0,
        };
        Some(self.select(next))
    }

    /// Step back to the previous queue entry, wrapping to the end.
    pub fn skip_back(&mut self) -> Option<LoadOutcome> {
        let len = self.queue.len();
        if len == 0 {
            return None;
        }
        let prev = match self.index {
            None | Some(0) => len - 1,
            Some(idx) => idx - 1,
        };
        Some(self.select(prev))
    }

    fn select(&mut self, index: usize) -> LoadOutcome {
        let track = self.queue[index].clone();
        self.index = Some(index);
        self.set_current(track)
    }

    fn set_current(&mut self, track: Track) -> LoadOutcome {
        self.current_time = 0.0;
        let outcome = match track.source() {
            Some(src) => LoadOutcome::Ready {
                src: src.to_string(),
            },
            None => {
                self.is_playing = false;
                LoadOutcome::MissingSource
            }
        };
        self.current = Some(track);
        outcome
    }

    pub fn confirm_started(&mut self) {
        self.is_playing = true;
    }

    pub fn playback_rejected(&mut self) {
        self.is_playing = false;
    }

    /// Flip play/pause. Nothing happens while no track is loaded.
    pub fn toggle(&mut self) -> Option<Transport> {
        self.current.as_ref()?;
        self.is_playing = !self.is_playing;
        Some(if self.is_playing {
            Transport::Play
        } else {
            Transport::Pause
        })
    }

    /// Clamp into `[0, 1]` and apply. Non-finite input leaves the volume as is.
    pub fn set_volume(&mut self, volume: f64) -> f64 {
        if let Some(volume) = clamp_volume(volume) {
            self.volume = volume;
        }
        self.volume
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.is_muted = !self.is_muted;
        self.is_muted
    }

    /// Seek to `percentage` of `duration`. Requires a known duration.
    pub fn seek_percent(&mut self, percentage: f64, duration: f64) -> Option<f64> {
        if !duration.is_finite() || duration <= 0.0 || percentage.is_nan() {
            return None;
        }
        let time = percentage.clamp(0.0, 100.0) / 100.0 * duration;
        self.current_time = time;
        Some(time)
    }

    pub fn update_time(&mut self, time: f64) {
        if time.is_finite() {
            self.current_time = time.max(0.0);
        }
    }

    pub fn snapshot(&self) -> PersistedPlayer {
        PersistedPlayer {
            song: self.current.clone(),
            current_time: self.current_time,
            is_playing: self.is_playing,
            volume: self.volume,
            is_muted: self.is_muted,
            playlist: self.queue.clone(),
            song_index: self.index.map(|idx| idx as i64).unwrap_or(-1),
        }
    }

    /// Rebuild from a stored record, repairing anything out of range.
    pub fn restore(saved: PersistedPlayer, default_volume: f64) -> Self {
        let mut state = Self::new(default_volume);
        state.set_volume(saved.volume);
        state.is_muted = saved.is_muted;
        state.update_time(saved.current_time);
        state.queue = saved.playlist;

        let stored_index = usize::try_from(saved.song_index)
            .ok()
            .filter(|idx| *idx < state.queue.len());
        state.index = match (&saved.song, stored_index) {
            (Some(song), Some(idx)) if state.queue[idx].id == song.id => Some(idx),
            (Some(song), _) => state.queue.iter().position(|t| t.id == song.id),
            (None, _) => None,
        };

        // A track without a playable source can never be playing.
        state.is_playing =
            saved.is_playing && saved.song.as_ref().is_some_and(|t| t.source().is_some());
        state.current = saved.song;
        state
    }
}

fn clamp_volume(volume: f64) -> Option<f64> {
    volume.is_finite().then(|| volume.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn track(id: &str) -> Track {
        Track {
            id: id.to_string(),
            title: format!("Track {id}"),
            artist: "Artist".to_string(),
            cover_url: None,
            audio_url: Some(format!("https://cdn.example/{id}.mp3")),
            artist_photo_url: None,
        }
    }

    fn playlist(ids: &[&str]) -> Vec<Track> {
        ids.iter().map(|id| track(id)).collect()
    }

    fn current_id(state: &PlayerState) -> &str {
        state.current().map(|t| t.id.as_str()).unwrap_or_default()
    }

    #[test]
    fn load_finds_track_in_playlist() {
        let mut state = PlayerState::new(0.7);
        let outcome = state.load(track("b"), playlist(&["a", "b", "c"]));

        assert_eq!(
            outcome,
            LoadOutcome::Ready {
                src: "https://cdn.example/b.mp3".to_string()
            }
        );
        assert_eq!(state.index(), Some(1));
        assert_eq!(state.queue().len(), 3);
        assert!(!state.is_playing());
    }

    #[test]
    fn load_without_playlist_has_no_queue_context() {
        let mut state = PlayerState::new(0.7);
        state.load(track("solo"), Vec::new());
        assert_eq!(state.index(), None);

        state.load(track("x"), playlist(&["a", "b"]));
        assert_eq!(state.index(), None);
    }

    #[test]
    fn load_track_without_audio_stops_playback() {
        let mut state = PlayerState::new(0.7);
        state.load(track("a"), Vec::new());
        state.confirm_started();

        let silent = Track {
            audio_url: None,
            ..track("silent")
        };
        assert_eq!(state.load(silent, Vec::new()), LoadOutcome::MissingSource);
        assert!(!state.is_playing());
        assert_eq!(current_id(&state), "silent");
    }

    #[test]
    fn load_resets_elapsed_time() {
        let mut state = PlayerState::new(0.7);
        state.load(track("a"), Vec::new());
        state.update_time(93.0);
        state.load(track("b"), Vec::new());
        assert_eq!(state.current_time(), 0.0);
    }

    #[test]
    fn next_wraps_to_start() {
        let mut state = PlayerState::new(0.7);
        state.load(track("c"), playlist(&["a", "b", "c"]));

        state.skip_forward();
        assert_eq!(state.index(), Some(0));
        assert_eq!(current_id(&state), "a");

        state.skip_forward();
        assert_eq!(current_id(&state), "b");
    }

    #[test]
    fn previous_wraps_to_end() {
        let mut state = PlayerState::new(0.7);
        state.load(track("a"), playlist(&["a", "b", "c"]));

        state.skip_back();
        assert_eq!(state.index(), Some(2));
        assert_eq!(current_id(&state), "c");

        state.skip_back();
        assert_eq!(current_id(&state), "b");
    }

    #[test]
    fn skipping_without_queue_context_starts_at_the_edges() {
        let mut state = PlayerState::new(0.7);
        state.load(track("x"), playlist(&["a", "b", "c"]));
        state.skip_forward();
        assert_eq!(current_id(&state), "a");

        state.load(track("x"), playlist(&["a", "b", "c"]));
        state.skip_back();
        assert_eq!(current_id(&state), "c");
    }

    #[test]
    fn skipping_an_empty_queue_is_a_no_op() {
        let mut state = PlayerState::new(0.7);
        assert_eq!(state.skip_forward(), None);
        assert_eq!(state.skip_back(), None);

        state.load(track("solo"), Vec::new());
        assert_eq!(state.skip_forward(), None);
        assert_eq!(current_id(&state), "solo");
    }

    #[test]
    fn skipping_follows_positions_when_ids_repeat() {
        let mut state = PlayerState::new(0.7);
        state.load(track("a"), playlist(&["a", "b", "a"]));
        state.skip_forward();
        state.skip_forward();
        assert_eq!(state.index(), Some(2));
        state.skip_forward();
        assert_eq!(state.index(), Some(0));
    }

    #[test]
    fn toggle_without_track_is_a_no_op() {
        let mut state = PlayerState::new(0.7);
        assert_eq!(state.toggle(), None);
        assert!(!state.is_playing());
    }

    #[test]
    fn toggle_flips_between_play_and_pause() {
        let mut state = PlayerState::new(0.7);
        state.load(track("a"), Vec::new());
        assert_eq!(state.toggle(), Some(Transport::Play));
        assert!(state.is_playing());
        assert_eq!(state.toggle(), Some(Transport::Pause));
        assert!(!state.is_playing());
    }

    #[test]
    fn rejected_playback_clears_the_flag() {
        let mut state = PlayerState::new(0.7);
        state.load(track("a"), Vec::new());
        state.toggle();
        state.playback_rejected();
        assert!(!state.is_playing());
    }

    #[test]
    fn volume_is_clamped() {
        let mut state = PlayerState::new(0.7);
        assert_eq!(state.set_volume(1.5), 1.0);
        assert_eq!(state.set_volume(-0.2), 0.0);
        assert_eq!(state.set_volume(0.35), 0.35);
        assert_eq!(state.set_volume(f64::NAN), 0.35);
        assert_eq!(PlayerState::new(4.0).volume(), 1.0);
    }

    #[test]
    fn mute_toggles() {
        let mut state = PlayerState::new(0.7);
        assert!(state.toggle_mute());
        assert!(!state.toggle_mute());
        assert_eq!(state.volume(), 0.7);
    }

    #[test]
    fn seek_requires_known_duration() {
        let mut state = PlayerState::new(0.7);
        assert_eq!(state.seek_percent(50.0, 0.0), None);
        assert_eq!(state.seek_percent(50.0, f64::NAN), None);
        assert_eq!(state.seek_percent(50.0, 200.0), Some(100.0));
        assert_eq!(state.current_time(), 100.0);
        assert_eq!(state.seek_percent(140.0, 200.0), Some(200.0));
    }

    #[test]
    fn snapshot_marks_missing_queue_context_with_minus_one() {
        let mut state = PlayerState::new(0.7);
        state.load(track("a"), Vec::new());
        assert_eq!(state.snapshot().song_index, -1);

        state.load(track("b"), playlist(&["a", "b"]));
        assert_eq!(state.snapshot().song_index, 1);
    }

    #[test]
    fn restore_round_trips_a_snapshot() {
        let mut state = PlayerState::new(0.7);
        state.load(track("b"), playlist(&["a", "b", "c"]));
        state.confirm_started();
        state.update_time(42.5);
        state.set_volume(0.0);
        state.toggle_mute();

        let restored = PlayerState::restore(state.snapshot(), 0.7);
        assert_eq!(restored, state);
    }

    #[test]
    fn restore_repairs_out_of_range_index() {
        let saved = PersistedPlayer {
            song: Some(track("c")),
            playlist: playlist(&["a", "b", "c"]),
            song_index: 9,
            volume: 3.0,
            ..PersistedPlayer::default()
        };
        let state = PlayerState::restore(saved, 0.7);
        assert_eq!(state.index(), Some(2));
        assert_eq!(state.volume(), 1.0);
    }

    #[test]
    fn restore_without_song_is_idle() {
        let saved = PersistedPlayer {
            song: None,
            is_playing: true,
            playlist: playlist(&["a"]),
            song_index: 0,
            ..PersistedPlayer::default()
        };
        let state = PlayerState::restore(saved, 0.7);
        assert!(!state.is_playing());
        assert_eq!(state.index(), None);
    }

    #[test]
    fn restore_clears_play_flag_for_track_without_audio() {
        let silent = Track {
            audio_url: Some("   ".to_string()),
            ..track("silent")
        };
        let saved = PersistedPlayer {
            song: Some(silent),
            is_playing: true,
            ..PersistedPlayer::default()
        };
        let state = PlayerState::restore(saved, 0.7);
        assert!(!state.is_playing());
        assert_eq!(current_id(&state), "silent");
        assert!(!state.snapshot().is_playing);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Load(usize),
        Next,
        Previous,
        Toggle,
        Volume(f64),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0usize..8).prop_map(Op::Load),
            Just(Op::Next),
            Just(Op::Previous),
            Just(Op::Toggle),
            (-10.0f64..10.0).prop_map(Op::Volume),
        ]
    }

    proptest! {
        #[test]
        fn index_and_volume_stay_in_bounds(
            queue_len in 0usize..6,
            ops in prop::collection::vec(op(), 1..40)
        ) {
            let ids: Vec<String> = (0..queue_len).map(|i| i.to_string()).collect();
            let queue: Vec<Track> = ids.iter().map(|id| track(id)).collect();
            let mut state = PlayerState::new(0.7);

            for op in ops {
                match op {
                    Op::Load(i) => {
                        state.load(track(&i.to_string()), queue.clone());
                    }
                    Op::Next => {
                        state.skip_forward();
                    }
                    Op::Previous => {
                        state.skip_back();
                    }
                    Op::Toggle => {
                        state.toggle();
                    }
                    Op::Volume(v) => {
                        state.set_volume(v);
                    }
                }

                prop_assert!((0.0..=1.0).contains(&state.volume()));
                if let Some(idx) = state.index() {
                    prop_assert!(idx < state.queue().len());
                    prop_assert_eq!(Some(&state.queue()[idx]), state.current());
                }
            }
        }
    }
}
