use crate::components::{Icon, SharedPlayer};
use crate::playback::{format_clock, progress_percent};
use dioxus::prelude::*;

const PLAYING_GLYPH: &str = "⏸";
const PAUSED_GLYPH: &str = "▶";

/// Snapshot of what the player bar and the fullscreen view render.
#[derive(Clone, PartialEq)]
struct NowPlaying {
    title: String,
    artist: String,
    artwork: String,
}

fn use_now_playing() -> Option<NowPlaying> {
    let player = use_context::<SharedPlayer>();
    let state = player.state.read();
    let now_playing = state.current().map(|track| NowPlaying {
        title: track.title.clone(),
        artist: track.artist.clone(),
        artwork: track.artwork().to_string(),
    });
    now_playing
}

/// Fixed bottom player bar. Marked `active` once a track is loaded.
#[component]
pub fn Player() -> Element {
    let player = use_context::<SharedPlayer>();
    let mut fullscreen_open = use_signal(|| false);
    let now_playing = use_now_playing();
    let (volume, muted) = {
        let state = player.state.read();
        (state.volume(), state.is_muted())
    };

    let on_volume_change = move |e: Event<FormData>| {
        if let Ok(val) = e.value().parse::<f64>() {
            player.set_volume(val / 100.0);
        }
    };

    let shell_class = if now_playing.is_some() {
        "music-player active"
    } else {
        "music-player"
    };

    rsx! {
        NoticeToast {}
        div { id: "musicPlayer", class: "{shell_class}",
            div { class: "player-track",
                {
                    match &now_playing {
                        Some(song) => rsx! {
                            if song.artwork.is_empty() {
                                div { class: "player-thumb player-thumb--empty",
                                    Icon { name: "music".to_string(), class: "w-6 h-6".to_string() }
                                }
                            } else {
                                img {
                                    id: "playerThumbnail",
                                    class: "player-thumb",
                                    src: "{song.artwork}",
                                    alt: "{song.title}",
                                    loading: "lazy",
                                }
                            }
                            div { class: "player-meta",
                                p { id: "playerTitle", class: "player-title", "{song.title}" }
                                p { id: "playerArtist", class: "player-artist", "{song.artist}" }
                            }
                        },
                        None => rsx! {
                            div { class: "player-thumb player-thumb--empty",
                                Icon { name: "music".to_string(), class: "w-6 h-6".to_string() }
                            }
                            div { class: "player-meta",
                                p { class: "player-title", "No track playing" }
                                p { class: "player-artist", "Select a song to start" }
                            }
                        },
                    }
                }
            }

            div { class: "player-center",
                TransportControls { play_button_id: "playPauseBtn".to_string() }
                ProgressBar {}
            }

            div { class: "player-side",
                button {
                    r#type: "button",
                    class: "icon-button",
                    aria_label: if muted { "Unmute" } else { "Mute" },
                    onclick: move |_| player.toggle_mute(),
                    Icon {
                        name: if muted { "volume-off".to_string() } else { "volume".to_string() },
                        class: "w-5 h-5".to_string(),
                    }
                }
                input {
                    r#type: "range",
                    min: "0",
                    max: "100",
                    value: (volume * 100.0).round() as i32,
                    class: "volume-range",
                    oninput: on_volume_change,
                }
                button {
                    r#type: "button",
                    class: "icon-button",
                    aria_label: "Open fullscreen player",
                    disabled: now_playing.is_none(),
                    onclick: move |_| fullscreen_open.set(true),
                    Icon { name: "expand".to_string(), class: "w-5 h-5".to_string() }
                }
            }
        }

        if fullscreen_open() {
            FullscreenPlayer { open: fullscreen_open }
        }
    }
}

/// Large artwork view over the page; shares every control with the bar.
#[component]
fn FullscreenPlayer(open: Signal<bool>) -> Element {
    let mut open = open;
    let Some(song) = use_now_playing() else {
        return rsx! {};
    };

    rsx! {
        div { class: "fullscreen-player",
            button {
                r#type: "button",
                class: "icon-button fullscreen-close",
                aria_label: "Close fullscreen player",
                onclick: move |_| open.set(false),
                Icon { name: "collapse".to_string(), class: "w-6 h-6".to_string() }
            }
            img {
                id: "fullscreenAlbumArt",
                class: "fullscreen-art",
                src: "{song.artwork}",
                alt: "{song.title}",
            }
            h2 { id: "fullscreenSongTitle", class: "fullscreen-title", "{song.title}" }
            p { id: "fullscreenSongArtist", class: "fullscreen-artist", "{song.artist}" }
            ProgressBar {}
            TransportControls { play_button_id: "fullscreenPlayPause".to_string() }
        }
    }
}

#[component]
fn TransportControls(play_button_id: String) -> Element {
    let player = use_context::<SharedPlayer>();
    let (has_song, playing) = {
        let state = player.state.read();
        (state.current().is_some(), state.is_playing())
    };

    rsx! {
        div { class: "player-controls",
            button {
                r#type: "button",
                class: "icon-button",
                aria_label: "Previous",
                onclick: move |_| player.previous_song(),
                Icon { name: "prev".to_string(), class: "w-5 h-5".to_string() }
            }
            button {
                id: "{play_button_id}",
                r#type: "button",
                class: "play-button",
                disabled: !has_song,
                onclick: move |_| player.toggle_play_pause(),
                if playing {
                    "{PLAYING_GLYPH}"
                } else {
                    "{PAUSED_GLYPH}"
                }
            }
            button {
                r#type: "button",
                class: "icon-button",
                aria_label: "Next",
                onclick: move |_| player.next_song(),
                Icon { name: "next".to_string(), class: "w-5 h-5".to_string() }
            }
        }
    }
}

/// Elapsed/total clock and the seekable progress track.
#[component]
fn ProgressBar() -> Element {
    let player = use_context::<SharedPlayer>();
    let current_time = player.state.read().current_time();
    let duration = (player.audio)().duration;
    let percent = progress_percent(current_time, duration);

    let on_seek = move |e: Event<FormData>| {
        if let Ok(percent) = e.value().parse::<f64>() {
            player.set_progress(percent);
        }
    };

    rsx! {
        div { class: "player-progress",
            span { id: "currentTime", class: "player-clock",
                if percent.is_some() {
                    "{format_clock(current_time)}"
                } else {
                    "0:00"
                }
            }
            div { class: "progress-track",
                div {
                    id: "progressFill",
                    class: "progress-fill",
                    style: "width: {percent.unwrap_or(0.0)}%",
                }
                input {
                    r#type: "range",
                    min: "0",
                    max: "100",
                    step: "0.1",
                    disabled: percent.is_none(),
                    value: percent.unwrap_or(0.0),
                    class: "progress-input",
                    oninput: on_seek,
                }
            }
            span { id: "totalTime", class: "player-clock",
                if percent.is_some() {
                    "{format_clock(duration)}"
                } else {
                    "0:00"
                }
            }
        }
    }
}

/// Transient message, e.g. for tracks without audio.
#[component]
fn NoticeToast() -> Element {
    let player = use_context::<SharedPlayer>();
    let Some(message) = (player.notice)() else {
        return rsx! {};
    };

    rsx! {
        div { class: "player-notice", role: "status",
            span { "⚠️ {message}" }
            button {
                r#type: "button",
                class: "icon-button",
                aria_label: "Dismiss",
                onclick: move |_| player.dismiss_notice(),
                Icon { name: "x".to_string(), class: "w-4 h-4".to_string() }
            }
        }
    }
}
