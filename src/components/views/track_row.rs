use crate::api::Track;
use crate::components::{Icon, SharedPlayer};
use dioxus::prelude::*;

/// One clickable track; plays it with `playlist` as the queue.
#[component]
pub fn TrackRow(track: Track, playlist: Vec<Track>, #[props(default)] detail: String) -> Element {
    let player = use_context::<SharedPlayer>();
    // Memoized so progress ticks do not re-render every row.
    let current_id = use_memo(move || player.state.read().current().map(|t| t.id.clone()));
    let is_current = current_id().as_deref() == Some(track.id.as_str());
    let has_source = track.source().is_some();
    let artwork = track.artwork().to_string();

    let on_play = {
        let track = track.clone();
        move |_| player.play_song(track.clone(), playlist.clone())
    };

    rsx! {
        button {
            r#type: "button",
            class: if is_current { "track-row track-row--current" } else { "track-row" },
            onclick: on_play,
            if artwork.is_empty() {
                div { class: "track-art track-art--empty",
                    Icon { name: "music".to_string(), class: "w-5 h-5".to_string() }
                }
            } else {
                img {
                    class: "track-art",
                    src: "{artwork}",
                    alt: "{track.title}",
                    loading: "lazy",
                }
            }
            div { class: "track-meta",
                p { class: "track-title", "{track.title}" }
                p { class: "track-artist", "{track.artist}" }
            }
            if !detail.is_empty() {
                span { class: "track-detail", "{detail}" }
            }
            if !has_source {
                span { class: "track-detail", "No preview" }
            }
        }
    }
}
