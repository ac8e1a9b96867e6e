use crate::api::{MusicClient, Track};
use crate::components::views::TrackRow;
use crate::components::{Icon, SharedPlayer};
use dioxus::logger::tracing::error;
use dioxus::prelude::*;

#[component]
pub fn RecentlyView() -> Element {
    let player = use_context::<SharedPlayer>();

    let history = use_resource(move || {
        let base = player.config().api_base();
        async move {
            match MusicClient::new(base).get_recently_played().await {
                Ok(rows) => rows,
                Err(err) => {
                    error!("Error loading recently played: {err}");
                    Vec::new()
                }
            }
        }
    });

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h1 { class: "page-title", "Recently played" }
            }

            {
                match history() {
                    Some(rows) if rows.is_empty() => rsx! {
                        div { class: "empty-state",
                            Icon { name: "clock".to_string(), class: "w-12 h-12".to_string() }
                            p { "Nothing played yet" }
                        }
                    },
                    Some(rows) => {
                        let playlist: Vec<Track> = rows.iter().map(|row| row.to_track()).collect();
                        rsx! {
                            div { class: "track-list",
                                for (idx, row) in rows.iter().enumerate() {
                                    TrackRow {
                                        key: "{idx}",
                                        track: playlist[idx].clone(),
                                        playlist: playlist.clone(),
                                        detail: row.played_at.clone().unwrap_or_default(),
                                    }
                                }
                            }
                        }
                    }
                    None => rsx! {
                        div { class: "empty-state",
                            Icon { name: "loader".to_string(), class: "w-8 h-8".to_string() }
                        }
                    },
                }
            }
        }
    }
}
