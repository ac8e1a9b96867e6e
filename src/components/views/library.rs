use crate::api::{MusicClient, Track};
use crate::components::views::TrackRow;
use crate::components::{Icon, SharedPlayer};
use dioxus::logger::tracing::error;
use dioxus::prelude::*;

#[component]
pub fn LibraryView() -> Element {
    let player = use_context::<SharedPlayer>();
    let mut search_query = use_signal(String::new);

    let songs = use_resource(move || {
        let base = player.config().api_base();
        async move {
            match MusicClient::new(base).get_songs().await {
                Ok(songs) => songs,
                Err(err) => {
                    error!("Error loading songs: {err}");
                    Vec::new()
                }
            }
        }
    });

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h1 { class: "page-title", "Library" }
                input {
                    class: "search-input",
                    placeholder: "Search songs",
                    value: search_query,
                    oninput: move |e| search_query.set(e.value()),
                }
            }

            {
                match songs() {
                    Some(songs) => {
                        let query = search_query().trim().to_lowercase();
                        let filtered: Vec<Track> = songs
                            .into_iter()
                            .filter(|song| {
                                query.is_empty()
                                    || song.title.to_lowercase().contains(&query)
                                    || song.artist.to_lowercase().contains(&query)
                            })
                            .collect();
                        rsx! {
                            if filtered.is_empty() {
                                div { class: "empty-state",
                                    Icon { name: "music".to_string(), class: "w-12 h-12".to_string() }
                                    p { "No songs found" }
                                }
                            } else {
                                div { class: "track-list",
                                    for song in filtered.iter().cloned() {
                                        TrackRow {
                                            key: "{song.id}",
                                            track: song.clone(),
                                            playlist: filtered.clone(),
                                        }
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
