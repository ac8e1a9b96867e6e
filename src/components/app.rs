use crate::components::{
    view_label, AppView, AudioController, AudioState, Icon, Player, SharedPlayer,
};
use crate::config::load_config;
use crate::playback::PlayerState;
use dioxus::prelude::*;

#[component]
pub fn AppShell() -> Element {
    let config = use_signal(load_config);
    let state = use_signal(|| PlayerState::new(config.peek().default_volume));
    let audio_state = use_signal(AudioState::default);
    let notice = use_signal(|| None::<String>);

    use_context_provider(|| SharedPlayer::new(state, audio_state, notice, config));

    let view = use_route::<AppView>();
    let navigator = use_navigator();
    let nav_class = |target: &AppView| {
        if *target == view {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    rsx! {
        div { class: "app-container",
            header { class: "app-header",
                span { class: "app-title", "{view_label(&view)}" }
                nav { class: "app-nav",
                    button {
                        r#type: "button",
                        class: nav_class(&AppView::LibraryView {}),
                        onclick: move |_| {
                            navigator.push(AppView::LibraryView {});
                        },
                        Icon { name: "home".to_string(), class: "w-4 h-4".to_string() }
                        "Library"
                    }
                    button {
                        r#type: "button",
                        class: nav_class(&AppView::RecentlyView {}),
                        onclick: move |_| {
                            navigator.push(AppView::RecentlyView {});
                        },
                        Icon { name: "clock".to_string(), class: "w-4 h-4".to_string() }
                        "Recently played"
                    }
                }
            }

            main { class: "page-shell", Outlet::<AppView> {} }

            // Fixed bottom player
            Player {}
        }

        // Audio controller - manages playback separately from UI
        AudioController {}
    }
}
