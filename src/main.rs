use dioxus::prelude::*;

mod api;
mod components;
mod config;
mod db;
mod error;
mod playback;

use components::AppView;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Meta { name: "theme-color", content: "#a38449" }
        document::Stylesheet { href: APP_CSS }

        Router::<AppView> {}
    }
}
