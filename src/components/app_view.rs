//! Routes of the app. Every page renders inside `AppShell`, so the player
//! survives navigation between them.

use crate::components::views::{LibraryView, RecentlyView};
use crate::components::AppShell;
use dioxus::prelude::*;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum AppView {
    #[layout(AppShell)]
        #[route("/")]
        LibraryView {},
        #[route("/recently")]
        RecentlyView {},
}

pub fn view_label(view: &AppView) -> &'static str {
    match view {
        AppView::LibraryView {} => "Library",
        AppView::RecentlyView {} => "Recently played",
    }
}
