//! The components module contains all shared components for our app.

mod app;
mod app_view;
pub mod audio_manager;
mod icons;
mod player;
mod shared_player;
pub mod views;

pub use app::*;
pub use app_view::*;
pub use audio_manager::{AudioController, AudioState};
pub use icons::*;
pub use player::*;
pub use shared_player::SharedPlayer;
