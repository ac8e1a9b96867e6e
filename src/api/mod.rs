pub mod client;
pub mod models;

pub use client::MusicClient;
pub use models::*;
