//! Platform-independent player state.

pub mod format;
mod state;

pub use format::{format_clock, progress_percent};
pub use state::{LoadOutcome, PlayerState, Transport};
