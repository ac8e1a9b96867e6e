mod library;
mod recently;
mod track_row;

pub use library::LibraryView;
pub use recently::RecentlyView;
pub use track_row::TrackRow;
