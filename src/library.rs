//! Song library: the flat folder listing that becomes the playlist.

mod display;
mod model;
mod scan;

pub use display::display_name;
pub use model::{LibraryError, Song};
pub use scan::{open_library, scan};

#[cfg(test)]
mod tests;
