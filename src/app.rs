//! Application module: the player model, its transport actions and the
//! clock ticker.
//!
//! `App` owns the playlist, the selection, the playback state and the mixer,
//! and is handed by `&mut` to every input handler.

mod model;
mod ticker;
mod transport;

pub use model::*;
pub use ticker::Ticker;
