//! Configuration loader and schema types.
//!
//! Settings cover the audio folder, the transport toggles and the colour theme.

mod load;
mod schema;

pub use schema::*;

#[cfg(test)]
mod tests;
