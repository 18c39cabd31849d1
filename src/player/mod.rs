//! Player logic that does not touch the DOM: view state, song selection,
//! playback toggling and streaming, and playlist mutations.

pub mod actions;
pub mod media;
pub mod playback;
pub mod shortcuts;
pub mod shuffle;
pub mod state;
pub mod time;

pub use actions::*;
pub use media::*;
pub use playback::*;
pub use shortcuts::*;
pub use state::*;
pub use time::*;
