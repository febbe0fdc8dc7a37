//! Audio playback module
//!
//! Provides the looping soundtrack player:
//! - `SoundtrackPlayer`: rodio-backed playback of the theme track
//! - `Controls`: the play/mute indicator state shown in the UI

mod controls;
mod player;

pub use controls::Controls;
pub use player::SoundtrackPlayer;
