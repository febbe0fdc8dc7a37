//! Application-specific components with message handling

pub mod audio_bar;
pub mod cards;
pub mod lightbox;
pub mod navbar;
