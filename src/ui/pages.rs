//! Page-level views, one per navigable section

pub mod dedication;
pub mod gallery;
pub mod gargantua;
pub mod home;
pub mod journey;
pub mod miller;
pub mod system;
pub mod trivia;
pub mod welcome;
