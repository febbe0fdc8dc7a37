//! UI module for the tribute
//! Deep-space dark aesthetic with blue and purple accents
//!
//! # Architecture
//!
//! - **Effects** (`effects`): Canvas scenes driven by the frame subscription
//! - **Components** (`components`): Business-specific UI with Message handling
//! - **Pages** (`pages`): One full-screen view per navigable section

pub mod animation;
pub mod components;
pub mod effects;
pub mod icons;
pub mod pages;
pub mod theme;
