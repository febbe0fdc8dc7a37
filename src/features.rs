//! Feature modules - tribute content and logic separated from UI
//!
//! Each feature module contains the core logic for a specific section.
//! Features should not depend on UI components directly.

pub mod dilation;
pub mod gallery;
pub mod journey;
pub mod report;
pub mod settings;
pub mod trivia;

pub use journey::{Journey, JourneyPhase};
pub use report::TravelReport;
pub use settings::Settings;
