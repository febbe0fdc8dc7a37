//! Canvas scenes for the animated sections
//!
//! Every scene follows the same shape: a small entity set owned by the
//! application state, advanced one fixed step per animation frame, and a
//! `canvas::Program` that redraws the whole frame from the current values.
//! No scene shares a clock or entities with another.

pub mod gargantua;
pub mod orbit;
pub mod solar_system;
pub mod spinner;
pub mod starfield;
pub mod twinkle;

pub use gargantua::{Gargantua, GargantuaScene};
pub use orbit::{Orbit, OrbitScene};
pub use solar_system::{SolarSystem, SolarSystemScene};
pub use spinner::Spinner;
pub use starfield::{Starfield, StarfieldScene};
pub use twinkle::TwinkleField;
