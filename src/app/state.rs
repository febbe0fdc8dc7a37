//! Application state types

use chrono::{DateTime, Utc};
use iced::widget::image;

use crate::audio::{Controls, SoundtrackPlayer};
use crate::features::{Journey, Settings, gallery};
use crate::ui::animation::Fade;
use crate::ui::components::navbar::NavItem;
use crate::ui::effects::{Gargantua, Orbit, SolarSystem, Spinner, Starfield, TwinkleField};

/// Top-level lifecycle of the tribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Spinner shown for three seconds on startup
    Loading,
    /// Welcome gate; nothing plays until the visitor clicks through
    Welcome,
    /// The full experience
    Ready,
}

/// Every canvas scene, each with its own entities and clock
pub struct Scenes {
    pub spinner: Spinner,
    pub twinkle: TwinkleField,
    pub starfield: Starfield,
    pub orbit: Orbit,
    pub solar_system: SolarSystem,
    pub gargantua: Gargantua,
}

impl Scenes {
    pub fn new() -> Self {
        let mut rng = rand::rng();
        Self {
            spinner: Spinner::default(),
            twinkle: TwinkleField::new(&mut rng),
            starfield: Starfield::new(&mut rng),
            orbit: Orbit::default(),
            solar_system: SolarSystem::default(),
            gargantua: Gargantua::default(),
        }
    }
}

/// Downloaded gallery photos and the lightbox cursor
pub struct GalleryState {
    /// One slot per photo; `None` until the download lands (or never, on error)
    pub photos: Vec<Option<image::Handle>>,
    pub lightbox: Option<usize>,
}

impl GalleryState {
    pub fn new() -> Self {
        Self {
            photos: vec![None; gallery::PHOTOS.len()],
            lightbox: None,
        }
    }
}

/// Per-section view toggles (enlarged diagrams, extra info cards)
#[derive(Debug, Default, Clone, Copy)]
pub struct SectionToggles {
    pub miller_expanded: bool,
    pub miller_info: bool,
    pub system_expanded: bool,
    pub system_info: bool,
    pub gargantua_expanded: bool,
}

/// Root application state
pub struct App {
    pub phase: Phase,
    pub active_nav: NavItem,
    pub scenes: Scenes,
    pub journey: Journey,
    /// Wall clock driving the dilation counters, refreshed every second
    pub now: DateTime<Utc>,
    pub gallery: GalleryState,
    pub toggles: SectionToggles,
    pub trivia_index: usize,
    pub controls: Controls,
    pub player: Option<SoundtrackPlayer>,
    pub settings: Settings,
    /// Content reveal when entering the experience
    pub fade: Fade,
}
