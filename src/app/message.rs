//! Application message types

use iced::time::Instant;
use iced::widget::image;

use crate::ui::components::navbar::NavItem;

/// All events the application reacts to, grouped by concern
#[derive(Debug, Clone)]
pub enum Message {
    // === Lifecycle ===
    /// The three second loading screen has elapsed
    LoadingFinished,
    /// The welcome gate button was pressed; enters the app and starts audio
    StartJourney,
    /// One animation frame; drives every active canvas scene
    AnimationTick(Instant),

    // === Navigation ===
    Navigate(NavItem),
    /// Show or hide the extra info cards under a section's diagram
    InfoToggled(NavItem),
    /// Enlarge or shrink a section's diagram
    ExpandToggled(NavItem),

    // === Wormhole journey ===
    JumpRequested,
    /// 50ms acceleration step while a jump ramps up
    JumpRampTick,
    /// The five second cruise at full speed is over
    JumpSettled,
    ReportDismissed,

    // === Time dilation clocks ===
    /// One second wall clock tick while the Miller page is visible
    ClockTick,

    // === Soundtrack ===
    PlayPressed,
    MuteToggled,
    /// Poll for end of track; restarts playback to loop the theme
    PlaybackTick,

    // === Gallery ===
    PhotoFetched {
        index: usize,
        result: Result<image::Handle, String>,
    },
    LightboxOpened(usize),
    LightboxClosed,
    LightboxNext,
    LightboxPrevious,

    // === Trivia carousel ===
    TriviaNext,
    TriviaPrevious,
    TriviaSelected(usize),
}
