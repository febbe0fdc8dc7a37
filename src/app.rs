//! Main application module

pub mod helpers;
mod message;
mod state;
mod update;
mod view;

use chrono::Utc;
use iced::{Task, Theme};
use std::time::Duration;

use crate::audio::Controls;
use crate::features::{Journey, Settings, gallery};
use crate::ui::animation::Fade;
use crate::ui::components::navbar::NavItem;

pub use message::Message;
pub use state::{App, GalleryState, Phase, Scenes, SectionToggles};

/// How long the wormhole spinner is shown on startup
const LOADING_DURATION: Duration = Duration::from_secs(3);

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();

        let app = Self {
            phase: Phase::Loading,
            active_nav: NavItem::Home,
            scenes: Scenes::new(),
            journey: Journey::new(),
            now: Utc::now(),
            gallery: GalleryState::new(),
            toggles: state::SectionToggles::default(),
            trivia_index: 0,
            controls: Controls {
                playing: false,
                muted: settings.muted,
            },
            player: None,
            settings,
            fade: Fade::new(),
        };

        // Kick off the loading gate and every photo download at once
        let mut tasks = vec![Task::perform(helpers::sleep(LOADING_DURATION), |_| {
            Message::LoadingFinished
        })];
        for (index, photo) in gallery::PHOTOS.iter().enumerate() {
            tasks.push(Task::perform(
                helpers::fetch_photo(photo.url),
                move |result| Message::PhotoFetched {
                    index,
                    result: result.map_err(|e| e.to_string()),
                },
            ));
        }

        (app, Task::batch(tasks))
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn title(&self) -> String {
        match self.active_nav {
            NavItem::Home => "Interstellar - Tributo".to_string(),
            item => format!("Interstellar - {}", item.label()),
        }
    }

    /// Subscriptions for animation frames, the jump ramp, the dilation
    /// clocks and playback monitoring
    pub fn subscription(&self) -> iced::Subscription<Message> {
        let power_saving = self.settings.power_saving;

        let decisions = subscription_logic::decide(subscription_logic::Inputs {
            power_saving,
            fade_animating: self.fade.is_animating(),
            accelerating: self.journey.phase == crate::features::JourneyPhase::Accelerating,
            on_miller: self.phase == Phase::Ready && self.active_nav == NavItem::Miller,
            playing: self.controls.playing,
        });

        let frames_sub = if decisions.frames {
            iced::window::frames().map(Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        let ramp_sub = if decisions.ramp {
            iced::time::every(Duration::from_millis(50)).map(|_| Message::JumpRampTick)
        } else {
            iced::Subscription::none()
        };

        let clock_sub = if decisions.clock {
            iced::time::every(Duration::from_secs(1)).map(|_| Message::ClockTick)
        } else {
            iced::Subscription::none()
        };

        let playback_sub = if decisions.playback {
            iced::time::every(Duration::from_millis(500)).map(|_| Message::PlaybackTick)
        } else {
            iced::Subscription::none()
        };

        iced::Subscription::batch([frames_sub, ramp_sub, clock_sub, playback_sub])
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new().0
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    #[derive(Debug, Clone, Copy)]
    pub struct Inputs {
        pub power_saving: bool,
        pub fade_animating: bool,
        pub accelerating: bool,
        pub on_miller: bool,
        pub playing: bool,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Decisions {
        pub frames: bool,
        pub ramp: bool,
        pub clock: bool,
        pub playback: bool,
    }

    /// Power saving suppresses the per-frame redraw except while a fade is
    /// mid-flight; the interval timers are cheap and always follow their
    /// own conditions.
    pub fn decide(inputs: Inputs) -> Decisions {
        Decisions {
            frames: !inputs.power_saving || inputs.fade_animating,
            ramp: inputs.accelerating,
            clock: inputs.on_miller,
            playback: inputs.playing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::subscription_logic::*;

    fn base() -> Inputs {
        Inputs {
            power_saving: false,
            fade_animating: false,
            accelerating: false,
            on_miller: false,
            playing: false,
        }
    }

    #[test]
    fn frames_run_by_default() {
        assert!(decide(base()).frames);
    }

    #[test]
    fn power_saving_stops_frames_unless_fading() {
        let mut inputs = base();
        inputs.power_saving = true;
        assert!(!decide(inputs).frames);

        inputs.fade_animating = true;
        assert!(decide(inputs).frames, "fades must finish even when saving power");
    }

    #[test]
    fn ramp_runs_only_while_accelerating() {
        let mut inputs = base();
        assert!(!decide(inputs).ramp);
        inputs.accelerating = true;
        assert!(decide(inputs).ramp);
    }

    #[test]
    fn timers_are_independent_of_each_other() {
        // Exhaustive over all input combinations: each timer follows its
        // own flag and nothing else.
        for bits in 0..32u8 {
            let inputs = Inputs {
                power_saving: bits & 1 != 0,
                fade_animating: bits & 2 != 0,
                accelerating: bits & 4 != 0,
                on_miller: bits & 8 != 0,
                playing: bits & 16 != 0,
            };
            let decisions = decide(inputs);
            assert_eq!(decisions.ramp, inputs.accelerating);
            assert_eq!(decisions.clock, inputs.on_miller);
            assert_eq!(decisions.playback, inputs.playing);
        }
    }
}
