//! Startup phases, animation frames and the wall clock

use chrono::Utc;
use iced::Task;

use crate::app::state::Phase;
use crate::app::{App, Message};
use crate::ui::components::navbar::NavItem;

impl App {
    pub(super) fn handle_lifecycle(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::LoadingFinished => {
                if self.phase == Phase::Loading {
                    self.phase = Phase::Welcome;
                }
                Some(Task::none())
            }

            Message::StartJourney => {
                self.phase = Phase::Ready;
                self.fade.reset();
                self.fade.fade_in();
                self.now = Utc::now();
                self.start_soundtrack();
                Some(Task::none())
            }

            Message::AnimationTick(now) => {
                self.fade.tick(*now);
                self.tick_scenes();
                Some(Task::none())
            }

            Message::ClockTick => {
                self.now = Utc::now();
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Advance only the scenes that are actually on screen
    fn tick_scenes(&mut self) {
        match self.phase {
            Phase::Loading => self.scenes.spinner.tick(),
            Phase::Welcome => self.scenes.twinkle.tick(),
            Phase::Ready => {
                self.scenes.twinkle.tick();
                match self.active_nav {
                    NavItem::Home => {}
                    NavItem::Journey => {
                        let mut rng = rand::rng();
                        self.scenes.starfield.tick(
                            self.journey.speed,
                            self.journey.is_jumping(),
                            &mut rng,
                        );
                    }
                    NavItem::Miller => self.scenes.orbit.tick(),
                    NavItem::System => self.scenes.solar_system.tick(),
                    NavItem::Gargantua => self.scenes.gargantua.tick(),
                    NavItem::Trivia | NavItem::Gallery | NavItem::Dedication => {}
                }
            }
        }
    }
}
