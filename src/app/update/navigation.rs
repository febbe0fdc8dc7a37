//! Section navigation

use chrono::Utc;
use iced::Task;

use crate::app::{App, Message};
use crate::ui::components::navbar::NavItem;

impl App {
    pub(super) fn handle_navigation(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Navigate(item) => {
                if self.active_nav != *item {
                    tracing::debug!("Navigating to {:?}", item);
                    self.active_nav = *item;
                    // Refresh the clocks right away so the Miller page never
                    // opens on a stale second
                    if *item == NavItem::Miller {
                        self.now = Utc::now();
                    }
                }
                Some(Task::none())
            }
            Message::InfoToggled(item) => {
                match item {
                    NavItem::Miller => self.toggles.miller_info = !self.toggles.miller_info,
                    NavItem::System => self.toggles.system_info = !self.toggles.system_info,
                    _ => {}
                }
                Some(Task::none())
            }
            Message::ExpandToggled(item) => {
                match item {
                    NavItem::Miller => {
                        self.toggles.miller_expanded = !self.toggles.miller_expanded;
                    }
                    NavItem::System => {
                        self.toggles.system_expanded = !self.toggles.system_expanded;
                    }
                    NavItem::Gargantua => {
                        self.toggles.gargantua_expanded = !self.toggles.gargantua_expanded;
                    }
                    _ => {}
                }
                Some(Task::none())
            }
            _ => None,
        }
    }
}
