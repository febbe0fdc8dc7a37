//! Message update handlers - thin dispatcher delegating to submodules

mod audio;
mod gallery;
mod journey;
mod lifecycle;
mod navigation;
mod trivia;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        if let Some(task) = self.handle_lifecycle(&message) {
            return task;
        }
        if let Some(task) = self.handle_navigation(&message) {
            return task;
        }
        if let Some(task) = self.handle_journey(&message) {
            return task;
        }
        if let Some(task) = self.handle_audio(&message) {
            return task;
        }
        if let Some(task) = self.handle_gallery(&message) {
            return task;
        }
        if let Some(task) = self.handle_trivia(&message) {
            return task;
        }

        Task::none()
    }
}
