//! Trivia carousel navigation

use iced::Task;

use crate::app::{App, Message};
use crate::features::trivia;

impl App {
    pub(super) fn handle_trivia(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::TriviaNext => {
                self.trivia_index = trivia::next_index(self.trivia_index);
                Some(Task::none())
            }

            Message::TriviaPrevious => {
                self.trivia_index = trivia::prev_index(self.trivia_index);
                Some(Task::none())
            }

            Message::TriviaSelected(index) => {
                if *index < trivia::CARDS.len() {
                    self.trivia_index = *index;
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}
