//! Gallery downloads and the lightbox

use iced::Task;

use crate::app::{App, Message};
use crate::features::gallery;

impl App {
    pub(super) fn handle_gallery(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::PhotoFetched { index, result } => {
                match result {
                    Ok(handle) => {
                        self.gallery.photos[*index] = Some(handle.clone());
                    }
                    Err(e) => {
                        // The tile stays a placeholder; the rest of the grid
                        // is unaffected
                        tracing::warn!(
                            "Failed to fetch photo {} ({}): {e}",
                            index,
                            gallery::PHOTOS[*index].title
                        );
                    }
                }
                Some(Task::none())
            }

            Message::LightboxOpened(index) => {
                self.gallery.lightbox = Some(*index);
                Some(Task::none())
            }

            Message::LightboxClosed => {
                self.gallery.lightbox = None;
                Some(Task::none())
            }

            Message::LightboxNext => {
                if let Some(index) = self.gallery.lightbox {
                    self.gallery.lightbox = Some(gallery::next_index(index));
                }
                Some(Task::none())
            }

            Message::LightboxPrevious => {
                if let Some(index) = self.gallery.lightbox {
                    self.gallery.lightbox = Some(gallery::prev_index(index));
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}
