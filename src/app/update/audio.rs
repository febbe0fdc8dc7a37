//! Soundtrack control handlers

use iced::Task;
use std::path::PathBuf;

use crate::app::{App, Message};
use crate::audio::SoundtrackPlayer;

/// Theme track shipped alongside the binary
const THEME_PATH: &str = "assets/theme.mp3";

impl App {
    pub(super) fn handle_audio(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::PlayPressed => {
                self.start_soundtrack();
                Some(Task::none())
            }

            Message::MuteToggled => {
                self.controls.toggle_muted();
                if let Some(player) = &mut self.player {
                    player.set_muted(self.controls.muted);
                }
                self.settings.muted = self.controls.muted;
                if let Err(e) = self.settings.save() {
                    tracing::warn!("Failed to persist settings: {e}");
                }
                Some(Task::none())
            }

            Message::PlaybackTick => {
                if let Some(player) = &mut self.player {
                    if player.finished() {
                        // The theme ran off the end; restart it to loop
                        if let Err(e) = player.play() {
                            tracing::warn!("Failed to loop soundtrack: {e}");
                            self.controls.set_playing(false);
                        }
                    } else {
                        self.controls.set_playing(player.is_playing());
                    }
                }
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Create the player on first use and start the theme. Any failure
    /// degrades to a silent experience with the play affordance shown.
    pub(super) fn start_soundtrack(&mut self) {
        if self.player.is_none() {
            match SoundtrackPlayer::new(PathBuf::from(THEME_PATH), self.settings.volume) {
                Ok(player) => self.player = Some(player),
                Err(e) => {
                    tracing::warn!("Audio output unavailable: {e}");
                    self.controls.set_playing(false);
                    return;
                }
            }
        }

        if let Some(player) = &mut self.player {
            match player.play() {
                Ok(()) => {
                    player.set_muted(self.controls.muted);
                    self.controls.set_playing(true);
                }
                Err(e) => {
                    tracing::warn!("Playback prevented: {e}");
                    self.controls.set_playing(false);
                }
            }
        }
    }
}
