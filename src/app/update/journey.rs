//! Wormhole jump flow

use iced::Task;
use std::time::Duration;

use crate::app::{App, Message, helpers};
use crate::features::TravelReport;

/// How long the ship cruises at max speed before the report appears
const SETTLE_DELAY: Duration = Duration::from_secs(5);

impl App {
    pub(super) fn handle_journey(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::JumpRequested => {
                if self.journey.request_jump() {
                    tracing::info!("Wormhole jump initiated");
                }
                Some(Task::none())
            }

            Message::JumpRampTick => {
                if self.journey.ramp_tick() {
                    // Max speed reached; schedule the end of the crossing
                    Some(Task::perform(helpers::sleep(SETTLE_DELAY), |_| {
                        Message::JumpSettled
                    }))
                } else {
                    Some(Task::none())
                }
            }

            Message::JumpSettled => {
                let report = TravelReport::generate(&mut rand::rng());
                tracing::info!(
                    distance = report.distance,
                    anomalies = report.anomalies.len(),
                    "Jump complete"
                );
                self.journey.settle(report);
                Some(Task::none())
            }

            Message::ReportDismissed => {
                self.journey.dismiss_report();
                Some(Task::none())
            }

            _ => None,
        }
    }
}
