//! Wormhole jump state machine
//!
//! A jump ramps the travel speed from cruise (1x) up to the 5x maximum in
//! 0.1 steps, holds it there while the wormhole crossing settles, then
//! drops back to cruise and presents a travel report. Repeat jumps are
//! only accepted once the previous report has been dismissed or shown.

use crate::features::report::TravelReport;

/// Cruise speed between jumps
pub const CRUISE_SPEED: f32 = 1.0;
/// Top speed reached at the end of the acceleration ramp
pub const MAX_SPEED: f32 = 5.0;
/// Speed added per ramp tick (one tick every 50ms)
pub const RAMP_STEP: f32 = 0.1;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum JourneyPhase {
    #[default]
    Idle,
    /// Ramping up; ramp ticks arrive every 50ms
    Accelerating,
    /// Holding max speed for the five second crossing
    Settling,
    /// Showing the travel report, back at cruise speed
    Report(TravelReport),
}

#[derive(Debug, Default)]
pub struct Journey {
    pub phase: JourneyPhase,
    pub speed: f32,
    /// Ramp ticks since the jump started; the speed is derived from this
    /// count so accumulated rounding can never stall the ramp short of max
    ramp_ticks: u32,
}

impl Journey {
    pub fn new() -> Self {
        Self {
            phase: JourneyPhase::Idle,
            speed: CRUISE_SPEED,
            ramp_ticks: 0,
        }
    }

    /// Begin a jump. Returns false if one is already in progress.
    pub fn request_jump(&mut self) -> bool {
        match self.phase {
            JourneyPhase::Accelerating | JourneyPhase::Settling => false,
            _ => {
                self.phase = JourneyPhase::Accelerating;
                self.ramp_ticks = 0;
                true
            }
        }
    }

    /// Apply one acceleration step. Returns true exactly once, on the tick
    /// that reaches max speed, so the caller can schedule the settle timer.
    pub fn ramp_tick(&mut self) -> bool {
        if self.phase != JourneyPhase::Accelerating {
            return false;
        }
        self.ramp_ticks += 1;
        self.speed = (CRUISE_SPEED + self.ramp_ticks as f32 * RAMP_STEP).min(MAX_SPEED);
        if self.speed >= MAX_SPEED {
            self.phase = JourneyPhase::Settling;
            true
        } else {
            false
        }
    }

    /// The crossing is over; drop to cruise and present the report.
    pub fn settle(&mut self, report: TravelReport) {
        if self.phase == JourneyPhase::Settling {
            self.speed = CRUISE_SPEED;
            self.phase = JourneyPhase::Report(report);
        }
    }

    pub fn dismiss_report(&mut self) {
        if matches!(self.phase, JourneyPhase::Report(_)) {
            self.phase = JourneyPhase::Idle;
        }
    }

    /// Whether the wormhole visuals should be active
    pub fn is_jumping(&self) -> bool {
        matches!(
            self.phase,
            JourneyPhase::Accelerating | JourneyPhase::Settling
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample_report() -> TravelReport {
        TravelReport::generate(&mut StdRng::seed_from_u64(0))
    }

    #[test]
    fn full_jump_cycle() {
        let mut journey = Journey::new();
        assert!(journey.request_jump());
        assert_eq!(journey.phase, JourneyPhase::Accelerating);

        // 40 steps of 0.1 take the speed from 1.0 to 5.0
        let mut reached = false;
        for _ in 0..40 {
            assert!(!reached, "max speed must be signalled exactly once");
            reached = journey.ramp_tick();
        }
        assert!(reached);
        assert_eq!(journey.phase, JourneyPhase::Settling);
        assert_eq!(journey.speed, MAX_SPEED);

        journey.settle(sample_report());
        assert!(matches!(journey.phase, JourneyPhase::Report(_)));
        assert_eq!(journey.speed, CRUISE_SPEED);

        journey.dismiss_report();
        assert_eq!(journey.phase, JourneyPhase::Idle);
    }

    #[test]
    fn ramp_completes_on_the_fortieth_tick() {
        let mut journey = Journey::new();
        journey.request_jump();
        for tick in 1..40 {
            assert!(!journey.ramp_tick(), "tick {tick} must still be below max");
        }
        assert!(journey.speed < MAX_SPEED);
        assert!(journey.ramp_tick());
        assert_eq!(journey.speed, MAX_SPEED);
    }

    #[test]
    fn speed_never_exceeds_max() {
        let mut journey = Journey::new();
        journey.request_jump();
        for _ in 0..500 {
            journey.ramp_tick();
            assert!(journey.speed <= MAX_SPEED);
        }
    }

    #[test]
    fn jump_requests_are_rejected_mid_flight() {
        let mut journey = Journey::new();
        assert!(journey.request_jump());
        assert!(!journey.request_jump());

        while !journey.ramp_tick() {}
        assert!(!journey.request_jump(), "settling still counts as flying");

        journey.settle(sample_report());
        assert!(journey.request_jump(), "a new jump may start from the report");
    }

    #[test]
    fn stray_timers_are_ignored() {
        let mut journey = Journey::new();
        // Settle without a jump in progress must not fabricate a report
        journey.settle(sample_report());
        assert_eq!(journey.phase, JourneyPhase::Idle);

        // Ramp ticks outside of acceleration leave the speed alone
        journey.speed = CRUISE_SPEED;
        assert!(!journey.ramp_tick());
        assert_eq!(journey.speed, CRUISE_SPEED);
    }
}
