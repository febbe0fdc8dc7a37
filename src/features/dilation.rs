//! Time dilation clocks for the Miller page
//!
//! Two displays derived from one wall-clock source: time elapsed on Earth
//! since the film's release, and the equivalent time experienced on Miller's
//! planet (1 hour there = 7 years here). Everything is a pure function of
//! the elapsed seconds so the formatting is testable without a real clock.

use chrono::{DateTime, Utc};

/// Interstellar's theatrical release: 2014-11-07 00:00:00 UTC
const RELEASE_TIMESTAMP: i64 = 1_415_318_400;

/// Earth-side display factor carried over from the original site
const EARTH_FACTOR: f64 = 1.25;

const SECS_PER_MINUTE: f64 = 60.0;
const SECS_PER_HOUR: f64 = 3_600.0;
const SECS_PER_DAY: f64 = 86_400.0;
const SECS_PER_YEAR: f64 = 365.0 * SECS_PER_DAY;

/// One Miller hour equals seven Earth years
const MILLER_HOUR_SECS: f64 = 7.0 * SECS_PER_YEAR;

/// Seconds elapsed since release at the given instant
pub fn elapsed_since_release(now: DateTime<Utc>) -> i64 {
    now.timestamp() - RELEASE_TIMESTAMP
}

/// Seconds shown on the Earth clock for the given elapsed time
pub fn earth_seconds(elapsed: i64) -> f64 {
    elapsed as f64 * EARTH_FACTOR
}

/// Hours experienced on Miller for the given elapsed time
pub fn miller_hours(elapsed: i64) -> f64 {
    elapsed as f64 / MILLER_HOUR_SECS
}

/// Format the Earth clock as "Y años, D días, H:M:S"
pub fn format_earth(seconds: f64) -> String {
    let years = (seconds / SECS_PER_YEAR).floor();
    let days = ((seconds % SECS_PER_YEAR) / SECS_PER_DAY).floor();
    let hours = ((seconds % SECS_PER_DAY) / SECS_PER_HOUR).floor();
    let minutes = ((seconds % SECS_PER_HOUR) / SECS_PER_MINUTE).floor();
    let secs = (seconds % SECS_PER_MINUTE).floor();
    format!("{years} años, {days} días, {hours}:{minutes}:{secs}")
}

/// Format the Miller clock as "H horas, M minutos, S segundos"
pub fn format_miller(hours: f64) -> String {
    let whole_hours = hours.floor();
    let minutes = ((hours % 1.0) * 60.0).floor();
    let seconds = (((hours % 1.0) * 60.0 % 1.0) * 60.0).floor();
    format!("{whole_hours} horas, {minutes} minutos, {seconds} segundos")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn elapsed_is_zero_at_release() {
        let release = Utc.timestamp_opt(RELEASE_TIMESTAMP, 0).unwrap();
        assert_eq!(elapsed_since_release(release), 0);
    }

    #[test]
    fn earth_clock_applies_display_factor() {
        assert_eq!(earth_seconds(100), 125.0);
        assert_eq!(earth_seconds(0), 0.0);
    }

    #[test]
    fn one_miller_hour_is_seven_earth_years() {
        let seven_years = (7.0 * SECS_PER_YEAR) as i64;
        let hours = miller_hours(seven_years);
        assert!((hours - 1.0).abs() < 1e-9);
    }

    #[test]
    fn earth_formatting_breaks_down_components() {
        // 1 year, 2 days, 3 hours, 4 minutes, 5 seconds
        let seconds = SECS_PER_YEAR + 2.0 * SECS_PER_DAY + 3.0 * SECS_PER_HOUR + 4.0 * 60.0 + 5.0;
        assert_eq!(format_earth(seconds), "1 años, 2 días, 3:4:5");
    }

    #[test]
    fn miller_formatting_breaks_down_components() {
        // 2 hours, 30 minutes, 45 seconds
        let hours = 2.0 + 30.0 / 60.0 + 45.0 / 3_600.0;
        assert_eq!(format_miller(hours), "2 horas, 30 minutos, 45 segundos");
    }
}
