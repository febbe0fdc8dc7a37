//! Travel report generation for the wormhole journey
//!
//! Every completed jump produces a randomized flight record. The generator
//! takes the random source as an explicit argument so the output is
//! deterministic under a seeded RNG.

use rand::Rng;

/// Canned anomaly log lines, in the ship's original Spanish
const ANOMALIES: [&str; 10] = [
    "Fluctuación cuántica detectada en el sector 7",
    "Perturbación gravitacional menor en el horizonte de eventos",
    "Interferencia temporal en la matriz de navegación",
    "Eco dimensional registrado en los sensores",
    "Resonancia harmónica en el campo de contención",
    "Variación en la densidad del espacio-tiempo",
    "Pulso electromagnético no identificado",
    "Patrón de ondas gravitacionales inusual",
    "Distorsión temporal localizada",
    "Singularidad cuántica momentánea",
];

/// Record of a completed wormhole jump
#[derive(Debug, Clone, PartialEq)]
pub struct TravelReport {
    /// Peak velocity as a multiple of c, in [4, 6]
    pub max_speed: f64,
    /// Subjective trip duration in seconds, in [5, 15]
    pub duration: f64,
    /// Light-years covered, in [500_000, 1_000_000)
    pub distance: u64,
    /// Time dilation factor, in [1, 6]
    pub time_distortion: f64,
    /// Energy consumed as a percentage, in [50, 100)
    pub energy: u8,
    /// 1-3 unique anomaly lines from the canned list
    pub anomalies: Vec<&'static str>,
}

impl TravelReport {
    /// Generate a random report from an explicit random source
    pub fn generate(rng: &mut impl Rng) -> Self {
        let mut pool: Vec<&'static str> = ANOMALIES.to_vec();
        let count = rng.random_range(1..=3);
        let mut anomalies = Vec::with_capacity(count);
        for _ in 0..count {
            let idx = rng.random_range(0..pool.len());
            anomalies.push(pool.swap_remove(idx));
        }

        Self {
            max_speed: round2(rng.random::<f64>() * 2.0 + 4.0),
            duration: round2(rng.random::<f64>() * 10.0 + 5.0),
            distance: rng.random_range(500_000..1_000_000),
            time_distortion: round2(rng.random::<f64>() * 5.0 + 1.0),
            energy: rng.random_range(50..100),
            anomalies,
        }
    }

    /// Peak velocity with two fixed decimals ("4.50c")
    pub fn speed_display(&self) -> String {
        format!("{:.2}c", self.max_speed)
    }

    /// Trip duration with two fixed decimals ("7.00s")
    pub fn duration_display(&self) -> String {
        format!("{:.2}s", self.duration)
    }

    /// Dilation factor with two fixed decimals ("1.25x")
    pub fn distortion_display(&self) -> String {
        format!("{:.2}x", self.time_distortion)
    }

    /// Distance with thousands separators for display ("842.117")
    pub fn distance_display(&self) -> String {
        let digits = self.distance.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i).is_multiple_of(3) {
                out.push('.');
            }
            out.push(c);
        }
        out
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn report_values_stay_in_documented_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let report = TravelReport::generate(&mut rng);
            assert!((4.0..=6.0).contains(&report.max_speed));
            assert!((5.0..=15.0).contains(&report.duration));
            assert!((500_000..1_000_000).contains(&report.distance));
            assert!((1.0..=6.0).contains(&report.time_distortion));
            assert!((50..100).contains(&report.energy));
        }
    }

    #[test]
    fn anomalies_are_unique_and_bounded() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let report = TravelReport::generate(&mut rng);
            assert!((1..=3).contains(&report.anomalies.len()));
            for (i, a) in report.anomalies.iter().enumerate() {
                assert!(ANOMALIES.contains(a), "anomaly must come from the canned list");
                assert!(
                    !report.anomalies[i + 1..].contains(a),
                    "anomalies must not repeat"
                );
            }
        }
    }

    #[test]
    fn generation_is_deterministic_under_a_fixed_seed() {
        let a = TravelReport::generate(&mut StdRng::seed_from_u64(99));
        let b = TravelReport::generate(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn stat_displays_keep_two_decimals() {
        let report = TravelReport {
            max_speed: 4.5,
            duration: 7.0,
            distance: 500_000,
            time_distortion: 1.0,
            energy: 50,
            anomalies: vec![],
        };
        assert_eq!(report.speed_display(), "4.50c");
        assert_eq!(report.duration_display(), "7.00s");
        assert_eq!(report.distortion_display(), "1.00x");
    }

    #[test]
    fn distance_display_groups_thousands() {
        let report = TravelReport {
            max_speed: 4.0,
            duration: 5.0,
            distance: 734_210,
            time_distortion: 1.0,
            energy: 50,
            anomalies: vec![],
        };
        assert_eq!(report.distance_display(), "734.210");
    }
}
