//! Ambient background: a sparse layer of twinkling stars behind every page

use iced::widget::canvas::{self, Frame, Geometry, Path};
use iced::{Color, Point, Rectangle, Renderer, Theme, mouse};
use rand::Rng;
use std::f32::consts::TAU;

const STAR_COUNT: usize = 50;

#[derive(Debug, Clone, Copy)]
struct Twinkle {
    /// Normalized position in [0, 1)
    x: f32,
    y: f32,
    /// Twinkle phase and rate, one full cycle every 3 to 8 seconds
    phase: f32,
    rate: f32,
    base_alpha: f32,
}

/// Twinkling star layer state
#[derive(Debug)]
pub struct TwinkleField {
    stars: Vec<Twinkle>,
}

impl TwinkleField {
    pub fn new(rng: &mut impl Rng) -> Self {
        let stars = (0..STAR_COUNT)
            .map(|_| Twinkle {
                x: rng.random::<f32>(),
                y: rng.random::<f32>(),
                phase: rng.random::<f32>() * TAU,
                rate: TAU / (rng.random::<f32>() * 5.0 + 3.0) / 60.0,
                base_alpha: rng.random::<f32>(),
            })
            .collect();
        Self { stars }
    }

    pub fn tick(&mut self) {
        for star in &mut self.stars {
            star.phase = (star.phase + star.rate) % TAU;
        }
    }
}

impl<Message> canvas::Program<Message> for TwinkleField {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        for star in &self.stars {
            let alpha = star.base_alpha * (0.5 + 0.5 * star.phase.sin());
            frame.fill(
                &Path::circle(
                    Point::new(star.x * bounds.width, star.y * bounds.height),
                    1.5,
                ),
                Color::from_rgba(1.0, 1.0, 1.0, alpha),
            );
        }
        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn stars_keep_their_positions_while_twinkling() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut field = TwinkleField::new(&mut rng);
        let before: Vec<(f32, f32)> = field.stars.iter().map(|s| (s.x, s.y)).collect();
        for _ in 0..600 {
            field.tick();
        }
        let after: Vec<(f32, f32)> = field.stars.iter().map(|s| (s.x, s.y)).collect();
        assert_eq!(before, after);
        for star in &field.stars {
            assert!(star.phase >= 0.0 && star.phase < TAU);
        }
    }
}
