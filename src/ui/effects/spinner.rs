//! Loading screen wormhole: two counter-rotating glow rings around a void

use iced::widget::canvas::{self, Frame, Geometry, Path};
use iced::{Color, Point, Rectangle, Renderer, Theme, mouse};
use std::f32::consts::TAU;

const SPIN_STEP: f32 = 0.02;

const PURPLE: Color = Color::from_rgb(0.58, 0.2, 0.92);
const BLUE: Color = Color::from_rgb(0.23, 0.51, 0.96);

/// Rotation phase of the loading spinner
#[derive(Debug, Default)]
pub struct Spinner {
    phase: f32,
}

impl Spinner {
    pub fn tick(&mut self) {
        self.phase = (self.phase + SPIN_STEP) % TAU;
    }
}

impl<Message> canvas::Program<Message> for Spinner {
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
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), Color::BLACK);

        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        let radius = bounds.width.min(bounds.height) * 0.3;

        // Two blurred gradient rings, one spinning each way. Each ring is a
        // chain of translucent discs whose color sweeps purple to blue.
        const DOTS: u32 = 48;
        for i in 0..DOTS {
            let t = i as f32 / DOTS as f32;
            let blend = (t * TAU).sin() * 0.5 + 0.5;
            let color = Color {
                r: PURPLE.r + (BLUE.r - PURPLE.r) * blend,
                g: PURPLE.g + (BLUE.g - PURPLE.g) * blend,
                b: PURPLE.b + (BLUE.b - PURPLE.b) * blend,
                a: 0.35,
            };

            let forward = self.phase + t * TAU;
            frame.fill(
                &Path::circle(
                    Point::new(
                        center.x + forward.cos() * radius,
                        center.y + forward.sin() * radius,
                    ),
                    radius * 0.25,
                ),
                color,
            );

            let backward = -self.phase + t * TAU;
            frame.fill(
                &Path::circle(
                    Point::new(
                        center.x + backward.cos() * radius * 0.85,
                        center.y + backward.sin() * radius * 0.85,
                    ),
                    radius * 0.2,
                ),
                color,
            );
        }

        // The void at the center
        frame.fill(&Path::circle(center, radius * 0.6), Color::BLACK);

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_wraps_at_a_full_turn() {
        let mut spinner = Spinner::default();
        for _ in 0..10_000 {
            spinner.tick();
            assert!(spinner.phase >= 0.0 && spinner.phase < TAU);
        }
    }
}
