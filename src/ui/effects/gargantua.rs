//! Black hole visualization: accretion disk, event horizon and a pulsing
//! gravitational lensing halo

use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke};
use iced::{Color, Point, Rectangle, Renderer, Theme, mouse};
use std::f32::consts::TAU;

const SPIN_STEP: f32 = 0.01;
const PULSE_STEP: f32 = 0.03;
const LENSING_RINGS: u32 = 8;

const DISK_ORANGE: Color = Color::from_rgb(1.0, 0.42, 0.0);
const DISK_YELLOW: Color = Color::from_rgb(1.0, 0.84, 0.0);

/// Rotation and pulse phase of the black hole scene
#[derive(Debug, Default)]
pub struct Gargantua {
    spin: f32,
    pulse: f32,
}

impl Gargantua {
    pub fn tick(&mut self) {
        self.spin = (self.spin + SPIN_STEP) % TAU;
        self.pulse = (self.pulse + PULSE_STEP) % TAU;
    }
}

pub struct GargantuaScene<'a> {
    pub hole: &'a Gargantua,
}

impl<Message> canvas::Program<Message> for GargantuaScene<'_> {
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
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        let outer = bounds.width.min(bounds.height) / 2.0 - 10.0;
        let horizon = outer * 0.55;

        // Accretion disk: glowing dots carried around the horizon, their
        // color blending orange to yellow with the spin phase
        const DOTS: u32 = 96;
        for i in 0..DOTS {
            let angle = self.hole.spin + i as f32 / DOTS as f32 * TAU;
            let blend = (angle.sin() + 1.0) / 2.0;
            let color = Color {
                r: DISK_ORANGE.r + (DISK_YELLOW.r - DISK_ORANGE.r) * blend,
                g: DISK_ORANGE.g + (DISK_YELLOW.g - DISK_ORANGE.g) * blend,
                b: DISK_ORANGE.b + (DISK_YELLOW.b - DISK_ORANGE.b) * blend,
                a: 0.75,
            };
            let ring = horizon + (outer - horizon) * 0.5;
            let pos = Point::new(
                center.x + angle.cos() * ring,
                center.y + angle.sin() * ring,
            );
            frame.fill(&Path::circle(pos, (outer - horizon) * 0.35), color);
        }

        // Event horizon swallows the inner edge of the disk
        frame.fill(&Path::circle(center, horizon), Color::BLACK);
        frame.fill(
            &Path::circle(center, horizon),
            Color::from_rgba(0.1, 0.15, 0.35, 0.2),
        );

        // Lensing halo, breathing with the pulse phase
        let pulse = 0.3 * (0.5 + 0.5 * self.hole.pulse.sin());
        for i in 0..LENSING_RINGS {
            let scale = 1.0 + i as f32 * 0.1;
            frame.stroke(
                &Path::circle(center, horizon * scale),
                Stroke::default()
                    .with_width(1.0)
                    .with_color(Color::from_rgba(0.23, 0.51, 0.96, 0.2 * pulse)),
            );
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_stay_within_a_full_turn() {
        let mut hole = Gargantua::default();
        for _ in 0..100_000 {
            hole.tick();
            assert!(hole.spin >= 0.0 && hole.spin < TAU);
            assert!(hole.pulse >= 0.0 && hole.pulse < TAU);
        }
    }
}
