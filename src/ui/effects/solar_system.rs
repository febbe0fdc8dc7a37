//! Saturn portal scene: the eight inner planets around the sun, with a
//! wormhole marker trailing Saturn

use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke, Text};
use iced::{Color, Pixels, Point, Rectangle, Renderer, Theme, mouse};
use std::f32::consts::PI;

struct Body {
    name: &'static str,
    radius: f32,
    /// Orbital distance as a fraction of the scene radius
    distance: f32,
    color: Color,
    orbit_speed: f32,
    has_rings: bool,
}

const SUN_COLOR: Color = Color::from_rgb(0.992, 0.722, 0.075);
const RING_COLOR: Color = Color::from_rgb(0.855, 0.627, 0.427);

const BODIES: [Body; 8] = [
    Body {
        name: "Mercurio",
        radius: 5.0,
        distance: 0.2,
        color: Color::from_rgb(0.627, 0.322, 0.176),
        orbit_speed: 0.008,
        has_rings: false,
    },
    Body {
        name: "Venus",
        radius: 8.0,
        distance: 0.3,
        color: Color::from_rgb(0.871, 0.722, 0.529),
        orbit_speed: 0.006,
        has_rings: false,
    },
    Body {
        name: "Tierra",
        radius: 9.0,
        distance: 0.4,
        color: Color::from_rgb(0.294, 0.612, 0.827),
        orbit_speed: 0.004,
        has_rings: false,
    },
    Body {
        name: "Marte",
        radius: 6.0,
        distance: 0.5,
        color: Color::from_rgb(0.804, 0.361, 0.361),
        orbit_speed: 0.003,
        has_rings: false,
    },
    Body {
        name: "Júpiter",
        radius: 20.0,
        distance: 0.6,
        color: Color::from_rgb(0.855, 0.627, 0.427),
        orbit_speed: 0.002,
        has_rings: false,
    },
    Body {
        name: "Saturno",
        radius: 17.0,
        distance: 0.7,
        color: Color::from_rgb(0.957, 0.773, 0.259),
        orbit_speed: 0.001,
        has_rings: true,
    },
    Body {
        name: "Urano",
        radius: 12.0,
        distance: 0.8,
        color: Color::from_rgb(0.698, 1.0, 1.0),
        orbit_speed: 0.0008,
        has_rings: false,
    },
    Body {
        name: "Neptuno",
        radius: 11.0,
        distance: 0.9,
        color: Color::from_rgb(0.357, 0.357, 1.0),
        orbit_speed: 0.0006,
        has_rings: false,
    },
];

/// Per-planet orbital phase
#[derive(Debug, Default)]
pub struct SolarSystem {
    angles: [f32; BODIES.len()],
}

impl SolarSystem {
    pub fn tick(&mut self) {
        for (angle, body) in self.angles.iter_mut().zip(&BODIES) {
            *angle += body.orbit_speed;
        }
    }
}

pub struct SolarSystemScene<'a> {
    pub system: &'a SolarSystem,
}

impl<Message> canvas::Program<Message> for SolarSystemScene<'_> {
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
        let scene_radius = (bounds.width.min(bounds.height) / 2.0) * 0.8;

        // Sun halo approximated with stacked translucent discs
        let halo = [
            (80.0, 0.1),
            (60.0, 0.25),
            (40.0, 1.0),
        ];
        for (radius, alpha) in halo {
            frame.fill(
                &Path::circle(center, radius),
                Color { a: alpha, ..SUN_COLOR },
            );
        }

        for (body, &angle) in BODIES.iter().zip(&self.system.angles) {
            let distance = scene_radius * body.distance;
            frame.stroke(
                &Path::circle(center, distance),
                Stroke::default()
                    .with_width(1.0)
                    .with_color(Color::from_rgba(1.0, 1.0, 1.0, 0.1)),
            );

            let pos = Point::new(
                center.x + angle.cos() * distance,
                center.y + angle.sin() * distance,
            );
            frame.fill(&Path::circle(pos, body.radius), body.color);

            if body.has_rings {
                frame.stroke(
                    &Path::circle(pos, body.radius * 1.8),
                    Stroke::default().with_width(3.0).with_color(RING_COLOR),
                );

                let wormhole_angle = angle + PI / 6.0;
                let wormhole = Point::new(
                    center.x + wormhole_angle.cos() * (distance + 50.0),
                    center.y + wormhole_angle.sin() * (distance + 50.0),
                );
                draw_wormhole(&mut frame, wormhole);
            }

            frame.fill_text(Text {
                content: body.name.to_string(),
                position: Point::new(pos.x, pos.y - body.radius - 8.0),
                color: Color::from_rgba(1.0, 1.0, 1.0, 0.7),
                size: Pixels(11.0),
                align_x: iced::alignment::Horizontal::Center.into(),
                align_y: iced::alignment::Vertical::Bottom,
                ..Text::default()
            });
        }

        vec![frame.into_geometry()]
    }
}

fn draw_wormhole(frame: &mut Frame, at: Point) {
    const RADIUS: f32 = 25.0;
    let layers = [
        (2.0, Color::from_rgba(0.54, 0.17, 0.89, 0.2)),
        (1.0, Color::from_rgba(0.0, 0.58, 1.0, 0.4)),
        (0.5, Color::from_rgba(0.54, 0.17, 0.89, 0.8)),
    ];
    for (scale, color) in layers {
        frame.fill(&Path::circle(at, RADIUS * scale), color);
    }
    for i in 1..=3u32 {
        frame.stroke(
            &Path::circle(at, RADIUS * (1.0 + i as f32 * 0.2)),
            Stroke::default()
                .with_width(2.0)
                .with_color(Color::from_rgba(0.54, 0.17, 0.89, 0.3 / i as f32)),
        );
    }
    frame.fill_text(Text {
        content: "Agujero de Gusano".to_string(),
        position: Point::new(at.x, at.y + RADIUS * 2.5),
        color: Color::WHITE,
        size: Pixels(14.0),
        align_x: iced::alignment::Horizontal::Center.into(),
        align_y: iced::alignment::Vertical::Top,
        ..Text::default()
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inner_planets_orbit_faster() {
        let mut system = SolarSystem::default();
        for _ in 0..1000 {
            system.tick();
        }
        for pair in system.angles.windows(2) {
            assert!(pair[0] > pair[1]);
        }
    }
}
