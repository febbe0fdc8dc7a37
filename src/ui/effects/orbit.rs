//! Orbital diagram: Miller's planet and the Endurance circling Gargantua

use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke, Text};
use iced::widget::canvas::stroke::{LineDash, Style};
use iced::{Color, Pixels, Point, Rectangle, Renderer, Theme, Vector, mouse};
use std::f32::consts::PI;

const PLANET_STEP: f32 = 0.002;
const SHIP_STEP: f32 = 0.003;

const LABEL_BLUE: Color = Color::from_rgb(0.26, 0.6, 0.88);
const PLANET_BLUE: Color = Color::from_rgb(0.0, 0.584, 1.0);
const ACCRETION_ORANGE: Color = Color::from_rgb(1.0, 0.42, 0.0);

/// Orbital phase of the planet and the ship
#[derive(Debug, Default)]
pub struct Orbit {
    planet_angle: f32,
    ship_angle: f32,
}

impl Orbit {
    pub fn tick(&mut self) {
        self.planet_angle += PLANET_STEP;
        self.ship_angle += SHIP_STEP;
    }
}

pub struct OrbitScene<'a> {
    pub orbit: &'a Orbit,
}

impl<Message> canvas::Program<Message> for OrbitScene<'_> {
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
        let half = bounds.width.min(bounds.height) / 2.0;
        let orbit_radius = half * 0.6;
        let hole_radius = half * 0.2;

        // Faint lensing rings behind everything
        for i in 1..=3u32 {
            frame.stroke(
                &Path::circle(center, hole_radius * (1.0 + i as f32 * 0.2)),
                Stroke::default()
                    .with_width(1.0)
                    .with_color(Color { a: 0.1, ..LABEL_BLUE }),
            );
        }

        // Dashed orbit track
        frame.stroke(
            &Path::circle(center, orbit_radius),
            Stroke {
                style: Style::Solid(Color::from_rgba(1.0, 1.0, 1.0, 0.2)),
                width: 1.0,
                line_dash: LineDash {
                    segments: &[5.0, 5.0],
                    offset: 0,
                },
                ..Stroke::default()
            },
        );

        draw_black_hole(&mut frame, center, hole_radius);
        draw_planet(&mut frame, center, orbit_radius, self.orbit.planet_angle);
        draw_ship(&mut frame, center, orbit_radius * 0.8, self.orbit.ship_angle);

        vec![frame.into_geometry()]
    }
}

fn draw_black_hole(frame: &mut Frame, center: Point, radius: f32) {
    // Radial accretion glow, approximated ring by ring
    let layers = [
        (1.5, Color::from_rgba(1.0, 0.42, 0.0, 0.15)),
        (1.2, Color::from_rgba(1.0, 0.42, 0.0, 0.4)),
        (1.05, ACCRETION_ORANGE),
    ];
    for (scale, color) in layers {
        frame.fill(&Path::circle(center, radius * scale), color);
    }
    frame.fill(&Path::circle(center, radius), Color::BLACK);

    label(frame, "Gargantua", center, 16.0, LABEL_BLUE);
    label(
        frame,
        "Horizonte de Eventos",
        Point::new(center.x, center.y + radius + 30.0),
        14.0,
        Color::from_rgba(1.0, 1.0, 1.0, 0.7),
    );
}

fn draw_planet(frame: &mut Frame, center: Point, orbit_radius: f32, angle: f32) {
    let pos = Point::new(
        center.x + angle.cos() * orbit_radius,
        center.y + angle.sin() * orbit_radius,
    );

    frame.fill(
        &Path::circle(pos, 30.0),
        Color { a: 0.3, ..PLANET_BLUE },
    );
    frame.fill(&Path::circle(pos, 20.0), PLANET_BLUE);
    frame.stroke(
        &Path::circle(pos, 20.0),
        Stroke::default()
            .with_width(2.0)
            .with_color(Color::from_rgba(1.0, 1.0, 1.0, 0.5)),
    );

    side_label(frame, "Planeta Miller", pos, center, 60.0);
}

fn draw_ship(frame: &mut Frame, center: Point, distance: f32, angle: f32) {
    let pos = Point::new(
        center.x + angle.cos() * distance,
        center.y + angle.sin() * distance,
    );

    frame.with_save(|frame| {
        frame.translate(Vector::new(pos.x, pos.y));
        frame.rotate(angle + PI / 2.0);

        let hull = Path::new(|builder| {
            builder.move_to(Point::new(0.0, -15.0));
            builder.line_to(Point::new(10.0, 15.0));
            builder.line_to(Point::new(-10.0, 15.0));
            builder.close();
        });
        frame.fill(&hull, Color::WHITE);

        // Engine glow
        frame.fill(
            &Path::circle(Point::new(0.0, 15.0), 10.0),
            Color::from_rgba(0.0, 1.0, 1.0, 0.4),
        );
        frame.fill(
            &Path::circle(Point::new(0.0, 15.0), 5.0),
            Color::from_rgba(0.0, 1.0, 1.0, 0.8),
        );
    });

    side_label(frame, "Endurance", pos, center, 50.0);
}

/// Label placed to the outer side of a body so it never covers the orbit
fn side_label(frame: &mut Frame, text: &str, at: Point, center: Point, offset: f32) {
    let right = at.x > center.x;
    let x = if right { at.x + offset } else { at.x - offset };
    frame.fill_text(Text {
        content: text.to_string(),
        position: Point::new(x, at.y),
        color: LABEL_BLUE,
        size: Pixels(16.0),
        align_x: if right {
            iced::alignment::Horizontal::Left.into()
        } else {
            iced::alignment::Horizontal::Right.into()
        },
        align_y: iced::alignment::Vertical::Center,
        ..Text::default()
    });
}

fn label(frame: &mut Frame, text: &str, at: Point, size: f32, color: Color) {
    frame.fill_text(Text {
        content: text.to_string(),
        position: at,
        color,
        size: Pixels(size),
        align_x: iced::alignment::Horizontal::Center.into(),
        align_y: iced::alignment::Vertical::Center,
        ..Text::default()
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ship_advances_faster_than_planet() {
        let mut orbit = Orbit::default();
        for _ in 0..500 {
            orbit.tick();
        }
        assert!(orbit.ship_angle > orbit.planet_angle);
        assert!((orbit.planet_angle - 500.0 * PLANET_STEP).abs() < 1e-4);
    }
}
