//! Hyperspace starfield for the wormhole journey
//!
//! A fixed pool of stars streams toward the viewer; a star crossing the
//! near plane is respawned in place at maximum depth, so the pool never
//! grows or shrinks. While a jump is active, a wormhole disc grows under
//! the stars and a distortion scalar swirls their projection.

use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke};
use iced::{Color, Point, Rectangle, Renderer, Theme, mouse};
use rand::Rng;

/// Number of stars in the recycling pool
pub const STAR_COUNT: usize = 1200;
/// Far plane: freshly spawned stars start here
pub const MAX_DEPTH: f32 = 1500.0;
/// Near plane: stars below this depth are recycled
const NEAR_PLANE: f32 = 1.0;
/// Wormhole radius growth per frame
const WORMHOLE_STEP: f32 = 2.0;
/// Logical cap for the wormhole radius
const WORMHOLE_MAX: f32 = 1600.0;
/// Distortion ramp per frame
const DISTORTION_STEP: f32 = 0.02;
/// Wormhole rotation per frame
const ROTATION_STEP: f32 = 0.02;

/// One star of the pool; x and y are normalized to [-0.5, 0.5)
#[derive(Debug, Clone, Copy)]
struct Star {
    x: f32,
    y: f32,
    z: f32,
    color: Color,
}

impl Star {
    fn spawn(rng: &mut impl Rng, z: f32) -> Self {
        Self {
            x: rng.random::<f32>() - 0.5,
            y: rng.random::<f32>() - 0.5,
            z,
            // Blue-white range: hue 200-260, lightness 60-100%
            color: hsl(
                rng.random::<f32>() * 60.0 + 200.0,
                1.0,
                rng.random::<f32>() * 0.4 + 0.6,
            ),
        }
    }
}

/// Starfield entity state, owned by the journey section
#[derive(Debug)]
pub struct Starfield {
    stars: Vec<Star>,
    wormhole_radius: f32,
    distortion: f32,
    rotation: f32,
}

impl Starfield {
    /// Seed the pool with a random scatter across the full depth range
    pub fn new(rng: &mut impl Rng) -> Self {
        let stars = (0..STAR_COUNT)
            .map(|_| {
                let depth = rng.random::<f32>() * MAX_DEPTH;
                Star::spawn(rng, depth)
            })
            .collect();
        Self {
            stars,
            wormhole_radius: 0.0,
            distortion: 0.0,
            rotation: 0.0,
        }
    }

    /// Advance one frame: stream stars, ramp or decay the wormhole
    pub fn tick(&mut self, speed: f32, jumping: bool, rng: &mut impl Rng) {
        for star in &mut self.stars {
            star.z -= speed * 10.0;
            if star.z < NEAR_PLANE {
                // Reuse the slot; only position and color are refreshed
                *star = Star::spawn(rng, MAX_DEPTH);
            }
        }

        if jumping {
            self.wormhole_radius = (self.wormhole_radius + WORMHOLE_STEP).min(WORMHOLE_MAX);
            self.distortion = (self.distortion + DISTORTION_STEP).min(1.0);
            self.rotation += ROTATION_STEP;
        } else {
            self.wormhole_radius = (self.wormhole_radius - WORMHOLE_STEP).max(0.0);
            self.distortion = (self.distortion - DISTORTION_STEP).max(0.0);
        }
    }

    pub fn star_count(&self) -> usize {
        self.stars.len()
    }

    #[cfg(test)]
    fn depths(&self) -> impl Iterator<Item = f32> + '_ {
        self.stars.iter().map(|s| s.z)
    }
}

/// Borrowing canvas program over a starfield
pub struct StarfieldScene<'a> {
    pub field: &'a Starfield,
    pub speed: f32,
}

impl<Message> canvas::Program<Message> for StarfieldScene<'_> {
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
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), Color::BLACK);

        let field = self.field;
        if field.wormhole_radius > 0.0 {
            draw_wormhole(&mut frame, center, field.wormhole_radius.min(bounds.width.max(bounds.height)));
        }

        for star in &field.stars {
            // Center-relative pixel position before perspective
            let mut bx = star.x * bounds.width;
            let mut by = star.y * bounds.height;

            if field.distortion > 0.0 {
                let distance = (bx * bx + by * by).sqrt();
                let angle = by.atan2(bx) + field.rotation * field.distortion;
                let swirl = 1.0 + distance * field.distortion * 0.001;
                bx = angle.cos() * distance * swirl;
                by = angle.sin() * distance * swirl;
            }

            let k = 128.0 / star.z * (1.0 + field.distortion);
            let px = bx * k + center.x;
            let py = by * k + center.y;
            let on_screen =
                px >= 0.0 && px <= bounds.width && py >= 0.0 && py <= bounds.height;
            if !on_screen {
                continue;
            }

            let size = (1.0 - star.z / MAX_DEPTH) * 3.0;
            frame.fill(&Path::circle(Point::new(px, py), size), star.color);

            if self.speed > 2.0 {
                let streak = self.speed * 5.0;
                let angle = by.atan2(bx) + field.rotation;
                let tail = Point::new(px - streak * angle.cos(), py - streak * angle.sin());
                frame.stroke(
                    &Path::line(Point::new(px, py), tail),
                    Stroke::default()
                        .with_width((size / 2.0).max(0.5))
                        .with_color(star.color),
                );
            }
        }

        vec![frame.into_geometry()]
    }
}

/// Concentric translucent discs and rings standing in for the original's
/// radial gradient
fn draw_wormhole(frame: &mut Frame, center: Point, radius: f32) {
    let layers = [
        (1.0, Color::from_rgba(0.54, 0.17, 0.89, 0.10)),
        (0.6, Color::from_rgba(0.0, 0.58, 1.0, 0.20)),
        (0.3, Color::from_rgba(0.54, 0.17, 0.89, 0.20)),
    ];
    for (scale, color) in layers {
        frame.fill(&Path::circle(center, radius * scale), color);
    }

    for i in 0..5 {
        let ring = Path::circle(center, radius * (0.2 + i as f32 * 0.2));
        frame.stroke(
            &ring,
            Stroke::default()
                .with_width(2.0)
                .with_color(Color::from_rgba(0.54, 0.17, 0.89, 0.1 - i as f32 * 0.02)),
        );
    }
}

/// Convert an HSL color (hue in degrees, s and l in 0..1) to RGB
fn hsl(hue: f32, saturation: f32, lightness: f32) -> Color {
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let h = (hue.rem_euclid(360.0)) / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    Color::from_rgb(r + m, g + m, b + m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn pool_size_is_invariant_across_ticks() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut field = Starfield::new(&mut rng);
        assert_eq!(field.star_count(), STAR_COUNT);
        for _ in 0..1000 {
            field.tick(5.0, true, &mut rng);
            assert_eq!(field.star_count(), STAR_COUNT);
        }
    }

    #[test]
    fn recycled_stars_respawn_at_max_depth() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut field = Starfield::new(&mut rng);
        // One tick at max speed pushes every star 50 units closer; anything
        // that crossed the near plane must now sit exactly at the far plane.
        field.tick(5.0, false, &mut rng);
        for z in field.depths() {
            assert!(z >= NEAR_PLANE || z == MAX_DEPTH);
            assert!(z <= MAX_DEPTH);
        }
    }

    #[test]
    fn wormhole_ramps_while_jumping_and_decays_after() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut field = Starfield::new(&mut rng);

        field.tick(1.0, true, &mut rng);
        assert_eq!(field.wormhole_radius, WORMHOLE_STEP);
        assert_eq!(field.distortion, DISTORTION_STEP);

        for _ in 0..10_000 {
            field.tick(1.0, true, &mut rng);
        }
        assert_eq!(field.wormhole_radius, WORMHOLE_MAX);
        assert_eq!(field.distortion, 1.0);

        for _ in 0..10_000 {
            field.tick(1.0, false, &mut rng);
        }
        assert_eq!(field.wormhole_radius, 0.0);
        assert_eq!(field.distortion, 0.0);
    }

    #[test]
    fn hsl_conversion_hits_known_points() {
        let white = hsl(0.0, 0.0, 1.0);
        assert!((white.r - 1.0).abs() < 1e-6);
        assert!((white.g - 1.0).abs() < 1e-6);
        assert!((white.b - 1.0).abs() < 1e-6);

        let blue = hsl(240.0, 1.0, 0.5);
        assert!(blue.b > 0.99 && blue.r < 0.01 && blue.g < 0.01);
    }
}
