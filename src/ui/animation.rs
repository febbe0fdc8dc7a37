//! Panel fade animation using iced_anim
//!
//! A single eased value driving overlay and panel reveals. Ticked from the
//! frame subscription like every other animation in the app.

use std::time::Duration;

use iced::time::Instant;
use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Fade duration for panels and overlays
const FADE_DURATION: Duration = Duration::from_millis(300);

fn fade_easing() -> Easing {
    Easing::EASE.with_duration(FADE_DURATION)
}

/// A 0..1 fade used for panel and overlay reveals
#[derive(Debug)]
pub struct Fade {
    animation: Animated<f32>,
}

impl Default for Fade {
    fn default() -> Self {
        Self::new()
    }
}

impl Fade {
    pub fn new() -> Self {
        Self {
            animation: Animated::transition(0.0, fade_easing()),
        }
    }

    /// Fade in toward fully visible
    pub fn fade_in(&mut self) {
        self.animation.update(1.0.into());
    }

    /// Snap to fully hidden without animating
    pub fn reset(&mut self) {
        self.animation = Animated::transition(0.0, fade_easing());
    }

    /// Current opacity (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        *self.animation.value()
    }

    /// Whether the fade is still easing toward its target
    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Advance the animation; call once per animation frame
    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let fade = Fade::new();
        assert_eq!(fade.progress(), 0.0);
        assert!(!fade.is_animating());
    }

    #[test]
    fn fade_in_starts_easing_toward_visible() {
        let mut fade = Fade::new();
        fade.fade_in();
        assert!(fade.is_animating() || fade.progress() > 0.0);
    }

    #[test]
    fn reset_snaps_to_hidden() {
        let mut fade = Fade::new();
        fade.fade_in();
        fade.reset();
        assert_eq!(fade.progress(), 0.0);
        assert!(!fade.is_animating());
    }

    #[test]
    fn progress_stays_in_unit_range() {
        let mut fade = Fade::new();
        fade.fade_in();
        fade.tick(Instant::now());
        let p = fade.progress();
        assert!((0.0..=1.0).contains(&p));
    }
}
