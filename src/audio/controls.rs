//! Play/mute indicator state for the floating audio control
//!
//! The UI derives its affordances from this struct alone, so the indicators
//! can never contradict the actual flags: the play button is shown exactly
//! when `playing` is false, and the mute icon tracks `muted` independently.

/// Audio control indicator state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub playing: bool,
    pub muted: bool,
}

impl Controls {
    /// Mark playback as started or stopped (e.g. after a rejected start)
    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    /// Flip the mute flag, leaving play state untouched
    pub fn toggle_muted(&mut self) {
        self.muted = !self.muted;
    }

    /// Whether the view should offer a play button
    pub fn shows_play_affordance(&self) -> bool {
        !self.playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_affordance_mirrors_playing_flag() {
        let mut controls = Controls::default();
        assert!(controls.shows_play_affordance());

        controls.set_playing(true);
        assert!(!controls.shows_play_affordance());

        controls.set_playing(false);
        assert!(controls.shows_play_affordance());
    }

    #[test]
    fn mute_is_independent_of_play_state() {
        let mut controls = Controls::default();
        controls.set_playing(true);
        controls.toggle_muted();
        assert!(controls.muted);
        assert!(controls.playing, "muting must not stop playback");

        controls.set_playing(false);
        assert!(controls.muted, "stopping must not unmute");

        controls.toggle_muted();
        assert!(!controls.muted);
    }

    #[test]
    fn indicators_never_contradict() {
        // Exhaustive over the whole state space: the play affordance and the
        // playing flag must always disagree, for every mute state.
        for playing in [false, true] {
            for muted in [false, true] {
                let controls = Controls { playing, muted };
                assert_ne!(controls.shows_play_affordance(), controls.playing);
            }
        }
    }
}
