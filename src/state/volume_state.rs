/// Volume level with mute/unmute memory
///
/// Holds a clamped volume level and the last nonzero level, so that unmuting
/// always restores something audible.

use super::mute_state::MuteState;

/// Lowest accepted volume level
pub const MIN_VOLUME: f32 = 0.0;

/// Highest accepted volume level
pub const MAX_VOLUME: f32 = 1.0;

/// Snap a raw level into `[MIN_VOLUME, MAX_VOLUME]`.
///
/// NaN maps to `MIN_VOLUME`, infinities to the nearer bound, and negative
/// zero to plain zero.
pub fn clamp_level(level: f32) -> f32 {
    if level.is_nan() {
        return MIN_VOLUME;
    }

    let level = level.clamp(MIN_VOLUME, MAX_VOLUME);
    if level == 0.0 {
        0.0
    } else {
        level
    }
}

/// Volume control state
///
/// `volume` is always in `[0, 1]`; `unmute_volume` is always in `(0, 1]`.
/// Mute is not stored: a state is muted exactly when its volume is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeState {
    volume: f32,
    unmute_volume: f32,
}

impl VolumeState {
    /// Create a state from any raw level, clamping it like `set_volume`
    pub fn new(initial: f32) -> Self {
        let mut state = Self {
            volume: MAX_VOLUME,
            unmute_volume: MAX_VOLUME,
        };
        state.apply_volume(initial);
        state
    }

    /// Get the current volume level
    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Set the volume level (clamped)
    ///
    /// A nonzero level becomes the new unmute level. Zero keeps the previous
    /// one, so dragging a slider to zero and back via unmute still works.
    pub fn set_volume(&mut self, volume: f32) {
        self.apply_volume(volume);
    }

    /// Level restored by `set_mute(false)`
    pub fn unmute_volume(&self) -> f32 {
        self.unmute_volume
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.volume == 0.0
    }

    /// Mute or unmute without touching the remembered level
    pub fn set_mute(&mut self, mute: bool) {
        let level = if mute { MIN_VOLUME } else { self.unmute_volume };
        self.apply_mute_level(level);
    }

    /// Flip the mute state
    pub fn toggle_mute(&mut self) {
        self.set_mute(!self.is_muted());
    }

    /// Current state as a `MuteState`
    pub fn mute_state(&self) -> MuteState {
        MuteState::from_volume(self.volume)
    }

    /// Volume as a percentage between 0 and 100
    pub fn volume_percent(&self) -> u8 {
        (self.volume * 100.0).round() as u8
    }

    // Normalizing write path: clamps and remembers nonzero levels.
    fn apply_volume(&mut self, volume: f32) {
        let volume = clamp_level(volume);
        self.volume = volume;
        if volume != 0.0 {
            self.unmute_volume = volume;
        }
    }

    // Mute write path: `level` is either zero or the already-valid unmute level.
    fn apply_mute_level(&mut self, level: f32) {
        debug_assert!((MIN_VOLUME..=MAX_VOLUME).contains(&level));
        self.volume = level;
    }
}

impl Default for VolumeState {
    fn default() -> Self {
        Self::new(MAX_VOLUME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_creation() {
        let state = VolumeState::new(0.5);
        assert_eq!(state.volume(), 0.5);
        assert_eq!(state.unmute_volume(), 0.5);
        assert!(!state.is_muted());
    }

    #[test]
    fn test_volume_clamping() {
        let mut state = VolumeState::new(0.4);

        state.set_volume(5.0);
        assert_eq!(state.volume(), 1.0);
        assert_eq!(state.unmute_volume(), 1.0);

        state.set_volume(0.3);
        state.set_volume(-3.0);
        assert_eq!(state.volume(), 0.0);
        assert_eq!(state.unmute_volume(), 0.3); // Unchanged
    }

    #[test]
    fn test_zero_initial_volume_defaults_unmute_to_one() {
        let mut state = VolumeState::new(0.0);
        assert!(state.is_muted());
        assert_eq!(state.unmute_volume(), 1.0);

        state.set_mute(false);
        assert_eq!(state.volume(), 1.0);
    }

    #[test]
    fn test_unmute_restores_prior_level() {
        let mut state = VolumeState::default();
        state.set_volume(0.7);
        state.set_mute(true);
        assert!(state.is_muted());

        state.set_mute(false);
        assert_eq!(state.volume(), 0.7);
    }

    #[test]
    fn test_mute_is_idempotent() {
        let mut state = VolumeState::new(0.6);
        state.set_mute(true);
        state.set_mute(true);
        assert_eq!(state.volume(), 0.0);
        assert_eq!(state.unmute_volume(), 0.6);
    }

    #[test]
    fn test_set_volume_zero_matches_mute() {
        let mut by_slider = VolumeState::new(0.8);
        let mut by_mute = VolumeState::new(0.8);

        by_slider.set_volume(0.0);
        by_mute.set_mute(true);

        assert_eq!(by_slider, by_mute);
    }

    #[test]
    fn test_toggle_symmetry() {
        for initial in [0.0, 0.25, 1.0] {
            let mut state = VolumeState::new(initial);
            let before = state.volume();
            state.toggle_mute();
            state.toggle_mute();
            assert_eq!(state.volume(), before);
        }

        // Muted after a slider drag to zero
        let mut state = VolumeState::new(0.9);
        state.set_volume(0.0);
        state.toggle_mute();
        state.toggle_mute();
        assert_eq!(state.volume(), 0.0);
    }

    #[test]
    fn test_non_finite_input() {
        let mut state = VolumeState::new(0.4);

        state.set_volume(f32::NAN);
        assert_eq!(state.volume(), 0.0);
        assert_eq!(state.unmute_volume(), 0.4);

        state.set_volume(f32::INFINITY);
        assert_eq!(state.volume(), 1.0);

        state.set_volume(f32::NEG_INFINITY);
        assert_eq!(state.volume(), 0.0);
        assert_eq!(state.unmute_volume(), 1.0);

        let state = VolumeState::new(f32::NAN);
        assert_eq!(state.volume(), 0.0);
        assert_eq!(state.unmute_volume(), 1.0);
    }

    #[test]
    fn test_negative_zero_is_normalized() {
        assert!(clamp_level(-0.0).is_sign_positive());
        assert!(clamp_level(-7.5).is_sign_positive());
    }

    #[test]
    fn test_invariants_hold_across_sequences() {
        let inputs = [
            0.3,
            -1.0,
            0.0,
            2.0,
            f32::NAN,
            0.000_1,
            f32::INFINITY,
            -0.0,
            0.75,
        ];
        let mut state = VolumeState::new(0.0);

        for (i, input) in inputs.iter().enumerate() {
            match i % 3 {
                0 => state.set_volume(*input),
                1 => state.toggle_mute(),
                _ => state.set_mute(i % 2 == 0),
            }

            assert!((0.0..=1.0).contains(&state.volume()));
            assert!(state.unmute_volume() > 0.0 && state.unmute_volume() <= 1.0);
            assert_eq!(state.is_muted(), state.volume() == 0.0);
        }
    }

    #[test]
    fn test_scenario() {
        let mut state = VolumeState::new(0.5);
        assert_eq!(state.unmute_volume(), 0.5);
        assert_eq!(state.volume(), 0.5);
        assert!(!state.is_muted());

        state.set_volume(0.0);
        assert_eq!(state.volume(), 0.0);
        assert!(state.is_muted());
        assert_eq!(state.unmute_volume(), 0.5);

        state.toggle_mute();
        assert_eq!(state.volume(), 0.5);
        assert!(!state.is_muted());

        state.set_volume(0.2);
        assert_eq!(state.volume(), 0.2);
        assert_eq!(state.unmute_volume(), 0.2);

        state.set_mute(true);
        assert_eq!(state.volume(), 0.0);
        assert_eq!(state.unmute_volume(), 0.2);

        state.set_mute(false);
        assert_eq!(state.volume(), 0.2);
    }

    #[test]
    fn test_volume_percent() {
        assert_eq!(VolumeState::new(0.5).volume_percent(), 50);
        assert_eq!(VolumeState::new(0.0).volume_percent(), 0);
        assert_eq!(VolumeState::new(3.0).volume_percent(), 100);
        assert_eq!(VolumeState::new(0.126).volume_percent(), 13);
    }

    #[test]
    fn test_default_volume() {
        let state = VolumeState::default();
        assert_eq!(state.volume(), 1.0);
        assert!(!state.is_muted());
        assert_eq!(state.mute_state(), MuteState::Unmuted);
    }
}
