/// Mute state machine
///
/// Two logical states over one continuous volume level.

/// Logical state of a volume control
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum MuteState {
    /// Volume is above zero
    #[default]
    Unmuted,

    /// Volume is exactly zero
    Muted,
}

impl MuteState {
    /// Derive the state from a volume level
    pub fn from_volume(volume: f32) -> Self {
        if volume == 0.0 {
            MuteState::Muted
        } else {
            MuteState::Unmuted
        }
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        matches!(self, MuteState::Muted)
    }

    /// Get a human-readable description of the state
    pub fn description(&self) -> &'static str {
        match self {
            MuteState::Unmuted => "Unmuted",
            MuteState::Muted => "Muted",
        }
    }
}

impl std::fmt::Display for MuteState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}
