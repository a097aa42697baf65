/// Event types for volume notifications
///
/// Events represent things that have happened (past tense).
/// They are broadcast to all subscribers.

/// Volume control events
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VolumeEvent {
    /// The volume level was written (possibly with the same value)
    VolumeChanged { old: f32, new: f32 },

    /// The mute view flipped as a result of a volume write
    MuteChanged { muted: bool },
}

impl VolumeEvent {
    /// Get a human-readable description of the event
    pub fn description(&self) -> String {
        match self {
            VolumeEvent::VolumeChanged { old, new } => {
                format!("Volume changed: {:.2} -> {:.2}", old, new)
            }
            VolumeEvent::MuteChanged { muted: true } => "Muted".to_string(),
            VolumeEvent::MuteChanged { muted: false } => "Unmuted".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_description() {
        let event = VolumeEvent::VolumeChanged { old: 0.5, new: 0.25 };
        assert_eq!(event.description(), "Volume changed: 0.50 -> 0.25");

        let event = VolumeEvent::MuteChanged { muted: true };
        assert_eq!(event.description(), "Muted");
    }
}
