/// Command types for the volume controller
///
/// Commands represent requests to perform actions (imperative).
/// They are executed by `VolumeController::execute`.

/// Volume commands
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VolumeCommand {
    /// Set the volume level (clamped)
    SetVolume(f32),

    /// Mute or unmute
    SetMute(bool),

    /// Flip the mute state
    ToggleMute,

    /// Raise the volume by one step
    StepUp,

    /// Lower the volume by one step
    StepDown,
}

impl VolumeCommand {
    /// Get a human-readable description of the command
    pub fn description(&self) -> String {
        match self {
            VolumeCommand::SetVolume(volume) => format!("Set volume to {}", volume),
            VolumeCommand::SetMute(true) => "Mute".to_string(),
            VolumeCommand::SetMute(false) => "Unmute".to_string(),
            VolumeCommand::ToggleMute => "Toggle mute".to_string(),
            VolumeCommand::StepUp => "Volume up".to_string(),
            VolumeCommand::StepDown => "Volume down".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_description() {
        assert_eq!(VolumeCommand::SetVolume(0.5).description(), "Set volume to 0.5");
        assert_eq!(VolumeCommand::SetMute(false).description(), "Unmute");
        assert_eq!(VolumeCommand::StepDown.description(), "Volume down");
    }
}
