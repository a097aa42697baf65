/// State management module
///
/// Framework-independent volume logic. Notification and locking live in
/// `crate::controller`.

pub mod mute_state;
pub mod volume_state;

// Re-export commonly used types
pub use mute_state::MuteState;
pub use volume_state::{clamp_level, VolumeState, MAX_VOLUME, MIN_VOLUME};
