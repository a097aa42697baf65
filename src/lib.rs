//! Volume control state with mute/unmute memory.
//!
//! `VolumeState` holds the invariant logic; `VolumeController` adds change
//! notification on top of it, and `SharedVolumeController` makes it usable
//! from several threads.

pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod messaging;
pub mod state;

pub use config::VolumeConfig;
pub use controller::{SharedVolumeController, VolumeController, DEFAULT_STEP};
pub use error::{AppResult, CliError, ConfigError};
pub use messaging::{EventBus, SubscriberId, VolumeCommand, VolumeEvent};
pub use state::{MuteState, VolumeState};
