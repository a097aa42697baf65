/// Command line interface for the `volume-controller` binary
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::error::CliError;
use crate::messaging::VolumeCommand;

#[derive(Parser, Debug, PartialEq)]
#[command(name = "volume-controller")]
#[command(about = "Apply a volume command and print the resulting state")]
#[command(version)]
pub struct Cli {
    /// Initial level, overrides the configured one (0.0-1.0 or a percentage like 40%)
    #[arg(long, value_parser = parse_level, allow_hyphen_values = true)]
    pub initial: Option<f32>,

    /// Config file to use instead of the platform default
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Prints the state when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq)]
pub enum Commands {
    /// Set the volume (0.0-1.0, or a percentage like 40%)
    Set {
        #[arg(value_parser = parse_level, allow_hyphen_values = true)]
        level: f32,
    },
    /// Mute, keeping the current level for later
    Mute,
    /// Restore the last audible level
    Unmute,
    /// Flip mute
    Toggle,
    /// Raise the volume by the configured step
    Up,
    /// Lower the volume by the configured step
    Down,
    /// Print the current state
    Show,
}

impl Commands {
    /// Volume command to run, `None` for read-only commands
    pub fn volume_command(self) -> Option<VolumeCommand> {
        match self {
            Commands::Set { level } => Some(VolumeCommand::SetVolume(level)),
            Commands::Mute => Some(VolumeCommand::SetMute(true)),
            Commands::Unmute => Some(VolumeCommand::SetMute(false)),
            Commands::Toggle => Some(VolumeCommand::ToggleMute),
            Commands::Up => Some(VolumeCommand::StepUp),
            Commands::Down => Some(VolumeCommand::StepDown),
            Commands::Show => None,
        }
    }
}

/// Parse a level given as a fraction (`0.4`) or a percentage (`40%`)
pub fn parse_level(raw: &str) -> Result<f32, CliError> {
    let invalid = || CliError::InvalidVolume(raw.to_string());

    match raw.strip_suffix('%') {
        Some(percent) => percent
            .trim()
            .parse::<f32>()
            .map(|p| p / 100.0)
            .map_err(|_| invalid()),
        None => raw.trim().parse::<f32>().map_err(|_| invalid()),
    }
}
