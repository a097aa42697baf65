/// Messaging module for volume notifications
///
/// - **Events**: notifications of volume writes (past tense, broadcast)
/// - **Commands**: requests to change the volume (imperative, targeted)
///
/// ## Usage
///
/// ```rust,ignore
/// let mut controller = VolumeController::new(0.5);
/// let (rx, _id) = controller.subscribe();
///
/// controller.execute(VolumeCommand::ToggleMute);
///
/// while let Ok(event) = rx.try_recv() {
///     match event {
///         VolumeEvent::MuteChanged { muted } => { /* redraw icon */ }
///         _ => {}
///     }
/// }
/// ```

pub mod bus;
pub mod commands;
pub mod events;

// Re-export commonly used types
pub use bus::{EventBus, SubscriberId};
pub use commands::VolumeCommand;
pub use events::VolumeEvent;
