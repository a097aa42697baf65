/// Volume controller
///
/// Wraps a `VolumeState` with change notification. Every write publishes a
/// `VolumeEvent::VolumeChanged`, followed by `VolumeEvent::MuteChanged` when
/// the write flipped the mute view.
use std::sync::Arc;

use crossbeam_channel::Receiver;
use parking_lot::Mutex;

use crate::config::VolumeConfig;
use crate::messaging::{EventBus, SubscriberId, VolumeCommand, VolumeEvent};
use crate::state::{MuteState, VolumeState, MAX_VOLUME};

/// Default increment for volume up/down
pub const DEFAULT_STEP: f32 = 0.05;

/// Volume state owned by a single UI surface
#[derive(Debug)]
pub struct VolumeController {
    state: VolumeState,
    step: f32,
    bus: EventBus,
}

impl VolumeController {
    /// Create a controller from any raw initial level
    pub fn new(initial: f32) -> Self {
        Self {
            state: VolumeState::new(initial),
            step: DEFAULT_STEP,
            bus: EventBus::new(),
        }
    }

    /// Create a controller from startup configuration
    pub fn from_config(config: &VolumeConfig) -> Self {
        Self::new(config.initial_volume).with_step(config.step)
    }

    /// Set the volume up/down increment
    pub fn with_step(mut self, step: f32) -> Self {
        if step > 0.0 && step <= MAX_VOLUME {
            self.step = step;
        } else {
            tracing::warn!("Ignoring volume step {}, keeping {}", step, self.step);
        }
        self
    }

    /// Share notifications with an existing event bus
    pub fn with_event_bus(mut self, bus: EventBus) -> Self {
        self.bus = bus;
        self
    }

    /// Get the current volume level
    pub fn volume(&self) -> f32 {
        self.state.volume()
    }

    /// Set the volume level (clamped)
    pub fn set_volume(&mut self, volume: f32) {
        let old = self.state;
        self.state.set_volume(volume);
        self.notify(old);
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.state.is_muted()
    }

    /// Mute or unmute
    pub fn set_mute(&mut self, mute: bool) {
        let old = self.state;
        self.state.set_mute(mute);
        self.notify(old);
    }

    /// Flip the mute state
    pub fn toggle_mute(&mut self) {
        let old = self.state;
        self.state.toggle_mute();
        self.notify(old);
    }

    /// Raise the volume by one step
    pub fn step_up(&mut self) {
        self.step_by(self.step);
    }

    /// Lower the volume by one step
    pub fn step_down(&mut self) {
        self.step_by(-self.step);
    }

    /// Volume up/down increment
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Snapshot of the underlying state
    pub fn state(&self) -> VolumeState {
        self.state
    }

    /// Current logical state
    pub fn mute_state(&self) -> MuteState {
        self.state.mute_state()
    }

    /// Execute a command
    pub fn execute(&mut self, command: VolumeCommand) {
        tracing::debug!("Executing command: {}", command.description());

        match command {
            VolumeCommand::SetVolume(volume) => self.set_volume(volume),
            VolumeCommand::SetMute(mute) => self.set_mute(mute),
            VolumeCommand::ToggleMute => self.toggle_mute(),
            VolumeCommand::StepUp => self.step_up(),
            VolumeCommand::StepDown => self.step_down(),
        }
    }

    /// Subscribe to volume events
    pub fn subscribe(&self) -> (Receiver<VolumeEvent>, SubscriberId) {
        self.bus.subscribe()
    }

    /// Unsubscribe from volume events
    pub fn unsubscribe(&self, id: SubscriberId) {
        self.bus.unsubscribe(id);
    }

    /// Event bus used for notifications
    pub fn event_bus(&self) -> &EventBus {
        &self.bus
    }

    // Anything under half a step is silence; f32 drift must not leave an
    // inaudible level behind to be remembered as the unmute level.
    fn step_by(&mut self, delta: f32) {
        let mut target = self.state.volume() + delta;
        if target < self.step / 2.0 {
            target = 0.0;
        }
        self.set_volume(target);
    }

    fn notify(&self, old: VolumeState) {
        let new = self.state;
        tracing::debug!(
            old = old.volume(),
            new = new.volume(),
            muted = new.is_muted(),
            "Volume written"
        );

        self.bus.publish(VolumeEvent::VolumeChanged {
            old: old.volume(),
            new: new.volume(),
        });

        if old.is_muted() != new.is_muted() {
            self.bus.publish(VolumeEvent::MuteChanged {
                muted: new.is_muted(),
            });
        }
    }
}

impl Default for VolumeController {
    fn default() -> Self {
        Self::new(MAX_VOLUME)
    }
}

/// Thread-safe handle to a `VolumeController`
///
/// Each operation takes the lock once, so the volume and the remembered
/// unmute level always change together.
#[derive(Debug, Clone, Default)]
pub struct SharedVolumeController {
    inner: Arc<Mutex<VolumeController>>,
}

impl SharedVolumeController {
    /// Wrap a controller for sharing across threads
    pub fn new(controller: VolumeController) -> Self {
        Self {
            inner: Arc::new(Mutex::new(controller)),
        }
    }

    /// Get the current volume level
    pub fn volume(&self) -> f32 {
        self.inner.lock().volume()
    }

    /// Set the volume level (clamped)
    pub fn set_volume(&self, volume: f32) {
        self.inner.lock().set_volume(volume);
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.inner.lock().is_muted()
    }

    /// Mute or unmute
    pub fn set_mute(&self, mute: bool) {
        self.inner.lock().set_mute(mute);
    }

    /// Flip the mute state
    pub fn toggle_mute(&self) {
        self.inner.lock().toggle_mute();
    }

    /// Raise the volume by one step
    pub fn step_up(&self) {
        self.inner.lock().step_up();
    }

    /// Lower the volume by one step
    pub fn step_down(&self) {
        self.inner.lock().step_down();
    }

    /// Execute a command
    pub fn execute(&self, command: VolumeCommand) {
        self.inner.lock().execute(command);
    }

    /// Current logical state
    pub fn mute_state(&self) -> MuteState {
        self.inner.lock().mute_state()
    }

    /// Snapshot of the underlying state
    pub fn state(&self) -> VolumeState {
        self.inner.lock().state()
    }

    /// Subscribe to volume events
    pub fn subscribe(&self) -> (Receiver<VolumeEvent>, SubscriberId) {
        self.inner.lock().subscribe()
    }

    /// Unsubscribe from volume events
    pub fn unsubscribe(&self, id: SubscriberId) {
        self.inner.lock().unsubscribe(id);
    }
}

impl From<VolumeController> for SharedVolumeController {
    fn from(controller: VolumeController) -> Self {
        Self::new(controller)
    }
}
