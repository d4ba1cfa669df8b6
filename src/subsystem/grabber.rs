//! Grabber subsystem — a binary gripper actuator.
//!
//! The gripper is either open or closed; its state persists across ticks
//! until a command changes it.  `stop_motors` holds the current state —
//! releasing a game piece on teardown would be worse than holding it.

use crate::subsystem::Subsystem;

/// Commanded gripper position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrabberState {
    #[default]
    Open,
    Closed,
}

/// Binary gripper actuator.
#[derive(Debug, Default)]
pub struct Grabber {
    state: GrabberState,
}

impl Grabber {
    pub fn new() -> Self {
        Self::default()
    }

    /// Command the gripper open.
    pub fn open(&mut self) {
        self.state = GrabberState::Open;
    }

    /// Command the gripper closed.
    pub fn close(&mut self) {
        self.state = GrabberState::Closed;
    }

    /// Current commanded state.
    pub fn state(&self) -> GrabberState {
        self.state
    }
}

impl Subsystem for Grabber {
    fn stop_motors(&mut self) {
        // Binary actuator with no continuous output: hold state.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_persists_until_changed() {
        let mut grabber = Grabber::new();
        assert_eq!(grabber.state(), GrabberState::Open);
        grabber.close();
        assert_eq!(grabber.state(), GrabberState::Closed);
        grabber.stop_motors();
        assert_eq!(grabber.state(), GrabberState::Closed);
        grabber.open();
        assert_eq!(grabber.state(), GrabberState::Open);
    }
}
