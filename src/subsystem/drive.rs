//! Drive subsystem — two independently driven wheel-side groups.
//!
//! Owns the desired left/right outputs; the mixing laws live in
//! [`crate::kinematics`] and are applied here.  Members of a wheel-side
//! group always move identically, so one normalized value per side is the
//! whole actuator state.

use crate::kinematics::{self, WheelSpeeds};
use crate::subsystem::Subsystem;

/// Differential drivetrain: left and right wheel groups.
#[derive(Debug, Default)]
pub struct Drive {
    outputs: WheelSpeeds,
}

impl Drive {
    pub fn new() -> Self {
        Self {
            outputs: WheelSpeeds::STOPPED,
        }
    }

    /// Arcade mixing: forward speed plus rotation, square-law shaped.
    pub fn arcade_drive(&mut self, x_speed: f32, rotation: f32) {
        self.outputs = kinematics::arcade(x_speed, rotation);
    }

    /// Constant-curvature mixing; `quick_turn` allows in-place pivots.
    pub fn curvature_drive(&mut self, x_speed: f32, rotation: f32, quick_turn: bool) {
        self.outputs = kinematics::curvature(x_speed, rotation, quick_turn);
    }

    /// Direct per-side assignment, no mixing or shaping.
    pub fn tank_drive(&mut self, left_speed: f32, right_speed: f32) {
        self.outputs = kinematics::tank(left_speed, right_speed);
    }

    /// Current desired wheel outputs, each within [-1, 1].
    pub fn outputs(&self) -> WheelSpeeds {
        self.outputs
    }
}

impl Subsystem for Drive {
    fn stop_motors(&mut self) {
        self.outputs = WheelSpeeds::STOPPED;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arcade_drive_updates_outputs() {
        let mut drive = Drive::new();
        drive.arcade_drive(1.0, 0.0);
        assert_eq!(drive.outputs().left, 1.0);
        assert_eq!(drive.outputs().right, 1.0);
    }

    #[test]
    fn stop_motors_zeroes_both_sides() {
        let mut drive = Drive::new();
        drive.tank_drive(0.8, -0.8);
        drive.stop_motors();
        assert_eq!(drive.outputs(), WheelSpeeds::STOPPED);
    }

    #[test]
    fn stop_motors_is_idempotent() {
        let mut drive = Drive::new();
        drive.arcade_drive(0.5, 0.5);
        drive.stop_motors();
        let once = drive.outputs();
        drive.stop_motors();
        assert_eq!(drive.outputs(), once);
        assert_eq!(once, WheelSpeeds::STOPPED);
    }
}
