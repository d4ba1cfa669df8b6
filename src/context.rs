//! Shared mutable context threaded through every command call.
//!
//! `RobotContext` is the single struct command logic reads from and writes
//! to: the per-tick input snapshot, the latest inertial pitch sample, the
//! configuration, and the three subsystems with their desired outputs.
//! Think of it as the blackboard the scheduler hands to whichever commands
//! currently own each subsystem.

use crate::config::RobotConfig;
use crate::input::InputSnapshot;
use crate::ports::{PitchSample, SensorSnapshot};
use crate::subsystem::{Arm, Drive, Grabber, Subsystem};

/// The shared context passed to every command lifecycle method.
pub struct RobotContext {
    /// Tunable parameters (gains, deadbands, scales).
    pub config: RobotConfig,
    /// Read-only controller snapshot for this tick.
    pub input: InputSnapshot,
    /// Latest inertial pitch reading.  Updated before each scheduler tick.
    pub pitch: PitchSample,

    /// Differential drivetrain.
    pub drive: Drive,
    /// Elevator + limit switch + position sensor.
    pub arm: Arm,
    /// Binary gripper.
    pub grabber: Grabber,

    /// Monotonic total tick count.
    pub total_ticks: u64,
}

impl RobotContext {
    /// Create a new context with the given configuration.
    pub fn new(config: RobotConfig) -> Self {
        Self {
            config,
            input: InputSnapshot::neutral(),
            pitch: PitchSample::invalid(),
            drive: Drive::new(),
            arm: Arm::new(),
            grabber: Grabber::new(),
            total_ticks: 0,
        }
    }

    /// Absorb this tick's inputs and run every subsystem's `periodic`.
    /// Called once per tick, before any command logic.
    pub fn begin_tick(&mut self, input: InputSnapshot, sensors: &SensorSnapshot) {
        self.total_ticks += 1;
        self.input = input;
        self.pitch = sensors.pitch;
        self.drive.periodic(sensors);
        self.arm.periodic(sensors);
        self.grabber.periodic(sensors);
    }

    /// Stop every subsystem's actuators (teardown path).
    pub fn stop_all(&mut self) {
        self.drive.stop_motors();
        self.arm.stop_motors();
        self.grabber.stop_motors();
    }
}
