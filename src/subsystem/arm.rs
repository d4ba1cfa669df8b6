//! Arm subsystem — single-axis elevator with a lower limit switch and a
//! position sensor.
//!
//! Sensor readings are cached once per tick in [`Subsystem::periodic`] and
//! exposed read-only, so every command sees the same values for the whole
//! tick.

use crate::ports::SensorSnapshot;
use crate::subsystem::Subsystem;

/// Elevator actuator plus its sensors.
#[derive(Debug, Default)]
pub struct Arm {
    /// Desired elevator speed, normalized to [-1, 1].
    elevator_output: f32,
    /// Cached lower limit switch state (true = arm fully down).
    lower_limit: bool,
    /// Cached elevator position (sensor units).
    elevator_position: f32,
}

impl Arm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Command the elevator at `speed`, clamped to [-1, 1].
    pub fn elevate(&mut self, speed: f32) {
        self.elevator_output = if speed.is_nan() {
            0.0
        } else {
            speed.clamp(-1.0, 1.0)
        };
    }

    /// Current desired elevator output.
    pub fn elevator_output(&self) -> f32 {
        self.elevator_output
    }

    /// Whether the lower limit switch is active (arm fully down).
    pub fn lower_limit(&self) -> bool {
        self.lower_limit
    }

    /// Cached elevator position.
    pub fn elevator_position(&self) -> f32 {
        self.elevator_position
    }
}

impl Subsystem for Arm {
    fn stop_motors(&mut self) {
        self.elevator_output = 0.0;
    }

    fn periodic(&mut self, sensors: &SensorSnapshot) {
        self.lower_limit = sensors.arm_lower_limit;
        self.elevator_position = sensors.elevator_position;
    }
}
