//! Port traits — the boundary between the control core and the hardware.
//!
//! ```text
//!   Sensor adapter ──▶ SensorPort ──▶ TeleopService (core)
//!   TeleopService (core) ──▶ ActuatorPort ──▶ motor/solenoid adapter
//! ```
//!
//! Driven adapters (IMU fusion, limit switches, motor controllers)
//! implement these traits.  The core consumes them via generics, so the
//! command and scheduler logic never touches hardware directly and the
//! whole stack is testable with mocks.

use crate::subsystem::grabber::GrabberState;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → core)
// ───────────────────────────────────────────────────────────────

/// One inertial pitch reading with a liveness indicator.
///
/// `valid == false` means the IMU did not deliver a fresh, plausible
/// sample this tick; consumers must not act on `degrees` in that case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchSample {
    /// Pitch angle in degrees; positive = nose up.
    pub degrees: f32,
    /// Whether the reading is fresh and plausible.
    pub valid: bool,
}

impl PitchSample {
    /// A fresh, valid reading.
    pub fn valid(degrees: f32) -> Self {
        Self {
            degrees,
            valid: true,
        }
    }

    /// A stale or failed reading.
    pub fn invalid() -> Self {
        Self {
            degrees: 0.0,
            valid: false,
        }
    }
}

impl Default for PitchSample {
    fn default() -> Self {
        Self::invalid()
    }
}

/// A point-in-time snapshot of every sensor the core consumes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SensorSnapshot {
    /// Inertial pitch reading.
    pub pitch: PitchSample,
    /// Elevator lower limit switch: true = arm is fully down.
    pub arm_lower_limit: bool,
    /// Elevator position from the arm's position sensor (sensor units).
    pub elevator_position: f32,
}

/// Read-side port: the core calls this once per tick.
pub trait SensorPort {
    /// Read every sensor and return a unified snapshot.
    fn read_all(&mut self) -> SensorSnapshot;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: core → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the core calls this after every scheduler tick.
/// The most recent write wins; nothing is queued.
pub trait ActuatorPort {
    /// Command the two wheel-side groups, each normalized to [-1, 1].
    fn set_drive(&mut self, left: f32, right: f32);

    /// Command the elevator actuator, normalized to [-1, 1].
    fn set_elevator(&mut self, speed: f32);

    /// Command the gripper open or closed.
    fn set_grabber(&mut self, state: GrabberState);

    /// Kill all actuators — safe shutdown.
    fn all_off(&mut self);
}
