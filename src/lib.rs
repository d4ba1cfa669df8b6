//! Command-based teleoperation core for a differential-drive robot.
//!
//! Subsystems own actuators, commands own time-extended behaviors, and a
//! cooperative scheduler arbitrates exclusive subsystem ownership once per
//! fixed-period control tick:
//!
//! ```text
//!  InputSnapshot ──▶ ┌──────────────────────────────┐
//!                    │       CommandScheduler        │ ──▶ Drive / Arm /
//!  SensorPort  ────▶ │  triggers · defaults ·        │     Grabber outputs
//!                    │  exclusivity-by-cancellation  │          │
//!                    └──────────────────────────────┘          ▼
//!                                                         ActuatorPort
//! ```
//!
//! The crate is pure logic: all hardware crosses the port traits in
//! [`ports`], so the entire stack is testable with mock adapters.

#![deny(unused_must_use)]

pub mod command;
pub mod config;
pub mod context;
pub mod input;
pub mod kinematics;
pub mod ports;
pub mod scheduler;
pub mod service;
pub mod subsystem;

mod error;

pub use error::ConfigError;
