//! Commands — time-extended behaviors over required subsystems.
//!
//! A command declares the subsystems it needs, runs one logic step per
//! scheduler tick, and reports completion through its finished predicate.
//! Lifecycle, driven entirely by the scheduler:
//!
//! ```text
//!   Idle ──schedule──▶ initialize() ──▶ execute() per tick
//!                                          │
//!                     is_finished() ──▶ end(false)    (natural)
//!                     superseded    ──▶ end(true)     (cancelled)
//! ```
//!
//! Commands never block or sleep; every method returns promptly.

pub mod arm;
pub mod balance;
pub mod drive;
pub mod scale;

pub use arm::ArmCommand;
pub use balance::BalanceCommand;
pub use drive::{DriveCommand, SharedDriveCommand};
pub use scale::ScaleCommand;

use crate::context::RobotContext;
use crate::subsystem::Requirements;

/// Capability interface every command implements (the scheduler contract).
pub trait Command {
    /// Short name used in scheduler logs.
    fn name(&self) -> &'static str;

    /// The subsystems this command requires exclusively while active.
    fn requirements(&self) -> Requirements;

    /// Called once when the command becomes active.
    fn initialize(&mut self, ctx: &mut RobotContext) {
        let _ = ctx;
    }

    /// Called once per tick while the command is active.
    fn execute(&mut self, ctx: &mut RobotContext);

    /// Whether the command has reached its goal.  Checked after each
    /// `execute`; default commands return `false` forever.
    fn is_finished(&self) -> bool {
        false
    }

    /// Called once when the command stops running.  `interrupted` is true
    /// when the scheduler cancelled it (superseded or trigger released)
    /// rather than it finishing naturally.
    fn end(&mut self, ctx: &mut RobotContext, interrupted: bool) {
        let _ = (ctx, interrupted);
    }
}
