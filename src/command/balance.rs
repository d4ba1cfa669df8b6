//! Closed-loop self-leveling.
//!
//! Proportional control on the inertial pitch reading: drive straight
//! forward/backward against the tilt until the robot sits within the
//! level deadband.  Rotation is held at zero — leveling is a single-axis
//! correction — and the correction goes through the tank path so the
//! output stays strictly proportional to pitch (arcade would square it).

use log::warn;

use crate::command::Command;
use crate::context::RobotContext;
use crate::subsystem::{Requirements, Subsystem, SubsystemId};

/// Drive-to-level command, bound while-true to a controller button.
pub struct BalanceCommand {
    /// Whether the last valid pitch sample was within the deadband.
    level: bool,
    /// Whether a sensor dropout has already been logged this activation.
    dropout_logged: bool,
}

impl BalanceCommand {
    pub fn new() -> Self {
        Self {
            level: false,
            dropout_logged: false,
        }
    }
}

impl Default for BalanceCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for BalanceCommand {
    fn name(&self) -> &'static str {
        "BalanceCommand"
    }

    fn requirements(&self) -> Requirements {
        Requirements::of(SubsystemId::Drive)
    }

    fn initialize(&mut self, _ctx: &mut RobotContext) {
        self.level = false;
        self.dropout_logged = false;
    }

    fn execute(&mut self, ctx: &mut RobotContext) {
        // Invalid sample: freeze at zero output and stay active.  Never
        // correct on data we do not have, never exit on a sensor glitch.
        if !ctx.pitch.valid {
            if !self.dropout_logged {
                warn!("BalanceCommand: pitch sample invalid, holding zero output");
                self.dropout_logged = true;
            }
            ctx.drive.stop_motors();
            self.level = false;
            return;
        }
        self.dropout_logged = false;

        let pitch = ctx.pitch.degrees;
        let max = ctx.config.balance_max_output;
        let correction = (ctx.config.balance_gain_per_deg * pitch).clamp(-max, max);

        // Equal per-side output: straight-line correction, rotation zero.
        ctx.drive.tank_drive(correction, correction);
        self.level = pitch.abs() <= ctx.config.balance_deadband_deg;
    }

    fn is_finished(&self) -> bool {
        self.level
    }

    fn end(&mut self, ctx: &mut RobotContext, _interrupted: bool) {
        ctx.drive.stop_motors();
    }
}
