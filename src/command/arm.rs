//! Elevator + gripper conflict resolution.
//!
//! Each tick, exactly one grabber directive (or none) is produced by a
//! strict priority chain, then the elevator follows the joystick
//! unconditionally:
//!
//! | Priority | Condition                                        | Grabber   |
//! |----------|--------------------------------------------------|-----------|
//! | 1        | override button held                             | close     |
//! | 2        | lower limit active AND stick idle                | open      |
//! | 3        | stick moving AND position < low post − margin    | close     |
//! | 4        | otherwise                                        | unchanged |
//!
//! Elevator motion is direct manual proportional control, never gated by
//! the gripper logic.

use crate::command::Command;
use crate::context::RobotContext;
use crate::input::{Axis, Button};
use crate::subsystem::{Requirements, Subsystem, SubsystemId};

/// Default command for the arm: manual elevator plus grabber arbitration.
pub struct ArmCommand {
    joystick_axis: Axis,
    override_button: Button,
}

impl ArmCommand {
    pub fn new(joystick_axis: Axis, override_button: Button) -> Self {
        Self {
            joystick_axis,
            override_button,
        }
    }
}

impl Command for ArmCommand {
    fn name(&self) -> &'static str {
        "ArmCommand"
    }

    fn requirements(&self) -> Requirements {
        // The grabber is mutated here, so it must be owned here.
        Requirements::of(SubsystemId::Arm).and(SubsystemId::Grabber)
    }

    fn execute(&mut self, ctx: &mut RobotContext) {
        let stick = ctx.input.axis(self.joystick_axis);
        let deadband = ctx.config.arm_joystick_deadband;
        let grip_below = ctx.config.low_post_position - ctx.config.low_post_safety_margin;

        if ctx.input.held(self.override_button) {
            ctx.grabber.close();
        } else if ctx.arm.lower_limit() && stick.abs() < deadband {
            // Arm is down and idle: safe to release the game piece.
            ctx.grabber.open();
        } else if stick.abs() > deadband && ctx.arm.elevator_position() < grip_below {
            // Moving while low: must be gripping.
            ctx.grabber.close();
        }
        // Otherwise the grabber holds its previous state.

        ctx.arm.elevate(stick * ctx.config.elevator_manual_speed);
    }

    fn end(&mut self, ctx: &mut RobotContext, _interrupted: bool) {
        ctx.arm.stop_motors();
    }
}
