//! Default teleop drive command.
//!
//! Maps the bound forward/turn axes to one arcade-drive call per tick.
//! The mutable speed scale in [`DriveParams`] is the attachment point for
//! the turbo/turtle decorators: they save it, install their own factor,
//! and restore the saved value on exit.

use std::cell::RefCell;
use std::rc::Rc;

use crate::command::Command;
use crate::context::RobotContext;
use crate::input::Axis;
use crate::subsystem::{Requirements, Subsystem, SubsystemId};

/// Control parameters owned by the drive command, mutated only through
/// accessors so decorator save/restore is an explicit value copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriveParams {
    speed_scale: f32,
}

impl DriveParams {
    pub fn new(speed_scale: f32) -> Self {
        Self { speed_scale }
    }

    /// Multiplier applied to both axes before mixing.
    pub fn speed_scale(&self) -> f32 {
        self.speed_scale
    }

    pub fn set_speed_scale(&mut self, scale: f32) {
        self.speed_scale = scale;
    }
}

/// Arcade teleop: never finishes on its own; registered as the Drive
/// subsystem's default command.
pub struct DriveCommand {
    forward_axis: Axis,
    rotation_axis: Axis,
    params: DriveParams,
}

impl DriveCommand {
    pub fn new(forward_axis: Axis, rotation_axis: Axis, speed_scale: f32) -> Self {
        Self {
            forward_axis,
            rotation_axis,
            params: DriveParams::new(speed_scale),
        }
    }

    /// Current control parameters (value copy).
    pub fn params(&self) -> DriveParams {
        self.params
    }

    /// Current speed scale.
    pub fn speed_scale(&self) -> f32 {
        self.params.speed_scale()
    }

    /// Install a new speed scale (decorator attachment point).
    pub fn set_speed_scale(&mut self, scale: f32) {
        self.params.set_speed_scale(scale);
    }
}

impl Command for DriveCommand {
    fn name(&self) -> &'static str {
        "DriveCommand"
    }

    fn requirements(&self) -> Requirements {
        Requirements::of(SubsystemId::Drive)
    }

    fn execute(&mut self, ctx: &mut RobotContext) {
        let scale = self.params.speed_scale();
        let forward = ctx.input.axis(self.forward_axis) * scale;
        let rotation = ctx.input.axis(self.rotation_axis) * scale;
        // arcade_drive clamps, so a boosted scale saturates instead of
        // overdriving the mix.
        ctx.drive.arcade_drive(forward, rotation);
    }

    fn end(&mut self, ctx: &mut RobotContext, _interrupted: bool) {
        ctx.drive.stop_motors();
    }
}

/// Shared handle to a [`DriveCommand`] so the scheduler can own it as the
/// default command while the turbo/turtle decorators keep a live reference
/// to the same instance.
#[derive(Clone)]
pub struct SharedDriveCommand(Rc<RefCell<DriveCommand>>);

impl SharedDriveCommand {
    pub fn new(command: DriveCommand) -> Self {
        Self(Rc::new(RefCell::new(command)))
    }

    /// Clone of the underlying shared handle, for decorator construction.
    pub(crate) fn handle(&self) -> Rc<RefCell<DriveCommand>> {
        Rc::clone(&self.0)
    }

    /// Current speed scale of the wrapped command.
    pub fn speed_scale(&self) -> f32 {
        self.0.borrow().speed_scale()
    }
}

impl Command for SharedDriveCommand {
    fn name(&self) -> &'static str {
        "DriveCommand"
    }

    fn requirements(&self) -> Requirements {
        self.0.borrow().requirements()
    }

    fn initialize(&mut self, ctx: &mut RobotContext) {
        self.0.borrow_mut().initialize(ctx);
    }

    fn execute(&mut self, ctx: &mut RobotContext) {
        self.0.borrow_mut().execute(ctx);
    }

    fn is_finished(&self) -> bool {
        self.0.borrow().is_finished()
    }

    fn end(&mut self, ctx: &mut RobotContext, interrupted: bool) {
        self.0.borrow_mut().end(ctx, interrupted);
    }
}
