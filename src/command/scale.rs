//! Turbo/turtle speed-scale decorators.
//!
//! Each wraps the live [`DriveCommand`] instance and requires the same
//! Drive subsystem, so scheduling one cancels the default drive command
//! (and any other drive-owning command).  While active it delegates to the
//! wrapped command's tick logic — axis mixing still happens, just under
//! the modified scale.  On exit the saved scale is restored
//! unconditionally: a cancelled turbo must never leave a stuck multiplier.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use crate::command::drive::{DriveCommand, SharedDriveCommand};
use crate::command::Command;
use crate::context::RobotContext;
use crate::subsystem::{Requirements, SubsystemId};

/// Decorator that rescales the wrapped drive command's throttle while
/// active.  Construct with [`ScaleCommand::turbo`] or
/// [`ScaleCommand::turtle`].
pub struct ScaleCommand {
    label: &'static str,
    drive: Rc<RefCell<DriveCommand>>,
    scale: f32,
    saved_scale: f32,
}

impl ScaleCommand {
    /// Boosted throttle while held.
    pub fn turbo(drive: &SharedDriveCommand, scale: f32) -> Self {
        Self::new("TurboCommand", drive, scale)
    }

    /// Reduced throttle while held.
    pub fn turtle(drive: &SharedDriveCommand, scale: f32) -> Self {
        Self::new("TurtleCommand", drive, scale)
    }

    fn new(label: &'static str, drive: &SharedDriveCommand, scale: f32) -> Self {
        Self {
            label,
            drive: drive.handle(),
            scale,
            saved_scale: scale,
        }
    }
}

impl Command for ScaleCommand {
    fn name(&self) -> &'static str {
        self.label
    }

    fn requirements(&self) -> Requirements {
        Requirements::of(SubsystemId::Drive)
    }

    fn initialize(&mut self, _ctx: &mut RobotContext) {
        let mut drive = self.drive.borrow_mut();
        self.saved_scale = drive.speed_scale();
        drive.set_speed_scale(self.scale);
        debug!(
            "{}: scale {} -> {}",
            self.label, self.saved_scale, self.scale
        );
    }

    fn execute(&mut self, ctx: &mut RobotContext) {
        self.drive.borrow_mut().execute(ctx);
    }

    fn end(&mut self, _ctx: &mut RobotContext, _interrupted: bool) {
        // Unconditional restore, however the activation ended.
        self.drive.borrow_mut().set_speed_scale(self.saved_scale);
        debug!("{}: scale restored to {}", self.label, self.saved_scale);
    }
}
