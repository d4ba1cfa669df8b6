//! Teleop service — the composition root.
//!
//! Owns the scheduler and the robot context, performs the standard button
//! wiring, and orchestrates one full control cycle per tick:
//!
//! ```text
//!  SensorPort ──▶ ┌──────────────────────────┐ ──▶ ActuatorPort
//!                 │      TeleopService        │
//!  InputSnapshot ─│  scheduler · subsystems   │
//!                 └──────────────────────────┘
//! ```
//!
//! Bindings: the drive command is Drive's default; X runs self-leveling
//! while held; the right bumper is turbo and the left bumper turtle; the
//! arm command is Arm's default with the grabber-override button wired in.

use log::info;

use crate::command::{ArmCommand, BalanceCommand, DriveCommand, ScaleCommand, SharedDriveCommand};
use crate::config::RobotConfig;
use crate::context::RobotContext;
use crate::error::ConfigError;
use crate::input::{Axis, Button, InputSnapshot};
use crate::ports::{ActuatorPort, SensorPort};
use crate::scheduler::CommandScheduler;
use crate::subsystem::SubsystemId;

/// The teleoperation service: scheduler, context, and standard wiring.
pub struct TeleopService {
    scheduler: CommandScheduler,
    ctx: RobotContext,
    /// Live handle to the shared drive command, kept for scale queries.
    drive_command: SharedDriveCommand,
}

impl TeleopService {
    /// Build the service and wire the standard bindings.
    /// Fails only on invalid configuration.
    pub fn new(config: RobotConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut scheduler = CommandScheduler::new();

        let drive_command = SharedDriveCommand::new(DriveCommand::new(
            Axis::LeftY,
            Axis::RightX,
            config.default_speed_scale,
        ));
        let turbo = ScaleCommand::turbo(&drive_command, config.turbo_speed_scale);
        let turtle = ScaleCommand::turtle(&drive_command, config.turtle_speed_scale);

        let drive_id = scheduler.register(Box::new(drive_command.clone()));
        let turbo_id = scheduler.register(Box::new(turbo));
        let turtle_id = scheduler.register(Box::new(turtle));
        let balance_id = scheduler.register(Box::new(BalanceCommand::new()));
        let arm_id = scheduler.register(Box::new(ArmCommand::new(
            Axis::ArmY,
            Button::GrabberOverride,
        )));

        scheduler.set_default(SubsystemId::Drive, drive_id);
        scheduler.set_default(SubsystemId::Arm, arm_id);
        scheduler.set_default(SubsystemId::Grabber, arm_id);
        scheduler.bind_while_held(Button::RightBumper, turbo_id);
        scheduler.bind_while_held(Button::LeftBumper, turtle_id);
        scheduler.bind_while_held(Button::X, balance_id);

        info!("TeleopService wired: drive/arm defaults + turbo/turtle/balance triggers");

        Ok(Self {
            scheduler,
            ctx: RobotContext::new(config),
            drive_command,
        })
    }

    /// Run one full control cycle: read sensors → subsystem periodics →
    /// scheduler tick → apply actuator outputs.
    ///
    /// The `hw` parameter satisfies **both** ports — this avoids a double
    /// mutable borrow while keeping the boundary explicit.
    pub fn tick(&mut self, input: InputSnapshot, hw: &mut (impl SensorPort + ActuatorPort)) {
        let sensors = hw.read_all();
        self.ctx.begin_tick(input, &sensors);
        self.scheduler.tick(&mut self.ctx);
        self.apply_actuators(hw);
    }

    /// Teardown: cancel every command, stop every subsystem, kill outputs.
    pub fn shutdown(&mut self, hw: &mut impl ActuatorPort) {
        info!("TeleopService shutting down");
        self.scheduler.cancel_all(&mut self.ctx);
        self.ctx.stop_all();
        self.apply_actuators(hw);
        hw.all_off();
    }

    // ── Queries ───────────────────────────────────────────────

    /// Current speed scale of the shared drive command.
    pub fn drive_speed_scale(&self) -> f32 {
        self.drive_command.speed_scale()
    }

    /// Read access to the context (state inspection, tests).
    pub fn context(&self) -> &RobotContext {
        &self.ctx
    }

    /// Read access to the scheduler (ownership inspection, tests).
    pub fn scheduler(&self) -> &CommandScheduler {
        &self.scheduler
    }

    // ── Internal ──────────────────────────────────────────────

    /// Translate the subsystems' desired outputs into port calls.
    /// Written every tick: the most recent write wins, nothing is queued.
    fn apply_actuators(&self, hw: &mut impl ActuatorPort) {
        let wheels = self.ctx.drive.outputs();
        hw.set_drive(wheels.left, wheels.right);
        hw.set_elevator(self.ctx.arm.elevator_output());
        hw.set_grabber(self.ctx.grabber.state());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{PitchSample, SensorSnapshot};
    use crate::subsystem::GrabberState;

    struct MockHw {
        sensors: SensorSnapshot,
        drive: (f32, f32),
        elevator: f32,
        grabber: GrabberState,
        all_off_calls: u32,
    }

    impl MockHw {
        fn new() -> Self {
            Self {
                sensors: SensorSnapshot::default(),
                drive: (0.0, 0.0),
                elevator: 0.0,
                grabber: GrabberState::Open,
                all_off_calls: 0,
            }
        }
    }

    #[test]
    fn grabber_override_reaches_the_actuator() {
        let mut service = TeleopService::new(RobotConfig::default()).unwrap();
        let mut hw = MockHw::new();
        assert_eq!(hw.grabber, GrabberState::Open);

        let input = InputSnapshot::neutral().with_button(Button::GrabberOverride);
        service.tick(input, &mut hw);
        assert_eq!(hw.grabber, GrabberState::Closed);
    }

    impl SensorPort for MockHw {
        fn read_all(&mut self) -> SensorSnapshot {
            self.sensors
        }
    }

    impl ActuatorPort for MockHw {
        fn set_drive(&mut self, left: f32, right: f32) {
            self.drive = (left, right);
        }
        fn set_elevator(&mut self, speed: f32) {
            self.elevator = speed;
        }
        fn set_grabber(&mut self, state: GrabberState) {
            self.grabber = state;
        }
        fn all_off(&mut self) {
            self.drive = (0.0, 0.0);
            self.elevator = 0.0;
            self.all_off_calls += 1;
        }
    }

    #[test]
    fn rejects_invalid_config() {
        let mut config = RobotConfig::default();
        config.turbo_speed_scale = 0.1;
        assert!(TeleopService::new(config).is_err());
    }

    #[test]
    fn default_drive_command_reaches_the_actuators() {
        let mut service = TeleopService::new(RobotConfig::default()).unwrap();
        let mut hw = MockHw::new();

        let input = InputSnapshot::neutral().with_axis(Axis::LeftY, 1.0);
        service.tick(input, &mut hw);

        assert_eq!(hw.drive, (1.0, 1.0));
    }

    #[test]
    fn arm_default_command_drives_the_elevator() {
        let mut service = TeleopService::new(RobotConfig::default()).unwrap();
        let mut hw = MockHw::new();

        let input = InputSnapshot::neutral().with_axis(Axis::ArmY, 0.8);
        service.tick(input, &mut hw);

        let expected = 0.8 * RobotConfig::default().elevator_manual_speed;
        assert!((hw.elevator - expected).abs() < 1e-6);
    }

    #[test]
    fn shutdown_kills_outputs_and_commands() {
        let mut service = TeleopService::new(RobotConfig::default()).unwrap();
        let mut hw = MockHw::new();

        service.tick(InputSnapshot::neutral().with_axis(Axis::LeftY, 1.0), &mut hw);
        assert_ne!(hw.drive, (0.0, 0.0));

        service.shutdown(&mut hw);
        assert_eq!(hw.drive, (0.0, 0.0));
        assert_eq!(hw.all_off_calls, 1);
        for subsystem in SubsystemId::ALL {
            assert!(service.scheduler().owner_of(subsystem).is_none());
        }
    }

    #[test]
    fn balance_button_supersedes_drive_default() {
        let mut service = TeleopService::new(RobotConfig::default()).unwrap();
        let mut hw = MockHw::new();
        hw.sensors.pitch = PitchSample::valid(10.0);

        let input = InputSnapshot::neutral()
            .with_axis(Axis::LeftY, 1.0)
            .with_button(Button::X);
        service.tick(input, &mut hw);

        // Balance ignores the stick and drives the proportional correction.
        let expected = RobotConfig::default().balance_gain_per_deg * 10.0;
        assert!((hw.drive.0 - expected).abs() < 1e-6);
        assert!((hw.drive.1 - expected).abs() < 1e-6);
    }
}
