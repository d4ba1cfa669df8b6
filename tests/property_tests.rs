//! Property tests for the kinematics laws and the scheduler's exclusivity
//! invariant, driven by arbitrary stick positions and button sequences.

use drivebase::command::{Command, DriveCommand, ScaleCommand, SharedDriveCommand};
use drivebase::config::RobotConfig;
use drivebase::context::RobotContext;
use drivebase::input::{Axis, Button, InputSnapshot};
use drivebase::kinematics;
use drivebase::ports::SensorSnapshot;
use drivebase::scheduler::CommandScheduler;
use drivebase::subsystem::{Requirements, SubsystemId};
use proptest::prelude::*;

// ── Kinematics laws ───────────────────────────────────────────

proptest! {
    /// Every mixing path stays inside the actuator range for any input,
    /// including wildly out-of-range sticks.
    #[test]
    fn outputs_always_in_unit_range(
        x in -10.0f32..10.0,
        rot in -10.0f32..10.0,
        quick_turn in any::<bool>(),
    ) {
        for wheels in [
            kinematics::arcade(x, rot),
            kinematics::curvature(x, rot, quick_turn),
            kinematics::tank(x, rot),
        ] {
            prop_assert!((-1.0..=1.0).contains(&wheels.left));
            prop_assert!((-1.0..=1.0).contains(&wheels.right));
        }
    }

    /// Arcade mixing is clamp(shape(x) ± shape(rot)) per side.
    #[test]
    fn arcade_is_shaped_sum_and_difference(
        x in -1.0f32..=1.0,
        rot in -1.0f32..=1.0,
    ) {
        let wheels = kinematics::arcade(x, rot);
        let sx = kinematics::shape_input(x);
        let sr = kinematics::shape_input(rot);
        prop_assert!((wheels.left - (sx + sr).clamp(-1.0, 1.0)).abs() < 1e-6);
        prop_assert!((wheels.right - (sx - sr).clamp(-1.0, 1.0)).abs() < 1e-6);
    }

    /// Pure forward input drives both sides identically, on every path.
    #[test]
    fn straight_input_gives_symmetric_output(x in -1.0f32..=1.0) {
        let arcade = kinematics::arcade(x, 0.0);
        prop_assert_eq!(arcade.left, arcade.right);
        let curvature = kinematics::curvature(x, 0.0, false);
        prop_assert_eq!(curvature.left, curvature.right);
    }

    /// Input shaping preserves sign and never amplifies magnitude.
    #[test]
    fn shaping_preserves_sign_and_attenuates(v in -1.0f32..=1.0) {
        let shaped = kinematics::shape_input(v);
        prop_assert!(shaped.abs() <= v.abs() + 1e-6);
        if v != 0.0 {
            prop_assert_eq!(shaped.signum(), v.signum());
        }
    }

    /// Mirrored inputs produce mirrored outputs.
    #[test]
    fn arcade_is_odd_in_both_axes(x in -1.0f32..=1.0, rot in -1.0f32..=1.0) {
        let a = kinematics::arcade(x, rot);
        let b = kinematics::arcade(-x, -rot);
        prop_assert!((a.left + b.left).abs() < 1e-6);
        prop_assert!((a.right + b.right).abs() < 1e-6);
    }
}

// ── Scheduler exclusivity ─────────────────────────────────────

/// Inert command with fixed requirements, for ownership bookkeeping tests.
struct Holder(Requirements);

impl Command for Holder {
    fn name(&self) -> &'static str {
        "Holder"
    }
    fn requirements(&self) -> Requirements {
        self.0
    }
    fn execute(&mut self, _ctx: &mut RobotContext) {}
}

fn requirements_strategy() -> impl Strategy<Value = Requirements> {
    prop::sample::subsequence(SubsystemId::ALL.to_vec(), 1..=SubsystemId::ALL.len())
        .prop_map(|subsystems| {
            subsystems
                .into_iter()
                .fold(Requirements::NONE, Requirements::and)
        })
}

proptest! {
    /// However commands are scheduled, no subsystem is ever owned by two
    /// active commands, and every owner is actually active.
    #[test]
    fn ownership_is_always_exclusive(
        requirement_sets in prop::collection::vec(requirements_strategy(), 1..6),
        schedule_order in prop::collection::vec(0usize..6, 1..20),
    ) {
        let mut sched = CommandScheduler::new();
        let mut ctx = RobotContext::new(RobotConfig::default());
        let ids: Vec<_> = requirement_sets
            .iter()
            .map(|&reqs| sched.register(Box::new(Holder(reqs))))
            .collect();

        for &pick in &schedule_order {
            if let Some(&id) = ids.get(pick) {
                sched.schedule(id, &mut ctx);
            }
            sched.tick(&mut ctx);

            for subsystem in SubsystemId::ALL {
                if let Some(owner) = sched.owner_of(subsystem) {
                    prop_assert!(sched.is_active(owner));
                }
            }
            // An active command must hold every subsystem it requires.
            for (&id, &reqs) in ids.iter().zip(requirement_sets.iter()) {
                if sched.is_active(id) {
                    for subsystem in SubsystemId::ALL {
                        if reqs.contains(subsystem) {
                            prop_assert_eq!(sched.owner_of(subsystem), Some(id));
                        }
                    }
                }
            }
        }
    }
}

// ── Decorator save/restore ────────────────────────────────────

proptest! {
    /// Any interleaving of turbo/turtle holds ends with the drive command
    /// back at its original scale once nothing is held.
    #[test]
    fn scale_always_restored_after_arbitrary_holds(
        holds in prop::collection::vec((any::<bool>(), 1usize..5), 1..10),
    ) {
        let config = RobotConfig::default();
        let mut sched = CommandScheduler::new();
        let mut ctx = RobotContext::new(config.clone());

        let drive = SharedDriveCommand::new(DriveCommand::new(
            Axis::LeftY,
            Axis::RightX,
            config.default_speed_scale,
        ));
        let turbo = ScaleCommand::turbo(&drive, config.turbo_speed_scale);
        let turtle = ScaleCommand::turtle(&drive, config.turtle_speed_scale);

        let drive_id = sched.register(Box::new(drive.clone()));
        let turbo_id = sched.register(Box::new(turbo));
        let turtle_id = sched.register(Box::new(turtle));
        sched.set_default(SubsystemId::Drive, drive_id);
        sched.bind_while_held(Button::RightBumper, turbo_id);
        sched.bind_while_held(Button::LeftBumper, turtle_id);

        let sensors = SensorSnapshot::default();
        for (use_turbo, ticks) in holds {
            let button = if use_turbo { Button::RightBumper } else { Button::LeftBumper };
            for _ in 0..ticks {
                ctx.begin_tick(InputSnapshot::neutral().with_button(button), &sensors);
                sched.tick(&mut ctx);
            }
            ctx.begin_tick(InputSnapshot::neutral(), &sensors);
            sched.tick(&mut ctx);
        }

        prop_assert!((drive.speed_scale() - config.default_speed_scale).abs() < 1e-6);
    }

    /// The drivetrain never emits NaN, whatever the controller reports.
    #[test]
    fn controller_garbage_never_reaches_the_wheels(
        left_y in any::<f32>(),
        right_x in any::<f32>(),
    ) {
        let snapshot = InputSnapshot::new(left_y, right_x, 0.0, 0);
        let wheels = kinematics::arcade(
            snapshot.axis(Axis::LeftY),
            snapshot.axis(Axis::RightX),
        );
        prop_assert!(wheels.left.is_finite());
        prop_assert!(wheels.right.is_finite());
        prop_assert!((-1.0..=1.0).contains(&wheels.left));
        prop_assert!((-1.0..=1.0).contains(&wheels.right));
    }
}
