//! Subsystems — exclusive-ownership actuator owners.
//!
//! A subsystem owns one or more physical actuators and is the unit of
//! mutual exclusion: at most one active command may hold a subsystem at
//! any tick.  Ownership is tracked by the scheduler as a [`Requirements`]
//! bitmask keyed on [`SubsystemId`].
//!
//! Subsystems hold *desired* outputs, written by command logic during the
//! tick and applied to hardware by the composition root afterwards — so
//! every command runs before any actuator write becomes durable.

pub mod arm;
pub mod drive;
pub mod grabber;

pub use arm::Arm;
pub use drive::Drive;
pub use grabber::{Grabber, GrabberState};

use crate::ports::SensorSnapshot;

// ───────────────────────────────────────────────────────────────
// Identity and requirement sets
// ───────────────────────────────────────────────────────────────

/// Identity of each subsystem — the exclusivity token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SubsystemId {
    Drive = 0b0000_0001,
    Arm = 0b0000_0010,
    Grabber = 0b0000_0100,
}

impl SubsystemId {
    /// Total number of subsystems — sizes the scheduler's owner table.
    pub const COUNT: usize = 3;

    /// Bitmask for this subsystem in a [`Requirements`] set.
    pub const fn mask(self) -> u8 {
        self as u8
    }

    /// Dense index for table lookups.
    pub const fn index(self) -> usize {
        match self {
            Self::Drive => 0,
            Self::Arm => 1,
            Self::Grabber => 2,
        }
    }

    /// Every subsystem, for iteration.
    pub const ALL: [SubsystemId; Self::COUNT] =
        [SubsystemId::Drive, SubsystemId::Arm, SubsystemId::Grabber];
}

/// The set of subsystems a command requires, as a bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Requirements(u8);

impl Requirements {
    /// The empty set.
    pub const NONE: Requirements = Requirements(0);

    /// A set holding exactly one subsystem.
    pub const fn of(id: SubsystemId) -> Self {
        Self(id.mask())
    }

    /// Union with another subsystem.
    pub const fn and(self, id: SubsystemId) -> Self {
        Self(self.0 | id.mask())
    }

    /// Whether `id` is in the set.
    pub const fn contains(self, id: SubsystemId) -> bool {
        self.0 & id.mask() != 0
    }

    /// Whether the two sets share any subsystem.
    pub const fn overlaps(self, other: Requirements) -> bool {
        self.0 & other.0 != 0
    }

    /// Whether the set is empty.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

// ───────────────────────────────────────────────────────────────
// Subsystem trait (scheduler contract)
// ───────────────────────────────────────────────────────────────

/// Capability interface every subsystem implements.
pub trait Subsystem {
    /// Set all actuator outputs to zero.  Callable at any time, including
    /// mid-command cancellation; idempotent.
    fn stop_motors(&mut self);

    /// Optional per-tick self-update (e.g. sensor caching).  Runs before
    /// any command logic each tick.
    fn periodic(&mut self, sensors: &SensorSnapshot) {
        let _ = sensors;
    }
}
