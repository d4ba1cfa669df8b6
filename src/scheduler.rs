//! Cooperative command scheduler.
//!
//! Single-threaded, fixed-period, externally clocked: the robot's main
//! loop calls [`CommandScheduler::tick`] once per control period and the
//! scheduler runs every active command's logic step.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                      one tick                              │
//! │                                                            │
//! │  button edges ──▶ while-true triggers (schedule / cancel)  │
//! │                          │                                 │
//! │                          ▼                                 │
//! │  default commands claim unowned subsystems                 │
//! │                          │                                 │
//! │                          ▼                                 │
//! │  execute() every active command ──▶ is_finished() ▶ end()  │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Exclusivity is the sole locking mechanism: scheduling a command first
//! cancels — synchronously, `end(interrupted=true)` — every current owner
//! of a subsystem it requires, then runs its `initialize`.  A subsystem's
//! state is therefore only ever mutated by the single command that holds
//! it.

use log::{debug, info};

use crate::command::Command;
use crate::context::RobotContext;
use crate::input::{self, Button, ButtonEdge, InputSnapshot};
use crate::subsystem::SubsystemId;

/// Handle to a registered command.
pub type CommandId = usize;

/// Maximum number of while-true button bindings (stack-allocated table).
pub const MAX_BINDINGS: usize = 8;

/// A while-true trigger: the bound command is active exactly while the
/// button is held, and cancelled on release.
#[derive(Debug, Clone, Copy)]
struct Binding {
    button: Button,
    command: CommandId,
}

/// Internal bookkeeping for a registered command.
struct Slot {
    command: Box<dyn Command>,
    active: bool,
}

/// The command scheduler.
///
/// Owns every registered command, the default-command table, the
/// while-true bindings, and the active-owner-per-subsystem map that
/// enforces mutual exclusion.
pub struct CommandScheduler {
    slots: Vec<Slot>,
    bindings: heapless::Vec<Binding, MAX_BINDINGS>,
    /// Default command per subsystem, scheduled whenever unowned.
    defaults: [Option<CommandId>; SubsystemId::COUNT],
    /// Active command currently holding each subsystem.
    owners: [Option<CommandId>; SubsystemId::COUNT],
    /// Previous tick's input, for edge detection.
    prev_input: InputSnapshot,
}

impl CommandScheduler {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            bindings: heapless::Vec::new(),
            defaults: [None; SubsystemId::COUNT],
            owners: [None; SubsystemId::COUNT],
            prev_input: InputSnapshot::neutral(),
        }
    }

    // ── Composition (done once, at wiring time) ───────────────

    /// Register a command and return its handle.
    pub fn register(&mut self, command: Box<dyn Command>) -> CommandId {
        let id = self.slots.len();
        debug!("scheduler: registered '{}' as #{id}", command.name());
        self.slots.push(Slot {
            command,
            active: false,
        });
        id
    }

    /// Make `command` the default for `subsystem`: scheduled whenever no
    /// other command owns that subsystem.
    pub fn set_default(&mut self, subsystem: SubsystemId, command: CommandId) {
        debug_assert!(
            self.slots[command].command.requirements().contains(subsystem),
            "default command must require its subsystem"
        );
        self.defaults[subsystem.index()] = Some(command);
    }

    /// Bind `command` to run while `button` is held.  Returns the binding
    /// slot, or `None` if the table is full.
    pub fn bind_while_held(&mut self, button: Button, command: CommandId) -> Option<usize> {
        let slot = self.bindings.len();
        self.bindings.push(Binding { button, command }).ok()?;
        Some(slot)
    }

    // ── Per-tick arbitration ──────────────────────────────────

    /// Run one scheduler tick.  `ctx.input` must already hold this tick's
    /// snapshot (see [`RobotContext::begin_tick`]).
    pub fn tick(&mut self, ctx: &mut RobotContext) {
        // 1. Edge-triggered while-true bindings.
        let prev = self.prev_input;
        let curr = ctx.input;
        for i in 0..self.bindings.len() {
            let binding = self.bindings[i];
            match input::edge(prev.held(binding.button), curr.held(binding.button)) {
                ButtonEdge::Pressed => self.schedule(binding.command, ctx),
                ButtonEdge::Released => self.cancel(binding.command, ctx),
                ButtonEdge::None => {}
            }
        }
        self.prev_input = curr;

        // 2. Default commands claim whatever is left unowned.
        for subsystem in SubsystemId::ALL {
            if self.owners[subsystem.index()].is_none() {
                if let Some(command) = self.defaults[subsystem.index()] {
                    self.schedule(command, ctx);
                }
            }
        }

        // 3. Run every active command, then its finished predicate.
        for id in 0..self.slots.len() {
            if !self.slots[id].active {
                continue;
            }
            self.slots[id].command.execute(ctx);
            if self.slots[id].command.is_finished() {
                info!("scheduler: '{}' finished", self.slots[id].command.name());
                self.slots[id].command.end(ctx, false);
                self.slots[id].active = false;
                self.release(id);
            }
        }
    }

    /// Activate a command, cancelling every current owner of its required
    /// subsystems first.  No-op if already active.
    pub fn schedule(&mut self, id: CommandId, ctx: &mut RobotContext) {
        if id >= self.slots.len() || self.slots[id].active {
            return;
        }

        let requirements = self.slots[id].command.requirements();
        for subsystem in SubsystemId::ALL {
            if requirements.contains(subsystem) {
                if let Some(holder) = self.owners[subsystem.index()] {
                    self.cancel(holder, ctx);
                }
            }
        }

        for subsystem in SubsystemId::ALL {
            if requirements.contains(subsystem) {
                self.owners[subsystem.index()] = Some(id);
            }
        }
        self.slots[id].active = true;
        info!("scheduler: '{}' initialized", self.slots[id].command.name());
        self.slots[id].command.initialize(ctx);
    }

    /// Cancel an active command: run its end path with the cancelled flag,
    /// release its subsystems.  No-op if not active.
    pub fn cancel(&mut self, id: CommandId, ctx: &mut RobotContext) {
        if id >= self.slots.len() || !self.slots[id].active {
            return;
        }
        info!("scheduler: '{}' cancelled", self.slots[id].command.name());
        self.slots[id].command.end(ctx, true);
        self.slots[id].active = false;
        self.release(id);
    }

    /// Cancel every active command (teardown path).
    pub fn cancel_all(&mut self, ctx: &mut RobotContext) {
        for id in 0..self.slots.len() {
            self.cancel(id, ctx);
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Whether a command is currently active.
    pub fn is_active(&self, id: CommandId) -> bool {
        self.slots.get(id).is_some_and(|s| s.active)
    }

    /// The command currently holding `subsystem`, if any.
    pub fn owner_of(&self, subsystem: SubsystemId) -> Option<CommandId> {
        self.owners[subsystem.index()]
    }

    // ── Internal ──────────────────────────────────────────────

    fn release(&mut self, id: CommandId) {
        for owner in &mut self.owners {
            if *owner == Some(id) {
                *owner = None;
            }
        }
    }
}

impl Default for CommandScheduler {
    fn default() -> Self {
        Self::new()
    }
}
