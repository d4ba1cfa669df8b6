//! Controller input snapshot and button edge detection.
//!
//! The HID polling layer lives outside this crate; once per tick it hands
//! the core an [`InputSnapshot`] — two drive axes, the arm axis, and the
//! debounced button states.  Axis values are clamped into [-1, 1] at
//! construction so out-of-range hardware readings can never reach the
//! mixing laws.
//!
//! Edge detection is a pure function of (previous, current) state:
//!
//! | prev  | curr  | edge       |
//! |-------|-------|------------|
//! | false | true  | `Pressed`  |
//! | true  | false | `Released` |
//! | same  | same  | `None`     |

/// Continuous controller axes consumed by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum Axis {
    /// Primary stick Y — forward/backward drive speed.
    LeftY = 0,
    /// Primary stick X — rotation.
    RightX = 1,
    /// Arm stick Y — manual elevator control.
    ArmY = 2,
}

impl Axis {
    /// Total number of axes — sizes the snapshot array.
    pub const COUNT: usize = 3;
}

/// Discrete controller buttons consumed by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Button {
    /// Self-leveling while held.
    X = 0b0000_0001,
    /// Turtle (reduced speed) while held.
    LeftBumper = 0b0000_0010,
    /// Turbo (boosted speed) while held.
    RightBumper = 0b0000_0100,
    /// Force the grabber closed while held.
    GrabberOverride = 0b0000_1000,
}

impl Button {
    /// Bitmask for this button in [`InputSnapshot`].
    pub const fn mask(self) -> u8 {
        self as u8
    }

    /// Every button, for iteration in the trigger loop.
    pub const ALL: [Button; 4] = [
        Button::X,
        Button::LeftBumper,
        Button::RightBumper,
        Button::GrabberOverride,
    ];
}

/// Read-only per-tick snapshot of the operator controller.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    axes: [f32; Axis::COUNT],
    buttons: u8,
}

impl InputSnapshot {
    /// Build a snapshot from raw axis readings and a button bitmask.
    /// Axes are clamped into [-1, 1]; NaN readings collapse to 0.
    pub fn new(left_y: f32, right_x: f32, arm_y: f32, buttons: u8) -> Self {
        Self {
            axes: [clamp_axis(left_y), clamp_axis(right_x), clamp_axis(arm_y)],
            buttons,
        }
    }

    /// Snapshot with all axes centered and no buttons held.
    pub fn neutral() -> Self {
        Self::default()
    }

    /// Current value of `axis`, guaranteed within [-1, 1].
    pub fn axis(&self, axis: Axis) -> f32 {
        self.axes[axis as usize]
    }

    /// Whether `button` is currently held.
    pub fn held(&self, button: Button) -> bool {
        self.buttons & button.mask() != 0
    }

    /// Builder-style helper: return a copy with `button` held.
    pub fn with_button(mut self, button: Button) -> Self {
        self.buttons |= button.mask();
        self
    }

    /// Builder-style helper: return a copy with `axis` set (clamped).
    pub fn with_axis(mut self, axis: Axis, value: f32) -> Self {
        self.axes[axis as usize] = clamp_axis(value);
        self
    }
}

fn clamp_axis(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(-1.0, 1.0) }
}

/// Edge event produced by comparing two consecutive button states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEdge {
    /// No transition this tick.
    None,
    /// Button went from released to held.
    Pressed,
    /// Button went from held to released.
    Released,
}

/// Classify the transition between two consecutive debounced states.
pub fn edge(prev: bool, curr: bool) -> ButtonEdge {
    match (prev, curr) {
        (false, true) => ButtonEdge::Pressed,
        (true, false) => ButtonEdge::Released,
        _ => ButtonEdge::None,
    }
}
