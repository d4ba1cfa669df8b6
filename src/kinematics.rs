//! Differential-drive mixing laws.
//!
//! Pure functions mapping stick inputs to per-side wheel speeds.  Three
//! standard laws are provided:
//!
//! | Law       | Mixing                                           |
//! |-----------|--------------------------------------------------|
//! | Arcade    | `left = x + r`, `right = x - r`, square shaping  |
//! | Curvature | rotation scales with `|x|`; quick-turn for pivots |
//! | Tank      | direct per-side assignment, no mixing            |
//!
//! Out-of-range inputs are clamped, never rejected — there is no
//! recoverable-error path at this layer.

/// Normalized per-side wheel speed pair, each within [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelSpeeds {
    pub left: f32,
    pub right: f32,
}

impl WheelSpeeds {
    /// Both sides stopped.
    pub const STOPPED: WheelSpeeds = WheelSpeeds {
        left: 0.0,
        right: 0.0,
    };
}

/// Square-law input shaping: squares the magnitude, preserves the sign.
/// Improves low-speed precision at the cost of top-end sensitivity.
pub fn shape_input(v: f32) -> f32 {
    (v * v).copysign(v)
}

/// Zero out `v` when its magnitude is below `deadband`.
pub fn apply_deadband(v: f32, deadband: f32) -> f32 {
    if v.abs() < deadband { 0.0 } else { v }
}

/// Arcade mixing: one stick for speed, one for rotation.
///
/// Inputs are clamped to [-1, 1], square-shaped, then mixed as
/// `left = x + r`, `right = x - r` with the outputs clamped again.
/// The clamp/shape order is load-bearing: shaping happens on the clamped
/// stick values, before mixing.
pub fn arcade(x_speed: f32, rotation: f32) -> WheelSpeeds {
    let x = shape_input(clamp_unit(x_speed));
    let r = shape_input(clamp_unit(rotation));
    WheelSpeeds {
        left: clamp_unit(x + r),
        right: clamp_unit(x - r),
    }
}

/// Constant-curvature mixing: rotation commands curvature rather than
/// rate, so a given stick deflection traces the same arc at any speed.
///
/// With `quick_turn` the raw rotation is mixed in directly, allowing
/// in-place pivots at zero forward speed.  If either side saturates, both
/// are rescaled by the larger magnitude to preserve the commanded arc.
pub fn curvature(x_speed: f32, rotation: f32, quick_turn: bool) -> WheelSpeeds {
    let x = clamp_unit(x_speed);
    let r = clamp_unit(rotation);

    let (left, right) = if quick_turn {
        (x + r, x - r)
    } else {
        (x + x.abs() * r, x - x.abs() * r)
    };

    // Desaturate: keep the left/right ratio, never exceed full scale.
    let max_magnitude = left.abs().max(right.abs());
    if max_magnitude > 1.0 {
        WheelSpeeds {
            left: left / max_magnitude,
            right: right / max_magnitude,
        }
    } else {
        WheelSpeeds { left, right }
    }
}

/// Tank mixing: direct per-side assignment, clamped, no shaping.
pub fn tank(left_speed: f32, right_speed: f32) -> WheelSpeeds {
    WheelSpeeds {
        left: clamp_unit(left_speed),
        right: clamp_unit(right_speed),
    }
}

fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(-1.0, 1.0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn shaping_squares_magnitude_and_keeps_sign() {
        assert!(close(shape_input(0.5), 0.25));
        assert!(close(shape_input(-0.5), -0.25));
        assert!(close(shape_input(1.0), 1.0));
        assert!(close(shape_input(0.0), 0.0));
    }

    #[test]
    fn arcade_full_forward() {
        let w = arcade(1.0, 0.0);
        assert!(close(w.left, 1.0));
        assert!(close(w.right, 1.0));
    }

    #[test]
    fn arcade_pivot_turn() {
        let w = arcade(0.0, 1.0);
        assert!(close(w.left, 1.0));
        assert!(close(w.right, -1.0));
    }

    #[test]
    fn arcade_mixes_shaped_inputs() {
        // shape(0.5) = 0.25, shape(0.5) = 0.25
        let w = arcade(0.5, 0.5);
        assert!(close(w.left, 0.5));
        assert!(close(w.right, 0.0));
    }

    #[test]
    fn arcade_clamps_out_of_range_inputs() {
        let w = arcade(5.0, -5.0);
        // Clamped to (1, -1), shaped to (1, -1), mixed and clamped.
        assert!(close(w.left, 0.0));
        assert!(close(w.right, 1.0));
    }

    #[test]
    fn curvature_scales_rotation_with_speed() {
        let slow = curvature(0.2, 0.5, false);
        let fast = curvature(0.8, 0.5, false);
        // Same stick, wider left/right split at higher speed = same arc.
        assert!((fast.left - fast.right).abs() > (slow.left - slow.right).abs());
    }

    #[test]
    fn curvature_no_quick_turn_cannot_pivot() {
        let w = curvature(0.0, 1.0, false);
        assert!(close(w.left, 0.0));
        assert!(close(w.right, 0.0));
    }

    #[test]
    fn curvature_quick_turn_pivots_in_place() {
        let w = curvature(0.0, 1.0, true);
        assert!(close(w.left, 1.0));
        assert!(close(w.right, -1.0));
    }

    #[test]
    fn curvature_desaturates_preserving_ratio() {
        let w = curvature(1.0, 1.0, false);
        assert!(w.left.abs() <= 1.0 && w.right.abs() <= 1.0);
        // left : right was 2 : 0 before desaturation.
        assert!(close(w.left, 1.0));
        assert!(close(w.right, 0.0));
    }

    #[test]
    fn tank_is_direct_and_unshaped() {
        let w = tank(0.5, -0.5);
        assert!(close(w.left, 0.5));
        assert!(close(w.right, -0.5));
    }

    #[test]
    fn deadband_zeroes_small_inputs() {
        assert!(close(apply_deadband(0.03, 0.05), 0.0));
        assert!(close(apply_deadband(-0.03, 0.05), 0.0));
        assert!(close(apply_deadband(0.06, 0.05), 0.06));
    }
}
