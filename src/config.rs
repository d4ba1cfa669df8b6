//! Robot configuration parameters
//!
//! All tunable parameters for the teleoperation core: speed scaling,
//! balance control gains, arm/grabber thresholds, and loop timing.
//! Values can be overridden by whatever configuration adapter the
//! deployment uses; this crate only defines and validates them.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Core robot configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RobotConfig {
    // --- Drive scaling ---
    /// Speed-scale multiplier applied by the default drive command
    pub default_speed_scale: f32,
    /// Scale installed while the turbo button is held (> default)
    pub turbo_speed_scale: f32,
    /// Scale installed while the turtle button is held (< default)
    pub turtle_speed_scale: f32,

    // --- Self-leveling ---
    /// Proportional gain: drive output per degree of pitch error
    pub balance_gain_per_deg: f32,
    /// Clamp on the balance correction magnitude (0-1)
    pub balance_max_output: f32,
    /// |pitch| at or below this is considered level (degrees)
    pub balance_deadband_deg: f32,

    // --- Arm / grabber ---
    /// Joystick magnitude below this counts as idle
    pub arm_joystick_deadband: f32,
    /// Elevator position of the low scoring post (sensor units)
    pub low_post_position: f32,
    /// Margin subtracted from the low post before the grabber must grip
    pub low_post_safety_margin: f32,
    /// Gain from joystick value to elevator speed command
    pub elevator_manual_speed: f32,

    // --- Timing ---
    /// Control loop period (milliseconds)
    pub tick_period_ms: u32,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            // Drive scaling
            default_speed_scale: 1.0,
            turbo_speed_scale: 1.5,
            turtle_speed_scale: 0.3,

            // Self-leveling
            balance_gain_per_deg: 0.015,
            balance_max_output: 0.4,
            balance_deadband_deg: 2.0,

            // Arm / grabber
            arm_joystick_deadband: 0.05,
            low_post_position: 30.0,
            low_post_safety_margin: 10.0,
            elevator_manual_speed: 0.5,

            // Timing
            tick_period_ms: 20, // 50 Hz
        }
    }
}

impl RobotConfig {
    /// Validate parameter ranges.
    ///
    /// Configuration is rejected, not clamped — silently clamping a bad
    /// gain or deadband hides provisioning mistakes.  Runtime *inputs*
    /// (axes, command outputs) are clamped instead.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let floats = [
            self.default_speed_scale,
            self.turbo_speed_scale,
            self.turtle_speed_scale,
            self.balance_gain_per_deg,
            self.balance_max_output,
            self.balance_deadband_deg,
            self.arm_joystick_deadband,
            self.low_post_position,
            self.low_post_safety_margin,
            self.elevator_manual_speed,
        ];
        if floats.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::ValidationFailed(
                "all parameters must be finite",
            ));
        }

        if self.default_speed_scale <= 0.0 {
            return Err(ConfigError::ValidationFailed(
                "default_speed_scale must be positive",
            ));
        }
        if self.turbo_speed_scale < self.default_speed_scale {
            return Err(ConfigError::ValidationFailed(
                "turbo_speed_scale must be >= default_speed_scale",
            ));
        }
        if self.turtle_speed_scale <= 0.0 || self.turtle_speed_scale > self.default_speed_scale {
            return Err(ConfigError::ValidationFailed(
                "turtle_speed_scale must be in (0, default_speed_scale]",
            ));
        }
        if self.balance_gain_per_deg <= 0.0 {
            return Err(ConfigError::ValidationFailed(
                "balance_gain_per_deg must be positive",
            ));
        }
        if self.balance_max_output <= 0.0 || self.balance_max_output > 1.0 {
            return Err(ConfigError::ValidationFailed(
                "balance_max_output must be in (0, 1]",
            ));
        }
        if self.balance_deadband_deg <= 0.0 {
            return Err(ConfigError::ValidationFailed(
                "balance_deadband_deg must be positive",
            ));
        }
        if self.arm_joystick_deadband <= 0.0 || self.arm_joystick_deadband >= 1.0 {
            return Err(ConfigError::ValidationFailed(
                "arm_joystick_deadband must be in (0, 1)",
            ));
        }
        if self.low_post_safety_margin < 0.0 || self.low_post_safety_margin > self.low_post_position
        {
            return Err(ConfigError::ValidationFailed(
                "low_post_safety_margin must be in [0, low_post_position]",
            ));
        }
        if self.elevator_manual_speed <= 0.0 || self.elevator_manual_speed > 1.0 {
            return Err(ConfigError::ValidationFailed(
                "elevator_manual_speed must be in (0, 1]",
            ));
        }
        if self.tick_period_ms == 0 {
            return Err(ConfigError::ValidationFailed(
                "tick_period_ms must be non-zero",
            ));
        }
        Ok(())
    }

    /// Duration of one control tick in seconds.
    pub fn tick_period_secs(&self) -> f32 {
        self.tick_period_ms as f32 / 1000.0
    }
}
