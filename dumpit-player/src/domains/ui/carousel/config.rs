//! Configuration for the carousel engine
//!
//! Resolved tuning values in plain units (px, fractions, durations). Built
//! from the compiled constants or from a `RuntimeConfig`.

use std::time::Duration;

use crate::error::{CarouselError, Result};
use crate::infra::constants::carousel::{
    drag, looping, motion, parallax,
};
use crate::infra::runtime_config::RuntimeConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    /// Multiplier applied to vertical wheel deltas.
    pub scroll_speed: f32,
    /// Per-event wheel clamp (px).
    pub max_step: f32,
    /// Base smoothing factor per frame.
    pub lerp_factor: f32,
    pub velocity_damping: f32,
    pub min_factor_ratio: f32,
    pub max_factor_ratio: f32,
    pub velocity_epsilon: f32,
    pub settle_window: Duration,

    pub mouse_drag_gain: f32,
    pub touch_drag_gain: f32,
    pub real_drag_threshold_px: f32,
    pub clear_drag_delay: Duration,

    pub loop_lower_fraction: f32,
    pub loop_upper_fraction: f32,
    pub loop_guard: Duration,

    pub cull_margin_px: f32,
    pub parallax_factor: f32,
    pub base_scale: f32,
    pub scale_range: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::from_runtime_config(&RuntimeConfig::default())
    }
}

impl CarouselConfig {
    pub fn from_runtime_config(rc: &RuntimeConfig) -> Self {
        Self {
            // These come from runtime config
            scroll_speed: rc.scroll_speed(),
            max_step: rc.max_step(),
            lerp_factor: rc.lerp_factor(),
            mouse_drag_gain: rc.mouse_drag_gain(),
            touch_drag_gain: rc.touch_drag_gain(),
            loop_lower_fraction: rc.loop_lower_fraction(),
            loop_upper_fraction: rc.loop_upper_fraction(),
            // These are kept static
            velocity_damping: motion::VELOCITY_DAMPING,
            min_factor_ratio: motion::MIN_FACTOR_RATIO,
            max_factor_ratio: motion::MAX_FACTOR_RATIO,
            velocity_epsilon: motion::VELOCITY_EPSILON,
            settle_window: Duration::from_millis(motion::SETTLE_WINDOW_MS),
            real_drag_threshold_px: drag::REAL_DRAG_THRESHOLD_PX,
            clear_drag_delay: Duration::from_millis(drag::CLEAR_FLAG_DELAY_MS),
            loop_guard: Duration::from_millis(looping::GUARD_MS),
            cull_margin_px: parallax::CULL_MARGIN_PX,
            parallax_factor: parallax::OFFSET_FACTOR,
            base_scale: parallax::BASE_SCALE,
            scale_range: parallax::SCALE_RANGE,
        }
    }

    /// Smoothing factor for the next frame given the previous velocity.
    pub fn dynamic_factor(&self, velocity: f32) -> f32 {
        let base = self.lerp_factor;
        (base / (1.0 + velocity * self.velocity_damping)).clamp(
            base * self.min_factor_ratio,
            (base * self.max_factor_ratio).min(1.0),
        )
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.lerp_factor > 0.0 && self.lerp_factor <= 1.0) {
            return Err(CarouselError::InvalidConfiguration(format!(
                "lerp factor must be in (0, 1], got {}",
                self.lerp_factor
            )));
        }
        if !(self.scroll_speed.is_finite() && self.scroll_speed > 0.0)
            || !(self.max_step.is_finite() && self.max_step > 0.0)
        {
            return Err(CarouselError::InvalidConfiguration(
                "wheel speed and step clamp must be positive".to_string(),
            ));
        }
        let (lower, upper) = (self.loop_lower_fraction, self.loop_upper_fraction);
        if !(lower > 0.0 && lower < 1.0 && upper > 1.0 && upper < 2.0) {
            return Err(CarouselError::InvalidConfiguration(format!(
                "loop bounds must satisfy 0 < lower < 1 < upper < 2, got \
                 {lower}..{upper}"
            )));
        }
        Ok(())
    }
}
