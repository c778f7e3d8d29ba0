//! Runtime configuration for user-adjustable constants
//!
//! This module provides a RuntimeConfig struct with Option<T> fields that override
//! the default constants. Accessor methods fall back to constants when None.

use dumpit_config::Config;

use crate::infra::constants::{drag, looping, motion};

/// Runtime configuration with optional overrides for constants.
/// Fields are None by default, falling back to compiled constants.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RuntimeConfig {
    // ========== CAROUSEL MOTION ==========
    /// Wheel delta multiplier
    pub scroll_speed: Option<f32>,
    /// Base smoothing factor per frame
    pub lerp_factor: Option<f32>,
    /// Per-event wheel clamp (px)
    pub max_step: Option<f32>,

    // ========== DRAG ==========
    pub mouse_drag_gain: Option<f32>,
    pub touch_drag_gain: Option<f32>,

    // ========== LOOPING ==========
    pub loop_lower_fraction: Option<f32>,
    pub loop_upper_fraction: Option<f32>,

    // ========== CLICK SOUND ==========
    pub sound_enabled: Option<bool>,
    pub sound_volume: Option<f32>,
}

impl RuntimeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides taken from a loaded configuration file and environment.
    pub fn from_config(config: &Config) -> Self {
        let carousel = &config.carousel;
        Self {
            scroll_speed: carousel.scroll_speed,
            lerp_factor: carousel.lerp_factor,
            max_step: carousel.max_step,
            mouse_drag_gain: carousel.mouse_drag_gain,
            touch_drag_gain: carousel.touch_drag_gain,
            loop_lower_fraction: carousel.loop_lower_fraction,
            loop_upper_fraction: carousel.loop_upper_fraction,
            sound_enabled: config.sound.enabled,
            sound_volume: config.sound.volume,
        }
    }

    // ========== CAROUSEL MOTION ACCESSORS ==========

    pub fn scroll_speed(&self) -> f32 {
        self.scroll_speed.unwrap_or(motion::SCROLL_SPEED)
    }

    pub fn lerp_factor(&self) -> f32 {
        self.lerp_factor.unwrap_or(motion::LERP_FACTOR)
    }

    pub fn max_step(&self) -> f32 {
        self.max_step.unwrap_or(motion::MAX_STEP)
    }

    // ========== DRAG ACCESSORS ==========

    pub fn mouse_drag_gain(&self) -> f32 {
        self.mouse_drag_gain.unwrap_or(drag::MOUSE_GAIN)
    }

    pub fn touch_drag_gain(&self) -> f32 {
        self.touch_drag_gain.unwrap_or(drag::TOUCH_GAIN)
    }

    // ========== LOOPING ACCESSORS ==========

    pub fn loop_lower_fraction(&self) -> f32 {
        self.loop_lower_fraction.unwrap_or(looping::LOWER_FRACTION)
    }

    pub fn loop_upper_fraction(&self) -> f32 {
        self.loop_upper_fraction.unwrap_or(looping::UPPER_FRACTION)
    }

    /// Reset all values to defaults (None)
    pub fn reset_to_defaults(&mut self) {
        *self = Self::default();
    }
}
