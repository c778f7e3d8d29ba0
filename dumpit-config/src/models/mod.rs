//! Resolved configuration handed to the rest of the application.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::loader::error::ConfigLoadError;

pub mod sources;

/// Carousel tuning overrides. Unset fields fall back to built-in constants in
/// the player.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselSettings {
    /// Multiplier applied to vertical wheel deltas.
    pub scroll_speed: Option<f32>,
    /// Base smoothing factor per frame.
    pub lerp_factor: Option<f32>,
    /// Per-event clamp on wheel movement, in pixels.
    pub max_step: Option<f32>,
    pub mouse_drag_gain: Option<f32>,
    pub touch_drag_gain: Option<f32>,
    /// Loop correction bounds as fractions of one copy's width.
    pub loop_lower_fraction: Option<f32>,
    pub loop_upper_fraction: Option<f32>,
}

impl CarouselSettings {
    /// Fields set in `other` win.
    pub fn merge(&mut self, other: CarouselSettings) {
        macro_rules! take {
            ($($field:ident),*) => {
                $(if other.$field.is_some() { self.$field = other.$field; })*
            };
        }
        take!(
            scroll_speed,
            lerp_factor,
            max_step,
            mouse_drag_gain,
            touch_drag_gain,
            loop_lower_fraction,
            loop_upper_fraction
        );
    }

    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        let positive = [
            ("scroll_speed", self.scroll_speed),
            ("max_step", self.max_step),
            ("mouse_drag_gain", self.mouse_drag_gain),
            ("touch_drag_gain", self.touch_drag_gain),
        ];
        for (name, value) in positive {
            if let Some(value) = value
                && !(value.is_finite() && value > 0.0)
            {
                return Err(ConfigLoadError::Invalid(format!(
                    "carousel.{name} must be a positive number, got {value}"
                )));
            }
        }
        if let Some(lerp) = self.lerp_factor
            && !(lerp > 0.0 && lerp <= 1.0)
        {
            return Err(ConfigLoadError::Invalid(format!(
                "carousel.lerp_factor must be in (0, 1], got {lerp}"
            )));
        }
        // The safe band has to sit strictly inside the middle copy's reach.
        let lower = self.loop_lower_fraction.unwrap_or(0.25);
        let upper = self.loop_upper_fraction.unwrap_or(1.75);
        if !(lower > 0.0 && lower < 1.0 && upper > 1.0 && upper < 2.0) {
            return Err(ConfigLoadError::Invalid(format!(
                "carousel loop bounds must satisfy 0 < lower < 1 < upper < 2, \
                 got {lower}..{upper}"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SoundSettings {
    pub enabled: Option<bool>,
    pub volume: Option<f32>,
    /// JSON file used to persist the click-sound preferences.
    pub settings_path: Option<PathBuf>,
}

impl SoundSettings {
    pub fn merge(&mut self, other: SoundSettings) {
        if other.enabled.is_some() {
            self.enabled = other.enabled;
        }
        if other.volume.is_some() {
            self.volume = other.volume;
        }
        if other.settings_path.is_some() {
            self.settings_path = other.settings_path;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if let Some(volume) = self.volume
            && !(0.0..=1.0).contains(&volume)
        {
            return Err(ConfigLoadError::Invalid(format!(
                "sound.volume must be in [0, 1], got {volume}"
            )));
        }
        Ok(())
    }
}

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Defaults,
    File(PathBuf),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub carousel: CarouselSettings,
    pub sound: SoundSettings,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        self.carousel.validate()?;
        self.sound.validate()
    }
}
