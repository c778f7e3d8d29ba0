use serde::{Deserialize, Serialize};

use crate::loader::error::ConfigLoadError;
use crate::util::{parse_bool_var, parse_var};

use super::{CarouselSettings, SoundSettings};

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub carousel: CarouselSettings,
    #[serde(default)]
    pub sound: SoundSettings,
}

impl FileConfig {
    pub fn parse_from_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }
}

pub const ENV_SCROLL_SPEED: &str = "DUMPIT_SCROLL_SPEED";
pub const ENV_LERP_FACTOR: &str = "DUMPIT_LERP_FACTOR";
pub const ENV_MAX_STEP: &str = "DUMPIT_MAX_STEP";
pub const ENV_SOUND_ENABLED: &str = "DUMPIT_SOUND_ENABLED";
pub const ENV_SOUND_VOLUME: &str = "DUMPIT_SOUND_VOLUME";
pub const ENV_SOUND_SETTINGS_PATH: &str = "DUMPIT_SOUND_SETTINGS_PATH";

/// Overrides read from `DUMPIT_*` variables.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EnvConfig {
    pub carousel: CarouselSettings,
    pub sound: SoundSettings,
}

impl EnvConfig {
    pub fn from_env() -> Result<Self, ConfigLoadError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build overrides from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigLoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let carousel = CarouselSettings {
            scroll_speed: parse_var(ENV_SCROLL_SPEED, &lookup)?,
            lerp_factor: parse_var(ENV_LERP_FACTOR, &lookup)?,
            max_step: parse_var(ENV_MAX_STEP, &lookup)?,
            ..Default::default()
        };
        let sound = SoundSettings {
            enabled: parse_bool_var(ENV_SOUND_ENABLED, &lookup)?,
            volume: parse_var(ENV_SOUND_VOLUME, &lookup)?,
            settings_path: lookup(ENV_SOUND_SETTINGS_PATH)
                .filter(|raw| !raw.trim().is_empty())
                .map(Into::into),
        };
        Ok(Self { carousel, sound })
    }
}
