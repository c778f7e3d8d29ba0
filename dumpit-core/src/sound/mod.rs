//! Click feedback service and the stores that persist its settings.

pub mod manager;
pub mod settings_store;

pub use manager::{
    CLICK_SOUND_CLIP, ClickSoundManager, DEFAULT_CLICK_VOLUME, ENABLED_KEY,
    VOLUME_KEY,
};
pub use settings_store::{JsonFileSettingsStore, MemorySettingsStore};
