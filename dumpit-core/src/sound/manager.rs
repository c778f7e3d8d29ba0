use dumpit_contracts::settings::SettingsStore;
use dumpit_contracts::sound::{ClickSound, SoundSink};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

pub const CLICK_SOUND_CLIP: &str = "/audio/mouse-click.mp3";
pub const DEFAULT_CLICK_VOLUME: f32 = 0.4;

pub const ENABLED_KEY: &str = "click_sound_enabled";
pub const VOLUME_KEY: &str = "click_sound_volume";

/// Click sound with persisted enabled/volume preferences.
///
/// Constructed explicitly and handed to whoever needs it; there is no
/// process-wide instance.
pub struct ClickSoundManager {
    sink: Arc<dyn SoundSink>,
    store: Arc<dyn SettingsStore>,
    clip: String,
    enabled: bool,
    volume: f32,
}

impl fmt::Debug for ClickSoundManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClickSoundManager")
            .field("clip", &self.clip)
            .field("enabled", &self.enabled)
            .field("volume", &self.volume)
            .finish_non_exhaustive()
    }
}

impl ClickSoundManager {
    /// Build a manager and load any stored preferences.
    pub fn new(sink: Arc<dyn SoundSink>, store: Arc<dyn SettingsStore>) -> Self {
        let mut manager = Self {
            sink,
            store,
            clip: CLICK_SOUND_CLIP.to_string(),
            enabled: true,
            volume: DEFAULT_CLICK_VOLUME,
        };
        manager.load_settings();
        manager
    }

    pub fn with_clip(mut self, clip: impl Into<String>) -> Self {
        self.clip = clip.into();
        self
    }

    fn load_settings(&mut self) {
        if let Some(raw) = self.store.get(ENABLED_KEY) {
            self.enabled = raw == "true";
        }
        if let Some(raw) = self.store.get(VOLUME_KEY) {
            match raw.parse::<f32>() {
                Ok(volume) if volume.is_finite() => {
                    self.volume = volume.clamp(0.0, 1.0)
                }
                _ => debug!("ignoring stored click volume {raw:?}"),
            }
        }
    }

    fn save_settings(&self) {
        let enabled = self.store.set(ENABLED_KEY, &self.enabled.to_string());
        let volume = self.store.set(VOLUME_KEY, &self.volume.to_string());
        if let Err(err) = enabled.and(volume) {
            warn!("failed to persist click sound settings: {err}");
        }
    }
}

impl ClickSound for ClickSoundManager {
    fn play(&self) {
        if !self.enabled {
            return;
        }
        if let Err(err) = self.sink.play(&self.clip, self.volume) {
            debug!("click sound playback failed: {err}");
        }
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.save_settings();
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = if volume.is_finite() {
            volume.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.save_settings();
    }

    fn volume(&self) -> f32 {
        self.volume
    }
}
