use crate::error::SoundError;

/// UI click feedback, injected wherever a click should be audible.
pub trait ClickSound: Send {
    /// Play the click if enabled. Failures are swallowed by implementors.
    fn play(&self);

    fn set_enabled(&mut self, enabled: bool);

    fn is_enabled(&self) -> bool;

    /// Set volume; implementors clamp to `0.0..=1.0`.
    fn set_volume(&mut self, volume: f32);

    fn volume(&self) -> f32;

    fn toggle(&mut self) {
        let enabled = self.is_enabled();
        self.set_enabled(!enabled);
    }
}

/// Output device for short sound clips.
pub trait SoundSink: Send + Sync {
    fn play(&self, clip: &str, volume: f32) -> Result<(), SoundError>;
}

/// Silent click sound for headless runs and tests.
#[derive(Debug, Default, Clone)]
pub struct NoopClickSound {
    enabled: bool,
    volume: f32,
}

impl NoopClickSound {
    pub fn new() -> Self {
        Self {
            enabled: false,
            volume: 0.0,
        }
    }
}

impl ClickSound for NoopClickSound {
    fn play(&self) {
        log::trace!("click (muted)");
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    fn volume(&self) -> f32 {
        self.volume
    }
}
