use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use dumpit_config::ConfigLoader;
use dumpit_contracts::prelude::{
    ClickSound, ItemRepository, SettingsStore, SoundError, SoundSink,
};
use dumpit_core::repository::ImageRepository;
use dumpit_core::validation::url_draft;
use dumpit_core::{ClickSoundManager, JsonFileSettingsStore, MemorySettingsStore};
use dumpit_player::domains::gallery::GalleryController;
use dumpit_player::domains::ui::carousel::{
    CarouselConfig, CarouselFrame, CarouselMessage, PointerKind,
    TrackTransition,
};
use dumpit_player::infra::runtime_config::RuntimeConfig;
use env_logger::{Builder, Target};
use log::LevelFilter;
use serde::Serialize;

const FRAME: Duration = Duration::from_millis(16);

/// Headless gallery session: drives the carousel with scripted input and
/// prints one JSON line per frame.
#[derive(Debug, Parser)]
#[command(name = "dumpit-player", version, about)]
struct Args {
    /// Images placed in the gallery.
    #[arg(long, default_value_t = 8)]
    items: usize,

    /// Viewport width in px.
    #[arg(long, default_value_t = 1280.0)]
    viewport: f32,

    /// Frames to simulate at ~60 fps.
    #[arg(long, default_value_t = 120)]
    frames: usize,

    /// Vertical wheel delta sent on the first frame.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    wheel: f32,

    /// Mouse drag distance in px, performed over frames 10..20.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    drag: f32,

    /// Config file; `dumpit.toml` in the working directory is used if present.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct FrameSummary {
    frame: usize,
    track_offset: f32,
    target_offset: f32,
    is_moving: bool,
    immediate: bool,
    loop_jump: Option<f32>,
    visible_slides: usize,
}

impl FrameSummary {
    fn new(frame: usize, target_offset: f32, out: &CarouselFrame) -> Self {
        Self {
            frame,
            track_offset: out.track_offset,
            target_offset,
            is_moving: out.is_moving,
            immediate: out.transition == TrackTransition::Immediate,
            loop_jump: out.loop_jump.map(|jump| jump.delta()),
            visible_slides: out.slides.len(),
        }
    }
}

/// Stands in for an audio device by logging each clip.
#[derive(Debug)]
struct LogSink;

impl SoundSink for LogSink {
    fn play(&self, clip: &str, volume: f32) -> Result<(), SoundError> {
        log::info!("click {clip} at volume {volume:.2}");
        Ok(())
    }
}

fn init_logger() {
    Builder::new()
        .target(Target::Stderr)
        .filter_level(LevelFilter::Warn)
        .filter_module("dumpit_player", LevelFilter::Debug)
        .init();
}

fn drag_script(frame: usize, distance: f32) -> Option<CarouselMessage> {
    const START: usize = 10;
    const END: usize = 20;
    const ORIGIN: f32 = 600.0;
    match frame {
        START => Some(CarouselMessage::DragStart {
            x: ORIGIN,
            kind: PointerKind::Mouse,
        }),
        f if f > START && f < END => {
            let progress = (f - START) as f32 / (END - START - 1) as f32;
            Some(CarouselMessage::DragMove {
                x: ORIGIN + distance * progress,
            })
        }
        END => Some(CarouselMessage::DragEnd),
        _ => None,
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let args = Args::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &args.config {
        loader = loader.with_config_path(path);
    }
    let load = loader.load().context("failed to load configuration")?;
    log::debug!("configuration source: {:?}", load.source);
    let runtime = RuntimeConfig::from_config(&load.config);

    let store: Arc<dyn SettingsStore> = match &load.config.sound.settings_path {
        Some(path) => Arc::new(JsonFileSettingsStore::open(path)),
        None => Arc::new(MemorySettingsStore::new()),
    };
    let mut sound = ClickSoundManager::new(Arc::new(LogSink), store);
    if let Some(enabled) = runtime.sound_enabled {
        sound.set_enabled(enabled);
    }
    if let Some(volume) = runtime.sound_volume {
        sound.set_volume(volume);
    }

    let repository = Arc::new(ImageRepository::new());
    for i in 0..args.items {
        let draft = url_draft(&format!(
            "https://picsum.photos/seed/dumpit-{i}/350/500.jpg"
        ))
        .context("generated image url was rejected")?;
        repository
            .create(draft)
            .await
            .with_context(|| format!("failed to store image {i}"))?;
    }

    let mut gallery = GalleryController::new(
        repository,
        Box::new(sound),
        CarouselConfig::from_runtime_config(&runtime),
        args.viewport,
    );

    let mut now = Instant::now();
    gallery.refresh(now).await;
    if let Some(status) = gallery.status() {
        anyhow::bail!("gallery failed to load: {}", status.message());
    }

    let mut stdout = std::io::stdout().lock();
    for frame in 0..args.frames {
        now += FRAME;
        if frame == 0 && args.wheel != 0.0 {
            gallery.handle(
                CarouselMessage::Wheel {
                    dx: 0.0,
                    dy: args.wheel,
                },
                now,
            );
        }
        if args.drag != 0.0
            && let Some(msg) = drag_script(frame, args.drag)
        {
            gallery.handle(msg, now);
        }

        let Some(out) = gallery.frame(now) else {
            break;
        };
        let target = gallery
            .engine()
            .map(|engine| engine.state().target_offset)
            .unwrap_or(out.track_offset);
        let summary = FrameSummary::new(frame, target, &out);
        serde_json::to_writer(&mut stdout, &summary)
            .context("failed to write frame summary")?;
        writeln!(stdout).context("failed to write frame summary")?;
    }

    let centre = gallery.slides().len() / 2;
    if let Some(image) = gallery.click(centre, now + FRAME * 10) {
        log::info!("selected {}", image.display_name());
    }
    gallery.stop();
    Ok(())
}
