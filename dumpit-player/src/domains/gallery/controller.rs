//! Gallery page state: items from a repository, the carousel over them and
//! click handling.

use std::sync::Arc;
use std::time::Instant;

use dumpit_contracts::prelude::{ClickSound, Collectable, ItemRepository};

use super::slide_set::SlideSet;
use crate::domains::ui::carousel::{
    CarouselConfig, CarouselEngine, CarouselFrame, CarouselMessage,
    ResponsiveLayout, update::update,
};
use crate::error::GalleryError;

/// Inline message shown above the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryStatus {
    Info(String),
    Error(String),
}

impl GalleryStatus {
    pub fn message(&self) -> &str {
        match self {
            Self::Info(message) | Self::Error(message) => message,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

pub struct GalleryController<T: Collectable> {
    repository: Arc<dyn ItemRepository<T>>,
    sound: Box<dyn ClickSound>,
    cfg: CarouselConfig,
    layout: ResponsiveLayout,
    viewport_width: f32,
    slides: SlideSet<T>,
    engine: Option<CarouselEngine>,
    status: Option<GalleryStatus>,
}

impl<T: Collectable> std::fmt::Debug for GalleryController<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GalleryController")
            .field("kind", &T::KIND)
            .field("items", &self.slides.logical_len())
            .field("viewport_width", &self.viewport_width)
            .field("engine", &self.engine)
            .field("status", &self.status)
            .finish()
    }
}

impl<T: Collectable> GalleryController<T> {
    pub fn new(
        repository: Arc<dyn ItemRepository<T>>,
        sound: Box<dyn ClickSound>,
        cfg: CarouselConfig,
        viewport_width: f32,
    ) -> Self {
        Self {
            repository,
            sound,
            cfg,
            layout: ResponsiveLayout::default(),
            viewport_width,
            slides: SlideSet::default(),
            engine: None,
            status: None,
        }
    }

    pub fn with_layout(mut self, layout: ResponsiveLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn slides(&self) -> &SlideSet<T> {
        &self.slides
    }

    pub fn engine(&self) -> Option<&CarouselEngine> {
        self.engine.as_ref()
    }

    pub fn status(&self) -> Option<&GalleryStatus> {
        self.status.as_ref()
    }

    pub fn sound(&self) -> &dyn ClickSound {
        self.sound.as_ref()
    }

    pub fn sound_mut(&mut self) -> &mut dyn ClickSound {
        self.sound.as_mut()
    }

    /// Replace the item list. A length change restarts the carousel centred
    /// on the middle copy; an empty list tears it down.
    pub fn set_items(
        &mut self,
        items: Vec<T>,
        now: Instant,
    ) -> Result<(), GalleryError> {
        let changed = self.slides.replace(items);
        if self.slides.is_empty() {
            self.stop();
            return Ok(());
        }
        if !changed && self.engine.is_some() {
            return Ok(());
        }

        self.stop();
        let engine = CarouselEngine::start_at(
            self.cfg,
            self.slides.logical_len(),
            self.viewport_width,
            self.layout,
            now,
        )?;
        log::debug!(
            "{} gallery recentered on {} items",
            T::KIND,
            self.slides.logical_len()
        );
        self.engine = Some(engine);
        Ok(())
    }

    /// Reload items from the repository. Failures become an error status and
    /// leave the current carousel running.
    pub async fn refresh(&mut self, now: Instant) {
        match self.repository.list().await {
            Ok(items) => {
                if let Err(err) = self.set_items(items, now) {
                    log::warn!("failed to restart {} carousel: {err}", T::KIND);
                    self.status = Some(GalleryStatus::Error(err.to_string()));
                } else if self.status.as_ref().is_some_and(GalleryStatus::is_error)
                {
                    self.status = None;
                }
            }
            Err(err) => {
                log::warn!("failed to load {} items: {err}", T::KIND);
                self.status = Some(GalleryStatus::Error(format!(
                    "Failed to load {}s: {err}",
                    T::KIND
                )));
            }
        }
    }

    pub async fn create(&mut self, draft: T::Draft, now: Instant) {
        match self.repository.create(draft).await {
            Ok(item) => {
                log::debug!("created {} {}", T::KIND, item.id());
                self.refresh(now).await;
                if self.status.is_none() {
                    self.status =
                        Some(GalleryStatus::Info(format!("Saved {}", T::KIND)));
                }
            }
            Err(err) => {
                self.status = Some(GalleryStatus::Error(format!(
                    "Failed to save {}: {err}",
                    T::KIND
                )));
            }
        }
    }

    pub async fn delete(&mut self, id: T::Id, now: Instant) {
        match self.repository.delete(id).await {
            Ok(()) => {
                self.refresh(now).await;
                if self.status.is_none() {
                    self.status = Some(GalleryStatus::Info(format!(
                        "Deleted {}",
                        T::KIND
                    )));
                }
            }
            Err(err) => {
                log::warn!("failed to delete {} {id}: {err}", T::KIND);
                self.status = Some(GalleryStatus::Error(format!(
                    "Failed to delete {}: {err}",
                    T::KIND
                )));
            }
        }
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Select the slide at `display_index`. Returns `None` when the click
    /// ends a drag or misses every slide.
    pub fn click(&mut self, display_index: usize, now: Instant) -> Option<&T> {
        if let Some(engine) = self.engine.as_mut()
            && engine.suppresses_click_at(now)
        {
            log::debug!("click on slide {display_index} suppressed after drag");
            return None;
        }
        let item = self.slides.item(display_index)?;
        self.sound.play();
        Some(item)
    }

    /// Forward a host event to the carousel; `Tick` yields the next frame.
    pub fn handle(
        &mut self,
        msg: CarouselMessage,
        now: Instant,
    ) -> Option<CarouselFrame> {
        if let CarouselMessage::Resize { viewport_width } = msg
            && viewport_width.is_finite()
            && viewport_width > 0.0
        {
            self.viewport_width = viewport_width;
        }
        let engine = self.engine.as_mut()?;
        update(engine, msg, now)
    }

    pub fn frame(&mut self, now: Instant) -> Option<CarouselFrame> {
        self.handle(CarouselMessage::Tick(now), now)
    }

    /// Tear down the carousel, e.g. when the page unmounts.
    pub fn stop(&mut self) {
        if let Some(mut engine) = self.engine.take() {
            engine.stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use dumpit_contracts::prelude::{RepositoryError, RepositoryResult};
    use dumpit_core::InMemoryRepository;
    use dumpit_model::chrono::Utc;
    use dumpit_model::{Quote, QuoteDraft, QuoteID};
    use mockall::mock;
    use std::time::Duration;

    use crate::domains::ui::carousel::PointerKind;

    mock! {
        pub Sound {}

        impl ClickSound for Sound {
            fn play(&self);
            fn set_enabled(&mut self, enabled: bool);
            fn is_enabled(&self) -> bool;
            fn set_volume(&mut self, volume: f32);
            fn volume(&self) -> f32;
        }
    }

    #[derive(Debug)]
    struct OfflineRepository;

    #[async_trait]
    impl ItemRepository<Quote> for OfflineRepository {
        async fn list(&self) -> RepositoryResult<Vec<Quote>> {
            Err(RepositoryError::Unavailable("offline".to_string()))
        }

        async fn get(&self, id: QuoteID) -> RepositoryResult<Quote> {
            Err(RepositoryError::NotFound(id.to_string()))
        }

        async fn create(&self, _draft: QuoteDraft) -> RepositoryResult<Quote> {
            Err(RepositoryError::Unavailable("offline".to_string()))
        }

        async fn delete(&self, _id: QuoteID) -> RepositoryResult<()> {
            Err(RepositoryError::Unavailable("offline".to_string()))
        }
    }

    fn quote(content: &str) -> Quote {
        Quote::from_draft(
            QuoteDraft {
                content: content.to_string(),
            },
            Utc::now(),
        )
    }

    fn silent() -> Box<dyn ClickSound> {
        let mut sound = MockSound::new();
        sound.expect_play().never();
        Box::new(sound)
    }

    fn controller(
        repository: Arc<dyn ItemRepository<Quote>>,
        sound: Box<dyn ClickSound>,
    ) -> GalleryController<Quote> {
        GalleryController::new(
            repository,
            sound,
            CarouselConfig::default(),
            1200.0,
        )
    }

    #[test]
    fn length_change_recenters_and_empty_list_stops() {
        let t0 = Instant::now();
        let repo = Arc::new(InMemoryRepository::<Quote>::new());
        let mut gallery = controller(repo, silent());

        gallery
            .set_items(vec![quote("a"), quote("b")], t0)
            .unwrap();
        assert_eq!(gallery.engine().unwrap().sequence_width(), 780.0);

        gallery.handle(CarouselMessage::Wheel { dx: 0.0, dy: 40.0 }, t0);
        gallery.frame(t0 + Duration::from_millis(16));
        let moved = gallery.engine().unwrap().state().current_offset;
        assert!(moved < -390.0);

        // Same length: engine keeps its position.
        gallery.set_items(vec![quote("c"), quote("d")], t0).unwrap();
        assert_eq!(gallery.engine().unwrap().state().current_offset, moved);

        gallery
            .set_items(vec![quote("a"), quote("b"), quote("c")], t0)
            .unwrap();
        let engine = gallery.engine().unwrap();
        assert_eq!(engine.state().current_offset, -585.0);

        gallery.set_items(Vec::new(), t0).unwrap();
        assert!(gallery.engine().is_none());
        assert!(gallery.frame(t0).is_none());
    }

    #[test]
    fn click_plays_sound_and_returns_item() {
        let t0 = Instant::now();
        let mut sound = MockSound::new();
        sound.expect_play().times(1).return_const(());
        let repo = Arc::new(InMemoryRepository::<Quote>::new());
        let mut gallery = controller(repo, Box::new(sound));
        gallery
            .set_items(vec![quote("first"), quote("second")], t0)
            .unwrap();

        let picked = gallery.click(3, t0).map(|q| q.content.clone());
        assert_eq!(picked.as_deref(), Some("second"));
    }

    #[test]
    fn click_right_after_drag_is_suppressed() {
        let t0 = Instant::now();
        let repo = Arc::new(InMemoryRepository::<Quote>::new());
        let mut gallery = controller(repo, silent());
        gallery.set_items(vec![quote("only")], t0).unwrap();

        for msg in [
            CarouselMessage::DragStart {
                x: 400.0,
                kind: PointerKind::Mouse,
            },
            CarouselMessage::DragMove { x: 300.0 },
            CarouselMessage::DragEnd,
        ] {
            gallery.handle(msg, t0);
        }
        assert!(gallery.click(0, t0 + Duration::from_millis(20)).is_none());
    }

    #[test]
    fn click_outside_track_is_ignored() {
        let t0 = Instant::now();
        let repo = Arc::new(InMemoryRepository::<Quote>::new());
        let mut gallery = controller(repo, silent());
        gallery.set_items(vec![quote("only")], t0).unwrap();
        assert!(gallery.click(3, t0).is_none());
    }

    #[tokio::test]
    async fn refresh_failure_keeps_carousel_running() {
        let t0 = Instant::now();
        let mut gallery = controller(Arc::new(OfflineRepository), silent());
        gallery.set_items(vec![quote("kept")], t0).unwrap();

        gallery.refresh(t0).await;
        let status = gallery.status().unwrap();
        assert!(status.is_error());
        assert!(status.message().contains("offline"));
        assert!(gallery.frame(t0 + Duration::from_millis(16)).is_some());
        assert_eq!(gallery.slides().logical_len(), 1);
    }

    #[tokio::test]
    async fn delete_failure_reports_status() {
        let t0 = Instant::now();
        let mut gallery = controller(Arc::new(OfflineRepository), silent());
        gallery.delete(QuoteID::new(), t0).await;
        assert!(
            gallery
                .status()
                .is_some_and(|s| s.message().starts_with("Failed to delete quote"))
        );
    }

    #[tokio::test]
    async fn create_then_delete_round_trips_through_repository() {
        let t0 = Instant::now();
        let repo = Arc::new(InMemoryRepository::<Quote>::new());
        let mut gallery = controller(repo.clone(), silent());

        gallery
            .create(
                QuoteDraft {
                    content: "carpe diem".to_string(),
                },
                t0,
            )
            .await;
        assert_eq!(gallery.status(), Some(&GalleryStatus::Info("Saved quote".into())));
        assert_eq!(gallery.slides().logical_len(), 1);
        assert!(gallery.engine().is_some());

        let id = gallery.slides().items()[0].id;
        gallery.clear_status();
        gallery.delete(id, t0).await;
        assert_eq!(
            gallery.status(),
            Some(&GalleryStatus::Info("Deleted quote".into()))
        );
        assert!(gallery.engine().is_none());
    }
}
