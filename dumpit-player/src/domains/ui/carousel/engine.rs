use std::time::Instant;

use super::config::CarouselConfig;
use super::deferred::{DeferredAction, DeferredQueue};
use super::frame::{
    CarouselFrame, LoopJump, TrackGeometry, TrackTransition, compute_parallax,
};
use super::layout::SlideLayout;
use super::messages::PointerKind;
use super::state::{DragSession, MotionState};
use crate::error::{CarouselError, Result};
use crate::infra::constants::carousel::looping;

/// Frame-driven motion engine for the infinite parallax carousel.
///
/// The track holds three copies of the item list. Input moves the target
/// offset, every step eases the current offset toward it, and whenever the
/// current offset leaves the safe band both offsets jump by one copy width
/// so the visible content does not change.
///
/// All time-dependent entry points have an `_at` variant taking the frame
/// timestamp; the plain variants use `Instant::now()`.
#[derive(Debug)]
pub struct CarouselEngine {
    cfg: CarouselConfig,
    layout: Box<dyn SlideLayout>,
    item_count: usize,
    viewport_width: f32,
    slide_width: f32,
    state: MotionState,
    drag: Option<DragSession>,
    /// Bumped on every drag start so stale flag clears are ignored.
    gesture: u64,
    last_activity: Instant,
    deferred: DeferredQueue,
    running: bool,
}

impl CarouselEngine {
    pub fn start(
        cfg: CarouselConfig,
        item_count: usize,
        viewport_width: f32,
        layout: impl SlideLayout + 'static,
    ) -> Result<Self> {
        Self::start_at(cfg, item_count, viewport_width, layout, Instant::now())
    }

    pub fn start_at(
        cfg: CarouselConfig,
        item_count: usize,
        viewport_width: f32,
        layout: impl SlideLayout + 'static,
        now: Instant,
    ) -> Result<Self> {
        cfg.validate()?;
        if item_count == 0 {
            return Err(CarouselError::InvalidConfiguration(
                "carousel needs at least one item".to_string(),
            ));
        }
        if !(viewport_width.is_finite() && viewport_width > 0.0) {
            return Err(CarouselError::InvalidConfiguration(format!(
                "viewport width must be positive, got {viewport_width}"
            )));
        }
        let slide_width = layout.slide_width(viewport_width);
        let stride = slide_width + layout.slide_margin();
        if !(slide_width.is_finite() && slide_width > 0.0)
            || !(stride.is_finite() && stride > 0.0)
        {
            return Err(CarouselError::InvalidConfiguration(format!(
                "slide stride must be positive, got {stride}"
            )));
        }

        let sequence_width = item_count as f32 * stride;
        log::debug!(
            "carousel start: {item_count} items, stride {stride}px, sequence {sequence_width}px"
        );

        Ok(Self {
            cfg,
            layout: Box::new(layout),
            item_count,
            viewport_width,
            slide_width,
            state: MotionState::centered(sequence_width),
            drag: None,
            gesture: 0,
            last_activity: now,
            deferred: DeferredQueue::new(),
            running: true,
        })
    }

    pub fn state(&self) -> &MotionState {
        &self.state
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.cfg
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Slides on the track, all copies included.
    pub fn slide_count(&self) -> usize {
        self.item_count * looping::COPIES
    }

    pub fn slide_width(&self) -> f32 {
        self.slide_width
    }

    pub fn stride(&self) -> f32 {
        self.slide_width + self.layout.slide_margin()
    }

    pub fn sequence_width(&self) -> f32 {
        self.state.sequence_width
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub fn pending_deferred(&self) -> usize {
        self.deferred.len()
    }

    pub fn on_wheel(&mut self, dx: f32, dy: f32) {
        self.on_wheel_at(dx, dy, Instant::now());
    }

    pub fn on_wheel_at(&mut self, dx: f32, dy: f32, now: Instant) {
        if !self.running {
            return;
        }
        if !(dx.is_finite() && dy.is_finite()) {
            log::warn!("ignoring non-finite wheel delta ({dx}, {dy})");
            return;
        }
        if dx.abs() > dy.abs() {
            return;
        }
        let step = (dy * self.cfg.scroll_speed)
            .clamp(-self.cfg.max_step, self.cfg.max_step);
        self.state.target_offset -= step;
        self.last_activity = now;
    }

    pub fn on_drag_start(&mut self, x: f32, kind: PointerKind) {
        self.on_drag_start_at(x, kind, Instant::now());
    }

    pub fn on_drag_start_at(&mut self, x: f32, kind: PointerKind, now: Instant) {
        if !self.running {
            return;
        }
        if !x.is_finite() {
            log::warn!("ignoring drag start at non-finite x {x}");
            return;
        }
        self.gesture += 1;
        self.drag = Some(DragSession {
            kind,
            baseline: self.state.target_offset,
            last_x: x,
            distance: 0.0,
        });
        self.state.is_dragging = true;
        self.state.drag_anchor = x;
        self.state.real_drag = false;
        self.last_activity = now;
    }

    pub fn on_drag_move(&mut self, x: f32) {
        self.on_drag_move_at(x, Instant::now());
    }

    pub fn on_drag_move_at(&mut self, x: f32, now: Instant) {
        if !self.running {
            return;
        }
        if !x.is_finite() {
            log::warn!("ignoring drag move to non-finite x {x}");
            return;
        }
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        let gain = match drag.kind {
            PointerKind::Mouse => self.cfg.mouse_drag_gain,
            PointerKind::Touch => self.cfg.touch_drag_gain,
        };
        self.state.target_offset =
            drag.baseline + (x - self.state.drag_anchor) * gain;
        drag.distance += (x - drag.last_x).abs() * gain;
        drag.last_x = x;
        if drag.distance > self.cfg.real_drag_threshold_px {
            self.state.real_drag = true;
        }
        self.last_activity = now;
    }

    pub fn on_drag_end(&mut self) {
        self.on_drag_end_at(Instant::now());
    }

    pub fn on_drag_end_at(&mut self, now: Instant) {
        if !self.running || self.drag.take().is_none() {
            return;
        }
        self.state.is_dragging = false;
        self.deferred.schedule(
            now + self.cfg.clear_drag_delay,
            DeferredAction::ClearRealDrag {
                gesture: self.gesture,
            },
        );
    }

    /// Recompute slide geometry for a new viewport width. Offsets are kept;
    /// the loop correction absorbs any drift.
    pub fn on_resize(&mut self, viewport_width: f32) {
        if !self.running {
            return;
        }
        if !(viewport_width.is_finite() && viewport_width > 0.0) {
            log::warn!("ignoring resize to invalid width {viewport_width}");
            return;
        }
        self.viewport_width = viewport_width;
        self.slide_width = self.layout.slide_width(viewport_width);
        self.state.sequence_width = self.item_count as f32 * self.stride();
        log::debug!(
            "carousel resize: viewport {viewport_width}px, sequence {}px",
            self.state.sequence_width
        );
    }

    /// Whether a click at `now` follows a real drag closely enough to be
    /// swallowed.
    pub fn suppresses_click_at(&mut self, now: Instant) -> bool {
        if !self.running {
            return false;
        }
        self.run_deferred(now);
        self.state.real_drag
    }

    pub fn step(&mut self) -> Option<CarouselFrame> {
        self.step_at(Instant::now())
    }

    /// Advance one frame. Returns `None` once stopped.
    pub fn step_at(&mut self, now: Instant) -> Option<CarouselFrame> {
        if !self.running {
            return None;
        }
        self.run_deferred(now);

        let previous = self.state.current_offset;
        let factor = self.cfg.dynamic_factor(self.state.velocity);
        self.state.current_offset +=
            (self.state.target_offset - previous) * factor;

        self.state.velocity = (self.state.current_offset - previous).abs();
        let since_activity = now.saturating_duration_since(self.last_activity);
        self.state.is_moving = self.state.real_drag
            || self.state.velocity >= self.cfg.velocity_epsilon
            || since_activity <= self.cfg.settle_window;

        let loop_jump = self.correct_loop(now);

        let held = self.state.is_dragging || self.state.is_transitioning_loop;
        let transition = if held {
            TrackTransition::Immediate
        } else {
            TrackTransition::Linear
        };
        let geometry = TrackGeometry {
            track_offset: self.state.current_offset,
            slide_width: self.slide_width,
            slide_margin: self.layout.slide_margin(),
            viewport_width: self.viewport_width,
            slide_count: self.slide_count(),
        };

        log::trace!(
            "carousel step: offset {:.2} target {:.2} velocity {:.3}",
            self.state.current_offset,
            self.state.target_offset,
            self.state.velocity
        );

        Some(CarouselFrame {
            track_offset: self.state.current_offset,
            transition,
            loop_jump,
            is_moving: self.state.is_moving,
            slide_transitions: !held,
            slides: compute_parallax(&geometry, &self.cfg),
        })
    }

    /// Cancel the loop and drop pending callbacks. Safe to call repeatedly.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.drag = None;
        self.state.is_dragging = false;
        self.deferred.clear();
        log::debug!("carousel stopped");
    }

    fn correct_loop(&mut self, now: Instant) -> Option<LoopJump> {
        if self.state.is_dragging || self.state.is_transitioning_loop {
            return None;
        }
        let width = self.state.sequence_width;
        let from = self.state.current_offset;
        let delta = if from > -width * self.cfg.loop_lower_fraction {
            -width
        } else if from < -width * self.cfg.loop_upper_fraction {
            width
        } else {
            return None;
        };

        self.state.shift(delta);
        self.state.is_transitioning_loop = true;
        self.deferred
            .schedule(now + self.cfg.loop_guard, DeferredAction::ClearLoopGuard);
        log::debug!(
            "carousel loop jump: {from:.2} -> {:.2}",
            self.state.current_offset
        );
        Some(LoopJump {
            from,
            to: self.state.current_offset,
        })
    }

    fn run_deferred(&mut self, now: Instant) {
        for action in self.deferred.take_due(now) {
            match action {
                DeferredAction::ClearRealDrag { gesture } => {
                    if gesture == self.gesture && self.drag.is_none() {
                        self.state.real_drag = false;
                    }
                }
                DeferredAction::ClearLoopGuard => {
                    self.state.is_transitioning_loop = false;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::ui::carousel::layout::{FixedLayout, ResponsiveLayout};
    use std::time::Duration;

    const FRAME: Duration = Duration::from_millis(16);

    fn engine_at(now: Instant) -> CarouselEngine {
        CarouselEngine::start_at(
            CarouselConfig::default(),
            5,
            1200.0,
            ResponsiveLayout::default(),
            now,
        )
        .unwrap()
    }

    #[test]
    fn start_centres_on_middle_copy() {
        let engine = engine_at(Instant::now());
        assert_eq!(engine.sequence_width(), 1950.0);
        assert_eq!(engine.state().current_offset, -975.0);
        assert_eq!(engine.state().target_offset, -975.0);
        assert_eq!(engine.slide_count(), 15);
    }

    #[test]
    fn start_rejects_bad_parameters() {
        let zero = CarouselEngine::start(
            CarouselConfig::default(),
            0,
            1200.0,
            ResponsiveLayout::default(),
        );
        assert!(matches!(zero, Err(CarouselError::InvalidConfiguration(_))));

        let collapsed = CarouselEngine::start(
            CarouselConfig::default(),
            3,
            1200.0,
            FixedLayout {
                slide_width: 0.0,
                margin: 0.0,
            },
        );
        assert!(collapsed.is_err());

        let no_viewport = CarouselEngine::start(
            CarouselConfig::default(),
            3,
            f32::NAN,
            ResponsiveLayout::default(),
        );
        assert!(no_viewport.is_err());
    }

    #[test]
    fn wheel_moves_target_and_ignores_horizontal() {
        let t0 = Instant::now();
        let mut engine = engine_at(t0);
        engine.on_wheel_at(0.0, 100.0, t0);
        assert_eq!(engine.state().target_offset, -1150.0);

        engine.on_wheel_at(50.0, 10.0, t0);
        assert_eq!(engine.state().target_offset, -1150.0);

        // Large deltas are clamped to the max step.
        engine.on_wheel_at(0.0, -1000.0, t0);
        assert_eq!(engine.state().target_offset, -950.0);
    }

    #[test]
    fn wheel_steps_converge_without_overshoot() {
        let t0 = Instant::now();
        let mut engine = engine_at(t0);
        engine.on_wheel_at(0.0, 100.0, t0);

        let mut now = t0;
        let mut last_gap = f32::INFINITY;
        for _ in 0..400 {
            now += FRAME;
            let frame = engine.step_at(now).unwrap();
            assert!(frame.loop_jump.is_none());
            assert!(frame.track_offset >= -1150.0);
            let gap = (frame.track_offset - -1150.0).abs();
            assert!(gap <= last_gap);
            last_gap = gap;
        }
        assert!(last_gap < 0.5);
    }

    #[test]
    fn mouse_drag_applies_gain_from_baseline() {
        let t0 = Instant::now();
        let mut engine = engine_at(t0);
        let baseline = engine.state().target_offset;

        engine.on_drag_start_at(500.0, PointerKind::Mouse, t0);
        engine.on_drag_move_at(450.0, t0);
        engine.on_drag_move_at(400.0, t0);
        assert_eq!(engine.state().target_offset, baseline - 200.0);
        assert!(engine.state().real_drag);
    }

    #[test]
    fn touch_drag_uses_touch_gain() {
        let t0 = Instant::now();
        let mut engine = engine_at(t0);
        let baseline = engine.state().target_offset;
        engine.on_drag_start_at(100.0, PointerKind::Touch, t0);
        engine.on_drag_move_at(140.0, t0);
        assert_eq!(engine.state().target_offset, baseline + 60.0);
    }

    #[test]
    fn small_moves_are_not_a_real_drag() {
        let t0 = Instant::now();
        let mut engine = engine_at(t0);
        engine.on_drag_start_at(300.0, PointerKind::Mouse, t0);
        engine.on_drag_move_at(301.0, t0);
        engine.on_drag_move_at(302.0, t0);
        // 4px of path with gain 2 stays under the threshold.
        assert!(!engine.state().real_drag);
    }

    #[test]
    fn move_without_start_is_ignored() {
        let t0 = Instant::now();
        let mut engine = engine_at(t0);
        engine.on_drag_move_at(10.0, t0);
        engine.on_drag_end_at(t0);
        assert_eq!(engine.state().target_offset, -975.0);
        assert_eq!(engine.pending_deferred(), 0);
    }

    #[test]
    fn real_drag_flag_clears_after_delay() {
        let t0 = Instant::now();
        let mut engine = engine_at(t0);
        engine.on_drag_start_at(500.0, PointerKind::Mouse, t0);
        engine.on_drag_move_at(480.0, t0);
        engine.on_drag_end_at(t0);

        assert!(engine.suppresses_click_at(t0 + Duration::from_millis(50)));
        assert!(!engine.suppresses_click_at(t0 + Duration::from_millis(100)));
    }

    #[test]
    fn stale_flag_clear_does_not_touch_new_gesture() {
        let t0 = Instant::now();
        let mut engine = engine_at(t0);
        engine.on_drag_start_at(500.0, PointerKind::Mouse, t0);
        engine.on_drag_move_at(480.0, t0);
        engine.on_drag_end_at(t0);

        let t1 = t0 + Duration::from_millis(40);
        engine.on_drag_start_at(480.0, PointerKind::Mouse, t1);
        engine.on_drag_move_at(460.0, t1);
        engine.on_drag_end_at(t1);

        // First gesture's clear is due but a newer gesture owns the flag.
        assert!(engine.suppresses_click_at(t0 + Duration::from_millis(100)));
        assert!(!engine.suppresses_click_at(t1 + Duration::from_millis(100)));
    }

    #[test]
    fn loop_correction_jumps_one_copy() {
        let t0 = Instant::now();
        let mut engine = engine_at(t0);
        let width = engine.sequence_width();
        engine.state.current_offset = -0.24 * width;
        engine.state.target_offset = -0.24 * width;

        let frame = engine.step_at(t0 + FRAME).unwrap();
        let jump = frame.loop_jump.unwrap();
        assert!((jump.delta() - -width).abs() < 1e-3);
        assert!((frame.track_offset - -1.24 * width).abs() < 1e-2);
        assert!((engine.state().target_offset - -1.24 * width).abs() < 1e-2);
        assert_eq!(frame.transition, TrackTransition::Immediate);
        assert!(!frame.slide_transitions);

        // The guard lifts on the next frame.
        let next = engine.step_at(t0 + FRAME * 2).unwrap();
        assert!(next.loop_jump.is_none());
        assert_eq!(next.transition, TrackTransition::Linear);
    }

    #[test]
    fn loop_correction_jumps_forward_from_far_end() {
        let t0 = Instant::now();
        let mut engine = engine_at(t0);
        let width = engine.sequence_width();
        engine.state.current_offset = -1.8 * width;
        engine.state.target_offset = -1.8 * width;

        let frame = engine.step_at(t0 + FRAME).unwrap();
        assert!((frame.loop_jump.unwrap().delta() - width).abs() < 1e-3);
        assert!((frame.track_offset - -0.8 * width).abs() < 1e-2);
    }

    #[test]
    fn no_loop_correction_while_dragging() {
        let t0 = Instant::now();
        let mut engine = engine_at(t0);
        let width = engine.sequence_width();
        engine.state.current_offset = -0.1 * width;
        engine.state.target_offset = -0.1 * width;
        engine.on_drag_start_at(0.0, PointerKind::Mouse, t0);

        let frame = engine.step_at(t0 + FRAME).unwrap();
        assert!(frame.loop_jump.is_none());
        assert_eq!(frame.transition, TrackTransition::Immediate);

        engine.on_drag_end_at(t0 + FRAME);
        let frame = engine.step_at(t0 + FRAME * 2).unwrap();
        assert!(frame.loop_jump.is_some());
    }

    #[test]
    fn settles_after_window() {
        let t0 = Instant::now();
        let mut engine = engine_at(t0);
        let frame = engine.step_at(t0 + FRAME).unwrap();
        assert!(frame.is_moving);

        let frame = engine.step_at(t0 + Duration::from_millis(201)).unwrap();
        assert!(!frame.is_moving);
    }

    #[test]
    fn resize_keeps_offset() {
        let t0 = Instant::now();
        let mut engine = engine_at(t0);
        engine.on_resize(800.0);
        assert_eq!(engine.slide_width(), 215.0);
        assert_eq!(engine.sequence_width(), 5.0 * 255.0);
        assert_eq!(engine.state().current_offset, -975.0);

        engine.on_resize(0.0);
        assert_eq!(engine.viewport_width(), 800.0);
    }

    #[test]
    fn non_finite_input_leaves_offsets_usable() {
        let t0 = Instant::now();
        let mut engine = engine_at(t0);
        engine.on_wheel_at(0.0, f32::NAN, t0);
        engine.on_wheel_at(f32::INFINITY, 10.0, t0);
        engine.on_drag_start_at(f32::NAN, PointerKind::Mouse, t0);
        assert!(!engine.state().is_dragging);

        engine.on_drag_start_at(500.0, PointerKind::Mouse, t0);
        engine.on_drag_move_at(f32::NAN, t0);
        engine.on_drag_move_at(f32::NEG_INFINITY, t0);
        assert_eq!(engine.state().target_offset, -975.0);
        engine.on_drag_end_at(t0);

        let frame = engine.step_at(t0 + FRAME).unwrap();
        assert_eq!(frame.track_offset, -975.0);

        // Still responds to ordinary input afterwards.
        engine.on_wheel_at(0.0, 100.0, t0 + FRAME);
        assert_eq!(engine.state().target_offset, -1150.0);
        let frame = engine.step_at(t0 + FRAME * 2).unwrap();
        assert!(frame.track_offset.is_finite());
        assert!(frame.track_offset < -975.0);
    }

    #[test]
    fn stop_is_idempotent_and_final() {
        let t0 = Instant::now();
        let mut engine = engine_at(t0);
        engine.on_drag_start_at(10.0, PointerKind::Touch, t0);
        engine.on_drag_move_at(50.0, t0);
        engine.on_drag_end_at(t0);
        assert_eq!(engine.pending_deferred(), 1);

        engine.stop();
        engine.stop();
        assert!(!engine.is_running());
        assert_eq!(engine.pending_deferred(), 0);

        let target = engine.state().target_offset;
        engine.on_wheel_at(0.0, 100.0, t0);
        engine.on_drag_start_at(0.0, PointerKind::Mouse, t0);
        assert_eq!(engine.state().target_offset, target);
        assert!(engine.step_at(t0 + FRAME).is_none());
        assert!(!engine.suppresses_click_at(t0));
    }
}
