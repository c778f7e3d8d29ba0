//! Carousel motion properties
//!
//! Behaviour the gallery relies on regardless of tuning:
//! - Once settled the offset stays inside the safe band, even after a drag
//!   that carried it several copies away or a resize that shrank the track
//! - A loop correction never changes what is on screen
//! - Resizing does not move the track
//! - Released drags converge monotonically and then report still

use std::time::{Duration, Instant};

use dumpit_player::domains::ui::carousel::frame::{
    TrackGeometry, compute_parallax,
};
use dumpit_player::domains::ui::carousel::update::update;
use dumpit_player::domains::ui::carousel::{
    CarouselConfig, CarouselEngine, CarouselMessage, PointerKind,
    ResponsiveLayout,
};

const FRAME: Duration = Duration::from_millis(16);

fn engine(items: usize, viewport: f32, t0: Instant) -> CarouselEngine {
    CarouselEngine::start_at(
        CarouselConfig::default(),
        items,
        viewport,
        ResponsiveLayout::default(),
        t0,
    )
    .expect("valid carousel parameters")
}

fn in_safe_band(engine: &CarouselEngine) -> bool {
    let width = engine.sequence_width();
    let offset = engine.state().current_offset;
    offset >= -1.75 * width - 1e-2 && offset <= -0.25 * width + 1e-2
}

#[test]
fn safe_band_holds_through_a_wheel_session() {
    let t0 = Instant::now();
    let mut engine = engine(5, 1200.0, t0);
    let mut now = t0;
    let mut jumps = 0;

    // Twenty hard scrolls one way, then twenty back, then rest.
    for frame in 0..900 {
        now += FRAME;
        let dy = match frame {
            0..20 => 120.0,
            100..120 => -120.0,
            _ => 0.0,
        };
        if dy != 0.0 {
            engine.on_wheel_at(0.0, dy, now);
        }
        let out = engine.step_at(now).expect("engine is running");
        jumps += usize::from(out.loop_jump.is_some());
        assert!(in_safe_band(&engine), "left band at frame {frame}");
    }

    assert!(jumps >= 2);
    assert!(!engine.state().is_moving);
}

#[test]
fn long_drag_recovers_band_with_consecutive_jumps() {
    let t0 = Instant::now();
    let mut engine = engine(5, 1200.0, t0);
    let width = engine.sequence_width();
    let mut now = t0;

    // 3000px of mouse travel carries the target about 3W away.
    engine.on_drag_start_at(1000.0, PointerKind::Mouse, now);
    for step in 1..=30 {
        now += FRAME;
        engine.on_drag_move_at(1000.0 - 100.0 * step as f32, now);
        assert!(engine.step_at(now).expect("running").loop_jump.is_none());
    }
    for _ in 0..400 {
        now += FRAME;
        engine.step_at(now);
    }
    assert!(engine.state().current_offset < -2.75 * width);
    engine.on_drag_end_at(now);

    let mut jumps = 0;
    let mut back_in_band = None;
    for frame in 0..600 {
        now += FRAME;
        let out = engine.step_at(now).expect("running");
        if let Some(jump) = out.loop_jump {
            assert!(back_in_band.is_none(), "jump after recovery");
            assert!((jump.delta() - width).abs() < 1e-2);
            jumps += 1;
        }
        if in_safe_band(&engine) {
            back_in_band.get_or_insert(frame);
        } else {
            assert!(back_in_band.is_none(), "left band at frame {frame}");
        }
    }

    assert!(jumps >= 2);
    assert!(back_in_band.expect("offset returns to the band") <= jumps);
}

#[test]
fn shrinking_resize_is_pulled_back_into_band() {
    let t0 = Instant::now();
    let mut engine = engine(5, 1200.0, t0);
    let mut now = t0;

    for _ in 0..11 {
        engine.on_wheel_at(0.0, 100.0, now);
    }
    for _ in 0..400 {
        now += FRAME;
        let out = engine.step_at(now).expect("running");
        assert!(out.loop_jump.is_none());
    }
    assert!((engine.state().current_offset - -2900.0).abs() < 0.5);

    engine.on_resize(800.0);
    let width = engine.sequence_width();
    assert_eq!(width, 5.0 * 255.0);
    assert!(!in_safe_band(&engine));

    now += FRAME;
    let out = engine.step_at(now).expect("running");
    let jump = out.loop_jump.expect("out-of-band offset is corrected");
    assert!((jump.delta() - width).abs() < 1e-2);
    for frame in 0..300 {
        assert!(in_safe_band(&engine), "left band at frame {frame}");
        now += FRAME;
        engine.step_at(now);
    }
}

#[test]
fn loop_jump_is_invisible() {
    let t0 = Instant::now();
    let mut engine = engine(5, 1200.0, t0);
    let cfg = *engine.config();
    let items = engine.item_count();
    let mut now = t0;

    engine.on_wheel_at(0.0, -120.0, now);
    engine.on_wheel_at(0.0, -120.0, now);
    engine.on_wheel_at(0.0, -120.0, now);

    let jump_frame = (0..400)
        .find_map(|_| {
            now += FRAME;
            engine.step_at(now).filter(|out| out.loop_jump.is_some())
        })
        .expect("scrolling back past the band triggers a correction");
    let jump = jump_frame.loop_jump.unwrap();
    assert!((jump.delta().abs() - engine.sequence_width()).abs() < 1e-2);

    // What slide i showed before the jump, slide i + N shows after it.
    let before = compute_parallax(
        &TrackGeometry {
            track_offset: jump.from,
            slide_width: engine.slide_width(),
            slide_margin: engine.stride() - engine.slide_width(),
            viewport_width: engine.viewport_width(),
            slide_count: engine.slide_count(),
        },
        &cfg,
    );
    let mut compared = 0;
    for slide in &before {
        let shifted = if jump.delta() < 0.0 {
            slide.display_index + items
        } else {
            match slide.display_index.checked_sub(items) {
                Some(index) => index,
                None => continue,
            }
        };
        if let Some(after) = jump_frame.slide(shifted) {
            assert!((after.parallax_offset - slide.parallax_offset).abs() < 1e-2);
            assert!((after.scale - slide.scale).abs() < 1e-4);
            compared += 1;
        }
    }
    assert!(compared > 0);
}

#[test]
fn resize_changes_width_but_not_offset() {
    let t0 = Instant::now();
    let mut engine = engine(6, 1440.0, t0);
    engine.on_wheel_at(0.0, 80.0, t0);
    let mut now = t0;
    for _ in 0..5 {
        now += FRAME;
        engine.step_at(now);
    }

    let before = engine.state().current_offset;
    let width_before = engine.sequence_width();
    update(
        &mut engine,
        CarouselMessage::Resize {
            viewport_width: 720.0,
        },
        now,
    );
    assert_eq!(engine.state().current_offset, before);
    assert_ne!(engine.sequence_width(), width_before);
    assert_eq!(engine.sequence_width(), 6.0 * 255.0);
}

#[test]
fn released_drag_converges_and_settles() {
    let t0 = Instant::now();
    let mut engine = engine(8, 1200.0, t0);
    let mut now = t0;

    engine.on_drag_start_at(700.0, PointerKind::Touch, now);
    for x in [680.0, 640.0, 600.0] {
        now += FRAME;
        engine.on_drag_move_at(x, now);
        engine.step_at(now);
    }
    engine.on_drag_end_at(now);

    let mut gap = f32::INFINITY;
    let mut settled_at = None;
    for frame in 0..600 {
        now += FRAME;
        let out = engine.step_at(now).expect("engine is running");
        let state = engine.state();
        let next_gap = (state.target_offset - state.current_offset).abs();
        assert!(next_gap <= gap + 1e-3, "gap grew at frame {frame}");
        gap = next_gap;
        if !out.is_moving && settled_at.is_none() {
            settled_at = Some(frame);
        }
    }

    let settled_at = settled_at.expect("carousel settles");
    // Still moving for at least the settle window after release.
    assert!(settled_at >= 12);
    assert!(gap < 0.1);
}

#[test]
fn teardown_is_idempotent() {
    let t0 = Instant::now();
    let mut engine = engine(3, 1200.0, t0);
    engine.stop();
    engine.stop();
    assert!(
        update(&mut engine, CarouselMessage::Tick(t0 + FRAME), t0).is_none()
    );
    update(&mut engine, CarouselMessage::Wheel { dx: 0.0, dy: 50.0 }, t0);
    assert_eq!(
        engine.state().target_offset,
        -engine.sequence_width() / 2.0
    );
}
