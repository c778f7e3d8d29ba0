use std::time::Instant;

use super::engine::CarouselEngine;
use super::frame::CarouselFrame;
use super::messages::CarouselMessage;

/// Route a host event into the engine. Input is stamped with `now`; only
/// `Tick` produces a frame.
pub fn update(
    engine: &mut CarouselEngine,
    msg: CarouselMessage,
    now: Instant,
) -> Option<CarouselFrame> {
    match msg {
        CarouselMessage::Wheel { dx, dy } => engine.on_wheel_at(dx, dy, now),
        CarouselMessage::DragStart { x, kind } => {
            engine.on_drag_start_at(x, kind, now)
        }
        CarouselMessage::DragMove { x } => engine.on_drag_move_at(x, now),
        CarouselMessage::DragEnd => engine.on_drag_end_at(now),
        CarouselMessage::Resize { viewport_width } => {
            engine.on_resize(viewport_width)
        }
        CarouselMessage::Tick(at) => return engine.step_at(at),
    }
    None
}
