use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselMessage {
    Wheel { dx: f32, dy: f32 },
    /// Pointer or touch down over the viewport.
    DragStart { x: f32, kind: PointerKind },
    /// Document-level pointer or touch move.
    DragMove { x: f32 },
    /// Pointer up, pointer leave or touch end.
    DragEnd,
    Resize { viewport_width: f32 },
    /// Frame-synchronized tick with timestamp from the host's frame clock
    Tick(Instant),
}
