use super::messages::PointerKind;

/// Scroll position and interaction flags. Offsets are track translations in
/// px; more negative values show later slides.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MotionState {
    pub current_offset: f32,
    pub target_offset: f32,
    /// Displacement of the last frame (px, unsigned).
    pub velocity: f32,
    pub is_dragging: bool,
    pub drag_anchor: f32,
    /// Width of one copy of the item list.
    pub sequence_width: f32,
    pub is_transitioning_loop: bool,
    pub is_moving: bool,
    /// The current or most recent gesture moved far enough to count as a
    /// drag rather than a click.
    pub real_drag: bool,
}

impl MotionState {
    pub fn centered(sequence_width: f32) -> Self {
        let offset = -sequence_width / 2.0;
        Self {
            current_offset: offset,
            target_offset: offset,
            sequence_width,
            ..Default::default()
        }
    }

    /// Shift both offsets by the same amount.
    pub(crate) fn shift(&mut self, delta: f32) {
        self.current_offset += delta;
        self.target_offset += delta;
    }
}

/// Bookkeeping for the gesture in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DragSession {
    pub kind: PointerKind,
    /// Target offset when the gesture began.
    pub baseline: f32,
    pub last_x: f32,
    /// Path length travelled so far, gain applied.
    pub distance: f32,
}
