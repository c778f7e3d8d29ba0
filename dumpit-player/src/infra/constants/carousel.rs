//! Carousel constants
//!
//! Defaults for the parallax carousel: wheel and drag response, smoothing,
//! loop correction bounds and the per-slide parallax transform. Tuning
//! should happen here (or through `RuntimeConfig`) so every gallery agrees.

/// Smoothing and wheel response.
pub mod motion {
    /// Multiplier applied to vertical wheel deltas.
    pub const SCROLL_SPEED: f32 = 1.75;
    /// Base fraction of the remaining distance covered each frame.
    pub const LERP_FACTOR: f32 = 0.05;
    /// Per-event clamp on wheel movement (px).
    pub const MAX_STEP: f32 = 200.0;
    /// Velocity damping used when adapting the smoothing factor.
    pub const VELOCITY_DAMPING: f32 = 0.01;
    /// Bounds of the adaptive factor relative to `LERP_FACTOR`.
    pub const MIN_FACTOR_RATIO: f32 = 0.5;
    pub const MAX_FACTOR_RATIO: f32 = 1.5;
    /// Below this per-frame displacement (px) the track counts as still.
    pub const VELOCITY_EPSILON: f32 = 0.1;
    /// Time after the last input during which the track still reports motion.
    pub const SETTLE_WINDOW_MS: u64 = 200;
}

/// Pointer drag response.
pub mod drag {
    pub const MOUSE_GAIN: f32 = 2.0;
    pub const TOUCH_GAIN: f32 = 1.5;
    /// Accumulated distance (px) after which a gesture is a real drag.
    pub const REAL_DRAG_THRESHOLD_PX: f32 = 5.0;
    /// Delay before the real-drag flag clears after release (ms).
    pub const CLEAR_FLAG_DELAY_MS: u64 = 100;
}

/// Infinite loop correction.
pub mod looping {
    /// Offsets above `-W * LOWER_FRACTION` jump back by one copy.
    pub const LOWER_FRACTION: f32 = 0.25;
    /// Offsets below `-W * UPPER_FRACTION` jump forward by one copy.
    pub const UPPER_FRACTION: f32 = 1.75;
    /// How long a correction blocks the next one (ms).
    pub const GUARD_MS: u64 = 10;
    /// Copies of the item list laid out on the track.
    pub const COPIES: usize = 3;
}

/// Per-slide parallax transform.
pub mod parallax {
    /// Slides further than this outside the viewport are skipped (px).
    pub const CULL_MARGIN_PX: f32 = 1000.0;
    /// Counter-translation per pixel of distance from the viewport centre.
    pub const OFFSET_FACTOR: f32 = -0.1;
    pub const BASE_SCALE: f32 = 1.1;
    /// Extra scale reached at half a viewport from the centre.
    pub const SCALE_RANGE: f32 = 0.1;
}

/// Responsive slide geometry.
pub mod layout {
    /// Viewports narrower than this use the compact slide width (px).
    pub const COMPACT_BREAKPOINT: f32 = 1000.0;
    pub const COMPACT_SLIDE_WIDTH: f32 = 215.0;
    pub const WIDE_SLIDE_WIDTH: f32 = 350.0;
    /// Horizontal margin around each slide, both sides combined (px).
    pub const SLIDE_MARGIN: f32 = 40.0;
}
