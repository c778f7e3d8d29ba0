//! Per-frame output handed to the view.

use super::config::CarouselConfig;

/// How the view should move the track to this frame's offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackTransition {
    /// Short linear transition between frames.
    Linear,
    /// Apply without any transition (dragging or a loop correction).
    Immediate,
}

/// A loop correction applied during this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopJump {
    pub from: f32,
    pub to: f32,
}

impl LoopJump {
    pub fn delta(&self) -> f32 {
        self.to - self.from
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideTransform {
    /// Position on the tripled track.
    pub display_index: usize,
    /// Horizontal counter-translation of the slide's image (px).
    pub parallax_offset: f32,
    pub scale: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselFrame {
    pub track_offset: f32,
    pub transition: TrackTransition,
    pub loop_jump: Option<LoopJump>,
    pub is_moving: bool,
    /// Whether per-slide transforms may animate.
    pub slide_transitions: bool,
    /// Slides near the viewport, ascending by display index.
    pub slides: Vec<SlideTransform>,
}

impl CarouselFrame {
    pub fn slide(&self, display_index: usize) -> Option<&SlideTransform> {
        self.slides
            .binary_search_by_key(&display_index, |s| s.display_index)
            .ok()
            .map(|pos| &self.slides[pos])
    }
}

/// Track geometry needed to place slides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    pub track_offset: f32,
    pub slide_width: f32,
    pub slide_margin: f32,
    pub viewport_width: f32,
    /// Slides on the track (all copies).
    pub slide_count: usize,
}

/// Parallax transform for every slide within the cull margin.
pub fn compute_parallax(
    geometry: &TrackGeometry,
    cfg: &CarouselConfig,
) -> Vec<SlideTransform> {
    let stride = geometry.slide_width + geometry.slide_margin;
    let viewport_width = geometry.viewport_width;
    let half_viewport = viewport_width / 2.0;

    (0..geometry.slide_count)
        .filter_map(|display_index| {
            let left = geometry.track_offset
                + display_index as f32 * stride
                + geometry.slide_margin / 2.0;
            let right = left + geometry.slide_width;
            if right < -cfg.cull_margin_px
                || left > viewport_width + cfg.cull_margin_px
            {
                return None;
            }
            let distance = left + geometry.slide_width / 2.0 - half_viewport;
            let ratio = distance.abs() / half_viewport;
            Some(SlideTransform {
                display_index,
                parallax_offset: distance * cfg.parallax_factor,
                scale: cfg.base_scale + ratio * cfg.scale_range,
            })
        })
        .collect()
}
