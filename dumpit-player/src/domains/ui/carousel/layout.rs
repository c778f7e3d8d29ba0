//! Slide geometry providers.

use crate::infra::constants::carousel::layout;

/// Width of one slide for a given viewport, plus the margin around it.
pub trait SlideLayout: std::fmt::Debug + Send {
    fn slide_width(&self, viewport_width: f32) -> f32;

    fn slide_margin(&self) -> f32 {
        layout::SLIDE_MARGIN
    }

    /// Distance between the left edges of neighbouring slides.
    fn stride(&self, viewport_width: f32) -> f32 {
        self.slide_width(viewport_width) + self.slide_margin()
    }
}

/// Compact slides below the breakpoint, wide slides otherwise.
#[derive(Debug, Clone, Copy)]
pub struct ResponsiveLayout {
    pub breakpoint: f32,
    pub compact_width: f32,
    pub wide_width: f32,
    pub margin: f32,
}

impl Default for ResponsiveLayout {
    fn default() -> Self {
        Self {
            breakpoint: layout::COMPACT_BREAKPOINT,
            compact_width: layout::COMPACT_SLIDE_WIDTH,
            wide_width: layout::WIDE_SLIDE_WIDTH,
            margin: layout::SLIDE_MARGIN,
        }
    }
}

impl SlideLayout for ResponsiveLayout {
    fn slide_width(&self, viewport_width: f32) -> f32 {
        if viewport_width < self.breakpoint {
            self.compact_width
        } else {
            self.wide_width
        }
    }

    fn slide_margin(&self) -> f32 {
        self.margin
    }
}

/// Same slide width at every viewport size.
#[derive(Debug, Clone, Copy)]
pub struct FixedLayout {
    pub slide_width: f32,
    pub margin: f32,
}

impl SlideLayout for FixedLayout {
    fn slide_width(&self, _viewport_width: f32) -> f32 {
        self.slide_width
    }

    fn slide_margin(&self) -> f32 {
        self.margin
    }
}
