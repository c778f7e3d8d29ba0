//! Infinite parallax carousel engine.

pub mod config;
pub mod deferred;
pub mod engine;
pub mod frame;
pub mod layout;
pub mod messages;
pub mod state;
pub mod update;

// Re-export primary types for convenience
pub use config::CarouselConfig;
pub use engine::CarouselEngine;
pub use frame::{CarouselFrame, LoopJump, SlideTransform, TrackTransition};
pub use layout::{FixedLayout, ResponsiveLayout, SlideLayout};
pub use messages::{CarouselMessage, PointerKind};
pub use state::MotionState;
