pub mod controller;
pub mod slide_set;

pub use controller::{GalleryController, GalleryStatus};
pub use slide_set::SlideSet;
