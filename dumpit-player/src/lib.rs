//! dumpit player library
//!
//! This crate contains the gallery's interactive surfaces used by the
//! executable in `src/main.rs`: the infinite parallax carousel engine, the
//! gallery controller that feeds it from a repository, and the runtime
//! tuning layer over the compiled constants.
//!
//! Notes
//! - The engine is frame driven and renderer agnostic; hosts forward input
//!   and apply the returned [`CarouselFrame`](domains::ui::carousel::CarouselFrame).
//! - Most consumers should use the `dumpit-player` binary; the library is
//!   exposed mainly to enable testing and reuse by other front ends.

pub mod domains;
pub mod error;
pub mod infra;

pub use error::{CarouselError, GalleryError};
