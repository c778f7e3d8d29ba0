//! Constants module for centralized configuration values

pub mod carousel;

pub use carousel::{drag, layout, looping, motion, parallax};
