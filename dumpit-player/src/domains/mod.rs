pub mod gallery;
pub mod ui;
