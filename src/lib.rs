//! Block view demo: a grid of numbered blocks on a canvas with a
//! gesture-driven zoom/pan camera.

pub mod components;
pub mod config;
pub mod error;
pub mod grid;
pub mod model;
pub mod scene;
pub mod state;
pub mod util;
