//! Conway's Game of Life on a fixed size board with hard edges, rendered to RGBA frames.

pub mod app;
pub mod camera;
pub mod config;
pub mod events;
pub mod grid;
pub mod render;
pub mod rules;

pub use grid::Grid;
pub use render::render;
