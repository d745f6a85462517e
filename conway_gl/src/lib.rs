// lib.rs - Interactive Game of Life: an animation controller over the conway
// engine, drawn through the grid_display GPU pipeline inside eframe

pub mod app;
pub mod config;
pub mod controller;
pub mod error;

pub use app::{FrameStager, LifeApp};
pub use config::AppConfig;
pub use controller::{AnimationController, GridShape, PlayState, Renderer};
pub use error::AppError;
