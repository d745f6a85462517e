// error.rs - Top-level application errors

use conway::EngineError;
use grid_display::RenderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("window backend failed: {0}")]
    Window(#[from] eframe::Error),
}
