// lib.rs - Conway's Game of Life on a bit-packed toroidal grid
//
// Engine owns the simulation state and hands renderers a LiveCells view of
// alive-cell pixel positions each frame.

mod engine;
mod error;
mod grid;
mod patterns;
mod timer;
mod view;

pub use engine::Engine;
pub use error::{EngineError, Result};
pub use grid::GridBuffer;
pub use patterns::{GLIDER, Pattern};
pub use timer::TickTimer;
pub use view::{CellGeometry, LiveCells};
