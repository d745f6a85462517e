// lib.rs - GPU rendering of a Game of Life grid: grid lines plus one point per live cell
//
// RenderPipeline is generic over the Gpu trait; the production backend is the
// glow context eframe provides.

mod error;
mod glow_backend;
mod gpu;
mod pipeline;
mod shaders;

#[cfg(test)]
mod testing;

pub use error::{RenderError, RenderResult};
pub use gpu::{Gpu, Primitive, Rgba, Viewport};
pub use pipeline::{GridFrame, RenderPipeline, Surface};
