// gpu.rs - The graphics API seam used by the render pipeline

use crate::error::RenderResult;

/// Linear RGBA color in `0.0..=1.0`.
pub type Rgba = [f32; 4];

/// Pixel rectangle the pipeline renders into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Primitive topology for a draw call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Primitive {
    Lines,
    Points,
}

/// The subset of a programmable-pipeline graphics API the renderer needs.
///
/// Handles are plain copyable values owned by the caller; the backend does
/// not track them. All calls happen on the thread that owns the context.
pub trait Gpu {
    type Program: Copy;
    type Buffer: Copy;
    type VertexArray: Copy;
    type Uniform;

    /// Compiles and links a program from vertex and fragment shader bodies.
    fn compile_program(&self, vertex: &str, fragment: &str) -> RenderResult<Self::Program>;
    fn new_buffer(&self) -> RenderResult<Self::Buffer>;
    fn new_vertex_array(&self) -> RenderResult<Self::VertexArray>;
    fn attribute_location(&self, program: Self::Program, name: &str) -> Option<u32>;
    fn uniform_location(&self, program: Self::Program, name: &str) -> Option<Self::Uniform>;

    fn delete_program(&self, program: Self::Program);
    fn delete_buffer(&self, buffer: Self::Buffer);
    fn delete_vertex_array(&self, vertex_array: Self::VertexArray);

    fn set_viewport(&self, viewport: Viewport);
    fn clear_surface(&self, color: Rgba);
    fn bind_program(&self, program: Self::Program, vertex_array: Self::VertexArray);

    /// Replaces the contents of `buffer` with `data`.
    fn upload(&self, buffer: Self::Buffer, data: &[f32]);
    /// Feeds attribute `location` from `buffer`, `components` floats per vertex.
    fn attribute_array(&self, location: u32, buffer: Self::Buffer, components: i32);
    /// Feeds attribute `location` a constant value for every vertex.
    fn attribute_constant(&self, location: u32, value: f32);

    fn uniform_scalar(&self, uniform: &Self::Uniform, value: f32);
    fn uniform_vec2(&self, uniform: &Self::Uniform, value: [f32; 2]);
    fn uniform_vec4(&self, uniform: &Self::Uniform, value: [f32; 4]);

    fn draw_primitives(&self, primitive: Primitive, count: usize);
}
