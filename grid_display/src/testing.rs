// testing.rs - A Gpu that records calls instead of talking to a driver

use std::cell::{Cell, RefCell};

use crate::error::{RenderError, RenderResult};
use crate::gpu::{Gpu, Primitive, Rgba, Viewport};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    CompileProgram,
    NewBuffer(u32),
    NewVertexArray,
    DeleteProgram,
    DeleteBuffer(u32),
    DeleteVertexArray,
    Viewport(Viewport),
    Clear(Rgba),
    BindProgram,
    Upload(u32, Vec<f32>),
    AttributeArray(u32, u32, i32),
    AttributeConstant(u32, f32),
    Uniform1(&'static str, f32),
    Uniform2(&'static str, [f32; 2]),
    Uniform4(&'static str, [f32; 4]),
    Draw(Primitive, usize),
}

#[derive(Default)]
pub struct RecordingGpu {
    fail_compile: bool,
    /// Id of the buffer whose allocation fails.
    fail_buffer: Option<u32>,
    /// Attribute or uniform name the "linked program" lacks.
    missing: Option<&'static str>,
    calls: RefCell<Vec<Call>>,
    buffers: Cell<u32>,
}

impl RecordingGpu {
    // Buffer ids in the order the pipeline creates them.
    pub const GRID_LINES: u32 = 1;
    pub const POINT_POSITIONS: u32 = 2;
    pub const POINT_SIZES: u32 = 3;

    /// Every shader compile fails.
    pub fn failing_compile() -> Self {
        Self { fail_compile: true, ..Self::default() }
    }

    /// Allocating buffer `id` fails.
    pub fn failing_buffer(id: u32) -> Self {
        Self { fail_buffer: Some(id), ..Self::default() }
    }

    /// The linked program lacks the attribute or uniform `name`.
    pub fn without(name: &'static str) -> Self {
        Self { missing: Some(name), ..Self::default() }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    pub fn uploads_to(&self, buffer: u32) -> Vec<Vec<f32>> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::Upload(id, data) if *id == buffer => Some(data.clone()),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn known(&self, name: &str) -> bool {
        self.missing != Some(name)
    }
}

const ATTRIBUTES: [&str; 2] = ["a_position", "a_point_size"];
const UNIFORMS: [&str; 3] = ["u_resolution", "u_pixels_per_point", "u_color"];

impl Gpu for RecordingGpu {
    type Program = u32;
    type Buffer = u32;
    type VertexArray = u32;
    type Uniform = &'static str;

    fn compile_program(&self, _vertex: &str, _fragment: &str) -> RenderResult<u32> {
        self.record(Call::CompileProgram);
        if self.fail_compile {
            return Err(RenderError::ShaderCompile("0:1: syntax error".into()));
        }
        Ok(1)
    }

    fn new_buffer(&self) -> RenderResult<u32> {
        let id = self.buffers.get() + 1;
        self.buffers.set(id);
        self.record(Call::NewBuffer(id));
        if self.fail_buffer == Some(id) {
            return Err(RenderError::ResourceAllocation("out of memory".into()));
        }
        Ok(id)
    }

    fn new_vertex_array(&self) -> RenderResult<u32> {
        self.record(Call::NewVertexArray);
        Ok(1)
    }

    fn attribute_location(&self, _program: u32, name: &str) -> Option<u32> {
        let slot = ATTRIBUTES.iter().position(|&a| a == name)?;
        self.known(name).then_some(slot as u32)
    }

    fn uniform_location(&self, _program: u32, name: &str) -> Option<&'static str> {
        let uniform = UNIFORMS.iter().copied().find(|&u| u == name)?;
        self.known(name).then_some(uniform)
    }

    fn delete_program(&self, _program: u32) {
        self.record(Call::DeleteProgram);
    }

    fn delete_buffer(&self, buffer: u32) {
        self.record(Call::DeleteBuffer(buffer));
    }

    fn delete_vertex_array(&self, _vertex_array: u32) {
        self.record(Call::DeleteVertexArray);
    }

    fn set_viewport(&self, viewport: Viewport) {
        self.record(Call::Viewport(viewport));
    }

    fn clear_surface(&self, color: Rgba) {
        self.record(Call::Clear(color));
    }

    fn bind_program(&self, _program: u32, _vertex_array: u32) {
        self.record(Call::BindProgram);
    }

    fn upload(&self, buffer: u32, data: &[f32]) {
        self.record(Call::Upload(buffer, data.to_vec()));
    }

    fn attribute_array(&self, location: u32, buffer: u32, components: i32) {
        self.record(Call::AttributeArray(location, buffer, components));
    }

    fn attribute_constant(&self, location: u32, value: f32) {
        self.record(Call::AttributeConstant(location, value));
    }

    fn uniform_scalar(&self, uniform: &&'static str, value: f32) {
        self.record(Call::Uniform1(*uniform, value));
    }

    fn uniform_vec2(&self, uniform: &&'static str, value: [f32; 2]) {
        self.record(Call::Uniform2(*uniform, value));
    }

    fn uniform_vec4(&self, uniform: &&'static str, value: [f32; 4]) {
        self.record(Call::Uniform4(*uniform, value));
    }

    fn draw_primitives(&self, primitive: Primitive, count: usize) {
        self.record(Call::Draw(primitive, count));
    }
}
