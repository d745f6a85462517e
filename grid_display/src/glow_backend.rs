// glow_backend.rs - Gpu on top of the glow OpenGL context eframe hands out

use eframe::glow::{self, HasContext};

use crate::error::{RenderError, RenderResult};
use crate::gpu::{Gpu, Primitive, Rgba, Viewport};

const SHADER_VERSION: &str = if cfg!(target_arch = "wasm32") {
    "#version 300 es"
} else {
    "#version 330"
};

type Native = glow::Context;

unsafe fn compile_shader(
    gl: &Native,
    kind: u32,
    body: &str,
) -> RenderResult<<Native as glow::HasContext>::Shader> {
    unsafe {
        let shader = gl.create_shader(kind).map_err(RenderError::ResourceAllocation)?;
        gl.shader_source(shader, &format!("{SHADER_VERSION}\n{body}"));
        gl.compile_shader(shader);
        if !gl.get_shader_compile_status(shader) {
            let log = gl.get_shader_info_log(shader);
            gl.delete_shader(shader);
            return Err(RenderError::ShaderCompile(log));
        }
        Ok(shader)
    }
}

impl Gpu for glow::Context {
    type Program = <Native as glow::HasContext>::Program;
    type Buffer = <Native as glow::HasContext>::Buffer;
    type VertexArray = <Native as glow::HasContext>::VertexArray;
    type Uniform = <Native as glow::HasContext>::UniformLocation;

    fn compile_program(&self, vertex: &str, fragment: &str) -> RenderResult<Self::Program> {
        unsafe {
            let vs = compile_shader(self, glow::VERTEX_SHADER, vertex)?;
            let fs = match compile_shader(self, glow::FRAGMENT_SHADER, fragment) {
                Ok(fs) => fs,
                Err(err) => {
                    self.delete_shader(vs);
                    return Err(err);
                }
            };

            let program = match self.create_program() {
                Ok(program) => program,
                Err(err) => {
                    self.delete_shader(vs);
                    self.delete_shader(fs);
                    return Err(RenderError::ResourceAllocation(err));
                }
            };
            self.attach_shader(program, vs);
            self.attach_shader(program, fs);
            self.link_program(program);
            let linked = self.get_program_link_status(program);

            // Shaders are owned by the program once linked.
            for shader in [vs, fs] {
                self.detach_shader(program, shader);
                self.delete_shader(shader);
            }

            if !linked {
                let log = self.get_program_info_log(program);
                HasContext::delete_program(self, program);
                return Err(RenderError::ProgramLink(log));
            }
            Ok(program)
        }
    }

    fn new_buffer(&self) -> RenderResult<Self::Buffer> {
        unsafe { self.create_buffer().map_err(RenderError::ResourceAllocation) }
    }

    fn new_vertex_array(&self) -> RenderResult<Self::VertexArray> {
        unsafe { self.create_vertex_array().map_err(RenderError::ResourceAllocation) }
    }

    fn attribute_location(&self, program: Self::Program, name: &str) -> Option<u32> {
        unsafe { self.get_attrib_location(program, name) }
    }

    fn uniform_location(&self, program: Self::Program, name: &str) -> Option<Self::Uniform> {
        unsafe { self.get_uniform_location(program, name) }
    }

    fn delete_program(&self, program: Self::Program) {
        unsafe { HasContext::delete_program(self, program) }
    }

    fn delete_buffer(&self, buffer: Self::Buffer) {
        unsafe { HasContext::delete_buffer(self, buffer) }
    }

    fn delete_vertex_array(&self, vertex_array: Self::VertexArray) {
        unsafe { HasContext::delete_vertex_array(self, vertex_array) }
    }

    fn set_viewport(&self, viewport: Viewport) {
        unsafe { self.viewport(viewport.x, viewport.y, viewport.width, viewport.height) }
    }

    fn clear_surface(&self, [r, g, b, a]: Rgba) {
        unsafe {
            self.clear_color(r, g, b, a);
            self.clear(glow::COLOR_BUFFER_BIT);
        }
    }

    fn bind_program(&self, program: Self::Program, vertex_array: Self::VertexArray) {
        unsafe {
            if !cfg!(target_arch = "wasm32") {
                self.enable(glow::PROGRAM_POINT_SIZE);
            }
            self.use_program(Some(program));
            self.bind_vertex_array(Some(vertex_array));
        }
    }

    fn upload(&self, buffer: Self::Buffer, data: &[f32]) {
        unsafe {
            self.bind_buffer(glow::ARRAY_BUFFER, Some(buffer));
            self.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(data),
                glow::STREAM_DRAW,
            );
        }
    }

    fn attribute_array(&self, location: u32, buffer: Self::Buffer, components: i32) {
        unsafe {
            self.bind_buffer(glow::ARRAY_BUFFER, Some(buffer));
            self.enable_vertex_attrib_array(location);
            self.vertex_attrib_pointer_f32(location, components, glow::FLOAT, false, 0, 0);
        }
    }

    fn attribute_constant(&self, location: u32, value: f32) {
        unsafe {
            self.disable_vertex_attrib_array(location);
            self.vertex_attrib_1_f32(location, value);
        }
    }

    fn uniform_scalar(&self, uniform: &Self::Uniform, value: f32) {
        unsafe { self.uniform_1_f32(Some(uniform), value) }
    }

    fn uniform_vec2(&self, uniform: &Self::Uniform, [x, y]: [f32; 2]) {
        unsafe { self.uniform_2_f32(Some(uniform), x, y) }
    }

    fn uniform_vec4(&self, uniform: &Self::Uniform, [x, y, z, w]: [f32; 4]) {
        unsafe { self.uniform_4_f32(Some(uniform), x, y, z, w) }
    }

    fn draw_primitives(&self, primitive: Primitive, count: usize) {
        let mode = match primitive {
            Primitive::Lines => glow::LINES,
            Primitive::Points => glow::POINTS,
        };
        unsafe { self.draw_arrays(mode, 0, count as i32) }
    }
}
