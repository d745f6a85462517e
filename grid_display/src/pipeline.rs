// pipeline.rs - Grid-line and live-cell rendering with create-once GPU resources

use conway::{CellGeometry, LiveCells};

use crate::error::{RenderError, RenderResult};
use crate::gpu::{Gpu, Primitive, Rgba, Viewport};
use crate::shaders;

/// One frame's worth of grid state to render.
#[derive(Clone, Copy, Debug)]
pub struct GridFrame<'a> {
    pub width: u32,
    pub height: u32,
    pub cell_size: u32,
    /// Interleaved `x, y` cell centres in grid pixel space.
    pub positions: &'a [u32],
}

impl<'a> GridFrame<'a> {
    pub fn new(width: u32, height: u32, cell_size: u32, live: LiveCells<'a>) -> Self {
        Self {
            width,
            height,
            cell_size,
            positions: live.as_slice(),
        }
    }

    fn cell_count(&self) -> usize {
        self.positions.len() / 2
    }
}

/// Where on the target the frame lands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    pub viewport: Viewport,
    /// Physical pixels per logical grid pixel; scales point sizes.
    pub pixels_per_point: f32,
}

const BACKGROUND: Rgba = [1.0, 1.0, 1.0, 1.0];
const GRID_LINE: Rgba = [0.8, 0.8, 0.8, 1.0]; // #CCCCCC
const ALIVE: Rgba = [0.0, 0.0, 0.0, 1.0];

struct Resources<G: Gpu> {
    program: G::Program,
    vertex_array: G::VertexArray,
    grid_lines: G::Buffer,
    point_positions: G::Buffer,
    point_sizes: G::Buffer,
    a_position: u32,
    a_point_size: u32,
    u_resolution: G::Uniform,
    u_pixels_per_point: G::Uniform,
    u_color: G::Uniform,
}

impl<G: Gpu> Resources<G> {
    /// Anything allocated before a failing step is deleted again.
    fn create(gpu: &G) -> RenderResult<Self> {
        let program = gpu.compile_program(shaders::VERTEX, shaders::FRAGMENT)?;
        Self::with_program(gpu, program).inspect_err(|_| gpu.delete_program(program))
    }

    fn with_program(gpu: &G, program: G::Program) -> RenderResult<Self> {
        let attribute = |name: &'static str| {
            gpu.attribute_location(program, name)
                .ok_or(RenderError::MissingAttribute(name))
        };
        let uniform = |name: &'static str| {
            gpu.uniform_location(program, name)
                .ok_or(RenderError::MissingUniform(name))
        };
        // Lookups first: they allocate nothing.
        let a_position = attribute(shaders::A_POSITION)?;
        let a_point_size = attribute(shaders::A_POINT_SIZE)?;
        let u_resolution = uniform(shaders::U_RESOLUTION)?;
        let u_pixels_per_point = uniform(shaders::U_PIXELS_PER_POINT)?;
        let u_color = uniform(shaders::U_COLOR)?;

        let vertex_array = gpu.new_vertex_array()?;
        let mut buffers = Vec::with_capacity(3);
        while buffers.len() < 3 {
            match gpu.new_buffer() {
                Ok(buffer) => buffers.push(buffer),
                Err(err) => {
                    for buffer in buffers {
                        gpu.delete_buffer(buffer);
                    }
                    gpu.delete_vertex_array(vertex_array);
                    return Err(err);
                }
            }
        }

        Ok(Self {
            program,
            vertex_array,
            grid_lines: buffers[0],
            point_positions: buffers[1],
            point_sizes: buffers[2],
            a_position,
            a_point_size,
            u_resolution,
            u_pixels_per_point,
            u_color,
        })
    }
}

/// Draws the grid and its live cells.
///
/// The shader program and buffers are created on first use and reused for
/// the pipeline's lifetime; every draw re-fills the same buffers. Vertex data
/// is staged in vectors owned by the pipeline so steady-state frames do not
/// allocate.
pub struct RenderPipeline<G: Gpu> {
    resources: Option<Resources<G>>,
    viewport: Option<Viewport>,
    line_vertices: Vec<f32>,
    point_positions: Vec<f32>,
    point_sizes: Vec<f32>,
}

impl<G: Gpu> Default for RenderPipeline<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Gpu> RenderPipeline<G> {
    pub fn new() -> Self {
        Self {
            resources: None,
            viewport: None,
            line_vertices: Vec::new(),
            point_positions: Vec::new(),
            point_sizes: Vec::new(),
        }
    }

    pub fn is_prepared(&self) -> bool {
        self.resources.is_some()
    }

    /// Creates the program and buffers if they do not exist yet.
    pub fn prepare(&mut self, gpu: &G) -> RenderResult<()> {
        if self.resources.is_none() {
            self.resources = Some(Resources::create(gpu)?);
            log::info!("grid program and buffers created");
        }
        Ok(())
    }

    /// Clears the surface, then draws every grid line and one point per live cell.
    pub fn draw(&mut self, gpu: &G, surface: Surface, frame: &GridFrame<'_>) -> RenderResult<()> {
        self.prepare(gpu)?;
        let Self {
            resources: Some(res),
            viewport,
            line_vertices,
            point_positions,
            point_sizes,
        } = self
        else {
            return Err(RenderError::RenderContextUnavailable);
        };

        if *viewport != Some(surface.viewport) {
            log::debug!("viewport changed to {:?}", surface.viewport);
            gpu.set_viewport(surface.viewport);
            *viewport = Some(surface.viewport);
        }

        gpu.clear_surface(BACKGROUND);
        gpu.bind_program(res.program, res.vertex_array);

        let geometry = CellGeometry::new(frame.cell_size);
        let (extent_w, extent_h) = geometry.canvas_extent(frame.width, frame.height);
        gpu.uniform_vec2(&res.u_resolution, [extent_w as f32, extent_h as f32]);
        gpu.uniform_scalar(&res.u_pixels_per_point, surface.pixels_per_point);

        fill_grid_lines(line_vertices, geometry, frame.width, frame.height);
        gpu.upload(res.grid_lines, line_vertices);
        gpu.attribute_array(res.a_position, res.grid_lines, 2);
        gpu.attribute_constant(res.a_point_size, 1.0);
        gpu.uniform_vec4(&res.u_color, GRID_LINE);
        gpu.draw_primitives(Primitive::Lines, line_vertices.len() / 2);

        let cells = frame.cell_count();
        if cells == 0 {
            return Ok(());
        }

        point_positions.clear();
        point_positions.extend(frame.positions[..cells * 2].iter().map(|&v| v as f32));
        point_sizes.clear();
        point_sizes.resize(cells, frame.cell_size as f32);

        gpu.upload(res.point_positions, point_positions);
        gpu.attribute_array(res.a_position, res.point_positions, 2);
        gpu.upload(res.point_sizes, point_sizes);
        gpu.attribute_array(res.a_point_size, res.point_sizes, 1);
        gpu.uniform_vec4(&res.u_color, ALIVE);
        gpu.draw_primitives(Primitive::Points, cells);

        Ok(())
    }
}

/// Writes `(width + 1) + (height + 1)` line segments as endpoint pairs:
/// vertical lines first, then horizontal.
fn fill_grid_lines(out: &mut Vec<f32>, geometry: CellGeometry, width: u32, height: u32) {
    let (extent_w, extent_h) = geometry.canvas_extent(width, height);
    let (extent_w, extent_h) = (extent_w as f32, extent_h as f32);

    out.clear();
    for i in 0..=width {
        let x = geometry.line_offset(i) as f32;
        out.extend_from_slice(&[x, 0.0, x, extent_h]);
    }
    for j in 0..=height {
        let y = geometry.line_offset(j) as f32;
        out.extend_from_slice(&[0.0, y, extent_w, y]);
    }
}
