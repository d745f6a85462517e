// engine.rs - Game of Life engine over a double-buffered toroidal bit grid

use std::fmt;
use std::mem;

use crate::error::{EngineError, Result};
use crate::grid::GridBuffer;
use crate::patterns::{self, GLIDER};
use crate::timer::TickTimer;
use crate::view::{CellGeometry, LiveCells};

/// Conway's Game of Life on a toroidal grid.
///
/// `current` holds the visible state. `next` is scratch written during
/// [`Engine::tick`] and swapped in afterwards; it is never exposed.
/// A freshly built engine is all-dead; seeding is left to the mutation calls.
pub struct Engine {
    current: GridBuffer,
    next: GridBuffer,
    geometry: CellGeometry,
    generation: u64,
    positions: Vec<u32>, // reused backing store for LiveCells
}

impl Engine {
    pub fn new(width: u32, height: u32, cell_size: u32) -> Result<Self> {
        let geometry = checked_geometry(width, height, cell_size)?;
        let current = GridBuffer::new(width, height)?;
        let next = current.clone();
        log::debug!("engine created: {width}x{height}, cell size {cell_size}");
        Ok(Self {
            current,
            next,
            geometry,
            generation: 0,
            positions: Vec::new(),
        })
    }

    pub fn width(&self) -> u32 {
        self.current.width()
    }

    pub fn height(&self) -> u32 {
        self.current.height()
    }

    pub fn cell_size(&self) -> u32 {
        self.geometry.cell_size
    }

    pub fn geometry(&self) -> CellGeometry {
        self.geometry
    }

    /// Number of ticks since construction or the last reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn live_count(&self) -> usize {
        self.current.count_alive()
    }

    pub fn is_alive(&self, row: u32, col: u32) -> Result<bool> {
        let idx = self.current.checked_index(row, col)?;
        Ok(self.current.get(idx))
    }

    /// Zero-copy view of the packed cell bits of the current generation.
    pub fn as_bytes(&self) -> &[u8] {
        self.current.as_bytes()
    }

    /// Advances one generation.
    pub fn tick(&mut self) {
        let _timer = TickTimer::new("Engine::tick");

        let width = self.current.width() as usize;
        let height = self.current.height() as usize;

        {
            let _timer = TickTimer::new("new generation");
            let cur = &self.current;
            for row in 0..height {
                let north = (if row == 0 { height - 1 } else { row - 1 }) * width;
                let south = (if row == height - 1 { 0 } else { row + 1 }) * width;
                let here = row * width;

                for col in 0..width {
                    let west = if col == 0 { width - 1 } else { col - 1 };
                    let east = if col == width - 1 { 0 } else { col + 1 };

                    // On 1- and 2-wide axes a wrapped neighbour may be the cell
                    // itself or the same cell twice; each of the 8 slots counts.
                    #[rustfmt::skip]
                    let neighbors = [
                        north + west, north + col, north + east,
                        here + west,               here + east,
                        south + west, south + col, south + east,
                    ];
                    let count = neighbors.iter().filter(|&&idx| cur.get(idx)).count();

                    let idx = here + col;
                    self.next.set(idx, next_state(cur.get(idx), count));
                }
            }
        }

        {
            let _timer = TickTimer::new("swap cells");
            mem::swap(&mut self.current, &mut self.next);
        }
        self.generation += 1;
    }

    /// Flips the cell at (row, col). Does not change the generation.
    pub fn toggle_cell(&mut self, row: u32, col: u32) -> Result<()> {
        let idx = self.current.checked_index(row, col)?;
        self.current.toggle(idx);
        Ok(())
    }

    /// Sets a glider alive with its 3x3 box anchored at (row, col), wrapping
    /// around the edges. Only the five glider cells are written.
    pub fn stamp_glider(&mut self, row: u32, col: u32) -> Result<()> {
        self.current.checked_index(row, col)?;
        patterns::stamp(&mut self.current, &GLIDER, row, col);
        Ok(())
    }

    /// Sets every listed cell alive. All coordinates are checked before any
    /// cell is written.
    pub fn set_cells(&mut self, cells: &[(u32, u32)]) -> Result<()> {
        let indices = cells
            .iter()
            .map(|&(row, col)| self.current.checked_index(row, col))
            .collect::<Result<Vec<_>>>()?;
        for idx in indices {
            self.current.set(idx, true);
        }
        Ok(())
    }

    /// Kills every cell. Dimensions and generation are kept.
    pub fn clear(&mut self) {
        self.current.clear();
    }

    /// Overwrites the grid with a deterministic pseudo-random pattern.
    /// The generation counter is left alone.
    pub fn randomize(&mut self, seed: u64) {
        patterns::fill_random(&mut self.current, seed);
    }

    /// Reallocates both buffers, all-dead, and restarts the generation count.
    /// On error the engine keeps its previous state.
    pub fn reset(&mut self, width: u32, height: u32, cell_size: u32) -> Result<()> {
        let geometry = checked_geometry(width, height, cell_size)?;
        let current = GridBuffer::new(width, height)?;
        self.next = current.clone();
        self.current = current;
        self.geometry = geometry;
        self.generation = 0;
        log::debug!("engine reset: {width}x{height}, cell size {cell_size}");
        Ok(())
    }

    /// Regenerates the live-cell view from the current generation.
    ///
    /// Emits one `(x, y)` pixel-centre pair per alive cell in row-major order.
    /// The backing buffer is reused between calls.
    pub fn live_cell_positions(&mut self) -> LiveCells<'_> {
        let width = self.current.width() as usize;
        self.positions.clear();
        for idx in self.current.alive_indices() {
            let (row, col) = ((idx / width) as u32, (idx % width) as u32);
            let (x, y) = self.geometry.cell_center(row, col);
            self.positions.push(x);
            self.positions.push(y);
        }
        LiveCells::new(&self.positions)
    }
}

/// Dimensions are checked first so a zero side reports `InvalidDimension`.
fn checked_geometry(width: u32, height: u32, cell_size: u32) -> Result<CellGeometry> {
    if width == 0 || height == 0 {
        return Err(EngineError::InvalidDimension { width, height });
    }
    let geometry = CellGeometry::new(cell_size);
    match geometry.checked_canvas_extent(width, height) {
        Some(_) => Ok(geometry),
        None => Err(EngineError::CanvasTooLarge { width, height, cell_size }),
    }
}

fn next_state(alive: bool, neighbors: usize) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true, // Survival
        (false, 3) => true,            // Birth
        _ => false,                    // Death or stays dead
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let width = self.current.width() as usize;
        for idx in 0..self.current.len() {
            let symbol = if self.current.get(idx) { '◼' } else { '◻' };
            write!(f, "{symbol}")?;
            if (idx + 1) % width == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
