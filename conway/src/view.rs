// view.rs - Engine-to-renderer interop: cell geometry and the live-cell view

/// Pixel layout of the grid: each cell is `cell_size` pixels wide with a
/// one-pixel grid line between neighbours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellGeometry {
    pub cell_size: u32,
}

impl CellGeometry {
    pub fn new(cell_size: u32) -> Self {
        Self { cell_size }
    }

    /// Distance between the starts of two adjacent cells.
    #[inline]
    pub fn pitch(&self) -> u32 {
        self.cell_size + 1
    }

    /// Pixel-space centre of the cell at (row, col), as `(x, y)`.
    #[inline]
    pub fn cell_center(&self, row: u32, col: u32) -> (u32, u32) {
        let half = self.cell_size / 2 + 1;
        (col * self.pitch() + half, row * self.pitch() + half)
    }

    /// Offset of the `i`-th grid line along either axis.
    #[inline]
    pub fn line_offset(&self, i: u32) -> u32 {
        i * self.pitch() + 1
    }

    /// Total pixel size `(width, height)` of a grid with the given cell counts.
    pub fn canvas_extent(&self, width: u32, height: u32) -> (u32, u32) {
        (width * self.pitch() + 1, height * self.pitch() + 1)
    }

    /// Like [`canvas_extent`](Self::canvas_extent), but `None` when a pixel
    /// coordinate of the grid would not fit in a `u32`. Every centre and line
    /// offset is below the extent, so a `Some` here makes the other methods
    /// safe for any in-bounds cell.
    pub fn checked_canvas_extent(&self, width: u32, height: u32) -> Option<(u32, u32)> {
        let pitch = self.cell_size.checked_add(1)?;
        let axis = |cells: u32| cells.checked_mul(pitch)?.checked_add(1);
        Some((axis(width)?, axis(height)?))
    }

    /// Maps a pixel position to the (row, col) under it, clamped into the grid.
    ///
    /// Negative and non-finite coordinates clamp to the first row/column.
    pub fn cell_at(&self, pixel_x: f32, pixel_y: f32, width: u32, height: u32) -> (u32, u32) {
        let pitch = self.pitch() as f32;
        let axis = |pixel: f32, cells: u32| -> u32 {
            let slot = (pixel / pitch).floor();
            if slot.is_finite() && slot > 0.0 {
                (slot as u32).min(cells - 1)
            } else {
                0
            }
        };
        (axis(pixel_y, height), axis(pixel_x, width))
    }
}

/// Read-only view over the engine's live-cell positions.
///
/// Holds interleaved `x, y` pixel coordinates, one pair per alive cell,
/// ordered row-major by cell index. The view borrows the engine's reused
/// buffer, so it cannot outlive the next regeneration.
#[derive(Clone, Copy, Debug)]
pub struct LiveCells<'a> {
    positions: &'a [u32],
}

impl<'a> LiveCells<'a> {
    pub(crate) fn new(positions: &'a [u32]) -> Self {
        debug_assert!(positions.len() % 2 == 0);
        Self { positions }
    }

    /// The flat `x0, y0, x1, y1, ...` sequence.
    pub fn as_slice(&self) -> &'a [u32] {
        self.positions
    }

    /// Number of alive cells (half the flat length).
    pub fn len(&self) -> usize {
        self.positions.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + 'a {
        self.positions.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }
}
