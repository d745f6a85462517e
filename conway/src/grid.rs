// grid.rs - Bit-packed toroidal grid storage

use fixedbitset::FixedBitSet;

use crate::error::{EngineError, Result};

/// Cell state for a `width` x `height` toroidal grid, one bit per cell.
///
/// Cells are stored row-major with no padding between rows. The bitset's
/// `u32` blocks, read as little-endian bytes, put cell `idx` in byte `idx / 8`
/// under mask `1 << (idx % 8)`. Bits past the last cell are always zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridBuffer {
    width: u32,
    height: u32,
    bits: FixedBitSet,
}

impl GridBuffer {
    /// Allocates an all-dead grid.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            bits: FixedBitSet::with_capacity(width as usize * height as usize),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.len() == 0
    }

    #[inline]
    pub fn index(&self, row: u32, col: u32) -> usize {
        row as usize * self.width as usize + col as usize
    }

    /// Bounds-checked index of (row, col).
    pub fn checked_index(&self, row: u32, col: u32) -> Result<usize> {
        if row >= self.height || col >= self.width {
            return Err(EngineError::OutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.index(row, col))
    }

    #[inline]
    pub fn get(&self, idx: usize) -> bool {
        self.bits.contains(idx)
    }

    #[inline]
    pub fn set(&mut self, idx: usize, alive: bool) {
        self.bits.set(idx, alive);
    }

    #[inline]
    pub fn toggle(&mut self, idx: usize) {
        self.bits.toggle(idx);
    }

    pub fn clear(&mut self) {
        self.bits.clear();
    }

    pub fn count_alive(&self) -> usize {
        self.bits.count_ones(..)
    }

    /// The packed cell bits as bytes, in the layout documented on the type.
    /// Padded to a whole number of `u32` blocks.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.bits.as_slice())
    }

    /// Indices of alive cells in ascending (row-major) order.
    pub fn alive_indices(&self) -> fixedbitset::Ones<'_> {
        self.bits.ones()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_dimensions() {
        assert_eq!(
            GridBuffer::new(0, 4),
            Err(EngineError::InvalidDimension { width: 0, height: 4 })
        );
        assert!(GridBuffer::new(4, 0).is_err());
    }

    #[test]
    #[cfg(target_endian = "little")]
    fn bit_addressing_matches_byte_layout() {
        let mut grid = GridBuffer::new(5, 3).unwrap();
        assert_eq!(grid.len(), 15);
        assert_eq!(grid.as_bytes().len(), 4); // one u32 block

        let idx = grid.index(1, 4); // 9
        grid.set(idx, true);
        assert_eq!(grid.as_bytes(), &[0, 0b0000_0010, 0, 0]);
        assert!(grid.get(9));

        grid.toggle(idx);
        assert!(!grid.get(9));
        assert_eq!(grid.count_alive(), 0);
    }

    #[test]
    fn alive_indices_are_row_major() {
        let mut grid = GridBuffer::new(4, 4).unwrap();
        for idx in [13, 0, 7, 8] {
            grid.set(idx, true);
        }
        let found: Vec<usize> = grid.alive_indices().collect();
        assert_eq!(found, vec![0, 7, 8, 13]);
    }

    #[test]
    fn clear_kills_every_cell() {
        let mut grid = GridBuffer::new(40, 3).unwrap();
        for idx in [0, 33, 64, 119] {
            grid.toggle(idx);
        }
        assert_eq!(grid.count_alive(), 4);
        grid.clear();
        assert_eq!(grid.count_alive(), 0);
        assert_eq!(grid.len(), 120);
    }

    #[test]
    fn checked_index_reports_bounds() {
        let grid = GridBuffer::new(3, 2).unwrap();
        assert_eq!(grid.checked_index(1, 2), Ok(5));
        assert_eq!(
            grid.checked_index(2, 0),
            Err(EngineError::OutOfBounds { row: 2, col: 0, width: 3, height: 2 })
        );
    }
}
