use std::fmt;

use rand::Rng;

use super::{Cell, LifeError, Pattern, Shape};

/// The 8 Moore-neighborhood offsets as (row, col)
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// LifeGrid owns a fixed-size square generation of cells.
/// Advancing builds the successor from a frozen snapshot and swaps it in,
/// so no query ever observes a half-updated generation.
/// Coordinates are (row, col); anything outside [0, size) reads as dead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LifeGrid {
    size: usize,
    cells: Vec<Cell>,
}

impl LifeGrid {
    /// Create a size×size grid with all cells dead
    pub fn new(size: i32) -> Result<Self, LifeError> {
        let side = usize::try_from(size)
            .ok()
            .filter(|&side| side > 0)
            .ok_or(LifeError::InvalidSize { size })?;

        let count = side
            .checked_mul(side)
            .ok_or(LifeError::GridTooLarge { size })?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(count)
            .map_err(|_| LifeError::GridTooLarge { size })?;
        cells.resize(count, Cell::Dead);

        Ok(Self { size: side, cells })
    }

    /// Side length of the grid
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Convert 2D coordinates to a 1D index, None when off-grid
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        let row = usize::try_from(row).ok().filter(|&r| r < self.size)?;
        let col = usize::try_from(col).ok().filter(|&c| c < self.size)?;
        Some(row * self.size + col)
    }

    /// Get cell at position (None when off-grid)
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Raw cell value: 0 for dead or off-grid, the age otherwise
    pub fn value(&self, row: i32, col: i32) -> u8 {
        self.get(row, col).map_or(0, Cell::value)
    }

    pub fn is_alive(&self, row: i32, col: i32) -> bool {
        self.value(row, col) > 0
    }

    /// Display ramp position of a cell, in [0, 1]
    pub fn age_ramp(&self, row: i32, col: i32) -> f32 {
        self.get(row, col).map_or(0.0, Cell::age_ramp)
    }

    /// Write a cell value (clamped to the age cap).
    /// Off-grid writes are rejected and leave the grid untouched.
    pub fn set(&mut self, row: i32, col: i32, value: u8) -> Result<(), LifeError> {
        self.set_cell(row, col, Cell::from_value(value))
    }

    pub fn set_cell(&mut self, row: i32, col: i32, cell: Cell) -> Result<(), LifeError> {
        let idx = self.index(row, col).ok_or(LifeError::OutOfBounds {
            row,
            col,
            size: self.size,
        })?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Count live Moore neighbors; off-grid neighbors are dead
    pub fn neighbor_count(&self, row: i32, col: i32) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dr, dc)| self.is_alive(row.saturating_add(dr), col.saturating_add(dc)))
            .count() as u8
    }

    /// Pure evolution - returns the successor generation
    pub fn next_generation(&self) -> Self {
        let cells = self
            .iter_cells()
            .map(|(row, col, cell)| cell.evolve(self.neighbor_count(row as i32, col as i32)))
            .collect();

        Self {
            size: self.size,
            cells,
        }
    }

    /// Replace the current generation with its successor
    pub fn advance(&mut self) {
        *self = self.next_generation();
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Reset the grid and lay out a seed pattern.
    /// Fixed offsets are placed relative to the center cell (size/2, size/2);
    /// offsets that land off-grid are dropped. Random patterns draw one
    /// sample per cell from `rng`. Returns the resulting population.
    pub fn seed<R: Rng + ?Sized>(&mut self, pattern: &Pattern, rng: &mut R) -> Result<usize, LifeError> {
        if let Shape::Random { density } = pattern.shape {
            if !(0.0..=1.0).contains(&density) {
                return Err(LifeError::InvalidDensity(density));
            }
        }

        self.clear();

        match pattern.shape {
            Shape::Offsets(offsets) => {
                let center = (self.size / 2) as i32;
                for &(dr, dc) in offsets {
                    if let Some(idx) = self.index(center + dr, center + dc) {
                        self.cells[idx] = Cell::NEWBORN;
                    }
                }
            }
            Shape::Random { density } => {
                self.cells.iter_mut().for_each(|cell| {
                    if rng.random_bool(density) {
                        *cell = Cell::NEWBORN;
                    }
                });
            }
        }

        Ok(self.population())
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their (row, col) positions, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.size, idx % self.size, cell))
    }
}

/// One text row per grid row: `.` for dead, the age digit for live cells
impl fmt::Display for LifeGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            let line: String = row
                .iter()
                .map(|cell| match cell.value() {
                    0 => '.',
                    age => char::from(b'0' + age),
                })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
