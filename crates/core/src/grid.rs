//! Grid module - the rows x columns matrix of tile ranks
//!
//! Uses a flat fixed-size array sized for the largest variant, so every grid lives on
//! the stack and no move or spawn allocates.
//! Coordinates: (row, col) with row 0 at the top and col 0 at the left.

use arrayvec::ArrayVec;

use crate::types::{Direction, MAX_CELLS, MAX_SIDE};

/// Flat indices of one line, ordered from the edge tiles slide toward.
pub type LineIndices = ArrayVec<usize, MAX_SIDE>;

/// The game grid. Cell value 0 is empty, any other value is a rank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    columns: usize,
    /// Row-major ranks (row * columns + col); only the first rows*columns are used
    cells: [u8; MAX_CELLS],
}

impl Grid {
    /// Create an empty grid.
    ///
    /// # Panics
    ///
    /// Panics if either side is zero or larger than [`MAX_SIDE`].
    pub fn new(rows: usize, columns: usize) -> Self {
        assert!(
            (1..=MAX_SIDE).contains(&rows) && (1..=MAX_SIDE).contains(&columns),
            "grid {}x{} outside 1..={}",
            rows,
            columns,
            MAX_SIDE
        );
        Self {
            rows,
            columns,
            cells: [0; MAX_CELLS],
        }
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.columns {
            return None;
        }
        Some(row * self.columns + col)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Rank at (row, col), `None` if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set rank at (row, col). Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, rank: u8) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = rank;
                true
            }
            None => false,
        }
    }

    /// Row-major view of the live cells
    pub fn cells(&self) -> &[u8] {
        &self.cells[..self.rows * self.columns]
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [u8] {
        let len = self.rows * self.columns;
        &mut self.cells[..len]
    }

    /// Row `row` as a slice
    pub fn row(&self, row: usize) -> &[u8] {
        let start = row * self.columns;
        &self.cells[start..start + self.columns]
    }

    /// Coordinates of every empty cell, in row-major order
    pub fn empty_cells(&self) -> ArrayVec<(usize, usize), MAX_CELLS> {
        let mut out = ArrayVec::new();
        for (idx, &rank) in self.cells().iter().enumerate() {
            if rank == 0 {
                out.push((idx / self.columns, idx % self.columns));
            }
        }
        out
    }

    /// Number of non-empty cells
    pub fn tile_count(&self) -> usize {
        self.cells().iter().filter(|&&rank| rank != 0).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells().iter().all(|&rank| rank != 0)
    }

    /// True if any two horizontally or vertically adjacent cells hold the same rank.
    pub fn has_adjacent_pair(&self) -> bool {
        for row in 0..self.rows {
            for col in 0..self.columns {
                let here = self.cells[row * self.columns + col];
                if col + 1 < self.columns && here == self.cells[row * self.columns + col + 1] {
                    return true;
                }
                if row + 1 < self.rows && here == self.cells[(row + 1) * self.columns + col] {
                    return true;
                }
            }
        }
        false
    }

    /// Position of the first cell (row-major) holding `rank`
    pub fn find(&self, rank: u8) -> Option<(usize, usize)> {
        self.cells()
            .iter()
            .position(|&r| r == rank)
            .map(|idx| (idx / self.columns, idx % self.columns))
    }

    /// Highest rank on the grid (0 when empty)
    pub fn max_rank(&self) -> u8 {
        self.cells().iter().copied().max().unwrap_or(0)
    }

    /// Number of independent lines a move in `dir` processes
    pub fn line_count(&self, dir: Direction) -> usize {
        if dir.is_horizontal() {
            self.rows
        } else {
            self.columns
        }
    }

    /// Flat indices of line `line`, starting at the edge tiles slide toward.
    ///
    /// Left/Right walk row `line`, Up/Down walk column `line`.
    pub fn line_indices(&self, dir: Direction, line: usize) -> LineIndices {
        let mut out = LineIndices::new();
        match dir {
            Direction::Left => {
                for col in 0..self.columns {
                    out.push(line * self.columns + col);
                }
            }
            Direction::Right => {
                for col in (0..self.columns).rev() {
                    out.push(line * self.columns + col);
                }
            }
            Direction::Up => {
                for row in 0..self.rows {
                    out.push(row * self.columns + line);
                }
            }
            Direction::Down => {
                for row in (0..self.rows).rev() {
                    out.push(row * self.columns + line);
                }
            }
        }
        out
    }

    /// Build a grid from explicit rows, for tests and tools.
    ///
    /// Returns `None` if the shape is ragged or outside the supported sizes.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.as_ref().len();
        if !(1..=MAX_SIDE).contains(&height) || !(1..=MAX_SIDE).contains(&width) {
            return None;
        }
        if rows.iter().any(|r| r.as_ref().len() != width) {
            return None;
        }
        let mut grid = Grid::new(height, width);
        for (row, values) in rows.iter().enumerate() {
            for (col, &rank) in values.as_ref().iter().enumerate() {
                grid.set(row, col, rank);
            }
        }
        Some(grid)
    }

    /// Convert to nested vectors for testing/display
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.rows).map(|row| self.row(row).to_vec()).collect()
    }
}
