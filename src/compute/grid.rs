//! Dense binary grid for Game of Life cells.

use std::fmt;

/// Dead cell value.
pub const DEAD: u8 = 0;
/// Live cell value.
pub const ALIVE: u8 = 1;

/// Dense `width x height` grid of binary cells.
///
/// Cells are stored row-major: `index = y * width + x`. Every stored value is
/// exactly [`DEAD`] or [`ALIVE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Create an all-dead grid.
    ///
    /// # Panics
    /// Panics if either dimension is zero or `width * height` overflows.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be non-zero");
        let Some(len) = width.checked_mul(height) else {
            panic!("grid {width}x{height} has too many cells");
        };
        Self {
            width,
            height,
            cells: vec![DEAD; len],
        }
    }

    /// Build a grid from raw row-major values.
    ///
    /// Any positive value becomes [`ALIVE`], everything else [`DEAD`].
    pub fn from_cells<T>(width: usize, height: usize, cells: &[T]) -> Result<Self, GridError>
    where
        T: Copy + Into<i64>,
    {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyDimensions { width, height });
        }
        let expected = width
            .checked_mul(height)
            .ok_or(GridError::TooLarge { width, height })?;
        if cells.len() != expected {
            return Err(GridError::DimensionMismatch {
                width,
                height,
                expected,
                actual: cells.len(),
            });
        }

        let cells = cells
            .iter()
            .map(|&v| if v.into() > 0 { ALIVE } else { DEAD })
            .collect();

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells (width * height).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Row-major cell values.
    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Convert (x, y) coordinates to flat index.
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "({x}, {y}) outside {}x{} grid",
            self.width,
            self.height
        );
        y * self.width + x
    }

    /// Cell state at (x, y). Coordinates must be in range.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.cells[self.index(x, y)]
    }

    #[inline]
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.get(x, y) == ALIVE
    }

    /// Set a cell. Only used while seeding.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        let idx = self.index(x, y);
        self.cells[idx] = alive as u8;
    }

    /// Set a cell by flat index. Only used while seeding.
    #[inline]
    pub fn set_index(&mut self, index: usize, alive: bool) {
        self.cells[index] = alive as u8;
    }

    /// Set every cell in row `y` alive.
    pub fn fill_row(&mut self, y: usize) {
        let start = self.index(0, y);
        self.cells[start..start + self.width].fill(ALIVE);
    }

    /// Set every cell in column `x` alive.
    pub fn fill_column(&mut self, x: usize) {
        debug_assert!(x < self.width);
        for cell in self.cells.iter_mut().skip(x).step_by(self.width) {
            *cell = ALIVE;
        }
    }

    /// Number of live cells.
    pub fn count_lives(&self) -> usize {
        self.cells.iter().map(|&c| c as usize).sum()
    }

    /// Check whether two grids have identical dimensions.
    #[inline]
    pub fn same_shape(&self, other: &Grid) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Iterate over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks_exact(self.width)
    }

    /// Mutable access for the engine's write buffer.
    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [u8] {
        &mut self.cells
    }

    /// Render as rows of `0`/`1` characters, one line per row.
    pub fn dump(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.rows() {
            out.extend(row.iter().map(|&c| if c == ALIVE { '1' } else { '0' }));
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dump())
    }
}

/// Grid construction errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("Grid dimensions must be non-zero (width={width}, height={height})")]
    EmptyDimensions { width: usize, height: usize },
    #[error("Grid {width}x{height} has more cells than fit in memory")]
    TooLarge { width: usize, height: usize },
    #[error("Grid {width}x{height} needs {expected} cells, got {actual}")]
    DimensionMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },
}
