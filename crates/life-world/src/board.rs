//! 2D board of live/dead cells.

use life_core::{BoardConfig, BoundaryPolicy, CellCoordinate, ChangeList, Error, Result};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use std::fmt;
use tracing::debug;

/// A fixed-size grid of cells stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    boundary: BoundaryPolicy,
    cells: Vec<bool>,
}

impl Board {
    /// Create an all-dead board
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let (width, height) = (width as usize, height as usize);
        Ok(Self {
            width,
            height,
            boundary: BoundaryPolicy::default(),
            cells: vec![false; width * height],
        })
    }

    /// Create a board, seeding every cell with a fair coin flip when `randomize` is set
    pub fn create<R: Rng + ?Sized>(
        width: i32,
        height: i32,
        randomize: bool,
        rng: &mut R,
    ) -> Result<Self> {
        let mut board = Self::new(width, height)?;

        if randomize {
            for cell in &mut board.cells {
                *cell = rng.gen_bool(0.5);
            }
        }

        Ok(board)
    }

    /// Create a board from configuration
    pub fn from_config(config: &BoardConfig, rng: &mut ChaCha8Rng) -> Result<Self> {
        let board = Self::create(config.width, config.height, config.randomize, rng)?
            .with_boundary(config.boundary);

        debug!(
            width = board.width,
            height = board.height,
            boundary = ?board.boundary,
            population = board.population(),
            "Board created"
        );

        Ok(board)
    }

    pub fn with_boundary(mut self, boundary: BoundaryPolicy) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn boundary(&self) -> BoundaryPolicy {
        self.boundary
    }

    pub fn contains(&self, column: usize, row: usize) -> bool {
        column < self.width && row < self.height
    }

    /// Get cell state
    pub fn get(&self, column: usize, row: usize) -> Result<bool> {
        let index = self.index(column, row)?;
        Ok(self.cells[index])
    }

    /// Set cell state
    pub fn set(&mut self, column: usize, row: usize, alive: bool) -> Result<()> {
        let index = self.index(column, row)?;
        self.cells[index] = alive;
        Ok(())
    }

    /// Invert a cell, returning its new state
    pub fn toggle(&mut self, column: usize, row: usize) -> Result<bool> {
        let index = self.index(column, row)?;
        self.cells[index] = !self.cells[index];
        Ok(self.cells[index])
    }

    /// Count live cells among the 8 neighbors, honouring the boundary policy
    pub fn count_live_neighbors(&self, column: usize, row: usize) -> Result<u8> {
        self.index(column, row)?;

        let mut count = 0;
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }

                let neighbor = (
                    self.boundary.resolve(column, dx, self.width),
                    self.boundary.resolve(row, dy, self.height),
                );
                if let (Some(c), Some(r)) = neighbor {
                    if self.cells[r * self.width + c] {
                        count += 1;
                    }
                }
            }
        }

        Ok(count)
    }

    /// Toggle every listed cell.
    ///
    /// All coordinates are checked before any cell changes.
    pub fn apply_changes(&mut self, changes: &ChangeList) -> Result<()> {
        let indices = changes
            .iter()
            .map(|cell| self.index(cell.column, cell.row))
            .collect::<Result<Vec<_>>>()?;

        for index in indices {
            self.cells[index] = !self.cells[index];
        }
        Ok(())
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    pub fn coordinate_of(&self, index: usize) -> CellCoordinate {
        CellCoordinate::new(index % self.width, index / self.width)
    }

    /// Iterator over all cells with coordinates, row-major
    pub fn iter(&self) -> impl Iterator<Item = (CellCoordinate, bool)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &alive)| (self.coordinate_of(i), alive))
    }

    /// Iterator over the coordinates of live cells, row-major
    pub fn live_cells(&self) -> impl Iterator<Item = CellCoordinate> + '_ {
        self.iter().filter(|(_, alive)| *alive).map(|(cell, _)| cell)
    }

    fn index(&self, column: usize, row: usize) -> Result<usize> {
        if !self.contains(column, row) {
            return Err(Error::OutOfBounds {
                column,
                row,
                width: self.width,
                height: self.height,
            });
        }
        Ok(row * self.width + column)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            for &alive in row {
                write!(f, "{}", if alive { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
