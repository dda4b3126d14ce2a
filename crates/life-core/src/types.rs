//! Core type definitions for the engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell reference as (column, row)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoordinate {
    pub column: usize,
    pub row: usize,
}

impl CellCoordinate {
    pub fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    /// Offset by a signed delta, `None` if either axis would go negative
    pub fn offset(&self, dx: isize, dy: isize) -> Option<Self> {
        Some(Self {
            column: self.column.checked_add_signed(dx)?,
            row: self.row.checked_add_signed(dy)?,
        })
    }
}

impl fmt::Display for CellCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

impl From<(usize, usize)> for CellCoordinate {
    fn from((column, row): (usize, usize)) -> Self {
        Self::new(column, row)
    }
}

/// Cells whose state flipped during one generation, in row-major scan order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeList {
    cells: Vec<CellCoordinate>,
}

impl ChangeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cell: CellCoordinate) {
        self.cells.push(cell);
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: &CellCoordinate) -> bool {
        self.cells.contains(cell)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CellCoordinate> {
        self.cells.iter()
    }

    pub fn as_slice(&self) -> &[CellCoordinate] {
        &self.cells
    }
}

impl FromIterator<CellCoordinate> for ChangeList {
    fn from_iter<I: IntoIterator<Item = CellCoordinate>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ChangeList {
    type Item = CellCoordinate;
    type IntoIter = std::vec::IntoIter<CellCoordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a> IntoIterator for &'a ChangeList {
    type Item = &'a CellCoordinate;
    type IntoIter = std::slice::Iter<'a, CellCoordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// How neighbor lookups behave past the board edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryPolicy {
    /// The +1 neighbor on the bottom or right edge reads index 0 of that axis.
    /// The -1 neighbor on the top or left edge is dead.
    #[default]
    EdgeWrap,
    /// Every edge wraps to the opposite side.
    Toroidal,
    /// Every neighbor past an edge is dead.
    Dead,
}

impl BoundaryPolicy {
    /// Resolve `index + delta` on an axis of length `len`.
    ///
    /// `delta` is one of -1, 0, 1 and `index` is already in `[0, len)`.
    /// Returns `None` when the neighbor counts as dead.
    pub fn resolve(&self, index: usize, delta: isize, len: usize) -> Option<usize> {
        match delta {
            0 => Some(index),
            -1 => match (index, self) {
                (0, BoundaryPolicy::Toroidal) => Some(len - 1),
                (0, _) => None,
                _ => Some(index - 1),
            },
            1 => match (index + 1 == len, self) {
                (true, BoundaryPolicy::EdgeWrap | BoundaryPolicy::Toroidal) => Some(0),
                (true, BoundaryPolicy::Dead) => None,
                (false, _) => Some(index + 1),
            },
            _ => None,
        }
    }
}

/// Whether the driving loop advances generations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    Running,
    #[default]
    Paused,
}

impl RunState {
    pub fn is_running(&self) -> bool {
        matches!(self, RunState::Running)
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunState::Running => write!(f, "running"),
            RunState::Paused => write!(f, "paused"),
        }
    }
}
