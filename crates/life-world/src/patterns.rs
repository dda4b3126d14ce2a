//! Named seed patterns that can be stamped onto a board.

use crate::board::Board;
use life_core::{CellCoordinate, Error, Result};

/// Live cells as (column, row) offsets from the pattern's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const BLOCK: Pattern = Pattern {
    name: "block",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
};

pub const BLINKER: Pattern = Pattern {
    name: "blinker",
    cells: &[(0, 0), (1, 0), (2, 0)],
};

pub const GLIDER: Pattern = Pattern {
    name: "glider",
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
};

pub const TOAD: Pattern = Pattern {
    name: "toad",
    cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
};

pub const BEACON: Pattern = Pattern {
    name: "beacon",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
};

pub const R_PENTOMINO: Pattern = Pattern {
    name: "r-pentomino",
    cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
};

pub const PATTERNS: &[Pattern] = &[BLOCK, BLINKER, GLIDER, TOAD, BEACON, R_PENTOMINO];

/// Look up a pattern by name, ignoring case
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

impl Pattern {
    /// Bounding box as (width, height)
    pub fn extent(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(w, h), &(c, r)| (w.max(c + 1), h.max(r + 1)))
    }

    /// Set the pattern's cells alive with its top-left corner at `origin`.
    ///
    /// Fails without touching the board if any cell falls outside it.
    pub fn stamp(&self, board: &mut Board, origin: CellCoordinate) -> Result<()> {
        let cells: Vec<_> = self
            .cells
            .iter()
            .map(|&(c, r)| (origin.column + c, origin.row + r))
            .collect();

        if let Some(&(column, row)) = cells.iter().find(|&&(c, r)| !board.contains(c, r)) {
            return Err(Error::OutOfBounds {
                column,
                row,
                width: board.width(),
                height: board.height(),
            });
        }

        for (column, row) in cells {
            board.set(column, row, true)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Simulator;

    #[test]
    fn test_find_pattern() {
        assert_eq!(find("Glider"), Some(&GLIDER));
        assert_eq!(find("R-Pentomino"), Some(&R_PENTOMINO));
        assert!(find("spaceship").is_none());
    }

    #[test]
    fn test_extent() {
        assert_eq!(BLOCK.extent(), (2, 2));
        assert_eq!(BLINKER.extent(), (3, 1));
        assert_eq!(BEACON.extent(), (4, 4));
    }

    #[test]
    fn test_stamp() {
        let mut board = Board::new(6, 6).unwrap();
        BLINKER.stamp(&mut board, CellCoordinate::new(2, 3)).unwrap();
        assert!(board.get(2, 3).unwrap());
        assert!(board.get(3, 3).unwrap());
        assert!(board.get(4, 3).unwrap());
        assert_eq!(board.population(), 3);
    }

    #[test]
    fn test_stamp_out_of_bounds_leaves_board_untouched() {
        let mut board = Board::new(6, 6).unwrap();
        let result = BLINKER.stamp(&mut board, CellCoordinate::new(4, 0));
        assert!(matches!(result, Err(Error::OutOfBounds { column: 6, row: 0, .. })));
        assert_eq!(board.population(), 0);
    }

    #[test]
    fn test_period_two_oscillators() {
        for pattern in [BLINKER, TOAD, BEACON] {
            let mut board = Board::new(12, 12).unwrap();
            pattern.stamp(&mut board, CellCoordinate::new(4, 4)).unwrap();
            let start = board.clone();

            let mut sim = Simulator::new();
            sim.step(&mut board).unwrap();
            assert_ne!(board, start, "{} should change", pattern.name);
            sim.step(&mut board).unwrap();
            assert_eq!(board, start, "{} should have period 2", pattern.name);
        }
    }
}
