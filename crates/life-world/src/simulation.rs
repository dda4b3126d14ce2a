//! Generation stepping for a board.

use crate::board::Board;
use life_core::{CellCoordinate, ChangeList, Result};
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info, instrument, trace};

/// Whether a cell flips this generation under B3/S23
pub fn flips(alive: bool, live_neighbors: u8) -> bool {
    match (alive, live_neighbors) {
        (true, 2) | (true, 3) => false, // Survival
        (true, _) => true,              // Under- or overpopulation
        (false, 3) => true,             // Birth
        (false, _) => false,
    }
}

/// Advances a board one generation at a time and counts generations
#[derive(Debug, Default)]
pub struct Simulator {
    generation: u64,
}

impl Simulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generations advanced so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Compute the flips for one generation without touching the board
    pub fn scan(board: &Board) -> Result<ChangeList> {
        let mut changes = ChangeList::new();

        for row in 0..board.height() {
            for column in 0..board.width() {
                let n = board.count_live_neighbors(column, row)?;
                if flips(board.get(column, row)?, n) {
                    changes.push(CellCoordinate::new(column, row));
                }
            }
        }

        Ok(changes)
    }

    /// Advance the board one generation.
    ///
    /// Every decision is read from the pre-step board; flips are applied
    /// only after the whole scan completes.
    #[instrument(skip_all, fields(generation = self.generation))]
    pub fn step(&mut self, board: &mut Board) -> Result<ChangeList> {
        let started = Instant::now();

        let changes = Self::scan(board)?;
        board.apply_changes(&changes)?;
        self.generation += 1;

        trace!(
            changes = changes.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "Generation advanced"
        );

        Ok(changes)
    }

    /// Step up to `max_steps` generations, stopping early once the board stabilizes
    #[instrument(skip(self, board))]
    pub fn run(&mut self, board: &mut Board, max_steps: u64) -> Result<RunSummary> {
        info!("Running up to {} generations", max_steps);

        let start_generation = self.generation;
        let mut total_changes = 0;
        let mut stabilized = false;

        for _ in 0..max_steps {
            let changes = self.step(board)?;
            total_changes += changes.len() as u64;

            if changes.is_empty() {
                stabilized = true;
                break;
            }

            if self.generation % 100 == 0 {
                debug!(
                    "Generation {}: {} alive, {} flipped",
                    self.generation,
                    board.population(),
                    changes.len()
                );
            }
        }

        let summary = RunSummary {
            generations: self.generation - start_generation,
            total_changes,
            stabilized,
            final_population: board.population(),
        };

        info!(
            generations = summary.generations,
            total_changes = summary.total_changes,
            stabilized = summary.stabilized,
            final_population = summary.final_population,
            "Run complete"
        );

        Ok(summary)
    }
}

/// Outcome of `Simulator::run`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Generations stepped, including a final empty one when stabilized
    pub generations: u64,
    pub total_changes: u64,
    pub stabilized: bool,
    pub final_population: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns;
    use life_core::BoundaryPolicy;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn board_with(width: i32, height: i32, live: &[(usize, usize)]) -> Board {
        let mut board = Board::new(width, height).unwrap();
        for &(column, row) in live {
            board.set(column, row, true).unwrap();
        }
        board
    }

    fn live(board: &Board) -> Vec<(usize, usize)> {
        board.live_cells().map(|c| (c.column, c.row)).collect()
    }

    fn policy_strategy() -> impl Strategy<Value = BoundaryPolicy> {
        prop_oneof![
            Just(BoundaryPolicy::EdgeWrap),
            Just(BoundaryPolicy::Toroidal),
            Just(BoundaryPolicy::Dead),
        ]
    }

    prop_compose! {
        fn random_board()(
            width in 1i32..16,
            height in 1i32..16,
            seed in any::<u64>(),
            policy in policy_strategy(),
        ) -> Board {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            Board::create(width, height, true, &mut rng).unwrap().with_boundary(policy)
        }
    }

    #[test]
    fn test_rule_table() {
        for n in 0..=8u8 {
            assert_eq!(flips(true, n), !(n == 2 || n == 3), "alive with {}", n);
            assert_eq!(flips(false, n), n == 3, "dead with {}", n);
        }
    }

    #[test]
    fn test_all_dead_board_is_stable() {
        let mut board = Board::new(12, 7).unwrap();
        let mut sim = Simulator::new();

        let changes = sim.step(&mut board).unwrap();
        assert!(changes.is_empty());
        assert_eq!(board, Board::new(12, 7).unwrap());
        assert_eq!(sim.generation(), 1);
    }

    #[test]
    fn test_block_is_still_life() {
        let mut board = Board::new(10, 10).unwrap();
        patterns::BLOCK.stamp(&mut board, CellCoordinate::new(4, 4)).unwrap();
        let before = board.clone();

        let mut sim = Simulator::new();
        for _ in 0..20 {
            assert!(sim.step(&mut board).unwrap().is_empty());
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut board = board_with(9, 9, &[(3, 4), (4, 4), (5, 4)]);
        let mut sim = Simulator::new();

        let changes = sim.step(&mut board).unwrap();
        assert_eq!(live(&board), vec![(4, 3), (4, 4), (4, 5)]);
        assert_eq!(
            changes.as_slice(),
            &[
                CellCoordinate::new(4, 3),
                CellCoordinate::new(3, 4),
                CellCoordinate::new(5, 4),
                CellCoordinate::new(4, 5),
            ]
        );

        sim.step(&mut board).unwrap();
        assert_eq!(live(&board), vec![(3, 4), (4, 4), (5, 4)]);
    }

    #[test]
    fn test_glider_translates() {
        let mut board = Board::new(12, 12).unwrap().with_boundary(BoundaryPolicy::Dead);
        patterns::GLIDER.stamp(&mut board, CellCoordinate::new(1, 1)).unwrap();
        let mut expected = Board::new(12, 12).unwrap().with_boundary(BoundaryPolicy::Dead);
        patterns::GLIDER.stamp(&mut expected, CellCoordinate::new(2, 2)).unwrap();

        let mut sim = Simulator::new();
        for _ in 0..4 {
            sim.step(&mut board).unwrap();
        }
        assert_eq!(board, expected);
    }

    fn step_once(cells: &[(usize, usize)], policy: BoundaryPolicy) -> Vec<(usize, usize)> {
        let mut board = board_with(5, 5, cells).with_boundary(policy);
        Simulator::new().step(&mut board).unwrap();
        live(&board)
    }

    #[test]
    fn test_blinker_on_left_edge_by_policy() {
        let cells = [(0, 1), (0, 2), (0, 3)];

        // The last column sees column 0 through the right-edge wrap
        assert_eq!(step_once(&cells, BoundaryPolicy::EdgeWrap), vec![(0, 2), (1, 2), (4, 2)]);
        assert_eq!(step_once(&cells, BoundaryPolicy::Toroidal), vec![(0, 2), (1, 2), (4, 2)]);
        assert_eq!(step_once(&cells, BoundaryPolicy::Dead), vec![(0, 2), (1, 2)]);
    }

    #[test]
    fn test_blinker_on_right_edge_by_policy() {
        let cells = [(4, 1), (4, 2), (4, 3)];

        // Column 0 never looks left under edge-wrap, so nothing is born there
        assert_eq!(step_once(&cells, BoundaryPolicy::EdgeWrap), vec![(3, 2), (4, 2)]);
        assert_eq!(step_once(&cells, BoundaryPolicy::Toroidal), vec![(0, 2), (3, 2), (4, 2)]);
        assert_eq!(step_once(&cells, BoundaryPolicy::Dead), vec![(3, 2), (4, 2)]);
    }

    #[test]
    fn test_blinker_on_top_edge_by_policy() {
        let cells = [(1, 0), (2, 0), (3, 0)];

        // The bottom row sees row 0 through the bottom-edge wrap
        assert_eq!(step_once(&cells, BoundaryPolicy::EdgeWrap), vec![(2, 0), (2, 1), (2, 4)]);
        assert_eq!(step_once(&cells, BoundaryPolicy::Dead), vec![(2, 0), (2, 1)]);
    }

    #[test]
    fn test_run_stops_when_stable() {
        let mut board = Board::new(10, 10).unwrap();
        patterns::BLOCK.stamp(&mut board, CellCoordinate::new(3, 3)).unwrap();
        // A lone cell dies on the first generation
        board.set(8, 8, true).unwrap();

        let mut sim = Simulator::new();
        let summary = sim.run(&mut board, 600).unwrap();
        assert_eq!(
            summary,
            RunSummary {
                generations: 2,
                total_changes: 1,
                stabilized: true,
                final_population: 4,
            }
        );
        assert_eq!(sim.generation(), 2);
    }

    #[test]
    fn test_run_respects_limit() {
        let mut board = board_with(9, 9, &[(3, 4), (4, 4), (5, 4)]);
        let mut sim = Simulator::new();
        let summary = sim.run(&mut board, 5).unwrap();
        assert_eq!(summary.generations, 5);
        assert_eq!(summary.total_changes, 20);
        assert!(!summary.stabilized);
    }

    proptest! {
        #[test]
        fn prop_changes_replayed_on_pre_step_board_give_post_step_board(board in random_board()) {
            let mut post = board.clone();
            let changes = Simulator::new().step(&mut post).unwrap();

            let mut replayed = board.clone();
            replayed.apply_changes(&changes).unwrap();
            prop_assert_eq!(replayed, post);
        }

        #[test]
        fn prop_step_matches_rule_on_snapshot(board in random_board()) {
            let mut post = board.clone();
            Simulator::new().step(&mut post).unwrap();

            for (cell, alive) in board.iter() {
                let n = board.count_live_neighbors(cell.column, cell.row).unwrap();
                let expected = matches!((alive, n), (true, 2) | (true, 3) | (false, 3));
                prop_assert_eq!(post.get(cell.column, cell.row).unwrap(), expected);
            }
        }

        #[test]
        fn prop_survivors_and_births(board in random_board()) {
            let mut post = board.clone();
            let changes = Simulator::new().step(&mut post).unwrap();

            for (cell, alive) in board.iter() {
                let n = board.count_live_neighbors(cell.column, cell.row).unwrap();
                if alive && (n == 2 || n == 3) {
                    prop_assert!(!changes.contains(&cell));
                }
                if !alive && n == 3 {
                    prop_assert!(changes.contains(&cell));
                }
            }
        }

        #[test]
        fn prop_changes_are_row_major_and_unique(board in random_board()) {
            let mut post = board.clone();
            let changes = Simulator::new().step(&mut post).unwrap();
            let cells = changes.as_slice();
            prop_assert!(cells.windows(2).all(|w| (w[0].row, w[0].column) < (w[1].row, w[1].column)));
        }
    }
}
