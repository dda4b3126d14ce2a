//! Viewer session: owns the board and reacts to input and frame ticks.

use crate::input::{pointer_to_cell, PointerGesture};
use life_core::{CellCoordinate, ChangeList, Error, LifeConfig, Result, RunState};
use life_world::{patterns, Board, RunSummary, Simulator};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

/// Generations stepped by a headless run when no limit is configured
pub const DEFAULT_HEADLESS_GENERATIONS: u64 = 600;

/// Input delivered to the session. Pointer positions are in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerEvent {
    Resume,
    Pause,
    Clear,
    PointerPressed { column: u16, row: u16 },
    PointerMoved { column: u16, row: u16 },
    PointerReleased,
    Quit,
}

/// What the renderer needs to redraw
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// Redraw every cell
    Full,
    /// Redraw only the listed cells
    Incremental(ChangeList),
    /// Only the status line may have changed
    Unchanged,
}

pub struct Session {
    board: Board,
    simulator: Simulator,
    state: RunState,
    gesture: PointerGesture,
    config: LifeConfig,
    quit: bool,
}

impl Session {
    /// Build a session with a board seeded from `config.board.seed`,
    /// stamping `config.board.pattern` at the center if one is named.
    ///
    /// The configuration is validated first.
    pub fn new(config: LifeConfig) -> Result<Self> {
        config.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(config.board.seed);
        let mut board = Board::from_config(&config.board, &mut rng)?;

        if let Some(name) = &config.board.pattern {
            let pattern = patterns::find(name)
                .ok_or_else(|| Error::Config(format!("unknown pattern {:?}", name)))?;
            let (width, height) = pattern.extent();
            let origin = CellCoordinate::new(
                board.width().saturating_sub(width) / 2,
                board.height().saturating_sub(height) / 2,
            );
            pattern.stamp(&mut board, origin)?;
            info!(pattern = pattern.name, %origin, "Pattern stamped");
        }

        Ok(Self::with_board(board, config))
    }

    fn with_board(board: Board, config: LifeConfig) -> Self {
        Self {
            board,
            simulator: Simulator::new(),
            state: config.run.start_state,
            gesture: PointerGesture::new(),
            config,
            quit: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn generation(&self) -> u64 {
        self.simulator.generation()
    }

    pub fn config(&self) -> &LifeConfig {
        &self.config
    }

    pub fn limit_reached(&self) -> bool {
        self.config
            .run
            .max_generations
            .is_some_and(|max| self.generation() >= max)
    }

    /// Quit was requested or the generation limit was hit
    pub fn is_finished(&self) -> bool {
        self.quit || self.limit_reached()
    }

    /// Advance one generation if running
    pub fn tick(&mut self) -> Result<Frame> {
        if !self.state.is_running() || self.is_finished() {
            return Ok(Frame::Unchanged);
        }

        let changes = self.simulator.step(&mut self.board)?;

        if self.limit_reached() {
            info!(generation = self.generation(), "Generation limit reached");
        }

        Ok(Frame::Incremental(changes))
    }

    /// Step to the generation limit (or `DEFAULT_HEADLESS_GENERATIONS`)
    /// without rendering, stopping early once the board is stable
    pub fn run_headless(&mut self) -> Result<RunSummary> {
        let limit = self
            .config
            .run
            .max_generations
            .unwrap_or(DEFAULT_HEADLESS_GENERATIONS);
        let remaining = limit.saturating_sub(self.generation());
        self.simulator.run(&mut self.board, remaining)
    }

    pub fn handle_event(&mut self, event: ViewerEvent) -> Result<Frame> {
        debug!(?event, "Handling event");

        match event {
            ViewerEvent::Resume => self.set_state(RunState::Running),
            ViewerEvent::Pause => self.set_state(RunState::Paused),
            ViewerEvent::Clear => {
                self.board.clear();
                info!(generation = self.generation(), "Board cleared");
                return Ok(Frame::Full);
            }
            ViewerEvent::PointerPressed { column, row } => {
                if let Some(cell) = pointer_to_cell(column, row, &self.config.view) {
                    if self.gesture.press(&mut self.board, cell)? {
                        return Ok(Frame::Full);
                    }
                }
            }
            ViewerEvent::PointerMoved { column, row } => {
                if let Some(cell) = pointer_to_cell(column, row, &self.config.view) {
                    if self.gesture.drag(&mut self.board, cell)? {
                        return Ok(Frame::Full);
                    }
                }
            }
            ViewerEvent::PointerReleased => self.gesture.release(),
            ViewerEvent::Quit => {
                info!("Quit requested");
                self.quit = true;
            }
        }

        Ok(Frame::Unchanged)
    }

    fn set_state(&mut self, state: RunState) {
        if self.state != state {
            info!(generation = self.generation(), "Simulation {}", state);
            self.state = state;
        }
    }
}
