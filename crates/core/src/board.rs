//! Board module - the game engine state machine
//!
//! The board owns the grid, the falling piece and its pivot position, the line
//! counter and the started / paused / falling-finished flags. Gravity arrives
//! through [`Board::tick`] (or [`Board::update`], which drives the owned
//! [`Ticker`]) and player input through [`Board::apply_action`].
//!
//! All moves funnel through [`Board::try_move`], which validates the target
//! position before committing anything. Illegal moves return `false` and leave
//! the board untouched; a blocked spawn ends the game.

use crate::grid::{piece_positions, Grid};
use crate::piece::Piece;
use crate::rng::{ShapeSource, SimpleRng};
use crate::snapshot::{ActiveSnapshot, BoardSnapshot};
use crate::status::{StatusLine, StatusSink};
use crate::ticker::Ticker;
use crate::types::*;

/// Runtime settings with the classic defaults (400ms ticks, seed 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub tick_interval_ms: u32,
    pub seed: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: TICK_INTERVAL_MS,
            seed: 1,
        }
    }
}

/// Complete engine state
#[derive(Debug, Clone)]
pub struct Board<R = SimpleRng, S = StatusLine> {
    grid: Grid,
    active: Piece,
    active_x: i8,
    active_y: i8,
    lines_cleared: u32,
    started: bool,
    paused: bool,
    falling_finished: bool,
    game_over: bool,
    redraw_requested: bool,
    ticker: Ticker,
    shapes: R,
    status: S,
}

impl Board<SimpleRng, StatusLine> {
    /// Create an idle board drawing shapes from a seeded RNG
    pub fn new(seed: u32) -> Self {
        Self::with_config(EngineConfig {
            seed,
            ..EngineConfig::default()
        })
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self::with_parts(
            Ticker::new(config.tick_interval_ms),
            SimpleRng::new(config.seed),
            StatusLine::new(),
        )
    }
}

impl<R: ShapeSource, S: StatusSink> Board<R, S> {
    /// Create an idle board from explicit collaborators
    pub fn with_parts(ticker: Ticker, shapes: R, status: S) -> Self {
        Self {
            grid: Grid::new(),
            active: Piece::empty(),
            active_x: SPAWN_X,
            active_y: BOARD_HEIGHT as i8 - 1,
            lines_cleared: 0,
            started: false,
            paused: false,
            falling_finished: false,
            game_over: false,
            redraw_requested: false,
            ticker,
            shapes,
            status,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Direct access to the locked cells, for scripted setups.
    ///
    /// Writing under the active piece breaks the no-overlap invariant.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Shape stored at grid cell (x, y)
    pub fn shape_at(&self, x: i8, y: i8) -> Result<Shape, EngineError> {
        self.grid.shape_at(x, y)
    }

    pub fn active_piece(&self) -> Piece {
        self.active
    }

    /// Pivot position of the active piece
    pub fn active_position(&self) -> (i8, i8) {
        (self.active_x, self.active_y)
    }

    /// Absolute grid cells of the active piece, `None` while it is Empty
    pub fn active_cells(&self) -> Option<[(i8, i8); 4]> {
        if self.active.is_empty() {
            return None;
        }
        piece_positions(&self.active, self.active_x, self.active_y)
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn falling_finished(&self) -> bool {
        self.falling_finished
    }

    pub fn status(&self) -> GameStatus {
        if self.started {
            if self.paused {
                GameStatus::Paused
            } else {
                GameStatus::Running
            }
        } else if self.game_over {
            GameStatus::GameOver
        } else {
            GameStatus::Idle
        }
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    pub fn status_sink(&self) -> &S {
        &self.status
    }

    pub fn shape_source_mut(&mut self) -> &mut R {
        &mut self.shapes
    }

    /// Return and clear the pending repaint request
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// Move `piece` so its pivot sits at (new_x, new_y), if every cell is free.
    ///
    /// This is the only place the active piece or its position changes; nothing
    /// is modified when it returns `false`.
    pub fn try_move(&mut self, piece: Piece, new_x: i8, new_y: i8) -> bool {
        if !self.grid.fits(&piece, new_x, new_y) {
            return false;
        }
        self.active = piece;
        self.active_x = new_x;
        self.active_y = new_y;
        self.redraw_requested = true;
        true
    }

    /// Gravity step: move down one row or lock in place
    pub fn one_line_down(&mut self) {
        if !self.try_move(self.active, self.active_x, self.active_y - 1) {
            self.piece_dropped();
        }
    }

    /// Hard drop: fall as far as possible, then lock. Always locks exactly once.
    pub fn drop_down(&mut self) {
        let mut new_y = self.active_y;
        while new_y > 0 && self.try_move(self.active, self.active_x, new_y - 1) {
            new_y -= 1;
        }
        self.piece_dropped();
    }

    /// Lock the active piece into the grid, clear lines, and spawn the next piece
    /// unless a clear deferred spawning to the next tick.
    pub fn piece_dropped(&mut self) {
        if !self.active.is_empty() {
            let locked = self.grid.lock(&self.active, self.active_x, self.active_y);
            debug_assert!(locked.is_ok(), "active piece left the grid: {:?}", locked);
        }

        self.remove_full_lines();

        if !self.falling_finished {
            self.new_piece();
        }
    }

    /// Spawn a random piece at the top of column 6; a blocked spawn is game over.
    pub fn new_piece(&mut self) {
        let piece = Piece::random(&mut self.shapes);
        let spawn_y = BOARD_HEIGHT as i8 - 1 + piece.min_y();

        if !self.try_move(piece, SPAWN_X, spawn_y) {
            self.active = Piece::empty();
            self.ticker.stop();
            self.started = false;
            self.game_over = true;
            self.status.set_status(STATUS_GAME_OVER);
            self.redraw_requested = true;
        }
    }

    /// Remove full rows and report how many were removed.
    ///
    /// When at least one row goes, the counter and status are updated, the active
    /// piece becomes Empty and the next tick spawns a fresh piece.
    pub fn remove_full_lines(&mut self) -> u32 {
        let removed = self.grid.remove_full_rows().len() as u32;
        if removed == 0 {
            return 0;
        }

        self.lines_cleared += removed;
        self.status.set_status(&self.lines_cleared.to_string());
        self.falling_finished = true;
        self.active = Piece::empty();
        self.redraw_requested = true;
        removed
    }

    /// Start a new game. Ignored while paused.
    pub fn start(&mut self) {
        if self.paused {
            return;
        }

        self.started = true;
        self.game_over = false;
        self.falling_finished = false;
        self.lines_cleared = 0;
        self.grid.clear();
        self.status.set_status("0");

        // Started before spawning so a blocked spawn leaves it stopped.
        self.ticker.start();
        self.new_piece();
    }

    /// Toggle pause. Ignored unless a game is running.
    pub fn pause(&mut self) {
        if !self.started {
            return;
        }

        self.paused = !self.paused;
        if self.paused {
            self.ticker.stop();
            self.status.set_status(STATUS_PAUSED);
        } else {
            self.ticker.start();
            self.status.set_status(&self.lines_cleared.to_string());
        }
        self.redraw_requested = true;
    }

    /// One gravity tick: spawn after a line clear, otherwise fall one row.
    pub fn tick(&mut self) {
        if !self.started || self.paused {
            return;
        }

        if self.falling_finished {
            self.falling_finished = false;
            self.new_piece();
        } else {
            self.one_line_down();
        }
    }

    /// Feed elapsed wall time to the ticker and run every tick that fired
    pub fn update(&mut self, elapsed_ms: u32) {
        let fired = self.ticker.advance(elapsed_ms);
        for _ in 0..fired {
            self.tick();
        }
    }

    /// Apply a player action.
    ///
    /// Restart is always accepted. Everything else needs a running game with a
    /// piece in play, and only pause gets through while paused. Returns whether
    /// the action was dispatched.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if action == GameAction::Restart {
            self.start();
            return true;
        }

        if !self.started || self.active.is_empty() {
            return false;
        }

        if action == GameAction::Pause {
            self.pause();
            return true;
        }

        if self.paused {
            return false;
        }

        let (x, y) = (self.active_x, self.active_y);
        match action {
            GameAction::MoveLeft => {
                self.try_move(self.active, x - 1, y);
            }
            GameAction::MoveRight => {
                self.try_move(self.active, x + 1, y);
            }
            GameAction::RotateLeft => {
                self.try_move(self.active.rotate_left(), x, y);
            }
            GameAction::RotateRight => {
                self.try_move(self.active.rotate_right(), x, y);
            }
            GameAction::HardDrop => self.drop_down(),
            GameAction::SoftDrop => self.one_line_down(),
            GameAction::Pause | GameAction::Restart => {}
        }
        true
    }

    pub fn snapshot_into(&self, out: &mut BoardSnapshot) {
        for (y, row) in out.rows.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = self.grid.cells()[y * BOARD_WIDTH as usize + x];
            }
        }
        out.active = self.active_cells().map(|cells| ActiveSnapshot {
            shape: self.active.shape(),
            x: self.active_x,
            y: self.active_y,
            cells,
        });
        out.lines_cleared = self.lines_cleared;
        out.status = self.status();
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut s = BoardSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
