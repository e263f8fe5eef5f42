//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! Everything here is plain data with no I/O, so it can be used by the engine,
//! the terminal front end and tests alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 22 rows (indexed 0-21, row 0 is the floor)
//! - **Spawn column**: 6
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_INTERVAL_MS` | 400 | Gravity tick interval, independent of lines cleared |
//! | `FRAME_MS` | 16 | Input poll / redraw granularity of the terminal runner |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, Shape, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let shape = Shape::from_str("t").unwrap();
//! assert_eq!(shape, Shape::T);
//! assert_eq!(shape.color_index(), 4);
//!
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 22);
//! ```

use thiserror::Error;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (22 rows)
pub const BOARD_HEIGHT: u8 = 22;

/// Column where the pivot of a freshly spawned piece is placed
pub const SPAWN_X: i8 = 6;

/// Gravity tick interval in milliseconds
pub const TICK_INTERVAL_MS: u32 = 400;

/// Frame interval of the terminal runner in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Status text shown while paused
pub const STATUS_PAUSED: &str = "paused";

/// Status text shown after a blocked spawn
pub const STATUS_GAME_OVER: &str = "game over, press R to restart";

/// Piece shapes, including the `Empty` sentinel used for unoccupied cells
///
/// The declaration order is the color index used by renderers and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Shape {
    #[default]
    Empty,
    Z,
    S,
    I,
    T,
    O,
    L,
    J,
}

impl Shape {
    /// The seven shapes a falling piece can take
    pub const PLAYABLE: [Shape; 7] = [
        Shape::Z,
        Shape::S,
        Shape::I,
        Shape::T,
        Shape::O,
        Shape::L,
        Shape::J,
    ];

    /// Stable color index (Empty = 0, Z = 1 ... J = 7)
    pub fn color_index(&self) -> u8 {
        *self as u8
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Shape::Empty)
    }

    /// Parse shape from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Shape;
    ///
    /// assert_eq!(Shape::from_str("i"), Some(Shape::I));
    /// assert_eq!(Shape::from_str("O"), Some(Shape::O));
    /// assert_eq!(Shape::from_str("-"), Some(Shape::Empty));
    /// assert_eq!(Shape::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "-" | "empty" => Some(Shape::Empty),
            "z" => Some(Shape::Z),
            "s" => Some(Shape::S),
            "i" => Some(Shape::I),
            "t" => Some(Shape::T),
            "o" => Some(Shape::O),
            "l" => Some(Shape::L),
            "j" => Some(Shape::J),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Empty => "empty",
            Shape::Z => "z",
            Shape::S => "s",
            Shape::I => "i",
            Shape::T => "t",
            Shape::O => "o",
            Shape::L => "l",
            Shape::J => "j",
        }
    }

    /// Single display character (`.` for Empty)
    pub fn letter(&self) -> char {
        match self {
            Shape::Empty => '.',
            Shape::Z => 'Z',
            Shape::S => 'S',
            Shape::I => 'I',
            Shape::T => 'T',
            Shape::O => 'O',
            Shape::L => 'L',
            Shape::J => 'J',
        }
    }
}

/// Discrete player actions
///
/// One variant per input the board accepts. Restart is always honoured,
/// the rest only while a game is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Rotate piece 90° counter-clockwise
    RotateLeft,
    /// Rotate piece 90° clockwise
    RotateRight,
    /// Drop the piece as far as it goes and lock it
    HardDrop,
    /// Move the piece down a single row
    SoftDrop,
    /// Toggle pause state
    Pause,
    /// Restart the game (accepted at any time)
    Restart,
}

impl GameAction {
    /// Parse action from string (case-insensitive camelCase)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("rotateright"), Some(GameAction::RotateRight));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "rotateleft" => Some(GameAction::RotateLeft),
            "rotateright" => Some(GameAction::RotateRight),
            "harddrop" => Some(GameAction::HardDrop),
            "softdrop" => Some(GameAction::SoftDrop),
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::RotateLeft => "rotateLeft",
            GameAction::RotateRight => "rotateRight",
            GameAction::HardDrop => "hardDrop",
            GameAction::SoftDrop => "softDrop",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }
}

/// Lifecycle state derived from the board flags
///
/// `Idle` → `Running` ⇄ `Paused`, `Running` → `GameOver`; restart leaves any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Idle,
    Running,
    Paused,
    GameOver,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Idle => "idle",
            GameStatus::Running => "running",
            GameStatus::Paused => "paused",
            GameStatus::GameOver => "gameOver",
        }
    }
}

/// Caller contract violations
///
/// Gameplay rejections (blocked moves, blocked spawns) are not errors; they are
/// reported as `false` or as a state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("cell ({x}, {y}) is outside the board")]
    CellOutOfBounds { x: i8, y: i8 },
}
