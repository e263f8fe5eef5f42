//! Core engine module - pure, deterministic, and testable
//!
//! This crate contains the game rules and state. It has **zero dependencies** on
//! UI, terminal or clocks:
//!
//! - **Deterministic**: a seed (or a scripted [`ShapeSequence`]) fixes the piece order
//! - **Testable**: every rule is reachable through plain method calls
//! - **Portable**: the host decides how ticks, status text and repaints are delivered
//!
//! # Module Structure
//!
//! - [`piece`]: the seven tetrominoes, their offsets and 90° rotations
//! - [`grid`]: 10x22 well of locked cells, collision checks and row removal
//! - [`board`]: the state machine (spawn, gravity, lock, line clear, pause, game over)
//! - [`rng`]: injectable shape sources
//! - [`ticker`]: fixed-interval tick source owned by the board
//! - [`status`]: status text sink
//! - [`snapshot`]: detached copy of the board for renderers
//!
//! # Rules
//!
//! - Pieces spawn at column 6 with their highest cell on the top row
//! - Rotation is a plain 90° turn about the pivot; there are no wall kicks
//! - A piece that cannot fall locks immediately; there is no lock delay
//! - After a line clear the next piece appears on the following tick
//! - The game ends only when a new piece cannot be placed
//!
//! # Example
//!
//! ```
//! use blockfall_core::Board;
//! use blockfall_types::{GameAction, GameStatus};
//!
//! let mut board = Board::new(12345);
//! board.start();
//!
//! board.apply_action(GameAction::MoveLeft);
//! board.apply_action(GameAction::RotateRight);
//! board.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(board.status(), GameStatus::Running);
//! assert_eq!(board.grid().occupied(), 4);
//! ```

pub mod board;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod snapshot;
pub mod status;
pub mod ticker;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, EngineConfig};
pub use grid::{cell_position, Grid};
pub use piece::{CellOffset, Piece};
pub use rng::{ShapeSequence, ShapeSource, SimpleRng};
pub use snapshot::{ActiveSnapshot, BoardSnapshot};
pub use status::{StatusLine, StatusSink};
pub use ticker::Ticker;
