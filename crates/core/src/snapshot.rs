use std::fmt;

use crate::types::{GameStatus, Shape, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub shape: Shape,
    /// Pivot column
    pub x: i8,
    /// Pivot row
    pub y: i8,
    /// Absolute grid cells
    pub cells: [(i8, i8); 4],
}

/// Copy of everything a renderer or debugger needs, detached from the board.
///
/// `rows[0]` is the floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSnapshot {
    pub rows: [[Shape; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub lines_cleared: u32,
    pub status: GameStatus,
}

impl BoardSnapshot {
    pub fn clear(&mut self) {
        self.rows = [[Shape::Empty; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.active = None;
        self.lines_cleared = 0;
        self.status = GameStatus::Idle;
    }

    pub fn playable(&self) -> bool {
        self.status == GameStatus::Running
    }

    /// Shape at (x, y), with the active piece drawn over the locked cells
    pub fn visible_at(&self, x: i8, y: i8) -> Shape {
        if let Some(active) = &self.active {
            if active.cells.contains(&(x, y)) {
                return active.shape;
            }
        }
        if x < 0 || y < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return Shape::Empty;
        }
        self.rows[y as usize][x as usize]
    }
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        Self {
            rows: [[Shape::Empty; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            lines_cleared: 0,
            status: GameStatus::Idle,
        }
    }
}

/// Top row first; locked cells in upper case, the falling piece in lower case.
impl fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..BOARD_HEIGHT as i8).rev() {
            for x in 0..BOARD_WIDTH as i8 {
                let locked = self.rows[y as usize][x as usize];
                let ch = match &self.active {
                    Some(active) if active.cells.contains(&(x, y)) => {
                        active.shape.letter().to_ascii_lowercase()
                    }
                    _ => locked.letter(),
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "lines={} status={}", self.lines_cleared, self.status.as_str())
    }
}
