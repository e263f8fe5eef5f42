//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(GameAction::MoveRight),

        // Rotation: up turns left, down turns right
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(GameAction::RotateLeft),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(GameAction::RotateRight),

        // Drops
        KeyCode::Char(' ') => Some(GameAction::HardDrop),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(GameAction::SoftDrop),

        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
