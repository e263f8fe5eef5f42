//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Every key
//! press is one discrete action; there is no auto-repeat handling.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
