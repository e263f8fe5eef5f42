//! Terminal rendering for the engine.
//!
//! Frames are painted into a plain framebuffer by [`BoardView`] (pure, testable)
//! and flushed by [`TerminalRenderer`], which only rewrites what changed.
//! Each board cell is two terminal columns wide.

pub mod board_view;
pub mod fb;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use board_view::{shape_color, BoardView, Viewport};
pub use fb::{FrameBuffer, Glyph, GlyphStyle, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
