//! RNG module - shape selection for new pieces
//!
//! The board draws shapes through the [`ShapeSource`] trait so games can be
//! replayed from a seed and tests can script the exact piece order.
//!
//! - [`SimpleRng`]: seeded LCG picking uniformly among the 7 playable shapes
//! - [`ShapeSequence`]: replays a fixed list of shapes, cycling at the end

use crate::types::Shape;

/// Supplier of shapes for newly spawned pieces
pub trait ShapeSource {
    /// Next shape to spawn. Implementations must never return `Shape::Empty`.
    fn next_shape(&mut self) -> Shape;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // The low bits of an LCG cycle with a short period; use the high half.
        (self.next_u32() >> 16) % max
    }

    /// Current internal state (usable as a seed to resume the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ShapeSource for SimpleRng {
    fn next_shape(&mut self) -> Shape {
        let idx = self.next_range(Shape::PLAYABLE.len() as u32) as usize;
        Shape::PLAYABLE[idx]
    }
}

/// Scripted shape order, cycling once exhausted
///
/// Empty entries are skipped; an empty or all-Empty script falls back to `O`.
#[derive(Debug, Clone)]
pub struct ShapeSequence {
    shapes: Vec<Shape>,
    next: usize,
}

impl ShapeSequence {
    pub fn new(shapes: impl IntoIterator<Item = Shape>) -> Self {
        let mut shapes: Vec<Shape> = shapes.into_iter().filter(|s| !s.is_empty()).collect();
        if shapes.is_empty() {
            shapes.push(Shape::O);
        }
        Self { shapes, next: 0 }
    }

    /// Sequence that always yields `shape`
    pub fn repeat(shape: Shape) -> Self {
        Self::new([shape])
    }
}

impl ShapeSource for ShapeSequence {
    fn next_shape(&mut self) -> Shape {
        let shape = self.shapes[self.next];
        self.next = (self.next + 1) % self.shapes.len();
        shape
    }
}

impl<S: ShapeSource + ?Sized> ShapeSource for Box<S> {
    fn next_shape(&mut self) -> Shape {
        (**self).next_shape()
    }
}
