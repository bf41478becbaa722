// File: crates/titlechart-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings, insets).

use crate::geometry::Edge;

/// Default chart width in pixels.
pub const WIDTH: f64 = 450.0;
/// Default chart height in pixels.
pub const HEIGHT: f64 = 400.0;
/// Base padding applied to every edge before axes, legend and title are added.
pub const INSET_PADDING: f64 = 10.0;

/// Width/height pair of a chart or drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

/// Space reserved on each chart edge, in pixels.
/// Contract: all fields are non-negative; `add` ignores negative amounts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Insets {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }

    /// Same value on all four edges.
    pub const fn uniform(padding: f64) -> Self {
        Self::new(padding, padding, padding, padding)
    }

    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }

    pub fn get(&self, edge: Edge) -> f64 {
        match edge {
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
        }
    }

    /// Grow the inset on `edge` by `amount`.
    pub fn add(&mut self, edge: Edge, amount: f64) {
        let amount = amount.max(0.0);
        match edge {
            Edge::Top => self.top += amount,
            Edge::Right => self.right += amount,
            Edge::Bottom => self.bottom += amount,
            Edge::Left => self.left += amount,
        }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::uniform(INSET_PADDING)
    }
}
