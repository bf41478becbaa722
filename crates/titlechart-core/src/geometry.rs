// File: crates/titlechart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math: edges, boxes, rounding.

use std::fmt;
use std::str::FromStr;

use crate::error::LayoutError;

/// One of the four chart edges. Also used as axis, legend and title location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    /// Edges in inset accumulation order.
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    /// Left and right edges hold vertical elements.
    pub const fn is_vertical(self) -> bool {
        matches!(self, Edge::Left | Edge::Right)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Edge::Top => "top",
            Edge::Right => "right",
            Edge::Bottom => "bottom",
            Edge::Left => "left",
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Edge {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Edge::Top),
            "right" => Ok(Edge::Right),
            "bottom" => Ok(Edge::Bottom),
            "left" => Ok(Edge::Left),
            _ => Err(LayoutError::InvalidTitleLocation(s.to_string())),
        }
    }
}

/// Measured rectangle of a rendered element, or the plot rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// The usable plot rectangle left after insets are subtracted.
pub type ChartBBox = BoundingBox;

impl BoundingBox {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
    pub fn right(&self) -> f64 { self.x + self.width }
    pub fn bottom(&self) -> f64 { self.y + self.height }

    /// Extent this box occupies measured away from `edge`:
    /// width for left/right, height for top/bottom.
    pub fn extent_from(&self, edge: Edge) -> f64 {
        if edge.is_vertical() { self.width } else { self.height }
    }

    /// Same box with width and height exchanged (a quarter turn).
    pub fn transposed(&self) -> Self {
        Self { x: self.x, y: self.y, width: self.height, height: self.width }
    }
}

/// Round half up to a whole pixel.
#[inline]
pub fn round_px(v: f64) -> f64 {
    (v + 0.5).floor()
}
