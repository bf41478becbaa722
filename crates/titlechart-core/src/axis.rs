// File: crates/titlechart-core/src/axis.rs
// Summary: Axis model: edge position, last measured bbox, and aligned placement.

use crate::geometry::{BoundingBox, ChartBBox, Edge};

/// Position and render length assigned to an axis against the plot rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisPlacement {
    pub x: f64,
    pub y: f64,
    /// Plot extent perpendicular to the axis (used for grid lines).
    pub width: f64,
    /// Plot extent along the axis.
    pub length: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub position: Edge,
    /// Box measured when the axis was last drawn. `None` until the first draw.
    pub bbox: Option<BoundingBox>,
    pub placement: AxisPlacement,
}

impl Axis {
    pub fn new(label: impl Into<String>, position: Edge) -> Self {
        Self { label: label.into(), position, bbox: None, placement: AxisPlacement::default() }
    }

    pub fn default_x() -> Self {
        Self::new("Name", Edge::Bottom)
    }

    pub fn default_y() -> Self {
        Self::new("Data", Edge::Left)
    }

    pub fn is_vertical(&self) -> bool {
        self.position.is_vertical()
    }

    /// Anchor the axis on its edge of `chart_bbox`.
    ///
    /// Horizontal axes start at the left of the plot; vertical axes start at
    /// the bottom and grow upward, so every axis except a `top` one is anchored
    /// on the bottom edge.
    pub fn align(&mut self, chart_bbox: &ChartBBox) -> AxisPlacement {
        let vertical = self.is_vertical();
        let placement = AxisPlacement {
            x: if self.position == Edge::Right { chart_bbox.right() } else { chart_bbox.x },
            y: if self.position == Edge::Top { chart_bbox.y } else { chart_bbox.bottom() },
            width: if vertical { chart_bbox.width } else { chart_bbox.height },
            length: if vertical { chart_bbox.height } else { chart_bbox.width },
        };
        self.placement = placement;
        placement
    }
}
