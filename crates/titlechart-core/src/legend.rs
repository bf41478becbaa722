// File: crates/titlechart-core/src/legend.rs
// Summary: Legend as seen by layout: an edge and a measured box.

use crate::geometry::{BoundingBox, Edge};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Legend {
    pub position: Edge,
    pub bbox: BoundingBox,
}

impl Legend {
    pub fn new(position: Edge, bbox: BoundingBox) -> Self {
        Self { position, bbox }
    }

    /// Space the legend takes away from its edge.
    pub fn extent(&self) -> f64 {
        self.bbox.extent_from(self.position)
    }
}
