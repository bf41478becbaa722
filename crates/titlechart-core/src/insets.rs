// File: crates/titlechart-core/src/insets.rs
// Summary: Inset calculation, plot rectangle derivation and axis alignment.

use crate::axis::Axis;
use crate::error::{LayoutError, LayoutResult};
use crate::geometry::{BoundingBox, ChartBBox, Edge};
use crate::legend::Legend;
use crate::types::{Insets, Size};

/// Space needed by axes and legend as a positive inset from each edge.
///
/// Axes that have never been drawn have no bbox and contribute nothing; they
/// are picked up on the following pass.
pub fn compute_insets(base_padding: f64, legend: Option<&Legend>, axes: &[Axis]) -> Insets {
    let mut insets = Insets::uniform(base_padding);

    for edge in Edge::ALL {
        if let Some(legend) = legend.filter(|l| l.position == edge) {
            insets.add(edge, legend.extent() + base_padding);
        }

        let axis = axes.iter().find(|a| a.position == edge);
        if let Some(bbox) = axis.and_then(|a| a.bbox) {
            insets.add(edge, bbox.extent_from(edge));
        }
    }

    insets
}

/// Measured title as it contributes to insets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TitleInset {
    pub location: Edge,
    /// Title box in the orientation it has at `location`.
    pub bbox: BoundingBox,
    pub padding: f64,
    pub margin: f64,
}

/// Grow `insets` on the title's edge by its extent plus padding and margin.
pub fn add_title_inset(mut insets: Insets, title: Option<&TitleInset>) -> Insets {
    if let Some(t) = title {
        insets.add(t.location, t.bbox.extent_from(t.location) + t.padding + t.margin);
    }
    insets
}

/// Build the plot rectangle from the total chart size and collected insets.
pub fn compute_chart_area(size: Size, insets: &Insets) -> LayoutResult<ChartBBox> {
    let width = size.width - insets.hsum();
    let height = size.height - insets.vsum();
    if width <= 0.0 || height <= 0.0 {
        return Err(LayoutError::Infeasible { width: size.width, height: size.height, insets: *insets });
    }
    Ok(BoundingBox::new(insets.left, insets.top, width, height))
}

/// Set each axis's position and length from the shared plot rectangle.
pub fn align_axes(axes: &mut [Axis], chart_bbox: &ChartBBox) {
    for axis in axes.iter_mut() {
        axis.align(chart_bbox);
    }
}
