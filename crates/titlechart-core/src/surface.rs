// File: crates/titlechart-core/src/surface.rs
// Summary: Drawing surface trait the layout core places, measures and rotates elements through.

use crate::axis::Axis;
use crate::font::Font;
use crate::geometry::BoundingBox;
use crate::types::Size;

/// Handle to an element living on a drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ElementId(pub u64);

/// Rotation about a pivot point, in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation {
    pub degrees: f64,
    pub x: f64,
    pub y: f64,
}

/// Placement attributes for a text element. `(x, y)` is the anchor the text
/// is laid out from: its left end, vertically centred.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextAttributes {
    pub x: f64,
    pub y: f64,
    pub rotation: Option<Rotation>,
}

impl TextAttributes {
    /// Box occupied by text of unrotated extents `width` x `height` placed with
    /// these attributes. Quarter turns swap the extents.
    pub fn bbox(&self, width: f64, height: f64) -> BoundingBox {
        let (x, y) = (self.x, self.y);
        match self.rotation.map(|r| r.degrees.rem_euclid(360.0)) {
            Some(d) if d == 270.0 => BoundingBox::new(x - height / 2.0, y - width, height, width),
            Some(d) if d == 90.0 => BoundingBox::new(x - height / 2.0, y, height, width),
            _ => BoundingBox::new(x, y - height / 2.0, width, height),
        }
    }
}

/// Retained-mode drawing surface provided by the host.
///
/// `measure` must reflect the element's current font and rotation.
pub trait DrawingSurface {
    fn size(&self) -> Size;

    fn create_text(&mut self, text: &str, font: &Font) -> ElementId;

    /// Replace the text and font of an existing element, keeping its attributes.
    fn set_text(&mut self, id: ElementId, text: &str, font: &Font);

    fn set_attributes(&mut self, id: ElementId, attrs: &TextAttributes, redraw_now: bool);

    fn set_visible(&mut self, id: ElementId, visible: bool, redraw_now: bool);

    fn measure(&self, id: ElementId) -> Option<BoundingBox>;

    fn destroy(&mut self, id: ElementId);

    /// Render an aligned axis and return the box it occupies. `index` is the
    /// axis' position in the chart's axis list; redrawing an index replaces it.
    fn draw_axis(&mut self, index: usize, axis: &Axis) -> BoundingBox;

    /// Drop axes drawn at `count` or above.
    fn retain_axes(&mut self, _count: usize) {}
}
