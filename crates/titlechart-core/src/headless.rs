// File: crates/titlechart-core/src/headless.rs
// Summary: Deterministic in-memory drawing surface with fixed glyph metrics.

use std::collections::HashMap;

use crate::axis::Axis;
use crate::font::Font;
use crate::geometry::{BoundingBox, Edge};
use crate::surface::{DrawingSurface, ElementId, TextAttributes};
use crate::types::Size;

/// Horizontal advance per character, as a fraction of the font size.
pub const GLYPH_ADVANCE: f64 = 0.6;
/// Line height as a fraction of the font size.
pub const LINE_HEIGHT: f64 = 1.25;

/// Thickness of drawn axes (tick marks plus labels).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisThickness {
    pub vertical: f64,
    pub horizontal: f64,
}

impl Default for AxisThickness {
    fn default() -> Self {
        Self { vertical: 40.0, horizontal: 30.0 }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeadlessText {
    pub text: String,
    pub font: Font,
    pub attrs: TextAttributes,
    pub visible: bool,
}

impl HeadlessText {
    /// Unrotated text extents.
    pub fn extents(&self) -> (f64, f64) {
        let size = self.font.size as f64;
        let width = self.text.chars().count() as f64 * size * GLYPH_ADVANCE;
        (width, size * LINE_HEIGHT)
    }

    fn bbox(&self) -> BoundingBox {
        let (w, h) = self.extents();
        self.attrs.bbox(w, h)
    }
}

/// Surface used by tests, benches and size-only layout runs.
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    size: Size,
    pub axis_thickness: AxisThickness,
    elements: HashMap<ElementId, HeadlessText>,
    next_id: u64,
    created: usize,
    destroyed: usize,
    redraws: usize,
}

impl HeadlessSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self { size: Size::new(width, height), ..Default::default() }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.size = Size::new(width, height);
    }

    pub fn element(&self, id: ElementId) -> Option<&HeadlessText> {
        self.elements.get(&id)
    }

    pub fn live_elements(&self) -> usize { self.elements.len() }
    pub fn created_count(&self) -> usize { self.created }
    pub fn destroyed_count(&self) -> usize { self.destroyed }
    /// Number of immediate redraw requests received.
    pub fn redraw_count(&self) -> usize { self.redraws }
}

impl DrawingSurface for HeadlessSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn create_text(&mut self, text: &str, font: &Font) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.created += 1;
        self.elements.insert(id, HeadlessText {
            text: text.to_string(),
            font: font.clone(),
            attrs: TextAttributes::default(),
            visible: true,
        });
        id
    }

    fn set_text(&mut self, id: ElementId, text: &str, font: &Font) {
        if let Some(el) = self.elements.get_mut(&id) {
            el.text = text.to_string();
            el.font = font.clone();
        }
    }

    fn set_attributes(&mut self, id: ElementId, attrs: &TextAttributes, redraw_now: bool) {
        if let Some(el) = self.elements.get_mut(&id) {
            el.attrs = *attrs;
            if redraw_now { self.redraws += 1; }
        }
    }

    fn set_visible(&mut self, id: ElementId, visible: bool, redraw_now: bool) {
        if let Some(el) = self.elements.get_mut(&id) {
            el.visible = visible;
            if redraw_now { self.redraws += 1; }
        }
    }

    fn measure(&self, id: ElementId) -> Option<BoundingBox> {
        self.elements.get(&id).map(HeadlessText::bbox)
    }

    fn destroy(&mut self, id: ElementId) {
        if self.elements.remove(&id).is_some() {
            self.destroyed += 1;
        }
    }

    fn draw_axis(&mut self, _index: usize, axis: &Axis) -> BoundingBox {
        let p = axis.placement;
        let t = if axis.is_vertical() { self.axis_thickness.vertical } else { self.axis_thickness.horizontal };
        match axis.position {
            Edge::Left => BoundingBox::new(p.x - t, p.y - p.length, t, p.length),
            Edge::Right => BoundingBox::new(p.x, p.y - p.length, t, p.length),
            Edge::Top => BoundingBox::new(p.x, p.y - t, p.length, t),
            Edge::Bottom => BoundingBox::new(p.x, p.y, p.length, t),
        }
    }
}
