// File: crates/titlechart-render-skia/src/surface.rs
// Summary: Retained-mode Skia drawing surface; measures text, records axes, renders PNG.

use std::collections::{BTreeMap, HashMap};

use anyhow::Result;
use skia_safe as skia;
use titlechart_core::{
    Axis, AxisPlacement, BoundingBox, ChartBBox, DrawingSurface, Edge, ElementId, Font, Legend, Size, TextAttributes,
};

use crate::text::TextShaper;
use crate::theme::Theme;

/// Tick length outside the plot, in pixels.
const TICK: f64 = 6.0;
/// Gap between ticks and the axis label.
const LABEL_GAP: f64 = 4.0;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub theme: Theme,
    pub axis_font: Font,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: titlechart_core::types::WIDTH as i32,
            height: titlechart_core::types::HEIGHT as i32,
            theme: Theme::default(),
            axis_font: Font::new(11.0, &["Helvetica", "sans-serif"]),
        }
    }
}

struct TextElement {
    text: String,
    font: Font,
    attrs: TextAttributes,
    visible: bool,
    /// Unrotated extents.
    extents: (f64, f64),
}

impl TextElement {
    fn bbox(&self) -> BoundingBox {
        self.attrs.bbox(self.extents.0, self.extents.1)
    }
}

struct DrawnAxis {
    label: String,
    position: Edge,
    placement: AxisPlacement,
}

pub struct SkiaSurface {
    opts: RenderOptions,
    shaper: TextShaper,
    texts: HashMap<ElementId, TextElement>,
    /// Keyed by index in the chart's axis list.
    axes: BTreeMap<usize, DrawnAxis>,
    next_id: u64,
}

impl SkiaSurface {
    pub fn new(opts: RenderOptions) -> Self {
        Self { opts, shaper: TextShaper::new(), texts: HashMap::new(), axes: BTreeMap::new(), next_id: 0 }
    }

    pub fn resize(&mut self, width: i32, height: i32) {
        self.opts.width = width;
        self.opts.height = height;
    }

    /// Number of axes that will be rendered.
    pub fn drawn_axis_count(&self) -> usize {
        self.axes.len()
    }

    fn measure_text(&self, text: &str, font: &Font) -> (f64, f64) {
        let (w, h) = self.shaper.measure(text, font);
        (w as f64, h as f64)
    }

    /// Rasterize everything on the surface and encode it as PNG.
    pub fn render_png_bytes(&self, chart_bbox: Option<&ChartBBox>, legend: Option<&Legend>) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((self.opts.width, self.opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        let theme = &self.opts.theme;

        canvas.clear(theme.background);

        if let Some(b) = chart_bbox {
            let rect = to_rect(b);
            canvas.draw_rect(rect, &fill(theme.plot_background));
            canvas.draw_rect(rect, &stroke(theme.plot_border, 1.0));
        }

        for axis in self.axes.values() {
            self.draw_axis_line(canvas, axis);
        }

        if let Some(legend) = legend {
            let rect = to_rect(&legend.bbox);
            canvas.draw_rect(rect, &fill(theme.legend_fill));
            canvas.draw_rect(rect, &stroke(theme.legend_border, 1.0));
        }

        for el in self.texts.values().filter(|t| t.visible) {
            let TextAttributes { x, y, rotation } = el.attrs;
            canvas.save();
            if let Some(r) = rotation {
                canvas.rotate(r.degrees as f32, Some(skia::Point::new(r.x as f32, r.y as f32)));
            }
            self.shaper.draw_centered_left(canvas, &el.text, x as f32, y as f32, &el.font, theme.title);
            canvas.restore();
        }

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to a PNG file at `path`.
    pub fn render_to_png(
        &self,
        chart_bbox: Option<&ChartBBox>,
        legend: Option<&Legend>,
        path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_png_bytes(chart_bbox, legend)?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, bytes)?;
        tracing::info!(path = %path.as_ref().display(), "wrote chart png");
        Ok(())
    }

    fn draw_axis_line(&self, canvas: &skia::Canvas, axis: &DrawnAxis) {
        let theme = &self.opts.theme;
        let p = axis.placement;
        let (x, y, len) = (p.x as f32, p.y as f32, p.length as f32);
        let line = stroke(theme.axis_line, 1.5);
        let (lw, lh) = self.measure_text(&axis.label, &self.opts.axis_font);
        let (lw, lh) = (lw as f32, lh as f32);
        let tick = TICK as f32;
        let gap = LABEL_GAP as f32;
        let font = &self.opts.axis_font;

        match axis.position {
            Edge::Bottom | Edge::Top => {
                canvas.draw_line((x, y), (x + len, y), &line);
                let dir = if axis.position == Edge::Bottom { 1.0 } else { -1.0 };
                for tx in [x, x + len / 2.0, x + len] {
                    canvas.draw_line((tx, y), (tx, y + dir * tick), &line);
                }
                let ly = y + dir * (tick + gap + lh / 2.0);
                self.shaper.draw_centered_left(canvas, &axis.label, x + (len - lw) / 2.0, ly, font, theme.axis_label);
            }
            Edge::Left | Edge::Right => {
                canvas.draw_line((x, y), (x, y - len), &line);
                let dir = if axis.position == Edge::Left { -1.0 } else { 1.0 };
                for ty in [y, y - len / 2.0, y - len] {
                    canvas.draw_line((x, ty), (x + dir * tick, ty), &line);
                }
                let lx = x + dir * (tick + gap + lh / 2.0);
                let ly = y - (len - lw) / 2.0;
                canvas.save();
                canvas.rotate(270.0, Some(skia::Point::new(lx, ly)));
                self.shaper.draw_centered_left(canvas, &axis.label, lx, ly, font, theme.axis_label);
                canvas.restore();
            }
        }
    }
}

impl DrawingSurface for SkiaSurface {
    fn size(&self) -> Size {
        Size::new(self.opts.width as f64, self.opts.height as f64)
    }

    fn create_text(&mut self, text: &str, font: &Font) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        let extents = self.measure_text(text, font);
        self.texts.insert(id, TextElement {
            text: text.to_string(),
            font: font.clone(),
            attrs: TextAttributes::default(),
            visible: true,
            extents,
        });
        id
    }

    fn set_text(&mut self, id: ElementId, text: &str, font: &Font) {
        let extents = self.measure_text(text, font);
        if let Some(el) = self.texts.get_mut(&id) {
            el.text = text.to_string();
            el.font = font.clone();
            el.extents = extents;
        }
    }

    fn set_attributes(&mut self, id: ElementId, attrs: &TextAttributes, _redraw_now: bool) {
        if let Some(el) = self.texts.get_mut(&id) {
            el.attrs = *attrs;
        }
    }

    fn set_visible(&mut self, id: ElementId, visible: bool, _redraw_now: bool) {
        if let Some(el) = self.texts.get_mut(&id) {
            el.visible = visible;
        }
    }

    fn measure(&self, id: ElementId) -> Option<BoundingBox> {
        self.texts.get(&id).map(TextElement::bbox)
    }

    fn destroy(&mut self, id: ElementId) {
        self.texts.remove(&id);
    }

    fn retain_axes(&mut self, count: usize) {
        self.axes.retain(|&index, _| index < count);
    }

    fn draw_axis(&mut self, index: usize, axis: &Axis) -> BoundingBox {
        let (_, label_h) = self.measure_text(&axis.label, &self.opts.axis_font);
        let t = TICK + LABEL_GAP + label_h;
        let p = axis.placement;

        self.axes.insert(index, DrawnAxis { label: axis.label.clone(), position: axis.position, placement: p });

        match axis.position {
            Edge::Left => BoundingBox::new(p.x - t, p.y - p.length, t, p.length),
            Edge::Right => BoundingBox::new(p.x, p.y - p.length, t, p.length),
            Edge::Top => BoundingBox::new(p.x, p.y - t, p.length, t),
            Edge::Bottom => BoundingBox::new(p.x, p.y, p.length, t),
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn to_rect(b: &BoundingBox) -> skia::Rect {
    skia::Rect::from_xywh(b.x as f32, b.y as f32, b.width as f32, b.height as f32)
}

fn fill(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint
}

fn stroke(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}
