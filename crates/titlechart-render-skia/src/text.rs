// File: crates/titlechart-render-skia/src/text.rs
// Summary: Text shaper using Skia textlayout; measures and paints labels in a chart font.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};
use titlechart_core::Font;

const FALLBACK_FAMILIES: [&str; 5] = ["Helvetica", "Arial", "Roboto", "DejaVu Sans", "sans-serif"];

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(font: &Font, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(font.size.max(1.0));
        ts.set_color(color);
        let mut families: Vec<&str> = font.families.iter().map(String::as_str).collect();
        families.extend(FALLBACK_FAMILIES);
        ts.set_font_families(families.as_slice());
        if font.bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, font: &Font, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(font, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Unrotated (width, height) of `text`.
    pub fn measure(&self, text: &str, font: &Font) -> (f32, f32) {
        let p = self.layout(text, font, skia::Color::from_argb(0, 0, 0, 0));
        // width of the longest line
        (p.longest_line().ceil(), p.height().ceil())
    }

    /// Paint `text` with its left end at `x`, vertically centred on `y`.
    pub fn draw_centered_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, font: &Font, color: skia::Color) {
        let mut p = self.layout(text, font, color);
        let h = p.height();
        p.paint(canvas, (x, y - h / 2.0));
    }
}
