// File: crates/titlechart-core/src/title.rs
// Summary: Title configuration, placement math and the owned title element.

use crate::error::{LayoutError, LayoutResult};
use crate::font::Font;
use crate::geometry::{round_px, BoundingBox, Edge};
use crate::insets::TitleInset;
use crate::surface::{DrawingSurface, ElementId, Rotation, TextAttributes};
use crate::types::Size;

/// How the chart title is drawn and where.
#[derive(Clone, Debug, PartialEq)]
pub struct TitleConfig {
    /// Title text; `None` or empty means no title.
    pub text: Option<String>,
    pub font: Font,
    pub location: Edge,
    /// Gap between the chart border and the title, in pixels.
    pub padding: f64,
    /// Gap between the title and the space left for the chart body, in pixels.
    pub margin: f64,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self { text: None, font: Font::default(), location: Edge::Top, padding: 5.0, margin: 0.0 }
    }
}

impl TitleConfig {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: Some(text.into()), ..Default::default() }
    }

    pub fn with_location(mut self, location: Edge) -> Self {
        self.location = location;
        self
    }

    /// Text to draw, if any.
    pub fn visible_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }

    /// Set the location from its configuration name. On error the current
    /// location is kept.
    pub fn set_location(&mut self, value: &str) -> LayoutResult<()> {
        self.location = value.parse()?;
        Ok(())
    }

    pub fn set_font(&mut self, value: &str) -> LayoutResult<()> {
        self.font = value.parse()?;
        Ok(())
    }
}

/// Computed title anchor and rotation. The rotation pivots about `(x, y)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TitleAttributes {
    pub x: f64,
    pub y: f64,
    /// One of 0, 90 or 270.
    pub degrees: u16,
}

impl TitleAttributes {
    pub fn is_vertical(&self) -> bool {
        self.degrees != 0
    }

    pub fn to_text_attributes(&self) -> TextAttributes {
        let rotation = self.is_vertical().then(|| Rotation { degrees: self.degrees as f64, x: self.x, y: self.y });
        TextAttributes { x: self.x, y: self.y, rotation }
    }
}

/// Position a title of measured size `title_bbox` on `location`.
///
/// When the label is currently rendered vertically its measured box is
/// transposed first, so `width`/`height` below are the unrotated extents.
pub fn compute_title_attributes(
    surface: Size,
    title_bbox: BoundingBox,
    location: Edge,
    padding: f64,
    rendered_vertical: bool,
) -> TitleAttributes {
    let bbox = if rendered_vertical { title_bbox.transposed() } else { title_bbox };
    let (w, h) = (bbox.width, bbox.height);
    let offset = round_px(h / 2.0);

    match location {
        Edge::Top => TitleAttributes { x: round_px((surface.width - w) / 2.0), y: h - offset + padding, degrees: 0 },
        Edge::Bottom => TitleAttributes {
            x: round_px((surface.width - w) / 2.0),
            y: surface.height - offset - padding,
            degrees: 0,
        },
        Edge::Left => TitleAttributes {
            x: offset + padding,
            y: round_px((surface.height - w) / 2.0) + w,
            degrees: 270,
        },
        Edge::Right => TitleAttributes {
            x: surface.width - offset - padding,
            y: round_px((surface.height - w) / 2.0),
            degrees: 90,
        },
    }
}

/// Like [`compute_title_attributes`] but takes the location by configuration name.
pub fn compute_title_attributes_named(
    surface: Size,
    title_bbox: BoundingBox,
    location: &str,
    padding: f64,
    rendered_vertical: bool,
) -> LayoutResult<TitleAttributes> {
    let location: Edge = location.parse()?;
    Ok(compute_title_attributes(surface, title_bbox, location, padding, rendered_vertical))
}

/// The chart's title element on the drawing surface.
#[derive(Clone, Debug, PartialEq)]
pub struct TitleSprite {
    id: ElementId,
    text: String,
    font: Font,
    /// Whether the element currently carries a quarter-turn rotation.
    vertical: bool,
    visible: bool,
    attributes: Option<TitleAttributes>,
}

impl TitleSprite {
    /// Create the element hidden; it is shown once placed.
    fn create<S: DrawingSurface + ?Sized>(surface: &mut S, text: &str, font: &Font) -> Self {
        let id = surface.create_text(text, font);
        surface.set_visible(id, false, false);
        tracing::trace!(?id, text, "title element created");
        Self { id, text: text.to_string(), font: font.clone(), vertical: false, visible: false, attributes: None }
    }

    pub fn id(&self) -> ElementId { self.id }
    pub fn text(&self) -> &str { &self.text }
    pub fn is_vertical(&self) -> bool { self.vertical }
    pub fn is_visible(&self) -> bool { self.visible }
    pub fn attributes(&self) -> Option<TitleAttributes> { self.attributes }

    fn measure<S: DrawingSurface + ?Sized>(&self, surface: &S) -> LayoutResult<BoundingBox> {
        surface.measure(self.id).ok_or(LayoutError::MissingElement(self.id))
    }

    /// Measured box as it will be once the title sits on `location`.
    pub fn bbox_for<S: DrawingSurface + ?Sized>(&self, surface: &S, location: Edge) -> LayoutResult<BoundingBox> {
        let bbox = self.measure(surface)?;
        Ok(if self.vertical != location.is_vertical() { bbox.transposed() } else { bbox })
    }

    /// Position, rotate and show the element for `config`.
    pub fn place<S: DrawingSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        config: &TitleConfig,
    ) -> LayoutResult<TitleAttributes> {
        let bbox = self.measure(surface)?;
        let attrs = compute_title_attributes(surface.size(), bbox, config.location, config.padding, self.vertical);
        if self.attributes != Some(attrs) {
            surface.set_attributes(self.id, &attrs.to_text_attributes(), false);
            self.vertical = attrs.is_vertical();
            self.attributes = Some(attrs);
        }
        if !self.visible {
            surface.set_visible(self.id, true, false);
            self.visible = true;
        }
        Ok(attrs)
    }

    fn destroy<S: DrawingSurface + ?Sized>(self, surface: &mut S) {
        surface.set_visible(self.id, false, true);
        surface.destroy(self.id);
        tracing::trace!(id = ?self.id, "title element destroyed");
    }
}

/// Bring the title element in line with `config`: create it when text appears,
/// update it in place when text or font change, destroy it when text is cleared.
pub fn sync_title_sprite<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    sprite: Option<TitleSprite>,
    config: &TitleConfig,
) -> Option<TitleSprite> {
    match (sprite, config.visible_text()) {
        (None, None) => None,
        (Some(sprite), None) => {
            sprite.destroy(surface);
            None
        }
        (None, Some(text)) => Some(TitleSprite::create(surface, text, &config.font)),
        (Some(mut sprite), Some(text)) => {
            if sprite.text != text || sprite.font != config.font {
                surface.set_text(sprite.id, text, &config.font);
                sprite.text = text.to_string();
                sprite.font = config.font.clone();
                tracing::trace!(id = ?sprite.id, text, "title element updated in place");
            }
            Some(sprite)
        }
    }
}

/// Inset contribution of a live title element.
pub fn title_inset<S: DrawingSurface + ?Sized>(
    surface: &S,
    sprite: Option<&TitleSprite>,
    config: &TitleConfig,
) -> LayoutResult<Option<TitleInset>> {
    let Some(sprite) = sprite.filter(|_| config.visible_text().is_some()) else {
        return Ok(None);
    };
    Ok(Some(TitleInset {
        location: config.location,
        bbox: sprite.bbox_for(surface, config.location)?,
        padding: config.padding,
        margin: config.margin,
    }))
}
