// File: crates/titlechart-core/src/layout.rs
// Summary: Layout options, the per-pass layout context, and the ordered stage pipeline.

use crate::axis::Axis;
use crate::error::LayoutResult;
use crate::geometry::ChartBBox;
use crate::insets::{add_title_inset, align_axes, compute_chart_area, compute_insets};
use crate::legend::Legend;
use crate::surface::DrawingSurface;
use crate::title::{title_inset, TitleAttributes, TitleConfig, TitleSprite};
use crate::types::{Insets, Size, INSET_PADDING};

/// How many layout passes a redraw runs.
///
/// Axes only contribute insets once they have been drawn, so a single pass
/// after a size or content change under-reserves space; the next redraw
/// corrects it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Convergence {
    /// One pass per redraw.
    #[default]
    SinglePass,
    /// Repeat passes until the plot rectangle moves by at most `tolerance`
    /// pixels on every side, or `max_passes` is reached.
    FixedPoint { max_passes: usize, tolerance: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutOptions {
    /// Base padding for every edge, also the gap between legend and plot.
    pub inset_padding: f64,
    pub convergence: Convergence,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self { inset_padding: INSET_PADDING, convergence: Convergence::default() }
    }
}

/// Values produced by the stages of one layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutContext {
    pub size: Size,
    pub insets: Insets,
    pub chart_bbox: Option<ChartBBox>,
    pub title: Option<TitleAttributes>,
}

impl LayoutContext {
    pub fn new(size: Size, base_padding: f64) -> Self {
        Self { size, insets: Insets::uniform(base_padding), chart_bbox: None, title: None }
    }
}

/// Pipeline stages, run in the order of [`Stage::PIPELINE`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Base padding plus legend and measured axes.
    BaseInsets,
    /// Title extent on its edge.
    TitleInsets,
    /// Plot rectangle and axis positions.
    AlignAxes,
    /// Draw axes, recording their boxes for the next pass.
    DrawAxes,
    /// Measure and position the title element.
    PlaceTitle,
}

impl Stage {
    pub const PIPELINE: [Stage; 5] =
        [Stage::BaseInsets, Stage::TitleInsets, Stage::AlignAxes, Stage::DrawAxes, Stage::PlaceTitle];

    pub const fn name(self) -> &'static str {
        match self {
            Stage::BaseInsets => "base-insets",
            Stage::TitleInsets => "title-insets",
            Stage::AlignAxes => "align-axes",
            Stage::DrawAxes => "draw-axes",
            Stage::PlaceTitle => "place-title",
        }
    }
}

/// Chart state the stages read and write, borrowed for one pass.
pub struct LayoutParts<'a> {
    pub inset_padding: f64,
    pub legend: Option<&'a Legend>,
    pub axes: &'a mut [Axis],
    pub title: &'a TitleConfig,
    pub title_sprite: Option<&'a mut TitleSprite>,
}

impl LayoutParts<'_> {
    /// Run a single stage against `ctx`.
    pub fn run_stage<S: DrawingSurface + ?Sized>(
        &mut self,
        stage: Stage,
        ctx: &mut LayoutContext,
        surface: &mut S,
    ) -> LayoutResult<()> {
        match stage {
            Stage::BaseInsets => {
                ctx.insets = compute_insets(self.inset_padding, self.legend, self.axes);
            }
            Stage::TitleInsets => {
                let inset = title_inset(&*surface, self.title_sprite.as_deref(), self.title)?;
                ctx.insets = add_title_inset(ctx.insets, inset.as_ref());
            }
            Stage::AlignAxes => {
                let chart_bbox = compute_chart_area(ctx.size, &ctx.insets)?;
                align_axes(self.axes, &chart_bbox);
                ctx.chart_bbox = Some(chart_bbox);
            }
            Stage::DrawAxes => {
                for (index, axis) in self.axes.iter_mut().enumerate() {
                    axis.bbox = Some(surface.draw_axis(index, axis));
                }
                surface.retain_axes(self.axes.len());
            }
            Stage::PlaceTitle => {
                ctx.title = match self.title_sprite.as_deref_mut() {
                    Some(sprite) => Some(sprite.place(surface, self.title)?),
                    None => None,
                };
            }
        }
        tracing::debug!(stage = stage.name(), insets = ?ctx.insets, chart_bbox = ?ctx.chart_bbox, "layout stage");
        Ok(())
    }

    /// Run every stage in order for one pass.
    pub fn run<S: DrawingSurface + ?Sized>(&mut self, size: Size, surface: &mut S) -> LayoutResult<LayoutContext> {
        let mut ctx = LayoutContext::new(size, self.inset_padding);
        for stage in Stage::PIPELINE {
            self.run_stage(stage, &mut ctx, surface)?;
        }
        Ok(ctx)
    }
}

/// Outcome of a redraw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub insets: Insets,
    pub chart_bbox: ChartBBox,
    pub title: Option<TitleAttributes>,
    /// Passes run by this redraw.
    pub passes: usize,
    /// Whether the last pass left the plot rectangle within tolerance of the one before.
    pub converged: bool,
}

/// Largest per-side movement between two plot rectangles.
pub fn bbox_delta(a: &ChartBBox, b: &ChartBBox) -> f64 {
    [
        (a.x - b.x).abs(),
        (a.y - b.y).abs(),
        (a.right() - b.right()).abs(),
        (a.bottom() - b.bottom()).abs(),
    ]
    .into_iter()
    .fold(0.0, f64::max)
}
