// File: crates/titlechart-core/src/chart.rs
// Summary: Chart struct owning axes, legend and title; drives the layout pipeline on redraw.

use crate::axis::Axis;
use crate::error::LayoutResult;
use crate::geometry::{ChartBBox, Edge};
use crate::insets::{add_title_inset, compute_chart_area, compute_insets};
use crate::layout::{bbox_delta, Convergence, Layout, LayoutContext, LayoutOptions, LayoutParts, Stage};
use crate::legend::Legend;
use crate::surface::DrawingSurface;
use crate::title::{sync_title_sprite, title_inset, TitleConfig, TitleSprite};
use crate::types::{Insets, Size};

pub struct Chart {
    pub size: Size,
    pub options: LayoutOptions,
    pub legend: Option<Legend>,
    pub axes: Vec<Axis>,
    pub title: TitleConfig,
    title_sprite: Option<TitleSprite>,
    last_layout: Option<Layout>,
}

impl Default for Chart {
    fn default() -> Self {
        Self::new(Size::default())
    }
}

impl Chart {
    /// Chart with a bottom category axis and a left value axis.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            options: LayoutOptions::default(),
            legend: None,
            axes: vec![Axis::default_x(), Axis::default_y()],
            title: TitleConfig::default(),
            title_sprite: None,
            last_layout: None,
        }
    }

    pub fn with_options(mut self, options: LayoutOptions) -> Self {
        self.options = options;
        self
    }

    pub fn add_axis(&mut self, axis: Axis) {
        self.axes.push(axis);
    }

    pub fn axis(&self, position: Edge) -> Option<&Axis> {
        self.axes.iter().find(|a| a.position == position)
    }

    /// Resize; takes effect on the next redraw.
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.size = Size::new(width, height);
    }

    /// Set title text; an empty string removes the title.
    pub fn set_title(&mut self, text: impl Into<String>) {
        self.title.text = Some(text.into());
    }

    pub fn clear_title(&mut self) {
        self.title.text = None;
    }

    /// Move the title by configuration name. Unknown names are returned as
    /// errors and leave the current location unchanged.
    pub fn set_title_location(&mut self, location: &str) -> LayoutResult<()> {
        self.title.set_location(location)
    }

    pub fn set_title_font(&mut self, font: &str) -> LayoutResult<()> {
        self.title.set_font(font)
    }

    pub fn title_sprite(&self) -> Option<&TitleSprite> {
        self.title_sprite.as_ref()
    }

    /// Result of the most recent successful redraw.
    pub fn last_layout(&self) -> Option<&Layout> {
        self.last_layout.as_ref()
    }

    /// Insets for the current state: base padding, legend, measured axes and the title.
    pub fn get_insets<S: DrawingSurface + ?Sized>(&self, surface: &S) -> LayoutResult<Insets> {
        let insets = compute_insets(self.options.inset_padding, self.legend.as_ref(), &self.axes);
        let title = title_inset(surface, self.title_sprite.as_ref(), &self.title)?;
        Ok(add_title_inset(insets, title.as_ref()))
    }

    /// Derive the plot rectangle and position every axis against it.
    pub fn align_axes<S: DrawingSurface + ?Sized>(&mut self, surface: &S) -> LayoutResult<ChartBBox> {
        let insets = self.get_insets(surface)?;
        let chart_bbox = compute_chart_area(self.size, &insets)?;
        crate::insets::align_axes(&mut self.axes, &chart_bbox);
        Ok(chart_bbox)
    }

    fn parts(&mut self) -> LayoutParts<'_> {
        LayoutParts {
            inset_padding: self.options.inset_padding,
            legend: self.legend.as_ref(),
            axes: &mut self.axes,
            title: &self.title,
            title_sprite: self.title_sprite.as_mut(),
        }
    }

    fn pass<S: DrawingSurface + ?Sized>(&mut self, surface: &mut S) -> LayoutResult<LayoutContext> {
        let size = self.size;
        self.parts().run(size, surface)
    }

    /// Bring the title element up to date, then lay out and draw the chart.
    ///
    /// With [`Convergence::SinglePass`] the result settles one redraw after a
    /// size or content change, since axes drawn in this pass only reserve
    /// space in the next.
    #[tracing::instrument(skip_all)]
    pub fn redraw<S: DrawingSurface + ?Sized>(&mut self, surface: &mut S) -> LayoutResult<Layout> {
        self.title_sprite = sync_title_sprite(surface, self.title_sprite.take(), &self.title);

        let (max_passes, tolerance) = match self.options.convergence {
            Convergence::SinglePass => (1, 0.0),
            Convergence::FixedPoint { max_passes, tolerance } => (max_passes.max(1), tolerance),
        };

        let mut passes = 0;
        let mut previous = self.last_layout.map(|l| l.chart_bbox);
        let (ctx, converged) = loop {
            passes += 1;
            let ctx = self.pass(surface).inspect_err(|e| tracing::warn!(error = %e, "layout failed"))?;
            let chart_bbox = ctx.chart_bbox.unwrap_or_default();
            let converged = previous.is_some_and(|p| bbox_delta(&p, &chart_bbox) <= tolerance);
            if converged || passes >= max_passes {
                break (ctx, converged);
            }
            previous = Some(chart_bbox);
        };

        if !converged && max_passes > 1 {
            tracing::warn!(passes, "layout did not converge");
        }

        let layout = Layout {
            insets: ctx.insets,
            chart_bbox: ctx.chart_bbox.unwrap_or_default(),
            title: ctx.title,
            passes,
            converged,
        };
        tracing::debug!(?layout, "redraw complete");
        self.last_layout = Some(layout);
        Ok(layout)
    }

    /// Run the pipeline stage by stage, returning the context after each one.
    pub fn trace_stages<S: DrawingSurface + ?Sized>(
        &mut self,
        surface: &mut S,
    ) -> LayoutResult<Vec<(Stage, LayoutContext)>> {
        self.title_sprite = sync_title_sprite(surface, self.title_sprite.take(), &self.title);
        let mut ctx = LayoutContext::new(self.size, self.options.inset_padding);
        let mut out = Vec::with_capacity(Stage::PIPELINE.len());
        let mut parts = self.parts();
        for stage in Stage::PIPELINE {
            parts.run_stage(stage, &mut ctx, surface)?;
            out.push((stage, ctx));
        }
        Ok(out)
    }
}
