// File: crates/demo/src/main.rs
// Summary: Demo renders a 450x400 chart with the title and legend moved around each edge, one PNG per layout.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use titlechart_core::{BoundingBox, Chart, Edge, Font, Legend, Size};
use titlechart_render_skia::{RenderOptions, SkiaSurface, TextShaper, Theme};
use tracing_subscriber::{fmt, EnvFilter};

const TITLE: &str = "Ain't it cool to have a Title?";
const FIELDS: usize = 13;

/// Swatch size plus gap before the entry label.
const SWATCH: f64 = 16.0;
const ENTRY_HEIGHT: f64 = 16.0;
const LEGEND_PADDING: f64 = 5.0;

fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let out_dir = std::env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("target/out"));
    std::fs::create_dir_all(&out_dir).with_context(|| format!("creating {}", out_dir.display()))?;

    // Optional second argument selects a theme preset by name.
    let theme = std::env::args().nth(2).map(|name| titlechart_render_skia::theme::find(&name)).unwrap_or_default();
    tracing::info!(theme = theme.name, "rendering");

    let shaper = TextShaper::new();
    let size = Size::new(450.0, 400.0);

    // Title on each edge, then legend on each edge, then each one missing.
    let mut scenarios: Vec<(Option<Edge>, Option<Edge>)> = Vec::new();
    for title in Edge::ALL {
        scenarios.push((Some(title), Some(Edge::Right)));
    }
    for legend in Edge::ALL {
        scenarios.push((Some(Edge::Top), Some(legend)));
    }
    scenarios.push((None, Some(Edge::Right)));
    scenarios.push((Some(Edge::Left), None));

    for (title, legend) in scenarios {
        let out = out_name(&out_dir, title, legend);
        render_one(&shaper, theme, size, title, legend, &out)
            .with_context(|| format!("rendering {}", out.display()))?;
        println!("Wrote {}", out.display());
    }

    Ok(())
}

fn render_one(
    shaper: &TextShaper,
    theme: Theme,
    size: Size,
    title: Option<Edge>,
    legend: Option<Edge>,
    out: &Path,
) -> Result<()> {
    let mut chart = Chart::new(size);
    if let Some(location) = title {
        chart.set_title(TITLE);
        chart.set_title_location(location.as_str())?;
    }
    chart.legend = legend.map(|edge| build_legend(shaper, size, edge));

    let mut surface = SkiaSurface::new(RenderOptions {
        width: size.width as i32,
        height: size.height as i32,
        theme,
        ..Default::default()
    });

    // The first pass has not measured the axes yet.
    chart.redraw(&mut surface)?;
    let layout = chart.redraw(&mut surface)?;
    tracing::info!(?title, ?legend, insets = ?layout.insets, chart_bbox = ?layout.chart_bbox, "layout");

    surface.render_to_png(Some(&layout.chart_bbox), chart.legend.as_ref(), out)
}

/// Legend listing "Field 0".."Field 12", stacked on vertical edges and in a row otherwise.
fn build_legend(shaper: &TextShaper, size: Size, edge: Edge) -> Legend {
    let font = Font::default();
    let widths: Vec<f64> = (0..FIELDS)
        .map(|i| shaper.measure(&format!("Field {i}"), &font).0 as f64 + SWATCH)
        .collect();

    let (w, h) = if edge.is_vertical() {
        let widest = widths.iter().cloned().fold(0.0, f64::max);
        (widest + 2.0 * LEGEND_PADDING, FIELDS as f64 * ENTRY_HEIGHT + 2.0 * LEGEND_PADDING)
    } else {
        let row: f64 = widths.iter().sum::<f64>() + LEGEND_PADDING * (FIELDS as f64 - 1.0);
        (row.min(size.width - 20.0), ENTRY_HEIGHT + 2.0 * LEGEND_PADDING)
    };

    let pad = titlechart_core::types::INSET_PADDING;
    let (x, y) = match edge {
        Edge::Right => (size.width - pad - w, (size.height - h) / 2.0),
        Edge::Left => (pad, (size.height - h) / 2.0),
        Edge::Top => ((size.width - w) / 2.0, pad),
        Edge::Bottom => ((size.width - w) / 2.0, size.height - pad - h),
    };
    Legend::new(edge, BoundingBox::new(x, y, w, h))
}

/// Produce output file name like <dir>/titlechart_title-<edge>_legend-<edge>.png
fn out_name(dir: &Path, title: Option<Edge>, legend: Option<Edge>) -> PathBuf {
    let part = |e: Option<Edge>| e.map(Edge::as_str).unwrap_or("none");
    dir.join(format!("titlechart_title-{}_legend-{}.png", part(title), part(legend)))
}
