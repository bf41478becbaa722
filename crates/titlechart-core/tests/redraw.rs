// File: crates/titlechart-core/tests/redraw.rs
// Purpose: End-to-end redraws on the headless surface: pass lag, title lifecycle, convergence.

use titlechart_core::{
    BoundingBox, Chart, Convergence, DrawingSurface, Edge, HeadlessSurface, Insets, Layout, LayoutError,
    LayoutOptions, Legend, Size, Stage,
};

// 15 chars at 12px: 108 x 15 with the headless metrics.
const TITLE: &str = "Quarterly Sales";

fn setup() -> (Chart, HeadlessSurface) {
    (Chart::new(Size::new(450.0, 400.0)), HeadlessSurface::new(450.0, 400.0))
}

fn geometry(l: &Layout) -> (Insets, BoundingBox, Option<(f64, f64, u16)>) {
    (l.insets, l.chart_bbox, l.title.map(|t| (t.x, t.y, t.degrees)))
}

#[test]
fn axes_reserve_space_one_pass_late() {
    let (mut chart, mut surface) = setup();
    chart.set_title(TITLE);

    let first = chart.redraw(&mut surface).unwrap();
    assert_eq!(first.insets, Insets::new(30.0, 10.0, 10.0, 10.0));
    assert_eq!(first.chart_bbox, BoundingBox::new(10.0, 30.0, 430.0, 360.0));
    assert!(!first.converged);

    let second = chart.redraw(&mut surface).unwrap();
    assert_eq!(second.insets, Insets::new(30.0, 10.0, 40.0, 50.0));
    assert_eq!(second.chart_bbox, BoundingBox::new(50.0, 30.0, 390.0, 330.0));

    let third = chart.redraw(&mut surface).unwrap();
    assert_eq!(geometry(&second), geometry(&third));
    assert!(third.converged);
}

#[test]
fn axes_are_stretched_to_the_plot() {
    let (mut chart, mut surface) = setup();
    chart.redraw(&mut surface).unwrap();
    chart.redraw(&mut surface).unwrap();

    let x = chart.axis(Edge::Bottom).unwrap().placement;
    let y = chart.axis(Edge::Left).unwrap().placement;
    assert_eq!((x.x, x.y, x.length), (50.0, 360.0, 390.0));
    assert_eq!((y.x, y.y, y.length), (50.0, 360.0, 350.0));
}

#[test]
fn top_title_is_placed_and_shown() {
    let (mut chart, mut surface) = setup();
    chart.set_title(TITLE);
    let layout = chart.redraw(&mut surface).unwrap();

    let title = layout.title.expect("title placed");
    assert_eq!((title.x, title.y, title.degrees), (171.0, 12.0, 0));

    let sprite = chart.title_sprite().unwrap();
    assert!(sprite.is_visible());
    let el = surface.element(sprite.id()).unwrap();
    assert!(el.visible);
    assert_eq!((el.attrs.x, el.attrs.y), (171.0, 12.0));
}

#[test]
fn left_title_is_rotated_and_stable() {
    let (mut chart, mut surface) = setup();
    chart.set_title(TITLE);
    chart.set_title_location("left").unwrap();

    let first = chart.redraw(&mut surface).unwrap();
    assert_eq!(first.insets.left, 30.0);
    let t = first.title.unwrap();
    assert_eq!((t.x, t.y, t.degrees), (13.0, 254.0, 270));

    // Now measured rotated; the placement must not drift.
    let second = chart.redraw(&mut surface).unwrap();
    assert_eq!(second.title, first.title);
    assert_eq!(second.insets.left, 70.0);

    let rot = surface.element(chart.title_sprite().unwrap().id()).unwrap().attrs.rotation.unwrap();
    assert_eq!((rot.degrees, rot.x, rot.y), (270.0, 13.0, 254.0));
}

#[test]
fn title_is_updated_in_place_until_removed() {
    let (mut chart, mut surface) = setup();
    chart.set_title(TITLE);
    chart.redraw(&mut surface).unwrap();
    let id = chart.title_sprite().unwrap().id();

    for location in ["right", "bottom", "left", "top"] {
        chart.set_title_location(location).unwrap();
        chart.redraw(&mut surface).unwrap();
    }
    chart.set_title("Another title");
    chart.redraw(&mut surface).unwrap();

    assert_eq!(chart.title_sprite().unwrap().id(), id);
    assert_eq!(surface.element(id).unwrap().text, "Another title");
    assert_eq!(surface.created_count(), 1);
    assert_eq!(surface.destroyed_count(), 0);

    chart.clear_title();
    let layout = chart.redraw(&mut surface).unwrap();
    assert!(chart.title_sprite().is_none());
    assert!(layout.title.is_none());
    assert_eq!(surface.destroyed_count(), 1);
    assert_eq!(surface.live_elements(), 0);
    // Hiding before destroy is the only immediate redraw request.
    assert_eq!(surface.redraw_count(), 1);
}

#[test]
fn empty_title_text_removes_the_title() {
    let (mut chart, mut surface) = setup();
    chart.set_title(TITLE);
    chart.redraw(&mut surface).unwrap();
    chart.set_title("");
    chart.redraw(&mut surface).unwrap();
    assert!(chart.title_sprite().is_none());
}

#[test]
fn clearing_the_title_restores_untitled_insets() {
    let (mut plain, mut plain_surface) = setup();
    plain.redraw(&mut plain_surface).unwrap();
    let untitled = plain.redraw(&mut plain_surface).unwrap();

    let (mut chart, mut surface) = setup();
    chart.set_title(TITLE);
    chart.set_title_location("right").unwrap();
    chart.redraw(&mut surface).unwrap();
    chart.redraw(&mut surface).unwrap();
    chart.clear_title();
    let cleared = chart.redraw(&mut surface).unwrap();

    assert_eq!(cleared.insets, untitled.insets);
    assert_eq!(chart.get_insets(&surface).unwrap(), untitled.insets);
}

#[test]
fn rejected_location_leaves_title_untouched() {
    let (mut chart, mut surface) = setup();
    chart.set_title(TITLE);
    let before = chart.redraw(&mut surface).unwrap();

    let err = chart.set_title_location("middle").unwrap_err();
    assert_eq!(err, LayoutError::InvalidTitleLocation("middle".into()));
    assert_eq!(chart.title.location, Edge::Top);

    let after = chart.redraw(&mut surface).unwrap();
    assert_eq!(after.title, before.title);
    assert!(chart.title_sprite().unwrap().is_visible());
}

#[test]
fn lost_title_element_fails_and_keeps_last_layout() {
    let (mut chart, mut surface) = setup();
    chart.set_title(TITLE);
    let before = chart.redraw(&mut surface).unwrap();

    let id = chart.title_sprite().unwrap().id();
    surface.destroy(id);

    let err = chart.redraw(&mut surface).unwrap_err();
    assert_eq!(err, LayoutError::MissingElement(id));
    assert_eq!(chart.last_layout(), Some(&before));
}

#[test]
fn font_change_resizes_title_inset_in_place() {
    let (mut chart, mut surface) = setup();
    chart.set_title(TITLE);
    chart.redraw(&mut surface).unwrap();

    chart.set_title_font("bold 24px Georgia, serif").unwrap();
    let layout = chart.redraw(&mut surface).unwrap();
    // 24px line height is 30.
    assert_eq!(layout.insets.top, 10.0 + 30.0 + 5.0);
    assert_eq!(surface.created_count(), 1);

    assert!(chart.set_title_font("huge").is_err());
    assert_eq!(chart.title.font.size, 24.0);
}

#[test]
fn legend_on_an_edge_is_reserved() {
    let (mut chart, mut surface) = setup();
    chart.legend = Some(Legend::new(Edge::Right, BoundingBox::new(0.0, 0.0, 80.0, 120.0)));
    let layout = chart.redraw(&mut surface).unwrap();
    assert_eq!(layout.insets.right, 100.0);
    assert_eq!(layout.chart_bbox.width, 450.0 - 10.0 - 100.0);
}

#[test]
fn fixed_point_settles_in_one_redraw() {
    let (chart, mut surface) = setup();
    let options = LayoutOptions { convergence: Convergence::FixedPoint { max_passes: 5, tolerance: 0.0 }, ..Default::default() };
    let mut chart = chart.with_options(options);
    chart.set_title(TITLE);

    let first = chart.redraw(&mut surface).unwrap();
    assert!(first.converged);
    assert_eq!(first.passes, 3);
    assert_eq!(first.chart_bbox, BoundingBox::new(50.0, 30.0, 390.0, 330.0));

    let second = chart.redraw(&mut surface).unwrap();
    assert_eq!(second.passes, 1);
    assert_eq!(geometry(&first), geometry(&second));
}

#[test]
fn fixed_point_gives_up_after_max_passes() {
    let (chart, mut surface) = setup();
    let options = LayoutOptions { convergence: Convergence::FixedPoint { max_passes: 2, tolerance: 0.0 }, ..Default::default() };
    let mut chart = chart.with_options(options);
    let layout = chart.redraw(&mut surface).unwrap();
    assert_eq!(layout.passes, 2);
    assert!(!layout.converged);
}

#[test]
fn resize_relays_out_against_new_size() {
    let (mut chart, mut surface) = setup();
    chart.redraw(&mut surface).unwrap();
    chart.redraw(&mut surface).unwrap();

    chart.set_size(600.0, 500.0);
    surface.resize(600.0, 500.0);
    let layout = chart.redraw(&mut surface).unwrap();
    assert_eq!(layout.chart_bbox, BoundingBox::new(50.0, 10.0, 540.0, 450.0));
    assert_eq!(surface.size(), Size::new(600.0, 500.0));
}

#[test]
fn tiny_chart_is_infeasible() {
    let mut chart = Chart::new(Size::new(15.0, 15.0));
    let mut surface = HeadlessSurface::new(15.0, 15.0);
    assert!(matches!(chart.redraw(&mut surface), Err(LayoutError::Infeasible { .. })));
    assert!(chart.last_layout().is_none());
}

#[test]
fn stages_run_in_pipeline_order() {
    let (mut chart, mut surface) = setup();
    chart.set_title(TITLE);
    let trace = chart.trace_stages(&mut surface).unwrap();

    let stages: Vec<Stage> = trace.iter().map(|(s, _)| *s).collect();
    assert_eq!(stages, Stage::PIPELINE.to_vec());
    assert_eq!(trace[0].1.insets.top, 10.0);
    assert_eq!(trace[1].1.insets.top, 30.0);
    assert!(trace[1].1.chart_bbox.is_none());
    assert!(trace[2].1.chart_bbox.is_some());
    assert!(trace[3].1.title.is_none());
    assert!(trace[4].1.title.is_some());
}

#[test]
fn align_axes_uses_current_measurements() {
    let (mut chart, mut surface) = setup();
    chart.redraw(&mut surface).unwrap();
    let bbox = chart.align_axes(&surface).unwrap();
    assert_eq!(bbox, BoundingBox::new(50.0, 10.0, 390.0, 350.0));
    assert_eq!(chart.axis(Edge::Left).unwrap().placement.length, 350.0);
}
