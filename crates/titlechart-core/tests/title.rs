// File: crates/titlechart-core/tests/title.rs
// Purpose: Title placement math per location, location/font parsing.

use titlechart_core::title::compute_title_attributes_named;
use titlechart_core::{compute_title_attributes, BoundingBox, Edge, Font, LayoutError, Size, TitleConfig};

const SURFACE: Size = Size::new(450.0, 400.0);
const TITLE: BoundingBox = BoundingBox::new(0.0, 0.0, 200.0, 20.0);

#[test]
fn top_title_is_centered_below_padding() {
    let a = compute_title_attributes(SURFACE, TITLE, Edge::Top, 5.0, false);
    assert_eq!((a.x, a.y, a.degrees), (125.0, 15.0, 0));
    assert!(a.to_text_attributes().rotation.is_none());
}

#[test]
fn bottom_title_sits_above_padding() {
    let a = compute_title_attributes(SURFACE, TITLE, Edge::Bottom, 5.0, false);
    assert_eq!((a.x, a.y, a.degrees), (125.0, 385.0, 0));
}

#[test]
fn left_title_uses_unrotated_extents() {
    // Measured after a quarter turn: 200 wide, 20 tall becomes 20 wide, 200 tall.
    let a = compute_title_attributes(SURFACE, TITLE, Edge::Left, 5.0, true);
    assert_eq!((a.x, a.y, a.degrees), (105.0, 210.0, 270));
}

#[test]
fn right_title_rotates_about_its_anchor() {
    let a = compute_title_attributes(SURFACE, TITLE, Edge::Right, 5.0, false);
    assert_eq!((a.x, a.y, a.degrees), (435.0, 100.0, 90));
    let rot = a.to_text_attributes().rotation.expect("vertical title rotates");
    assert_eq!((rot.degrees, rot.x, rot.y), (90.0, 435.0, 100.0));
}

#[test]
fn every_location_maps_to_a_fixed_rotation() {
    let expected = [(Edge::Top, 0), (Edge::Right, 90), (Edge::Bottom, 0), (Edge::Left, 270)];
    for (edge, degrees) in expected {
        for vertical in [false, true] {
            let a = compute_title_attributes(SURFACE, TITLE, edge, 5.0, vertical);
            assert_eq!(a.degrees, degrees, "{edge}");
        }
    }
}

#[test]
fn odd_heights_round_half_up() {
    let bbox = BoundingBox::new(0.0, 0.0, 108.0, 15.0);
    let a = compute_title_attributes(SURFACE, bbox, Edge::Top, 5.0, false);
    // offset = round(7.5) = 8
    assert_eq!((a.x, a.y), (171.0, 12.0));
}

#[test]
fn unknown_location_is_a_configuration_error() {
    let err = compute_title_attributes_named(SURFACE, TITLE, "center", 5.0, false).unwrap_err();
    assert_eq!(err, LayoutError::InvalidTitleLocation("center".into()));

    let ok = compute_title_attributes_named(SURFACE, TITLE, "Bottom", 5.0, false).unwrap();
    assert_eq!(ok.degrees, 0);
}

#[test]
fn failed_location_change_keeps_previous() {
    let mut cfg = TitleConfig::new("Sales").with_location(Edge::Right);
    assert!(cfg.set_location("diagonal").is_err());
    assert_eq!(cfg.location, Edge::Right);
    cfg.set_location("left").unwrap();
    assert_eq!(cfg.location, Edge::Left);
}

#[test]
fn empty_text_means_no_title() {
    assert_eq!(TitleConfig::default().visible_text(), None);
    assert_eq!(TitleConfig::new("").visible_text(), None);
    assert_eq!(TitleConfig::new("Sales").visible_text(), Some("Sales"));
}

#[test]
fn font_parses_css_shorthand() {
    let f: Font = "12px Helvetica, sans-serif".parse().unwrap();
    assert_eq!(f, Font::default());
    assert_eq!(f.to_string(), "12px Helvetica, sans-serif");

    let b: Font = "bold 18px 'Segoe UI', Arial".parse().unwrap();
    assert!(b.bold);
    assert_eq!(b.size, 18.0);
    assert_eq!(b.families, vec!["Segoe UI".to_string(), "Arial".to_string()]);

    assert!(matches!("Helvetica".parse::<Font>(), Err(LayoutError::InvalidFont(_))));
    assert!(matches!("12px".parse::<Font>(), Err(LayoutError::InvalidFont(_))));
}
