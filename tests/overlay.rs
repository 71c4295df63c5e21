//! Guide overlay rendering

use anchorkit::{
    render_guide_overlay, ConstraintOptions, EdgeInsets, LayoutEngine, LayoutGuide, MarginUse,
    OverlayConfig, OverlayStyle, View,
};
use pretty_assertions::assert_eq;

fn nested_scene() -> (View, LayoutEngine) {
    let mut root = View::new("root").with_margins(EdgeInsets::uniform(10.0));
    root.add_layout_guide(LayoutGuide::new("outer_gap"));

    let mut panel = View::new("panel");
    panel.add_layout_guide(LayoutGuide::new("inner_gap"));
    root.add_subview(panel);

    let mut engine = LayoutEngine::new();
    engine.suggest_origin(&root, 0.0, 0.0).unwrap();
    engine.suggest_size(&root, 200.0, 120.0).unwrap();

    let outer = root.layout_guide("outer_gap").unwrap();
    engine
        .pin_to_container(
            outer,
            EdgeInsets::ZERO,
            MarginUse::container_only(),
            ConstraintOptions::default(),
        )
        .unwrap();

    let panel = root.subview("panel").unwrap();
    engine
        .pin_to_container(
            panel,
            EdgeInsets::uniform(20.0),
            MarginUse::neither(),
            ConstraintOptions::default(),
        )
        .unwrap();
    let inner = root.layout_guide("inner_gap").unwrap();
    engine
        .pin_to_container(
            inner,
            EdgeInsets::uniform(5.0),
            MarginUse::neither(),
            ConstraintOptions::default(),
        )
        .unwrap();

    engine.solve();
    (root, engine)
}

#[test]
fn test_overlay_outlines_guides_across_the_subtree() {
    let (root, engine) = nested_scene();
    let svg = render_guide_overlay(
        &root,
        &engine,
        &OverlayConfig::default(),
        &OverlayStyle::default(),
    );

    assert!(svg.contains(r#"data-name="outer_gap""#));
    assert!(svg.contains(r#"data-name="inner_gap""#));
    assert_eq!(svg.matches(r#"class="lg-guide""#).count(), 2);
    assert!(svg.contains("stroke-dasharray=\"2 2\""));
    assert!(svg.contains("<animate attributeName=\"stroke-dashoffset\""));
}

#[test]
fn test_overlay_uses_style_colors() {
    let (root, engine) = nested_scene();
    let style = OverlayStyle::from_toml(
        r##"
[colors]
guide = "#ffffff"
"##,
    )
    .unwrap();
    let svg = render_guide_overlay(&root, &engine, &OverlayConfig::default(), &style);

    assert!(svg.contains(r##"stroke="#ffffff""##));
}

#[test]
fn test_overlay_can_include_view_outlines() {
    let (root, engine) = nested_scene();
    let config = OverlayConfig::default().with_views(true);
    let svg = render_guide_overlay(&root, &engine, &config, &OverlayStyle::default());

    assert!(svg.contains(r#"class="lg-view""#));
    assert!(svg.contains(r#"data-name="panel""#));
}

#[test]
fn test_overlay_regeneration_is_idempotent() {
    let (root, engine) = nested_scene();
    let config = OverlayConfig::default();
    let style = OverlayStyle::default();

    let first = render_guide_overlay(&root, &engine, &config, &style);
    let second = render_guide_overlay(&root, &engine, &config, &style);
    assert_eq!(first, second);
}

#[test]
fn test_static_overlay_has_no_animation() {
    let (root, engine) = nested_scene();
    let config = OverlayConfig::default().with_animated(false);
    let svg = render_guide_overlay(&root, &engine, &config, &OverlayStyle::default());

    assert!(!svg.contains("<animate"));
    assert!(svg.contains("stroke-dasharray"));
}
