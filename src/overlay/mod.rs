//! Debug overlay for invisible layout regions
//!
//! Walks a view subtree and draws one animated dashed outline ("marching
//! ants") per layout guide, using solved frames from the engine. The output
//! is a complete SVG document regenerated from scratch on every call, so
//! repeated invocations replace rather than accumulate outlines.

pub mod style;
mod svg;

pub use style::{OverlayStyle, OverlayStyleError};

use crate::engine::LayoutEngine;
use crate::geometry::Rect;
use crate::item::{Anchorable, View};

use svg::SvgBuilder;

/// Configuration options for overlay rendering
#[derive(Debug, Clone)]
pub struct OverlayConfig {
    /// Outline stroke width
    pub stroke_width: f64,
    /// Dash pattern: (on, off) lengths
    pub dash: (f64, f64),
    /// Whether the dash phase animates
    pub animated: bool,
    /// Seconds per dash-phase cycle
    pub animation_period: f64,
    /// Whether subview frames are outlined in addition to guides
    pub include_views: bool,
    /// Padding around the viewBox
    pub viewbox_padding: f64,
    /// Whether to format output with indentation
    pub pretty_print: bool,
    /// Prefix for CSS class names (e.g., "lg-" for "lg-guide")
    pub class_prefix: Option<String>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            stroke_width: 1.0,
            dash: (2.0, 2.0),
            animated: true,
            animation_period: 0.75,
            include_views: false,
            viewbox_padding: 4.0,
            pretty_print: true,
            class_prefix: Some("lg-".to_string()),
        }
    }
}

impl OverlayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the outline stroke width
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    /// Set the dash pattern
    pub fn with_dash(mut self, on: f64, off: f64) -> Self {
        self.dash = (on, off);
        self
    }

    /// Enable or disable the dash-phase animation
    pub fn with_animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    /// Set the animation period in seconds
    pub fn with_animation_period(mut self, seconds: f64) -> Self {
        self.animation_period = seconds;
        self
    }

    /// Also outline subview frames
    pub fn with_views(mut self, include: bool) -> Self {
        self.include_views = include;
        self
    }

    /// Set the viewBox padding
    pub fn with_viewbox_padding(mut self, padding: f64) -> Self {
        self.viewbox_padding = padding;
        self
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }
}

/// Render the guide overlay for a view subtree
///
/// Solved frames come from the engine; call
/// [`LayoutEngine::solve`] first.
pub fn render_guide_overlay(
    root: &View,
    engine: &LayoutEngine,
    config: &OverlayConfig,
    style: &OverlayStyle,
) -> String {
    let mut builder = SvgBuilder::new(config.clone());
    let mut bounds = engine.frame_of(root);
    collect(root, engine, config, style, &mut builder, &mut bounds);
    builder.build(bounds)
}

fn collect(
    view: &View,
    engine: &LayoutEngine,
    config: &OverlayConfig,
    style: &OverlayStyle,
    builder: &mut SvgBuilder,
    bounds: &mut Rect,
) {
    // recurse into subviews first, matching document order of nested regions
    for subview in view.subviews() {
        if config.include_views {
            let frame = engine.frame_of(subview);
            *bounds = bounds.union(&frame);
            builder.add_outline("view", subview.name(), frame, style.view_color());
        }
        collect(subview, engine, config, style, builder, bounds);
    }

    for guide in view.layout_guides() {
        let frame = engine.frame_of(guide);
        *bounds = bounds.union(&frame);
        builder.add_outline("guide", guide.name(), frame, style.guide_color());
    }
}
