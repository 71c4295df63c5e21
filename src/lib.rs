//! anchorkit - a fluent convenience layer over a constraint-based layout engine
//!
//! This library builds declarative layout constraints for the kasuari
//! Cassowary solver. Common relationships (pinning to a container, centering,
//! constant and relative sizing, relative positioning, aspect ratio) are
//! single calls that expand into the solver's primitive constraints. The same
//! builders operate uniformly over views and invisible layout guides.
//!
//! # Example
//!
//! ```rust
//! use anchorkit::{ConstraintOptions, EdgeInsets, LayoutEngine, MarginUse, View};
//!
//! let mut root = View::new("root");
//! root.add_subview(View::new("badge"));
//! let badge = root.subview("badge").unwrap();
//!
//! let mut engine = LayoutEngine::new();
//! engine.suggest_size(&root, 320.0, 200.0).unwrap();
//! engine
//!     .pin_to_container(
//!         badge,
//!         EdgeInsets::uniform(10.0),
//!         MarginUse::neither(),
//!         ConstraintOptions::default(),
//!     )
//!     .unwrap();
//! engine.solve();
//!
//! assert_eq!(engine.frame_of(badge).width, 300.0);
//! ```
//!
//! # Failure modes
//!
//! Misusing the builder API (pinning an item with no container, constraining
//! an item's size against itself, passing a positional attribute where a size
//! attribute is required, or mixing axes) is a bug in the caller and panics
//! immediately rather than producing a degenerate constraint. Solver-side
//! rejections (conflicting required constraints) are data-level conditions
//! and surface as [`EngineError`].

pub mod anchor;
pub mod attribute;
pub mod engine;
pub mod geometry;
pub mod item;
pub mod overlay;

pub use anchor::{Anchor, DimensionAnchor, PositionAnchor};
pub use attribute::Attribute;
pub use engine::{
    ConstraintOptions, EngineError, LayoutConstraint, LayoutEngine, MarginUse, Relation,
};
pub use geometry::{EdgeInsets, Point, Rect};
pub use item::{Anchorable, ContainerHandle, Frame, ItemId, LayoutGuide, View};
pub use overlay::{render_guide_overlay, OverlayConfig, OverlayStyle, OverlayStyleError};

// The solver's strength type doubles as the constraint priority;
// Strength::REQUIRED is the documented maximum.
pub use kasuari::Strength;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_and_size_round_trip() {
        let mut root = View::new("root");
        root.add_subview(View::new("square"));
        let square = root.subview("square").unwrap();

        let mut engine = LayoutEngine::new();
        engine.suggest_origin(&root, 0.0, 0.0).unwrap();
        engine.suggest_size(&root, 200.0, 100.0).unwrap();
        engine
            .constrain_size(
                Attribute::Width,
                square,
                Relation::Equal,
                80.0,
                ConstraintOptions::default(),
            )
            .unwrap();
        engine
            .constrain_size(
                Attribute::Height,
                square,
                Relation::Equal,
                80.0,
                ConstraintOptions::default(),
            )
            .unwrap();
        engine
            .center_in_container(square, MarginUse::neither(), ConstraintOptions::default())
            .unwrap();
        engine.solve();

        let frame = engine.frame_of(square);
        assert!((frame.x - 60.0).abs() < 0.001);
        assert!((frame.y - 10.0).abs() < 0.001);
    }
}
