//! Symbolic layout attributes
//!
//! An [`Attribute`] names an edge, center line, baseline, or size dimension
//! of a layout item. Classification into an axis category happens in the
//! item's [`anchor`](crate::item::Anchorable::anchor) implementation; the
//! attribute itself is just a tag.

/// A symbolic layout attribute on a view or layout guide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Leading,
    Trailing,
    Left,
    Right,
    Top,
    Bottom,
    CenterX,
    CenterY,
    FirstBaseline,
    LastBaseline,
    LeadingMargin,
    TrailingMargin,
    LeftMargin,
    RightMargin,
    TopMargin,
    BottomMargin,
    CenterXWithinMargins,
    CenterYWithinMargins,
    Width,
    Height,
}

impl Attribute {
    /// All attributes, in declaration order
    pub fn all() -> &'static [Attribute] {
        use Attribute::*;
        &[
            Leading,
            Trailing,
            Left,
            Right,
            Top,
            Bottom,
            CenterX,
            CenterY,
            FirstBaseline,
            LastBaseline,
            LeadingMargin,
            TrailingMargin,
            LeftMargin,
            RightMargin,
            TopMargin,
            BottomMargin,
            CenterXWithinMargins,
            CenterYWithinMargins,
            Width,
            Height,
        ]
    }

    /// Whether this attribute is measured relative to an item's margins
    pub fn is_margin_relative(&self) -> bool {
        matches!(
            self,
            Attribute::LeadingMargin
                | Attribute::TrailingMargin
                | Attribute::LeftMargin
                | Attribute::RightMargin
                | Attribute::TopMargin
                | Attribute::BottomMargin
                | Attribute::CenterXWithinMargins
                | Attribute::CenterYWithinMargins
        )
    }
}
