//! Axis handles produced by attribute classification
//!
//! Classifying an [`Attribute`](crate::attribute::Attribute) against a layout
//! item yields an [`Anchor`]: a horizontal position, a vertical position, a
//! dimension, or an `Unsupported` marker when the item's kind does not carry
//! that attribute. Builders check anchor compatibility before handing the
//! wrapped solver expressions to the engine; mixing axis categories is a
//! usage error caught there, not here.

use kasuari::Expression;

use crate::item::ItemId;

/// A positional handle bound to one item and one axis
///
/// The expression is the attribute resolved against the item's frame
/// variables, e.g. trailing = x + width.
#[derive(Debug, Clone)]
pub struct PositionAnchor {
    pub(crate) item: ItemId,
    pub(crate) label: String,
    pub(crate) expr: Expression,
}

impl PositionAnchor {
    /// Identity of the item this anchor is bound to
    pub fn item(&self) -> ItemId {
        self.item
    }

    /// Display label, e.g. `"u1.Leading"`
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// A size handle (width or height) bound to one item
#[derive(Debug, Clone)]
pub struct DimensionAnchor {
    pub(crate) item: ItemId,
    pub(crate) label: String,
    pub(crate) expr: Expression,
}

impl DimensionAnchor {
    /// Identity of the item this anchor is bound to
    pub fn item(&self) -> ItemId {
        self.item
    }

    /// Display label, e.g. `"u1.Width"`
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Classifier output: the axis category of an attribute on a concrete item
#[derive(Debug, Clone)]
pub enum Anchor {
    /// A horizontal position (leading, left, center-X, ...)
    Horizontal(PositionAnchor),
    /// A vertical position (top, bottom, baseline, center-Y, ...)
    Vertical(PositionAnchor),
    /// A size (width or height)
    Dimension(DimensionAnchor),
    /// The item's kind does not support the attribute
    Unsupported,
}

impl Anchor {
    pub(crate) fn horizontal(item: ItemId, label: String, expr: Expression) -> Self {
        Anchor::Horizontal(PositionAnchor { item, label, expr })
    }

    pub(crate) fn vertical(item: ItemId, label: String, expr: Expression) -> Self {
        Anchor::Vertical(PositionAnchor { item, label, expr })
    }

    pub(crate) fn dimension(item: ItemId, label: String, expr: Expression) -> Self {
        Anchor::Dimension(DimensionAnchor { item, label, expr })
    }

    /// Whether two anchors belong to the same axis category
    pub fn same_axis(&self, other: &Anchor) -> bool {
        matches!(
            (self, other),
            (Anchor::Horizontal(_), Anchor::Horizontal(_))
                | (Anchor::Vertical(_), Anchor::Vertical(_))
                | (Anchor::Dimension(_), Anchor::Dimension(_))
                | (Anchor::Unsupported, Anchor::Unsupported)
        )
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, Anchor::Horizontal(_))
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Anchor::Vertical(_))
    }

    /// Whether this anchor is a position on either axis
    pub fn is_position(&self) -> bool {
        self.is_horizontal() || self.is_vertical()
    }

    pub fn is_dimension(&self) -> bool {
        matches!(self, Anchor::Dimension(_))
    }

    /// Extract the positional handle, if this is one
    pub fn into_position(self) -> Option<PositionAnchor> {
        match self {
            Anchor::Horizontal(p) | Anchor::Vertical(p) => Some(p),
            _ => None,
        }
    }

    /// Extract the dimension handle, if this is one
    pub fn into_dimension(self) -> Option<DimensionAnchor> {
        match self {
            Anchor::Dimension(d) => Some(d),
            _ => None,
        }
    }
}
