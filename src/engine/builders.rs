//! Fluent constraint builders
//!
//! Each builder classifies its symbolic attributes, validates the result,
//! and expands into one or more primitive constraints. Validation failures
//! are programmer errors and panic; only solver-side rejections surface as
//! [`EngineError`].

use crate::anchor::{Anchor, PositionAnchor};
use crate::attribute::Attribute;
use crate::geometry::EdgeInsets;
use crate::item::Anchorable;

use super::{ConstraintOptions, EngineError, LayoutConstraint, LayoutEngine, MarginUse, Relation};

impl LayoutEngine {
    /// Pin an item's four edges to its container's edges, with insets
    ///
    /// Produces four position constraints: top and left offset inward by the
    /// matching inset, bottom and right offset by its negation. The margin
    /// flags pick margin attributes over actual edges per side.
    ///
    /// Panics if the item has no container, or if a margin flag selects an
    /// attribute the item's kind does not support (layout guides have no
    /// margins).
    pub fn pin_to_container<A: Anchorable + ?Sized>(
        &mut self,
        item: &A,
        insets: EdgeInsets,
        margins: MarginUse,
        options: ConstraintOptions,
    ) -> Result<[LayoutConstraint; 4], EngineError> {
        let container = match item.container() {
            Some(container) => container.clone(),
            None => panic!("attempt to pin '{}', which has no container", item.name()),
        };

        let (item_top, item_left, item_bottom, item_right) = edge_attributes(margins.item);
        let (cont_top, cont_left, cont_bottom, cont_right) = edge_attributes(margins.container);

        let top = self.position_pair_constraint(
            position(item.anchor(item_top), item_top, item.name()),
            Relation::Equal,
            position(container.anchor(cont_top), cont_top, container.name()),
            insets.top,
            options,
        )?;
        let left = self.position_pair_constraint(
            position(item.anchor(item_left), item_left, item.name()),
            Relation::Equal,
            position(container.anchor(cont_left), cont_left, container.name()),
            insets.left,
            options,
        )?;
        let bottom = self.position_pair_constraint(
            position(item.anchor(item_bottom), item_bottom, item.name()),
            Relation::Equal,
            position(container.anchor(cont_bottom), cont_bottom, container.name()),
            -insets.bottom,
            options,
        )?;
        let right = self.position_pair_constraint(
            position(item.anchor(item_right), item_right, item.name()),
            Relation::Equal,
            position(container.anchor(cont_right), cont_right, container.name()),
            -insets.right,
            options,
        )?;

        Ok([top, left, bottom, right])
    }

    /// Center an item in its container
    ///
    /// Produces two constraints on center-X and center-Y; margin flags pick
    /// the within-margins centers. Panics if the item has no container.
    pub fn center_in_container<A: Anchorable + ?Sized>(
        &mut self,
        item: &A,
        margins: MarginUse,
        options: ConstraintOptions,
    ) -> Result<[LayoutConstraint; 2], EngineError> {
        let container = match item.container() {
            Some(container) => container.clone(),
            None => panic!("attempt to center '{}', which has no container", item.name()),
        };

        let (item_x, item_y) = center_attributes(margins.item);
        let (cont_x, cont_y) = center_attributes(margins.container);

        let x = self.position_pair_constraint(
            position(item.anchor(item_x), item_x, item.name()),
            Relation::Equal,
            position(container.anchor(cont_x), cont_x, container.name()),
            0.0,
            options,
        )?;
        let y = self.position_pair_constraint(
            position(item.anchor(item_y), item_y, item.name()),
            Relation::Equal,
            position(container.anchor(cont_y), cont_y, container.name()),
            0.0,
            options,
        )?;

        Ok([x, y])
    }

    /// Constrain a width or height to a constant
    ///
    /// Panics if the attribute does not classify as a size attribute.
    pub fn constrain_size<A: Anchorable + ?Sized>(
        &mut self,
        attribute: Attribute,
        item: &A,
        relation: Relation,
        constant: f64,
        options: ConstraintOptions,
    ) -> Result<LayoutConstraint, EngineError> {
        let anchor = match item.anchor(attribute) {
            Anchor::Dimension(anchor) => anchor,
            _ => panic!(
                "attribute {:?} of '{}' is not a size attribute",
                attribute,
                item.name()
            ),
        };
        self.dimension_constraint(anchor, relation, constant, options)
    }

    /// Constrain an item's aspect ratio (width divided by height)
    pub fn constrain_aspect_ratio<A: Anchorable + ?Sized>(
        &mut self,
        item: &A,
        relation: Relation,
        ratio: f64,
        options: ConstraintOptions,
    ) -> Result<LayoutConstraint, EngineError> {
        self.dimension_pair_constraint(
            item.width_anchor(),
            relation,
            item.height_anchor(),
            ratio,
            0.0,
            options,
        )
    }

    /// Constrain the same size attribute of two items:
    /// `item1 RELATION item2 * multiplier + constant`
    ///
    /// Panics if the attribute does not classify as a size attribute, or if
    /// both items are the same object.
    pub fn constrain_size_to<A: Anchorable + ?Sized, B: Anchorable + ?Sized>(
        &mut self,
        attribute: Attribute,
        item1: &A,
        relation: Relation,
        item2: &B,
        multiplier: f64,
        constant: f64,
        options: ConstraintOptions,
    ) -> Result<LayoutConstraint, EngineError> {
        let anchor1 = match item1.anchor(attribute) {
            Anchor::Dimension(anchor) => anchor,
            _ => panic!(
                "attribute {:?} of '{}' is not a size attribute",
                attribute,
                item1.name()
            ),
        };
        if item1.item_id() == item2.item_id() {
            panic!(
                "attempt to constrain the size of '{}' relative to itself",
                item1.name()
            );
        }
        let anchor2 = match item2.anchor(attribute) {
            Anchor::Dimension(anchor) => anchor,
            _ => panic!(
                "attribute {:?} is not supported by '{}'",
                attribute,
                item2.name()
            ),
        };
        self.dimension_pair_constraint(anchor1, relation, anchor2, multiplier, constant, options)
    }

    /// Align two items on compatible positional attributes:
    /// `item1.attribute1 RELATION item2.attribute2 + constant`
    ///
    /// Panics if `attribute1` is not positional, if either attribute is
    /// unsupported by its item's kind, or if the two attributes classify to
    /// different axes.
    pub fn align<A: Anchorable + ?Sized, B: Anchorable + ?Sized>(
        &mut self,
        item1: &A,
        attribute1: Attribute,
        relation: Relation,
        item2: &B,
        attribute2: Attribute,
        constant: f64,
        options: ConstraintOptions,
    ) -> Result<LayoutConstraint, EngineError> {
        let anchor1 = item1.anchor(attribute1);
        let anchor2 = item2.anchor(attribute2);

        let (a, b) = match (anchor1, anchor2) {
            (Anchor::Horizontal(a), Anchor::Horizontal(b))
            | (Anchor::Vertical(a), Anchor::Vertical(b)) => (a, b),
            (Anchor::Dimension(_), _) => panic!(
                "attribute {:?} of '{}' is not a positional attribute",
                attribute1,
                item1.name()
            ),
            (Anchor::Unsupported, _) => panic!(
                "attribute {:?} is not supported by '{}'",
                attribute1,
                item1.name()
            ),
            (_, Anchor::Unsupported) => panic!(
                "attribute {:?} is not supported by '{}'",
                attribute2,
                item2.name()
            ),
            _ => panic!(
                "incompatible attributes ({:?} on '{}', {:?} on '{}')",
                attribute1,
                item1.name(),
                attribute2,
                item2.name()
            ),
        };
        self.position_pair_constraint(a, relation, b, constant, options)
    }

    /// Arrange `item` horizontally after `other`:
    /// `item.leading RELATION other.trailing + gap`
    pub fn place_after<A: Anchorable + ?Sized, B: Anchorable + ?Sized>(
        &mut self,
        item: &A,
        other: &B,
        relation: Relation,
        gap: f64,
        options: ConstraintOptions,
    ) -> Result<LayoutConstraint, EngineError> {
        self.align(
            item,
            Attribute::Leading,
            relation,
            other,
            Attribute::Trailing,
            gap,
            options,
        )
    }

    /// Arrange `item` horizontally before `other`; exact mirror of
    /// [`place_after`](Self::place_after) with the operands swapped
    pub fn place_before<A: Anchorable + ?Sized, B: Anchorable + ?Sized>(
        &mut self,
        item: &A,
        other: &B,
        relation: Relation,
        gap: f64,
        options: ConstraintOptions,
    ) -> Result<LayoutConstraint, EngineError> {
        self.place_after(other, item, relation, gap, options)
    }

    /// Arrange `item` vertically below `other`:
    /// `item.top RELATION other.bottom + gap`
    pub fn place_below<A: Anchorable + ?Sized, B: Anchorable + ?Sized>(
        &mut self,
        item: &A,
        other: &B,
        relation: Relation,
        gap: f64,
        options: ConstraintOptions,
    ) -> Result<LayoutConstraint, EngineError> {
        self.align(
            item,
            Attribute::Top,
            relation,
            other,
            Attribute::Bottom,
            gap,
            options,
        )
    }

    /// Arrange `item` vertically above `other`; exact mirror of
    /// [`place_below`](Self::place_below) with the operands swapped
    pub fn place_above<A: Anchorable + ?Sized, B: Anchorable + ?Sized>(
        &mut self,
        item: &A,
        other: &B,
        relation: Relation,
        gap: f64,
        options: ConstraintOptions,
    ) -> Result<LayoutConstraint, EngineError> {
        self.place_below(other, item, relation, gap, options)
    }
}

fn edge_attributes(use_margins: bool) -> (Attribute, Attribute, Attribute, Attribute) {
    if use_margins {
        (
            Attribute::TopMargin,
            Attribute::LeftMargin,
            Attribute::BottomMargin,
            Attribute::RightMargin,
        )
    } else {
        (
            Attribute::Top,
            Attribute::Left,
            Attribute::Bottom,
            Attribute::Right,
        )
    }
}

fn center_attributes(use_margins: bool) -> (Attribute, Attribute) {
    if use_margins {
        (
            Attribute::CenterXWithinMargins,
            Attribute::CenterYWithinMargins,
        )
    } else {
        (Attribute::CenterX, Attribute::CenterY)
    }
}

fn position(anchor: Anchor, attribute: Attribute, name: &str) -> PositionAnchor {
    match anchor {
        Anchor::Horizontal(anchor) | Anchor::Vertical(anchor) => anchor,
        Anchor::Dimension(_) => panic!(
            "attribute {:?} of '{}' is not a positional attribute",
            attribute, name
        ),
        Anchor::Unsupported => {
            panic!("attribute {:?} is not supported by '{}'", attribute, name)
        }
    }
}
