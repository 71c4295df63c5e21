//! Layout-bearing items
//!
//! Two concrete kinds participate in constraints: [`View`] (the full
//! attribute set, including margin and baseline variants) and [`LayoutGuide`]
//! (the reduced set: plain edges, centers and dimensions). Both implement the
//! [`Anchorable`] capability trait, which is what the constraint builders are
//! written against.
//!
//! Items own their four solver variables (a [`Frame`]) and are created and
//! dropped by the application; the engine only ever sees the variables.

pub mod guide;
pub mod view;

pub use guide::LayoutGuide;
pub use view::View;

use std::sync::atomic::{AtomicU64, Ordering};

use kasuari::Variable;

use crate::anchor::{Anchor, DimensionAnchor};
use crate::attribute::Attribute;
use crate::geometry::EdgeInsets;

/// Identity of a layout item
///
/// Drawn from a process-wide counter at construction, so two distinct items
/// are never equal regardless of their kind. The self-constraint guard
/// compares these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(u64);

static NEXT_ITEM_ID: AtomicU64 = AtomicU64::new(1);

impl ItemId {
    pub(crate) fn next() -> Self {
        ItemId(NEXT_ITEM_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// The four solver variables describing an item's rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub(crate) x: Variable,
    pub(crate) y: Variable,
    pub(crate) width: Variable,
    pub(crate) height: Variable,
}

impl Frame {
    pub(crate) fn new() -> Self {
        Self {
            x: Variable::new(),
            y: Variable::new(),
            width: Variable::new(),
            height: Variable::new(),
        }
    }

    pub fn x(&self) -> Variable {
        self.x
    }

    pub fn y(&self) -> Variable {
        self.y
    }

    pub fn width(&self) -> Variable {
        self.width
    }

    pub fn height(&self) -> Variable {
        self.height
    }
}

/// A snapshot of a container view, stamped into children on attachment
///
/// Holds the container's identity, frame variables and margins, which is
/// everything the pin/center builders need from the container side. Frames
/// are solver variables, so solved geometry cannot go stale; margins are
/// fixed at view construction. Baseline attributes are not available through
/// a handle.
#[derive(Debug, Clone)]
pub struct ContainerHandle {
    id: ItemId,
    name: String,
    frame: Frame,
    margins: EdgeInsets,
}

impl ContainerHandle {
    pub(crate) fn new(id: ItemId, name: String, frame: Frame, margins: EdgeInsets) -> Self {
        Self {
            id,
            name,
            frame,
            margins,
        }
    }

    pub fn item_id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// Classify an attribute against the container (view semantics, no baselines)
    pub fn anchor(&self, attribute: Attribute) -> Anchor {
        view_anchor(self.id, &self.name, self.frame, self.margins, None, attribute)
    }
}

/// Capability trait over the two layout-bearing kinds
///
/// Exposes identity, the frame variables, the (possibly absent) container,
/// and the attribute classifier. Constraint builders are generic over this
/// trait, which is what lets a view and a layout guide appear on either side
/// of the same constraint.
pub trait Anchorable {
    fn item_id(&self) -> ItemId;

    fn name(&self) -> &str;

    fn frame(&self) -> Frame;

    /// The container this item is attached to, if any
    fn container(&self) -> Option<&ContainerHandle>;

    /// Classify a symbolic attribute into an axis handle
    ///
    /// Pure mapping; attributes the kind does not support yield
    /// [`Anchor::Unsupported`]. Validation happens in the builders.
    fn anchor(&self, attribute: Attribute) -> Anchor;

    /// The item's width handle
    fn width_anchor(&self) -> DimensionAnchor {
        DimensionAnchor {
            item: self.item_id(),
            label: format!("{}.Width", self.name()),
            expr: self.frame().width.into(),
        }
    }

    /// The item's height handle
    fn height_anchor(&self) -> DimensionAnchor {
        DimensionAnchor {
            item: self.item_id(),
            label: format!("{}.Height", self.name()),
            expr: self.frame().height.into(),
        }
    }
}

/// Resolve a view-kind attribute to an anchor expression
///
/// Shared between [`View`] and [`ContainerHandle`]. `baselines` carries the
/// (first, last) baseline offsets when the caller has them; `None` makes the
/// baseline attributes unsupported.
pub(crate) fn view_anchor(
    id: ItemId,
    name: &str,
    frame: Frame,
    margins: EdgeInsets,
    baselines: Option<(f64, f64)>,
    attribute: Attribute,
) -> Anchor {
    let label = format!("{}.{:?}", name, attribute);
    let m = margins;
    match attribute {
        Attribute::Leading | Attribute::Left => Anchor::horizontal(id, label, frame.x.into()),
        Attribute::Trailing | Attribute::Right => {
            Anchor::horizontal(id, label, frame.x + frame.width)
        }
        Attribute::CenterX => Anchor::horizontal(id, label, frame.x + frame.width * 0.5),
        Attribute::LeadingMargin | Attribute::LeftMargin => {
            Anchor::horizontal(id, label, frame.x + m.left)
        }
        Attribute::TrailingMargin | Attribute::RightMargin => {
            Anchor::horizontal(id, label, frame.x + frame.width - m.right)
        }
        Attribute::CenterXWithinMargins => Anchor::horizontal(
            id,
            label,
            frame.x + frame.width * 0.5 + (m.left - m.right) * 0.5,
        ),
        Attribute::Top => Anchor::vertical(id, label, frame.y.into()),
        Attribute::Bottom => Anchor::vertical(id, label, frame.y + frame.height),
        Attribute::CenterY => Anchor::vertical(id, label, frame.y + frame.height * 0.5),
        Attribute::TopMargin => Anchor::vertical(id, label, frame.y + m.top),
        Attribute::BottomMargin => Anchor::vertical(id, label, frame.y + frame.height - m.bottom),
        Attribute::CenterYWithinMargins => Anchor::vertical(
            id,
            label,
            frame.y + frame.height * 0.5 + (m.top - m.bottom) * 0.5,
        ),
        Attribute::FirstBaseline => match baselines {
            Some((first, _)) => Anchor::vertical(id, label, frame.y + first),
            None => Anchor::Unsupported,
        },
        Attribute::LastBaseline => match baselines {
            Some((_, last)) => Anchor::vertical(id, label, frame.y + frame.height - last),
            None => Anchor::Unsupported,
        },
        Attribute::Width => Anchor::dimension(id, label, frame.width.into()),
        Attribute::Height => Anchor::dimension(id, label, frame.height.into()),
    }
}
