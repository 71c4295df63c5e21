//! Views: the full-attribute layout kind
//!
//! A view supports every symbolic attribute, carries layout margins and
//! baseline offsets, and can own subviews and layout guides. Attaching a
//! child stamps a [`ContainerHandle`] into it, which is what the
//! pin/center builders resolve the container side against.

use crate::anchor::Anchor;
use crate::attribute::Attribute;
use crate::geometry::EdgeInsets;

use super::{view_anchor, Anchorable, ContainerHandle, Frame, ItemId, LayoutGuide};

/// A visible rectangular region participating in constraints
#[derive(Debug)]
pub struct View {
    id: ItemId,
    name: String,
    frame: Frame,
    margins: EdgeInsets,
    first_baseline_offset: f64,
    last_baseline_offset: f64,
    superview: Option<ContainerHandle>,
    subviews: Vec<View>,
    guides: Vec<LayoutGuide>,
}

impl View {
    /// The standard distance between most UI elements
    pub const STANDARD_SPACING: f64 = 8.0;

    /// Create a view with standard margins and zero baseline offsets
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ItemId::next(),
            name: name.into(),
            frame: Frame::new(),
            margins: EdgeInsets::uniform(Self::STANDARD_SPACING),
            first_baseline_offset: 0.0,
            last_baseline_offset: 0.0,
            superview: None,
            subviews: vec![],
            guides: vec![],
        }
    }

    /// Set the layout margins
    ///
    /// Margins are fixed for the view's lifetime; set them before attaching
    /// subviews or guides so container handles see the final values.
    pub fn with_margins(mut self, margins: EdgeInsets) -> Self {
        self.margins = margins;
        self
    }

    /// Set the baseline offsets: first measured down from the top edge,
    /// last measured up from the bottom edge
    pub fn with_baseline_offsets(mut self, first: f64, last: f64) -> Self {
        self.first_baseline_offset = first;
        self.last_baseline_offset = last;
        self
    }

    pub fn margins(&self) -> EdgeInsets {
        self.margins
    }

    /// Attach a subview; the child's container becomes this view
    pub fn add_subview(&mut self, mut child: View) -> &mut View {
        child.superview = Some(self.container_handle());
        self.subviews.push(child);
        self.subviews.last_mut().expect("just pushed")
    }

    /// Attach a layout guide; the guide's container becomes this view
    pub fn add_layout_guide(&mut self, mut guide: LayoutGuide) -> &mut LayoutGuide {
        guide.set_owner(self.container_handle());
        self.guides.push(guide);
        self.guides.last_mut().expect("just pushed")
    }

    pub fn subviews(&self) -> &[View] {
        &self.subviews
    }

    pub fn layout_guides(&self) -> &[LayoutGuide] {
        &self.guides
    }

    /// Find a view by name anywhere in this subtree (self included)
    pub fn subview(&self, name: &str) -> Option<&View> {
        if self.name == name {
            return Some(self);
        }
        self.subviews.iter().find_map(|child| child.subview(name))
    }

    /// Find a layout guide by name anywhere in this subtree
    pub fn layout_guide(&self, name: &str) -> Option<&LayoutGuide> {
        if let Some(guide) = self.guides.iter().find(|g| g.name() == name) {
            return Some(guide);
        }
        self.subviews
            .iter()
            .find_map(|child| child.layout_guide(name))
    }

    fn container_handle(&self) -> ContainerHandle {
        ContainerHandle::new(self.id, self.name.clone(), self.frame, self.margins)
    }
}

impl Anchorable for View {
    fn item_id(&self) -> ItemId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn frame(&self) -> Frame {
        self.frame
    }

    fn container(&self) -> Option<&ContainerHandle> {
        self.superview.as_ref()
    }

    fn anchor(&self, attribute: Attribute) -> Anchor {
        view_anchor(
            self.id,
            &self.name,
            self.frame,
            self.margins,
            Some((self.first_baseline_offset, self.last_baseline_offset)),
            attribute,
        )
    }
}
