//! Layout guides: the reduced-attribute layout kind
//!
//! A guide is an invisible rectangular region used to structure a layout
//! without adding a view. It supports the plain edges, centers and
//! dimensions; margin variants and baselines classify as unsupported.

use crate::anchor::Anchor;
use crate::attribute::Attribute;

use super::{Anchorable, ContainerHandle, Frame, ItemId};

/// An invisible layout region participating in constraints
#[derive(Debug)]
pub struct LayoutGuide {
    id: ItemId,
    name: String,
    frame: Frame,
    owner: Option<ContainerHandle>,
}

impl LayoutGuide {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ItemId::next(),
            name: name.into(),
            frame: Frame::new(),
            owner: None,
        }
    }

    pub(crate) fn set_owner(&mut self, owner: ContainerHandle) {
        self.owner = Some(owner);
    }
}

impl Anchorable for LayoutGuide {
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
        self.owner.as_ref()
    }

    fn anchor(&self, attribute: Attribute) -> Anchor {
        let label = format!("{}.{:?}", self.name, attribute);
        let frame = self.frame;
        match attribute {
            Attribute::Leading | Attribute::Left => {
                Anchor::horizontal(self.id, label, frame.x.into())
            }
            Attribute::Trailing | Attribute::Right => {
                Anchor::horizontal(self.id, label, frame.x + frame.width)
            }
            Attribute::CenterX => {
                Anchor::horizontal(self.id, label, frame.x + frame.width * 0.5)
            }
            Attribute::Top => Anchor::vertical(self.id, label, frame.y.into()),
            Attribute::Bottom => Anchor::vertical(self.id, label, frame.y + frame.height),
            Attribute::CenterY => {
                Anchor::vertical(self.id, label, frame.y + frame.height * 0.5)
            }
            Attribute::Width => Anchor::dimension(self.id, label, frame.width.into()),
            Attribute::Height => Anchor::dimension(self.id, label, frame.height.into()),
            _ => Anchor::Unsupported,
        }
    }
}
