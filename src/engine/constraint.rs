//! Constraint descriptors and builder parameters

use std::fmt;

use kasuari::{Strength, WeightedRelation};

/// Comparison between the two sides of a constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    Equal,
    GreaterOrEqual,
    LessOrEqual,
}

impl Relation {
    /// The kasuari relation at the given strength
    pub(crate) fn weighted(self, priority: Strength) -> WeightedRelation {
        match self {
            Relation::Equal => WeightedRelation::EQ(priority),
            Relation::GreaterOrEqual => WeightedRelation::GE(priority),
            Relation::LessOrEqual => WeightedRelation::LE(priority),
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relation::Equal => write!(f, "="),
            Relation::GreaterOrEqual => write!(f, ">="),
            Relation::LessOrEqual => write!(f, "<="),
        }
    }
}

/// Priority and activation applied to every constraint a builder produces
#[derive(Debug, Clone, Copy)]
pub struct ConstraintOptions {
    /// Arbitration weight for the solver; `Strength::REQUIRED` is the
    /// documented maximum and the default
    pub priority: Strength,
    /// Whether the constraint is registered with the engine on creation
    pub active: bool,
}

impl Default for ConstraintOptions {
    fn default() -> Self {
        Self {
            priority: Strength::REQUIRED,
            active: true,
        }
    }
}

impl ConstraintOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Strength) -> Self {
        self.priority = priority;
        self
    }

    /// Set whether the constraint activates on creation
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

/// Which side(s) of a container relationship use margin attributes
///
/// Layout guides have no margins; when pinning or centering a guide, disable
/// the item side with [`MarginUse::container_only`] or [`MarginUse::neither`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarginUse {
    /// Use the item's margin attributes rather than its actual edges
    pub item: bool,
    /// Use the container's margin attributes rather than its actual edges
    pub container: bool,
}

impl Default for MarginUse {
    fn default() -> Self {
        Self::both()
    }
}

impl MarginUse {
    pub fn both() -> Self {
        Self {
            item: true,
            container: true,
        }
    }

    pub fn neither() -> Self {
        Self {
            item: false,
            container: false,
        }
    }

    pub fn item_only() -> Self {
        Self {
            item: true,
            container: false,
        }
    }

    pub fn container_only() -> Self {
        Self {
            item: false,
            container: true,
        }
    }
}

/// One built layout relationship
///
/// Wraps the solver constraint together with the relation, priority and
/// activation state it was created with. Immutable; use
/// [`LayoutEngine::activate`](crate::engine::LayoutEngine::activate) and
/// [`deactivate`](crate::engine::LayoutEngine::deactivate) to toggle
/// registration after creation.
#[derive(Clone)]
pub struct LayoutConstraint {
    pub(crate) constraint: kasuari::Constraint,
    pub(crate) relation: Relation,
    pub(crate) priority: Strength,
    pub(crate) active: bool,
    pub(crate) description: String,
}

impl LayoutConstraint {
    pub fn relation(&self) -> Relation {
        self.relation
    }

    pub fn priority(&self) -> Strength {
        self.priority
    }

    /// Whether the constraint was registered with the engine on creation
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Human-readable form, e.g. `"u1.Width = 80"`
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for LayoutConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description)
    }
}

impl fmt::Debug for LayoutConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutConstraint")
            .field("description", &self.description)
            .field("relation", &self.relation)
            .field("priority", &self.priority)
            .field("active", &self.active)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_display() {
        assert_eq!(Relation::Equal.to_string(), "=");
        assert_eq!(Relation::GreaterOrEqual.to_string(), ">=");
        assert_eq!(Relation::LessOrEqual.to_string(), "<=");
    }

    #[test]
    fn test_default_options() {
        let options = ConstraintOptions::default();
        assert_eq!(options.priority, Strength::REQUIRED);
        assert!(options.active);
    }

    #[test]
    fn test_options_builders() {
        let options = ConstraintOptions::new()
            .with_priority(Strength::STRONG)
            .with_active(false);
        assert_eq!(options.priority, Strength::STRONG);
        assert!(!options.active);
    }

    #[test]
    fn test_margin_use_defaults_to_both() {
        let margins = MarginUse::default();
        assert!(margins.item);
        assert!(margins.container);
    }
}
