//! Error types for the layout engine
//!
//! These cover solver-side failures only: conflicting or duplicate
//! registrations and internal solver faults. Misuse of the builder API
//! (missing container, mixed axes, self-constraints) is a programmer error
//! and panics instead; see the crate-level documentation.

use kasuari::{AddConstraintError, RemoveConstraintError};
use thiserror::Error;

/// Errors reported by the host constraint solver
#[derive(Debug, Error)]
pub enum EngineError {
    /// The constraint conflicts with already-registered required constraints
    #[error("unsatisfiable constraint ({description}): conflicts with existing constraints")]
    Unsatisfiable { description: String },

    /// The exact constraint is already registered
    #[error("duplicate constraint ({description})")]
    Duplicate { description: String },

    /// Deactivation of a constraint that is not currently registered
    #[error("constraint is not active ({description})")]
    NotActive { description: String },

    /// Internal solver error
    #[error("internal solver error: {0}")]
    Internal(String),
}

impl EngineError {
    pub(crate) fn from_add(e: AddConstraintError, description: &str) -> Self {
        match e {
            AddConstraintError::UnsatisfiableConstraint => EngineError::Unsatisfiable {
                description: description.to_string(),
            },
            AddConstraintError::DuplicateConstraint => EngineError::Duplicate {
                description: description.to_string(),
            },
            AddConstraintError::InternalSolverError(msg) => {
                EngineError::Internal(format!("{} ({})", msg, description))
            }
        }
    }

    pub(crate) fn from_remove(e: RemoveConstraintError, description: &str) -> Self {
        match e {
            RemoveConstraintError::UnknownConstraint => EngineError::NotActive {
                description: description.to_string(),
            },
            RemoveConstraintError::InternalSolverError(msg) => {
                EngineError::Internal(format!("{} ({})", msg, description))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsatisfiable_display() {
        let err = EngineError::from_add(
            AddConstraintError::UnsatisfiableConstraint,
            "u1.Width = 80",
        );
        assert!(err.to_string().contains("unsatisfiable"));
        assert!(err.to_string().contains("u1.Width = 80"));
    }

    #[test]
    fn test_duplicate_display() {
        let err = EngineError::from_add(AddConstraintError::DuplicateConstraint, "a.Top = b.Top");
        assert!(err.to_string().contains("duplicate"));
    }
}
