//! The layout engine: a wrapper around the kasuari Cassowary solver
//!
//! [`LayoutEngine`] owns the solver and the solved variable values. The
//! constraint builders (see [`builders`]) and the three primitive
//! constructors below translate anchors into solver constraints; activation
//! registers them with the solver immediately. The engine never owns the
//! layout items themselves; it only sees their variables.

pub mod builders;
pub mod constraint;
pub mod error;

pub use constraint::{ConstraintOptions, LayoutConstraint, MarginUse, Relation};
pub use error::EngineError;

use std::collections::{HashMap, HashSet};

use kasuari::{Solver, Strength, Variable};

use crate::anchor::{DimensionAnchor, PositionAnchor};
use crate::geometry::Rect;
use crate::item::Anchorable;

/// Wrapper around the kasuari solver with value readback
pub struct LayoutEngine {
    solver: Solver,
    /// Last known value per variable; variables the solver never reported
    /// read as zero
    values: HashMap<Variable, f64>,
    /// Variables already registered as edit variables
    edited: HashSet<Variable>,
}

impl LayoutEngine {
    pub fn new() -> Self {
        Self {
            solver: Solver::new(),
            values: HashMap::new(),
            edited: HashSet::new(),
        }
    }

    // ------------------------------------------------------------------
    // Primitive constraint constructors
    // ------------------------------------------------------------------

    /// Constrain a dimension to a constant: `anchor RELATION constant`
    pub fn dimension_constraint(
        &mut self,
        anchor: DimensionAnchor,
        relation: Relation,
        constant: f64,
        options: ConstraintOptions,
    ) -> Result<LayoutConstraint, EngineError> {
        let description = format!("{} {} {}", anchor.label, relation, constant);
        let constraint = anchor.expr | relation.weighted(options.priority) | constant;
        self.finish(constraint, relation, options, description)
    }

    /// Constrain two dimensions: `a RELATION b * multiplier + constant`
    pub fn dimension_pair_constraint(
        &mut self,
        a: DimensionAnchor,
        relation: Relation,
        b: DimensionAnchor,
        multiplier: f64,
        constant: f64,
        options: ConstraintOptions,
    ) -> Result<LayoutConstraint, EngineError> {
        let description = describe_pair(&a.label, relation, &b.label, multiplier, constant);
        let constraint =
            a.expr | relation.weighted(options.priority) | b.expr * multiplier + constant;
        self.finish(constraint, relation, options, description)
    }

    /// Constrain two positions on the same axis: `a RELATION b + constant`
    ///
    /// Callers guarantee axis compatibility; the builders validate it before
    /// reaching this point.
    pub fn position_pair_constraint(
        &mut self,
        a: PositionAnchor,
        relation: Relation,
        b: PositionAnchor,
        constant: f64,
        options: ConstraintOptions,
    ) -> Result<LayoutConstraint, EngineError> {
        let description = describe_pair(&a.label, relation, &b.label, 1.0, constant);
        let constraint = a.expr | relation.weighted(options.priority) | b.expr + constant;
        self.finish(constraint, relation, options, description)
    }

    fn finish(
        &mut self,
        constraint: kasuari::Constraint,
        relation: Relation,
        options: ConstraintOptions,
        description: String,
    ) -> Result<LayoutConstraint, EngineError> {
        let built = LayoutConstraint {
            constraint,
            relation,
            priority: options.priority,
            active: options.active,
            description,
        };
        if options.active {
            self.register(&built)?;
        }
        Ok(built)
    }

    // ------------------------------------------------------------------
    // Activation
    // ------------------------------------------------------------------

    /// Register a constraint with the solver
    pub fn activate(&mut self, constraint: &LayoutConstraint) -> Result<(), EngineError> {
        self.register(constraint)
    }

    /// Remove a previously registered constraint from the solver
    pub fn deactivate(&mut self, constraint: &LayoutConstraint) -> Result<(), EngineError> {
        self.solver
            .remove_constraint(&constraint.constraint)
            .map_err(|e| EngineError::from_remove(e, &constraint.description))
    }

    fn register(&mut self, constraint: &LayoutConstraint) -> Result<(), EngineError> {
        self.solver
            .add_constraint(constraint.constraint.clone())
            .map_err(|e| EngineError::from_add(e, &constraint.description))
    }

    // ------------------------------------------------------------------
    // Suggestions and readback
    // ------------------------------------------------------------------

    /// Suggest a value for a variable (edit variable at strong strength)
    pub fn suggest(&mut self, variable: Variable, value: f64) -> Result<(), EngineError> {
        if !self.edited.contains(&variable) {
            self.solver
                .add_edit_variable(variable, Strength::STRONG)
                .map_err(|e| EngineError::Internal(format!("failed to add edit variable: {}", e)))?;
            self.edited.insert(variable);
        }
        self.solver
            .suggest_value(variable, value)
            .map_err(|e| EngineError::Internal(format!("failed to suggest value: {}", e)))?;
        Ok(())
    }

    /// Suggest an item's origin
    pub fn suggest_origin<A: Anchorable + ?Sized>(
        &mut self,
        item: &A,
        x: f64,
        y: f64,
    ) -> Result<(), EngineError> {
        let frame = item.frame();
        self.suggest(frame.x(), x)?;
        self.suggest(frame.y(), y)
    }

    /// Suggest an item's size
    pub fn suggest_size<A: Anchorable + ?Sized>(
        &mut self,
        item: &A,
        width: f64,
        height: f64,
    ) -> Result<(), EngineError> {
        let frame = item.frame();
        self.suggest(frame.width(), width)?;
        self.suggest(frame.height(), height)
    }

    /// Pull the latest solution out of the solver
    pub fn solve(&mut self) {
        for (variable, value) in self.solver.fetch_changes() {
            self.values.insert(*variable, *value);
        }
    }

    /// Solved value of a variable (zero if the solver never reported it)
    pub fn value(&self, variable: Variable) -> f64 {
        self.values.get(&variable).copied().unwrap_or(0.0)
    }

    /// Solved frame of an item
    pub fn frame_of<A: Anchorable + ?Sized>(&self, item: &A) -> Rect {
        let frame = item.frame();
        Rect::new(
            self.value(frame.x()),
            self.value(frame.y()),
            self.value(frame.width()),
            self.value(frame.height()),
        )
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn describe_pair(a: &str, relation: Relation, b: &str, multiplier: f64, constant: f64) -> String {
    let mut description = format!("{} {} {}", a, relation, b);
    if multiplier != 1.0 {
        description.push_str(&format!(" * {}", multiplier));
    }
    if constant != 0.0 {
        description.push_str(&format!(" + {}", constant));
    }
    description
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::Attribute;
    use crate::item::View;

    const EPSILON: f64 = 0.001;

    #[test]
    fn test_dimension_constraint_solves() {
        let mut engine = LayoutEngine::new();
        let view = View::new("box");

        engine
            .dimension_constraint(
                view.width_anchor(),
                Relation::Equal,
                100.0,
                ConstraintOptions::default(),
            )
            .unwrap();
        engine.solve();

        assert!((engine.frame_of(&view).width - 100.0).abs() < EPSILON);
    }

    #[test]
    fn test_dimension_pair_constraint_solves() {
        let mut engine = LayoutEngine::new();
        let a = View::new("a");
        let b = View::new("b");

        // a.width = b.width * 2 + 10
        engine
            .dimension_pair_constraint(
                a.width_anchor(),
                Relation::Equal,
                b.width_anchor(),
                2.0,
                10.0,
                ConstraintOptions::default(),
            )
            .unwrap();
        engine.suggest_size(&b, 50.0, 0.0).unwrap();
        engine.solve();

        assert!((engine.frame_of(&a).width - 110.0).abs() < EPSILON);
    }

    #[test]
    fn test_position_pair_constraint_solves() {
        let mut engine = LayoutEngine::new();
        let a = View::new("a");
        let b = View::new("b");

        // b.left = a.left + 20
        let left_b = b.anchor(Attribute::Left).into_position().unwrap();
        let left_a = a.anchor(Attribute::Left).into_position().unwrap();
        engine
            .position_pair_constraint(
                left_b,
                Relation::Equal,
                left_a,
                20.0,
                ConstraintOptions::default(),
            )
            .unwrap();
        engine.suggest_origin(&a, 50.0, 0.0).unwrap();
        engine.solve();

        assert!((engine.frame_of(&b).x - 70.0).abs() < EPSILON);
    }

    #[test]
    fn test_inactive_constraint_is_not_registered() {
        let mut engine = LayoutEngine::new();
        let view = View::new("box");

        let constraint = engine
            .dimension_constraint(
                view.width_anchor(),
                Relation::Equal,
                100.0,
                ConstraintOptions::new().with_active(false),
            )
            .unwrap();
        engine.solve();
        assert!((engine.frame_of(&view).width).abs() < EPSILON);

        engine.activate(&constraint).unwrap();
        engine.solve();
        assert!((engine.frame_of(&view).width - 100.0).abs() < EPSILON);
    }

    #[test]
    fn test_deactivate_releases_constraint() {
        let mut engine = LayoutEngine::new();
        let view = View::new("box");

        let constraint = engine
            .dimension_constraint(
                view.width_anchor(),
                Relation::Equal,
                100.0,
                ConstraintOptions::default(),
            )
            .unwrap();
        engine.deactivate(&constraint).unwrap();

        // With the constraint gone, a conflicting width is accepted.
        engine
            .dimension_constraint(
                view.width_anchor(),
                Relation::Equal,
                40.0,
                ConstraintOptions::default(),
            )
            .unwrap();
        engine.solve();
        assert!((engine.frame_of(&view).width - 40.0).abs() < EPSILON);
    }

    #[test]
    fn test_deactivate_inactive_errors() {
        let mut engine = LayoutEngine::new();
        let view = View::new("box");

        let constraint = engine
            .dimension_constraint(
                view.width_anchor(),
                Relation::Equal,
                100.0,
                ConstraintOptions::new().with_active(false),
            )
            .unwrap();

        assert!(matches!(
            engine.deactivate(&constraint),
            Err(EngineError::NotActive { .. })
        ));
    }

    #[test]
    fn test_conflicting_required_constraints_error() {
        let mut engine = LayoutEngine::new();
        let view = View::new("box");

        engine
            .dimension_constraint(
                view.width_anchor(),
                Relation::Equal,
                100.0,
                ConstraintOptions::default(),
            )
            .unwrap();

        let result = engine.dimension_constraint(
            view.width_anchor(),
            Relation::Equal,
            200.0,
            ConstraintOptions::default(),
        );
        assert!(matches!(result, Err(EngineError::Unsatisfiable { .. })));
    }

    #[test]
    fn test_inequality_holds_against_suggestion() {
        let mut engine = LayoutEngine::new();
        let view = View::new("box");

        // width >= 50, then suggest 30
        engine
            .dimension_constraint(
                view.width_anchor(),
                Relation::GreaterOrEqual,
                50.0,
                ConstraintOptions::default(),
            )
            .unwrap();
        engine.suggest_size(&view, 30.0, 0.0).unwrap();
        engine.solve();

        assert!(engine.frame_of(&view).width >= 50.0 - EPSILON);
    }

    #[test]
    fn test_describe_pair_omits_identity_terms() {
        assert_eq!(
            describe_pair("a.Width", Relation::Equal, "b.Width", 1.0, 0.0),
            "a.Width = b.Width"
        );
        assert_eq!(
            describe_pair("a.Width", Relation::Equal, "b.Width", 1.5, 20.0),
            "a.Width = b.Width * 1.5 + 20"
        );
    }
}
