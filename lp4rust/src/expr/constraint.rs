// Constraint: Relation, LinConstraint

use std::fmt;

use super::term::{BinVar, LinExpr};

/// Absolute slack allowed when evaluating a constraint on floating values
const FEASIBILITY_TOL: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    Le,
    Eq,
    Ge,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relation::Le => write!(f, "<="),
            Relation::Eq => write!(f, "=="),
            Relation::Ge => write!(f, ">="),
        }
    }
}

/// Linear constraint: expr (<= | == | >=) rhs
#[derive(Debug, Clone, PartialEq)]
pub struct LinConstraint {
    expr: LinExpr,
    relation: Relation,
    rhs: f64,
}

impl LinConstraint {
    pub fn new(expr: LinExpr, relation: Relation, rhs: f64) -> Self {
        LinConstraint { expr, relation, rhs }
    }

    /// No-good cut over the variables that are 1 in a found solution:
    /// Σ_{x ∈ vars} x <= |vars| - 1.
    /// Any assignment that keeps all of them at 1 is excluded.
    pub fn no_good(vars: &[BinVar]) -> Self {
        let expr: LinExpr = vars.iter().sum();
        LinConstraint::new(expr, Relation::Le, vars.len() as f64 - 1.0)
    }

    pub fn expr(&self) -> &LinExpr {
        &self.expr
    }

    pub fn relation(&self) -> Relation {
        self.relation
    }

    pub fn rhs(&self) -> f64 {
        self.rhs
    }

    /// Right-hand side with the expression's constant moved across
    pub fn normalized_rhs(&self) -> f64 {
        self.rhs - self.expr.b()
    }

    pub fn vars(&self) -> impl Iterator<Item = BinVar> + '_ {
        self.expr.terms().iter().map(|&(_, v)| v)
    }

    /// Check the constraint against variable values indexed by BinVar.
    /// Returns None if a referenced variable has no value.
    pub fn is_satisfied(&self, values: &[f64]) -> Option<bool> {
        let lhs = self.expr.eval(values)?;
        Some(match self.relation {
            Relation::Le => lhs <= self.rhs + FEASIBILITY_TOL,
            Relation::Eq => (lhs - self.rhs).abs() <= FEASIBILITY_TOL,
            Relation::Ge => lhs >= self.rhs - FEASIBILITY_TOL,
        })
    }
}

impl LinExpr {
    pub fn le(self, rhs: f64) -> LinConstraint {
        LinConstraint::new(self, Relation::Le, rhs)
    }

    pub fn eq(self, rhs: f64) -> LinConstraint {
        LinConstraint::new(self, Relation::Eq, rhs)
    }

    pub fn ge(self, rhs: f64) -> LinConstraint {
        LinConstraint::new(self, Relation::Ge, rhs)
    }
}
