// Model: variables, constraints and objective of a binary linear program

use std::fmt;

use crate::error::SolverError;
use crate::expr::{BinVar, LinConstraint, LinExpr};

/// Objective direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sense {
    Maximize,
    #[default]
    Minimize,
}

impl fmt::Display for Sense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sense::Maximize => write!(f, "maximize"),
            Sense::Minimize => write!(f, "minimize"),
        }
    }
}

/// Column data of one variable
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VarDef {
    pub lower: f64,
    pub upper: f64,
    pub objective: f64,
}

/// Model container: holds variables, constraints and the objective sense
#[derive(Debug, Clone, Default)]
pub struct Model {
    vars: Vec<VarDef>,
    constraints: Vec<LinConstraint>,
    sense: Sense,
}

impl Model {
    pub fn new() -> Self {
        Model {
            vars: vec![],
            constraints: vec![],
            sense: Sense::default(),
        }
    }

    /// Add a binary variable with bounds and objective coefficient.
    /// Bounds must be finite, ordered and inside [0, 1].
    pub fn add_binary_var(&mut self, lower: f64, upper: f64, objective: f64) -> Result<BinVar, SolverError> {
        let index = self.vars.len();
        let in_range = |b: f64| b.is_finite() && (0.0..=1.0).contains(&b);
        if !in_range(lower) || !in_range(upper) || lower > upper || !objective.is_finite() {
            return Err(SolverError::InvalidBounds { index, lower, upper });
        }
        self.vars.push(VarDef { lower, upper, objective });
        Ok(BinVar::new(index))
    }

    pub fn add_constraint(&mut self, constraint: LinConstraint) -> Result<(), SolverError> {
        if let Some(var) = constraint.vars().find(|v| v.index() >= self.vars.len()) {
            return Err(SolverError::UnknownVariable(var.index()));
        }
        self.constraints.push(constraint);
        Ok(())
    }

    pub fn set_sense(&mut self, sense: Sense) {
        self.sense = sense;
    }

    pub fn sense(&self) -> Sense {
        self.sense
    }

    pub fn num_vars(&self) -> usize {
        self.vars.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn var(&self, var: BinVar) -> Option<&VarDef> {
        self.vars.get(var.index())
    }

    pub fn vars(&self) -> &[VarDef] {
        &self.vars
    }

    pub fn constraints(&self) -> &[LinConstraint] {
        &self.constraints
    }

    /// Objective as a linear expression over all variables
    pub fn objective(&self) -> LinExpr {
        let mut expr = LinExpr::constant(0.0);
        for (index, def) in self.vars.iter().enumerate() {
            if def.objective != 0.0 {
                expr.add_term(def.objective, BinVar::new(index));
            }
        }
        expr
    }
}
