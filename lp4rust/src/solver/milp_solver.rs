// MilpSolver: the solver oracle interface

use std::fmt;

use crate::error::SolverError;
use crate::expr::{BinVar, LinConstraint};
use crate::model::Sense;
use crate::Assignment;

/// Status code reported for an unbounded model
pub const STATUS_UNBOUNDED: i32 = 5;

/// Status of the last optimize call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// Never optimized, or reset since the last optimize
    Unsolved,
    Optimal,
    Infeasible,
    /// Any other terminal status, with its numeric code
    Other(i32),
}

impl SolveStatus {
    pub fn is_optimal(&self) -> bool {
        matches!(self, SolveStatus::Optimal)
    }

    pub fn is_infeasible(&self) -> bool {
        matches!(self, SolveStatus::Infeasible)
    }
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveStatus::Unsolved => write!(f, "unsolved"),
            SolveStatus::Optimal => write!(f, "optimal"),
            SolveStatus::Infeasible => write!(f, "infeasible"),
            SolveStatus::Other(code) => write!(f, "status code {}", code),
        }
    }
}

/// Incremental MILP solver over binary variables.
///
/// The model lives inside the solver. Variables and constraints may be added
/// between optimize calls; `reset` drops the cached solution but keeps the
/// model, so a found solution can be cut off and the model re-solved.
pub trait MilpSolver {
    /// Add a binary variable with bounds and objective coefficient
    fn add_binary_var(&mut self, lower: f64, upper: f64, objective: f64) -> Result<BinVar, SolverError>;

    /// Add a linear constraint over existing variables
    fn add_constraint(&mut self, constraint: LinConstraint) -> Result<(), SolverError>;

    fn set_sense(&mut self, sense: Sense);

    /// Solve the current model.
    /// Terminal outcomes (including infeasibility) come back as a status;
    /// Err is reserved for faults inside the backend.
    fn optimize(&mut self) -> Result<SolveStatus, SolverError>;

    fn status(&self) -> SolveStatus;

    /// Value of a variable in the last optimal solution
    fn value(&self, var: BinVar) -> Result<f64, SolverError>;

    /// Full assignment of the last optimal solution
    fn assignment(&self) -> Result<&Assignment, SolverError>;

    /// Clear the solution cache, keeping variables and constraints
    fn reset(&mut self);

    fn num_vars(&self) -> usize;

    fn num_constraints(&self) -> usize;
}
