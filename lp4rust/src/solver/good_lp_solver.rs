// GoodLpSolver: MilpSolver backed by good_lp
//
// good_lp problems are consumed by solve(), so every optimize call rebuilds
// the backend problem from the stored Model. The backend is microlp, or
// HiGHS with the `highs` feature.

use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(feature = "highs")]
use good_lp::solvers::highs::highs as backend;
#[cfg(not(feature = "highs"))]
use good_lp::solvers::microlp::microlp as backend;
use good_lp::{
    constraint, variable, Constraint, Expression, ProblemVariables,
    ResolutionError, Solution, SolverModel, Variable,
};
use log::{debug, trace};

use super::milp_solver::{MilpSolver, SolveStatus, STATUS_UNBOUNDED};
use crate::error::SolverError;
use crate::expr::{BinVar, LinConstraint, LinExpr, Relation};
use crate::model::{Model, Sense};
use crate::Assignment;

/// Name of the good_lp backend compiled in
#[cfg(feature = "highs")]
pub const BACKEND_NAME: &str = "highs";
#[cfg(not(feature = "highs"))]
pub const BACKEND_NAME: &str = "microlp";

static GOOD_LP_SOLVE_COUNT: AtomicUsize = AtomicUsize::new(0);

pub struct GoodLpSolver {
    model: Model,
    status: SolveStatus,
    solution: Option<Assignment>,
}

impl GoodLpSolver {
    pub fn new() -> Self {
        GoodLpSolver {
            model: Model::new(),
            status: SolveStatus::Unsolved,
            solution: None,
        }
    }

    /// Wrap an already populated model
    pub fn from_model(model: Model) -> Self {
        GoodLpSolver {
            model,
            status: SolveStatus::Unsolved,
            solution: None,
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn get_solve_count() -> usize {
        GOOD_LP_SOLVE_COUNT.load(Ordering::SeqCst)
    }

    pub fn reset_solve_count() {
        GOOD_LP_SOLVE_COUNT.store(0, Ordering::SeqCst);
    }

    fn to_expression(expr: &LinExpr, columns: &[Variable]) -> Expression {
        let mut e = Expression::with_capacity(expr.terms().len());
        for &(coef, var) in expr.terms() {
            e.add_mul(coef, columns[var.index()]);
        }
        e
    }

    fn to_constraint(c: &LinConstraint, columns: &[Variable]) -> Constraint {
        let lhs = Self::to_expression(c.expr(), columns);
        let rhs = Expression::from_other_affine(c.normalized_rhs());
        match c.relation() {
            Relation::Le => constraint::leq(lhs, rhs),
            Relation::Eq => constraint::eq(lhs, rhs),
            Relation::Ge => constraint::geq(lhs, rhs),
        }
    }

    /// Build the backend problem from the model and solve it
    fn run_backend(&self) -> Result<(SolveStatus, Option<Assignment>), SolverError> {
        // Rows without terms are decided here; backends disagree on them
        for c in self.model.constraints().iter().filter(|c| c.expr().is_constant()) {
            if c.is_satisfied(&[]) != Some(true) {
                debug!("constant constraint 0 {} {} is violated", c.relation(), c.normalized_rhs());
                return Ok((SolveStatus::Infeasible, None));
            }
        }

        let mut problem_vars = ProblemVariables::new();
        let columns: Vec<Variable> = self
            .model
            .vars()
            .iter()
            .map(|def| problem_vars.add(variable().integer().min(def.lower).max(def.upper)))
            .collect();

        let objective = Self::to_expression(&self.model.objective(), &columns);
        let unsolved = match self.model.sense() {
            Sense::Maximize => problem_vars.maximise(objective),
            Sense::Minimize => problem_vars.minimise(objective),
        };

        let mut problem = unsolved.using(backend);
        for c in self.model.constraints().iter().filter(|c| !c.expr().is_constant()) {
            problem = problem.with(Self::to_constraint(c, &columns));
        }

        match problem.solve() {
            Ok(solution) => {
                let values = columns.iter().map(|&col| solution.value(col)).collect();
                Ok((SolveStatus::Optimal, Some(Assignment::new(values))))
            }
            Err(ResolutionError::Infeasible) => Ok((SolveStatus::Infeasible, None)),
            Err(ResolutionError::Unbounded) => Ok((SolveStatus::Other(STATUS_UNBOUNDED), None)),
            Err(e) => Err(SolverError::Backend(e.to_string())),
        }
    }
}

impl Default for GoodLpSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl MilpSolver for GoodLpSolver {
    fn add_binary_var(&mut self, lower: f64, upper: f64, objective: f64) -> Result<BinVar, SolverError> {
        self.model.add_binary_var(lower, upper, objective)
    }

    fn add_constraint(&mut self, constraint: LinConstraint) -> Result<(), SolverError> {
        self.model.add_constraint(constraint)
    }

    fn set_sense(&mut self, sense: Sense) {
        self.model.set_sense(sense);
    }

    fn optimize(&mut self) -> Result<SolveStatus, SolverError> {
        GOOD_LP_SOLVE_COUNT.fetch_add(1, Ordering::SeqCst);
        self.solution = None;
        self.status = SolveStatus::Unsolved;

        let (status, solution) = self.run_backend()?;
        trace!(
            "optimize: {} vars, {} constraints -> {}",
            self.model.num_vars(),
            self.model.num_constraints(),
            status
        );
        self.status = status;
        self.solution = solution;
        Ok(status)
    }

    fn status(&self) -> SolveStatus {
        self.status
    }

    fn value(&self, var: BinVar) -> Result<f64, SolverError> {
        let assignment = self.assignment()?;
        assignment
            .value(var)
            .ok_or(SolverError::UnknownVariable(var.index()))
    }

    fn assignment(&self) -> Result<&Assignment, SolverError> {
        self.solution
            .as_ref()
            .ok_or_else(|| SolverError::NoSolution(self.status.to_string()))
    }

    fn reset(&mut self) {
        self.solution = None;
        self.status = SolveStatus::Unsolved;
    }

    fn num_vars(&self) -> usize {
        self.model.num_vars()
    }

    fn num_constraints(&self) -> usize {
        self.model.num_constraints()
    }
}
