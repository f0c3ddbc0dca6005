// Errors raised by the model and the solver oracle

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SolverError {
    #[error("invalid bounds [{lower}, {upper}] for variable {index}")]
    InvalidBounds { index: usize, lower: f64, upper: f64 },
    #[error("constraint references unknown variable {0}")]
    UnknownVariable(usize),
    #[error("no solution available (status: {0})")]
    NoSolution(String),
    #[error("solver backend failure: {0}")]
    Backend(String),
}
