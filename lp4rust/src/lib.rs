pub mod expr;
pub mod error;
pub mod model;
pub mod assignment;
pub mod solver;

pub use expr::{BinVar, LinExpr, LinConstraint, Relation};
pub use error::SolverError;
pub use model::{Model, Sense, VarDef};
pub use assignment::Assignment;
pub use solver::{MilpSolver, SolveStatus, GoodLpSolver, BACKEND_NAME, STATUS_UNBOUNDED};
