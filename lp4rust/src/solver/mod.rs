pub mod milp_solver;
pub mod good_lp_solver;

pub use milp_solver::{MilpSolver, SolveStatus, STATUS_UNBOUNDED};
pub use good_lp_solver::{GoodLpSolver, BACKEND_NAME};
