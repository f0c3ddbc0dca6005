pub mod term;
pub mod constraint;

pub use term::{BinVar, LinExpr};
pub use constraint::{LinConstraint, Relation};
