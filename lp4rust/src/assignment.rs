// Assignment: variable values reported by a solve

use crate::expr::BinVar;

/// Dense variable values, indexed by BinVar
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assignment {
    values: Vec<f64>,
}

impl Assignment {
    pub fn new(values: Vec<f64>) -> Self {
        Assignment { values }
    }

    pub fn value(&self, var: BinVar) -> Option<f64> {
        self.values.get(var.index()).copied()
    }

    /// True iff the variable's value exceeds the tolerance
    pub fn is_one(&self, var: BinVar, tolerance: f64) -> bool {
        self.value(var).map_or(false, |v| v > tolerance)
    }

    /// Variables from `vars` whose value exceeds the tolerance, in input order
    pub fn ones(&self, vars: &[BinVar], tolerance: f64) -> Vec<BinVar> {
        vars.iter().copied().filter(|&v| self.is_one(v, tolerance)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_value() {
        let a = Assignment::new(vec![0.0, 1.0]);
        assert_eq!(a.value(BinVar::new(1)), Some(1.0));
        assert_eq!(a.value(BinVar::new(2)), None);
        assert_eq!(Assignment::default().value(BinVar::new(0)), None);
    }

    #[test]
    fn test_assignment_is_one_tolerance() {
        let a = Assignment::new(vec![0.995, 0.99, 0.3, 1.0]);
        assert!(a.is_one(BinVar::new(0), 0.99));
        assert!(!a.is_one(BinVar::new(1), 0.99));
        assert!(!a.is_one(BinVar::new(2), 0.99));
        assert!(!a.is_one(BinVar::new(9), 0.99));
    }

    #[test]
    fn test_assignment_ones() {
        let a = Assignment::new(vec![1.0, 0.0, 1.0, 1.0]);
        let vars: Vec<BinVar> = (0..3).map(BinVar::new).collect();
        assert_eq!(a.ones(&vars, 0.99), vec![BinVar::new(0), BinVar::new(2)]);
    }
}
