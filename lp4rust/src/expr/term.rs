// Term: BinVar, LinExpr

use std::iter::Sum;
use std::ops::Add;

/// Handle of a model variable (dense index in creation order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BinVar(usize);

impl BinVar {
    pub fn new(index: usize) -> Self {
        BinVar(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// Linear expression: b + a₁x₁ + a₂x₂ + ... + aₙxₙ
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LinExpr {
    b: f64,
    terms: Vec<(f64, BinVar)>,
}

impl LinExpr {
    pub fn new(b: f64, terms: Vec<(f64, BinVar)>) -> Self {
        LinExpr { b, terms }
    }

    pub fn constant(b: f64) -> Self {
        LinExpr { b, terms: vec![] }
    }

    pub fn term(coef: f64, var: BinVar) -> Self {
        LinExpr { b: 0.0, terms: vec![(coef, var)] }
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn terms(&self) -> &[(f64, BinVar)] {
        &self.terms
    }

    pub fn is_constant(&self) -> bool {
        self.terms.is_empty()
    }

    /// Append `coef * var` in place
    pub fn add_term(&mut self, coef: f64, var: BinVar) {
        self.terms.push((coef, var));
    }

    /// Evaluate with variable values looked up by index.
    /// Returns None if a variable has no value.
    pub fn eval(&self, values: &[f64]) -> Option<f64> {
        let mut result = self.b;
        for &(coef, var) in &self.terms {
            result += coef * values.get(var.index())?;
        }
        Some(result)
    }
}

impl From<BinVar> for LinExpr {
    fn from(var: BinVar) -> Self {
        LinExpr::term(1.0, var)
    }
}

impl From<f64> for LinExpr {
    fn from(b: f64) -> Self {
        LinExpr::constant(b)
    }
}

impl Add for LinExpr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let mut terms = self.terms;
        terms.extend(rhs.terms);
        LinExpr { b: self.b + rhs.b, terms }
    }
}

impl Add<BinVar> for LinExpr {
    type Output = Self;

    fn add(mut self, rhs: BinVar) -> Self::Output {
        self.terms.push((1.0, rhs));
        self
    }
}

impl Add<f64> for LinExpr {
    type Output = Self;

    fn add(self, rhs: f64) -> Self::Output {
        LinExpr { b: self.b + rhs, terms: self.terms }
    }
}

impl Sum<BinVar> for LinExpr {
    fn sum<I: Iterator<Item = BinVar>>(iter: I) -> Self {
        LinExpr {
            b: 0.0,
            terms: iter.map(|v| (1.0, v)).collect(),
        }
    }
}

impl<'a> Sum<&'a BinVar> for LinExpr {
    fn sum<I: Iterator<Item = &'a BinVar>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_index() {
        let x = BinVar::new(3);
        assert_eq!(x.index(), 3);
        assert_eq!(x, BinVar::new(3));
    }

    #[test]
    fn test_expr_from_var() {
        let x = BinVar::new(0);
        let e = LinExpr::from(x);
        assert_eq!(e.b(), 0.0);
        assert_eq!(e.terms(), &[(1.0, x)]);
    }

    #[test]
    fn test_expr_add_and_constant() {
        let x = BinVar::new(0);
        let y = BinVar::new(1);
        let e = LinExpr::from(x) + y + 2.0;
        assert_eq!(e.b(), 2.0);
        assert_eq!(e.terms().len(), 2);
        assert!(!e.is_constant());
        assert!(LinExpr::constant(4.0).is_constant());
    }

    #[test]
    fn test_expr_sum() {
        let vars = vec![BinVar::new(0), BinVar::new(1), BinVar::new(2)];
        let e: LinExpr = vars.iter().sum();
        assert_eq!(e.terms().len(), 3);
        assert!(e.terms().iter().all(|&(a, _)| a == 1.0));
    }

    #[test]
    fn test_expr_eval() {
        let x = BinVar::new(0);
        let y = BinVar::new(1);
        let e = LinExpr::from(x) + LinExpr::term(2.0, y) + 1.0;
        assert_eq!(e.eval(&[1.0, 1.0]), Some(4.0));
        assert_eq!(e.eval(&[0.0, 1.0]), Some(3.0));
        assert_eq!(e.eval(&[1.0]), None);
    }
}
