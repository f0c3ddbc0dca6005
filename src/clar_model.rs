// Binary program of the p-anionic Clar problem
//
//   max  Σ_f x_f
//   s.t. Σ_{e ∋ v} y_e + Σ_{f ∋ v} x_f = 1     for every vertex v
//        Σ_{f pentagon} x_f = p
//        x, y binary

use lp4rust::{BinVar, LinConstraint, LinExpr, MilpSolver, Sense, SolverError};

use crate::graph::GraphView;
use crate::sink::ClarStructure;

/// Solver handles of the face and edge variables
#[derive(Debug, Clone)]
pub struct ClarVars {
    /// faces[f] = 1 iff face f is resonant
    pub faces: Vec<BinVar>,
    /// edges[e] = 1 iff edge e is a matching edge
    pub edges: Vec<BinVar>,
}

impl ClarVars {
    /// Variables set to 1 in a structure
    pub fn support(&self, structure: &ClarStructure) -> Vec<BinVar> {
        structure
            .resonant_faces
            .iter()
            .map(|&f| self.faces[f])
            .chain(structure.matching_edges.iter().map(|&e| self.edges[e]))
            .collect()
    }
}

/// Populate an empty solver with the Clar program for `graph` and `p`
pub fn build_model<G: GraphView, S: MilpSolver>(graph: &G, p: usize, solver: &mut S) -> Result<ClarVars, SolverError> {
    let vars = add_vars(graph, solver)?;
    solver.set_sense(Sense::Maximize);
    add_cons(graph, p, solver, &vars)?;
    Ok(vars)
}

fn add_vars<G: GraphView, S: MilpSolver>(graph: &G, solver: &mut S) -> Result<ClarVars, SolverError> {
    // lower bound, upper bound, objective coefficient
    let faces = (0..graph.dual_face_count())
        .map(|_| solver.add_binary_var(0.0, 1.0, 1.0))
        .collect::<Result<Vec<_>, _>>()?;
    let edges = (0..graph.edge_count())
        .map(|_| solver.add_binary_var(0.0, 1.0, 0.0))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ClarVars { faces, edges })
}

fn add_cons<G: GraphView, S: MilpSolver>(graph: &G, p: usize, solver: &mut S, vars: &ClarVars) -> Result<(), SolverError> {
    // Each vertex is on a resonant face or is the endpoint of a matching edge
    for v in 0..graph.vertex_count() {
        let mut cover = LinExpr::constant(0.0);
        for (e, f) in graph.incident_edges(v).into_iter().zip(graph.incident_faces(v)) {
            cover = cover + vars.edges[e] + vars.faces[f];
        }
        solver.add_constraint(cover.eq(1.0))?;
    }

    // Exactly p resonant pentagons
    let pentagons: LinExpr = (0..graph.dual_face_count())
        .filter(|&f| graph.face_size(f) == 5)
        .map(|f| vars.faces[f])
        .sum();
    solver.add_constraint(pentagons.eq(p as f64))
}

/// Σ_f x_f = opt_val: later solves stay on the optimal face
pub fn clar_number_cons(vars: &ClarVars, opt_val: usize) -> LinConstraint {
    let all: LinExpr = vars.faces.iter().sum();
    all.eq(opt_val as f64)
}

/// No-good cut excluding exactly this structure's assignment
pub fn exclusion_cut(vars: &ClarVars, structure: &ClarStructure) -> LinConstraint {
    LinConstraint::no_good(&vars.support(structure))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use lp4rust::{GoodLpSolver, Relation};

    #[test]
    fn test_build_model_sizes() {
        let g = fixtures::dodecahedron();
        let mut solver = GoodLpSolver::new();
        let vars = build_model(&g, 0, &mut solver).unwrap();
        assert_eq!(vars.faces.len(), 12);
        assert_eq!(vars.edges.len(), 30);
        assert_eq!(solver.num_vars(), 42);
        // one cover row per vertex plus the pentagon row
        assert_eq!(solver.num_constraints(), 21);
        assert_eq!(solver.model().sense(), Sense::Maximize);
    }

    #[test]
    fn test_objective_counts_faces_only() {
        let g = fixtures::pentagonal_prism();
        let mut solver = GoodLpSolver::new();
        let vars = build_model(&g, 0, &mut solver).unwrap();
        let model = solver.model();
        for &f in &vars.faces {
            assert_eq!(model.var(f).unwrap().objective, 1.0);
        }
        for &e in &vars.edges {
            assert_eq!(model.var(e).unwrap().objective, 0.0);
        }
    }

    #[test]
    fn test_cover_rows() {
        let g = fixtures::tetrahedron();
        let mut solver = GoodLpSolver::new();
        build_model(&g, 0, &mut solver).unwrap();
        let rows = solver.model().constraints();
        for row in &rows[..g.n] {
            assert_eq!(row.relation(), Relation::Eq);
            assert_eq!(row.rhs(), 1.0);
            assert_eq!(row.expr().terms().len(), 6);
        }
    }

    #[test]
    fn test_pentagon_row() {
        let g = fixtures::pentagonal_prism();
        let mut solver = GoodLpSolver::new();
        let vars = build_model(&g, 2, &mut solver).unwrap();
        let row = solver.model().constraints().last().unwrap().clone();
        assert_eq!(row.rhs(), 2.0);
        let mut faces: Vec<BinVar> = row.vars().collect();
        faces.sort();
        let expected: Vec<BinVar> = (0..g.dual.len())
            .filter(|&f| g.dual[f].size == 5)
            .map(|f| vars.faces[f])
            .collect();
        assert_eq!(faces, expected);
    }

    #[test]
    fn test_pentagon_row_without_pentagons() {
        let g = fixtures::tetrahedron();
        let mut solver = GoodLpSolver::new();
        build_model(&g, 1, &mut solver).unwrap();
        let row = solver.model().constraints().last().unwrap();
        assert!(row.expr().is_constant());
    }

    #[test]
    fn test_exclusion_cut() {
        let vars = ClarVars {
            faces: (0..3).map(BinVar::new).collect(),
            edges: (3..8).map(BinVar::new).collect(),
        };
        let s = ClarStructure {
            graph_id: 1,
            p: 0,
            num_res_faces: 1,
            resonant_faces: vec![2],
            resonant_pentagons: vec![],
            matching_edges: vec![0, 4],
        };
        let cut = exclusion_cut(&vars, &s);
        assert_eq!(cut.relation(), Relation::Le);
        assert_eq!(cut.rhs(), 2.0);
        assert_eq!(cut.vars().collect::<Vec<_>>(), vec![BinVar::new(2), BinVar::new(3), BinVar::new(7)]);

        let fixed = clar_number_cons(&vars, 1);
        assert_eq!(fixed.relation(), Relation::Eq);
        assert_eq!(fixed.vars().count(), 3);
    }
}
