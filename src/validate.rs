// Solution validation: read a solver assignment back as a Clar structure
// and check it against the graph.

use lp4rust::Assignment;

use crate::clar_model::ClarVars;
use crate::error::ClarError;
use crate::graph::GraphView;
use crate::sink::ClarStructure;

/// Check that the assignment is a p-anionic Clar structure of `graph` and
/// return it. A value counts as 1 only above `tolerance`.
///
/// Fails if some vertex is not covered exactly once, if the number of
/// resonant pentagons differs from `p`, or if the matching does not have
/// (n - Σ size(F)) / 2 edges.
pub fn check_solution<G: GraphView>(
    graph: &G,
    p: usize,
    vars: &ClarVars,
    assignment: &Assignment,
    tolerance: f64,
) -> Result<ClarStructure, ClarError> {
    let face_on = |f: usize| assignment.is_one(vars.faces[f], tolerance);
    let edge_on = |e: usize| assignment.is_one(vars.edges[e], tolerance);

    // every vertex covered exactly once
    for v in 0..graph.vertex_count() {
        let covered = graph.incident_edges(v).into_iter().filter(|&e| edge_on(e)).count()
            + graph.incident_faces(v).into_iter().filter(|&f| face_on(f)).count();
        if covered != 1 {
            return Err(ClarError::diagnostic(
                graph,
                p,
                format!("vertex {} is covered {} times", v, covered),
            ));
        }
    }

    let resonant_faces: Vec<usize> = (0..graph.dual_face_count()).filter(|&f| face_on(f)).collect();
    let resonant_pentagons: Vec<usize> = resonant_faces
        .iter()
        .copied()
        .filter(|&f| graph.face_size(f) == 5)
        .collect();
    if resonant_pentagons.len() != p {
        return Err(ClarError::diagnostic(
            graph,
            p,
            format!("incorrect number of resonant pentagons: {}", resonant_pentagons.len()),
        ));
    }

    let matching_edges: Vec<usize> = (0..graph.edge_count()).filter(|&e| edge_on(e)).collect();
    let face_vertices: usize = resonant_faces.iter().map(|&f| graph.face_size(f)).sum();
    if face_vertices + 2 * matching_edges.len() != graph.vertex_count() {
        return Err(ClarError::diagnostic(
            graph,
            p,
            format!(
                "{} matching edges next to {} resonant face vertices, n = {}",
                matching_edges.len(),
                face_vertices,
                graph.vertex_count()
            ),
        ));
    }

    Ok(ClarStructure {
        graph_id: graph.graph_id(),
        p,
        num_res_faces: resonant_faces.len(),
        resonant_faces,
        resonant_pentagons,
        matching_edges,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::graph::Fullerene;
    use lp4rust::BinVar;

    const TOL: f64 = 0.99;

    fn vars_for(g: &Fullerene) -> ClarVars {
        let nf = g.dual.len();
        ClarVars {
            faces: (0..nf).map(BinVar::new).collect(),
            edges: (nf..nf + g.num_edges).map(BinVar::new).collect(),
        }
    }

    fn assignment(g: &Fullerene, faces: &[usize], edges: &[usize], one: f64) -> Assignment {
        let nf = g.dual.len();
        let mut values = vec![0.0; nf + g.num_edges];
        for &f in faces {
            values[f] = one;
        }
        for &e in edges {
            values[nf + e] = one;
        }
        Assignment::new(values)
    }

    fn edge(g: &Fullerene, u: usize, v: usize) -> usize {
        let key = [u.min(v), u.max(v)];
        g.edges.iter().position(|&e| e == key).unwrap()
    }

    fn face_with(g: &Fullerene, size: usize) -> Vec<usize> {
        (0..g.dual.len()).filter(|&f| g.dual[f].size == size).collect()
    }

    #[test]
    fn test_perfect_matching_is_valid() {
        let g = fixtures::tetrahedron();
        let edges = vec![edge(&g, 0, 1), edge(&g, 2, 3)];
        let a = assignment(&g, &[], &edges, 1.0);
        let s = check_solution(&g, 0, &vars_for(&g), &a, TOL).unwrap();
        assert_eq!(s.num_res_faces, 0);
        let mut sorted = edges.clone();
        sorted.sort();
        assert_eq!(s.matching_edges, sorted);
        assert_eq!(s.graph_id, fixtures::TETRAHEDRON_ID);
    }

    #[test]
    fn test_two_pentagons_cover_prism() {
        let g = fixtures::pentagonal_prism();
        let pents = face_with(&g, 5);
        let a = assignment(&g, &pents, &[], 0.9999);
        let s = check_solution(&g, 2, &vars_for(&g), &a, TOL).unwrap();
        assert_eq!(s.num_res_faces, 2);
        assert_eq!(s.resonant_pentagons, pents);
        assert!(s.matching_edges.is_empty());
    }

    #[test]
    fn test_vertex_covered_twice() {
        let g = fixtures::tetrahedron();
        let edges = vec![edge(&g, 0, 1), edge(&g, 1, 2), edge(&g, 2, 3)];
        let a = assignment(&g, &[], &edges, 1.0);
        let err = check_solution(&g, 0, &vars_for(&g), &a, TOL).unwrap_err();
        match err {
            ClarError::Diagnostic { n, p, graph_id, message } => {
                assert_eq!((n, p, graph_id), (4, 0, fixtures::TETRAHEDRON_ID));
                assert_eq!(message, "vertex 1 is covered 2 times");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_uncovered_vertex() {
        let g = fixtures::tetrahedron();
        let a = assignment(&g, &[], &[edge(&g, 1, 2)], 1.0);
        let err = check_solution(&g, 0, &vars_for(&g), &a, TOL).unwrap_err();
        assert!(err.to_string().contains("vertex 0 is covered 0 times"));
    }

    #[test]
    fn test_values_below_tolerance_are_zero() {
        let g = fixtures::tetrahedron();
        let edges = vec![edge(&g, 0, 1), edge(&g, 2, 3)];
        let a = assignment(&g, &[], &edges, 0.99);
        assert!(check_solution(&g, 0, &vars_for(&g), &a, TOL).is_err());
        assert!(check_solution(&g, 0, &vars_for(&g), &a, 0.5).is_ok());
    }

    #[test]
    fn test_wrong_pentagon_count() {
        let g = fixtures::pentagonal_prism();
        let pents = face_with(&g, 5);
        let a = assignment(&g, &pents, &[], 1.0);
        let err = check_solution(&g, 1, &vars_for(&g), &a, TOL).unwrap_err();
        assert!(err.to_string().contains("incorrect number of resonant pentagons: 2"));
        assert!(err.to_string().starts_with("n = 10, p = 1, graph 10"));
    }

    #[test]
    fn test_squares_and_spoke() {
        let g = fixtures::pentagonal_prism();
        // squares on columns 0-1 and 2-3 leave spoke 4-9
        let squares: Vec<usize> = face_with(&g, 4)
            .into_iter()
            .filter(|&f| {
                let vs = &g.dual[f].vertices;
                (vs.contains(&0) && vs.contains(&1)) || (vs.contains(&2) && vs.contains(&3))
            })
            .collect();
        assert_eq!(squares.len(), 2);
        let a = assignment(&g, &squares, &[edge(&g, 4, 9)], 1.0);
        let s = check_solution(&g, 0, &vars_for(&g), &a, TOL).unwrap();
        assert_eq!(s.num_res_faces, 2);
        assert!(s.resonant_pentagons.is_empty());
        assert_eq!(s.resonant_others(), s.resonant_faces);
        assert_eq!(s.matching_edges.len(), 1);
    }
}
