// Small plane graphs with hand-checkable Clar structures.
// Rotations come from straight-line drawings: neighbors sorted by angle.

use std::f64::consts::PI;

use crate::graph::Fullerene;

pub const TETRAHEDRON_ID: usize = 4;
pub const PRISM_ID: usize = 10;
pub const DODECAHEDRON_ID: usize = 20;

fn rotations(coords: &[(f64, f64)], edges: &[(usize, usize)]) -> Vec<Vec<usize>> {
    let mut adj = vec![Vec::new(); coords.len()];
    for &(u, v) in edges {
        adj[u].push(v);
        adj[v].push(u);
    }
    for (v, neighbors) in adj.iter_mut().enumerate() {
        let (x, y) = coords[v];
        let angle = |u: &usize| (coords[*u].1 - y).atan2(coords[*u].0 - x);
        neighbors.sort_by(|a, b| angle(a).total_cmp(&angle(b)));
    }
    adj
}

fn polar(r: f64, degrees: f64) -> (f64, f64) {
    let t = degrees * PI / 180.0;
    (r * t.cos(), r * t.sin())
}

pub fn tetrahedron_rotations() -> Vec<Vec<usize>> {
    let coords = [(0.0, 0.0), polar(1.0, 90.0), polar(1.0, 210.0), polar(1.0, 330.0)];
    let edges = [(0, 1), (0, 2), (0, 3), (1, 2), (2, 3), (3, 1)];
    rotations(&coords, &edges)
}

/// K4: four triangles, three perfect matchings
pub fn tetrahedron() -> Fullerene {
    Fullerene::from_embedding(TETRAHEDRON_ID, &tetrahedron_rotations()).unwrap()
}

/// m-gonal prism: outer ring 0..m, inner ring m..2m, spoke i to i + m
pub fn prism_rotations(m: usize) -> Vec<Vec<usize>> {
    let step = 360.0 / m as f64;
    let mut coords = Vec::new();
    for r in [2.0, 1.0] {
        for i in 0..m {
            coords.push(polar(r, 90.0 + step * i as f64));
        }
    }
    let mut edges = Vec::new();
    for i in 0..m {
        edges.push((i, (i + 1) % m));
        edges.push((m + i, m + (i + 1) % m));
        edges.push((i, m + i));
    }
    rotations(&coords, &edges)
}

/// Two pentagons joined by five quadrilaterals
pub fn pentagonal_prism() -> Fullerene {
    Fullerene::from_embedding(PRISM_ID, &prism_rotations(5)).unwrap()
}

/// C20: the smallest fullerene, twelve pentagons.
/// Schlegel layers a (0..5), b (5..10), c (10..15), d (15..20).
pub fn dodecahedron() -> Fullerene {
    let mut coords = Vec::new();
    for (r, offset) in [(4.0, 0.0), (3.0, 0.0), (2.0, 36.0), (1.0, 36.0)] {
        for i in 0..5 {
            coords.push(polar(r, 90.0 + offset + 72.0 * i as f64));
        }
    }
    let (a, b, c, d) = (0, 5, 10, 15);
    let mut edges = Vec::new();
    for i in 0..5 {
        let next = (i + 1) % 5;
        edges.push((a + i, a + next));
        edges.push((a + i, b + i));
        edges.push((b + i, c + i));
        edges.push((c + i, b + next));
        edges.push((c + i, d + i));
        edges.push((d + i, d + next));
    }
    Fullerene::from_embedding(DODECAHEDRON_ID, &rotations(&coords, &edges)).unwrap()
}

/// Vertices covered by the given edges, once each, and nothing else
pub fn is_perfect_matching(g: &Fullerene, edges: &[usize]) -> bool {
    let mut covered = vec![0; g.n];
    for &e in edges {
        for v in g.edges[e] {
            covered[v] += 1;
        }
    }
    covered.iter().all(|&c| c == 1)
}
