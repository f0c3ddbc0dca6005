use crate::error::GraphError;

/// Read-only view of a cubic plane graph and its dual
pub trait GraphView {
    fn vertex_count(&self) -> usize;
    fn dual_face_count(&self) -> usize;
    fn edge_count(&self) -> usize;
    /// The 3 edges with an endpoint at `v`
    fn incident_edges(&self, v: usize) -> [usize; 3];
    /// The 3 faces around `v`
    fn incident_faces(&self, v: usize) -> [usize; 3];
    fn face_size(&self, f: usize) -> usize;
    /// Identifier used in diagnostics and results
    fn graph_id(&self) -> usize;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    /// Neighbors in rotation order
    pub neighbors: [usize; 3],
    /// edges[j] joins this vertex to neighbors[j]
    pub edges: [usize; 3],
    /// faces[j] is the face leaving this vertex along edges[j]
    pub faces: [usize; 3],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    pub size: usize,
    /// Boundary vertices in traversal order
    pub vertices: Vec<usize>,
}

/// Cubic plane graph with its planar dual
#[derive(Debug, Clone)]
pub struct Fullerene {
    pub id: usize,
    pub n: usize,
    pub num_edges: usize,
    pub primal: Vec<Vertex>,
    pub dual: Vec<Face>,
    /// Endpoints of each edge, lower vertex first
    pub edges: Vec<[usize; 2]>,
}

impl Fullerene {
    /// Build the graph from a rotation system: `rotations[v]` lists the
    /// neighbors of `v` in cyclic order (all clockwise or all counterclockwise).
    /// Edges are numbered by first appearance as (u, v) with u < v; faces are
    /// traced with next(u→v) = v→w, w following u in the rotation at v.
    pub fn from_embedding(id: usize, rotations: &[Vec<usize>]) -> Result<Self, GraphError> {
        let n = rotations.len();
        let rot = Self::check_rotations(id, rotations)?;

        let position = |v: usize, u: usize| -> usize {
            // check_rotations guarantees u appears in the rotation of v
            rot[v].iter().position(|&w| w == u).unwrap_or(0)
        };

        // Number the edges
        let mut edges: Vec<[usize; 2]> = Vec::with_capacity(3 * n / 2);
        let mut edge_ids = vec![[usize::MAX; 3]; n];
        for v in 0..n {
            for j in 0..3 {
                let u = rot[v][j];
                if v < u {
                    let id = edges.len();
                    edges.push([v, u]);
                    edge_ids[v][j] = id;
                    edge_ids[u][position(u, v)] = id;
                }
            }
        }

        // Trace faces: every dart lies on exactly one face
        let mut face_ids = vec![[usize::MAX; 3]; n];
        let mut dual: Vec<Face> = Vec::new();
        for v in 0..n {
            for j in 0..3 {
                if face_ids[v][j] != usize::MAX {
                    continue;
                }
                let f = dual.len();
                let mut vertices = Vec::new();
                let (mut a, mut ja) = (v, j);
                loop {
                    face_ids[a][ja] = f;
                    vertices.push(a);
                    let b = rot[a][ja];
                    let jb = (position(b, a) + 1) % 3;
                    a = b;
                    ja = jb;
                    if (a, ja) == (v, j) {
                        break;
                    }
                }
                dual.push(Face { size: vertices.len(), vertices });
            }
        }

        let (e, f) = (edges.len(), dual.len());
        if n + f != e + 2 {
            return Err(GraphError::NotPlanar { graph: id, n, e, f });
        }

        let primal = (0..n)
            .map(|v| Vertex {
                neighbors: rot[v],
                edges: edge_ids[v],
                faces: face_ids[v],
            })
            .collect();

        Ok(Fullerene {
            id,
            n,
            num_edges: e,
            primal,
            dual,
            edges,
        })
    }

    fn check_rotations(id: usize, rotations: &[Vec<usize>]) -> Result<Vec<[usize; 3]>, GraphError> {
        let n = rotations.len();
        let mut rot = Vec::with_capacity(n);
        for (v, neighbors) in rotations.iter().enumerate() {
            if neighbors.len() != 3 {
                return Err(GraphError::NotCubic { graph: id, vertex: v, degree: neighbors.len() });
            }
            for (j, &u) in neighbors.iter().enumerate() {
                if u >= n {
                    return Err(GraphError::NeighborOutOfRange { graph: id, vertex: v, neighbor: u, n });
                }
                if u == v {
                    return Err(GraphError::SelfLoop { graph: id, vertex: v });
                }
                if neighbors[..j].contains(&u) {
                    return Err(GraphError::MultiEdge { graph: id, vertex: v, neighbor: u });
                }
                if !rotations[u].contains(&v) {
                    return Err(GraphError::Asymmetric { graph: id, u: v, v: u });
                }
            }
            rot.push([neighbors[0], neighbors[1], neighbors[2]]);
        }
        Ok(rot)
    }

    /// Every face is a pentagon or a hexagon and there are 12 pentagons
    pub fn check_fullerene(&self) -> Result<(), GraphError> {
        if let Some((face, f)) = self.dual.iter().enumerate().find(|(_, f)| f.size != 5 && f.size != 6) {
            return Err(GraphError::NotFullerene { graph: self.id, face, size: f.size });
        }
        let pentagons = self.num_pentagons();
        if pentagons != 12 {
            return Err(GraphError::PentagonCount { graph: self.id, pentagons });
        }
        Ok(())
    }

    pub fn num_pentagons(&self) -> usize {
        self.dual.iter().filter(|f| f.size == 5).count()
    }

    pub fn num_hexagons(&self) -> usize {
        self.dual.iter().filter(|f| f.size == 6).count()
    }
}

impl GraphView for Fullerene {
    fn vertex_count(&self) -> usize {
        self.n
    }

    fn dual_face_count(&self) -> usize {
        self.dual.len()
    }

    fn edge_count(&self) -> usize {
        self.num_edges
    }

    fn incident_edges(&self, v: usize) -> [usize; 3] {
        self.primal[v].edges
    }

    fn incident_faces(&self, v: usize) -> [usize; 3] {
        self.primal[v].faces
    }

    fn face_size(&self, f: usize) -> usize {
        self.dual[f].size
    }

    fn graph_id(&self) -> usize {
        self.id
    }
}
