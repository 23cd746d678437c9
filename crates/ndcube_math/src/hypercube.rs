//! n-dimensional hypercube geometry
//!
//! An n-cube has 2^n vertices (all combinations of ±1 across n axes) and
//! n·2^(n-1) edges. Vertex `i` is laid out by the bits of `i`: bit `d` set
//! means coordinate `d` is +1, clear means -1. Edge generation relies on
//! this, since two vertices share an edge exactly when their indices differ
//! in one bit.

use crate::PointN;

/// Number of vertices of an n-cube
///
/// # Panics
/// If 2^n does not fit in `usize`, the same way an oversized `Vec` would.
#[inline]
pub fn vertex_count_for(dimensions: usize) -> usize {
    u32::try_from(dimensions)
        .ok()
        .and_then(|shift| 1usize.checked_shl(shift))
        .expect("hypercube dimension exceeds addressable vertex count")
}

/// Number of edges of an n-cube
///
/// # Panics
/// If n·2^(n-1) does not fit in `usize`.
#[inline]
pub fn edge_count_for(dimensions: usize) -> usize {
    if dimensions == 0 {
        return 0;
    }
    vertex_count_for(dimensions - 1)
        .checked_mul(dimensions)
        .expect("hypercube dimension exceeds addressable edge count")
}

/// Number of coordinate planes (unordered axis pairs) in n dimensions
#[inline]
pub fn plane_count_for(dimensions: usize) -> usize {
    dimensions * dimensions.saturating_sub(1) / 2
}

/// An edge between two vertex indices, stored lower index first
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

impl Edge {
    /// Create an edge with its endpoints ordered (canonical form)
    #[inline]
    pub fn new_canonical(a: usize, b: usize) -> Self {
        if a <= b {
            Self { a, b }
        } else {
            Self { a: b, b: a }
        }
    }

    /// The axis this edge runs along, if the endpoints differ in exactly one bit
    pub fn axis(&self) -> Option<usize> {
        let diff = self.a ^ self.b;
        if diff.count_ones() == 1 {
            Some(diff.trailing_zeros() as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn to_array(self) -> [usize; 2] {
        [self.a, self.b]
    }
}

/// Trait for shapes described by vertices joined by edges
///
/// Shapes are pure geometry - vertex positions and connectivity only.
pub trait Polytope {
    /// Get the vertices of this shape
    fn vertices(&self) -> &[PointN];

    /// Get the edges of this shape
    fn edges(&self) -> &[Edge];

    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    #[inline]
    fn edge_count(&self) -> usize {
        self.edges().len()
    }
}

/// An n-dimensional hypercube centered at the origin with side length 2
#[derive(Clone, Debug)]
pub struct Hypercube {
    /// Number of dimensions, at least 1
    dimensions: usize,
    /// The 2^n vertices, indexed by their bit pattern
    pub(crate) vertices: Vec<PointN>,
    /// Edges, each recorded once from the lower to the higher index
    edges: Vec<Edge>,
    /// Most recently applied angle per rotation plane
    pub(crate) rotation_angles: Vec<f64>,
}

impl Hypercube {
    /// Create a new hypercube with the given number of dimensions
    ///
    /// Values below 1 are clamped to 1. There is no upper bound: storage
    /// grows as O(2^n), so choosing a sensible size is up to the caller.
    ///
    /// # Panics
    /// If 2^n vertices cannot be addressed, like any oversized allocation.
    pub fn new(dimensions: usize) -> Self {
        let dimensions = dimensions.max(1);

        let vertices = Self::compute_vertices(dimensions);
        let edges = Self::compute_edges(dimensions);

        Self {
            dimensions,
            vertices,
            edges,
            rotation_angles: vec![0.0; plane_count_for(dimensions)],
        }
    }

    /// Number of dimensions
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimensions
    }

    /// Angles applied by the last [`rotate`](Self::rotate) call, one per plane
    #[inline]
    pub fn rotation_angles(&self) -> &[f64] {
        &self.rotation_angles
    }

    /// Number of rotation planes
    #[inline]
    pub fn plane_count(&self) -> usize {
        self.rotation_angles.len()
    }

    fn compute_vertices(dimensions: usize) -> Vec<PointN> {
        (0..vertex_count_for(dimensions))
            .map(|i| {
                let coords = (0..dimensions)
                    .map(|d| if i & (1 << d) == 0 { -1.0 } else { 1.0 })
                    .collect();
                PointN::new(coords)
            })
            .collect()
    }

    /// Walk every vertex and flip each bit in turn; keep the pair only when
    /// the neighbor is the higher index so each edge appears once.
    fn compute_edges(dimensions: usize) -> Vec<Edge> {
        let mut edges = Vec::with_capacity(edge_count_for(dimensions));
        for i in 0..vertex_count_for(dimensions) {
            for d in 0..dimensions {
                let j = i ^ (1 << d);
                if j > i {
                    edges.push(Edge { a: i, b: j });
                }
            }
        }
        edges
    }
}

impl Polytope for Hypercube {
    fn vertices(&self) -> &[PointN] {
        &self.vertices
    }

    fn edges(&self) -> &[Edge] {
        &self.edges
    }
}
