//! Multi-plane rotation for n-dimensional shapes
//!
//! In n dimensions rotations happen in planes rather than around axes, and
//! there is one plane per unordered pair of axes: n(n-1)/2 in total. Planes
//! are numbered in row-major order, (0,1), (0,2), ..., (0,n-1), (1,2), ...
//! and plane `k` turns by `t * (k+1) / n`, so each successive plane spins a
//! little faster than the one before it.

use crate::{Hypercube, PointN};

/// A rotation plane spanned by two coordinate axes, `i < j`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RotationPlane {
    pub i: usize,
    pub j: usize,
}

impl RotationPlane {
    /// Create a plane from two distinct axes, in either order
    pub fn new(a: usize, b: usize) -> Self {
        debug_assert_ne!(a, b, "a rotation plane needs two distinct axes");
        if a < b {
            Self { i: a, j: b }
        } else {
            Self { i: b, j: a }
        }
    }

    /// Rotate one point in this plane, given the precomputed cosine and sine
    #[inline]
    pub fn rotate(&self, point: &mut PointN, cos_a: f64, sin_a: f64) {
        let vi = point[self.i];
        let vj = point[self.j];
        point[self.i] = vi * cos_a - vj * sin_a;
        point[self.j] = vi * sin_a + vj * cos_a;
    }
}

/// Iterator over the rotation planes of n-space in row-major order
#[derive(Clone, Debug)]
pub struct Planes {
    dimensions: usize,
    i: usize,
    j: usize,
}

impl Iterator for Planes {
    type Item = RotationPlane;

    fn next(&mut self) -> Option<RotationPlane> {
        if self.j >= self.dimensions {
            self.i += 1;
            self.j = self.i + 1;
        }
        if self.j >= self.dimensions {
            return None;
        }
        let plane = RotationPlane { i: self.i, j: self.j };
        self.j += 1;
        Some(plane)
    }
}

/// All rotation planes of n-space: (0,1), (0,2), ..., (n-2,n-1)
pub fn planes(dimensions: usize) -> Planes {
    Planes { dimensions, i: 0, j: 1 }
}

/// Angle for plane number `k` at time `t`
#[inline]
pub fn plane_angle(t: f64, plane_index: usize, dimensions: usize) -> f64 {
    t * (plane_index + 1) as f64 / dimensions as f64
}

impl Hypercube {
    /// Rotate every vertex through all coordinate planes, in place
    ///
    /// Planes are applied one after another, each to the coordinates the
    /// previous planes already produced. Angles are derived from `t` alone,
    /// so two calls do not add up: `rotate(a); rotate(b)` is generally not
    /// the same as `rotate(a + b)`.
    pub fn rotate(&mut self, t: f64) {
        let dimensions = self.dimension();

        for (k, plane) in planes(dimensions).enumerate() {
            let angle = plane_angle(t, k, dimensions);
            self.rotation_angles[k] = angle;

            let (sin_a, cos_a) = angle.sin_cos();
            for vertex in &mut self.vertices {
                plane.rotate(vertex, cos_a, sin_a);
            }
        }
    }
}
