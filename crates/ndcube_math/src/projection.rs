//! Perspective projection from n-space to 3D
//!
//! The last axis (n-1) is treated as depth. Every vertex is scaled by
//! `1 / (depth + CAMERA_DISTANCE)` and its first three coordinates become
//! x, y and z; missing axes project to 0. Axes 3..n-2 do not contribute,
//! and for n = 2 the depth axis is also the y source.

use crate::{Hypercube, Point3, PointN};

/// Fixed offset added to the depth coordinate before dividing
///
/// Keeps the divisor positive for any unrotated coordinate in [-1, 1].
pub const CAMERA_DISTANCE: f64 = 2.0;

/// Project a single n-dimensional point to 3D
///
/// A zero-dimensional point projects to the origin.
pub fn project_point(point: &PointN) -> Point3 {
    let coords = point.coords();
    let Some(&depth) = coords.last() else {
        return Point3::ZERO;
    };

    let w_factor = 1.0 / (depth + CAMERA_DISTANCE);
    let axis = |d: usize| coords.get(d).map_or(0.0, |c| c * w_factor);

    Point3::new(axis(0), axis(1), axis(2))
}

impl Hypercube {
    /// Project every vertex to 3D, in vertex order
    pub fn project_to_3d(&self) -> Vec<Point3> {
        self.vertices.iter().map(project_point).collect()
    }
}
