//! n-Dimensional Hypercube Geometry
//!
//! This crate provides the geometry engine behind the `ndcube` frame printer:
//! building an n-cube, tumbling it through every coordinate plane at once,
//! and folding the result down to 3D with a single perspective divide.
//!
//! ## Core Types
//!
//! - [`PointN`] - A point with n real-valued coordinates
//! - [`Point3`] - A projected 3D point
//! - [`Hypercube`] - Vertices, edges and the per-plane angle table
//!
//! ## Rotation and Projection
//!
//! - [`RotationPlane`] - A pair of coordinate axes, rotated as a 2D plane
//! - [`Hypercube::rotate`] - Apply all `n(n-1)/2` plane rotations in place
//! - [`Hypercube::project_to_3d`] - Perspective-project every vertex

pub mod hypercube;
mod point;
pub mod projection;
pub mod rotation;

pub use hypercube::{edge_count_for, plane_count_for, vertex_count_for, Edge, Hypercube, Polytope};
pub use point::{Point3, PointN};
pub use projection::{project_point, CAMERA_DISTANCE};
pub use rotation::{plane_angle, planes, Planes, RotationPlane};
