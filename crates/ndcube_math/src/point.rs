//! Point types
//!
//! [`PointN`] holds a vertex of an n-cube; its length is fixed when the
//! owning shape is built. [`Point3`] is what comes out of projection.

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};
use std::ops::{Index, IndexMut};

/// A point in n-dimensional space
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointN {
    coords: Vec<f64>,
}

impl PointN {
    /// Create a point from its coordinates
    #[inline]
    pub fn new(coords: Vec<f64>) -> Self {
        Self { coords }
    }

    /// Number of coordinates
    #[inline]
    pub fn dimension(&self) -> usize {
        self.coords.len()
    }

    #[inline]
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    /// Length squared (faster than length)
    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.coords.iter().map(|c| c * c).sum()
    }

    /// Euclidean length
    #[inline]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }
}

impl Index<usize> for PointN {
    type Output = f64;

    #[inline]
    fn index(&self, axis: usize) -> &f64 {
        &self.coords[axis]
    }
}

impl IndexMut<usize> for PointN {
    #[inline]
    fn index_mut(&mut self, axis: usize) -> &mut f64 {
        &mut self.coords[axis]
    }
}

impl From<Vec<f64>> for PointN {
    fn from(coords: Vec<f64>) -> Self {
        Self::new(coords)
    }
}

/// A projected point in 3D space
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    /// Create a new Point3
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// View a slice of points as a flat `[x0, y0, z0, x1, ...]` buffer
    #[inline]
    pub fn as_flat(points: &[Point3]) -> &[f64] {
        bytemuck::cast_slice(points)
    }
}

impl From<[f64; 3]> for Point3 {
    fn from(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}
