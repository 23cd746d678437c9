//! ndcube - n-dimensional hypercube frame printer
//!
//! Builds an n-cube with [`ndcube_math`], tumbles it through every
//! coordinate plane and prints the projected vertices frame by frame.

pub mod animation;
pub mod config;
pub mod error;
pub mod frame;

pub use error::NdcubeError;
