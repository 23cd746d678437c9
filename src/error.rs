//! Error types for the frame printer
//!
//! The geometry engine itself cannot fail, and configuration problems fall
//! back to defaults, so the only runtime failure is writing output.

use std::fmt;
use std::io;

/// Error type for running the frame printer
#[derive(Debug)]
pub enum NdcubeError {
    /// Writing frames failed (closed pipe, full disk, etc.)
    Io(io::Error),
}

impl fmt::Display for NdcubeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NdcubeError::Io(err) => write!(f, "Output error: {}", err),
        }
    }
}

impl std::error::Error for NdcubeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NdcubeError::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for NdcubeError {
    fn from(err: io::Error) -> Self {
        NdcubeError::Io(err)
    }
}
