//! Text output for the frame sequence
//!
//! Writes a short summary of the hypercube followed by one block per frame
//! listing the first few projected vertices with two decimals.

use std::io::Write;

use ndcube_math::{Hypercube, Point3, Polytope};

use crate::animation::{Animation, Frame};
use crate::config::AppConfig;
use crate::error::NdcubeError;

/// Write the dimension, vertex and edge counts
///
/// The dimension printed is the cube's clamped one, not the raw request.
pub fn write_summary<W: Write>(out: &mut W, cube: &Hypercube) -> std::io::Result<()> {
    writeln!(out, "Created {}-dimensional hypercube", cube.dimension())?;
    writeln!(out, "Number of vertices: {}", cube.vertex_count())?;
    writeln!(out, "Number of edges: {}", cube.edge_count())
}

/// Write one frame, showing at most `vertices_to_show` vertices
pub fn write_frame<W: Write>(out: &mut W, frame: &Frame, vertices_to_show: usize) -> std::io::Result<()> {
    let total = frame.points.len();
    let shown = vertices_to_show.min(total);

    writeln!(out)?;
    writeln!(out, "Frame at t={:.2}", frame.t)?;
    writeln!(out, "Showing {} of {} total vertices:", shown, total)?;

    let flat = Point3::as_flat(&frame.points[..shown]);
    for (i, xyz) in flat.chunks_exact(3).enumerate() {
        writeln!(out, "Vertex {}: [{:.2}, {:.2}, {:.2}]", i, xyz[0], xyz[1], xyz[2])?;
    }
    Ok(())
}

/// Build the hypercube described by `config` and write every frame to `out`
pub fn run<W: Write>(config: &AppConfig, out: &mut W) -> Result<(), NdcubeError> {
    let cube = Hypercube::new(config.cube.dimension_count());
    log::info!("Tumbling {}-dimensional hypercube ({} vertices, {} edges, {} planes)",
        cube.dimension(), cube.vertex_count(), cube.edge_count(), cube.plane_count());

    write_summary(out, &cube)?;

    let mut animation = Animation::new(cube);
    for frame in animation.frames() {
        write_frame(out, &frame, config.cube.vertices_to_show)?;
    }
    out.flush()?;
    Ok(())
}
