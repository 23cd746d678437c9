//! End-to-end tests for the frame printer
//!
//! Runs the full construct-rotate-project-print pipeline into a buffer.

use ndcube::config::{AppConfig, CubeConfig};
use ndcube::frame;

fn run_to_string(dimensions: i64, vertices_to_show: usize) -> String {
    let mut config = AppConfig::default();
    config.cube = CubeConfig { dimensions, vertices_to_show };
    let mut buf = Vec::new();
    frame::run(&config, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_default_run_layout() {
    let text = run_to_string(5, 8);
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("Created 5-dimensional hypercube"));
    assert_eq!(lines.next(), Some("Number of vertices: 32"));
    assert_eq!(lines.next(), Some("Number of edges: 80"));

    assert_eq!(text.matches("Frame at t=").count(), 32);
    assert_eq!(text.matches("Showing 8 of 32 total vertices:").count(), 32);
    assert_eq!(text.lines().filter(|l| l.starts_with("Vertex ")).count(), 32 * 8);
}

#[test]
fn test_first_frame_is_unrotated_cube() {
    let text = run_to_string(5, 8);
    let first: Vec<&str> = text
        .lines()
        .skip_while(|l| *l != "Frame at t=0.00")
        .take(10)
        .collect();
    assert_eq!(first[1], "Showing 8 of 32 total vertices:");
    // All five coordinates are -1, so depth -1 gives a factor of 1
    assert_eq!(first[2], "Vertex 0: [-1.00, -1.00, -1.00]");
    // Vertex 1 flips axis 0 only
    assert_eq!(first[3], "Vertex 1: [1.00, -1.00, -1.00]");
}

#[test]
fn test_frame_times() {
    let text = run_to_string(3, 1);
    assert!(text.contains("Frame at t=0.20\n"));
    assert!(text.contains("Frame at t=6.20\n"));
    assert!(!text.contains("Frame at t=6.40"));
}

#[test]
fn test_one_dimension_end_to_end() {
    let text = run_to_string(1, 8);
    assert!(text.starts_with("Created 1-dimensional hypercube\nNumber of vertices: 2\nNumber of edges: 1\n"));
    assert!(text.contains("Showing 2 of 2 total vertices:\nVertex 0: [-1.00, 0.00, 0.00]\nVertex 1: [0.33, 0.00, 0.00]\n"));
}

#[test]
fn test_dimension_clamped() {
    let text = run_to_string(0, 8);
    assert!(text.starts_with("Created 1-dimensional hypercube\n"));

    let text = run_to_string(-7, 8);
    assert!(text.starts_with("Created 1-dimensional hypercube\n"));
}

#[test]
fn test_display_count_larger_than_vertex_count() {
    let text = run_to_string(2, 100);
    assert_eq!(text.matches("Showing 4 of 4 total vertices:").count(), 32);
}
