//! Animation loop
//!
//! Steps time from 0 towards 2π and, at each step, rotates the hypercube
//! and projects it. Rotation is cumulative: each frame turns the state the
//! previous frame left behind.

use std::f64::consts::TAU;

use ndcube_math::{Hypercube, Point3};

/// Time increment between frames
pub const STEP: f64 = 0.2;

/// Exclusive upper bound on frame time
pub const END: f64 = TAU;

/// Iterator over frame times: 0, 0.2, 0.4, ... while t < 2π
///
/// Time is accumulated by repeated addition, so later values carry the
/// usual floating-point drift.
#[derive(Clone, Debug)]
pub struct TimeSteps {
    t: f64,
}

impl Iterator for TimeSteps {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.t >= END {
            return None;
        }
        let t = self.t;
        self.t += STEP;
        Some(t)
    }
}

pub fn time_steps() -> TimeSteps {
    TimeSteps { t: 0.0 }
}

/// One animation frame: the time and the projected vertices
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub t: f64,
    pub points: Vec<Point3>,
}

/// Drives a hypercube through the frame sequence
pub struct Animation {
    cube: Hypercube,
}

impl Animation {
    pub fn new(cube: Hypercube) -> Self {
        Self { cube }
    }

    #[inline]
    pub fn cube(&self) -> &Hypercube {
        &self.cube
    }

    /// Rotate-then-project for every time step
    pub fn frames(&mut self) -> Frames<'_> {
        Frames {
            cube: &mut self.cube,
            steps: time_steps(),
        }
    }
}

/// Iterator returned by [`Animation::frames`]
pub struct Frames<'a> {
    cube: &'a mut Hypercube,
    steps: TimeSteps,
}

impl Iterator for Frames<'_> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        let t = self.steps.next()?;
        self.cube.rotate(t);
        log::debug!("Frame at t={:.2}: angles {:?}", t, self.cube.rotation_angles());
        Some(Frame {
            t,
            points: self.cube.project_to_3d(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndcube_math::Polytope;

    #[test]
    fn test_time_steps_count() {
        assert_eq!(time_steps().count(), 32);
    }

    #[test]
    fn test_time_steps_bounds() {
        let steps: Vec<f64> = time_steps().collect();
        assert_eq!(steps[0], 0.0);
        assert!((steps[1] - 0.2).abs() < 1e-12);
        assert!((steps[31] - 6.2).abs() < 1e-9);
        assert!(steps.iter().all(|&t| t < END));
    }

    #[test]
    fn test_frames_match_time_steps() {
        let mut animation = Animation::new(Hypercube::new(3));
        let times: Vec<f64> = animation.frames().map(|f| f.t).collect();
        let expected: Vec<f64> = time_steps().collect();
        assert_eq!(times, expected);
    }

    #[test]
    fn test_first_frame_is_unrotated() {
        let mut animation = Animation::new(Hypercube::new(5));
        let first = animation.frames().next().unwrap();
        assert_eq!(first.points, Hypercube::new(5).project_to_3d());
    }

    #[test]
    fn test_frames_accumulate_rotation() {
        let mut animation = Animation::new(Hypercube::new(4));
        let last = animation.frames().last().unwrap();

        let mut manual = Hypercube::new(4);
        for t in time_steps() {
            manual.rotate(t);
        }
        assert_eq!(last.points, manual.project_to_3d());
        assert_eq!(animation.cube().vertices(), manual.vertices());
    }

    #[test]
    fn test_frame_has_every_vertex() {
        let mut animation = Animation::new(Hypercube::new(6));
        for frame in animation.frames() {
            assert_eq!(frame.points.len(), 64);
        }
    }
}
