use super::segment::Segment;
use crate::geometry::{rotate_point, Point};

/// Rotate every segment about `pivot` by `theta` radians.
///
/// Purely structural: sequence order and length are preserved. Arc radii
/// and flags are invariant under rigid rotation (it is not a reflection,
/// so sweep direction and size class cannot change); only the arc's
/// x-axis-rotation accumulates the angle, normalized to [0, 360).
pub fn rotate_segments(segments: &[Segment], pivot: Point, theta: f64) -> Vec<Segment> {
    segments
        .iter()
        .map(|seg| match *seg {
            Segment::MoveTo(p) => Segment::MoveTo(rotate_point(p, pivot, theta)),
            Segment::LineTo(p) => Segment::LineTo(rotate_point(p, pivot, theta)),
            Segment::CubicCurve { ctrl1, ctrl2, end } => Segment::CubicCurve {
                ctrl1: rotate_point(ctrl1, pivot, theta),
                ctrl2: rotate_point(ctrl2, pivot, theta),
                end: rotate_point(end, pivot, theta),
            },
            Segment::QuadraticCurve { ctrl, end } => Segment::QuadraticCurve {
                ctrl: rotate_point(ctrl, pivot, theta),
                end: rotate_point(end, pivot, theta),
            },
            Segment::Arc {
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                end,
            } => Segment::Arc {
                rx,
                ry,
                x_axis_rotation: (x_axis_rotation + theta.to_degrees()).rem_euclid(360.),
                large_arc,
                sweep,
                end: rotate_point(end, pivot, theta),
            },
            Segment::ClosePath => Segment::ClosePath,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::parse_path;
    use assertables::assert_in_delta;

    const EPS: f64 = 1e-6;

    fn endpoints(segments: &[Segment]) -> Vec<Point> {
        segments
            .iter()
            .filter_map(|seg| match *seg {
                Segment::MoveTo(p) | Segment::LineTo(p) => Some(p),
                Segment::CubicCurve { end, .. }
                | Segment::QuadraticCurve { end, .. }
                | Segment::Arc { end, .. } => Some(end),
                Segment::ClosePath => None,
            })
            .collect()
    }

    fn assert_points_close(a: &[Point], b: &[Point]) {
        assert_eq!(a.len(), b.len());
        for (p, q) in a.iter().zip(b) {
            assert_in_delta!(p.x, q.x, EPS);
            assert_in_delta!(p.y, q.y, EPS);
        }
    }

    const SAMPLE: &str = "M10 10 L90 10 C90 50 70 90 10 90 Q5 50 10 10 A20 10 15 1 0 30 30 Z";

    #[test]
    fn test_zero_rotation_is_identity() {
        let segs = parse_path(SAMPLE).unwrap();
        let rotated = rotate_segments(&segs, Point::new(50., 50.), 0.);
        assert_points_close(&endpoints(&segs), &endpoints(&rotated));
    }

    #[test]
    fn test_inverse_rotation_restores() {
        let segs = parse_path(SAMPLE).unwrap();
        let pivot = Point::new(50., 50.);
        let theta = 73_f64.to_radians();
        let there = rotate_segments(&segs, pivot, theta);
        let back = rotate_segments(&there, pivot, -theta);
        assert_points_close(&endpoints(&segs), &endpoints(&back));
    }

    #[test]
    fn test_full_turn_is_identity() {
        let segs = parse_path(SAMPLE).unwrap();
        let rotated = rotate_segments(&segs, Point::new(50., 50.), 360_f64.to_radians());
        assert_points_close(&endpoints(&segs), &endpoints(&rotated));
    }

    #[test]
    fn test_arc_invariants() {
        let segs = parse_path("M0 0 A20 10 350 1 0 30 30").unwrap();
        let rotated = rotate_segments(&segs, Point::new(0., 0.), 45_f64.to_radians());
        match rotated[1] {
            Segment::Arc {
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                ..
            } => {
                assert_eq!(rx, 20.);
                assert_eq!(ry, 10.);
                assert!(large_arc);
                assert!(!sweep);
                // 350 + 45 wraps into [0, 360)
                assert_in_delta!(x_axis_rotation, 35., EPS);
            }
            _ => panic!("expected arc"),
        }
    }

    #[test]
    fn test_arc_rotation_normalized_for_negative_angle() {
        let segs = parse_path("M0 0 A5 5 10 0 1 10 0").unwrap();
        let rotated = rotate_segments(&segs, Point::new(0., 0.), (-90_f64).to_radians());
        match rotated[1] {
            Segment::Arc {
                x_axis_rotation, ..
            } => {
                assert_in_delta!(x_axis_rotation, 280., EPS);
            }
            _ => panic!("expected arc"),
        }
    }
}
