use std::fmt;

use itertools::Itertools;

use crate::geometry::Point;
use crate::types::fstr;

/// A canonical path segment: absolute coordinates only.
///
/// Once the parser has produced these, no relative/shorthand semantics
/// remain - H/V collapse to `LineTo`, S/T to `CubicCurve`/`QuadraticCurve`
/// with their reflected control points resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    MoveTo(Point),
    LineTo(Point),
    CubicCurve {
        ctrl1: Point,
        ctrl2: Point,
        end: Point,
    },
    QuadraticCurve {
        ctrl: Point,
        end: Point,
    },
    Arc {
        rx: f64,
        ry: f64,
        /// degrees; kept as given (normalized on rotation, not here)
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        end: Point,
    },
    ClosePath,
}

impl fmt::Display for Segment {
    fn fmt(&self, w: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Segment::MoveTo(p) => write!(w, "M{} {}", fstr(p.x), fstr(p.y)),
            Segment::LineTo(p) => write!(w, "L{} {}", fstr(p.x), fstr(p.y)),
            Segment::CubicCurve { ctrl1, ctrl2, end } => write!(
                w,
                "C{} {} {} {} {} {}",
                fstr(ctrl1.x),
                fstr(ctrl1.y),
                fstr(ctrl2.x),
                fstr(ctrl2.y),
                fstr(end.x),
                fstr(end.y)
            ),
            Segment::QuadraticCurve { ctrl, end } => write!(
                w,
                "Q{} {} {} {}",
                fstr(ctrl.x),
                fstr(ctrl.y),
                fstr(end.x),
                fstr(end.y)
            ),
            Segment::Arc {
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                end,
            } => write!(
                w,
                "A{} {} {} {} {} {} {}",
                fstr(rx),
                fstr(ry),
                fstr(x_axis_rotation),
                large_arc as u8,
                sweep as u8,
                fstr(end.x),
                fstr(end.y)
            ),
            Segment::ClosePath => write!(w, "Z"),
        }
    }
}

/// Render a segment sequence back to path-data text, single-space separated.
pub fn path_to_string(segments: &[Segment]) -> String {
    segments.iter().map(|seg| seg.to_string()).join(" ")
}
