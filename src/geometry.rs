use std::str::FromStr;

use crate::errors::{Error, Result};
use crate::types::{attr_split, strp};

/// A 2-D point in user coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Rigid rotation of `p` about `pivot` by `theta` radians.
pub fn rotate_point(p: Point, pivot: Point, theta: f64) -> Point {
    let (sin_t, cos_t) = theta.sin_cos();
    let dx = p.x - pivot.x;
    let dy = p.y - pivot.y;
    Point {
        x: pivot.x + dx * cos_t - dy * sin_t,
        y: pivot.y + dx * sin_t + dy * cos_t,
    }
}

/// The root `viewBox` attribute: min-x, min-y, width, height.
///
/// Only used to derive the rotation pivot; width/height may be zero,
/// in which case the pivot degenerates to the min corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl FromStr for ViewBox {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let parts = attr_split(value)
            .map(|v| strp(&v))
            .collect::<Result<Vec<_>>>()?;
        if let [min_x, min_y, width, height] = parts[..] {
            Ok(Self {
                min_x,
                min_y,
                width,
                height,
            })
        } else {
            Err(Error::Parse(format!(
                "viewBox requires 4 values, got {}: '{value}'",
                parts.len()
            )))
        }
    }
}

impl ViewBox {
    pub fn center(&self) -> Point {
        Point::new(self.min_x + self.width / 2., self.min_y + self.height / 2.)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assertables::assert_in_delta;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_rotate_point_quarter() {
        let p = rotate_point(
            Point::new(1., 0.),
            Point::new(0., 0.),
            90_f64.to_radians(),
        );
        assert_in_delta!(p.x, 0., EPS);
        assert_in_delta!(p.y, 1., EPS);
    }

    #[test]
    fn test_rotate_point_offset_pivot() {
        let p = rotate_point(
            Point::new(10., 10.),
            Point::new(50., 50.),
            180_f64.to_radians(),
        );
        assert_in_delta!(p.x, 90., EPS);
        assert_in_delta!(p.y, 90., EPS);
    }

    #[test]
    fn test_rotate_point_identity() {
        let p = rotate_point(Point::new(3.5, -2.), Point::new(1., 1.), 0.);
        assert_eq!(p, Point::new(3.5, -2.));
    }

    #[test]
    fn test_rotate_point_inverse() {
        let pivot = Point::new(12., -7.);
        let theta = 0.321;
        let p = rotate_point(Point::new(3., 4.), pivot, theta);
        let q = rotate_point(p, pivot, -theta);
        assert_in_delta!(q.x, 3., EPS);
        assert_in_delta!(q.y, 4., EPS);
    }

    #[test]
    fn test_viewbox_parse() {
        let vb: ViewBox = "0 0 100 100".parse().unwrap();
        assert_eq!(vb.center(), Point::new(50., 50.));

        let vb: ViewBox = "-10, -20, 40, 10".parse().unwrap();
        assert_eq!(vb.center(), Point::new(10., -15.));

        assert!("0 0 100".parse::<ViewBox>().is_err());
        assert!("0 0 100 abc".parse::<ViewBox>().is_err());
    }
}
