use itertools::Itertools;

use crate::element::SvgElement;
use crate::errors::{Error, Result};
use crate::geometry::{rotate_point, Point};
use crate::path::rotate_path_data;
use crate::types::{attr_split, fstr, strp};

/// Rewrite the rotatable attributes of `el` in place.
///
/// Every shape reuses the same point-rotation primitive and numeric
/// formatting as the path engine, so output is consistent across shape
/// kinds. Elements missing the relevant attributes (and elements of any
/// other kind) pass through untouched.
pub fn rotate_element(el: &mut SvgElement, pivot: Point, theta: f64) -> Result<()> {
    match el.local_name() {
        "path" => rotate_path(el, pivot, theta),
        "circle" | "ellipse" => rotate_center(el, pivot, theta),
        "rect" => rotate_rect(el, pivot, theta),
        "line" => rotate_line(el, pivot, theta),
        "polygon" | "polyline" => rotate_point_list(el, pivot, theta),
        _ => Ok(()),
    }
}

fn attr_f64(el: &SvgElement, key: &str) -> Result<f64> {
    // only called for keys known to be present
    strp(el.get_attr(key).unwrap_or("0"))
}

fn set_point(el: &mut SvgElement, keys: (&str, &str), p: Point) {
    el.set_attr(keys.0, fstr(p.x));
    el.set_attr(keys.1, fstr(p.y));
}

fn rotate_path(el: &mut SvgElement, pivot: Point, theta: f64) -> Result<()> {
    if let Some(d) = el.get_attr("d") {
        let rotated = rotate_path_data(d, pivot, theta)?;
        el.set_attr("d", rotated);
    }
    Ok(())
}

fn rotate_center(el: &mut SvgElement, pivot: Point, theta: f64) -> Result<()> {
    if el.has_attrs(&["cx", "cy"]) {
        let c = Point::new(attr_f64(el, "cx")?, attr_f64(el, "cy")?);
        set_point(el, ("cx", "cy"), rotate_point(c, pivot, theta));
    }
    Ok(())
}

/// Rects rotate about their own centre, keeping width/height (and any
/// corner radii) fixed; only x/y move.
fn rotate_rect(el: &mut SvgElement, pivot: Point, theta: f64) -> Result<()> {
    if el.has_attrs(&["x", "y", "width", "height"]) {
        let w = attr_f64(el, "width")?;
        let h = attr_f64(el, "height")?;
        let center = Point::new(attr_f64(el, "x")? + w / 2., attr_f64(el, "y")? + h / 2.);
        let center = rotate_point(center, pivot, theta);
        set_point(el, ("x", "y"), Point::new(center.x - w / 2., center.y - h / 2.));
    }
    Ok(())
}

fn rotate_line(el: &mut SvgElement, pivot: Point, theta: f64) -> Result<()> {
    if el.has_attrs(&["x1", "y1", "x2", "y2"]) {
        let p1 = Point::new(attr_f64(el, "x1")?, attr_f64(el, "y1")?);
        let p2 = Point::new(attr_f64(el, "x2")?, attr_f64(el, "y2")?);
        set_point(el, ("x1", "y1"), rotate_point(p1, pivot, theta));
        set_point(el, ("x2", "y2"), rotate_point(p2, pivot, theta));
    }
    Ok(())
}

fn rotate_point_list(el: &mut SvgElement, pivot: Point, theta: f64) -> Result<()> {
    if let Some(points) = el.get_attr("points") {
        let values = attr_split(points)
            .map(|v| strp(&v))
            .collect::<Result<Vec<_>>>()?;
        if values.len() % 2 != 0 {
            return Err(Error::Parse(format!(
                "odd number of values ({}) in points attribute",
                values.len()
            )));
        }
        let rotated = values
            .chunks_exact(2)
            .map(|pair| {
                let p = rotate_point(Point::new(pair[0], pair[1]), pivot, theta);
                format!("{},{}", fstr(p.x), fstr(p.y))
            })
            .join(" ");
        el.set_attr("points", rotated);
    }
    Ok(())
}
