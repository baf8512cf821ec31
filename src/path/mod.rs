//! Path-data transformation engine.
//!
//! Path rotation is a strict pipeline: text is lexed to tokens, built into
//! canonical absolute segments, rotated, and serialized back to text. Only
//! the builder carries state (current point, subpath start, control-point
//! memory); the other stages are pure.

mod parse;
mod segment;
mod tokens;
mod transform;

pub use parse::parse_path;
pub use segment::{path_to_string, Segment};
pub use tokens::{Token, Tokenizer};
pub use transform::rotate_segments;

use crate::errors::Result;
use crate::geometry::Point;

/// Rotate path data about `pivot` by `theta` radians, returning the
/// canonical serialized form.
pub fn rotate_path_data(data: &str, pivot: Point, theta: f64) -> Result<String> {
    let segments = parse_path(data)?;
    let rotated = rotate_segments(&segments, pivot, theta);
    Ok(path_to_string(&rotated))
}
