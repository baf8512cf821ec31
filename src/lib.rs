//! ## svgrot - rotate SVG documents about their viewBox centre
//!
//! `svgrot` is normally run as a command line tool, rotating an input SVG
//! file by a given angle and writing the result to an output file.
//!
//! ## Library use
//!
//! Library support is primarily to allow other front-ends to rotate SVG
//! documents without calling `svgrot` as a command-line subprocess.
//!
//! Create a `RotateConfig` with the desired angle (degrees) and call the
//! appropriate `rotate_*` function. The rotation pivot is always the
//! centre of the root element's `viewBox`; a document without one fails
//! with `Error::MissingPivot`.
//!
//! Errors are reported via `svgrot::Result`; the error kinds distinguish
//! malformed path data, unsupported path commands, and a missing pivot,
//! and no output is produced if any element of the document fails.
//!
//! ## Example
//!
//! ```
//! let cfg = svgrot::RotateConfig { angle: 180. };
//!
//! let input = r#"<svg viewBox="0 0 100 100"><path d="M10 10 L90 10 L90 90 Z"/></svg>"#;
//! let output = svgrot::rotate_str(input, &cfg).unwrap();
//!
//! assert!(output.contains(r#"d="M90 90 L10 90 L10 10 Z""#));
//! ```

use std::fs;
use std::io::{BufRead, BufReader, Cursor, Write};

#[cfg(feature = "cli")]
pub mod cli;
mod element;
pub mod errors;
mod geometry;
mod path;
mod shapes;
mod transform;
mod types;

pub use errors::{Error, Result};
pub use geometry::{rotate_point, Point, ViewBox};
pub use path::{parse_path, path_to_string, rotate_path_data, rotate_segments, Segment};
use transform::Rotator;

// Allow users of this as a library to easily retrieve the version of svgrot being used
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Settings for a single document rotation.
///
/// Alternate front-ends may use this directly rather than `cli::Config`,
/// which wraps this struct when `svgrot` is run as a command-line program.
#[derive(Clone, Debug)]
pub struct RotateConfig {
    /// Rotation angle in degrees; positive values rotate towards
    /// positive y (clockwise in the default SVG coordinate system)
    pub angle: f64,
}

impl Default for RotateConfig {
    fn default() -> Self {
        Self { angle: 0. }
    }
}

/// Reads an SVG document from `reader`, rotates it, and writes to `writer`.
///
/// The entire stream is read and transformed before any data is written
/// to `writer`.
pub fn rotate_stream(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    config: &RotateConfig,
) -> Result<()> {
    let rotator = Rotator::from_config(config);
    rotator.rotate(reader, writer)
}

/// Rotate `input` provided as a string, returning the result as a string.
pub fn rotate_str<T: Into<String>>(input: T, config: &RotateConfig) -> Result<String> {
    let input = input.into();

    let mut input = Cursor::new(input);
    let mut output: Vec<u8> = vec![];

    rotate_stream(&mut input, &mut output, config)?;

    Ok(String::from_utf8(output).expect("Non-UTF8 output generated"))
}

/// Rotate `input` using the default config, returning the result as a string.
///
/// The default angle is zero, so this canonicalizes path data to absolute
/// commands without moving anything.
pub fn rotate_str_default<T: Into<String>>(input: T) -> Result<String> {
    rotate_str(input, &RotateConfig::default())
}

/// Rotate the document at `input`, writing the result to `output`.
///
/// `'-'` may be given for stdin/stdout respectively. Output is buffered
/// in memory until the whole document has transformed successfully, so a
/// failure never leaves a partial artifact behind.
pub fn rotate_file(input: &str, output: &str, config: &RotateConfig) -> Result<()> {
    let mut reader: Box<dyn BufRead> = if input == "-" {
        Box::new(BufReader::new(std::io::stdin()))
    } else {
        Box::new(BufReader::new(fs::File::open(input)?))
    };

    let mut buffer: Vec<u8> = vec![];
    rotate_stream(&mut reader, &mut buffer, config)?;

    if output == "-" {
        std::io::stdout().write_all(&buffer)?;
    } else {
        fs::write(output, &buffer)?;
    }
    Ok(())
}
