use std::io::{BufRead, Write};

use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};

use crate::element::SvgElement;
use crate::errors::{Error, Result};
use crate::geometry::{Point, ViewBox};
use crate::shapes::rotate_element;
use crate::RotateConfig;

/// Applies a whole-document rotation: pivot discovery, per-element
/// rewriting, and output serialization.
pub struct Rotator {
    angle: f64,
}

impl Rotator {
    pub fn from_config(config: &RotateConfig) -> Self {
        Self {
            angle: config.angle,
        }
    }

    /// Rotate the document on `reader`, writing the result to `writer`.
    ///
    /// The entire input is read and transformed before anything is
    /// written, so a failure on any element produces no output at all.
    pub fn rotate(&self, reader: &mut dyn BufRead, writer: &mut dyn Write) -> Result<()> {
        let events = read_events(reader)?;
        let pivot = find_pivot(&events)?;
        let theta = self.angle.to_radians();

        let mut output = Vec::with_capacity(events.len());
        for (event, line) in events {
            output.push(rotate_event(event, line, pivot, theta)?);
        }

        let mut writer = Writer::new(writer);
        for event in output {
            writer.write_event(event).map_err(Error::from_err)?;
        }
        Ok(())
    }
}

fn read_events(reader: &mut dyn BufRead) -> Result<Vec<(Event<'static>, usize)>> {
    let mut reader = Reader::from_reader(reader);

    let mut events = Vec::new();
    let mut buf = Vec::new();
    let mut src_line = 1;
    loop {
        let ev = reader
            .read_event_into(&mut buf)
            .map_err(|e| Error::Document(format!("XML error near line {src_line}: {e:?}")))?;
        if matches!(ev, Event::Eof) {
            break;
        }
        let event_lines = ev.as_ref().iter().filter(|&&c| c == b'\n').count();
        events.push((ev.into_owned(), src_line));
        src_line += event_lines;
        buf.clear();
    }
    Ok(events)
}

/// Pivot is the centre of the root svg element's viewBox.
fn find_pivot(events: &[(Event<'static>, usize)]) -> Result<Point> {
    for (event, _) in events {
        if let Event::Start(bs) | Event::Empty(bs) = event {
            let el = SvgElement::try_from(bs)?;
            if el.local_name() == "svg" {
                let view_box: ViewBox = el
                    .get_attr("viewBox")
                    .ok_or(Error::MissingPivot)?
                    .parse()?;
                return Ok(view_box.center());
            }
        }
    }
    Err(Error::MissingPivot)
}

fn rotate_event(
    event: Event<'static>,
    line: usize,
    pivot: Point,
    theta: f64,
) -> Result<Event<'static>> {
    match event {
        Event::Start(bs) => Ok(Event::Start(rotate_start(&bs, line, pivot, theta)?)),
        Event::Empty(bs) => Ok(Event::Empty(rotate_start(&bs, line, pivot, theta)?)),
        // decl, comments, text, CDATA, PIs, end tags: echo unchanged
        other => Ok(other),
    }
}

fn rotate_start(
    bs: &BytesStart<'static>,
    line: usize,
    pivot: Point,
    theta: f64,
) -> Result<BytesStart<'static>> {
    let mut el = SvgElement::try_from(bs)?;
    let name = el.name.clone();
    rotate_element(&mut el, pivot, theta).map_err(|err| locate(err, &name, line))?;
    Ok(el.into())
}

/// Add element/line context to data-level errors without changing their
/// kind, so callers can still match on the error variant.
fn locate(err: Error, name: &str, line: usize) -> Error {
    match err {
        Error::MalformedPath(reason) => {
            Error::MalformedPath(format!("<{name}> near line {line}: {reason}"))
        }
        Error::Parse(reason) => Error::Parse(format!("<{name}> near line {line}: {reason}")),
        other => other,
    }
}
