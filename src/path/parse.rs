use super::segment::Segment;
use super::tokens::{Token, Tokenizer};
use crate::errors::{Error, Result};
use crate::geometry::Point;

/// State threaded through command handlers while building absolute segments.
///
/// `last_command` holds the letter of the previous command *run*: implicit
/// repetitions of a command don't update it until the run completes, which
/// is what the smooth-curve reflection rules key off.
#[derive(Debug, Clone, Copy, Default)]
struct ParserState {
    current: Point,
    subpath_start: Point,
    last_command: Option<char>,
    /// last cubic second control point, reflected by S
    last_cubic_ctrl: Option<Point>,
    /// last quadratic control point, reflected by T
    last_quad_ctrl: Option<Point>,
}

/// Consumes a token stream and emits canonical absolute segments.
///
/// Relative coordinates are resolved against the current point as each
/// group is read, so emitted segments carry absolute coordinates only.
struct PathParser {
    tokens: Vec<Token>,
    index: usize,
    command: Option<char>,
    state: ParserState,
    segments: Vec<Segment>,
}

/// Parse path data to a sequence of absolute segments.
pub fn parse_path(data: &str) -> Result<Vec<Segment>> {
    PathParser::new(data).parse()
}

impl PathParser {
    fn new(data: &str) -> Self {
        Self {
            tokens: Tokenizer::new(data).collect(),
            index: 0,
            command: None,
            state: ParserState::default(),
            segments: Vec::new(),
        }
    }

    fn parse(mut self) -> Result<Vec<Segment>> {
        while let Some(&token) = self.tokens.get(self.index) {
            match token {
                Token::Command(cmd) => {
                    self.index += 1;
                    self.command = Some(cmd);
                    self.process_command(cmd)?;
                    self.state.last_command = Some(cmd);
                }
                Token::Number(_) => {
                    // command handlers consume all trailing numbers, so a
                    // bare number can only appear at the start of the stream
                    return Err(Error::MalformedPath(
                        "path data begins with a number; implicit repetition needs a command"
                            .to_string(),
                    ));
                }
            }
        }
        Ok(self.segments)
    }

    fn process_command(&mut self, cmd: char) -> Result<()> {
        let relative = cmd.is_ascii_lowercase();
        match cmd.to_ascii_uppercase() {
            'M' => self.moveto(relative),
            'Z' => self.closepath(),
            'L' => self.lineto(relative),
            'H' => self.axis_lineto(relative, true),
            'V' => self.axis_lineto(relative, false),
            'C' => self.cubic(relative),
            'S' => self.smooth_cubic(relative),
            'Q' => self.quadratic(relative),
            'T' => self.smooth_quadratic(relative),
            'A' => self.arc(relative),
            // the tokenizer only emits recognized command letters, so via
            // `parse_path` this arm is unreachable
            _ => Err(Error::UnsupportedCommand(cmd)),
        }
    }

    fn at_number(&self) -> bool {
        matches!(self.tokens.get(self.index), Some(Token::Number(_)))
    }

    fn read_number(&mut self) -> Result<f64> {
        match self.tokens.get(self.index) {
            Some(Token::Number(value)) => {
                self.index += 1;
                Ok(*value)
            }
            _ => {
                let cmd = self.command.unwrap_or('?');
                Err(Error::MalformedPath(format!(
                    "'{cmd}' command needs more numbers"
                )))
            }
        }
    }

    /// Read a coordinate pair, resolving relative values against the
    /// current point.
    fn read_coord(&mut self, relative: bool) -> Result<Point> {
        let x = self.read_number()?;
        let y = self.read_number()?;
        Ok(if relative {
            Point::new(self.state.current.x + x, self.state.current.y + y)
        } else {
            Point::new(x, y)
        })
    }

    fn clear_ctrl_memory(&mut self) {
        self.state.last_cubic_ctrl = None;
        self.state.last_quad_ctrl = None;
    }

    fn moveto(&mut self, relative: bool) -> Result<()> {
        let p = self.read_coord(relative)?;
        self.segments.push(Segment::MoveTo(p));
        self.state.current = p;
        self.state.subpath_start = p;
        self.clear_ctrl_memory();
        // excess coordinate pairs are implicit linetos
        while self.at_number() {
            let p = self.read_coord(relative)?;
            self.segments.push(Segment::LineTo(p));
            self.state.current = p;
        }
        Ok(())
    }

    fn closepath(&mut self) -> Result<()> {
        self.segments.push(Segment::ClosePath);
        self.state.current = self.state.subpath_start;
        self.clear_ctrl_memory();
        Ok(())
    }

    fn lineto(&mut self, relative: bool) -> Result<()> {
        while self.at_number() {
            let p = self.read_coord(relative)?;
            self.segments.push(Segment::LineTo(p));
            self.state.current = p;
        }
        self.clear_ctrl_memory();
        Ok(())
    }

    /// H (horizontal=true) and V commands: a single number per group,
    /// updating one axis of the current point.
    fn axis_lineto(&mut self, relative: bool, horizontal: bool) -> Result<()> {
        while self.at_number() {
            let value = self.read_number()?;
            let cur = self.state.current;
            self.state.current = if horizontal {
                Point::new(if relative { cur.x + value } else { value }, cur.y)
            } else {
                Point::new(cur.x, if relative { cur.y + value } else { value })
            };
            self.segments.push(Segment::LineTo(self.state.current));
        }
        self.clear_ctrl_memory();
        Ok(())
    }

    fn cubic(&mut self, relative: bool) -> Result<()> {
        while self.at_number() {
            let ctrl1 = self.read_coord(relative)?;
            let ctrl2 = self.read_coord(relative)?;
            let end = self.read_coord(relative)?;
            self.segments.push(Segment::CubicCurve { ctrl1, ctrl2, end });
            self.state.current = end;
            self.state.last_cubic_ctrl = Some(ctrl2);
            self.state.last_quad_ctrl = None;
        }
        Ok(())
    }

    fn smooth_cubic(&mut self, relative: bool) -> Result<()> {
        let reflect = matches!(self.state.last_command, Some('C' | 'c' | 'S' | 's'));
        while self.at_number() {
            let ctrl2 = self.read_coord(relative)?;
            let end = self.read_coord(relative)?;
            let cur = self.state.current;
            let ctrl1 = match self.state.last_cubic_ctrl {
                Some(prev) if reflect => Point::new(2. * cur.x - prev.x, 2. * cur.y - prev.y),
                _ => cur,
            };
            self.segments.push(Segment::CubicCurve { ctrl1, ctrl2, end });
            self.state.current = end;
            self.state.last_cubic_ctrl = Some(ctrl2);
            self.state.last_quad_ctrl = None;
        }
        Ok(())
    }

    fn quadratic(&mut self, relative: bool) -> Result<()> {
        while self.at_number() {
            let ctrl = self.read_coord(relative)?;
            let end = self.read_coord(relative)?;
            self.segments.push(Segment::QuadraticCurve { ctrl, end });
            self.state.current = end;
            self.state.last_quad_ctrl = Some(ctrl);
            self.state.last_cubic_ctrl = None;
        }
        Ok(())
    }

    fn smooth_quadratic(&mut self, relative: bool) -> Result<()> {
        let reflect = matches!(self.state.last_command, Some('Q' | 'q' | 'T' | 't'));
        while self.at_number() {
            let end = self.read_coord(relative)?;
            let cur = self.state.current;
            let ctrl = match self.state.last_quad_ctrl {
                Some(prev) if reflect => Point::new(2. * cur.x - prev.x, 2. * cur.y - prev.y),
                _ => cur,
            };
            self.segments.push(Segment::QuadraticCurve { ctrl, end });
            self.state.current = end;
            // record the *effective* control point so a T run chains
            self.state.last_quad_ctrl = Some(ctrl);
            self.state.last_cubic_ctrl = None;
        }
        Ok(())
    }

    fn arc(&mut self, relative: bool) -> Result<()> {
        while self.at_number() {
            let rx = self.read_number()?;
            let ry = self.read_number()?;
            let x_axis_rotation = self.read_number()?;
            // flags may lex as arbitrary numerics; any nonzero is true
            let large_arc = self.read_number()? != 0.;
            let sweep = self.read_number()? != 0.;
            let end = self.read_coord(relative)?;
            self.segments.push(Segment::Arc {
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                end,
            });
            self.state.current = end;
        }
        self.clear_ctrl_memory();
        Ok(())
    }
}
