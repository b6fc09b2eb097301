//! Parser for SVG path data strings
//!
//! Follows the grammar from the
//! [SVG Path Specification](https://www.w3.org/TR/SVG11/paths.html#PathData)
//! with the error recovery browsers apply to the `d` attribute. Parsing never
//! fails, everything from the first invalid segment on is dropped and input
//! not starting with a move to command produces an empty path.
use crate::{PathData, PathSeg, Point, Scalar};

/// Cursor over the bytes of a path data string
pub(crate) struct PathParser<'a> {
    text: &'a [u8],
    offset: usize,
    // previous command letter, drives implicit command repetition
    prev_cmd: Option<u8>,
}

impl<'a> PathParser<'a> {
    pub(crate) fn new(text: &'a [u8]) -> Self {
        let mut parser = Self {
            text,
            offset: 0,
            prev_cmd: None,
        };
        parser.skip_spaces();
        parser
    }

    fn current(&self) -> Option<u8> {
        self.text.get(self.offset).copied()
    }

    fn advance(&mut self, count: usize) {
        self.offset += count;
    }

    pub(crate) fn has_more_data(&self) -> bool {
        self.offset < self.text.len()
    }

    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    pub(crate) fn initial_command_is_move_to(&self) -> bool {
        !self.has_more_data() || matches!(self.current(), Some(b'M' | b'm'))
    }

    fn skip_spaces(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r' | b'\x0c') = self.current() {
            self.advance(1);
        }
    }

    // whitespace with at most one comma, the separator between operands
    fn skip_spaces_or_comma(&mut self) {
        self.skip_spaces();
        if self.current() == Some(b',') {
            self.advance(1);
            self.skip_spaces();
        }
    }

    fn parse_digits(&mut self) -> bool {
        let start = self.offset;
        while matches!(self.current(), Some(byte) if byte.is_ascii_digit()) {
            self.advance(1);
        }
        self.offset > start
    }

    fn parse_number(&mut self) -> Option<Scalar> {
        self.skip_spaces();
        let start = self.offset;

        if matches!(self.current(), Some(b'+' | b'-')) {
            self.advance(1);
        }
        let whole = self.parse_digits();
        let fraction = if self.current() == Some(b'.') {
            self.advance(1);
            if !self.parse_digits() {
                return None;
            }
            true
        } else {
            false
        };
        if !whole && !fraction {
            return None;
        }

        // `e` can open an exponent or a unit such as `em`/`ex`, it only
        // counts as an exponent when followed by something else
        if matches!(self.current(), Some(b'e' | b'E'))
            && !matches!(self.text.get(self.offset + 1), None | Some(b'x' | b'm'))
        {
            self.advance(1);
            if matches!(self.current(), Some(b'+' | b'-')) {
                self.advance(1);
            }
            if !self.parse_digits() {
                return None;
            }
        }

        let number = std::str::from_utf8(&self.text[start..self.offset])
            .ok()
            .and_then(|number| number.parse().ok())?;
        self.skip_spaces_or_comma();
        Some(number)
    }

    fn parse_point(&mut self) -> Option<Point> {
        Some(Point::new(self.parse_number()?, self.parse_number()?))
    }

    // arc flags are bare `0`/`1` characters, they are not full numbers and
    // can run into the next operand without a separator
    fn parse_flag(&mut self) -> Option<bool> {
        let byte = self.current()?;
        self.advance(1);
        let flag = match byte {
            b'0' => false,
            b'1' => true,
            _ => return None,
        };
        self.skip_spaces_or_comma();
        Some(flag)
    }

    /// Parse a single segment, `None` means the input is exhausted as far as
    /// it is valid
    pub(crate) fn parse_segment(&mut self) -> Option<PathSeg> {
        let byte = self.current()?;
        let cmd = match byte {
            b'M' | b'm' | b'L' | b'l' | b'H' | b'h' | b'V' | b'v' | b'C' | b'c' | b'S' | b's'
            | b'Q' | b'q' | b'T' | b't' | b'A' | b'a' => {
                self.advance(1);
                byte
            }
            b'Z' | b'z' => {
                self.advance(1);
                b'Z'
            }
            // an operand where a command is expected repeats the previous
            // command, move to continues as line to
            b'0'..=b'9' | b'+' | b'-' | b'.' => match self.prev_cmd {
                None | Some(b'Z') => return None,
                Some(b'M') => b'L',
                Some(b'm') => b'l',
                Some(cmd) => cmd,
            },
            _ => return None,
        };
        self.prev_cmd = Some(cmd);
        let seg = match cmd {
            b'M' => PathSeg::MoveTo(self.parse_point()?),
            b'm' => PathSeg::MoveToRel(self.parse_point()?),
            b'L' => PathSeg::LineTo(self.parse_point()?),
            b'l' => PathSeg::LineToRel(self.parse_point()?),
            b'H' => PathSeg::HorizTo(self.parse_number()?),
            b'h' => PathSeg::HorizToRel(self.parse_number()?),
            b'V' => PathSeg::VertTo(self.parse_number()?),
            b'v' => PathSeg::VertToRel(self.parse_number()?),
            b'C' => PathSeg::CubicTo(
                self.parse_point()?,
                self.parse_point()?,
                self.parse_point()?,
            ),
            b'c' => PathSeg::CubicToRel(
                self.parse_point()?,
                self.parse_point()?,
                self.parse_point()?,
            ),
            b'S' => PathSeg::SmoothCubicTo(self.parse_point()?, self.parse_point()?),
            b's' => PathSeg::SmoothCubicToRel(self.parse_point()?, self.parse_point()?),
            b'Q' => PathSeg::QuadTo(self.parse_point()?, self.parse_point()?),
            b'q' => PathSeg::QuadToRel(self.parse_point()?, self.parse_point()?),
            b'T' => PathSeg::SmoothQuadTo(self.parse_point()?),
            b't' => PathSeg::SmoothQuadToRel(self.parse_point()?),
            b'A' => PathSeg::ArcTo {
                radii: self.parse_point()?,
                x_axis_rot: self.parse_number()?,
                large: self.parse_flag()?,
                sweep: self.parse_flag()?,
                dst: self.parse_point()?,
            },
            b'a' => PathSeg::ArcToRel {
                radii: self.parse_point()?,
                x_axis_rot: self.parse_number()?,
                large: self.parse_flag()?,
                sweep: self.parse_flag()?,
                dst: self.parse_point()?,
            },
            b'Z' => {
                self.skip_spaces();
                PathSeg::Close
            }
            _ => unreachable!(),
        };
        Some(seg)
    }
}

impl PathData {
    /// Parse SVG path data
    ///
    /// Parsing never fails. Everything from the first invalid segment on is
    /// dropped and input not starting with a move to command produces an
    /// empty path, which is how browsers treat a broken `d` attribute.
    pub fn parse(text: &str) -> PathData {
        let mut parser = PathParser::new(text.as_bytes());
        if !parser.initial_command_is_move_to() {
            return PathData::empty();
        }
        let mut segments = Vec::new();
        while parser.has_more_data() {
            match parser.parse_segment() {
                Some(seg) => segments.push(seg),
                None => {
                    tracing::debug!(
                        offset = parser.offset(),
                        "path data truncated at invalid segment"
                    );
                    break;
                }
            }
        }
        PathData::new(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let path = PathData::parse("M0,0 L10,10 L20,0 Z");
        assert_eq!(
            path.segments(),
            &[
                PathSeg::MoveTo(Point::new(0.0, 0.0)),
                PathSeg::LineTo(Point::new(10.0, 10.0)),
                PathSeg::LineTo(Point::new(20.0, 0.0)),
                PathSeg::Close,
            ],
        );
    }

    #[test]
    fn test_parse_relative() {
        let path = PathData::parse("M0,0 l10,0 l0,10z");
        assert_eq!(
            path.segments(),
            &[
                PathSeg::MoveTo(Point::new(0.0, 0.0)),
                PathSeg::LineToRel(Point::new(10.0, 0.0)),
                PathSeg::LineToRel(Point::new(0.0, 10.0)),
                PathSeg::Close,
            ],
        );
    }

    #[test]
    fn test_implicit_repeat() {
        // move to continues as line to
        let path = PathData::parse("M0,0 5,5 10,10");
        assert_eq!(
            path.segments(),
            &[
                PathSeg::MoveTo(Point::new(0.0, 0.0)),
                PathSeg::LineTo(Point::new(5.0, 5.0)),
                PathSeg::LineTo(Point::new(10.0, 10.0)),
            ],
        );

        let path = PathData::parse("m1,1 2,2");
        assert_eq!(
            path.segments(),
            &[
                PathSeg::MoveToRel(Point::new(1.0, 1.0)),
                PathSeg::LineToRel(Point::new(2.0, 2.0)),
            ],
        );

        let path = PathData::parse("M0,0 C1,1 2,2 3,3 4,4 5,5 6,6");
        assert_eq!(path.len(), 3);
        assert_eq!(
            path.segments()[2],
            PathSeg::CubicTo(
                Point::new(4.0, 4.0),
                Point::new(5.0, 5.0),
                Point::new(6.0, 6.0),
            ),
        );

        // close does not repeat, trailing operands are dropped
        let path = PathData::parse("M0,0 Z 5,5");
        assert_eq!(
            path.segments(),
            &[PathSeg::MoveTo(Point::new(0.0, 0.0)), PathSeg::Close],
        );
    }

    #[test]
    fn test_first_command_must_be_move_to() {
        assert!(PathData::parse("L10,10").is_empty());
        assert!(PathData::parse("").is_empty());
        assert!(PathData::parse("   ").is_empty());
        assert!(PathData::parse("10,10 L20,20").is_empty());
    }

    #[test]
    fn test_truncate_at_invalid() {
        let path = PathData::parse("M0,0 L10,");
        assert_eq!(path.segments(), &[PathSeg::MoveTo(Point::new(0.0, 0.0))]);

        let path = PathData::parse("M0,0L5,5x7,7");
        assert_eq!(
            path.segments(),
            &[
                PathSeg::MoveTo(Point::new(0.0, 0.0)),
                PathSeg::LineTo(Point::new(5.0, 5.0)),
            ],
        );

        // move to without operands
        assert!(PathData::parse("M").is_empty());
    }

    #[test]
    fn test_number_forms() {
        let path = PathData::parse("M.5,-0.5 L1e2,1E+2 L-1.5e-1,+4.");
        assert_eq!(path.len(), 2);
        assert_eq!(path.segments()[0], PathSeg::MoveTo(Point::new(0.5, -0.5)));
        assert_eq!(
            path.segments()[1],
            PathSeg::LineTo(Point::new(100.0, 100.0)),
        );

        // numbers can run together on sign and decimal dot
        let path = PathData::parse("M0-5L0.5.25Z");
        assert_eq!(
            path.segments(),
            &[
                PathSeg::MoveTo(Point::new(0.0, -5.0)),
                PathSeg::LineTo(Point::new(0.5, 0.25)),
                PathSeg::Close,
            ],
        );
    }

    #[test]
    fn test_number_units_are_invalid() {
        // `1em`/`1ex` are css lengths, the `e` is not an exponent and the
        // unit still makes the segment invalid
        assert_eq!(PathData::parse("M1em,0").len(), 0);
        assert_eq!(PathData::parse("M0,0 L1ex,0").len(), 1);
        // exponent at the end of input has no digits to consume
        assert_eq!(PathData::parse("M0,0 L1e,0").len(), 1);
        assert_eq!(PathData::parse("M0,0 L5,1e").len(), 1);
    }

    #[test]
    fn test_flags() {
        // flags do not need separators from the following operands
        let path = PathData::parse("M0,0 A5,5,0,01,10,10");
        assert_eq!(
            path.segments()[1],
            PathSeg::ArcTo {
                radii: Point::new(5.0, 5.0),
                x_axis_rot: 0.0,
                large: false,
                sweep: true,
                dst: Point::new(10.0, 10.0),
            },
        );

        let path = PathData::parse("M0,0 a 25,25 -30 0,1 50,-25");
        assert_eq!(
            path.segments()[1],
            PathSeg::ArcToRel {
                radii: Point::new(25.0, 25.0),
                x_axis_rot: -30.0,
                large: false,
                sweep: true,
                dst: Point::new(50.0, -25.0),
            },
        );

        // anything but 0/1 is not a flag
        let path = PathData::parse("M0,0 A5,5,0,2,1,10,10");
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn test_separators() {
        let path = PathData::parse("M 0 \t 0 , 10\n,\r20");
        assert_eq!(
            path.segments(),
            &[
                PathSeg::MoveTo(Point::new(0.0, 0.0)),
                PathSeg::LineTo(Point::new(10.0, 20.0)),
            ],
        );

        // form feed counts as whitespace
        let path = PathData::parse("M0\x0c0");
        assert_eq!(path.segments(), &[PathSeg::MoveTo(Point::new(0.0, 0.0))]);

        // two commas in a row are not a valid separator
        let path = PathData::parse("M0,,0");
        assert!(path.is_empty());
    }

    #[test]
    fn test_number_grammar() {
        fn number(text: &str) -> Option<Scalar> {
            PathParser::new(text.as_bytes()).parse_number()
        }
        assert_eq!(number("1"), Some(1.0));
        assert_eq!(number(".5"), Some(0.5));
        assert_eq!(number("-.5"), Some(-0.5));
        assert_eq!(number("1E+2"), Some(100.0));
        assert_eq!(number("1e-2"), Some(0.01));
        assert_eq!(number("1ex"), Some(1.0));
        assert_eq!(number("1em"), Some(1.0));
        assert_eq!(number("1e"), Some(1.0));
        assert_eq!(number("5.e3"), None);
        assert_eq!(number("5."), None);
        assert_eq!(number("."), None);
        assert_eq!(number("+"), None);
        assert_eq!(number(""), None);
        assert_eq!(number("e5"), None);
    }
}
