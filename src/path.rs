use crate::{Cubic, EllipArc, Point, Quad, Scalar};
use std::fmt;

/// Single command of an SVG path
///
/// Each variant carries the fixed operand list of its command letter,
/// uppercase letters are absolute and lowercase are relative. `Z` and `z`
/// close the path identically and are both represented by [`PathSeg::Close`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSeg {
    /// Move to position `M`
    MoveTo(Point),
    /// Move to position relative to the current point `m`
    MoveToRel(Point),
    /// Line from the current point `L`
    LineTo(Point),
    /// Relative line from the current point `l`
    LineToRel(Point),
    /// Horizontal line to the given x coordinate `H`
    HorizTo(Scalar),
    /// Horizontal line by the given x offset `h`
    HorizToRel(Scalar),
    /// Vertical line to the given y coordinate `V`
    VertTo(Scalar),
    /// Vertical line by the given y offset `v`
    VertToRel(Scalar),
    /// Cubic bezier with two control points `C`
    CubicTo(Point, Point, Point),
    /// Relative cubic bezier `c`
    CubicToRel(Point, Point, Point),
    /// Cubic bezier with the first control point mirrored `S`
    SmoothCubicTo(Point, Point),
    /// Relative smooth cubic bezier `s`
    SmoothCubicToRel(Point, Point),
    /// Quadratic bezier with a single control point `Q`
    QuadTo(Point, Point),
    /// Relative quadratic bezier `q`
    QuadToRel(Point, Point),
    /// Quadratic bezier with the control point mirrored `T`
    SmoothQuadTo(Point),
    /// Relative smooth quadratic bezier `t`
    SmoothQuadToRel(Point),
    /// Elliptical arc `A`
    ArcTo {
        radii: Point,
        x_axis_rot: Scalar,
        large: bool,
        sweep: bool,
        dst: Point,
    },
    /// Relative elliptical arc `a`
    ArcToRel {
        radii: Point,
        x_axis_rot: Scalar,
        large: bool,
        sweep: bool,
        dst: Point,
    },
    /// Close the current subpath `Z`/`z`
    Close,
}

impl PathSeg {
    /// Whether the segment is a relative (lowercase) command
    pub fn is_relative(&self) -> bool {
        matches!(
            self,
            PathSeg::MoveToRel(_)
                | PathSeg::LineToRel(_)
                | PathSeg::HorizToRel(_)
                | PathSeg::VertToRel(_)
                | PathSeg::CubicToRel(..)
                | PathSeg::SmoothCubicToRel(..)
                | PathSeg::QuadToRel(..)
                | PathSeg::SmoothQuadToRel(_)
                | PathSeg::ArcToRel { .. }
        )
    }
}

/// Mirror state used to resolve smooth curve control points
///
/// Only a curve segment directly preceding the smooth one donates its
/// control point, and only within the same curve family.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Reflection {
    None,
    Cubic(Point),
    Quad(Point),
}

/// Collection of path segments produced by parsing or by one of the passes
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, PartialEq, Default)]
pub struct PathData {
    segments: Vec<PathSeg>,
}

impl fmt::Debug for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for seg in self.segments.iter() {
            writeln!(f, "{:?}", seg)?;
        }
        Ok(())
    }
}

impl PathData {
    /// Create path data from a list of segments
    pub fn new(segments: Vec<PathSeg>) -> Self {
        Self { segments }
    }

    /// Create empty path data
    pub fn empty() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// List of segments
    pub fn segments(&self) -> &[PathSeg] {
        &self.segments
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Rewrite every relative command as its absolute counterpart
    ///
    /// Output has the same length as the input, horizontal/vertical lines
    /// stay horizontal/vertical, arcs keep their radii, rotation and flags.
    /// Applying it a second time changes nothing.
    pub fn absolutize(&self) -> PathData {
        let mut out = Vec::with_capacity(self.segments.len());
        let mut current = Point::new(0.0, 0.0);
        let mut subpath_start = current;
        for seg in self.segments.iter() {
            match *seg {
                PathSeg::MoveTo(p) => {
                    out.push(PathSeg::MoveTo(p));
                    current = p;
                    subpath_start = p;
                }
                PathSeg::MoveToRel(p) => {
                    let p = current + p;
                    out.push(PathSeg::MoveTo(p));
                    current = p;
                    subpath_start = p;
                }
                PathSeg::LineTo(p) => {
                    out.push(PathSeg::LineTo(p));
                    current = p;
                }
                PathSeg::LineToRel(p) => {
                    let p = current + p;
                    out.push(PathSeg::LineTo(p));
                    current = p;
                }
                PathSeg::HorizTo(x) => {
                    out.push(PathSeg::HorizTo(x));
                    current = Point::new(x, current.y());
                }
                PathSeg::HorizToRel(dx) => {
                    let x = current.x() + dx;
                    out.push(PathSeg::HorizTo(x));
                    current = Point::new(x, current.y());
                }
                PathSeg::VertTo(y) => {
                    out.push(PathSeg::VertTo(y));
                    current = Point::new(current.x(), y);
                }
                PathSeg::VertToRel(dy) => {
                    let y = current.y() + dy;
                    out.push(PathSeg::VertTo(y));
                    current = Point::new(current.x(), y);
                }
                PathSeg::CubicTo(p1, p2, p3) => {
                    out.push(PathSeg::CubicTo(p1, p2, p3));
                    current = p3;
                }
                PathSeg::CubicToRel(p1, p2, p3) => {
                    let (p1, p2, p3) = (current + p1, current + p2, current + p3);
                    out.push(PathSeg::CubicTo(p1, p2, p3));
                    current = p3;
                }
                PathSeg::SmoothCubicTo(p2, p3) => {
                    out.push(PathSeg::SmoothCubicTo(p2, p3));
                    current = p3;
                }
                PathSeg::SmoothCubicToRel(p2, p3) => {
                    let (p2, p3) = (current + p2, current + p3);
                    out.push(PathSeg::SmoothCubicTo(p2, p3));
                    current = p3;
                }
                PathSeg::QuadTo(p1, p2) => {
                    out.push(PathSeg::QuadTo(p1, p2));
                    current = p2;
                }
                PathSeg::QuadToRel(p1, p2) => {
                    let (p1, p2) = (current + p1, current + p2);
                    out.push(PathSeg::QuadTo(p1, p2));
                    current = p2;
                }
                PathSeg::SmoothQuadTo(p) => {
                    out.push(PathSeg::SmoothQuadTo(p));
                    current = p;
                }
                PathSeg::SmoothQuadToRel(p) => {
                    let p = current + p;
                    out.push(PathSeg::SmoothQuadTo(p));
                    current = p;
                }
                PathSeg::ArcTo {
                    radii,
                    x_axis_rot,
                    large,
                    sweep,
                    dst,
                } => {
                    out.push(PathSeg::ArcTo {
                        radii,
                        x_axis_rot,
                        large,
                        sweep,
                        dst,
                    });
                    current = dst;
                }
                PathSeg::ArcToRel {
                    radii,
                    x_axis_rot,
                    large,
                    sweep,
                    dst,
                } => {
                    // only the endpoint is offset, radii/rotation/flags are
                    // not coordinates
                    let dst = current + dst;
                    out.push(PathSeg::ArcTo {
                        radii,
                        x_axis_rot,
                        large,
                        sweep,
                        dst,
                    });
                    current = dst;
                }
                PathSeg::Close => {
                    out.push(PathSeg::Close);
                    current = subpath_start;
                }
            }
        }
        PathData { segments: out }
    }

    /// Rewrite absolute path data using only `M`/`L`/`C`/`Z` segments
    ///
    /// Horizontal and vertical lines become plain lines, smooth curves get
    /// their mirrored control point resolved, quadratic curves are raised to
    /// cubics and arcs are converted to cubic runs. Expects output of
    /// [`PathData::absolutize`], relative segments are dropped.
    pub fn reduce(&self) -> PathData {
        let mut out = Vec::with_capacity(self.segments.len());
        let mut current = Point::new(0.0, 0.0);
        let mut subpath_start = current;
        let mut reflect = Reflection::None;
        for seg in self.segments.iter() {
            let mut reflect_next = Reflection::None;
            match *seg {
                PathSeg::MoveTo(p) => {
                    out.push(PathSeg::MoveTo(p));
                    current = p;
                    subpath_start = p;
                }
                PathSeg::LineTo(p) => {
                    out.push(PathSeg::LineTo(p));
                    current = p;
                }
                PathSeg::HorizTo(x) => {
                    let p = Point::new(x, current.y());
                    out.push(PathSeg::LineTo(p));
                    current = p;
                }
                PathSeg::VertTo(y) => {
                    let p = Point::new(current.x(), y);
                    out.push(PathSeg::LineTo(p));
                    current = p;
                }
                PathSeg::CubicTo(p1, p2, p3) => {
                    out.push(PathSeg::CubicTo(p1, p2, p3));
                    reflect_next = Reflection::Cubic(p2);
                    current = p3;
                }
                PathSeg::SmoothCubicTo(p2, p3) => {
                    let p1 = match reflect {
                        Reflection::Cubic(ctrl) => 2.0 * current - ctrl,
                        _ => current,
                    };
                    out.push(PathSeg::CubicTo(p1, p2, p3));
                    reflect_next = Reflection::Cubic(p2);
                    current = p3;
                }
                PathSeg::QuadTo(q1, p2) => {
                    let Cubic([_, c1, c2, _]) = Quad([current, q1, p2]).elevate();
                    out.push(PathSeg::CubicTo(c1, c2, p2));
                    reflect_next = Reflection::Quad(q1);
                    current = p2;
                }
                PathSeg::SmoothQuadTo(p2) => {
                    let q1 = match reflect {
                        Reflection::Quad(ctrl) => 2.0 * current - ctrl,
                        _ => current,
                    };
                    let Cubic([_, c1, c2, _]) = Quad([current, q1, p2]).elevate();
                    out.push(PathSeg::CubicTo(c1, c2, p2));
                    reflect_next = Reflection::Quad(q1);
                    current = p2;
                }
                PathSeg::ArcTo {
                    radii,
                    x_axis_rot,
                    large,
                    sweep,
                    dst,
                } => {
                    let Point([rx, ry]) = radii;
                    if rx == 0.0 || ry == 0.0 {
                        // arc degenerates to a straight line in cubic form
                        out.push(PathSeg::CubicTo(current, dst, dst));
                        current = dst;
                    } else if current != dst {
                        match EllipArc::new_param(current, dst, rx, ry, x_axis_rot, large, sweep) {
                            Some(arc) => {
                                for cubic in arc.to_cubics() {
                                    let [_, p1, p2, p3] = cubic.points();
                                    out.push(PathSeg::CubicTo(p1, p2, p3));
                                }
                            }
                            None => out.push(PathSeg::CubicTo(current, dst, dst)),
                        }
                        current = dst;
                    }
                }
                PathSeg::Close => {
                    out.push(PathSeg::Close);
                    current = subpath_start;
                }
                // reduce operates on absolute path data, relative segments
                // are dropped
                PathSeg::MoveToRel(_)
                | PathSeg::LineToRel(_)
                | PathSeg::HorizToRel(_)
                | PathSeg::VertToRel(_)
                | PathSeg::CubicToRel(..)
                | PathSeg::SmoothCubicToRel(..)
                | PathSeg::QuadToRel(..)
                | PathSeg::SmoothQuadToRel(_)
                | PathSeg::ArcToRel { .. } => {}
            }
            reflect = reflect_next;
        }
        PathData { segments: out }
    }

    /// Absolutize and reduce in one call
    pub fn normalize(&self) -> PathData {
        self.absolutize().reduce()
    }
}

impl IntoIterator for PathData {
    type Item = PathSeg;
    type IntoIter = std::vec::IntoIter<PathSeg>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}

impl<'a> IntoIterator for &'a PathData {
    type Item = &'a PathSeg;
    type IntoIter = std::slice::Iter<'a, PathSeg>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl FromIterator<PathSeg> for PathData {
    fn from_iter<T: IntoIterator<Item = PathSeg>>(iter: T) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}
