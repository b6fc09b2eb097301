//! Basic shapes expressed as path data
//!
//! Mirrors the geometry attributes of the SVG shape elements (`<rect>`,
//! `<circle>`, `<ellipse>`, `<line>`, `<polyline>`, `<polygon>`) and converts
//! each of them to the equivalent `PathData`. Conversions always produce
//! absolute segments, optionally reduced to the `M`/`L`/`C`/`Z` subset.
use crate::{PathData, PathSeg, Point, Scalar};

/// Options controlling shape to path data conversion
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathDataOptions {
    /// reduce the output to absolute `M`/`L`/`C`/`Z` segments
    pub normalize: bool,
}

/// Conversion to path data, implemented by all basic shapes
pub trait ToPathData {
    fn to_path_data(&self, options: PathDataOptions) -> PathData;
}

/// Axis-aligned rectangle with optional rounded corners
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: Scalar,
    pub y: Scalar,
    pub width: Scalar,
    pub height: Scalar,
    /// horizontal corner radius, defaults to `ry` when only one is set
    pub rx: Option<Scalar>,
    /// vertical corner radius, defaults to `rx` when only one is set
    pub ry: Option<Scalar>,
}

impl ToPathData for Rect {
    fn to_path_data(&self, options: PathDataOptions) -> PathData {
        let Self {
            x,
            y,
            width,
            height,
            rx,
            ry,
        } = *self;
        let (rx, ry) = match (rx, ry) {
            (None, None) => (0.0, 0.0),
            (Some(rx), None) => (rx, rx),
            (None, Some(ry)) => (ry, ry),
            (Some(rx), Some(ry)) => (rx, ry),
        };
        let rx = if rx > width / 2.0 { width / 2.0 } else { rx };
        let ry = if ry > height / 2.0 { height / 2.0 } else { ry };
        let radii = Point::new(rx, ry);
        let corner = |dst: Point| PathSeg::ArcTo {
            radii,
            x_axis_rot: 0.0,
            large: false,
            sweep: true,
            dst,
        };
        let segments = vec![
            PathSeg::MoveTo(Point::new(x + rx, y)),
            PathSeg::HorizTo(x + width - rx),
            corner(Point::new(x + width, y + ry)),
            PathSeg::VertTo(y + height - ry),
            corner(Point::new(x + width - rx, y + height)),
            PathSeg::HorizTo(x + rx),
            corner(Point::new(x, y + height - ry)),
            PathSeg::VertTo(y + ry),
            corner(Point::new(x + rx, y)),
            PathSeg::Close,
        ];
        let segments = if rx == 0.0 || ry == 0.0 {
            // sharp corners, arcs degenerate to nothing
            segments
                .into_iter()
                .filter(|seg| !matches!(seg, PathSeg::ArcTo { .. }))
                .collect()
        } else {
            segments
        };
        finalize(segments, options)
    }
}

/// Circle centered at `(cx, cy)`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    pub cx: Scalar,
    pub cy: Scalar,
    pub r: Scalar,
}

impl ToPathData for Circle {
    fn to_path_data(&self, options: PathDataOptions) -> PathData {
        let Self { cx, cy, r } = *self;
        finalize(ellipse_segments(cx, cy, r, r), options)
    }
}

/// Ellipse centered at `(cx, cy)`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ellipse {
    pub cx: Scalar,
    pub cy: Scalar,
    pub rx: Scalar,
    pub ry: Scalar,
}

impl ToPathData for Ellipse {
    fn to_path_data(&self, options: PathDataOptions) -> PathData {
        let Self { cx, cy, rx, ry } = *self;
        finalize(ellipse_segments(cx, cy, rx, ry), options)
    }
}

// four quarter arcs swept clockwise starting from the rightmost point
fn ellipse_segments(cx: Scalar, cy: Scalar, rx: Scalar, ry: Scalar) -> Vec<PathSeg> {
    let radii = Point::new(rx, ry);
    let quarter = |dst: Point| PathSeg::ArcTo {
        radii,
        x_axis_rot: 0.0,
        large: false,
        sweep: true,
        dst,
    };
    vec![
        PathSeg::MoveTo(Point::new(cx + rx, cy)),
        quarter(Point::new(cx, cy + ry)),
        quarter(Point::new(cx - rx, cy)),
        quarter(Point::new(cx, cy - ry)),
        quarter(Point::new(cx + rx, cy)),
        PathSeg::Close,
    ]
}

/// Straight line between two points
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    pub x1: Scalar,
    pub y1: Scalar,
    pub x2: Scalar,
    pub y2: Scalar,
}

impl ToPathData for Line {
    fn to_path_data(&self, options: PathDataOptions) -> PathData {
        let Self { x1, y1, x2, y2 } = *self;
        finalize(
            vec![
                PathSeg::MoveTo(Point::new(x1, y1)),
                PathSeg::LineTo(Point::new(x2, y2)),
            ],
            options,
        )
    }
}

/// Open polyline through a list of points
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polyline {
    pub points: Vec<Point>,
}

impl ToPathData for Polyline {
    fn to_path_data(&self, options: PathDataOptions) -> PathData {
        finalize(poly_segments(&self.points, false), options)
    }
}

/// Closed polygon through a list of points
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon {
    pub points: Vec<Point>,
}

impl ToPathData for Polygon {
    fn to_path_data(&self, options: PathDataOptions) -> PathData {
        finalize(poly_segments(&self.points, true), options)
    }
}

fn poly_segments(points: &[Point], close: bool) -> Vec<PathSeg> {
    let mut segments = Vec::with_capacity(points.len() + close as usize);
    for (index, point) in points.iter().enumerate() {
        if index == 0 {
            segments.push(PathSeg::MoveTo(*point));
        } else {
            segments.push(PathSeg::LineTo(*point));
        }
    }
    if close {
        segments.push(PathSeg::Close);
    }
    segments
}

fn finalize(segments: Vec<PathSeg>, options: PathDataOptions) -> PathData {
    let path = PathData::new(segments);
    if options.normalize {
        // segments are already absolute, only curve reduction is left
        path.reduce()
    } else {
        path
    }
}
