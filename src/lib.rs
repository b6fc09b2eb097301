//! Small library for SVG path data parsing and manipulation.
//!
//! Main features:
//!  - Path data parsing with browser style error recovery
//!  - Conversion of relative segments to absolute ones
//!  - Reduction to the `M`/`L`/`C`/`Z` subset, arcs become cubic beziers
//!  - Conversion of the basic SVG shapes to path data
//!
#![deny(warnings)]

mod arc;
mod curve;
mod geometry;
mod parser;
mod path;
mod shape;
mod utils;

pub use arc::{EllipArc, EllipArcCubicIter};
pub use curve::{Cubic, Quad};
pub use geometry::{scalar_fmt, Point, Scalar, Transform, EPSILON, PI};
pub use path::{PathData, PathSeg};
pub use shape::{Circle, Ellipse, Line, PathDataOptions, Polygon, Polyline, Rect, ToPathData};
