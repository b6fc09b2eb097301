use crate::{Cubic, Point, Scalar, Transform, PI};
use std::fmt;

// arcs sweeping more than this angle are subdivided before conversion
const MAX_SWEEP: Scalar = PI * 120.0 / 180.0;

// round to 9 decimal digits to keep fp noise out of the asin domain
fn asin9(value: Scalar) -> Scalar {
    ((value * 1e9).round() / 1e9).asin()
}

/// Elliptical Arc
#[derive(Clone, Copy, PartialEq)]
pub struct EllipArc {
    /// center of the ellipse in the unrotated frame
    center: Point,
    /// radius along x-axis before the rotation
    rx: Scalar,
    /// radius along y-axis before the rotation
    ry: Scalar,
    /// rotation
    phi: Scalar,
    /// angular start
    f1: Scalar,
    /// angular end
    f2: Scalar,
    /// angular direction
    sweep: bool,
    /// requested endpoints in the unrotated frame
    src: Point,
    dst: Point,
}

impl fmt::Debug for EllipArc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Arc center:{:?} radius:{:?} phi:{:.3?} f1:{:.3?} f2:{:.3?}",
            self.center,
            Point([self.rx, self.ry]),
            self.phi,
            self.f1,
            self.f2
        )
    }
}

impl EllipArc {
    /// Convert arc from SVG arguments to the center parameterization
    ///
    /// Radii correction and the choice between the two center candidates follow
    /// (Arc to Parametric)[https://www.w3.org/TR/SVG/implnote.html#ArcImplementationNotes]
    ///
    /// Returns `None` for degenerate arcs (zero radius or coinciding
    /// endpoints), those should be rendered as lines or skipped.
    pub fn new_param(
        src: Point,
        dst: Point,
        rx: Scalar,
        ry: Scalar,
        x_axis_rot: Scalar,
        large_flag: bool,
        sweep_flag: bool,
    ) -> Option<Self> {
        if rx == 0.0 || ry == 0.0 || src == dst {
            return None;
        }
        let phi = x_axis_rot * PI / 180.0;

        // move endpoints into the unrotated frame of the ellipse
        let unrotate = Transform::default().rotate(-phi);
        let src = unrotate.apply(src);
        let dst = unrotate.apply(dst);
        let Point([x1, y1]) = src;
        let Point([x2, y2]) = dst;

        // scale radii up when the chord does not fit between them
        let x = (x1 - x2) / 2.0;
        let y = (y1 - y2) / 2.0;
        let h = (x / rx).powi(2) + (y / ry).powi(2);
        let (rx, ry) = if h > 1.0 {
            let h = h.sqrt();
            (h * rx, h * ry)
        } else {
            (rx, ry)
        };

        // center of the ellipse, the sign picks one of the two candidates
        let sign = if large_flag == sweep_flag { -1.0 } else { 1.0 };
        let rx2 = rx * rx;
        let ry2 = ry * ry;
        let k = sign
            * ((rx2 * ry2 - rx2 * y * y - ry2 * x * x) / (rx2 * y * y + ry2 * x * x))
                .abs()
                .sqrt();
        let cx = k * rx * y / ry + (x1 + x2) / 2.0;
        let cy = k * -ry * x / rx + (y1 + y2) / 2.0;

        // angles of the endpoints on the ellipse, mirrored into the correct
        // quadrant and wrapped to the direction of the sweep
        let f1 = asin9((y1 - cy) / ry);
        let f2 = asin9((y2 - cy) / ry);
        let f1 = if x1 < cx { PI - f1 } else { f1 };
        let f2 = if x2 < cx { PI - f2 } else { f2 };
        let f1 = if f1 < 0.0 { 2.0 * PI + f1 } else { f1 };
        let f2 = if f2 < 0.0 { 2.0 * PI + f2 } else { f2 };
        let f1 = if sweep_flag && f1 > f2 { f1 - 2.0 * PI } else { f1 };
        let f2 = if !sweep_flag && f2 > f1 { f2 - 2.0 * PI } else { f2 };

        Some(Self {
            center: Point::new(cx, cy),
            rx,
            ry,
            phi,
            f1,
            f2,
            sweep: sweep_flag,
            src,
            dst,
        })
    }

    /// Start point of the arc
    pub fn start(&self) -> Point {
        Transform::default().rotate(self.phi).apply(self.src)
    }

    /// End point of the arc
    pub fn end(&self) -> Point {
        Transform::default().rotate(self.phi).apply(self.dst)
    }

    /// Convert elliptic arc to an iterator over Cubic segments
    pub fn to_cubics(&self) -> EllipArcCubicIter {
        EllipArcCubicIter::new(*self)
    }
}

/// Approximate arc with a sequence of cubic bezier curves
///
/// The sweep is walked in slices of at most 120 degrees. Every slice turns
/// into a single cubic with handle lengths `4/3 * r * tan(df / 4)`, the
/// handles sit on the tangents of the slice endpoints. Intermediate slice
/// endpoints are evaluated on the ellipse, the overall start and end points
/// are reproduced from the requested endpoints so they are not distorted by
/// the approximation.
pub struct EllipArcCubicIter {
    arc: EllipArc,
    phi_tr: Transform,
    f: Scalar,
    p: Point,
    done: bool,
}

impl EllipArcCubicIter {
    fn new(arc: EllipArc) -> Self {
        Self {
            phi_tr: Transform::default().rotate(arc.phi),
            f: arc.f1,
            p: arc.src,
            done: false,
            arc,
        }
    }

    // point on the ellipse at the given angle (unrotated frame)
    fn at(&self, f: Scalar) -> Point {
        let Point([cx, cy]) = self.arc.center;
        Point([cx + self.arc.rx * f.cos(), cy + self.arc.ry * f.sin()])
    }
}

impl Iterator for EllipArcCubicIter {
    type Item = Cubic;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let f1 = self.f;
        let p1 = self.p;
        let (f2, p2) = if (self.arc.f2 - f1).abs() > MAX_SWEEP {
            let dir = if self.arc.sweep && self.arc.f2 > f1 {
                1.0
            } else {
                -1.0
            };
            let f2 = f1 + MAX_SWEEP * dir;
            (f2, self.at(f2))
        } else {
            self.done = true;
            (self.arc.f2, self.arc.dst)
        };
        self.f = f2;
        self.p = p2;

        let t = ((f2 - f1) / 4.0).tan();
        let hx = 4.0 / 3.0 * self.arc.rx * t;
        let hy = 4.0 / 3.0 * self.arc.ry * t;
        let c1 = Point([p1.x() - hx * f1.sin(), p1.y() + hy * f1.cos()]);
        let c2 = Point([p2.x() + hx * f2.sin(), p2.y() - hy * f2.cos()]);
        Some(Cubic([
            self.phi_tr.apply(p1),
            self.phi_tr.apply(c1),
            self.phi_tr.apply(c2),
            self.phi_tr.apply(p2),
        ]))
    }
}
