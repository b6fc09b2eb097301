//! Quadratic and cubic bezier curves

use crate::{Point, Scalar};
use std::fmt;

/// Quadratic bezier curve
///
/// Polynimial form:
/// `(1 - t) ^ 2 * p0 + 2 * (1 - t) * t * p1 + t ^ 2 * p2`
#[derive(Clone, Copy, PartialEq)]
pub struct Quad(pub [Point; 3]);

impl fmt::Debug for Quad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Quad([p0, p1, p2]) = self;
        write!(f, "Quad {:?} {:?} {:?}", p0, p1, p2)
    }
}

impl Quad {
    pub fn new(p0: impl Into<Point>, p1: impl Into<Point>, p2: impl Into<Point>) -> Self {
        Self([p0.into(), p1.into(), p2.into()])
    }

    pub fn points(&self) -> [Point; 3] {
        self.0
    }

    pub fn start(&self) -> Point {
        self.0[0]
    }

    pub fn end(&self) -> Point {
        self.0[2]
    }

    pub fn at(&self, t: Scalar) -> Point {
        // at(t) =
        //   (1 - t) ^ 2 * p0 +
        //   2 * (1 - t) * t * p1 +
        //   t ^ 2 * p2
        let Self([p0, p1, p2]) = self;
        let (t1, t_1) = (t, 1.0 - t);
        let (t2, t_2) = (t1 * t1, t_1 * t_1);
        t_2 * p0 + 2.0 * t1 * t_1 * p1 + t2 * p2
    }

    /// Raise the degree of the curve, producing an equivalent cubic
    ///
    /// Control points are pulled two thirds of the way from the respective
    /// end towards the quadratic control point.
    pub fn elevate(&self) -> Cubic {
        let Self([p0, p1, p2]) = *self;
        Cubic([
            p0,
            p0 + 2.0 * (p1 - p0) / 3.0,
            p2 + 2.0 * (p1 - p2) / 3.0,
            p2,
        ])
    }
}

/// Cubic bezier curve
///
/// Polynimial form:
/// `(1 - t) ^ 3 * p0 + 3 * (1 - t) ^ 2 * t * p1 + 3 * (1 - t) * t ^ 2 * p2 + t ^ 3 * p3`
#[derive(Clone, Copy, PartialEq)]
pub struct Cubic(pub [Point; 4]);

impl fmt::Debug for Cubic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Cubic([p0, p1, p2, p3]) = self;
        write!(f, "Cubic {:?} {:?} {:?} {:?}", p0, p1, p2, p3)
    }
}

impl Cubic {
    pub fn new(
        p0: impl Into<Point>,
        p1: impl Into<Point>,
        p2: impl Into<Point>,
        p3: impl Into<Point>,
    ) -> Self {
        Self([p0.into(), p1.into(), p2.into(), p3.into()])
    }

    pub fn points(&self) -> [Point; 4] {
        self.0
    }

    pub fn start(&self) -> Point {
        self.0[0]
    }

    pub fn end(&self) -> Point {
        self.0[3]
    }

    pub fn at(&self, t: Scalar) -> Point {
        // at(t) =
        //   (1 - t) ^ 3 * p0 +
        //   3 * (1 - t) ^ 2 * t * p1 +
        //   3 * (1 - t) * t ^ 2 * p2 +
        //   t ^ 3 * p3
        let Self([p0, p1, p2, p3]) = self;
        let (t1, t_1) = (t, 1.0 - t);
        let (t2, t_2) = (t1 * t1, t_1 * t_1);
        let (t3, t_3) = (t2 * t1, t_2 * t_1);
        t_3 * p0 + 3.0 * t1 * t_2 * p1 + 3.0 * t2 * t_1 * p2 + t3 * p3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;

    #[test]
    fn test_elevate() {
        let quad = Quad::new((0.0, 0.0), (3.0, 6.0), (6.0, 0.0));
        let cubic = quad.elevate();
        let Cubic([p0, p1, p2, p3]) = cubic;
        assert!(p0.is_close_to(quad.start()));
        assert!(p3.is_close_to(quad.end()));
        assert!(p1.is_close_to(Point::new(2.0, 4.0)));
        assert!(p2.is_close_to(Point::new(4.0, 4.0)));

        // elevated curve traces the same points
        for i in 0..16 {
            let t = i as Scalar / 15.0;
            assert_approx_eq!(quad.at(t).dist(cubic.at(t)), 0.0, 1e-12);
        }
    }

    #[test]
    fn test_at() {
        let cubic = Cubic::new((0.0, 0.0), (0.0, 4.0), (4.0, 4.0), (4.0, 0.0));
        assert!(cubic.at(0.0).is_close_to(cubic.start()));
        assert!(cubic.at(1.0).is_close_to(cubic.end()));
        let mid = cubic.at(0.5);
        assert_approx_eq!(mid.x(), 2.0);
        assert_approx_eq!(mid.y(), 3.0);
    }
}
