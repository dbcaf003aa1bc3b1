use num_traits::{One, Zero};

use crate::cartesian::rect::Rect;
use crate::cartesian::traits::cartesian_point::CartesianPoint2d;
use crate::contour::{ClosedContour, Contour};

/// Winding direction of a closed contour.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Winding {
    /// Clockwise.
    Clockwise,
    /// Counterclockwise.
    CounterClockwise,
}

/// Operations on closed contours in 2d cartesian coordinates. Auto-implemented for all [`ClosedContour`] types.
pub trait CartesianClosedContour {
    /// Type of the points of the contour.
    type Point: CartesianPoint2d;

    /// Sum of `(x2 - x1) * (y2 + y1)` over all segments of the contour.
    ///
    /// The sum is non-negative for clockwise contours and negative for counterclockwise ones. It equals the doubled
    /// signed area with the opposite sign.
    fn orientation_sum(&self) -> <Self::Point as CartesianPoint2d>::Num;

    /// Signed area of the contour: positive for counterclockwise contours.
    fn area_signed(&self) -> <Self::Point as CartesianPoint2d>::Num;

    /// Winding direction. Contours with zero [orientation sum](Self::orientation_sum) are clockwise, contours with
    /// a non-comparable sum (NaN coordinates) are counterclockwise.
    fn winding(&self) -> Winding;

    /// Returns true if the `point` lies inside the contour or on its boundary.
    fn contains_point<P>(&self, point: &P) -> bool
    where
        P: CartesianPoint2d<Num = <Self::Point as CartesianPoint2d>::Num>;
}

impl<P, T> CartesianClosedContour for T
where
    P: CartesianPoint2d,
    T: ClosedContour<Point = P>,
{
    type Point = P;

    fn orientation_sum(&self) -> P::Num {
        self.iter_segments()
            .fold(P::Num::zero(), |aggr, segment| {
                aggr + (segment.1.x() - segment.0.x()) * (segment.1.y() + segment.0.y())
            })
    }

    fn area_signed(&self) -> P::Num {
        (P::Num::zero() - self.orientation_sum()) / (P::Num::one() + P::Num::one())
    }

    fn winding(&self) -> Winding {
        if self.orientation_sum() >= P::Num::zero() {
            Winding::Clockwise
        } else {
            Winding::CounterClockwise
        }
    }

    fn contains_point<Point: CartesianPoint2d<Num = P::Num>>(&self, point: &Point) -> bool {
        let mut wn = 0i64;
        let y = point.y();

        for segment in self.iter_segments() {
            if segment.contains_point(point) {
                return true;
            }

            let edge = segment.1.sub(segment.0);
            let to_point = point.sub(segment.0);
            let side = edge.x * to_point.y - to_point.x * edge.y;

            if segment.0.y() <= y {
                if segment.1.y() > y && side > P::Num::zero() {
                    wn += 1;
                }
            } else if segment.1.y() <= y && side < P::Num::zero() {
                wn -= 1;
            }
        }

        wn != 0
    }
}

/// Operations on contours in 2d cartesian coordinates. Auto-implemented for all [`Contour`] types.
pub trait CartesianContour<P: CartesianPoint2d>: Contour<Point = P> {
    /// Bounding rectangle of the contour, `None` for an empty contour.
    fn bounding_rect(&self) -> Option<Rect<P::Num>> {
        Rect::from_points(self.iter_points())
    }

    /// Returns true if the first and the last stored points of the contour are exactly equal.
    fn is_closed(&self) -> bool {
        match (self.iter_points().next(), self.iter_points().last()) {
            (Some(first), Some(last)) => first.equal(last),
            _ => false,
        }
    }

    /// Returns true if the contours, taken as lines, have at least one common point.
    fn intersects<Other>(&self, other: &Other) -> bool
    where
        Self: Sized,
        Other: Contour<Point = P>,
    {
        match (self.bounding_rect(), Rect::from_points(other.iter_points())) {
            (Some(a), Some(b)) if a.intersects(&b) => {}
            _ => return false,
        }

        self.iter_segments()
            .any(|segment| other.iter_segments().any(|o| segment.intersects(&o)))
    }
}

impl<T: Contour<Point = P>, P: CartesianPoint2d> CartesianContour<P> for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::impls::Point2d;
    use crate::impls::LinearRing;

    fn ring(points: &[(f64, f64)]) -> LinearRing<Point2d> {
        LinearRing::new(points.iter().map(|(x, y)| Point2d::new(*x, *y)).collect())
    }

    fn square(x_min: f64, y_min: f64, size: f64) -> LinearRing<Point2d> {
        ring(&[
            (x_min, y_min),
            (x_min + size, y_min),
            (x_min + size, y_min + size),
            (x_min, y_min + size),
            (x_min, y_min),
        ])
    }

    #[test]
    fn orientation_sum() {
        let ccw = square(0.0, 0.0, 1.0);
        assert_eq!(ccw.orientation_sum(), -2.0);
        assert_eq!(ccw.area_signed(), 1.0);
        assert_eq!(ccw.winding(), Winding::CounterClockwise);

        let cw = square(0.0, 0.0, 1.0).reversed();
        assert_eq!(cw.orientation_sum(), 2.0);
        assert_eq!(cw.area_signed(), -1.0);
        assert_eq!(cw.winding(), Winding::Clockwise);
    }

    #[test]
    fn zero_area_is_clockwise() {
        let flat = ring(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (0.0, 0.0)]);
        assert_eq!(flat.orientation_sum(), 0.0);
        assert_eq!(flat.winding(), Winding::Clockwise);
    }

    #[test]
    fn contains_point() {
        let contour = ring(&[(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, 0.0)]);

        assert!(contour.contains_point(&Point2d::new(0.0, 0.0)));
        assert!(contour.contains_point(&Point2d::new(1.0, 1.0)));
        assert!(contour.contains_point(&Point2d::new(0.5, 0.0)));
        assert!(contour.contains_point(&Point2d::new(0.2, 0.1)));
        assert!(!contour.contains_point(&Point2d::new(0.2, 0.3)));
        assert!(!contour.contains_point(&Point2d::new(0.2, -0.3)));
        assert!(!contour.contains_point(&Point2d::new(1.1, 0.0)));
    }

    #[test]
    fn contains_point_does_not_depend_on_winding() {
        let ccw = square(0.0, 0.0, 10.0);
        let cw = square(0.0, 0.0, 10.0).reversed();
        let inside = Point2d::new(3.0, 7.0);
        let outside = Point2d::new(13.0, 7.0);

        assert!(ccw.contains_point(&inside));
        assert!(cw.contains_point(&inside));
        assert!(!ccw.contains_point(&outside));
        assert!(!cw.contains_point(&outside));
    }

    #[test]
    fn contains_point_concave() {
        let u_shape = ring(&[
            (0.0, 0.0),
            (3.0, 0.0),
            (3.0, 3.0),
            (2.0, 3.0),
            (2.0, 1.0),
            (1.0, 1.0),
            (1.0, 3.0),
            (0.0, 3.0),
            (0.0, 0.0),
        ]);

        assert!(u_shape.contains_point(&Point2d::new(0.5, 2.5)));
        assert!(u_shape.contains_point(&Point2d::new(1.5, 0.5)));
        assert!(!u_shape.contains_point(&Point2d::new(1.5, 2.0)));
    }

    #[test]
    fn intersects() {
        let outer = square(0.0, 0.0, 10.0);
        let inner = square(2.0, 2.0, 2.0);
        let crossing = square(8.0, 8.0, 4.0);
        let touching = square(10.0, 0.0, 1.0);
        let far = square(20.0, 20.0, 1.0);

        assert!(!outer.intersects(&inner));
        assert!(outer.intersects(&crossing));
        assert!(outer.intersects(&touching));
        assert!(!outer.intersects(&far));
        assert!(crossing.intersects(&outer));
    }

    #[test]
    fn is_closed() {
        assert!(square(0.0, 0.0, 1.0).is_closed());
        assert!(!ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]).is_closed());
        assert!(!ring(&[]).is_closed());
    }
}
